//! # Szőke Wash page controllers
//!
//! Rendering-agnostic controllers for the site's interactive pages:
//!
//! - [`AuthPage`]: sign-in and sign-up, redirecting home once a session exists
//! - [`BookingPage`]: appointment booking, only available with a session
//! - [`ContactPage`]: the contact form
//!
//! Each controller owns a [`FormController`] holding field values, per-field
//! errors and a submitting flag in reactive [`Signal`](reactive::Signal)s.
//! Rendering is reduced to plain view structs in [`views`] that a template
//! layer can serialize.
//!
//! Session state is shared through [`SessionProvider`], which is mounted once
//! at the application root and read by pages via [`use_session`].
//!
//! ## Example
//!
//! ```ignore
//! use szokewash_pages::*;
//!
//! let provider = SessionProvider::init(client.clone());
//! provider.resolve().await;
//!
//! let ctx = PageContext::new(client, Rc::new(History::new(Route::Auth)), Toaster::new());
//! let page = AuthPage::mount(ctx)?;
//! page.set_field("email", "vendeg@example.hu");
//! page.set_field("password", "titkos123");
//! page.submit().await;
//! ```

pub mod app;
pub mod clock;
pub mod content;
pub mod error;
pub mod form;
pub mod pages;
pub mod reactive;
pub mod router;
pub mod session;
pub mod toast;
pub mod views;

pub use app::PageContext;
pub use clock::{Clock, FixedClock, SystemClock};
pub use content::{CONTACT_DETAILS, ContactDetail, SERVICES, ServiceInfo};
pub use error::PageError;
pub use form::{FormController, SubmitOutcome};
pub use pages::{
	AuthMode, AuthPage, BookingForm, BookingPage, ContactError, ContactPage, ContactTransport,
	LogTransport,
};
pub use router::{History, Navigator, Route};
pub use session::{SessionProvider, SessionState, use_session};
pub use toast::{Toast, ToastVariant, Toaster};
pub use views::{AuthView, BookingFormView, BookingView, ContactView, FieldView, ServiceOption};
