//! # Szőke Wash
//!
//! Forms, session handling and page controllers for the Szőke Wash car
//! detailing site.
//!
//! The site is a handful of static pages plus three interactive ones:
//! sign-in/sign-up, appointment booking and the contact form. This crate
//! re-exports the pieces they are built from.
//!
//! ## Crates
//!
//! - [`conf`] - settings loaded from TOML and `SZOKEWASH_*` environment variables
//! - [`forms`] - field validation and the typed auth, contact and booking schemas
//! - [`client`] - the session client for the hosted auth/storage backend (feature `client`)
//! - [`pages`] - reactive form state, session provider and page controllers (feature `pages`)
//!
//! ## Feature Flags
//!
//! - `full` (default) - everything
//! - `client` - session client only
//! - `pages` - page controllers, implies `client`
//! - `testing` - the in-memory `MockSessionClient`
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use szokewash::prelude::*;
//!
//! let settings = Settings::load(Some(Path::new("szokewash.toml")))?;
//! let client: Rc<dyn SessionClient> = Rc::new(RestClient::new(&settings.backend)?);
//!
//! let provider = SessionProvider::init(client.clone());
//! provider.resolve().await;
//!
//! let ctx = PageContext::new(client, Rc::new(History::new(Route::Booking)), Toaster::new())
//!     .with_site(&settings.site);
//! let booking = BookingPage::mount(ctx, Rc::new(SystemClock))?;
//! match booking.view() {
//!     BookingView::Form(form) => println!("{} fields", form.fields.len()),
//!     other => println!("{other:?}"),
//! }
//! ```

pub mod conf;
pub mod forms;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "pages")]
pub mod pages;

// Re-export settings
pub use szokewash_conf::{Settings, SettingsError};

// Re-export validation
pub use szokewash_forms::{
	AuthSchema, BookingRecord, BookingSchema, ContactMessage, ContactSchema, Credentials,
	FieldErrors, FormData, Schema, ServiceType,
};

// Re-export the session client
#[cfg(feature = "client")]
pub use szokewash_client::{
	AuthError, AuthEvent, RestClient, Session, SessionClient, StorageError,
};

#[cfg(feature = "testing")]
pub use szokewash_client::MockSessionClient;

// Re-export page controllers
#[cfg(feature = "pages")]
pub use szokewash_pages::{
	AuthPage, BookingPage, ContactPage, FormController, History, Navigator, PageContext,
	PageError, Route, SessionProvider, SubmitOutcome, Toaster,
};

// Re-export common external dependencies
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};

/// Prelude module for convenient imports
///
/// Import everything commonly needed with:
/// ```rust,ignore
/// use szokewash::prelude::*;
/// ```
pub mod prelude {
	pub use crate::conf::{BackendSettings, Settings, SiteSettings};
	pub use crate::forms::{
		AuthSchema, BookingRecord, BookingSchema, ContactMessage, ContactSchema, Credentials,
		FieldErrors, FormData, Schema, ServiceType,
	};

	#[cfg(feature = "client")]
	pub use crate::client::{
		AuthError, AuthEvent, RestClient, Session, SessionClient, StorageError,
	};

	#[cfg(feature = "pages")]
	pub use crate::pages::{
		AuthMode, AuthPage, BookingPage, BookingView, Clock, ContactPage, ContactView,
		FormController, History, LogTransport, Navigator, PageContext, PageError, Route,
		SessionProvider, SessionState, SubmitOutcome, SystemClock, Toast, Toaster, use_session,
	};

	// External
	pub use async_trait::async_trait;
	pub use serde::{Deserialize, Serialize};
	pub use std::path::Path;
	pub use std::rc::Rc;
}
