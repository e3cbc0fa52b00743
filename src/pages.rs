//! Page controllers
//!
//! Reactive form state, the site-wide session provider, routing, toasts
//! and the auth, booking and contact page controllers.

#[cfg(feature = "pages")]
pub use szokewash_pages::*;
