//! # Szőke Wash session client
//!
//! A thin facade over the hosted auth/storage backend. Pages talk to it
//! through the [`SessionClient`] trait:
//!
//! - sign-in, sign-up and sign-out
//! - current session lookup, plus a change stream via [`SessionClient::subscribe`]
//! - inserting booking records
//!
//! [`RestClient`] speaks the backend's REST API; `MockSessionClient`
//! (feature `testing`) keeps everything in memory and records calls.
//!
//! Nothing here retries: every failure is returned to the caller once.

pub mod client;
pub mod error;
#[cfg(any(test, feature = "testing"))]
pub mod mock;
pub mod rest;
pub mod session;

pub use client::{AuthListener, AuthListeners, SessionClient, Subscription};
pub use error::{AuthError, ClientError, StorageError};
#[cfg(any(test, feature = "testing"))]
pub use mock::{Call, MockSessionClient};
pub use rest::RestClient;
pub use session::{AuthEvent, Session};
