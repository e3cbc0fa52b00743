//! Session client
//!
//! Sign-in, sign-up, sign-out, session lookup and booking inserts against
//! the hosted backend, behind the `SessionClient` trait.

#[cfg(feature = "client")]
pub use szokewash_client::*;
