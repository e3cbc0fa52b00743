//! Page controllers

pub mod auth;
pub mod booking;
pub mod contact;

pub use auth::{AuthMode, AuthPage};
pub use booking::{BookingForm, BookingPage};
pub use contact::{ContactError, ContactPage, ContactTransport, LogTransport};
