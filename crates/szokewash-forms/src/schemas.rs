//! Schemas for the site's forms

pub mod auth;
pub mod booking;
pub mod contact;

pub use auth::{AuthSchema, Credentials};
pub use booking::{BookingRecord, BookingSchema, ServiceType};
pub use contact::{ContactMessage, ContactSchema};
