//! Form processing and validation for the Szőke Wash site
//!
//! This crate provides the validation layer shared by every form on the site:
//! - Field types with trimming, length limits and pattern validators
//! - A generic [`Form`] that cleans a whole submission in one pass and
//!   reports every invalid field at once
//! - Typed schemas ([`AuthSchema`], [`ContactSchema`], [`BookingSchema`])
//!   that narrow accepted input into strongly typed records

pub mod field;
pub mod fields;
pub mod form;
pub mod schema;
pub mod schemas;
pub mod validators;

pub use field::{ErrorMessages, ErrorType, FieldError, FieldResult, FormField, Widget};
pub use fields::{CharField, ChoiceField, DateField, EmailField, TimeField};
pub use form::{CleanedData, CleanedValue, FieldErrors, Form, FormData};
pub use schema::Schema;
pub use schemas::{
	AuthSchema, BookingRecord, BookingSchema, ContactMessage, ContactSchema, Credentials,
	ServiceType,
};
pub use validators::{EmailValidator, RegexValidator};
