//! Pattern validators for form fields
//!
//! Validators run after a field's own length checks and report the first
//! failing rule as a [`FieldError::Validation`].

use crate::field::{FieldError, FieldResult};
use regex::Regex;
use std::sync::LazyLock;

// Person name: Unicode letters, whitespace, apostrophe and hyphen.
pub(crate) static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[\p{L}\s'-]+$").expect("NAME_REGEX: invalid regex pattern")
});

// Phone number: optional leading `+`, then digits, spaces and hyphens.
pub(crate) static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(\+?[0-9\s-]*)?$").expect("PHONE_REGEX: invalid regex pattern")
});

// Email address.
//
// - Local part: dot-separated atoms, no leading/trailing/double dots
// - Domain labels must not start or end with a hyphen
// - Top-level domain is at least two letters
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*@([A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
	)
	.expect("EMAIL_REGEX: invalid regex pattern")
});

/// Validates that a value matches a regular expression.
///
/// # Examples
///
/// ```
/// use regex::Regex;
/// use szokewash_forms::validators::RegexValidator;
///
/// let validator = RegexValidator::new(Regex::new("^[A-Z]{3}$").unwrap(), "Three capitals");
/// assert!(validator.validate("ABC").is_ok());
/// assert_eq!(validator.validate("abc").unwrap_err().message(), "Three capitals");
/// ```
#[derive(Debug, Clone)]
pub struct RegexValidator {
	regex: Regex,
	message: String,
}

impl RegexValidator {
	pub fn new(regex: Regex, message: impl Into<String>) -> Self {
		Self {
			regex,
			message: message.into(),
		}
	}

	/// Letters (any script), spaces, apostrophes and hyphens only.
	pub fn person_name(message: impl Into<String>) -> Self {
		Self::new(NAME_REGEX.clone(), message)
	}

	/// Optional leading `+`, digits, spaces and hyphens.
	pub fn phone(message: impl Into<String>) -> Self {
		Self::new(PHONE_REGEX.clone(), message)
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if self.regex.is_match(value) {
			Ok(())
		} else {
			Err(FieldError::Validation(self.message.clone()))
		}
	}
}

/// Validates email address syntax.
///
/// # Examples
///
/// ```
/// use szokewash_forms::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("info@szokewash.hu").is_ok());
/// assert!(validator.validate("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailValidator {
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Enter a valid email address");
			Err(FieldError::Invalid(msg.to_string()))
		}
	}
}
