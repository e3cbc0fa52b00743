//! Field trait and shared field types

use std::collections::HashMap;

/// Error produced while cleaning a single field.
///
/// The payload is always the user-facing message, so the form can show it
/// next to the input without further translation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("{0}")]
	Required(String),
	#[error("{0}")]
	Invalid(String),
	#[error("{0}")]
	Validation(String),
}

impl FieldError {
	/// The message shown to the user.
	pub fn message(&self) -> &str {
		match self {
			FieldError::Required(msg) | FieldError::Invalid(msg) | FieldError::Validation(msg) => {
				msg
			}
		}
	}
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Kinds of failure a field can report, used to look up custom messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
	Required,
	Invalid,
	MinLength,
	MaxLength,
	InvalidChoice,
	MinValue,
}

/// Per-field overrides for the default error messages.
///
/// # Examples
///
/// ```
/// use szokewash_forms::{ErrorMessages, ErrorType};
///
/// let mut messages = ErrorMessages::new();
/// messages.set(ErrorType::Required, "Kötelező mező");
/// assert_eq!(messages.get_or(ErrorType::Required, || "fallback".into()), "Kötelező mező");
/// assert_eq!(messages.get_or(ErrorType::Invalid, || "fallback".into()), "fallback");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ErrorMessages(HashMap<ErrorType, String>);

impl ErrorMessages {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set(&mut self, error_type: ErrorType, message: impl Into<String>) {
		self.0.insert(error_type, message.into());
	}

	/// Returns the custom message for `error_type`, or builds the default.
	pub fn get_or(&self, error_type: ErrorType, default: impl FnOnce() -> String) -> String {
		self.0.get(&error_type).cloned().unwrap_or_else(default)
	}
}

/// Input widget the field is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
	TextInput,
	PasswordInput,
	EmailInput,
	TelInput,
	TextArea,
	Select,
	DateInput,
	TimeInput,
}

impl Widget {
	/// HTML `type` attribute for `<input>` widgets.
	pub fn input_type(&self) -> Option<&'static str> {
		match self {
			Widget::TextInput => Some("text"),
			Widget::PasswordInput => Some("password"),
			Widget::EmailInput => Some("email"),
			Widget::TelInput => Some("tel"),
			Widget::DateInput => Some("date"),
			Widget::TimeInput => Some("time"),
			Widget::TextArea | Widget::Select => None,
		}
	}
}

/// A named form input that knows how to clean its raw string value.
pub trait FormField: Send + Sync {
	fn name(&self) -> &str;

	fn label(&self) -> Option<&str>;

	fn required(&self) -> bool;

	fn widget(&self) -> &Widget;

	/// Clean the raw value.
	///
	/// `None` means the field was absent from the submission. Returns
	/// [`CleanedValue::Empty`](crate::CleanedValue::Empty) for an optional
	/// field left blank.
	fn clean(&self, value: Option<&str>) -> FieldResult<crate::CleanedValue>;
}
