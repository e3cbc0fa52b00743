//! Email field

use crate::field::{ErrorMessages, ErrorType, FieldError, FieldResult, FormField, Widget};
use crate::form::CleanedValue;
use crate::validators::EmailValidator;

/// Email address field: trimmed, syntax-checked, optionally length-capped
#[derive(Debug, Clone)]
pub struct EmailField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub max_length: Option<usize>,
	pub error_messages: ErrorMessages,
}

impl EmailField {
	/// Create a new required EmailField
	///
	/// # Examples
	///
	/// ```
	/// use szokewash_forms::{EmailField, FormField};
	///
	/// let field = EmailField::new("email");
	/// assert!(field.required);
	/// assert!(field.clean(Some(" info@szokewash.hu ")).is_ok());
	/// assert!(field.clean(Some("not-an-email")).is_err());
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: true,
			widget: Widget::EmailInput,
			max_length: None,
			error_messages: ErrorMessages::new(),
		}
	}

	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_error_message(mut self, error_type: ErrorType, message: impl Into<String>) -> Self {
		self.error_messages.set(error_type, message);
		self
	}
}

impl FormField for EmailField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.required
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn clean(&self, value: Option<&str>) -> FieldResult<CleanedValue> {
		let value = value.map(str::trim).unwrap_or_default();
		if value.is_empty() {
			if self.required {
				// An empty address is reported as malformed unless a
				// dedicated "required" message was configured.
				let invalid = self
					.error_messages
					.get_or(ErrorType::Invalid, || "Enter a valid email address".to_string());
				return Err(FieldError::Required(
					self.error_messages.get_or(ErrorType::Required, || invalid),
				));
			}
			return Ok(CleanedValue::Empty);
		}

		let validator = EmailValidator::new().with_message(
			self.error_messages
				.get_or(ErrorType::Invalid, || "Enter a valid email address".to_string()),
		);
		validator.validate(value)?;

		let char_count = value.chars().count();
		if let Some(max_length) = self.max_length
			&& char_count > max_length
		{
			return Err(FieldError::Validation(self.error_messages.get_or(
				ErrorType::MaxLength,
				|| format!("Ensure this value has at most {} characters", max_length),
			)));
		}

		Ok(CleanedValue::Text(value.to_string()))
	}
}
