//! Single-choice field backed by a fixed list of options

use crate::field::{ErrorMessages, ErrorType, FieldError, FieldResult, FormField, Widget};
use crate::form::CleanedValue;

/// Field whose value must be one of a fixed set of `(value, label)` pairs
#[derive(Debug, Clone)]
pub struct ChoiceField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub choices: Vec<(String, String)>,
	pub error_messages: ErrorMessages,
}

impl ChoiceField {
	/// Create a new required ChoiceField
	///
	/// # Examples
	///
	/// ```
	/// use szokewash_forms::{ChoiceField, FormField};
	///
	/// let field = ChoiceField::new("size", vec![("s".into(), "Small".into())]);
	/// assert!(field.clean(Some("s")).is_ok());
	/// assert!(field.clean(Some("xl")).is_err());
	/// ```
	pub fn new(name: impl Into<String>, choices: Vec<(String, String)>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: true,
			widget: Widget::Select,
			choices,
			error_messages: ErrorMessages::new(),
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_error_message(mut self, error_type: ErrorType, message: impl Into<String>) -> Self {
		self.error_messages.set(error_type, message);
		self
	}

	fn valid_value(&self, value: &str) -> bool {
		self.choices.iter().any(|(v, _)| v == value)
	}
}

impl FormField for ChoiceField {
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
				return Err(FieldError::Required(self.error_messages.get_or(
					ErrorType::Required,
					|| "This field is required.".to_string(),
				)));
			}
			return Ok(CleanedValue::Empty);
		}

		if !self.valid_value(value) {
			return Err(FieldError::Invalid(self.error_messages.get_or(
				ErrorType::InvalidChoice,
				|| {
					format!(
						"Select a valid choice. {} is not one of the available choices.",
						value
					)
				},
			)));
		}

		Ok(CleanedValue::Text(value.to_string()))
	}
}
