//! Character field for text input

use crate::field::{ErrorMessages, ErrorType, FieldError, FieldResult, FormField, Widget};
use crate::form::CleanedValue;
use crate::validators::RegexValidator;

/// Character field with length and pattern validation
#[derive(Debug, Clone)]
pub struct CharField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub max_length: Option<usize>,
	pub min_length: Option<usize>,
	pub strip: bool,
	pub validators: Vec<RegexValidator>,
	pub error_messages: ErrorMessages,
}

impl CharField {
	/// Create a new CharField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use szokewash_forms::fields::CharField;
	///
	/// let field = CharField::new("customer_name");
	/// assert_eq!(field.name, "customer_name");
	/// assert!(!field.required);
	/// assert_eq!(field.max_length, None);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: false,
			widget: Widget::TextInput,
			max_length: None,
			min_length: None,
			strip: true,
			validators: Vec::new(),
			error_messages: ErrorMessages::new(),
		}
	}

	/// Set the field as required
	///
	/// # Examples
	///
	/// ```
	/// use szokewash_forms::fields::CharField;
	///
	/// let field = CharField::new("name").required();
	/// assert!(field.required);
	/// ```
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widget = widget;
		self
	}

	/// Add a pattern validator, run after the length checks.
	pub fn with_validator(mut self, validator: RegexValidator) -> Self {
		self.validators.push(validator);
		self
	}

	/// Override the message reported for `error_type`.
	///
	/// # Examples
	///
	/// ```
	/// use szokewash_forms::{CharField, ErrorType, FormField};
	///
	/// let field = CharField::new("name")
	///     .required()
	///     .with_error_message(ErrorType::Required, "Név megadása kötelező");
	/// assert_eq!(field.clean(None).unwrap_err().message(), "Név megadása kötelező");
	/// ```
	pub fn with_error_message(mut self, error_type: ErrorType, message: impl Into<String>) -> Self {
		self.error_messages.set(error_type, message);
		self
	}

	/// Disable whitespace stripping for the field
	pub fn no_strip(mut self) -> Self {
		self.strip = false;
		self
	}
}

impl FormField for CharField {
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
		let value = value.map(|v| if self.strip { v.trim() } else { v });

		let value = match value {
			Some(v) if !v.is_empty() => v,
			_ => {
				if self.required {
					return Err(FieldError::Required(self.error_messages.get_or(
						ErrorType::Required,
						|| "This field is required.".to_string(),
					)));
				}
				return Ok(CleanedValue::Empty);
			}
		};

		// Character count, not bytes: accented Hungarian letters are multi-byte
		let char_count = value.chars().count();
		if let Some(max_length) = self.max_length
			&& char_count > max_length
		{
			return Err(FieldError::Validation(self.error_messages.get_or(
				ErrorType::MaxLength,
				|| {
					format!(
						"Ensure this value has at most {} characters (it has {})",
						max_length, char_count
					)
				},
			)));
		}

		if let Some(min_length) = self.min_length
			&& char_count < min_length
		{
			return Err(FieldError::Validation(self.error_messages.get_or(
				ErrorType::MinLength,
				|| {
					format!(
						"Ensure this value has at least {} characters (it has {})",
						min_length, char_count
					)
				},
			)));
		}

		for validator in &self.validators {
			validator.validate(value)?;
		}

		Ok(CleanedValue::Text(value.to_string()))
	}
}
