use crate::field::{ErrorMessages, ErrorType, FieldError, FieldResult, FormField, Widget};
use crate::form::CleanedValue;
use chrono::NaiveTime;

/// TimeField for `<input type="time">` values (`HH:MM`, optionally with seconds)
pub struct TimeField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub input_formats: Vec<String>,
	pub error_messages: ErrorMessages,
}

impl TimeField {
	/// # Examples
	///
	/// ```
	/// use szokewash_forms::{FormField, TimeField};
	///
	/// let field = TimeField::new("appointment_time");
	/// assert!(field.clean(Some("09:30")).is_ok());
	/// assert!(field.clean(Some("25:00")).is_err());
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: true,
			widget: Widget::TimeInput,
			input_formats: vec!["%H:%M".to_string(), "%H:%M:%S".to_string()],
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
}

impl FormField for TimeField {
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
		let s = value.map(str::trim).unwrap_or_default();
		if s.is_empty() {
			if self.required {
				return Err(FieldError::Required(self.error_messages.get_or(
					ErrorType::Required,
					|| "This field is required.".to_string(),
				)));
			}
			return Ok(CleanedValue::Empty);
		}

		self.input_formats
			.iter()
			.find_map(|format| NaiveTime::parse_from_str(s, format).ok())
			.map(CleanedValue::Time)
			.ok_or_else(|| {
				FieldError::Invalid(
					self.error_messages
						.get_or(ErrorType::Invalid, || "Enter a valid time".to_string()),
				)
			})
	}
}
