use crate::field::{ErrorMessages, ErrorType, FieldError, FieldResult, FormField, Widget};
use crate::form::CleanedValue;
use chrono::{Datelike, NaiveDate};

/// DateField for `<input type="date">` values
pub struct DateField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub input_formats: Vec<String>,
	/// Earliest accepted date, inclusive
	pub min_date: Option<NaiveDate>,
	pub error_messages: ErrorMessages,
}

impl DateField {
	/// Create a new DateField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use szokewash_forms::fields::DateField;
	///
	/// let field = DateField::new("appointment_date");
	/// assert_eq!(field.name, "appointment_date");
	/// assert!(field.required);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: true,
			widget: Widget::DateInput,
			input_formats: vec![
				"%Y-%m-%d".to_string(), // 2025-01-15, what date inputs submit
				"%Y.%m.%d".to_string(), // 2025.01.15
			],
			min_date: None,
			error_messages: ErrorMessages::new(),
		}
	}

	/// Reject dates earlier than `min_date`
	///
	/// # Examples
	///
	/// ```
	/// use chrono::NaiveDate;
	/// use szokewash_forms::{DateField, FormField};
	///
	/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
	/// let field = DateField::new("date").with_min_date(today);
	/// assert!(field.clean(Some("2025-06-01")).is_ok());
	/// assert!(field.clean(Some("2025-05-31")).is_err());
	/// ```
	pub fn with_min_date(mut self, min_date: NaiveDate) -> Self {
		self.min_date = Some(min_date);
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

	fn parse_date(&self, s: &str) -> Option<NaiveDate> {
		for format in &self.input_formats {
			if let Ok(date) = NaiveDate::parse_from_str(s, format) {
				// Reject dates with years outside the 4-digit range (1000-9999)
				if !(1000..=9999).contains(&date.year()) {
					continue;
				}
				return Some(date);
			}
		}
		None
	}
}

impl FormField for DateField {
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

		let date = self.parse_date(s).ok_or_else(|| {
			FieldError::Invalid(
				self.error_messages
					.get_or(ErrorType::Invalid, || "Enter a valid date".to_string()),
			)
		})?;

		if let Some(min_date) = self.min_date
			&& date < min_date
		{
			return Err(FieldError::Validation(self.error_messages.get_or(
				ErrorType::MinValue,
				|| format!("Ensure this date is on or after {}", min_date),
			)));
		}

		Ok(CleanedValue::Date(date))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn day(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	#[rstest]
	#[case("2025-01-15", day(2025, 1, 15))]
	#[case(" 2025.03.01 ", day(2025, 3, 1))]
	fn test_date_field_parses(#[case] input: &str, #[case] expected: NaiveDate) {
		let field = DateField::new("date");

		assert_eq!(field.clean(Some(input)).unwrap(), CleanedValue::Date(expected));
	}

	#[rstest]
	#[case("15/01/2025")]
	#[case("2025-02-30")]
	#[case("0025-01-01")]
	#[case("tomorrow")]
	fn test_date_field_rejects_invalid(#[case] input: &str) {
		let field = DateField::new("date");

		assert!(matches!(field.clean(Some(input)), Err(FieldError::Invalid(_))));
	}

	#[rstest]
	fn test_date_field_min_date_is_inclusive() {
		// Arrange
		let field = DateField::new("date")
			.with_min_date(day(2025, 6, 10))
			.with_error_message(ErrorType::MinValue, "múltbeli");

		// Act & Assert
		assert!(field.clean(Some("2025-06-10")).is_ok());
		assert!(field.clean(Some("2025-06-11")).is_ok());
		assert_eq!(field.clean(Some("2025-06-09")).unwrap_err().message(), "múltbeli");
	}

	#[rstest]
	fn test_date_field_required() {
		let field = DateField::new("date").with_error_message(ErrorType::Required, "Válasszon dátumot");

		assert_eq!(field.clean(None).unwrap_err().message(), "Válasszon dátumot");
	}
}
