use crate::field::FormField;
use chrono::{NaiveDate, NaiveTime};
use std::collections::{BTreeMap, HashMap};

/// Raw submission: field name to the string the user typed.
pub type FormData = HashMap<String, String>;

/// A field value after cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanedValue {
	/// Optional field left blank
	Empty,
	Text(String),
	Date(NaiveDate),
	Time(NaiveTime),
}

impl CleanedValue {
	pub fn as_text(&self) -> Option<&str> {
		match self {
			CleanedValue::Text(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_date(&self) -> Option<NaiveDate> {
		match self {
			CleanedValue::Date(d) => Some(*d),
			_ => None,
		}
	}

	pub fn as_time(&self) -> Option<NaiveTime> {
		match self {
			CleanedValue::Time(t) => Some(*t),
			_ => None,
		}
	}

	pub fn is_empty(&self) -> bool {
		matches!(self, CleanedValue::Empty)
	}
}

/// Values of every field that passed cleaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedData(HashMap<String, CleanedValue>);

impl CleanedData {
	pub fn get(&self, name: &str) -> Option<&CleanedValue> {
		self.0.get(name)
	}

	/// Text value of `name`, or an empty string when blank or absent.
	pub fn text(&self, name: &str) -> String {
		self.optional_text(name).unwrap_or_default()
	}

	/// Text value of `name`, `None` when the optional field was left blank.
	pub fn optional_text(&self, name: &str) -> Option<String> {
		self.get(name)
			.and_then(CleanedValue::as_text)
			.map(str::to_string)
	}

	pub fn date(&self, name: &str) -> Option<NaiveDate> {
		self.get(name).and_then(CleanedValue::as_date)
	}

	pub fn time(&self, name: &str) -> Option<NaiveTime> {
		self.get(name).and_then(CleanedValue::as_time)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// Field name to the user-facing message for that field.
///
/// An empty map means no errors are shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record an error for `field`; the first message for a field wins.
	pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
		self.0.entry(field.into()).or_insert_with(|| message.into());
	}

	/// Error map holding a single entry.
	pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
		let mut errors = Self::new();
		errors.insert(field, message);
		errors
	}

	pub fn get(&self, field: &str) -> Option<&str> {
		self.0.get(field).map(String::as_str)
	}

	pub fn contains(&self, field: &str) -> bool {
		self.0.contains_key(field)
	}

	pub fn remove(&mut self, field: &str) -> Option<String> {
		self.0.remove(field)
	}

	pub fn clear(&mut self) {
		self.0.clear();
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Names of the fields with errors, in sorted order.
	pub fn fields(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

impl std::fmt::Display for FieldErrors {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let parts: Vec<String> = self.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
		write!(f, "{}", parts.join("; "))
	}
}

impl std::error::Error for FieldErrors {}

impl FromIterator<(String, String)> for FieldErrors {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		let mut errors = Self::new();
		for (field, message) in iter {
			errors.insert(field, message);
		}
		errors
	}
}

/// An ordered collection of fields that cleans a whole submission.
///
/// Cleaning never stops at the first bad field: every field is checked
/// and every violation is reported, keyed by field name.
pub struct Form {
	fields: Vec<Box<dyn FormField>>,
}

impl Form {
	/// Create a new empty form
	///
	/// # Examples
	///
	/// ```
	/// use szokewash_forms::Form;
	///
	/// let form = Form::new();
	/// assert!(form.fields().is_empty());
	/// ```
	pub fn new() -> Self {
		Self { fields: vec![] }
	}

	pub fn add_field(&mut self, field: Box<dyn FormField>) {
		self.fields.push(field);
	}

	/// Builder-style [`add_field`](Self::add_field).
	pub fn with_field(mut self, field: impl FormField + 'static) -> Self {
		self.add_field(Box::new(field));
		self
	}

	pub fn fields(&self) -> &[Box<dyn FormField>] {
		&self.fields
	}

	pub fn field_names(&self) -> Vec<&str> {
		self.fields.iter().map(|f| f.name()).collect()
	}

	pub fn get_field(&self, name: &str) -> Option<&dyn FormField> {
		self.fields
			.iter()
			.find(|f| f.name() == name)
			.map(|f| f.as_ref())
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	/// Clean every field of `data`.
	///
	/// # Examples
	///
	/// ```
	/// use szokewash_forms::{CharField, EmailField, Form, FormData};
	///
	/// let form = Form::new()
	///     .with_field(CharField::new("name").required())
	///     .with_field(EmailField::new("email"));
	///
	/// let mut data = FormData::new();
	/// data.insert("email".to_string(), "nope".to_string());
	///
	/// let errors = form.clean(&data).unwrap_err();
	/// assert!(errors.contains("name"));
	/// assert!(errors.contains("email"));
	/// ```
	pub fn clean(&self, data: &FormData) -> Result<CleanedData, FieldErrors> {
		let mut cleaned = HashMap::new();
		let mut errors = FieldErrors::new();

		for field in &self.fields {
			let value = data.get(field.name()).map(String::as_str);
			match field.clean(value) {
				Ok(value) => {
					cleaned.insert(field.name().to_string(), value);
				}
				Err(e) => {
					errors.insert(field.name(), e.message());
				}
			}
		}

		if errors.is_empty() {
			Ok(CleanedData(cleaned))
		} else {
			Err(errors)
		}
	}
}

impl Default for Form {
	fn default() -> Self {
		Self::new()
	}
}
