//! Typed validation schemas

use crate::form::{CleanedData, FieldErrors, Form, FormData};

/// A form whose accepted input narrows into a typed record.
///
/// Implementors describe their fields as a [`Form`] and convert the cleaned
/// values into [`Schema::Output`]. Validation checks every field in one pass,
/// so a rejection carries a message for each invalid field.
pub trait Schema {
	type Output;

	/// The fields checked by this schema.
	fn form(&self) -> &Form;

	/// Convert values that passed cleaning into the typed record.
	fn narrow(&self, cleaned: CleanedData) -> Result<Self::Output, FieldErrors>;

	/// Names of the fields this schema reads, in declaration order.
	fn field_names(&self) -> Vec<&str> {
		self.form().field_names()
	}

	/// Validate a raw submission.
	fn validate(&self, data: &FormData) -> Result<Self::Output, FieldErrors> {
		let cleaned = self.form().clean(data)?;
		self.narrow(cleaned)
	}
}
