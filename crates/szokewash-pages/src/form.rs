//! Form state controller
//!
//! Holds the raw field values, the per-field error messages and the
//! submitting flag of one form, as [`Signal`]s so views can react to them.
//!
//! ```text
//! idle -> validating -> rejected -> idle
//!                    -> accepted -> submitting -> idle
//! ```
//!
//! A submit started while another is outstanding is refused with
//! [`SubmitOutcome::Busy`]; the controller runs on one thread, so the
//! submitting flag is the only guard needed.

use crate::reactive::Signal;
use std::cell::RefCell;
use std::future::Future;
use szokewash_forms::{FieldErrors, FormData, Schema};

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<T> {
	/// Validation failed; nothing was submitted
	Rejected(FieldErrors),
	/// Another submission is still running
	Busy,
	/// Validation passed and the action ran to completion
	Accepted(T),
}

impl<T> SubmitOutcome<T> {
	pub fn is_rejected(&self) -> bool {
		matches!(self, SubmitOutcome::Rejected(_))
	}

	pub fn accepted(self) -> Option<T> {
		match self {
			SubmitOutcome::Accepted(value) => Some(value),
			_ => None,
		}
	}
}

// Clears the submitting flag however the submission ends.
struct SubmittingGuard<'a> {
	flag: &'a Signal<bool>,
}

impl<'a> SubmittingGuard<'a> {
	fn engage(flag: &'a Signal<bool>) -> Self {
		flag.set(true);
		Self { flag }
	}
}

impl Drop for SubmittingGuard<'_> {
	fn drop(&mut self) {
		self.flag.set(false);
	}
}

/// Values, errors and submission state of one form.
pub struct FormController<S: Schema> {
	schema: RefCell<S>,
	fields: Vec<String>,
	values: Signal<FormData>,
	errors: Signal<FieldErrors>,
	submitting: Signal<bool>,
}

impl<S: Schema> FormController<S> {
	/// Create a controller with every field of `schema` empty.
	pub fn new(schema: S) -> Self {
		let fields: Vec<String> = schema
			.field_names()
			.into_iter()
			.map(str::to_string)
			.collect();
		let values = Signal::new(empty_values(&fields));
		Self {
			schema: RefCell::new(schema),
			fields,
			values,
			errors: Signal::new(FieldErrors::new()),
			submitting: Signal::new(false),
		}
	}

	/// Swap the schema, keeping values and errors.
	///
	/// Used when a rule depends on render-time input such as today's date.
	pub fn set_schema(&self, schema: S) {
		*self.schema.borrow_mut() = schema;
	}

	/// Read the current schema.
	pub fn with_schema<R>(&self, f: impl FnOnce(&S) -> R) -> R {
		f(&self.schema.borrow())
	}

	pub fn field_names(&self) -> &[String] {
		&self.fields
	}

	/// Overwrite one field's value and clear its error.
	///
	/// Names outside the schema are ignored.
	pub fn set_field(&self, name: &str, value: impl Into<String>) {
		if !self.fields.iter().any(|f| f == name) {
			tracing::warn!(field = name, "ignoring value for unknown field");
			return;
		}

		let value = value.into();
		let changed = self.values.with(|values| values.get(name) != Some(&value));
		if changed {
			self.values.update(|values| {
				values.insert(name.to_string(), value);
			});
		}

		if self.errors.get_untracked().contains(name) {
			self.errors.update(|errors| {
				errors.remove(name);
			});
		}
	}

	pub fn value(&self, name: &str) -> String {
		self.values
			.with(|values| values.get(name).cloned())
			.unwrap_or_default()
	}

	/// All current values.
	pub fn values(&self) -> FormData {
		self.values.get()
	}

	pub fn errors(&self) -> FieldErrors {
		self.errors.get()
	}

	pub fn error(&self, name: &str) -> Option<String> {
		self.errors.with(|errors| errors.get(name).map(str::to_string))
	}

	pub fn is_submitting(&self) -> bool {
		self.submitting.get()
	}

	/// The submitting flag, for views that disable the submit control.
	pub fn submitting_signal(&self) -> Signal<bool> {
		self.submitting.clone()
	}

	/// Whether every field is empty and no error is shown.
	pub fn is_pristine(&self) -> bool {
		self.values.with(|values| values.values().all(String::is_empty))
			&& self.errors.with(FieldErrors::is_empty)
	}

	/// Drop every error message, keeping the values.
	pub fn clear_errors(&self) {
		if !self.errors.get_untracked().is_empty() {
			self.errors.set(FieldErrors::new());
		}
	}

	/// Empty every field and drop every error.
	pub fn reset(&self) {
		self.values.set(empty_values(&self.fields));
		self.clear_errors();
	}

	/// Validate the current values and, if they pass, run `action` on the
	/// narrowed output.
	///
	/// On rejection the error map is replaced by the new violations and
	/// `action` is not called. On acceptance the errors are cleared and the
	/// submitting flag is held for exactly as long as `action` runs.
	pub async fn submit<F, Fut, T>(&self, action: F) -> SubmitOutcome<T>
	where
		F: FnOnce(S::Output) -> Fut,
		Fut: Future<Output = T>,
	{
		if self.submitting.get_untracked() {
			tracing::debug!("submit ignored, previous submission still running");
			return SubmitOutcome::Busy;
		}

		let data = self.values.get_untracked();
		let validated = self.schema.borrow().validate(&data);
		let output = match validated {
			Ok(output) => output,
			Err(errors) => {
				tracing::warn!(
					fields = ?errors.fields().collect::<Vec<_>>(),
					"submission rejected by validation"
				);
				self.errors.set(errors.clone());
				return SubmitOutcome::Rejected(errors);
			}
		};

		self.clear_errors();
		let _guard = SubmittingGuard::engage(&self.submitting);
		tracing::debug!("submitting");
		SubmitOutcome::Accepted(action(output).await)
	}
}

fn empty_values(fields: &[String]) -> FormData {
	fields
		.iter()
		.map(|name| (name.clone(), String::new()))
		.collect()
}
