//! Render models
//!
//! Pages describe what to show as plain data; turning these into markup is
//! the presentation layer's job.

use crate::content::ContactDetail;
use crate::form::FormController;
use crate::router::Route;
use chrono::NaiveDate;
use serde::Serialize;
use szokewash_forms::{Schema, ServiceType, Widget};

/// One input of a form, with its current value and error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
	pub name: String,
	pub label: String,
	pub widget: Widget,
	pub required: bool,
	pub value: String,
	pub error: Option<String>,
}

/// Describe every field of `form` in schema order.
pub fn field_views<S: Schema>(form: &FormController<S>) -> Vec<FieldView> {
	form.with_schema(|schema| {
		schema
			.form()
			.fields()
			.iter()
			.map(|field| FieldView {
				name: field.name().to_string(),
				label: field.label().unwrap_or(field.name()).to_string(),
				widget: *field.widget(),
				required: field.required(),
				value: form.value(field.name()),
				error: form.error(field.name()),
			})
			.collect()
	})
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthView {
	pub title: &'static str,
	pub subtitle: &'static str,
	pub fields: Vec<FieldView>,
	pub submit_label: &'static str,
	/// The submit control is disabled while a submission runs
	pub disabled: bool,
	pub toggle_prompt: &'static str,
	pub toggle_action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOption {
	pub value: &'static str,
	pub label: &'static str,
}

impl From<ServiceType> for ServiceOption {
	fn from(service: ServiceType) -> Self {
		Self {
			value: service.as_str(),
			label: service.label(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingFormView {
	pub title: &'static str,
	pub subtitle: &'static str,
	pub fields: Vec<FieldView>,
	pub service_options: Vec<ServiceOption>,
	/// Earliest date the date picker offers
	pub min_date: NaiveDate,
	pub submit_label: &'static str,
	pub disabled: bool,
}

/// What the booking page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BookingView {
	/// Session status not known yet
	Loading,
	/// No session: only a call to action, no form at all
	SignInRequired {
		title: &'static str,
		message: &'static str,
		cta_label: &'static str,
		#[serde(serialize_with = "route_path")]
		cta: Route,
	},
	Form(BookingFormView),
}

impl BookingView {
	pub fn form(&self) -> Option<&BookingFormView> {
		match self {
			BookingView::Form(form) => Some(form),
			_ => None,
		}
	}
}

fn route_path<S: serde::Serializer>(route: &Route, serializer: S) -> Result<S::Ok, S::Error> {
	serializer.serialize_str(route.path())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
	pub title: &'static str,
	pub fields: Vec<FieldView>,
	pub details: &'static [ContactDetail],
	pub submit_label: &'static str,
	pub disabled: bool,
}
