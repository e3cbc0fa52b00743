//! Appointment booking ("Időpontfoglalás")

use crate::field::{ErrorType, Widget};
use crate::fields::{CharField, ChoiceField, DateField, EmailField, TimeField};
use crate::form::{CleanedData, FieldErrors, Form};
use crate::schema::Schema;
use crate::validators::RegexValidator;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const CUSTOMER_NAME: &str = "customer_name";
pub const CUSTOMER_EMAIL: &str = "customer_email";
pub const CUSTOMER_PHONE: &str = "customer_phone";
pub const SERVICE_TYPE: &str = "service_type";
pub const APPOINTMENT_DATE: &str = "appointment_date";
pub const APPOINTMENT_TIME: &str = "appointment_time";
pub const VEHICLE_TYPE: &str = "vehicle_type";
pub const LICENSE_PLATE: &str = "license_plate";
pub const NOTES: &str = "notes";

/// Every booking field, in the order the form shows them.
pub const FIELDS: [&str; 9] = [
	CUSTOMER_NAME,
	CUSTOMER_EMAIL,
	CUSTOMER_PHONE,
	SERVICE_TYPE,
	APPOINTMENT_DATE,
	APPOINTMENT_TIME,
	VEHICLE_TYPE,
	LICENSE_PLATE,
	NOTES,
];

const CHOOSE_SERVICE: &str = "Válasszon szolgáltatást";

/// The four bookable services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
	KulsoMosas,
	BelsoTakaritas,
	Fenyezesvedelem,
	KomplettCsomag,
}

impl ServiceType {
	pub const ALL: [ServiceType; 4] = [
		ServiceType::KulsoMosas,
		ServiceType::BelsoTakaritas,
		ServiceType::Fenyezesvedelem,
		ServiceType::KomplettCsomag,
	];

	/// Stored value, as the storage enum spells it.
	pub fn as_str(&self) -> &'static str {
		match self {
			ServiceType::KulsoMosas => "kulso_mosas",
			ServiceType::BelsoTakaritas => "belso_takaritas",
			ServiceType::Fenyezesvedelem => "fenyezesvedelem",
			ServiceType::KomplettCsomag => "komplett_csomag",
		}
	}

	/// Label shown in the service selector.
	pub fn label(&self) -> &'static str {
		match self {
			ServiceType::KulsoMosas => "Külső mosás",
			ServiceType::BelsoTakaritas => "Belső takarítás",
			ServiceType::Fenyezesvedelem => "Fényezésvédelem",
			ServiceType::KomplettCsomag => "Komplett csomag",
		}
	}

	/// `(value, label)` pairs for a select widget.
	pub fn choices() -> Vec<(String, String)> {
		Self::ALL
			.iter()
			.map(|s| (s.as_str().to_string(), s.label().to_string()))
			.collect()
	}
}

impl fmt::Display for ServiceType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service type: {0}")]
pub struct UnknownServiceType(pub String);

impl FromStr for ServiceType {
	type Err = UnknownServiceType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|service| service.as_str() == s)
			.ok_or_else(|| UnknownServiceType(s.to_string()))
	}
}

/// An accepted appointment request, shaped like the storage row.
///
/// Optional fields left blank serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRecord {
	pub customer_name: String,
	pub customer_email: String,
	pub customer_phone: String,
	pub service_type: ServiceType,
	pub appointment_date: NaiveDate,
	pub appointment_time: NaiveTime,
	pub vehicle_type: Option<String>,
	pub license_plate: Option<String>,
	pub notes: Option<String>,
}

/// Booking request rules.
///
/// The earliest bookable day is supplied by the caller when the form is
/// shown; the schema itself has no notion of "today".
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use szokewash_forms::{BookingSchema, Schema};
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let schema = BookingSchema::new().with_min_date(today);
/// assert_eq!(schema.min_date(), Some(today));
/// assert_eq!(schema.field_names().len(), 9);
/// ```
pub struct BookingSchema {
	form: Form,
	min_date: Option<NaiveDate>,
}

impl BookingSchema {
	pub fn new() -> Self {
		Self {
			form: Self::build_form(None),
			min_date: None,
		}
	}

	/// Reject appointment dates before `min_date`.
	pub fn with_min_date(self, min_date: NaiveDate) -> Self {
		Self {
			form: Self::build_form(Some(min_date)),
			min_date: Some(min_date),
		}
	}

	pub fn min_date(&self) -> Option<NaiveDate> {
		self.min_date
	}

	fn build_form(min_date: Option<NaiveDate>) -> Form {
		let mut date = DateField::new(APPOINTMENT_DATE)
			.with_label("Dátum")
			.with_error_message(ErrorType::Required, "Válasszon dátumot")
			.with_error_message(ErrorType::Invalid, "Érvénytelen dátum")
			.with_error_message(ErrorType::MinValue, "A dátum nem lehet korábbi a mai napnál");
		if let Some(min_date) = min_date {
			date = date.with_min_date(min_date);
		}

		Form::new()
			.with_field(
				CharField::new(CUSTOMER_NAME)
					.required()
					.with_min_length(2)
					.with_max_length(100)
					.with_label("Név")
					.with_error_message(ErrorType::Required, "A név legalább 2 karakter legyen")
					.with_error_message(ErrorType::MinLength, "A név legalább 2 karakter legyen")
					.with_error_message(ErrorType::MaxLength, "A név maximum 100 karakter lehet"),
			)
			.with_field(
				EmailField::new(CUSTOMER_EMAIL)
					.with_max_length(255)
					.with_label("Email")
					.with_error_message(ErrorType::Invalid, "Érvénytelen email cím")
					.with_error_message(ErrorType::MaxLength, "Az email cím túl hosszú"),
			)
			.with_field(
				CharField::new(CUSTOMER_PHONE)
					.required()
					.with_min_length(9)
					.with_max_length(20)
					.with_label("Telefonszám")
					.with_widget(Widget::TelInput)
					.with_validator(RegexValidator::phone("Érvénytelen telefonszám"))
					.with_error_message(ErrorType::Required, "Érvénytelen telefonszám")
					.with_error_message(ErrorType::MinLength, "Érvénytelen telefonszám")
					.with_error_message(ErrorType::MaxLength, "A telefonszám túl hosszú"),
			)
			.with_field(
				ChoiceField::new(SERVICE_TYPE, ServiceType::choices())
					.with_label("Szolgáltatás")
					.with_error_message(ErrorType::Required, CHOOSE_SERVICE)
					.with_error_message(ErrorType::InvalidChoice, CHOOSE_SERVICE),
			)
			.with_field(date)
			.with_field(
				TimeField::new(APPOINTMENT_TIME)
					.with_label("Időpont")
					.with_error_message(ErrorType::Required, "Válasszon időpontot")
					.with_error_message(ErrorType::Invalid, "Érvénytelen időpont"),
			)
			.with_field(
				CharField::new(VEHICLE_TYPE)
					.with_max_length(100)
					.with_label("Jármű típusa")
					.with_error_message(
						ErrorType::MaxLength,
						"A jármű típusa maximum 100 karakter lehet",
					),
			)
			.with_field(
				CharField::new(LICENSE_PLATE)
					.with_max_length(20)
					.with_label("Rendszám")
					.with_error_message(ErrorType::MaxLength, "A rendszám maximum 20 karakter lehet"),
			)
			.with_field(
				CharField::new(NOTES)
					.with_max_length(500)
					.with_label("Megjegyzés")
					.with_widget(Widget::TextArea)
					.with_error_message(ErrorType::MaxLength, "A megjegyzés maximum 500 karakter lehet"),
			)
	}
}

impl Default for BookingSchema {
	fn default() -> Self {
		Self::new()
	}
}

impl Schema for BookingSchema {
	type Output = BookingRecord;

	fn form(&self) -> &Form {
		&self.form
	}

	fn narrow(&self, cleaned: CleanedData) -> Result<BookingRecord, FieldErrors> {
		let service_type = cleaned
			.text(SERVICE_TYPE)
			.parse::<ServiceType>()
			.map_err(|_| FieldErrors::single(SERVICE_TYPE, CHOOSE_SERVICE))?;
		let appointment_date = cleaned
			.date(APPOINTMENT_DATE)
			.ok_or_else(|| FieldErrors::single(APPOINTMENT_DATE, "Válasszon dátumot"))?;
		let appointment_time = cleaned
			.time(APPOINTMENT_TIME)
			.ok_or_else(|| FieldErrors::single(APPOINTMENT_TIME, "Válasszon időpontot"))?;

		Ok(BookingRecord {
			customer_name: cleaned.text(CUSTOMER_NAME),
			customer_email: cleaned.text(CUSTOMER_EMAIL),
			customer_phone: cleaned.text(CUSTOMER_PHONE),
			service_type,
			appointment_date,
			appointment_time,
			vehicle_type: cleaned.optional_text(VEHICLE_TYPE),
			license_plate: cleaned.optional_text(LICENSE_PLATE),
			notes: cleaned.optional_text(NOTES),
		})
	}
}
