//! Contact form ("Írjon nekünk")

use crate::field::{ErrorType, Widget};
use crate::fields::{CharField, EmailField};
use crate::form::{CleanedData, FieldErrors, Form};
use crate::schema::Schema;
use crate::validators::RegexValidator;

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const MESSAGE: &str = "message";

/// An accepted contact message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ContactMessage {
	pub name: String,
	pub email: String,
	pub phone: Option<String>,
	pub message: String,
}

pub struct ContactSchema {
	form: Form,
}

impl ContactSchema {
	pub fn new() -> Self {
		let form = Form::new()
			.with_field(
				CharField::new(NAME)
					.required()
					.with_max_length(100)
					.with_label("Név")
					.with_validator(RegexValidator::person_name(
						"Érvénytelen karakterek a névben",
					))
					.with_error_message(ErrorType::Required, "Név megadása kötelező")
					.with_error_message(ErrorType::MaxLength, "A név maximum 100 karakter lehet"),
			)
			.with_field(
				EmailField::new(EMAIL)
					.with_max_length(254)
					.with_label("Email")
					.with_error_message(ErrorType::Required, "Email megadása kötelező")
					.with_error_message(ErrorType::Invalid, "Érvénytelen email cím")
					.with_error_message(ErrorType::MaxLength, "Az email cím túl hosszú"),
			)
			.with_field(
				CharField::new(PHONE)
					.with_max_length(20)
					.with_label("Telefonszám")
					.with_widget(Widget::TelInput)
					.with_validator(RegexValidator::phone("Érvénytelen telefonszám formátum"))
					.with_error_message(ErrorType::MaxLength, "A telefonszám túl hosszú"),
			)
			.with_field(
				// Length counts the text as typed, surrounding whitespace included
				CharField::new(MESSAGE)
					.required()
					.no_strip()
					.with_min_length(10)
					.with_max_length(2000)
					.with_label("Üzenet")
					.with_widget(Widget::TextArea)
					.with_error_message(ErrorType::Required, "Az üzenet legalább 10 karakter legyen")
					.with_error_message(ErrorType::MinLength, "Az üzenet legalább 10 karakter legyen")
					.with_error_message(
						ErrorType::MaxLength,
						"Az üzenet maximum 2000 karakter lehet",
					),
			);
		Self { form }
	}
}

impl Default for ContactSchema {
	fn default() -> Self {
		Self::new()
	}
}

impl Schema for ContactSchema {
	type Output = ContactMessage;

	fn form(&self) -> &Form {
		&self.form
	}

	fn narrow(&self, cleaned: CleanedData) -> Result<ContactMessage, FieldErrors> {
		Ok(ContactMessage {
			name: cleaned.text(NAME),
			email: cleaned.text(EMAIL),
			phone: cleaned.optional_text(PHONE),
			message: cleaned.text(MESSAGE),
		})
	}
}
