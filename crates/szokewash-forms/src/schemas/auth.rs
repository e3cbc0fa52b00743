//! Sign-in / sign-up credentials

use crate::field::{ErrorType, Widget};
use crate::fields::{CharField, EmailField};
use crate::form::{CleanedData, FieldErrors, Form};
use crate::schema::Schema;

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";

const INVALID_EMAIL: &str = "Érvénytelen email cím";
const SHORT_PASSWORD: &str = "A jelszónak legalább 6 karakter hosszúnak kell lennie";

/// Accepted sign-in or sign-up input.
///
/// `Debug` redacts the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	pub email: String,
	pub password: String,
}

impl std::fmt::Debug for Credentials {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Credentials")
			.field("email", &self.email)
			.field("password", &"***")
			.finish()
	}
}

/// Email plus a password of at least six characters.
///
/// The email is trimmed; the password is taken exactly as typed.
///
/// # Examples
///
/// ```
/// use szokewash_forms::{AuthSchema, FormData, Schema};
///
/// let mut data = FormData::new();
/// data.insert("email".into(), " anna@example.hu ".into());
/// data.insert("password".into(), "abcdef".into());
///
/// let credentials = AuthSchema::new().validate(&data).unwrap();
/// assert_eq!(credentials.email, "anna@example.hu");
/// ```
pub struct AuthSchema {
	form: Form,
}

impl AuthSchema {
	pub fn new() -> Self {
		let form = Form::new()
			.with_field(
				EmailField::new(EMAIL)
					.with_label("Email cím")
					.with_error_message(ErrorType::Invalid, INVALID_EMAIL),
			)
			.with_field(
				CharField::new(PASSWORD)
					.required()
					.no_strip()
					.with_min_length(6)
					.with_label("Jelszó")
					.with_widget(Widget::PasswordInput)
					.with_error_message(ErrorType::Required, SHORT_PASSWORD)
					.with_error_message(ErrorType::MinLength, SHORT_PASSWORD),
			);
		Self { form }
	}
}

impl Default for AuthSchema {
	fn default() -> Self {
		Self::new()
	}
}

impl Schema for AuthSchema {
	type Output = Credentials;

	fn form(&self) -> &Form {
		&self.form
	}

	fn narrow(&self, cleaned: CleanedData) -> Result<Credentials, FieldErrors> {
		Ok(Credentials {
			email: cleaned.text(EMAIL),
			password: cleaned.text(PASSWORD),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::form::FormData;
	use rstest::rstest;

	fn data(email: &str, password: &str) -> FormData {
		FormData::from([
			(EMAIL.to_string(), email.to_string()),
			(PASSWORD.to_string(), password.to_string()),
		])
	}

	#[rstest]
	fn test_bad_email_only_flags_email() {
		// Arrange
		let schema = AuthSchema::new();

		// Act
		let errors = schema.validate(&data("not-an-email", "abcdef")).unwrap_err();

		// Assert
		assert_eq!(errors.len(), 1);
		assert_eq!(errors.get(EMAIL), Some(INVALID_EMAIL));
		assert!(!errors.contains(PASSWORD));
	}

	#[rstest]
	#[case("")]
	#[case("abc")]
	#[case("12345")]
	fn test_short_password(#[case] password: &str) {
		let errors = AuthSchema::new()
			.validate(&data("a@b.hu", password))
			.unwrap_err();

		assert_eq!(errors.get(PASSWORD), Some(SHORT_PASSWORD));
	}

	#[rstest]
	fn test_password_is_not_trimmed() {
		let credentials = AuthSchema::new()
			.validate(&data("a@b.hu", "  abcd  "))
			.unwrap();

		assert_eq!(credentials.password, "  abcd  ");
	}

	#[rstest]
	fn test_empty_submission_flags_both_fields() {
		let errors = AuthSchema::new().validate(&FormData::new()).unwrap_err();

		assert_eq!(errors.get(EMAIL), Some(INVALID_EMAIL));
		assert_eq!(errors.get(PASSWORD), Some(SHORT_PASSWORD));
	}

	#[rstest]
	fn test_debug_hides_password() {
		let credentials = Credentials {
			email: "a@b.hu".into(),
			password: "secret-pass".into(),
		};

		assert!(!format!("{:?}", credentials).contains("secret-pass"));
	}
}
