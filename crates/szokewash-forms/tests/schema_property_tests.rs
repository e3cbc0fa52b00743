//! Schema property-based tests
//!
//! Property-based tests for the site's validation schemas.

use chrono::NaiveDate;
use proptest::prelude::*;
use rstest::*;
use szokewash_forms::schemas::{booking, contact};
use szokewash_forms::{AuthSchema, BookingSchema, ContactSchema, FormData, Schema};

fn booking_data(phone: &str) -> FormData {
	FormData::from([
		(booking::CUSTOMER_NAME.to_string(), "Nagy Éva".to_string()),
		(booking::CUSTOMER_EMAIL.to_string(), "eva@example.hu".to_string()),
		(booking::CUSTOMER_PHONE.to_string(), phone.to_string()),
		(booking::SERVICE_TYPE.to_string(), "kulso_mosas".to_string()),
		(booking::APPOINTMENT_DATE.to_string(), "2030-01-15".to_string()),
		(booking::APPOINTMENT_TIME.to_string(), "08:00".to_string()),
	])
}

// ============================================================================
// Property-Based Tests: Auth schema
// ============================================================================

proptest! {
	/// Test: passwords of six or more characters are accepted
	///
	/// Category: Property
	#[test]
	fn prop_password_length_boundary(password in "\\PC{0,20}") {
		let data = FormData::from([
			("email".to_string(), "user@example.hu".to_string()),
			("password".to_string(), password.clone()),
		]);

		let result = AuthSchema::new().validate(&data);

		prop_assert_eq!(result.is_ok(), password.chars().count() >= 6);
	}

	/// Test: the email error never leaks into the password field
	///
	/// Category: Property
	#[test]
	fn prop_errors_are_keyed_by_field(email in "[a-z]{1,10}", password in "[a-z]{6,12}") {
		let data = FormData::from([
			("email".to_string(), email),
			("password".to_string(), password),
		]);

		let errors = AuthSchema::new().validate(&data).unwrap_err();

		prop_assert!(errors.contains("email"));
		prop_assert!(!errors.contains("password"));
	}
}

// ============================================================================
// Property-Based Tests: Contact schema
// ============================================================================

proptest! {
	/// Test: names made of letters in any script are accepted
	///
	/// Category: Property
	#[test]
	fn prop_unicode_names_accepted(name in "[a-zA-ZáéíóöőúüűÁÉÍÓÖŐÚÜŰßçñ' -]{0,60}[a-zA-Zőű]") {
		let data = FormData::from([
			(contact::NAME.to_string(), name),
			(contact::EMAIL.to_string(), "a@b.hu".to_string()),
			(contact::MESSAGE.to_string(), "Érdeklődnék az árakról.".to_string()),
		]);

		prop_assert!(ContactSchema::new().validate(&data).is_ok());
	}

	/// Test: names containing digits are rejected
	///
	/// Category: Property
	#[test]
	fn prop_names_with_digits_rejected(prefix in "[a-z]{1,10}", digit in 0u8..10) {
		let data = FormData::from([
			(contact::NAME.to_string(), format!("{}{}", prefix, digit)),
			(contact::EMAIL.to_string(), "a@b.hu".to_string()),
			(contact::MESSAGE.to_string(), "Érdeklődnék az árakról.".to_string()),
		]);

		let errors = ContactSchema::new().validate(&data).unwrap_err();

		prop_assert_eq!(errors.get(contact::NAME), Some("Érvénytelen karakterek a névben"));
	}
}

// ============================================================================
// Property-Based Tests: Booking schema
// ============================================================================

proptest! {
	/// Test: well-formed phone numbers between 9 and 20 characters pass
	///
	/// Category: Property
	#[test]
	fn prop_booking_phone_accepted(phone in "\\+?[0-9]{9,19}") {
		let result = BookingSchema::new().validate(&booking_data(&phone));

		prop_assert!(result.is_ok());
	}

	/// Test: phone numbers shorter than nine characters fail on the phone field only
	///
	/// Category: Property
	#[test]
	fn prop_booking_short_phone_rejected(phone in "[0-9]{1,8}") {
		let errors = BookingSchema::new().validate(&booking_data(&phone)).unwrap_err();

		prop_assert_eq!(errors.len(), 1);
		prop_assert!(errors.contains(booking::CUSTOMER_PHONE));
	}

	/// Test: any date on or after the minimum is bookable
	///
	/// Category: Property
	#[test]
	fn prop_booking_dates_from_min(offset in 0i64..365) {
		let min = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
		let date = min + chrono::Duration::days(offset);
		let mut data = booking_data("+36301234567");
		data.insert(booking::APPOINTMENT_DATE.to_string(), date.format("%Y-%m-%d").to_string());

		let record = BookingSchema::new().with_min_date(min).validate(&data).unwrap();

		prop_assert_eq!(record.appointment_date, date);
	}

	/// Test: any date before the minimum is rejected
	///
	/// Category: Property
	#[test]
	fn prop_booking_dates_before_min(offset in 1i64..365) {
		let min = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
		let date = min - chrono::Duration::days(offset);
		let mut data = booking_data("+36301234567");
		data.insert(booking::APPOINTMENT_DATE.to_string(), date.format("%Y-%m-%d").to_string());

		let errors = BookingSchema::new().with_min_date(min).validate(&data).unwrap_err();

		prop_assert_eq!(
			errors.get(booking::APPOINTMENT_DATE),
			Some("A dátum nem lehet korábbi a mai napnál")
		);
	}
}

// ============================================================================
// Integration: every invalid field reported at once
// ============================================================================

#[rstest]
fn test_booking_reports_all_violations_in_one_pass() {
	// Arrange
	let data = FormData::from([
		(booking::CUSTOMER_NAME.to_string(), "X".to_string()),
		(booking::CUSTOMER_EMAIL.to_string(), "nope".to_string()),
		(booking::CUSTOMER_PHONE.to_string(), "123".to_string()),
		(booking::SERVICE_TYPE.to_string(), "kulso_mosas".to_string()),
		(booking::APPOINTMENT_DATE.to_string(), "2030-01-15".to_string()),
		(booking::APPOINTMENT_TIME.to_string(), "08:00".to_string()),
		(booking::NOTES.to_string(), "n".repeat(501)),
	]);

	// Act
	let errors = BookingSchema::new().validate(&data).unwrap_err();

	// Assert
	assert_eq!(errors.len(), 4);
	for field in [
		booking::CUSTOMER_NAME,
		booking::CUSTOMER_EMAIL,
		booking::CUSTOMER_PHONE,
		booking::NOTES,
	] {
		assert!(errors.contains(field), "missing error for {}", field);
	}
}

#[rstest]
fn test_booking_schema_field_order() {
	assert_eq!(BookingSchema::new().field_names(), booking::FIELDS.to_vec());
}
