//! The facade wires settings, validation and pages together

use chrono::NaiveDate;
use rstest::rstest;
use std::rc::Rc;
use szokewash::pages::{BookingView, FixedClock, SessionProvider, Toaster};
use szokewash::prelude::*;
use szokewash_client::MockSessionClient;

#[rstest]
fn test_settings_and_schema_from_prelude() {
	let settings = Settings::from_toml_str(
		r#"
		[backend]
		url = "https://backend.example.com"
		api_key = "anon"

		[site]
		home_path = "/idopontfoglalas"
		"#,
	)
	.unwrap();
	let data: FormData = [
		("email".to_string(), " vendeg@example.hu ".to_string()),
		("password".to_string(), "titkos123".to_string()),
	]
	.into_iter()
	.collect();

	let credentials = AuthSchema::new().validate(&data).unwrap();

	assert_eq!(settings.site.home_path, "/idopontfoglalas");
	assert_eq!(credentials.email, "vendeg@example.hu");
}

#[rstest]
#[tokio::test]
async fn test_booking_page_through_facade() {
	// Arrange
	let client = Rc::new(MockSessionClient::new().with_session(Session::new("u-1", "a@b.hu")));
	let provider = SessionProvider::init(client.clone());
	provider.resolve().await;
	let ctx = PageContext::new(client, Rc::new(History::new(Route::Booking)), Toaster::new());
	let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

	// Act
	let page = BookingPage::mount(ctx, Rc::new(FixedClock(today))).unwrap();

	// Assert
	assert!(matches!(page.view(), BookingView::Form(ref form) if form.min_date == today));
	provider.teardown();
}

#[rstest]
#[tokio::test]
async fn test_sign_in_lands_on_configured_home() {
	// Arrange
	let settings = Settings::from_toml_str(
		r#"
		[backend]
		url = "https://backend.example.com"
		api_key = "anon"

		[site]
		home_path = "/idopontfoglalas"
		"#,
	)
	.unwrap();
	let client = Rc::new(MockSessionClient::new().with_account("vendeg@example.hu", "titkos123"));
	let provider = SessionProvider::init(client.clone());
	provider.resolve().await;
	let history = Rc::new(History::new(Route::Auth));
	let ctx = PageContext::new(client, history.clone(), Toaster::new()).with_site(&settings.site);
	let page = AuthPage::mount(ctx).unwrap();
	page.set_field("email", "vendeg@example.hu");
	page.set_field("password", "titkos123");

	// Act
	let outcome = page.submit().await;

	// Assert
	assert_eq!(outcome, SubmitOutcome::Accepted(Ok(())));
	assert_eq!(history.current(), Route::Booking);
	provider.teardown();
}
