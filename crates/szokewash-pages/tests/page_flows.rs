//! End-to-end page flows against the in-memory session client

use chrono::NaiveDate;
use proptest::prelude::*;
use rstest::{fixture, rstest};
use std::rc::Rc;
use szokewash_client::{AuthError, AuthEvent, Call, MockSessionClient, Session, StorageError};
use szokewash_pages::{
	AuthMode, AuthPage, BookingPage, BookingView, FixedClock, History, Navigator, PageContext,
	PageError, Route, SessionProvider, SubmitOutcome, Toaster,
};

struct Site {
	client: Rc<MockSessionClient>,
	history: Rc<History>,
	toaster: Toaster,
	provider: SessionProvider,
}

impl Site {
	async fn start(client: MockSessionClient, start: Route) -> Self {
		let client = Rc::new(client);
		let provider = SessionProvider::init(client.clone());
		provider.resolve().await;
		Self {
			client,
			history: Rc::new(History::new(start)),
			toaster: Toaster::new(),
			provider,
		}
	}

	fn ctx(&self) -> PageContext {
		PageContext::new(self.client.clone(), self.history.clone(), self.toaster.clone())
	}

	fn booking_page(&self) -> BookingPage {
		let clock = Rc::new(FixedClock(today()));
		BookingPage::mount(self.ctx(), clock).unwrap()
	}
}

fn today() -> NaiveDate {
	NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

#[fixture]
fn guest() -> Session {
	Session::new("user-1", "vendeg@example.hu")
}

fn fill_booking(page: &BookingPage) {
	for (name, value) in [
		("customer_name", "Kovács Béla"),
		("customer_email", "bela@example.hu"),
		("customer_phone", "+36 30 123 4567"),
		("service_type", "komplett_csomag"),
		("appointment_date", "2025-06-10"),
		("appointment_time", "10:30"),
		("license_plate", "ABC-123"),
	] {
		page.set_field(name, value).unwrap();
	}
}

#[rstest]
#[tokio::test]
async fn test_invalid_email_blocks_sign_in() {
	// Arrange
	let site = Site::start(MockSessionClient::new(), Route::Auth).await;
	let page = AuthPage::mount(site.ctx()).unwrap();
	page.set_field("email", "not-an-email");
	page.set_field("password", "abcdef");

	// Act
	let outcome = page.submit().await;

	// Assert
	let SubmitOutcome::Rejected(errors) = outcome else {
		panic!("expected rejection");
	};
	assert_eq!(errors.len(), 1);
	assert_eq!(errors.get("email"), Some("Érvénytelen email cím"));
	assert!(site.client.actions().is_empty());
}

#[rstest]
#[tokio::test]
async fn test_sign_in_sets_session_and_goes_home() {
	// Arrange
	let site = Site::start(
		MockSessionClient::new().with_account("vendeg@example.hu", "titkos123"),
		Route::Auth,
	)
	.await;
	let page = AuthPage::mount(site.ctx()).unwrap();
	page.set_field("email", "vendeg@example.hu");
	page.set_field("password", "titkos123");

	// Act
	let outcome = page.submit().await;

	// Assert
	assert_eq!(outcome, SubmitOutcome::Accepted(Ok(())));
	assert!(site.provider.state().is_signed_in());
	assert_eq!(site.history.current(), Route::Home);
	assert_eq!(site.history.entries(), vec![Route::Auth, Route::Home]);
	assert_eq!(site.toaster.last().unwrap().title, "Sikeres bejelentkezés");
}

fn auth_page(site: &Site, mode: AuthMode, email: &str, password: &str) -> AuthPage {
	let page = AuthPage::mount(site.ctx()).unwrap();
	if page.mode() != mode {
		page.toggle_mode();
	}
	page.set_field("email", email);
	page.set_field("password", password);
	page
}

#[rstest]
#[tokio::test]
async fn test_wrong_password_keeps_visitor_on_auth() {
	// Arrange
	let site = Site::start(
		MockSessionClient::new().with_account("vendeg@example.hu", "titkos123"),
		Route::Auth,
	)
	.await;
	let page = auth_page(&site, AuthMode::SignIn, "vendeg@example.hu", "rossz-jelszo");

	// Act
	let outcome = page.submit().await;

	// Assert
	assert_eq!(outcome, SubmitOutcome::Accepted(Err(AuthError::InvalidCredentials)));
	let toast = site.toaster.last().unwrap();
	assert!(toast.is_destructive());
	assert_eq!(toast.title, "Sikertelen bejelentkezés");
	assert_eq!(toast.description, "Hibás email vagy jelszó.");
	assert_eq!(site.history.current(), Route::Auth);
	assert!(!site.provider.state().is_signed_in());
	assert_eq!(
		site.client.actions(),
		vec![Call::SignIn {
			email: "vendeg@example.hu".to_string()
		}]
	);
}

#[rstest]
#[tokio::test]
async fn test_sign_up_of_existing_account_is_refused() {
	// Arrange
	let site = Site::start(
		MockSessionClient::new().with_account("vendeg@example.hu", "titkos123"),
		Route::Auth,
	)
	.await;
	let page = auth_page(&site, AuthMode::SignUp, "vendeg@example.hu", "masik-jelszo");

	// Act
	let outcome = page.submit().await;

	// Assert
	assert_eq!(outcome, SubmitOutcome::Accepted(Err(AuthError::AlreadyRegistered)));
	let toast = site.toaster.last().unwrap();
	assert!(toast.is_destructive());
	assert_eq!(toast.title, "Regisztráció sikertelen");
	assert_eq!(toast.description, "Ez az email cím már regisztrálva van.");
	assert_eq!(site.history.current(), Route::Auth);
}

#[rstest]
#[tokio::test]
async fn test_sign_up_of_new_account_goes_home() {
	// Arrange
	let site = Site::start(MockSessionClient::new(), Route::Auth).await;
	let page = auth_page(&site, AuthMode::SignUp, "uj@example.hu", "titkos123");

	// Act
	let outcome = page.submit().await;

	// Assert
	assert_eq!(outcome, SubmitOutcome::Accepted(Ok(())));
	let toast = site.toaster.last().unwrap();
	assert!(!toast.is_destructive());
	assert_eq!(toast.title, "Sikeres regisztráció");
	assert_eq!(site.history.current(), Route::Home);
	assert_eq!(
		site.client.actions(),
		vec![Call::SignUp {
			email: "uj@example.hu".to_string()
		}]
	);
}

#[rstest]
#[case(AuthMode::SignIn)]
#[case(AuthMode::SignUp)]
#[tokio::test]
async fn test_unknown_error_message_reaches_toast(#[case] mode: AuthMode) {
	// Arrange
	let client = MockSessionClient::new();
	let message = "Email rate limit exceeded";
	client.fail_sign_in(AuthError::Unknown(message.into()));
	client.fail_sign_up(AuthError::Unknown(message.into()));
	let site = Site::start(client, Route::Auth).await;
	let page = auth_page(&site, mode, "vendeg@example.hu", "titkos123");

	// Act
	let outcome = page.submit().await;

	// Assert
	assert_eq!(outcome, SubmitOutcome::Accepted(Err(AuthError::Unknown(message.into()))));
	let toast = site.toaster.last().unwrap();
	assert!(toast.is_destructive());
	assert_eq!(toast.title, "Hiba történt");
	assert_eq!(toast.description, message);
	assert_eq!(site.history.current(), Route::Auth);
}

#[rstest]
#[tokio::test]
async fn test_signed_in_visitor_is_redirected_from_auth(guest: Session) {
	let site = Site::start(MockSessionClient::new().with_session(guest), Route::Auth).await;

	let _page = AuthPage::mount(site.ctx()).unwrap();

	assert_eq!(site.history.current(), Route::Home);
}

#[rstest]
#[tokio::test]
async fn test_booking_without_session_offers_sign_in() {
	// Arrange
	let site = Site::start(MockSessionClient::new(), Route::Booking).await;
	let page = site.booking_page();

	// Act
	let view = page.view();

	// Assert
	assert!(matches!(
		view,
		BookingView::SignInRequired {
			cta: Route::Auth,
			..
		}
	));
	assert!(view.form().is_none());
	assert_eq!(page.set_field("customer_name", "x"), Err(PageError::FormUnavailable));
	assert!(matches!(page.submit().await, Err(PageError::FormUnavailable)));
	assert!(site.client.actions().is_empty());
}

#[rstest]
#[tokio::test]
async fn test_booking_waits_then_offers_sign_in() {
	// Arrange
	let client = Rc::new(MockSessionClient::new());
	let provider = SessionProvider::init(client.clone());
	let ctx = PageContext::new(
		client.clone(),
		Rc::new(History::new(Route::Booking)),
		Toaster::new(),
	);
	let page = BookingPage::mount(ctx, Rc::new(FixedClock(today()))).unwrap();
	assert_eq!(page.view(), BookingView::Loading);
	assert!(matches!(page.submit().await, Err(PageError::FormUnavailable)));

	// Act
	provider.resolve().await;

	// Assert
	let view = page.view();
	assert!(matches!(
		view,
		BookingView::SignInRequired {
			cta: Route::Auth,
			..
		}
	));
	assert!(page.form().is_none());
	assert_eq!(client.actions(), Vec::<Call>::new());
	provider.teardown();
}

#[rstest]
#[tokio::test]
async fn test_booking_form_appears_after_sign_in(guest: Session) {
	// Arrange
	let site = Site::start(MockSessionClient::new(), Route::Booking).await;
	let page = site.booking_page();
	assert!(page.form().is_none());

	// Act
	site.client.emit(AuthEvent::SignedIn(guest));

	// Assert
	let view = page.view();
	assert_eq!(view.form().unwrap().min_date, today());
}

#[rstest]
#[tokio::test]
async fn test_short_phone_rejected_without_insert(guest: Session) {
	// Arrange
	let site = Site::start(MockSessionClient::new().with_session(guest), Route::Booking).await;
	let page = site.booking_page();
	fill_booking(&page);
	page.set_field("customer_phone", "12345").unwrap();

	// Act
	let outcome = page.submit().await.unwrap();

	// Assert
	let SubmitOutcome::Rejected(errors) = outcome else {
		panic!("expected rejection");
	};
	assert_eq!(errors.get("customer_phone"), Some("Érvénytelen telefonszám"));
	assert!(site.client.bookings().is_empty());
	assert!(site.client.actions().is_empty());
}

#[rstest]
#[tokio::test]
async fn test_past_date_rejected(guest: Session) {
	let site = Site::start(MockSessionClient::new().with_session(guest), Route::Booking).await;
	let page = site.booking_page();
	fill_booking(&page);
	page.set_field("appointment_date", "2025-06-01").unwrap();

	let outcome = page.submit().await.unwrap();

	let SubmitOutcome::Rejected(errors) = outcome else {
		panic!("expected rejection");
	};
	assert_eq!(
		errors.get("appointment_date"),
		Some("A dátum nem lehet korábbi a mai napnál")
	);
}

#[rstest]
#[tokio::test]
async fn test_stored_booking_resets_form(guest: Session) {
	// Arrange
	let site = Site::start(MockSessionClient::new().with_session(guest), Route::Booking).await;
	let page = site.booking_page();
	fill_booking(&page);

	// Act
	let outcome = page.submit().await.unwrap();

	// Assert
	assert_eq!(outcome, SubmitOutcome::Accepted(Ok(())));
	let bookings = site.client.bookings();
	assert_eq!(bookings.len(), 1);
	assert_eq!(bookings[0].customer_name, "Kovács Béla");
	assert_eq!(bookings[0].license_plate.as_deref(), Some("ABC-123"));
	assert_eq!(bookings[0].notes, None);
	assert!(page.form().unwrap().controller().is_pristine());
	assert_eq!(site.toaster.last().unwrap().title, "Sikeres foglalás!");
}

#[rstest]
#[tokio::test]
async fn test_failed_insert_keeps_values_for_retry(guest: Session) {
	// Arrange
	let site = Site::start(MockSessionClient::new().with_session(guest), Route::Booking).await;
	let page = site.booking_page();
	fill_booking(&page);
	site.client
		.fail_insert(StorageError::InsertFailed("connection reset".into()));

	// Act
	let outcome = page.submit().await.unwrap();

	// Assert
	assert!(matches!(outcome, SubmitOutcome::Accepted(Err(_))));
	let form = page.form().unwrap();
	assert_eq!(form.controller().value("customer_name"), "Kovács Béla");
	assert!(!form.controller().is_submitting());
	assert!(site.toaster.last().unwrap().is_destructive());

	// Act
	site.client.recover_insert();
	let retry = page.submit().await.unwrap();

	// Assert
	assert_eq!(retry, SubmitOutcome::Accepted(Ok(())));
	assert_eq!(site.client.bookings().len(), 1);
}

#[rstest]
#[tokio::test]
async fn test_submitting_flag_wraps_single_client_call(guest: Session) {
	// Arrange
	let site = Site::start(MockSessionClient::new().with_session(guest), Route::Booking).await;
	let page = site.booking_page();
	fill_booking(&page);
	let form = page.form().unwrap();
	let submitting = form.controller().submitting_signal();
	let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
	let _watch = {
		let seen = seen.clone();
		szokewash_pages::reactive::Effect::new(move || seen.borrow_mut().push(submitting.get()))
	};

	// Act
	page.submit().await.unwrap();

	// Assert
	assert_eq!(*seen.borrow(), vec![false, true, false]);
	let inserts = site
		.client
		.actions()
		.into_iter()
		.filter(|call| matches!(call, Call::InsertBooking(_)))
		.count();
	assert_eq!(inserts, 1);
}

proptest! {
	#[test]
	fn prop_set_field_is_idempotent(value in "\\PC{0,40}") {
		let history = Rc::new(History::new(Route::Auth));
		let ctx = PageContext::new(Rc::new(MockSessionClient::new()), history, Toaster::new());
		let page = AuthPage::with_session(ctx, szokewash_pages::SessionState::resolved(None));

		page.set_field("email", value.clone());
		let once = page.form().values();
		page.set_field("email", value.clone());

		prop_assert_eq!(page.form().values(), once);
		prop_assert_eq!(page.form().value("email"), value);
	}
}
