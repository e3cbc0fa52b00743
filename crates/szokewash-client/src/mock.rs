//! In-memory session client for tests

use crate::client::{AuthListener, AuthListeners, SessionClient, Subscription};
use crate::error::{AuthError, StorageError};
use crate::session::{AuthEvent, Session};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;
use szokewash_forms::BookingRecord;

/// A recorded client call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
	CurrentSession,
	SignIn { email: String },
	SignUp { email: String },
	SignOut,
	InsertBooking(Box<BookingRecord>),
}

#[derive(Default)]
struct Failures {
	lookup: Option<AuthError>,
	sign_in: Option<AuthError>,
	sign_up: Option<AuthError>,
	insert: Option<StorageError>,
}

/// Session client that keeps accounts, the session and stored bookings in
/// memory and records every call.
///
/// # Examples
///
/// ```
/// use szokewash_client::{Call, MockSessionClient, SessionClient};
///
/// # tokio_test_block(async {
/// let client = MockSessionClient::new().with_account("anna@example.hu", "titkos123");
///
/// client.sign_in("anna@example.hu", "titkos123").await.unwrap();
///
/// assert_eq!(client.session().unwrap().email, "anna@example.hu");
/// assert_eq!(client.calls(), vec![Call::SignIn { email: "anna@example.hu".into() }]);
/// # });
/// # fn tokio_test_block(f: impl std::future::Future<Output = ()>) {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[derive(Default)]
pub struct MockSessionClient {
	accounts: RefCell<HashMap<String, String>>,
	session: RefCell<Option<Session>>,
	failures: RefCell<Failures>,
	bookings: RefCell<Vec<BookingRecord>>,
	calls: RefCell<Vec<Call>>,
	listeners: AuthListeners,
}

impl MockSessionClient {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an account that can sign in.
	pub fn with_account(self, email: impl Into<String>, password: impl Into<String>) -> Self {
		self.accounts
			.borrow_mut()
			.insert(email.into(), password.into());
		self
	}

	/// Start out signed in.
	pub fn with_session(self, session: Session) -> Self {
		*self.session.borrow_mut() = Some(session);
		self
	}

	/// Make the session lookup fail.
	pub fn fail_lookup(&self, error: AuthError) {
		self.failures.borrow_mut().lookup = Some(error);
	}

	pub fn fail_sign_in(&self, error: AuthError) {
		self.failures.borrow_mut().sign_in = Some(error);
	}

	pub fn fail_sign_up(&self, error: AuthError) {
		self.failures.borrow_mut().sign_up = Some(error);
	}

	pub fn fail_insert(&self, error: StorageError) {
		self.failures.borrow_mut().insert = Some(error);
	}

	/// Stop failing inserts.
	pub fn recover_insert(&self) {
		self.failures.borrow_mut().insert = None;
	}

	/// Change the session from outside, as another tab or a token refresh would.
	pub fn emit(&self, event: AuthEvent) {
		*self.session.borrow_mut() = event.session().cloned();
		self.listeners.notify(&event);
	}

	pub fn session(&self) -> Option<Session> {
		self.session.borrow().clone()
	}

	pub fn calls(&self) -> Vec<Call> {
		self.calls.borrow().clone()
	}

	/// Calls other than session lookups.
	pub fn actions(&self) -> Vec<Call> {
		self.calls
			.borrow()
			.iter()
			.filter(|call| **call != Call::CurrentSession)
			.cloned()
			.collect()
	}

	pub fn bookings(&self) -> Vec<BookingRecord> {
		self.bookings.borrow().clone()
	}

	pub fn listener_count(&self) -> usize {
		self.listeners.len()
	}

	fn record(&self, call: Call) {
		self.calls.borrow_mut().push(call);
	}
}

#[async_trait(?Send)]
impl SessionClient for MockSessionClient {
	async fn current_session(&self) -> Result<Option<Session>, AuthError> {
		self.record(Call::CurrentSession);
		if let Some(error) = self.failures.borrow().lookup.clone() {
			return Err(error);
		}
		Ok(self.session())
	}

	async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
		self.record(Call::SignIn {
			email: email.to_string(),
		});
		if let Some(error) = self.failures.borrow().sign_in.clone() {
			return Err(error);
		}

		let matches = self
			.accounts
			.borrow()
			.get(email)
			.is_some_and(|stored| stored == password);
		if !matches {
			return Err(AuthError::InvalidCredentials);
		}

		let user_id = format!("user-{}", self.accounts.borrow().len());
		self.emit(AuthEvent::SignedIn(Session::new(user_id, email)));
		Ok(())
	}

	async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
		self.record(Call::SignUp {
			email: email.to_string(),
		});
		if let Some(error) = self.failures.borrow().sign_up.clone() {
			return Err(error);
		}
		if self.accounts.borrow().contains_key(email) {
			return Err(AuthError::AlreadyRegistered);
		}

		self.accounts
			.borrow_mut()
			.insert(email.to_string(), password.to_string());
		Ok(())
	}

	async fn sign_out(&self) {
		self.record(Call::SignOut);
		if self.session.borrow().is_some() {
			self.emit(AuthEvent::SignedOut);
		}
	}

	async fn insert_booking(&self, record: BookingRecord) -> Result<(), StorageError> {
		self.record(Call::InsertBooking(Box::new(record.clone())));
		if let Some(error) = self.failures.borrow().insert.clone() {
			return Err(error);
		}
		self.bookings.borrow_mut().push(record);
		Ok(())
	}

	fn subscribe(&self, listener: AuthListener) -> Subscription {
		self.listeners.subscribe(listener)
	}
}
