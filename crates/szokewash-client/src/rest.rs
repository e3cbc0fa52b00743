//! REST implementation of [`SessionClient`]
//!
//! Talks to a Supabase-style backend:
//!
//! | Operation        | Request                                  |
//! |------------------|------------------------------------------|
//! | sign-in          | `POST /auth/v1/token?grant_type=password` |
//! | sign-up          | `POST /auth/v1/signup`                    |
//! | sign-out         | `POST /auth/v1/logout`                    |
//! | session lookup   | `GET /auth/v1/user`                       |
//! | booking insert   | `POST /rest/v1/{bookings_table}`          |

use crate::client::{AuthListener, AuthListeners, SessionClient, Subscription};
use crate::error::{AuthError, ClientError, StorageError};
use crate::session::{AuthEvent, Session};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use szokewash_conf::BackendSettings;
use szokewash_forms::BookingRecord;
use url::Url;

const API_KEY_HEADER: &str = "apikey";

#[derive(Serialize)]
struct PasswordCredentials<'a> {
	email: &'a str,
	password: &'a str,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
	id: String,
	#[serde(default)]
	email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
	access_token: String,
	user: UserResponse,
}

// Error bodies differ between endpoints and backend versions; every
// field is optional and the first message present is used.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
	error_code: Option<String>,
	msg: Option<String>,
	message: Option<String>,
	error_description: Option<String>,
	error: Option<String>,
}

impl ErrorBody {
	async fn read(response: Response) -> (StatusCode, Self) {
		let status = response.status();
		let body = response.json::<ErrorBody>().await.unwrap_or_default();
		(status, body)
	}

	fn message(&self, status: StatusCode) -> String {
		self.msg
			.as_ref()
			.or(self.message.as_ref())
			.or(self.error_description.as_ref())
			.or(self.error.as_ref())
			.cloned()
			.unwrap_or_else(|| format!("backend returned {}", status))
	}

	fn into_auth_error(self, status: StatusCode) -> AuthError {
		let message = self.message(status);
		AuthError::classify(self.error_code.as_deref(), &message)
	}
}

impl From<UserResponse> for Session {
	fn from(user: UserResponse) -> Self {
		Session {
			user_id: user.id,
			email: user.email.unwrap_or_default(),
		}
	}
}

#[derive(Default)]
struct AuthState {
	access_token: Option<String>,
	session: Option<Session>,
}

/// Session client backed by the hosted REST API.
pub struct RestClient {
	http: Client,
	base_url: Url,
	api_key: String,
	bookings_table: String,
	state: RefCell<AuthState>,
	listeners: AuthListeners,
}

impl RestClient {
	/// Create a client for the configured backend
	///
	/// # Examples
	///
	/// ```
	/// use szokewash_client::RestClient;
	/// use szokewash_conf::Settings;
	///
	/// let settings = Settings::from_toml_str(r#"
	///     [backend]
	///     url = "https://project.supabase.co"
	///     api_key = "anon-key"
	/// "#).unwrap();
	///
	/// let client = RestClient::new(&settings.backend).unwrap();
	/// assert_eq!(client.base_url().as_str(), "https://project.supabase.co/");
	/// ```
	pub fn new(settings: &BackendSettings) -> Result<Self, ClientError> {
		let http = Client::builder().build()?;
		Ok(Self::with_http_client(settings, http))
	}

	/// Create a client with a custom HTTP client
	pub fn with_http_client(settings: &BackendSettings, http: Client) -> Self {
		let mut base_url = settings.url.clone();
		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());
			base_url.set_path(&path);
		}

		Self {
			http,
			base_url,
			api_key: settings.api_key.clone(),
			bookings_table: settings.bookings_table.clone(),
			state: RefCell::new(AuthState::default()),
			listeners: AuthListeners::new(),
		}
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Resume a previously issued access token.
	///
	/// The token is checked on the next [`SessionClient::current_session`].
	pub fn restore(&self, access_token: impl Into<String>) {
		let mut state = self.state.borrow_mut();
		state.access_token = Some(access_token.into());
		state.session = None;
	}

	fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
		self.base_url.join(path)
	}

	fn access_token(&self) -> Option<String> {
		self.state.borrow().access_token.clone()
	}

	fn store(&self, access_token: String, session: Session) {
		*self.state.borrow_mut() = AuthState {
			access_token: Some(access_token),
			session: Some(session.clone()),
		};
		tracing::info!(user_id = %session.user_id, "signed in");
		self.listeners.notify(&AuthEvent::SignedIn(session));
	}

	fn clear(&self) -> bool {
		let previous = std::mem::take(&mut *self.state.borrow_mut());
		previous.session.is_some()
	}

	async fn post_credentials(
		&self,
		url: Url,
		email: &str,
		password: &str,
	) -> Result<Response, AuthError> {
		self.http
			.post(url)
			.header(API_KEY_HEADER, &self.api_key)
			.json(&PasswordCredentials { email, password })
			.send()
			.await
			.map_err(|e| AuthError::Unknown(e.to_string()))
	}
}

fn auth_url_error(e: url::ParseError) -> AuthError {
	AuthError::Unknown(format!("invalid auth endpoint: {}", e))
}

#[async_trait(?Send)]
impl SessionClient for RestClient {
	async fn current_session(&self) -> Result<Option<Session>, AuthError> {
		let Some(token) = self.access_token() else {
			return Ok(None);
		};
		if let Some(session) = self.state.borrow().session.clone() {
			return Ok(Some(session));
		}

		let url = self.endpoint("auth/v1/user").map_err(auth_url_error)?;
		let response = self
			.http
			.get(url)
			.header(API_KEY_HEADER, &self.api_key)
			.bearer_auth(&token)
			.send()
			.await
			.map_err(|e| AuthError::Unknown(e.to_string()))?;

		match response.status() {
			status if status.is_success() => {
				let user = response
					.json::<UserResponse>()
					.await
					.map_err(|e| AuthError::Unknown(e.to_string()))?;
				let session = Session::from(user);
				self.state.borrow_mut().session = Some(session.clone());
				tracing::debug!(user_id = %session.user_id, "session restored");
				Ok(Some(session))
			}
			StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
				tracing::debug!("stored access token rejected, discarding");
				self.clear();
				Ok(None)
			}
			_ => {
				let (status, body) = ErrorBody::read(response).await;
				Err(body.into_auth_error(status))
			}
		}
	}

	async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
		let mut url = self.endpoint("auth/v1/token").map_err(auth_url_error)?;
		url.query_pairs_mut().append_pair("grant_type", "password");

		let response = self.post_credentials(url, email, password).await?;
		if !response.status().is_success() {
			let (status, body) = ErrorBody::read(response).await;
			let error = body.into_auth_error(status);
			tracing::warn!(%status, error = %error, "sign-in rejected");
			return Err(error);
		}

		let token = response
			.json::<TokenResponse>()
			.await
			.map_err(|e| AuthError::Unknown(e.to_string()))?;
		self.store(token.access_token, token.user.into());
		Ok(())
	}

	async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
		let url = self.endpoint("auth/v1/signup").map_err(auth_url_error)?;

		let response = self.post_credentials(url, email, password).await?;
		if !response.status().is_success() {
			let (status, body) = ErrorBody::read(response).await;
			let error = body.into_auth_error(status);
			tracing::warn!(%status, error = %error, "sign-up rejected");
			return Err(error);
		}

		// With email confirmation off the backend signs the user in directly
		let body = response
			.json::<serde_json::Value>()
			.await
			.map_err(|e| AuthError::Unknown(e.to_string()))?;
		if body.get("access_token").is_some() {
			let token = serde_json::from_value::<TokenResponse>(body)
				.map_err(|e| AuthError::Unknown(e.to_string()))?;
			self.store(token.access_token, token.user.into());
		} else {
			tracing::info!("account created, awaiting confirmation");
		}
		Ok(())
	}

	async fn sign_out(&self) {
		if let Some(token) = self.access_token() {
			match self.endpoint("auth/v1/logout") {
				Ok(url) => {
					let result = self
						.http
						.post(url)
						.header(API_KEY_HEADER, &self.api_key)
						.bearer_auth(&token)
						.send()
						.await;
					match result {
						Ok(response) if !response.status().is_success() => {
							tracing::warn!(status = %response.status(), "logout rejected by backend");
						}
						Err(e) => tracing::warn!(error = %e, "logout request failed"),
						Ok(_) => {}
					}
				}
				Err(e) => tracing::warn!(error = %e, "invalid logout endpoint"),
			}
		}

		if self.clear() {
			tracing::info!("signed out");
			self.listeners.notify(&AuthEvent::SignedOut);
		}
	}

	async fn insert_booking(&self, record: BookingRecord) -> Result<(), StorageError> {
		let url = self
			.endpoint(&format!("rest/v1/{}", self.bookings_table))
			.map_err(|e| StorageError::InsertFailed(e.to_string()))?;
		let bearer = self.access_token().unwrap_or_else(|| self.api_key.clone());

		let response = self
			.http
			.post(url)
			.header(API_KEY_HEADER, &self.api_key)
			.header("Prefer", "return=minimal")
			.bearer_auth(bearer)
			.json(&record)
			.send()
			.await
			.map_err(|e| {
				tracing::warn!(error = %e, "booking insert request failed");
				StorageError::InsertFailed(e.to_string())
			})?;

		if !response.status().is_success() {
			let (status, body) = ErrorBody::read(response).await;
			let message = body.message(status);
			tracing::warn!(%status, error = %message, "booking insert rejected");
			return Err(StorageError::InsertFailed(message));
		}

		tracing::info!(
			service = %record.service_type,
			date = %record.appointment_date,
			"booking stored"
		);
		Ok(())
	}

	fn subscribe(&self, listener: AuthListener) -> Subscription {
		self.listeners.subscribe(listener)
	}
}
