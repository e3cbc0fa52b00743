//! Error taxonomy surfaced to the pages

/// Failure of a sign-in or sign-up attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
	#[error("Invalid login credentials")]
	InvalidCredentials,

	#[error("User already registered")]
	AlreadyRegistered,

	/// Any other failure, carrying the backend's message as-is
	#[error("{0}")]
	Unknown(String),
}

// Structured codes the backend attaches to auth failures.
const INVALID_CREDENTIALS_CODES: &[&str] = &["invalid_credentials", "invalid_grant"];
const ALREADY_REGISTERED_CODES: &[&str] = &["user_already_exists", "email_exists"];

// Message fragments used when no code is present.
const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid login credentials";
const ALREADY_REGISTERED_MESSAGE: &str = "User already registered";

impl AuthError {
	/// Classify a backend failure.
	///
	/// The structured `code` wins when it is recognised; otherwise the
	/// message is searched for the two known conditions.
	///
	/// # Examples
	///
	/// ```
	/// use szokewash_client::AuthError;
	///
	/// assert_eq!(
	///     AuthError::classify(Some("user_already_exists"), "whatever"),
	///     AuthError::AlreadyRegistered,
	/// );
	/// assert_eq!(
	///     AuthError::classify(None, "Invalid login credentials"),
	///     AuthError::InvalidCredentials,
	/// );
	/// assert_eq!(
	///     AuthError::classify(Some("over_request_rate_limit"), "Too many requests"),
	///     AuthError::Unknown("Too many requests".into()),
	/// );
	/// ```
	pub fn classify(code: Option<&str>, message: &str) -> Self {
		if let Some(code) = code {
			if INVALID_CREDENTIALS_CODES.contains(&code) {
				return AuthError::InvalidCredentials;
			}
			if ALREADY_REGISTERED_CODES.contains(&code) {
				return AuthError::AlreadyRegistered;
			}
		}

		if message.contains(INVALID_CREDENTIALS_MESSAGE) {
			AuthError::InvalidCredentials
		} else if message.contains(ALREADY_REGISTERED_MESSAGE) {
			AuthError::AlreadyRegistered
		} else {
			AuthError::Unknown(message.to_string())
		}
	}
}

/// Failure to store a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
	#[error("insert failed: {0}")]
	InsertFailed(String),
}

/// Failure to construct a client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
	#[error("HTTP client error: {0}")]
	Http(#[from] reqwest::Error),

	#[error("Invalid backend URL: {0}")]
	Url(#[from] url::ParseError),
}
