use serde::{Deserialize, Serialize};

/// The signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Session {
	/// Opaque user identifier assigned by the backend
	pub user_id: String,
	pub email: String,
}

impl Session {
	pub fn new(user_id: impl Into<String>, email: impl Into<String>) -> Self {
		Self {
			user_id: user_id.into(),
			email: email.into(),
		}
	}
}

/// Change in authentication state, delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
	SignedIn(Session),
	SignedOut,
}

impl AuthEvent {
	/// Session in effect after this event.
	pub fn session(&self) -> Option<&Session> {
		match self {
			AuthEvent::SignedIn(session) => Some(session),
			AuthEvent::SignedOut => None,
		}
	}
}
