//! Site-wide session state
//!
//! [`SessionProvider::init`] subscribes to the client's auth state stream and
//! provides a [`SessionState`] through the context; pages obtain it with
//! [`use_session`]. The state starts out loading, and stays loading until
//! either [`SessionProvider::resolve`] finishes or the first auth event
//! arrives, so consumers never branch on identity too early.

use crate::error::PageError;
use crate::reactive::{Context, Signal, provide_context, remove_context, use_context};
use std::rc::Rc;
use szokewash_client::{AuthEvent, Session, SessionClient, Subscription};

static SESSION_CONTEXT: Context<SessionState> = Context::new("session");

/// Current session plus whether it is still being resolved.
#[derive(Clone, Debug)]
pub struct SessionState {
	pub session: Signal<Option<Session>>,
	pub loading: Signal<bool>,
}

impl SessionState {
	fn new() -> Self {
		Self {
			session: Signal::new(None),
			loading: Signal::new(true),
		}
	}

	/// State with a known session, for pages tested without a provider.
	pub fn resolved(session: Option<Session>) -> Self {
		Self {
			session: Signal::new(session),
			loading: Signal::new(false),
		}
	}

	pub fn current(&self) -> Option<Session> {
		self.session.get()
	}

	pub fn is_loading(&self) -> bool {
		self.loading.get()
	}

	pub fn is_signed_in(&self) -> bool {
		self.session.with(Option::is_some)
	}
}

/// Owner of the site-wide [`SessionState`].
pub struct SessionProvider {
	client: Rc<dyn SessionClient>,
	state: SessionState,
	subscription: Subscription,
}

impl SessionProvider {
	/// Subscribe to `client` and provide the session state.
	pub fn init(client: Rc<dyn SessionClient>) -> Self {
		let state = SessionState::new();
		let subscription = {
			let state = state.clone();
			client.subscribe(Rc::new(move |event: &AuthEvent| {
				tracing::debug!(signed_in = event.session().is_some(), "auth state changed");
				state.session.set(event.session().cloned());
				state.loading.set_if_changed(false);
			}))
		};
		provide_context(&SESSION_CONTEXT, state.clone());

		Self {
			client,
			state,
			subscription,
		}
	}

	/// Look up the current session and finish loading.
	///
	/// A failed lookup resolves to "no session". If an auth event arrived
	/// while the lookup was in flight, the event wins.
	pub async fn resolve(&self) {
		let result = self.client.current_session().await;
		if !self.state.loading.get_untracked() {
			tracing::debug!("session already resolved by an auth event");
			return;
		}

		let session = match result {
			Ok(session) => session,
			Err(e) => {
				tracing::warn!(error = %e, "session lookup failed, continuing signed out");
				None
			}
		};
		self.state.session.set(session);
		self.state.loading.set(false);
	}

	pub fn state(&self) -> SessionState {
		self.state.clone()
	}

	pub fn client(&self) -> Rc<dyn SessionClient> {
		Rc::clone(&self.client)
	}

	/// Unsubscribe from the client and withdraw the session state.
	pub fn teardown(self) {
		remove_context(&SESSION_CONTEXT);
		drop(self.subscription);
		tracing::debug!("session provider torn down");
	}
}

/// The session state provided by [`SessionProvider::init`].
pub fn use_session() -> Result<SessionState, PageError> {
	use_context(&SESSION_CONTEXT).ok_or(PageError::MissingProvider("session"))
}
