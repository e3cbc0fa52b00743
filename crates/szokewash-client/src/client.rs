//! The session client seam

use crate::error::{AuthError, StorageError};
use crate::session::{AuthEvent, Session};
use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use szokewash_forms::BookingRecord;

/// Callback invoked on every authentication state change.
pub type AuthListener = Rc<dyn Fn(&AuthEvent)>;

/// Facade over the hosted auth/storage backend.
///
/// Runs on a single-threaded event loop, so futures are not `Send`.
#[async_trait(?Send)]
pub trait SessionClient {
	/// Resolve the current session, if any.
	async fn current_session(&self) -> Result<Option<Session>, AuthError>;

	async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError>;

	async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError>;

	/// Forget the current session. Backend failures are logged, not returned.
	async fn sign_out(&self);

	async fn insert_booking(&self, record: BookingRecord) -> Result<(), StorageError>;

	/// Register `listener` for auth state changes until the returned
	/// [`Subscription`] is dropped.
	fn subscribe(&self, listener: AuthListener) -> Subscription;
}

#[derive(Default)]
struct ListenerTable {
	next_id: u64,
	entries: Vec<(u64, AuthListener)>,
}

/// Registry of auth state listeners shared by client implementations.
#[derive(Clone, Default)]
pub struct AuthListeners {
	inner: Rc<RefCell<ListenerTable>>,
}

impl AuthListeners {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn subscribe(&self, listener: AuthListener) -> Subscription {
		let mut table = self.inner.borrow_mut();
		let id = table.next_id;
		table.next_id += 1;
		table.entries.push((id, listener));
		Subscription {
			id,
			table: Rc::downgrade(&self.inner),
		}
	}

	/// Deliver `event` to every current listener.
	pub fn notify(&self, event: &AuthEvent) {
		// Listeners may subscribe or unsubscribe while being called
		let listeners: Vec<AuthListener> = self
			.inner
			.borrow()
			.entries
			.iter()
			.map(|(_, listener)| Rc::clone(listener))
			.collect();
		for listener in listeners {
			listener(event);
		}
	}

	pub fn len(&self) -> usize {
		self.inner.borrow().entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Handle to a registered listener; unsubscribes on drop.
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct Subscription {
	id: u64,
	table: Weak<RefCell<ListenerTable>>,
}

impl Subscription {
	/// Unsubscribe now.
	pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(table) = self.table.upgrade() {
			table.borrow_mut().entries.retain(|(id, _)| *id != self.id);
		}
	}
}
