//! Transient notifications
//!
//! Controllers push [`Toast`]s onto a shared [`Toaster`]; the presentation
//! layer drains and shows them.

use serde::Serialize;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
	Default,
	Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
	pub variant: ToastVariant,
	pub title: String,
	pub description: String,
}

impl Toast {
	/// A confirmation toast.
	pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			variant: ToastVariant::Default,
			title: title.into(),
			description: description.into(),
		}
	}

	/// An error toast.
	pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			variant: ToastVariant::Destructive,
			title: title.into(),
			description: description.into(),
		}
	}

	pub fn is_destructive(&self) -> bool {
		self.variant == ToastVariant::Destructive
	}
}

/// Queue of pending toasts, shared between clones.
///
/// # Examples
///
/// ```
/// use szokewash_pages::{Toast, Toaster};
///
/// let toaster = Toaster::new();
/// toaster.add(Toast::success("Üzenet elküldve!", "Hamarosan felvesszük Önnel a kapcsolatot."));
///
/// assert_eq!(toaster.peek().len(), 1);
/// assert_eq!(toaster.drain().len(), 1);
/// assert!(toaster.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct Toaster {
	queue: Rc<RefCell<VecDeque<Toast>>>,
}

impl Toaster {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add(&self, toast: Toast) {
		tracing::debug!(title = %toast.title, destructive = toast.is_destructive(), "toast");
		self.queue.borrow_mut().push_back(toast);
	}

	/// Pending toasts, oldest first, without removing them.
	pub fn peek(&self) -> Vec<Toast> {
		self.queue.borrow().iter().cloned().collect()
	}

	/// Most recent toast.
	pub fn last(&self) -> Option<Toast> {
		self.queue.borrow().back().cloned()
	}

	/// Remove and return every pending toast.
	pub fn drain(&self) -> Vec<Toast> {
		self.queue.borrow_mut().drain(..).collect()
	}

	pub fn clear(&self) {
		self.queue.borrow_mut().clear();
	}

	pub fn len(&self) -> usize {
		self.queue.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.queue.borrow().is_empty()
	}
}
