//! Effect - Reactive Side Effects
//!
//! An effect runs once when created and again whenever a [`Signal`](super::Signal)
//! it read during its last run changes.
//!
//! ## Example
//!
//! ```
//! use szokewash_pages::reactive::{Effect, Signal};
//!
//! let count = Signal::new(1);
//! let doubled = Signal::new(0);
//!
//! let _effect = {
//!     let (count, doubled) = (count.clone(), doubled.clone());
//!     Effect::new(move || doubled.set(count.get() * 2))
//! };
//!
//! count.set(5);
//! assert_eq!(doubled.get(), 10);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

thread_local! {
	// Effect currently running, if any; signals read while it is set
	// register it as a subscriber.
	static OBSERVER: RefCell<Option<Weak<EffectInner>>> = const { RefCell::new(None) };
}

pub(crate) struct EffectInner {
	f: RefCell<Box<dyn FnMut()>>,
	running: Cell<bool>,
	disposed: Cell<bool>,
}

impl EffectInner {
	pub(crate) fn run(self: &Rc<Self>) {
		// A running effect that triggers itself is not re-entered
		if self.disposed.get() || self.running.get() {
			return;
		}
		self.running.set(true);

		let previous = OBSERVER.with(|o| o.replace(Some(Rc::downgrade(self))));
		{
			let mut f = self.f.borrow_mut();
			(*f)();
		}
		OBSERVER.with(|o| *o.borrow_mut() = previous);

		self.running.set(false);
	}
}

/// The effect running on this thread, if any.
pub(crate) fn current_observer() -> Option<Weak<EffectInner>> {
	OBSERVER.with(|o| o.borrow().clone())
}

/// Run `f` without registering signal reads as dependencies.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use szokewash_pages::reactive::{Effect, Signal, effect::untrack};
///
/// let signal = Signal::new(0);
/// let runs = Rc::new(Cell::new(0));
/// let _effect = {
///     let (signal, runs) = (signal.clone(), runs.clone());
///     Effect::new(move || {
///         untrack(|| signal.get());
///         runs.set(runs.get() + 1);
///     })
/// };
///
/// signal.set(1);
/// assert_eq!(runs.get(), 1);
/// ```
pub fn untrack<T>(f: impl FnOnce() -> T) -> T {
	let previous = OBSERVER.with(|o| o.replace(None));
	let result = f();
	OBSERVER.with(|o| *o.borrow_mut() = previous);
	result
}

/// A side effect that re-runs when the signals it reads change.
///
/// Dropping the effect disposes it.
#[must_use = "an effect stops running as soon as it is dropped"]
pub struct Effect {
	inner: Rc<EffectInner>,
}

impl Effect {
	/// Create an effect and run it immediately
	pub fn new<F>(f: F) -> Self
	where
		F: FnMut() + 'static,
	{
		let inner = Rc::new(EffectInner {
			f: RefCell::new(Box::new(f)),
			running: Cell::new(false),
			disposed: Cell::new(false),
		});
		inner.run();
		Self { inner }
	}

	/// Stop the effect; it will not run again.
	pub fn dispose(&self) {
		self.inner.disposed.set(true);
	}

	pub fn is_disposed(&self) -> bool {
		self.inner.disposed.get()
	}
}

impl Drop for Effect {
	fn drop(&mut self) {
		self.dispose();
	}
}
