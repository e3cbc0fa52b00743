//! Signal - Reactive State
//!
//! ## Example
//!
//! ```
//! use szokewash_pages::reactive::Signal;
//!
//! let count = Signal::new(0);
//! count.set(42);
//! count.update(|n| *n += 1);
//! assert_eq!(count.get(), 43);
//! ```

use super::effect::{EffectInner, current_observer};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

struct SignalInner<T> {
	value: RefCell<T>,
	subscribers: RefCell<Vec<Weak<EffectInner>>>,
}

/// Shared reactive value.
///
/// Clones share the same value and subscribers.
pub struct Signal<T: 'static> {
	inner: Rc<SignalInner<T>>,
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T: 'static> Signal<T> {
	pub fn new(value: T) -> Self {
		Self {
			inner: Rc::new(SignalInner {
				value: RefCell::new(value),
				subscribers: RefCell::new(Vec::new()),
			}),
		}
	}

	/// Read the value, registering the running effect as a dependent.
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.track();
		self.get_untracked()
	}

	/// Read the value without tracking.
	pub fn get_untracked(&self) -> T
	where
		T: Clone,
	{
		self.inner.value.borrow().clone()
	}

	/// Borrow the value for the duration of `f`, with tracking.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		self.track();
		f(&self.inner.value.borrow())
	}

	pub fn set(&self, value: T) {
		*self.inner.value.borrow_mut() = value;
		self.notify();
	}

	/// Mutate the value in place and notify once.
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
	{
		f(&mut *self.inner.value.borrow_mut());
		self.notify();
	}

	/// Whether `other` is a clone of this signal.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}

	fn track(&self) {
		let Some(observer) = current_observer() else {
			return;
		};
		let mut subscribers = self.inner.subscribers.borrow_mut();
		if !subscribers.iter().any(|s| s.ptr_eq(&observer)) {
			subscribers.push(observer);
		}
	}

	fn notify(&self) {
		let effects: Vec<Rc<EffectInner>> = {
			let mut subscribers = self.inner.subscribers.borrow_mut();
			subscribers.retain(|s| s.strong_count() > 0);
			subscribers.iter().filter_map(Weak::upgrade).collect()
		};
		for effect in effects {
			effect.run();
		}
	}
}

impl<T: PartialEq + 'static> Signal<T> {
	/// Set the value only if it differs, so dependents do not re-run.
	pub fn set_if_changed(&self, value: T) {
		if *self.inner.value.borrow() == value {
			return;
		}
		self.set(value);
	}
}

impl<T: Default + 'static> Default for Signal<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.inner.value.borrow())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::reactive::Effect;
	use rstest::rstest;
	use std::cell::Cell;

	#[rstest]
	fn test_signal_basic() {
		let signal = Signal::new(0);
		assert_eq!(signal.get(), 0);

		signal.set(42);
		assert_eq!(signal.get(), 42);
	}

	#[rstest]
	fn test_clones_share_value() {
		let a = Signal::new(vec![1]);
		let b = a.clone();

		b.update(|v| v.push(2));

		assert_eq!(a.get(), vec![1, 2]);
		assert!(a.ptr_eq(&b));
	}

	#[rstest]
	fn test_untracked_read_creates_no_dependency() {
		let signal = Signal::new(0);
		let runs = Rc::new(Cell::new(0));
		let _effect = {
			let (signal, runs) = (signal.clone(), Rc::clone(&runs));
			Effect::new(move || {
				signal.get_untracked();
				runs.set(runs.get() + 1);
			})
		};

		signal.set(1);

		assert_eq!(runs.get(), 1);
	}

	#[rstest]
	fn test_set_if_changed_skips_equal_values() {
		let signal = Signal::new("x".to_string());
		let runs = Rc::new(Cell::new(0));
		let _effect = {
			let (signal, runs) = (signal.clone(), Rc::clone(&runs));
			Effect::new(move || {
				signal.with(|_| ());
				runs.set(runs.get() + 1);
			})
		};

		signal.set_if_changed("x".to_string());
		signal.set_if_changed("y".to_string());

		assert_eq!(runs.get(), 2);
	}

	#[rstest]
	fn test_dependency_registered_once() {
		let signal = Signal::new(0);
		let runs = Rc::new(Cell::new(0));
		let _effect = {
			let (signal, runs) = (signal.clone(), Rc::clone(&runs));
			Effect::new(move || {
				signal.get();
				signal.get();
				runs.set(runs.get() + 1);
			})
		};

		signal.set(1);

		assert_eq!(runs.get(), 2);
	}
}
