//! Context: shared values handed from a provider to consumers
//!
//! A [`Context`] is a typed key. Providers store a value under it with
//! [`provide_context`]; consumers read a clone with [`use_context`].
//!
//! ```
//! use szokewash_pages::reactive::{Context, provide_context, remove_context, use_context};
//!
//! static THEME: Context<String> = Context::new("theme");
//!
//! assert_eq!(use_context(&THEME), None);
//! provide_context(&THEME, "dark".to_string());
//! assert_eq!(use_context(&THEME), Some("dark".to_string()));
//! remove_context(&THEME);
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;

type ContextKey = (TypeId, &'static str);

thread_local! {
	static CONTEXTS: RefCell<HashMap<ContextKey, Box<dyn Any>>> = RefCell::new(HashMap::new());
}

/// Typed context key.
pub struct Context<T> {
	name: &'static str,
	_marker: PhantomData<fn() -> T>,
}

impl<T: 'static> Context<T> {
	pub const fn new(name: &'static str) -> Self {
		Self {
			name,
			_marker: PhantomData,
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	fn key(&self) -> ContextKey {
		(TypeId::of::<T>(), self.name)
	}
}

/// Store `value` under `ctx`, replacing any previous value.
pub fn provide_context<T: 'static>(ctx: &Context<T>, value: T) {
	CONTEXTS.with(|contexts| {
		contexts.borrow_mut().insert(ctx.key(), Box::new(value));
	});
}

/// Read the value provided under `ctx`.
///
/// Returns `None` when nothing was provided.
pub fn use_context<T: Clone + 'static>(ctx: &Context<T>) -> Option<T> {
	CONTEXTS.with(|contexts| {
		contexts
			.borrow()
			.get(&ctx.key())
			.and_then(|value| value.downcast_ref::<T>())
			.cloned()
	})
}

/// Remove and return the value provided under `ctx`.
pub fn remove_context<T: 'static>(ctx: &Context<T>) -> Option<T> {
	CONTEXTS.with(|contexts| {
		contexts
			.borrow_mut()
			.remove(&ctx.key())
			.and_then(|value| value.downcast::<T>().ok())
			.map(|value| *value)
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_use_context_with_value() {
		let ctx: Context<i32> = Context::new("answer");
		provide_context(&ctx, 42);

		assert_eq!(use_context(&ctx), Some(42));
	}

	#[rstest]
	fn test_use_context_without_value() {
		let ctx: Context<String> = Context::new("missing");

		assert!(use_context(&ctx).is_none());
	}

	#[rstest]
	fn test_same_name_different_type_do_not_collide() {
		let number: Context<i32> = Context::new("shared");
		let text: Context<String> = Context::new("shared");

		provide_context(&number, 7);
		provide_context(&text, "hét".to_string());

		assert_eq!(use_context(&number), Some(7));
		assert_eq!(use_context(&text), Some("hét".to_string()));
	}

	#[rstest]
	fn test_remove_context() {
		let ctx: Context<u8> = Context::new("removable");
		provide_context(&ctx, 1);

		assert_eq!(remove_context(&ctx), Some(1));
		assert_eq!(use_context(&ctx), None);
	}
}
