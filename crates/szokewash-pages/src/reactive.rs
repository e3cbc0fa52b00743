//! Fine-grained reactivity
//!
//! [`Signal`] holds a value and remembers which [`Effect`]s read it;
//! setting the signal re-runs those effects. [`Context`] lets a provider
//! hand shared state to pages without a global singleton.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`), matching the
//! event loop the pages run on.

pub mod context;
pub mod effect;
pub mod signal;

pub use context::{Context, provide_context, remove_context, use_context};
pub use effect::Effect;
pub use signal::Signal;
