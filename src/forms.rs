//! Form validation
//!
//! Field types, validators and the typed schemas behind the auth, contact
//! and booking forms.

pub use szokewash_forms::*;
