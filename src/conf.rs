//! Site settings
//!
//! Settings come from an optional TOML file, then `SZOKEWASH_*` environment
//! variables on top.
//!
//! # Examples
//!
//! ```rust
//! use szokewash::conf::Settings;
//!
//! let settings = Settings::from_toml_str(
//!     r#"
//!     [backend]
//!     url = "https://backend.example.com"
//!     api_key = "public-anon-key"
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(settings.backend.bookings_table, "appointments");
//! ```

pub use szokewash_conf::*;
