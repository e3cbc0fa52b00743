//! # Szőke Wash settings
//!
//! Settings are read from a TOML document and then overridden by
//! environment variables carrying the `SZOKEWASH_` prefix:
//!
//! | Variable                    | Setting                  |
//! |-----------------------------|--------------------------|
//! | `SZOKEWASH_BACKEND_URL`     | `backend.url`            |
//! | `SZOKEWASH_BACKEND_API_KEY` | `backend.api_key`        |
//! | `SZOKEWASH_BOOKINGS_TABLE`  | `backend.bookings_table` |
//! | `SZOKEWASH_HOME_PATH`       | `site.home_path`         |
//!
//! ## Example
//!
//! ```
//! use szokewash_conf::Settings;
//!
//! let settings = Settings::from_toml_str(r#"
//!     [backend]
//!     url = "https://project.supabase.co"
//!     api_key = "anon-key"
//! "#).unwrap();
//!
//! assert_eq!(settings.backend.bookings_table, "appointments");
//! assert_eq!(settings.site.home_path, "/");
//! ```

pub mod settings;
pub mod sources;

pub use settings::{BackendSettings, Settings, SettingsError, SiteSettings};
pub use sources::{ENV_PREFIX, EnvSource, TomlFileSource};
