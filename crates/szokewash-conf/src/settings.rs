//! Site settings

use crate::sources::{EnvSource, TomlFileSource};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use url::Url;

/// Default storage table for appointment requests.
pub const DEFAULT_BOOKINGS_TABLE: &str = "appointments";

/// Error raised while loading or validating settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Missing required setting: {0}")]
	MissingField(&'static str),

	#[error("Invalid value for '{key}': {message}")]
	InvalidValue { key: &'static str, message: String },
}

/// Connection details for the hosted auth/storage backend.
#[derive(Clone, PartialEq, Eq)]
pub struct BackendSettings {
	/// Project base URL, e.g. `https://project.supabase.co`
	pub url: Url,
	/// Public (anon) API key sent with every request
	pub api_key: String,
	/// Table that receives booking records
	pub bookings_table: String,
}

impl fmt::Debug for BackendSettings {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BackendSettings")
			.field("url", &self.url.as_str())
			.field("api_key", &"[REDACTED]")
			.field("bookings_table", &self.bookings_table)
			.finish()
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
	/// Where visitors land after signing in
	pub home_path: String,
}

impl Default for SiteSettings {
	fn default() -> Self {
		Self {
			home_path: "/".to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	pub backend: BackendSettings,
	pub site: SiteSettings,
}

// Shape of the TOML document before validation.
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
	#[serde(default)]
	backend: RawBackend,
	#[serde(default)]
	site: SiteSettings,
}

#[derive(Debug, Default, Deserialize)]
struct RawBackend {
	url: Option<String>,
	api_key: Option<String>,
	bookings_table: Option<String>,
}

impl Settings {
	/// Load settings from an optional TOML file plus `SZOKEWASH_*` overrides.
	pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
		let mut table = match path {
			Some(path) => TomlFileSource::new(path).load()?,
			None => toml::Table::new(),
		};
		EnvSource::new().apply(&mut table);
		Self::from_table(table)
	}

	/// Parse and validate a TOML document, without environment overrides.
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		let table = toml::from_str::<toml::Table>(content)?;
		Self::from_table(table)
	}

	/// Validate an already merged document.
	pub fn from_table(table: toml::Table) -> Result<Self, SettingsError> {
		let raw: RawSettings = toml::Value::Table(table).try_into()?;
		let settings = Self {
			backend: validate_backend(raw.backend)?,
			site: validate_site(raw.site)?,
		};
		tracing::debug!(
			backend = %settings.backend.url,
			table = %settings.backend.bookings_table,
			"settings loaded"
		);
		Ok(settings)
	}
}

fn validate_backend(raw: RawBackend) -> Result<BackendSettings, SettingsError> {
	let url = non_empty(raw.url).ok_or(SettingsError::MissingField("backend.url"))?;
	let url = Url::parse(&url).map_err(|e| SettingsError::InvalidValue {
		key: "backend.url",
		message: e.to_string(),
	})?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(SettingsError::InvalidValue {
			key: "backend.url",
			message: format!("unsupported scheme '{}'", url.scheme()),
		});
	}

	let api_key = non_empty(raw.api_key).ok_or(SettingsError::MissingField("backend.api_key"))?;

	let bookings_table = match raw.bookings_table {
		None => DEFAULT_BOOKINGS_TABLE.to_string(),
		Some(table) if is_identifier(&table) => table,
		Some(table) => {
			return Err(SettingsError::InvalidValue {
				key: "backend.bookings_table",
				message: format!("'{}' is not a valid table name", table),
			});
		}
	};

	Ok(BackendSettings {
		url,
		api_key,
		bookings_table,
	})
}

fn validate_site(site: SiteSettings) -> Result<SiteSettings, SettingsError> {
	if !site.home_path.starts_with('/') {
		return Err(SettingsError::InvalidValue {
			key: "site.home_path",
			message: "must start with '/'".to_string(),
		});
	}
	Ok(site)
}

fn non_empty(value: Option<String>) -> Option<String> {
	value
		.map(|v| v.trim().to_string())
		.filter(|v| !v.is_empty())
}

fn is_identifier(name: &str) -> bool {
	!name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
