//! Configuration sources
//!
//! A TOML file provides the base document; environment variables override
//! individual keys on top of it.

use crate::settings::SettingsError;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "SZOKEWASH_";

// Variable name (without prefix) to `(section, key)` in the TOML document.
const ENV_KEYS: &[(&str, &str, &str)] = &[
	("BACKEND_URL", "backend", "url"),
	("BACKEND_API_KEY", "backend", "api_key"),
	("BOOKINGS_TABLE", "backend", "bookings_table"),
	("HOME_PATH", "site", "home_path"),
];

/// TOML settings file
pub struct TomlFileSource {
	path: PathBuf,
	required: bool,
}

impl TomlFileSource {
	/// A file that must exist
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: true,
		}
	}

	/// A file that is skipped when missing
	///
	/// # Examples
	///
	/// ```
	/// use szokewash_conf::TomlFileSource;
	///
	/// let table = TomlFileSource::optional("/nonexistent/settings.toml").load().unwrap();
	/// assert!(table.is_empty());
	/// ```
	pub fn optional(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: false,
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn load(&self) -> Result<toml::Table, SettingsError> {
		if !self.required && !self.path.exists() {
			tracing::debug!(path = %self.path.display(), "settings file not found, skipping");
			return Ok(toml::Table::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let table = toml::from_str::<toml::Table>(&content)?;
		tracing::debug!(path = %self.path.display(), "loaded settings file");
		Ok(table)
	}
}

/// Environment variable overrides
pub struct EnvSource {
	prefix: String,
}

impl EnvSource {
	/// Overrides read from `SZOKEWASH_*` variables
	pub fn new() -> Self {
		Self {
			prefix: ENV_PREFIX.to_string(),
		}
	}

	/// Use a different variable prefix
	///
	/// # Examples
	///
	/// ```
	/// use szokewash_conf::EnvSource;
	///
	/// let source = EnvSource::new().with_prefix("STAGING_");
	/// let mut table = toml::Table::new();
	/// source.apply_vars(&mut table, [("STAGING_BOOKINGS_TABLE".to_string(), "test".to_string())]);
	/// assert_eq!(table["backend"]["bookings_table"].as_str(), Some("test"));
	/// ```
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Apply overrides from the process environment.
	pub fn apply(&self, table: &mut toml::Table) {
		self.apply_vars(table, std::env::vars());
	}

	/// Apply overrides from the given variables.
	///
	/// Unknown variables are ignored, even when they carry the prefix.
	pub fn apply_vars<I>(&self, table: &mut toml::Table, vars: I)
	where
		I: IntoIterator<Item = (String, String)>,
	{
		for (name, value) in vars {
			let Some(suffix) = name.strip_prefix(&self.prefix) else {
				continue;
			};
			let Some((_, section, key)) = ENV_KEYS.iter().find(|(s, _, _)| *s == suffix) else {
				continue;
			};

			let entry = table
				.entry(section.to_string())
				.or_insert(toml::Value::Table(toml::Table::new()));
			if !entry.is_table() {
				*entry = toml::Value::Table(toml::Table::new());
			}
			if let toml::Value::Table(section_table) = entry {
				section_table.insert(key.to_string(), toml::Value::String(value));
			}
			// Never log the value, it may be the API key
			tracing::debug!(variable = %name, "applied environment override");
		}
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[rstest]
	fn test_env_overrides_existing_keys() {
		// Arrange
		let mut table: toml::Table =
			toml::from_str("[backend]\nurl = \"https://old.example\"\n").unwrap();

		// Act
		EnvSource::new().apply_vars(
			&mut table,
			vars(&[("SZOKEWASH_BACKEND_URL", "https://new.example")]),
		);

		// Assert
		assert_eq!(table["backend"]["url"].as_str(), Some("https://new.example"));
	}

	#[rstest]
	#[case("SZOKEWASH_UNKNOWN")]
	#[case("BACKEND_URL")]
	#[case("OTHER_BACKEND_URL")]
	fn test_env_ignores_unrelated_variables(#[case] name: &str) {
		let mut table = toml::Table::new();

		EnvSource::new().apply_vars(&mut table, vars(&[(name, "x")]));

		assert!(table.is_empty());
	}

	#[rstest]
	fn test_env_replaces_non_table_section() {
		let mut table: toml::Table = toml::from_str("site = 3\n").unwrap();

		EnvSource::new().apply_vars(&mut table, vars(&[("SZOKEWASH_HOME_PATH", "/szolgaltatasok")]));

		assert_eq!(table["site"]["home_path"].as_str(), Some("/szolgaltatasok"));
	}

	#[rstest]
	fn test_required_file_missing_is_error() {
		let result = TomlFileSource::new("/nonexistent/settings.toml").load();

		assert!(matches!(result, Err(SettingsError::Io(_))));
	}
}
