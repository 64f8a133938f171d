//! Discount Configuration
//!
//! A mapping from discount tag to the class name and numeric parameters that
//! tag is configured with. Files ending in `.json` are read as JSON, anything
//! else as YAML.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::info;

mod loader;

pub use loader::ConfigLoader;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No file at the configured path
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// IO error reading the configuration file
    #[error("failed to read configuration file: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing error
    #[error("failed to parse JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Source of a [`DiscountConfig`].
pub trait ConfigProvider {
    /// Returns the configuration, loading it first if needed.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration cannot be loaded.
    fn config(&self) -> Result<&DiscountConfig, ConfigError>;
}

/// A single configured discount type
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DiscountEntry {
    /// Class name, informational only
    #[serde(default)]
    pub class: String,

    /// Named numeric parameters; `null` reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parameters: FxHashMap<String, Decimal>,
}

impl DiscountEntry {
    /// Create an entry with no parameters
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            parameters: FxHashMap::default(),
        }
    }

    /// Add a parameter, replacing any existing value with the same name
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: Decimal) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Look up a parameter by name
    pub fn parameter(&self, name: &str) -> Option<Decimal> {
        self.parameters.get(name).copied()
    }
}

/// Discount tag -> configured entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DiscountConfig {
    entries: FxHashMap<String, DiscountEntry>,
}

impl DiscountConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry under `tag`, replacing any existing entry
    #[must_use]
    pub fn with_entry(mut self, tag: impl Into<String>, entry: DiscountEntry) -> Self {
        self.entries.insert(tag.into(), entry);
        self
    }

    /// Parse configuration from a JSON string
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is not a valid mapping.
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Parse configuration from a YAML string
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the document is not a valid mapping.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Read configuration from a file, choosing the format by extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, cannot be read, or cannot be parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Err(error) => return Err(error.into()),
        };

        let config = if is_json(path) {
            Self::from_json_str(&contents)?
        } else {
            Self::from_yaml_str(&contents)?
        };

        info!(
            path = %path.display(),
            discounts = config.len(),
            "loaded discount configuration"
        );

        Ok(config)
    }

    /// Look up the entry configured for `tag`
    pub fn entry(&self, tag: &str) -> Option<&DiscountEntry> {
        self.entries.get(tag)
    }

    /// Whether `tag` is configured
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Number of configured tags
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tags are configured
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by tag
    pub fn entries(&self) -> Vec<(&str, &DiscountEntry)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(tag, entry)| (tag.as_str(), entry))
            .collect();

        entries.sort_unstable_by_key(|(tag, _)| *tag);
        entries
    }
}

impl ConfigProvider for DiscountConfig {
    fn config(&self) -> Result<&DiscountConfig, ConfigError> {
        Ok(self)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<FxHashMap<String, Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"))
}
