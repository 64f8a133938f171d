//! Configuration Loader

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::config::{ConfigError, ConfigProvider, DiscountConfig};

/// Loads a [`DiscountConfig`] from disk on first use and keeps it.
///
/// Concurrent first calls read the file once. A failed load is not cached,
/// so the next call tries the file again.
#[derive(Debug)]
pub struct ConfigLoader {
    path: PathBuf,
    config: OnceCell<DiscountConfig>,
}

impl ConfigLoader {
    /// Create a loader for the file at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: OnceCell::new(),
        }
    }

    /// Path the configuration is read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the configuration has been loaded successfully
    pub fn is_loaded(&self) -> bool {
        self.config.get().is_some()
    }
}

impl ConfigProvider for ConfigLoader {
    fn config(&self) -> Result<&DiscountConfig, ConfigError> {
        if let Some(config) = self.config.get() {
            debug!(path = %self.path.display(), "using cached discount configuration");
            return Ok(config);
        }

        self.config
            .get_or_try_init(|| DiscountConfig::from_path(&self.path))
            .inspect_err(|error| {
                warn!(path = %self.path.display(), %error, "failed to load discount configuration");
            })
    }
}
