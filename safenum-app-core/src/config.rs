//! App configuration: JSON file, then environment overrides.
//!
//! Only runtime concerns are configurable. The fingerprint constants
//! (iterations, version seed, modulus) are compile-time constants in
//! `safenum_core::constants` and absent here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Environment variable overriding `root_ca`.
pub const ENV_ROOT_CA: &str = "SAFENUM_ROOT_CA";

/// Environment variable overriding `log_filter`.
pub const ENV_LOG: &str = "SAFENUM_LOG";

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// PEM bundle replacing the embedded trust anchor. `None` keeps the
    /// embedded certificate.
    pub root_ca: Option<PathBuf>,
    /// `tracing-subscriber` filter directive, e.g. `"info"` or
    /// `"safenum_app_core=debug"`.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root_ca: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from an optional JSON file, then apply environment overrides.
    ///
    /// No path means defaults. A path that cannot be read or parsed is an
    /// error: unlike the trust bootstrap, a broken config is not silently
    /// ignored.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(
            std::env::var(ENV_ROOT_CA).ok(),
            std::env::var(ENV_LOG).ok(),
        ))
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let data = std::fs::read_to_string(path).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&data).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Apply overrides; empty strings are ignored.
    pub fn with_overrides(mut self, root_ca: Option<String>, log_filter: Option<String>) -> Self {
        if let Some(root_ca) = root_ca.filter(|s| !s.is_empty()) {
            self.root_ca = Some(PathBuf::from(root_ca));
        }
        if let Some(filter) = log_filter.filter(|s| !s.is_empty()) {
            self.log_filter = filter;
        }
        self
    }
}
