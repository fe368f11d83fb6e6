//! Error type for the app runtime.

use std::path::PathBuf;

use safenum_core::FingerprintError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Fingerprint pipeline failure. Nothing may be displayed.
    #[error(transparent)]
    Fingerprint(#[from] FingerprintError),

    /// Configuration file unreadable or invalid.
    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// TLS connector could not be built from the trust anchors.
    #[error("TLS error: {0}")]
    Tls(String),

    /// A per-party branch panicked or was aborted.
    #[error("Task error: {0}")]
    Task(String),
}

impl AppError {
    /// Stable code for front ends; core errors keep their registry code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Fingerprint(e) => e.code(),
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Tls(_) => "TLS_ERROR",
            AppError::Task(_) => "TASK_ERROR",
        }
    }
}
