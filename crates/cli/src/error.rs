//! CLI error types.

use std::path::PathBuf;
use thiserror::Error;

/// CLI errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A config file was named explicitly but does not exist.
    #[error("config file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// The tool list could not be loaded from the server.
    #[error("failed to load tools: {reason}")]
    LoadFailed { reason: String },

    /// Configuration is invalid.
    #[error(transparent)]
    Config(#[from] runtime::ConfigError),

    /// Fetching or publishing the manifest failed.
    #[error(transparent)]
    Manifest(#[from] runtime::ManifestLoadError),

    /// An unknown capability name was given.
    #[error(transparent)]
    Tools(#[from] tools::Error),

    /// Output could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
