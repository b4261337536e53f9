use thiserror::Error;

/// Failure to fetch, decode, or publish the tool manifest.
#[derive(Debug, Error)]
pub enum ManifestLoadError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error: status {0}")]
    Status(u16),

    #[error("invalid manifest: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ManifestLoadError>;
