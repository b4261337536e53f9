//! Tool error types.

use thiserror::Error;

/// Tool errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A capability name has no descriptor template.
    #[error("unknown capability: {0}")]
    UnknownCapability(String),
}

pub type Result<T> = std::result::Result<T, Error>;
