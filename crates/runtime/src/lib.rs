//! Parley runtime: client configuration and tool manifest loading.
//!
//! # Overview
//!
//! - **Configuration**: endpoint URLs, model and voice settings, the initial
//!   prompt, weather icons, and the list of tools exposed to the realtime
//!   session.
//! - **ToolManifestLoader**: fetches the server's tool manifest and rebuilds
//!   the configuration's tool list from fixed capability templates.
//!
//! The configuration is passed explicitly. Only the loader can replace its
//! tool list, and it needs `&mut Configuration` to do so.
//!
//! # Example
//!
//! ```ignore
//! use runtime::{Configuration, ToolManifestLoader};
//!
//! # async fn example() -> runtime::Result<()> {
//! let mut config = Configuration::default();
//! let mut loader = ToolManifestLoader::new(&config.endpoints)?;
//!
//! if let Some(outcome) = loader.on_ready(&mut config).await {
//!     println!("{outcome:?}");
//! }
//! for name in config.tool_names() {
//!     println!("{name}");
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod icons;
mod loader;

// Configuration
pub use config::{ConfigError, Configuration, Endpoints, InitialMessage};

// Error types
pub use error::{ManifestLoadError, Result};

// Manifest loading
pub use loader::{
    DEFAULT_TIMEOUT, LoadOutcome, LoadState, ToolManifestLoader, ToolManifestLoaderBuilder,
};

// Tool types
pub use tools::{Capability, ToolDescriptor, ToolManifest};
