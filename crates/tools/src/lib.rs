//! Tool descriptors and capability templates.
//!
//! A server publishes a [`ToolManifest`] saying which optional
//! [`Capability`]s are enabled. Each enabled capability contributes one
//! [`ToolDescriptor`] built from a fixed template.

mod capability;
mod descriptor;
mod error;
mod manifest;

pub use capability::Capability;
pub use descriptor::{ParameterSchema, SchemaType, ToolDescriptor, ToolKind};
pub use error::{Error, Result};
pub use manifest::ToolManifest;
