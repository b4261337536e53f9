//! Server-provided tool manifest.
//!
//! The manifest maps capability names to enablement records:
//!
//! ```json
//! { "weather": { "enabled": true }, "search": { "enabled": false } }
//! ```
//!
//! Only the presence of a boolean `enabled` flag is checked. Unknown keys and
//! extra fields are kept so a manifest can be written back untouched.

use crate::{Capability, ToolDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const ENABLED: &str = "enabled";

/// Capability enablement as published by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolManifest {
    entries: Map<String, Value>,
}

impl ToolManifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a manifest from a JSON document. The top level must be an object.
    pub fn parse(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Whether `name` is present with `enabled` set to `true`.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.entries
            .get(name)
            .and_then(|entry| entry.get(ENABLED))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Enable or disable a capability, keeping any other fields of its record.
    pub fn set_enabled(&mut self, capability: Capability, enabled: bool) {
        let entry = self
            .entries
            .entry(capability.as_str())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(record) = entry {
            record.insert(ENABLED.to_string(), Value::Bool(enabled));
        }
    }

    /// Known capabilities that are enabled, in template order.
    pub fn enabled_capabilities(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL
            .into_iter()
            .filter(|c| self.is_enabled(c.as_str()))
    }

    /// Build the descriptor list for every enabled capability.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.enabled_capabilities()
            .map(Capability::descriptor)
            .collect()
    }

    /// Raw manifest entries.
    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }
}
