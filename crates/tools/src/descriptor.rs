//! Tool descriptor types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of an invocable tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Function,
}

/// JSON Schema type tag for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Object,
    String,
    Number,
    Integer,
    Boolean,
    Array,
}

/// Parameter schema for a tool, a small subset of JSON Schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSchema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, ParameterSchema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl ParameterSchema {
    /// Create a schema of the given type with no further constraints.
    pub fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            properties: None,
            required: None,
        }
    }

    /// Create an empty object schema.
    pub fn object() -> Self {
        Self::new(SchemaType::Object)
    }

    /// Create a string schema.
    pub fn string() -> Self {
        Self::new(SchemaType::String)
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a property, optionally marking it as required.
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        schema: ParameterSchema,
        required: bool,
    ) -> Self {
        let name = name.into();
        if required {
            self.required.get_or_insert_with(Vec::new).push(name.clone());
        }
        self.properties
            .get_or_insert_with(BTreeMap::new)
            .insert(name, schema);
        self
    }
}

/// A capability exposed to a downstream consumer such as a realtime session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    #[serde(rename = "type", default)]
    pub kind: ToolKind,
    pub name: String,
    pub description: String,
    pub parameters: ParameterSchema,
}

impl ToolDescriptor {
    /// Create a function descriptor.
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: ParameterSchema,
    ) -> Self {
        Self {
            kind: ToolKind::Function,
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}
