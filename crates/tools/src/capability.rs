use crate::{Error, ParameterSchema, ToolDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Optional features a server can switch on through the tool manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Weather,
    Search,
}

impl Capability {
    /// Every known capability, in the order descriptors are emitted.
    pub const ALL: [Capability; 2] = [Capability::Weather, Capability::Search];

    /// Manifest key for this capability.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Search => "search",
        }
    }

    /// Build the fixed descriptor template for this capability.
    pub fn descriptor(self) -> ToolDescriptor {
        match self {
            Self::Weather => weather_tool(),
            Self::Search => search_tool(),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::UnknownCapability(s.to_string()))
    }
}

fn weather_tool() -> ToolDescriptor {
    ToolDescriptor::function(
        "get_weather",
        "Get current weather and 7-day forecast for any location on Earth. \
         Includes temperature, humidity, precipitation, and wind speed.",
        ParameterSchema::object()
            .with_description("The location to get the weather for in English")
            .with_property(
                "location",
                ParameterSchema::string()
                    .with_description("The city or location name to get weather for"),
                true,
            ),
    )
}

fn search_tool() -> ToolDescriptor {
    ToolDescriptor::function(
        "search_web",
        "Search the web for current information about any topic",
        ParameterSchema::object().with_property("query", ParameterSchema::string(), true),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaType;
    use std::collections::HashSet;

    #[test]
    fn weather_template_requires_location() {
        let tool = Capability::Weather.descriptor();
        assert_eq!(tool.name, "get_weather");
        assert_eq!(tool.parameters.required, Some(vec!["location".to_string()]));

        let location = &tool.parameters.properties.as_ref().unwrap()["location"];
        assert_eq!(location.schema_type, SchemaType::String);
        assert!(location.description.is_some());
    }

    #[test]
    fn search_template_requires_query() {
        let tool = Capability::Search.descriptor();
        assert_eq!(tool.name, "search_web");
        assert_eq!(tool.parameters.required, Some(vec!["query".to_string()]));
        assert!(tool.parameters.description.is_none());
    }

    #[test]
    fn template_names_are_unique() {
        let names: HashSet<_> = Capability::ALL
            .into_iter()
            .map(|c| c.descriptor().name)
            .collect();
        assert_eq!(names.len(), Capability::ALL.len());
    }

    #[test]
    fn parse_capability_names() {
        assert_eq!("weather".parse::<Capability>().unwrap(), Capability::Weather);
        assert_eq!("search".parse::<Capability>().unwrap(), Capability::Search);
        assert!(matches!(
            "stocks".parse::<Capability>(),
            Err(Error::UnknownCapability(name)) if name == "stocks"
        ));
    }
}
