//! Client configuration.

use crate::icons;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tools::ToolDescriptor;

const DEFAULT_MODEL: &str = "gpt-4o-realtime-preview-2024-12-17";
const DEFAULT_VOICE: &str = "echo";
const VOICES: [&str; 8] = [
    "alloy", "ash", "ballad", "coral", "echo", "sage", "shimmer", "verse",
];
const INITIAL_MESSAGE: &str = "My name is Geert and I live in Antwerp, Belgium.";

/// Application configuration shared with the rest of the client.
///
/// Everything except the tool list is constant after construction. The tool
/// list starts empty and is rebuilt by [`ToolManifestLoader`](crate::ToolManifestLoader).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Endpoint URLs by role.
    pub endpoints: Endpoints,

    /// Realtime model identifier.
    pub model: String,

    /// Active voice.
    pub voice: String,

    /// Voices the realtime service accepts.
    pub voices: BTreeSet<String>,

    /// First message sent once a session opens.
    pub initial_message: InitialMessage,

    #[serde(skip_deserializing)]
    tools: Vec<ToolDescriptor>,

    #[serde(skip_deserializing)]
    weather_icons: BTreeMap<u16, String>,
}

/// Endpoint URLs, one per role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub session: String,
    pub weather: String,
    pub search: String,
    pub realtime: String,
    /// Where the tool manifest is fetched from.
    pub tools_config: String,
    /// Where an edited tool manifest is posted to.
    pub update_tools_config: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            session: "http://localhost:8888/session".to_string(),
            weather: "http://localhost:8888/weather".to_string(),
            search: "http://localhost:8888/search".to_string(),
            realtime: "https://api.openai.com/v1/realtime".to_string(),
            tools_config: "http://localhost:8888/tools_config".to_string(),
            update_tools_config: "http://localhost:8888/update_tools_config".to_string(),
        }
    }
}

impl Endpoints {
    /// Point the manifest endpoints at another server, e.g. `http://host:port`.
    pub fn with_server(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.tools_config = format!("{base}/tools_config");
        self.update_tools_config = format!("{base}/update_tools_config");
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialMessage {
    pub text: String,
}

impl Default for InitialMessage {
    fn default() -> Self {
        Self {
            text: INITIAL_MESSAGE.to_string(),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            model: DEFAULT_MODEL.to_string(),
            voice: DEFAULT_VOICE.to_string(),
            voices: VOICES.iter().map(|v| v.to_string()).collect(),
            initial_message: InitialMessage::default(),
            tools: Vec::new(),
            weather_icons: icons::weather_icons(),
        }
    }
}

impl Configuration {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string. Missing fields keep their defaults.
    ///
    /// The active voice must be one of the allowed voices.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if !config.voices.contains(&config.voice) {
            return Err(ConfigError::UnknownVoice(config.voice));
        }
        Ok(config)
    }

    /// Tool descriptors loaded from the server manifest.
    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Names of the loaded tools.
    pub fn tool_names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    /// Replace the tool list wholesale.
    pub(crate) fn replace_tools(&mut self, tools: Vec<ToolDescriptor>) {
        self.tools.clear();
        self.tools.extend(tools);
    }

    /// Display glyph for a weather code.
    pub fn weather_icon(&self, code: u16) -> Option<&str> {
        self.weather_icons.get(&code).map(String::as_str)
    }

    /// The full weather code lookup table.
    pub fn weather_icons(&self) -> &BTreeMap<u16, String> {
        &self.weather_icons
    }

    /// Switch the active voice. Must be one of [`Configuration::voices`].
    pub fn select_voice(&mut self, voice: &str) -> Result<(), ConfigError> {
        if !self.voices.contains(voice) {
            return Err(ConfigError::UnknownVoice(voice.to_string()));
        }
        self.voice = voice.to_string();
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("unknown voice '{0}'")]
    UnknownVoice(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_without_tools() {
        let config = Configuration::default();
        assert!(config.tools().is_empty());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.voice, "echo");
        assert!(config.voices.contains(&config.voice));
        assert_eq!(config.voices.len(), 8);
        assert_eq!(config.initial_message.text, INITIAL_MESSAGE);
    }

    #[test]
    fn weather_icon_lookup() {
        let config = Configuration::default();
        assert_eq!(config.weather_icon(3), Some("☁️"));
        assert_eq!(config.weather_icon(95), Some("⛈️"));
        assert_eq!(config.weather_icon(1000), None);
    }

    #[test]
    fn parse_overrides_selected_fields() {
        let toml = r#"
model = "gpt-4o-mini-realtime-preview"
voice = "sage"

[endpoints]
tools_config = "http://example.test/tools_config"
"#;
        let config = Configuration::parse(toml).unwrap();

        assert_eq!(config.model, "gpt-4o-mini-realtime-preview");
        assert_eq!(config.voice, "sage");
        assert_eq!(config.endpoints.tools_config, "http://example.test/tools_config");
        // Untouched fields keep their defaults.
        assert_eq!(config.endpoints.session, Endpoints::default().session);
        assert_eq!(config.voices.len(), 8);
        assert!(config.weather_icon(0).is_some());
    }

    #[test]
    fn parse_ignores_tools_in_file() {
        let toml = r#"
[[tools]]
name = "injected"
description = "should not load"
parameters = { type = "object" }
"#;
        let config = Configuration::parse(toml).unwrap();
        assert!(config.tools().is_empty());
    }

    #[test]
    fn parse_rejects_invalid_toml() {
        assert!(matches!(
            Configuration::parse("model = "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn parse_rejects_unknown_voice() {
        let err = Configuration::parse("voice = \"robot\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownVoice(v) if v == "robot"));

        // An empty allow-list rejects even the default voice.
        let err = Configuration::parse("voices = []\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownVoice(v) if v == "echo"));
    }

    #[test]
    fn parse_accepts_voice_from_custom_list() {
        let config = Configuration::parse("voice = \"nova\"\nvoices = [\"nova\"]\n").unwrap();
        assert_eq!(config.voice, "nova");
    }

    #[test]
    fn select_voice_validates() {
        let mut config = Configuration::default();
        config.select_voice("coral").unwrap();
        assert_eq!(config.voice, "coral");

        let err = config.select_voice("robot").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownVoice(v) if v == "robot"));
        assert_eq!(config.voice, "coral");
    }

    #[test]
    fn with_server_rewrites_manifest_endpoints() {
        let endpoints = Endpoints::default().with_server("http://127.0.0.1:9000/");
        assert_eq!(endpoints.tools_config, "http://127.0.0.1:9000/tools_config");
        assert_eq!(
            endpoints.update_tools_config,
            "http://127.0.0.1:9000/update_tools_config"
        );
    }

    #[test]
    fn replace_tools_is_wholesale() {
        let mut config = Configuration::default();
        config.replace_tools(vec![tools::Capability::Weather.descriptor()]);
        config.replace_tools(vec![tools::Capability::Search.descriptor()]);
        assert_eq!(config.tool_names().collect::<Vec<_>>(), ["search_web"]);
    }
}
