//! Configuration resolution for the CLI.

use std::path::{Path, PathBuf};

use runtime::Configuration;

use crate::error::{Error, Result};

/// Config file picked up from the working directory when present.
pub const CONFIG_FILE: &str = "parley.toml";

/// Command-line overrides applied on top of the file configuration.
#[derive(Debug, Default)]
pub struct Overrides<'a> {
    pub server: Option<&'a str>,
    pub voice: Option<&'a str>,
}

/// Load the configuration.
///
/// An explicit path must exist. Without one, `parley.toml` in the working
/// directory is used if present, otherwise the built-in defaults.
pub fn resolve(path: Option<&Path>, overrides: Overrides<'_>) -> Result<Configuration> {
    let mut config = match path {
        Some(path) if !path.exists() => {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        Some(path) => Configuration::load(path)?,
        None => {
            let default_path = PathBuf::from(CONFIG_FILE);
            if default_path.exists() {
                Configuration::load(&default_path)?
            } else {
                Configuration::default()
            }
        }
    };

    if let Some(server) = overrides.server {
        config.endpoints = config.endpoints.with_server(server);
    }
    if let Some(voice) = overrides.voice {
        config.select_voice(voice)?;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = resolve(
            Some(Path::new("/nonexistent/parley.toml")),
            Overrides::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn explicit_file_is_loaded_and_overridden() {
        let path = std::env::temp_dir().join(format!("parley-{}.toml", std::process::id()));
        std::fs::write(&path, "voice = \"ash\"\n").unwrap();

        let config = resolve(
            Some(&path),
            Overrides {
                server: Some("http://10.0.0.2:8888"),
                voice: None,
            },
        )
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.voice, "ash");
        assert_eq!(config.endpoints.tools_config, "http://10.0.0.2:8888/tools_config");
    }

    #[test]
    fn unknown_voice_override_is_rejected() {
        let path = std::env::temp_dir().join(format!("parley-voice-{}.toml", std::process::id()));
        std::fs::write(&path, "").unwrap();

        let result = resolve(
            Some(&path),
            Overrides {
                server: None,
                voice: Some("robot"),
            },
        );
        std::fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(
            err,
            Error::Config(runtime::ConfigError::UnknownVoice(_))
        ));
    }
}
