//! Tool manifest loading.

use std::time::Duration;

use tools::ToolManifest;
use tracing::{debug, error, info};

use crate::{Configuration, Endpoints, ManifestLoadError, Result};

/// Default timeout for manifest requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Progress of the loader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    NotStarted,
    InFlight,
    Loaded,
    Failed,
}

/// Completion signal of a load.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum LoadOutcome {
    /// The tool list was rebuilt with this many descriptors.
    Loaded { tools: usize },
    /// The manifest could not be loaded; the tool list was left untouched.
    Failed { reason: String },
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

/// Builder for creating a manifest loader.
#[derive(Debug, Clone)]
pub struct ToolManifestLoaderBuilder {
    manifest_url: String,
    update_url: String,
    timeout: Duration,
}

impl ToolManifestLoaderBuilder {
    /// Create a new builder for the manifest endpoints of `endpoints`.
    pub fn new(endpoints: &Endpoints) -> Self {
        Self {
            manifest_url: endpoints.tools_config.clone(),
            update_url: endpoints.update_tools_config.clone(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the loader.
    pub fn build(self) -> Result<ToolManifestLoader> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ManifestLoadError::Network(e.to_string()))?;

        Ok(ToolManifestLoader {
            client,
            manifest_url: self.manifest_url,
            update_url: self.update_url,
            state: LoadState::NotStarted,
        })
    }
}

/// Keeps [`Configuration::tools`] in sync with the server's tool manifest.
pub struct ToolManifestLoader {
    client: reqwest::Client,
    manifest_url: String,
    update_url: String,
    state: LoadState,
}

impl ToolManifestLoader {
    /// Create a loader with default settings.
    pub fn new(endpoints: &Endpoints) -> Result<Self> {
        Self::builder(endpoints).build()
    }

    /// Create a builder for the loader.
    pub fn builder(endpoints: &Endpoints) -> ToolManifestLoaderBuilder {
        ToolManifestLoaderBuilder::new(endpoints)
    }

    /// Current progress.
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Run the first load once the application is ready.
    ///
    /// Only the first call loads; later calls return `None` without any
    /// network traffic.
    pub async fn on_ready(&mut self, config: &mut Configuration) -> Option<LoadOutcome> {
        if self.state != LoadState::NotStarted {
            return None;
        }
        Some(self.load(config).await)
    }

    /// Fetch the manifest and rebuild the tool list from it.
    ///
    /// Failures are logged and reported through the outcome, never returned
    /// as errors. The tool list is only cleared after the manifest decodes.
    pub async fn load(&mut self, config: &mut Configuration) -> LoadOutcome {
        self.state = LoadState::InFlight;

        match self.fetch().await {
            Ok(manifest) => {
                config.replace_tools(manifest.descriptors());
                let names: Vec<&str> = config.tool_names().collect();
                info!(tools = ?names, "tools config loaded");
                self.state = LoadState::Loaded;
                LoadOutcome::Loaded { tools: names.len() }
            }
            Err(e) => {
                error!(url = %self.manifest_url, error = %e, "failed to load tools config");
                self.state = LoadState::Failed;
                LoadOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Fetch and decode the manifest without touching any configuration.
    pub async fn fetch(&self) -> Result<ToolManifest> {
        debug!(url = %self.manifest_url, "fetching tools config");

        let response = self
            .client
            .get(&self.manifest_url)
            .send()
            .await
            .map_err(|e| ManifestLoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ManifestLoadError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ManifestLoadError::Network(e.to_string()))?;

        ToolManifest::parse(&body).map_err(|e| ManifestLoadError::Decode(e.to_string()))
    }

    /// Publish an edited manifest to the server.
    pub async fn update(&self, manifest: &ToolManifest) -> Result<()> {
        debug!(url = %self.update_url, "updating tools config");

        let response = self
            .client
            .post(&self.update_url)
            .json(manifest)
            .send()
            .await
            .map_err(|e| ManifestLoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ManifestLoadError::Status(status.as_u16()));
        }

        info!(url = %self.update_url, "tools config updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn new_loader_has_not_started() {
        let loader = ToolManifestLoader::new(&Endpoints::default()).unwrap();
        assert_eq!(loader.state(), LoadState::NotStarted);
    }

    #[tokio::test]
    async fn unreachable_server_fails_without_touching_tools() {
        // Port 9 (discard) is not expected to serve HTTP locally.
        let endpoints = Endpoints::default().with_server("http://127.0.0.1:9");
        let mut loader = ToolManifestLoader::builder(&endpoints)
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let mut config = Configuration::default();
        config.replace_tools(vec![tools::Capability::Search.descriptor()]);

        let logs = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::fmt()
            .with_writer({
                let logs = logs.clone();
                move || LogWriter(logs.clone())
            })
            .with_ansi(false)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);

        let outcome = loader.load(&mut config).await;
        drop(guard);

        assert!(!outcome.is_loaded());
        assert_eq!(loader.state(), LoadState::Failed);
        assert_eq!(config.tool_names().collect::<Vec<_>>(), ["search_web"]);

        let logged = String::from_utf8_lossy(&logs.lock().unwrap()).into_owned();
        assert!(logged.contains("failed to load tools config"), "{logged}");
        assert!(logged.contains("network error"), "{logged}");
    }

    struct LogWriter(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
