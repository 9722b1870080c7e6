//! Service configuration - the static credentials file the app connects with

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_TIMEOUT_SECS};
use crate::models::AuthType;

/// Connection settings for the hosted table service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the service, e.g. `https://tables.example.com/v1`
    pub endpoint: String,
    pub integration_id: String,
    #[serde(default)]
    pub auth: AuthType,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ServiceConfig {
    /// Read and parse a YAML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: ServiceConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), endpoint = %config.endpoint, "Loaded service config");
        Ok(config)
    }

    /// Resolve which config file to use.
    ///
    /// An explicit path wins; otherwise `./ebconfig.yaml`, then the file under
    /// the platform config directory.
    pub fn locate(explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path);
        }

        let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
        }

        candidates
            .iter()
            .find(|p| p.is_file())
            .cloned()
            .with_context(|| {
                let tried: Vec<String> = candidates.iter().map(|p| p.display().to_string()).collect();
                format!("no config file found (tried: {})", tried.join(", "))
            })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
