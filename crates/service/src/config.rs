//! TOML configuration.
//!
//! Every section and key is optional; a missing file section falls back to
//! the defaults below.
//!
//! ```toml
//! [catalog]
//! source = "bundled"   # bundled | file | api
//! path = "data/catalog.json"
//!
//! [storage]
//! dir = ".course-compass"
//!
//! [api]
//! base_url = "http://localhost:8000"
//! timeout_seconds = 10
//!
//! [planner]
//! min_credits = 12
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompassConfig {
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
    pub api: ApiConfig,
    pub planner: PlannerConfig,
}

/// Where the course list comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    /// The dataset compiled into the binary
    #[default]
    Bundled,
    /// A JSON file at `catalog.path`
    File,
    /// `GET /courses` on the configured API
    Api,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub source: CatalogSource,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".course-compass"),
        }
    }
}

impl StorageConfig {
    pub fn cart_path(&self) -> PathBuf {
        self.dir.join("cart.json")
    }

    pub fn enrolled_path(&self) -> PathBuf {
        self.dir.join("enrolled.json")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub min_credits: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_credits: planner::DEFAULT_MIN_CREDITS,
        }
    }
}

impl CompassConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Reading config file {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Loading config {}", path.display()))
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("TOML parsing error")?;
        config.validate()?;
        Ok(config)
    }

    /// Check the combination of settings makes sense.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.source == CatalogSource::File && self.catalog.path.is_none() {
            bail!("catalog.source = \"file\" needs catalog.path");
        }
        if self.api.timeout_seconds == 0 {
            bail!("api.timeout_seconds must be positive");
        }
        if self.api.base_url.trim().is_empty() {
            bail!("api.base_url must not be empty");
        }
        Ok(())
    }

    /// Read a catalog from `path` instead of the configured source.
    pub fn with_catalog_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog.source = CatalogSource::File;
        self.catalog.path = Some(path.into());
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage.dir = dir.into();
        self
    }
}
