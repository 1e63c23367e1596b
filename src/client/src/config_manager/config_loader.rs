use std::path::Path;

use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{Config as RConfig, ConfigBuilder, Environment, File, FileFormat};
use peasy_common::constants::{DEFAULT_INGEST_URL, ENV_PREFIX};
use peasy_common::http_client::StatusPolicy;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Identifies the website in the peasy dashboard.
    pub website_id: String,
    /// Base url events and profiles are posted under. Point it at a proxy to
    /// route ingest traffic through your own domain.
    pub ingest_url: String,
    #[serde(default)]
    pub status_policy: StatusPolicy,
}

impl Config {
    pub fn new(website_id: impl Into<String>) -> Self {
        Self {
            website_id: website_id.into(),
            ingest_url: DEFAULT_INGEST_URL.to_string(),
            status_policy: StatusPolicy::default(),
        }
    }

    pub fn with_ingest_url(mut self, ingest_url: impl Into<String>) -> Self {
        self.ingest_url = ingest_url.into();
        self
    }

    pub fn with_status_policy(mut self, status_policy: StatusPolicy) -> Self {
        self.status_policy = status_policy;
        self
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>> {
        // website_id has no real default; an empty one is rejected by the
        // server, not here
        let builder = RConfig::builder()
            .set_default("website_id", "")?
            .set_default("ingest_url", DEFAULT_INGEST_URL)?
            .set_default("status_policy", "fire_and_forget")?;

        Ok(builder)
    }

    /// Defaults overridden by `PEASY_WEBSITE_ID`, `PEASY_INGEST_URL` and
    /// `PEASY_STATUS_POLICY`.
    pub fn load_default_config() -> Result<Config> {
        let builder =
            Self::builder_with_defaults()?.add_source(Environment::with_prefix(ENV_PREFIX));

        Self::finish(builder)
    }

    /// Defaults, then the toml file at `path`, then the environment.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();

        let builder = Self::builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .add_source(Environment::with_prefix(ENV_PREFIX));

        Self::finish(builder)
            .with_context(|| format!("failed to load config from {}", path.display()))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Config> {
        let config: Config = builder
            .build()?
            .try_deserialize()
            .context("failed to parse config")?;

        if config.website_id.is_empty() {
            warn!("website_id is not set, the ingest endpoint will reject every payload");
        }

        Ok(config)
    }
}
