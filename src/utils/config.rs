use std::path::PathBuf;
use std::sync::Arc;

use easy_config_store::ConfigStore;
use eyre::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub type Config = Arc<ConfigInner>;

pub fn config(path: PathBuf) -> Result<Config> {
    let config_store = ConfigStore::<ConfigInner>::read(path, "config".to_string())?;
    let inner = (*config_store).clone();

    info!("config parsing successful");
    debug!("loaded configuration:\n{}", toml::to_string_pretty(&inner.redacted())?);

    Ok(Arc::new(inner))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ConfigInner {
    #[serde(default)]
    pub linkedin: LinkedinConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl ConfigInner {
    fn redacted(&self) -> ConfigInner {
        let mut copy = self.clone();
        if copy.linkedin.password.is_some() {
            copy.linkedin.password = Some("********".to_string());
        }
        copy
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LinkedinConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
}

fn default_base_url() -> String {
    "https://www.linkedin.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> usize {
    1
}

fn default_retry_delay_ms() -> u64 {
    500
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

impl Default for LinkedinConfig {
    fn default() -> Self {
        LinkedinConfig {
            username: None,
            password: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: default_output_directory(),
        }
    }
}

impl Default for ConfigInner {
    fn default() -> Self {
        let cfg = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.default.toml",));

        toml::from_str(cfg).expect("bundled config.default.toml is valid")
    }
}
