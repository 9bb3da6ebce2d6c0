use crate::fetch::FetchConfig;
use anyhow::{Context, Result};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_USER_AGENT: &str = "Mizo Green IPTV Player/1.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// User agent sent with playlist requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Playlist download timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Keys from an INI `[DEFAULT]` section, applied over the file's top-level keys.
#[derive(Debug, Default, Serialize, Deserialize)]
struct DefaultSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
}

const DEFAULT_SECTION_KEYS: [&str; 2] = ["DEFAULT", "default"];

fn default_section(config: &Config) -> Result<DefaultSection> {
    for key in DEFAULT_SECTION_KEYS {
        match config.get::<DefaultSection>(key) {
            Ok(section) => return Ok(section),
            Err(ConfigError::NotFound(_)) => continue,
            Err(e) => return Err(e).context("Invalid [DEFAULT] section"),
        }
    }
    Ok(DefaultSection::default())
}

impl Settings {
    /// Layers defaults, the config file (when it exists, including an INI `[DEFAULT]`
    /// section) and `M3UCAT_*` environment variables.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);

        if let Some(path) = config_path {
            if path.exists() {
                info!("Loading configuration from {}", path.display());
                builder = builder.add_source(File::from(path));
            } else {
                debug!("Config file {} not found, using defaults", path.display());
            }
        }

        let file_config = builder.build().context("Failed to build configuration")?;
        let section = default_section(&file_config)?;
        debug!("[DEFAULT] section: {:?}", section);

        let config = Config::builder()
            .add_source(file_config)
            .add_source(Config::try_from(&section)?)
            .add_source(Environment::with_prefix("M3UCAT").try_parsing(true))
            .build()
            .context("Failed to build configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}
