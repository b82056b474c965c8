//! CLI configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crema_cache::FileCache;
use crema_core::config::{ApiConfig, CacheConfig, SessionConfig, StoreConfig};

/// CLI configuration, stored as TOML under the user's home directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront API URL (e.g. `http://localhost:8080`).
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Preferred display currency code.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Emails eligible for the admin area.
    #[serde(default)]
    pub admin_emails: Vec<String>,

    /// Period of the background token refresh, in seconds.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// Output format.
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_currency() -> String {
    "EUR".to_string()
}

const fn default_refresh_interval() -> u64 {
    600
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            currency: default_currency(),
            admin_emails: Vec::new(),
            refresh_interval_secs: default_refresh_interval(),
            output_format: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from file, falling back to defaults.
    pub fn load() -> crate::CliResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&content)
                .map_err(|e| crate::CliError::Config(format!("failed to parse config: {e}")))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves configuration to file.
    pub fn save(&self) -> crate::CliResult<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::CliError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Gets the configuration file path, `~/.crema/crema.toml`.
    pub fn config_path() -> crate::CliResult<PathBuf> {
        let home = dirs_next::home_dir().ok_or_else(|| {
            crate::CliError::Config("could not determine home directory".to_string())
        })?;
        Ok(home.join(".crema").join("crema.toml"))
    }

    /// Gets the effective server URL (from args or config).
    #[must_use]
    pub fn effective_server(&self, arg_server: Option<&str>) -> String {
        arg_server
            .map(ToString::to_string)
            .unwrap_or_else(|| self.server_url.clone())
    }

    /// Builds the store configuration for this CLI config.
    ///
    /// The cache path points at the default file cache, so tokens
    /// survive process restarts.
    pub fn store_config(&self, arg_server: Option<&str>) -> crate::CliResult<StoreConfig> {
        Ok(StoreConfig {
            api: ApiConfig {
                base_url: self.effective_server(arg_server),
                ..ApiConfig::default()
            },
            session: SessionConfig {
                refresh_interval_secs: self.refresh_interval_secs,
                admin_emails: self.admin_emails.clone(),
            },
            cache: CacheConfig {
                path: Some(FileCache::default_path()?),
            },
        })
    }

    /// Sets a configuration key from its string value.
    pub fn set(&mut self, key: &str, value: &str) -> crate::CliResult<()> {
        match key {
            "server_url" => self.server_url = value.to_string(),
            "currency" => {
                value
                    .parse::<crema_model::Currency>()
                    .map_err(crate::CliError::InvalidArgument)?;
                self.currency = value.to_ascii_uppercase();
            }
            "refresh_interval_secs" => {
                self.refresh_interval_secs = value
                    .parse()
                    .map_err(|_| crate::CliError::InvalidArgument(format!("not a number: {value}")))?;
            }
            other => {
                return Err(crate::CliError::InvalidArgument(format!(
                    "unknown config key: {other}"
                )));
            }
        }
        Ok(())
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
    /// Quiet (minimal output).
    Quiet,
}
