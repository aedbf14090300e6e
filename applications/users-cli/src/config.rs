/// CLI configuration
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use users_client::{ClientConfig, DEFAULT_BASE_URL};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "users.toml";

/// Prefix for environment overrides (`USERS_BASE_URL`, `USERS_TIMEOUT_SECS`).
pub const ENV_PREFIX: &str = "USERS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; unset means the HTTP client default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `users.toml` in the
    /// working directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`CliConfig::load`], reading overrides from `env` instead of
    /// the process environment when it is given.
    pub fn load_with_env(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut settings = config::Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?;

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::Load(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with USERS_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(env),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Apply command-line overrides, which win over file and environment
    pub fn merge_overrides(&mut self, base_url: Option<String>, timeout_secs: Option<u64>) {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if timeout_secs.is_some() {
            self.timeout_secs = timeout_secs;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "base URL is required (set USERS_BASE_URL)".to_string(),
            ));
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }

    /// Client settings derived from this configuration
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.base_url.clone());
        match self.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}
