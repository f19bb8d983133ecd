use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path, time::Duration};

pub const CONFIG_ENV_VAR: &str = "NOTIFICATION_SERVICE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub port: u16,
    /// Upper bound on reading a request body
    #[serde(with = "humantime_serde")]
    pub read_timeout: Duration,
    /// Upper bound on producing a response
    #[serde(with = "humantime_serde")]
    pub write_timeout: Duration,
    /// Connections with no traffic for this long are closed
    #[serde(with = "humantime_serde")]
    pub idle_timeout: Duration,
    /// Largest accepted request body, in bytes
    pub body_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            read_timeout: Duration::from_secs(5),
            write_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(120),
            body_limit: 1 << 20,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
}

fn load_from_file(path: &str) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

pub fn load_config() -> Result<Config, ConfigError> {
    // Try env path
    if let Ok(config_path) = env::var(CONFIG_ENV_VAR) {
        if Path::new(&config_path).exists() {
            return load_from_file(&config_path);
        }
        tracing::warn!(
            "Config file '{}' not found, falling back to '{}'",
            config_path,
            DEFAULT_CONFIG_PATH
        );
    }

    // Fallback to config.yaml
    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        return load_from_file(DEFAULT_CONFIG_PATH);
    }

    // Fallback to built-in defaults
    tracing::info!("No config file found, using default configuration");
    Ok(Config::default())
}
