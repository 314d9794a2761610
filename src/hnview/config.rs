use crate::error::{HnError, Result};
use crate::fetch::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_QUERY_KEY: &str = "search";

/// Configuration for hnview, stored in `config.json` in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HnConfig {
    /// Search endpoint; the encoded query text is appended verbatim
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Store key the last query is remembered under
    #[serde(default = "default_query_key")]
    pub query_key: String,

    /// Query used when nothing has been remembered yet
    #[serde(default)]
    pub default_query: String,

    /// Per-request timeout in seconds. Unset means wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_query_key() -> String {
    DEFAULT_QUERY_KEY.to_string()
}

impl Default for HnConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            query_key: default_query_key(),
            default_query: String::new(),
            timeout_secs: None,
        }
    }
}

/// Keys accepted by `config get/set`, in display order.
pub const CONFIG_KEYS: [&str; 4] = ["endpoint", "query-key", "default-query", "timeout"];

impl HnConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HnError::Io)?;
        let config: HnConfig = serde_json::from_str(&content).map_err(HnError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(HnError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(HnError::Serialization)?;
        fs::write(config_path, content).map_err(HnError::Io)?;
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "endpoint" => Ok(self.endpoint.clone()),
            "query-key" => Ok(self.query_key.clone()),
            "default-query" => Ok(self.default_query.clone()),
            "timeout" => Ok(self
                .timeout_secs
                .map(|s| s.to_string())
                .unwrap_or_else(|| "none".to_string())),
            other => Err(HnError::Config(format!("unknown key: {}", other))),
        }
    }

    /// Sets a key from its textual form. `timeout` accepts positive seconds or `none`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "endpoint" => {
                url::Url::parse(value)
                    .map_err(|e| HnError::Config(format!("invalid endpoint {}: {}", value, e)))?;
                self.endpoint = value.to_string();
            }
            "query-key" => {
                if value.is_empty() {
                    return Err(HnError::Config("query-key cannot be empty".into()));
                }
                self.query_key = value.to_string();
            }
            "default-query" => self.default_query = value.to_string(),
            "timeout" => {
                self.timeout_secs = match value {
                    "none" | "" => None,
                    secs => match secs.parse::<u64>() {
                        Ok(n) if n > 0 => Some(n),
                        _ => {
                            return Err(HnError::Config(format!(
                                "timeout must be a positive number of seconds or 'none': {}",
                                secs
                            )))
                        }
                    },
                };
            }
            other => return Err(HnError::Config(format!("unknown key: {}", other))),
        }
        Ok(())
    }
}
