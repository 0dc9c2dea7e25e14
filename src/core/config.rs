use crate::error::{MirrorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Listing mirrored when nothing else is configured.
pub const DEFAULT_START_URL: &str = "https://teste1234-eight.vercel.app/";

/// Local folder everything is saved under.
pub const DEFAULT_OUTPUT_DIR: &str = "downloads";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_USER_AGENT: &str = concat!("dirmirror/", env!("CARGO_PKG_VERSION"));

/// Entry parameters for a mirror run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorConfig {
    #[serde(default = "default_start_url")]
    pub start_url: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_start_url() -> String {
    DEFAULT_START_URL.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            start_url: default_start_url(),
            output_dir: default_output_dir(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl MirrorConfig {
    /// Keys accepted by `set`, in display order.
    pub const KEYS: [&'static str; 4] = ["url", "output", "timeout", "user-agent"];

    /// Load the persisted config, falling back to defaults when there is none.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let data = fs::read(path)?;

        // An empty file is treated like a missing one
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice(&data) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable config file {}: {}",
                    path.display(),
                    e
                );
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MirrorError::config("Could not determine config directory"))?;

        Ok(config_dir.join("dirmirror").join("config.json"))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Update one setting by its user-facing key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "url" => self.start_url = value.to_string(),
            "output" => self.output_dir = PathBuf::from(value),
            "timeout" => {
                let secs: u64 = value.parse().map_err(|_| {
                    MirrorError::config(format!("Timeout must be a whole number of seconds: {}", value))
                })?;
                if secs == 0 {
                    return Err(MirrorError::config("Timeout must be at least 1 second"));
                }
                self.timeout_secs = secs;
            }
            "user-agent" => self.user_agent = value.to_string(),
            other => {
                return Err(MirrorError::config(format!(
                    "Unknown key '{}' (expected one of: {})",
                    other,
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// Read one setting by its user-facing key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "url" => Some(self.start_url.clone()),
            "output" => Some(self.output_dir.display().to_string()),
            "timeout" => Some(self.timeout_secs.to_string()),
            "user-agent" => Some(self.user_agent.clone()),
            _ => None,
        }
    }
}
