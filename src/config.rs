use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::engine::filter::StrengthBand;

pub const API_KEY_ENV: &str = "WORD_ASSOCIATIONS_API_KEY";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_api_host")]
    pub api_host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub default_strength: StrengthBand,
    #[serde(default)]
    pub default_sample_size: usize,
    /// Key from the environment or `.env`. Never written back to the file.
    #[serde(skip)]
    pub env_api_key: Option<String>,
}

fn default_api_url() -> String {
    "https://twinword-word-associations-v1.p.rapidapi.com/associations/".to_string()
}
fn default_api_host() -> String {
    "twinword-word-associations-v1.p.rapidapi.com".to_string()
}
fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_host: default_api_host(),
            api_key: None,
            request_timeout_secs: default_request_timeout_secs(),
            default_strength: StrengthBand::default(),
            default_sample_size: 0,
            env_api_key: None,
        }
    }
}

impl Config {
    /// Load `path`, falling back to defaults when it does not exist.
    /// A `.env` file and the environment can supply the API key.
    pub fn load_from(path: &Path) -> Result<Self> {
        let _ = dotenvy::dotenv();
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str::<Config>(&content)?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Config::default()
        };
        config.apply_env_key(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("themed-words")
            .join("config.toml")
    }

    /// Remember a non-blank environment key. It wins over the file's key
    /// but stays out of anything `save` writes.
    pub fn apply_env_key(&mut self, env_key: Option<String>) {
        if let Some(key) = env_key.filter(|k| !k.trim().is_empty()) {
            self.env_api_key = Some(key);
        }
    }

    pub fn effective_api_key(&self) -> Option<&str> {
        self.env_api_key.as_deref().or(self.api_key.as_deref())
    }
}
