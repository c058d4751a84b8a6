//! Configuration loaded from a TOML file
//!
//! Every field is optional. A missing file yields [`Config::default`].
//!
//! ```toml
//! endpoint = "https://api.mymemory.translated.net/get"
//! debounce_ms = 500
//! timeout_secs = 10
//! source_lang = "pt-br"
//! target_lang = "en"
//! contact_email = "me@example.com"
//! discard_stale = false
//!
//! [log]
//! enabled = true
//! level = "info"
//! dir = "/tmp"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::languages;

pub const DEFAULT_ENDPOINT: &str = "https://api.mymemory.translated.net/get";
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/tradutor/config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    /// Sent as MyMemory's `de` parameter
    #[serde(default)]
    pub contact_email: Option<String>,
    /// Ignore responses that arrive after a newer request was issued
    #[serde(default)]
    pub discard_stale: bool,
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            debounce_ms: default_debounce_ms(),
            timeout_secs: default_timeout_secs(),
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            contact_email: None,
            discard_stale: false,
            log: LogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for `tradutor.log` (default: the system temp dir)
    #[serde(default)]
    pub dir: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            dir: None,
        }
    }
}

impl LogConfig {
    pub fn directory(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => PathBuf::from(shellexpand(dir)),
            None => std::env::temp_dir(),
        }
    }
}

impl Config {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> AppResult<()> {
        for code in [&self.source_lang, &self.target_lang] {
            if !languages::is_supported(code) {
                return Err(AppError::UnknownLanguage(code.clone()));
            }
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(AppError::Config(format!(
                "endpoint must be an http(s) URL, got {:?}",
                self.endpoint
            )));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::Config("timeout_secs must be positive".into()));
        }
        Ok(())
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_debounce_ms() -> u64 {
    500
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_source_lang() -> String {
    languages::DEFAULT_SOURCE.to_string()
}
fn default_target_lang() -> String {
    languages::DEFAULT_TARGET.to_string()
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}

/// Expand a leading `~/` to the home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load and validate the config at `path`, falling back to defaults if the
/// file does not exist.
pub fn load(path: &str) -> AppResult<Config> {
    let expanded = shellexpand(path);
    let path = Path::new(&expanded);
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("failed to read {}: {e}", path.display())))?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
