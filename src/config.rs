use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::consts;
use crate::error::Error;

/// Settings for one run, loaded from a TOML file and passed by reference
/// into the collector.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) bugzilla: BugzillaConfig,
    #[serde(default)]
    pub(crate) storage: StorageConfig,
    #[serde(default)]
    pub(crate) retry: RetryConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct BugzillaConfig {
    /// Base URL of the tracker's REST endpoint
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) timeout_secs: u64,
}

impl Default for BugzillaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://bugzilla.example.org/rest".to_string(),
            api_key: String::new(),
            timeout_secs: consts::DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct StorageConfig {
    /// Directory for raw query artifacts
    pub(crate) json_dir: PathBuf,
    /// SQLite file holding the Stats table
    pub(crate) db_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            json_dir: PathBuf::from(consts::DEFAULT_JSON_DIR),
            db_path: PathBuf::from(consts::DEFAULT_DB_PATH),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct RetryConfig {
    pub(crate) max_attempts: u32,
    pub(crate) backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: consts::DEFAULT_MAX_ATTEMPTS,
            backoff_ms: consts::DEFAULT_BACKOFF_MS,
        }
    }
}

impl Config {
    /// Load from an explicit path, or the first file found in the default
    /// search locations. A missing or unparseable file is fatal.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self, Error> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => Self::search_paths()
                .into_iter()
                .find(|p| p.exists())
                .ok_or_else(|| {
                    Error::Config(
                        "no configuration file found (try --config or ~/.config/secstats/config.toml)"
                            .to_string(),
                    )
                })?,
        };

        let content = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;
        eprintln!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/secstats/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("secstats").join("config.toml"));
        }

        // 2. Platform config dir (e.g. ~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("secstats").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.secstats.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".secstats.toml"));
        }

        paths
    }

    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_secs(self.bugzilla.timeout_secs)
    }
}
