//! CLI configuration: server URL and session token, stored as TOML.

use std::path::PathBuf;
use std::{env, fs, io};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Persisted CLI settings. Both fields are optional; flags and environment
/// variables override them at resolution time.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub server: Option<String>,
    pub token: Option<String>,
}

/// Config directory: `ACTIVA_CONFIG_DIR` override (used by tests for
/// isolation), else `~/.activa`.
fn config_dir() -> PathBuf {
    env::var("ACTIVA_CONFIG_DIR")
        .ok()
        .map(PathBuf::from)
        .unwrap_or_else(|| home_dir().join(".activa"))
}

fn home_dir() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

impl Config {
    /// Load the config file; a missing file is an empty config.
    pub fn load() -> Result<Self> {
        let path = config_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        toml::from_str(&content).with_context(|| format!("malformed config {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let dir = config_dir();
        fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;

        let path = config_path();
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}
