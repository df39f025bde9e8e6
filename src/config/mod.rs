//
//  pulumi-org
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads and saves the `porg` configuration, a small TOML file stored in a
//! platform-specific directory, and turns it into the library's
//! [`ClientConfig`].
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/porg/config.toml`
//! - **macOS**: `~/Library/Application Support/porg/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\porg\config\config.toml`
//!
//! The `PORG_CONFIG` environment variable overrides the location.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [core]
//! host = "api.pulumi.com"
//! timeout = 60
//! default_org = "acme"
//! ```
//!
//! The access token is never stored here; it comes from `--token` or
//! `PULUMI_ACCESS_TOKEN`.
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations
//! - [`hosts`]: Host normalization

mod file;
mod hosts;

pub use file::*;
pub use hosts::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::{ClientConfig, DEFAULT_TIMEOUT};

/// Environment variable that overrides the configuration file path.
pub const CONFIG_PATH_ENV: &str = "PORG_CONFIG";

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &["host", "timeout", "default_org"];

/// Global configuration container.
///
/// All fields use `#[serde(default)]` so a partial or empty file loads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,
}

/// Core settings.
///
/// | Field | Default |
/// |-------|---------|
/// | `host` | `None` (the hosted API) |
/// | `timeout` | `60` seconds |
/// | `default_org` | `None` |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoreConfig {
    /// API host, with or without scheme.
    ///
    /// An explicit `http://` prefix is kept (local test servers); anything
    /// else is reached over HTTPS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Organization used when `--org` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_org: Option<String>,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            host: None,
            timeout: default_timeout(),
            default_org: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are used.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults if the file
    /// does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Gets a setting by key, `None` if unset or unknown.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "host" => self.core.host.clone(),
            "timeout" => Some(self.core.timeout.to_string()),
            "default_org" => self.core.default_org.clone(),
            _ => None,
        }
    }

    /// Sets a setting by key.
    ///
    /// Returns `Ok(false)` for an unknown key.
    ///
    /// # Errors
    ///
    /// Fails if `timeout` is not a positive whole number of seconds.
    pub fn set(&mut self, key: &str, value: String) -> Result<bool> {
        match key {
            "host" => self.core.host = Some(value),
            "timeout" => {
                let secs: u64 = value.parse().with_context(|| {
                    format!("timeout must be a number of seconds, got '{}'", value)
                })?;
                if secs == 0 {
                    bail!("timeout must be greater than zero");
                }
                self.core.timeout = secs;
            }
            "default_org" => self.core.default_org = Some(value),
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Resets a setting to its default. Returns `false` for an unknown key.
    pub fn unset(&mut self, key: &str) -> bool {
        match key {
            "host" => self.core.host = None,
            "timeout" => self.core.timeout = default_timeout(),
            "default_org" => self.core.default_org = None,
            _ => return false,
        }
        true
    }

    /// Builds the client settings, preferring `host_override` over the
    /// configured host.
    pub fn client_config(&self, host_override: Option<&str>) -> ClientConfig {
        let config = match host_override.or(self.core.host.as_deref()) {
            Some(host) if is_plain_http(host) => {
                ClientConfig::default().base_url(format!("http://{}/api/", normalize_host(host)))
            }
            Some(host) => ClientConfig::for_host(&normalize_host(host)),
            None => ClientConfig::default(),
        };
        config.timeout(Duration::from_secs(self.core.timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.core.timeout, 60);
        assert_eq!(config.get("timeout"), Some("60".to_string()));
        assert_eq!(config.get("host"), None);
        assert_eq!(config.get("unknown"), None);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("porg").join("config.toml");

        let mut config = Config::default();
        config.set("default_org", "acme".to_string()).unwrap();
        config.set("timeout", "15".to_string()).unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.core.default_org.as_deref(), Some("acme"));
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[core\ntimeout = ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_set_validates_timeout() {
        let mut config = Config::default();
        assert!(config.set("timeout", "soon".to_string()).is_err());
        assert!(config.set("timeout", "0".to_string()).is_err());
        assert!(!config.set("editor", "vim".to_string()).unwrap());
        assert_eq!(config.core.timeout, 60);
    }

    #[test]
    fn test_unset_restores_default() {
        let mut config = Config::default();
        config.set("host", "pulumi.example.com".to_string()).unwrap();
        config.set("timeout", "5".to_string()).unwrap();
        assert!(config.unset("host"));
        assert!(config.unset("timeout"));
        assert!(!config.unset("editor"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_client_config_host_resolution() {
        let mut config = Config::default();
        assert_eq!(config.client_config(None).base_url, "https://api.pulumi.com/api/");

        config.set("host", "https://Pulumi.Example.com/".to_string()).unwrap();
        config.set("timeout", "5".to_string()).unwrap();
        let client = config.client_config(None);
        assert_eq!(client.base_url, "https://pulumi.example.com/api/");
        assert_eq!(client.timeout, Duration::from_secs(5));

        let client = config.client_config(Some("http://127.0.0.1:4000"));
        assert_eq!(client.base_url, "http://127.0.0.1:4000/api/");
    }

    #[test]
    fn test_client_config_ignores_host_path_and_scheme_case() {
        let config = Config::default();
        let client = config.client_config(Some("https://pulumi.example.com/api/"));
        assert_eq!(client.base_url, "https://pulumi.example.com/api/");

        let client = config.client_config(Some("HTTP://127.0.0.1:4000/api"));
        assert_eq!(client.base_url, "http://127.0.0.1:4000/api/");
    }
}
