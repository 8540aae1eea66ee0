//
//  confluence-sdk
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Site and HTTP settings for the `confluence` CLI, stored as TOML.
//!
//! ## Configuration File Location
//!
//! - `$CONFLUENCE_CONFIG` if set
//! - **Linux**: `~/.config/confluence/config.toml`
//! - **macOS**: `~/Library/Application Support/confluence/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\confluence\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [site]
//! url = "https://acme.atlassian.net"
//! username = "me@example.com"
//! token = "ATATT3x..."
//!
//! [http]
//! timeout_secs = 30
//! ```
//!
//! ## Environment Overrides
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `CONFLUENCE_URL` | `site.url` |
//! | `CONFLUENCE_USERNAME` | `site.username` |
//! | `CONFLUENCE_API_TOKEN` | `site.token` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use confluence_sdk::config::Config;
//!
//! let config = Config::load()?.with_env_overrides();
//! println!("Site: {:?}", config.site.url);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod file;

pub use file::*;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::auth::{mask_secret, AuthCredential};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CONFLUENCE_CONFIG";
/// Environment variable overriding `site.url`.
pub const URL_ENV: &str = "CONFLUENCE_URL";
/// Environment variable overriding `site.username`.
pub const USERNAME_ENV: &str = "CONFLUENCE_USERNAME";
/// Environment variable overriding `site.token`.
pub const TOKEN_ENV: &str = "CONFLUENCE_API_TOKEN";

/// The environment variable that overrides `key` at load time, if any.
pub fn env_override_for(key: &str) -> Option<&'static str> {
    match key {
        "site.url" => Some(URL_ENV),
        "site.username" => Some(USERNAME_ENV),
        "site.token" => Some(TOKEN_ENV),
        _ => None,
    }
}

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "site.url",
    "site.username",
    "site.token",
    "http.timeout_secs",
    "http.user_agent",
];

/// Complete configuration for the CLI.
///
/// All sections use `#[serde(default)]`, so a partial or empty file loads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// The Confluence site and credentials.
    #[serde(default)]
    pub site: SiteConfig,

    /// Transport settings.
    #[serde(default)]
    pub http: HttpConfig,
}

/// Which site to talk to and as whom.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SiteConfig {
    /// Site base URL, e.g. `https://acme.atlassian.net`.
    #[serde(default)]
    pub url: Option<String>,

    /// Account email for Basic authentication. Without it, `token` is sent
    /// as a bearer token.
    #[serde(default)]
    pub username: Option<String>,

    /// API token.
    #[serde(default)]
    pub token: Option<String>,
}

/// Settings handed to the HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HttpConfig {
    /// Per-request timeout in seconds. `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Overrides the default `User-Agent` header.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl Config {
    /// Loads from [`config_path`](Self::config_path), or returns defaults if
    /// the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads from `path`, or returns defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Saves to [`config_path`](Self::config_path).
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Location of the config file: `$CONFLUENCE_CONFIG`, else the platform
    /// config directory.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Applies `CONFLUENCE_URL`, `CONFLUENCE_USERNAME` and
    /// `CONFLUENCE_API_TOKEN` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary lookup. Empty values are ignored.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(url) = lookup(URL_ENV) {
            self.site.url = Some(url);
        }
        if let Some(username) = lookup(USERNAME_ENV) {
            self.site.username = Some(username);
        }
        if let Some(token) = lookup(TOKEN_ENV) {
            self.site.token = Some(token);
        }
        self
    }

    /// The configured site URL.
    pub fn site_url(&self) -> Result<&str> {
        self.site.url.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "No Confluence site configured. Run `confluence config set site.url <URL>` or set {URL_ENV}"
            )
        })
    }

    /// Credentials derived from the site section, if a token is configured.
    pub fn credential(&self) -> Option<AuthCredential> {
        let token = self.site.token.clone()?;
        Some(match &self.site.username {
            Some(username) => AuthCredential::basic(username.clone(), token),
            None => AuthCredential::bearer(token),
        })
    }

    /// Reads a value by dotted key. Tokens are masked.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "site.url" => self.site.url.clone(),
            "site.username" => self.site.username.clone(),
            "site.token" => self.site.token.as_deref().map(mask_secret),
            "http.timeout_secs" => Some(self.http.timeout_secs.to_string()),
            "http.user_agent" => self.http.user_agent.clone(),
            _ => None,
        }
    }

    /// Writes a value by dotted key.
    ///
    /// Fails on unknown keys and on values that do not parse for the key.
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "site.url" => {
                url::Url::parse(&value)
                    .with_context(|| format!("'{value}' is not a valid URL"))?;
                self.site.url = Some(value.trim_end_matches('/').to_string());
            }
            "site.username" => self.site.username = Some(value),
            "site.token" => self.site.token = Some(value),
            "http.timeout_secs" => {
                self.http.timeout_secs = value
                    .parse()
                    .with_context(|| format!("'{value}' is not a number of seconds"))?;
            }
            "http.user_agent" => self.http.user_agent = Some(value),
            _ => anyhow::bail!(
                "Unknown config key '{key}'. Valid keys: {}",
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("site.url", "https://acme.atlassian.net/".to_string()).unwrap();
        config.set("site.username", "me@example.com".to_string()).unwrap();
        config.set("http.timeout_secs", "5".to_string()).unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.site.url.as_deref(), Some("https://acme.atlassian.net"));
        assert_eq!(loaded.http.timeout_secs, 5);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[site]\nurl = \"https://x.atlassian.net\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.site_url().unwrap(), "https://x.atlassian.net");
        assert_eq!(config.http, HttpConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[site\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default().with_overrides_from(|key| match key {
            URL_ENV => Some("https://env.atlassian.net".to_string()),
            TOKEN_ENV => Some("tok".to_string()),
            USERNAME_ENV => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.site.url.as_deref(), Some("https://env.atlassian.net"));
        assert_eq!(config.site.username, None);
        assert_eq!(config.credential(), Some(AuthCredential::bearer("tok")));
    }

    #[test]
    fn test_credential_kinds() {
        let mut config = Config::default();
        assert!(config.credential().is_none());

        config.site.token = Some("tok".to_string());
        config.site.username = Some("me@example.com".to_string());
        assert_eq!(
            config.credential(),
            Some(AuthCredential::basic("me@example.com", "tok"))
        );
    }

    #[test]
    fn test_get_masks_token() {
        let mut config = Config::default();
        config.set("site.token", "abcdefgh".to_string()).unwrap();
        assert_eq!(config.get("site.token").as_deref(), Some("****efgh"));
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(config.set("site.url", "not a url".to_string()).is_err());
        assert!(config.set("http.timeout_secs", "soon".to_string()).is_err());
        assert!(config.set("core.editor", "vim".to_string()).is_err());
    }

    #[test]
    fn test_env_override_for_keys() {
        assert_eq!(env_override_for("site.url"), Some(URL_ENV));
        assert_eq!(env_override_for("site.token"), Some(TOKEN_ENV));
        assert_eq!(env_override_for("http.timeout_secs"), None);
    }

    #[test]
    fn test_missing_site_url() {
        let err = Config::default().site_url().unwrap_err();
        assert!(err.to_string().contains("CONFLUENCE_URL"));
    }
}
