//! Layered configuration for the folio client
//!
//! Sources, later ones winning:
//! 1. built-in defaults
//! 2. `folio.toml` (or the file passed with `--config`)
//! 3. `FOLIO__<SECTION>__<KEY>` environment variables, e.g. `FOLIO__API__BASE_URL`
//! 4. `SERVER_URL`, which overrides `api.base_url`
//!
//! A `.env` file in the working directory is loaded first.
//!
//! ```toml
//! log_level = "debug"
//!
//! [api]
//! base_url = "https://folio-api.example.com"
//!
//! [auth]
//! token_path = "/home/vera/.folio/authToken"
//!
//! [upload]
//! folder = "portfolio"
//! ```

use crate::api::DEFAULT_BASE_URL;
use crate::auth::TOKEN_KEY;
use crate::types::{AppError, Result};
use crate::upload::UploadOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "folio.toml";
const ENV_PREFIX: &str = "FOLIO";
const ENV_SEPARATOR: &str = "__";
const LEGACY_URL_VAR: &str = "SERVER_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub upload: UploadOptions,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// File name of the stored token.
    #[serde(default = "default_token_key")]
    pub token_key: String,

    /// Explicit token file; defaults to `~/.folio/<token_key>`.
    #[serde(default)]
    pub token_path: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_token_key() -> String {
    TOKEN_KEY.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            token_path: None,
        }
    }
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            auth: AuthConfig::default(),
            upload: UploadOptions::default(),
            log_level: default_log_level(),
        }
    }
}

impl FolioConfig {
    /// Load from every source.
    ///
    /// `path` names a config file that must exist; without it `folio.toml`
    /// is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let (file, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };

        let mut config: Self = ::config::Config::builder()
            .add_source(::config::File::from(file.as_path()).required(required))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        if let Ok(url) = std::env::var(LEGACY_URL_VAR) {
            if !url.trim().is_empty() {
                config.api.base_url = url;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load one file with no environment overlay.
    pub fn from_file(path: &Path) -> Result<Self> {
        let config: Self = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| AppError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        reqwest::Url::parse(&self.api.base_url).map_err(|e| {
            AppError::Configuration(format!("api.base_url {:?}: {}", self.api.base_url, e))
        })?;
        if self.auth.token_key.trim().is_empty() {
            return Err(AppError::Configuration(
                "auth.token_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Where the CLI keeps its token between runs.
    pub fn token_path(&self) -> PathBuf {
        if let Some(path) = &self.auth.token_path {
            return path.clone();
        }
        let home = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_default();
        home.join(".folio").join(&self.auth.token_key)
    }
}
