//! # Settings
//!
//! Layered configuration for every entry point:
//!
//! 1. built-in defaults
//! 2. optional TOML file (default `materials.toml`)
//! 3. `MATERIALS_<SECTION>__<KEY>` environment variables
//! 4. `POSTGRES_HOST`, `POSTGRES_PORT`, `POSTGRES_USER`, `POSTGRES_PASSWORD`,
//!    `POSTGRES_DB` for the database section

use std::env;
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::client::ClientConfig;
use crate::http_server::HttpServerConfig;
use crate::observability::LogConfig;
use crate::store::DatabaseConfig;

/// Configuration file read when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "materials.toml";

const POSTGRES_ENV: [(&str, &str); 5] = [
    ("POSTGRES_HOST", "database.host"),
    ("POSTGRES_PORT", "database.port"),
    ("POSTGRES_USER", "database.user"),
    ("POSTGRES_PASSWORD", "database.password"),
    ("POSTGRES_DB", "database.name"),
];

/// Settings errors
#[derive(Debug, Error)]
pub enum SettingsError {
    /// File unreadable, bad syntax or wrong types
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    /// Values parsed but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// All configuration sections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Settings {
    /// Load settings. An explicit `path` must exist; the default file is
    /// optional. Values are not validated here: each command checks the
    /// sections it uses.
    pub fn load(path: Option<&Path>) -> SettingsResult<Self> {
        let (file, required) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        let mut builder = Config::builder()
            .add_source(File::from(file).required(required))
            .add_source(
                Environment::with_prefix("MATERIALS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            );

        for (var, key) in POSTGRES_ENV {
            builder = builder.set_override_option(key, env::var(var).ok())?;
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Check every section
    pub fn validate(&self) -> SettingsResult<()> {
        self.validate_server()?;
        self.validate_database()?;
        self.validate_client()
    }

    /// Bind address and CORS origins
    pub fn validate_server(&self) -> SettingsResult<()> {
        self.server.validate().map_err(SettingsError::Invalid)
    }

    pub fn validate_database(&self) -> SettingsResult<()> {
        self.database.validate().map_err(SettingsError::Invalid)
    }

    pub fn validate_client(&self) -> SettingsResult<()> {
        self.client.validate().map_err(SettingsError::Invalid)
    }
}
