//! Database connection settings
//!
//! Values are opaque inputs; they are read from the `[database]` section of
//! the configuration file and from the `POSTGRES_*` environment variables.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;

/// PostgreSQL connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Server host (default: "localhost")
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port (default: 5432)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Role to connect as (default: "postgres")
    #[serde(default = "default_user")]
    pub user: String,

    /// Password (default: empty)
    #[serde(default)]
    pub password: String,

    /// Database name (default: "materials")
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_user() -> String {
    "postgres".to_string()
}

fn default_name() -> String {
    "materials".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: String::new(),
            name: default_name(),
        }
    }
}

impl DatabaseConfig {
    /// Options for opening a single connection
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("database.port must be > 0".to_string());
        }
        if self.name.trim().is_empty() {
            return Err("database.name must not be empty".to_string());
        }
        if self.user.trim().is_empty() {
            return Err("database.user must not be empty".to_string());
        }
        Ok(())
    }

    /// Connection target without credentials, for logs
    pub fn display_target(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.name)
    }
}
