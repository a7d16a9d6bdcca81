use serde::Deserialize;
use sqlx::mysql::MySqlConnectOptions;
use std::collections::HashMap;
use std::env;

use seatmap_core::{AirplaneTypeId, Layout, LayoutError, LayoutRegistry};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    /// Extra cabin layouts, keyed by airplane id.
    #[serde(default)]
    pub layouts: HashMap<String, Vec<Vec<String>>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    #[serde(default = "default_db_port")]
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_seconds: u64,
}

fn default_db_port() -> u16 { 3306 }
fn default_max_connections() -> u32 { 10 }
fn default_acquire_timeout() -> u64 { 3 }

#[derive(Debug, thiserror::Error)]
pub enum LayoutConfigError {
    #[error("Layout key {0:?} is not an airplane id")]
    InvalidAirplaneId(String),

    #[error("Invalid layout for airplane {airplane}: {source}")]
    InvalidLayout {
        airplane: String,
        #[source]
        source: LayoutError,
    },
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SEATMAP__DATABASE__PASSWORD=secret` sets `database.password`
            .add_source(config::Environment::with_prefix("SEATMAP").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Built-in layouts plus the configured ones; configured layouts win.
    pub fn layout_registry(&self) -> Result<LayoutRegistry, LayoutConfigError> {
        let mut registry = LayoutRegistry::builtin();

        for (key, blocks) in &self.layouts {
            let airplane: i64 = key
                .trim()
                .parse()
                .map_err(|_| LayoutConfigError::InvalidAirplaneId(key.clone()))?;

            let layout = Layout::new(blocks).map_err(|source| LayoutConfigError::InvalidLayout {
                airplane: key.clone(),
                source,
            })?;

            registry.insert(AirplaneTypeId::new(airplane), layout);
        }

        Ok(registry)
    }
}
