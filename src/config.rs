use std::path::Path;
use std::time::Duration;
use std::{env, fs, io};

use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

/// Path of the optional TOML config file, overridable through `ASSESSMENT_CONFIG`.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Submissions echo the whole start payload back, so the body limit sits far
/// above actix's 2 MiB default.
pub const DEFAULT_JSON_LIMIT: usize = 64 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{var} must be a port number, got '{value}'")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted JSON request body in bytes.
    pub json_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8000,
            json_limit: DEFAULT_JSON_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub name: String,
    pub user: String,
    pub password: String,
    pub port: u16,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// Seconds a request waits for a free connection before failing.
    pub acquire_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            host: "localhost".to_string(),
            name: "assessment_db".to_string(),
            user: "postgres".to_string(),
            password: "password".to_string(),
            port: 5432,
            max_connections: 5,
            acquire_timeout: 30,
        }
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout)
    }
}

/// Empty list allows any origin.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Reads the config file (if any) and applies environment overrides.
    pub fn load() -> Result<Config, ConfigError> {
        let path = env::var("ASSESSMENT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let mut config = Config::from_file(Path::new(&path))?;
        config.apply_env(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            log::info!("config file {} not found, using defaults", path.display());
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path)?;
        Config::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("DB_HOST") {
            self.database.host = host;
        }
        if let Some(name) = lookup("DB_NAME") {
            self.database.name = name;
        }
        if let Some(user) = lookup("DB_USER") {
            self.database.user = user;
        }
        if let Some(password) = lookup("DB_PASSWORD") {
            self.database.password = password;
        }
        if let Some(port) = lookup("DB_PORT") {
            self.database.port = parse_port("DB_PORT", port)?;
        }
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port = parse_port("SERVER_PORT", port)?;
        }
        Ok(())
    }
}

fn parse_port(var: &'static str, value: String) -> Result<u16, ConfigError> {
    match value.trim().parse::<u16>() {
        Ok(port) => Ok(port),
        Err(_) => Err(ConfigError::InvalidPort { var, value }),
    }
}
