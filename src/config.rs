//! Typed application configuration.
//!
//! Configuration is read once at startup into immutable settings structs and
//! passed explicitly into the components that need it. A missing or malformed
//! required value is a fatal startup error: `main` refuses to bind the
//! listener when `Config::from_env` fails.

use std::env;
use std::fmt;

/// Settings for token signing and verification.
#[derive(Debug, Clone)]
pub struct AuthenticationSettings {
    /// Symmetric HMAC secret used to sign and verify bearer tokens.
    pub secret: String,
}

/// Settings for the database connection.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub connection_string: String,
}

/// Settings for the HTTP listener.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub authentication: AuthenticationSettings,
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

/// A fatal configuration problem detected at startup.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is missing or empty.
    Missing(&'static str),
    /// A variable is present but cannot be parsed.
    Invalid(&'static str, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "{} must be set and non-empty", name),
            ConfigError::Invalid(name, value) => {
                write!(f, "{} has invalid value {:?}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// `AUTH_SECRET` and `DATABASE_URL` are required; `SERVER_HOST` and
    /// `SERVER_PORT` fall back to `127.0.0.1:8080`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = required("AUTH_SECRET")?;
        let connection_string = required("DATABASE_URL")?;

        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port_raw = env::var("SERVER_PORT").unwrap_or_else(|_| "8080".to_string());
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid("SERVER_PORT", port_raw))?;

        Ok(Self {
            authentication: AuthenticationSettings { secret },
            database: DatabaseSettings { connection_string },
            server: ServerSettings { host, port },
        })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server.host, self.server.port)
    }
}
