//! Process configuration read from the environment
//!
//! Secrets (database credentials, API key) come from the environment,
//! optionally via a `.env` file loaded at startup.

use std::env;

use thiserror::Error;

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Missing required environment variable: {0}")]
    MissingVariable(&'static str),

    /// An environment variable is set but unusable
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,

    /// Generative Language API key
    pub gemini_api_key: String,

    /// HTTP listening port
    pub port: u16,
}

impl AppConfig {
    /// Read configuration from the process environment
    ///
    /// Requires `DATABASE_URL` and `GEMINI_API_KEY`; `PORT` is optional and
    /// defaults to 5000.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require("DATABASE_URL")?;
        let gemini_api_key = require("GEMINI_API_KEY")?;
        let port = parse_port(env::var("PORT").ok())?;

        Ok(Self {
            database_url,
            gemini_api_key,
            port,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVariable(name))
}

fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    match value {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
            name: "PORT",
            value: raw,
        }),
    }
}
