//! Database configuration
//!
//! Read from the environment:
//!   DATABASE_URL               PostgreSQL connection string (required)
//!   LIGHTBNB_MAX_CONNECTIONS   Pool size (default: 5)

use thiserror::Error;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const MAX_CONNECTIONS_VAR: &str = "LIGHTBNB_MAX_CONNECTIONS";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not set")]
    Missing { var: &'static str },

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Connection settings handed to [`create_pool`](crate::pool::create_pool)
#[derive(Debug, Clone, PartialEq)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl DbConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using `lookup` to resolve variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing {
                var: DATABASE_URL_VAR,
            })?;

        let max_connections = match lookup(MAX_CONNECTIONS_VAR) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        var: MAX_CONNECTIONS_VAR,
                        value: raw,
                        reason: "must be at least 1",
                    })
                }
                Ok(n) => n,
                Err(_) => {
                    return Err(ConfigError::Invalid {
                        var: MAX_CONNECTIONS_VAR,
                        value: raw,
                        reason: "not a positive integer",
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}
