//! Environment-backed service configuration.

use crate::error::Error;

/// Runtime mode of the hosting process. Seeding only runs outside
/// production; a production store is assumed to already hold its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local or staging mode: migrate and seed on every start.
    Development,
    /// Production mode: migrate only.
    Production,
}

/// Service configuration read from the environment.
pub struct Config {
    /// Connection string of the relational store.
    pub database_url: String,
    /// Runtime mode, defaulting to development when `APP_ENV` is unset.
    pub environment: Environment,
}

impl Config {
    /// Reads configuration from environment variables (`DATABASE_URL`,
    /// optional `APP_ENV`).
    pub fn from_env() -> Result<Self, Error> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| Error::MissingEnvVar("DATABASE_URL".to_string()))?;

        let environment = match std::env::var("APP_ENV") {
            Ok(value) => match value.as_str() {
                "development" => Environment::Development,
                "production" => Environment::Production,
                other => {
                    return Err(Error::InvalidEnvValue {
                        var: "APP_ENV".to_string(),
                        reason: format!("expected \"development\" or \"production\", got {other:?}"),
                    })
                }
            },
            Err(_) => Environment::Development,
        };

        Ok(Self {
            database_url,
            environment,
        })
    }
}
