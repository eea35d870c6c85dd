//! Environment configuration for paylink-server.
//!
//! Gateway credentials are read from the environment once at startup
//! and never change afterwards.

use paylink_gateway::Environment;
use paylink_gateway::client::UnknownEnvironment;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CASHFREE_CLIENT_ID environment variable not set")]
    MissingClientId,

    #[error("CASHFREE_CLIENT_SECRET environment variable not set")]
    MissingClientSecret,

    #[error(transparent)]
    InvalidEnvironment(#[from] UnknownEnvironment),
}

/// Gateway credentials and environment mode, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub environment: Environment,
}

impl Config {
    /// Load the configuration from environment variables.
    ///
    /// `CASHFREE_CLIENT_ID` and `CASHFREE_CLIENT_SECRET` are required;
    /// `CASHFREE_ENVIRONMENT` defaults to `sandbox`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let client_id =
            std::env::var("CASHFREE_CLIENT_ID").map_err(|_| ConfigError::MissingClientId)?;
        let client_secret =
            std::env::var("CASHFREE_CLIENT_SECRET").map_err(|_| ConfigError::MissingClientSecret)?;
        let environment = match std::env::var("CASHFREE_ENVIRONMENT") {
            Ok(value) => value.parse::<Environment>()?,
            Err(_) => Environment::Sandbox,
        };

        Ok(Self {
            client_id,
            client_secret,
            environment,
        })
    }
}
