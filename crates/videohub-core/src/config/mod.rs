//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and environment variables. Every section has
//! defaults, so the server starts with no configuration files at all.

pub mod app;
pub mod logging;
pub mod validation;

use serde::{Deserialize, Serialize};
use validator::Validate;

use self::app::ServerConfig;
use self::logging::LoggingConfig;
use self::validation::ValidationConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Payload validation strictness policy.
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Demo data loaded at startup.
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Startup seeding of the in-memory store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Insert the demo video on startup.
    #[serde(default)]
    pub enabled: bool,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Sources, lowest priority first: `config/default.toml`,
    /// `config/{env}.toml`, variables prefixed with `VIDEOHUB__`
    /// (e.g. `VIDEOHUB__SERVER__PORT`), and finally the plain `PORT`
    /// variable, which always wins for the listen port.
    pub fn load(env: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("VIDEOHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())
            .map_err(|e| AppError::configuration(format!("Invalid PORT override: {e}")))?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validation.validate()?;

        Ok(config)
    }
}
