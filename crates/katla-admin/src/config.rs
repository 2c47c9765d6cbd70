//! Runtime settings for the admin system.
//!
//! Read from the optional `config/katla.toml` file, then from `KATLA__`-prefixed
//! environment variables (`KATLA__ADMIN__STORE_BUFFER=64`). Everything has a default,
//! so an empty environment yields a working configuration.

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdminConfig {
    /// Request channel capacity of every store actor.
    #[serde(default = "default_store_buffer")]
    pub store_buffer: usize,
    /// User id stamped on rows changed by this process.
    #[serde(default = "default_acting_user_id")]
    pub acting_user_id: i32,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_store_buffer() -> usize {
    32
}

fn default_acting_user_id() -> i32 {
    1
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            store_buffer: default_store_buffer(),
            acting_user_id: default_acting_user_id(),
            log_filter: default_log_filter(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Settings {
    #[serde(default)]
    admin: AdminConfig,
}

impl AdminConfig {
    /// Load from `config/katla.toml` (optional) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder().add_source(File::with_name("config/katla.toml").required(false)),
        )
    }

    /// Load from TOML text plus the environment.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Self::from_builder(Config::builder().add_source(File::from_str(source, FileFormat::Toml)))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Settings = builder
            .add_source(
                Environment::with_prefix("KATLA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if settings.admin.store_buffer == 0 {
            return Err(ConfigError::Message(
                "admin.store_buffer must be at least 1".to_string(),
            ));
        }
        Ok(settings.admin)
    }
}
