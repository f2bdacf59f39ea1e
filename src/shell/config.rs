use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "BILLABLE_TIME";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    /// Outbox topic the time entry intents are published on.
    pub topic: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// `EnvFilter` directives; `RUST_LOG` wins when set.
    pub filter: String,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.port", 8080)?
        .set_default("application.topic", "time-entries.v1")?
        .set_default("log.filter", "info,billable_time=debug")
}

/// Defaults, then `config/base.*` when present, then `BILLABLE_TIME__*`
/// environment variables (`BILLABLE_TIME__APPLICATION__PORT=9000`).
pub fn read_config() -> Result<Settings, ConfigError> {
    defaults()?
        .add_source(File::with_name("config/base").required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}
