//! Application configuration management.

use serde::Deserialize;

use crate::error::AppError;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Reporting configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Reporting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// IANA timezone name used to resolve calendar dates in reports
    /// (e.g., "UTC", "America/Sao_Paulo").
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

impl ReportingConfig {
    /// Parses the configured timezone name.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is not a known IANA timezone.
    pub fn tz(&self) -> Result<chrono_tz::Tz, AppError> {
        self.timezone
            .parse()
            .map_err(|_| AppError::Validation(format!("unknown timezone: {}", self.timezone)))
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        // Pick up a local .env before reading the environment source.
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FLUXO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
