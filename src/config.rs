//! Configuration management for the Libris policy engine

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Circulation policy settings.
///
/// Defaults reproduce the historical rules: a 14-day loan period and a
/// ceiling of 5 concurrent borrows. Note that the borrow check compares
/// strictly (`count > max_open_borrows`), so a patron can hold 6 books
/// before a further borrow is refused; see `LoansService::borrow_book`.
#[derive(Debug, Deserialize, Clone)]
pub struct CirculationConfig {
    pub loan_period_days: i64,
    pub max_open_borrows: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub circulation: CirculationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix LIBRIS_)
            .add_source(
                Environment::with_prefix("LIBRIS")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for CirculationConfig {
    fn default() -> Self {
        Self {
            loan_period_days: 14,
            max_open_borrows: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            circulation: CirculationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
