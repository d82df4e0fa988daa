use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::types::Locale;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub language: LanguageConfig,
    pub limits: LimitsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConfig {
    /// Locale used when a caller does not name one.
    pub default_locale: Locale,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Widest span accepted by range-bounded occurrence queries, in days.
    pub max_range_days: i64,
    /// Ceiling on count-bounded occurrence requests.
    pub max_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("language.default_locale", "english")?
            .set_default("limits.max_range_days", 1830)?
            .set_default("limits.max_count", 1000)?
            .set_default("logging.level", "debug")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(?settings, "configuration loaded");
    Ok(settings)
}
