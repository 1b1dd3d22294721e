//! API configuration

use serde::Deserialize;

/// Which fact store backs the facts endpoint
///
/// `Catalog` serves the compiled-in dataset and needs no database; it is
/// the default so the service runs standalone out of the box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactsSource {
    #[default]
    Catalog,
    Database,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL (used when `facts_source` is `database`)
    pub database_url: String,
    /// Log level
    pub log_level: String,
    /// Backing store for the facts endpoint
    pub facts_source: FactsSource,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/policylens".to_string(),
            log_level: "info".to_string(),
            facts_source: FactsSource::Catalog,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables,
    /// falling back to defaults for anything unset
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = ApiConfig::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", defaults.port as i64)?
            .set_default("database_url", defaults.database_url)?
            .set_default("log_level", defaults.log_level)?
            .set_default("facts_source", "catalog")?
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
