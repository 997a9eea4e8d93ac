//! Configuration model loaded from external sources.

use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Base URL of the notice API backend.
    pub api_base_url: String,
}

impl ServerConfig {
    /// Loads configuration from an optional `config` file and the
    /// environment. Every field has a default, so a bare environment
    /// yields a runnable configuration pointing at the local backend.
    pub fn load() -> Result<Self, config::ConfigError> {
        Config::builder()
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8000_i64)?
            .set_default("templates_dir", "templates/**/*.html")?
            .set_default("api_base_url", "http://localhost:8080")?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::default())
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_succeeds_with_defaults_only() {
        let config = ServerConfig::load().unwrap();
        assert!(config.templates_dir.contains("templates"));
        assert!(!config.api_base_url.is_empty());
    }
}
