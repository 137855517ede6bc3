//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config`
//! and `dotenvy` crates. An optional YAML file is read first, then
//! environment variables with the `DELIVERY_DASHBOARD__` prefix are laid
//! over it; nested values use double underscores as separators.
//!
//! The `engine` section is read from the file alone, through serde_yaml,
//! because `config` lower-cases map keys and the label dictionaries are
//! keyed by tracker label values.
//!
//! # Example
//!
//! ```no_run
//! use delivery_dashboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Serving snapshot {}", config.snapshot.path.display());
//! ```

mod engine;
mod error;
mod server;
mod snapshot;

pub use engine::{load_engine_section, validate_engine};
pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;
pub use snapshot::SnapshotConfig;

use std::path::Path;

use serde::Deserialize;

use crate::domain::engine_config::EngineConfig;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "DELIVERY_DASHBOARD_CONFIG";

/// Configuration file used when `DELIVERY_DASHBOARD_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "delivery-dashboard.yaml";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Listener, logging and request limits
    #[serde(default)]
    pub server: ServerConfig,

    /// Snapshot source configuration
    #[serde(default)]
    pub snapshot: SnapshotConfig,

    /// Engine configuration (translations, stages, status mapping),
    /// filled by `load_engine_section`
    #[serde(skip)]
    pub engine: EngineConfig,
}

impl AppConfig {
    /// Load configuration from the config file and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads the YAML file named by `DELIVERY_DASHBOARD_CONFIG`
    ///    (default `delivery-dashboard.yaml`), if it exists
    /// 3. Overlays environment variables with `DELIVERY_DASHBOARD` prefix,
    ///    using `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `DELIVERY_DASHBOARD__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `DELIVERY_DASHBOARD__SNAPSHOT__PATH=...` -> `snapshot.path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or a value cannot be parsed into
    /// the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&path)
    }

    /// Load configuration from `path` (if present) and the environment.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let mut config: Self = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::default()
                    .prefix("DELIVERY_DASHBOARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        config.engine = load_engine_section(Path::new(path))?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.snapshot.validate()?;
        validate_engine(&self.engine)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::labels::{translate_label_without_fallback, LabelType};
    use crate::domain::status::CanonicalStatus;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const YAML: &str = r#"
server:
  port: 9000
snapshot:
  path: /var/lib/dashboard/snapshot.json
engine:
  stages: [alpha, beta, ga]
  default_status: todo
  status_map:
    "10001": done
    "3": inProgress
  translations:
    team:
      core: Core Platform
"#;

    fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("DELIVERY_DASHBOARD__SERVER__PORT");
        env::remove_var("DELIVERY_DASHBOARD__SERVER__LOG_JSON");
        env::remove_var("DELIVERY_DASHBOARD__SNAPSHOT__PATH");
    }

    #[test]
    fn test_defaults_without_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load_from("/nonexistent/delivery-dashboard.yaml").unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.engine.stages, vec!["s1", "s2", "s3", "s3+"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_yaml_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let file = yaml_file(YAML);
        let config = AppConfig::load_from(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(
            config.snapshot.path.to_str(),
            Some("/var/lib/dashboard/snapshot.json")
        );
        assert_eq!(config.engine.stages, vec!["alpha", "beta", "ga"]);
        assert_eq!(config.engine.status_map.get("10001"), Some(&CanonicalStatus::Done));
        assert_eq!(config.engine.status_map.get("3"), Some(&CanonicalStatus::InProgress));
        assert_eq!(
            config.engine.translations.for_type(LabelType::Team).get("core"),
            Some(&"Core Platform".to_string())
        );
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let file = yaml_file(YAML);
        env::set_var("DELIVERY_DASHBOARD__SERVER__PORT", "3000");
        env::set_var("DELIVERY_DASHBOARD__SNAPSHOT__PATH", "/tmp/other.json");
        let result = AppConfig::load_from(file.path().to_str().unwrap());
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.snapshot.path.to_str(), Some("/tmp/other.json"));
    }

    #[test]
    fn test_environment_sets_json_logging() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DELIVERY_DASHBOARD__SERVER__LOG_JSON", "true");
        let result = AppConfig::load_from("/nonexistent/delivery-dashboard.yaml");
        clear_env();

        assert!(result.unwrap().server.log_json);
    }

    #[test]
    fn test_mixed_case_dictionary_keys_survive_loading() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let file = yaml_file(
            r#"
server:
  port: 9000
engine:
  translations:
    team:
      CorePlatform: Core Platform
    area:
      Mobile: Mobile Apps
"#,
        );
        let config = AppConfig::load_from(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(
            translate_label_without_fallback(LabelType::Team, "CorePlatform", &config.engine),
            Some("Core Platform".to_string())
        );
        assert_eq!(
            translate_label_without_fallback(LabelType::Area, "Mobile", &config.engine),
            Some("Mobile Apps".to_string())
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_stages() {
        let config = AppConfig {
            engine: EngineConfig::default().with_stages(["s1", "s1"]),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::DuplicateStage(_))
        ));
    }

    #[test]
    fn test_malformed_file_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let file = yaml_file("server: [unterminated");
        let result = AppConfig::load_from(file.path().to_str().unwrap());
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
