use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{GroupingOptions, DEFAULT_GROUP_CAPACITY};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub group_capacity: Option<usize>,
    pub keep_singletons: Option<bool>,
    pub min_group_score: Option<f64>,
    pub max_pool_size: Option<usize>,
    /// Match count used when a find request omits `limit`
    pub default_limit: Option<u16>,
    pub max_limit: Option<u16>,
}

impl MatchingSettings {
    /// Grouping options with unset values falling back to the defaults
    pub fn grouping_options(&self) -> GroupingOptions {
        let defaults = GroupingOptions::default();
        GroupingOptions {
            capacity: self.group_capacity.unwrap_or(DEFAULT_GROUP_CAPACITY),
            keep_singletons: self.keep_singletons.unwrap_or(defaults.keep_singletons),
            min_score: self.min_group_score.unwrap_or(defaults.min_score),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HUDDLE__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HUDDLE__MATCHING__GROUP_CAPACITY -> matching.group_capacity
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("HUDDLE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(source: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_minimal_settings() {
        let settings = from_toml("[server]\nport = 9090\n");

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.matching.grouping_options(), GroupingOptions::default());
    }

    #[test]
    fn test_matching_overrides() {
        let settings = from_toml(
            "[matching]\ngroup_capacity = 6\nkeep_singletons = true\nmin_group_score = 0.4\n",
        );

        let options = settings.matching.grouping_options();
        assert_eq!(options.capacity, 6);
        assert!(options.keep_singletons);
        assert_eq!(options.min_score, 0.4);
    }

    #[test]
    fn test_limit_settings() {
        let settings = from_toml("[matching]\ndefault_limit = 25\nmax_limit = 50\n");

        assert_eq!(settings.matching.default_limit, Some(25));
        assert_eq!(settings.matching.max_limit, Some(50));
        assert_eq!(from_toml("").matching.default_limit, None);
    }
}
