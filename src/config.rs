// Configuration module for devpick
// This module handles loading and parsing configuration from ~/.config/devpick/config.toml

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub api: ApiConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the device-comparison API
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a lookup fires
    pub debounce_ms: u64,
    /// Minimum trimmed query length that triggers a lookup
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/devpick/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    let config_path = get_config_path();

    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!("Config parsed successfully: base_url={}", config.api.base_url);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/devpick/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("devpick")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_config_default_values() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.search.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(config.search.min_query_len, DEFAULT_MIN_QUERY_LEN);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[api]
base_url = "https://devices.example.com"

[search]
debounce_ms = 150
min_query_len = 3
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api.base_url, "https://devices.example.com");
        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.search.min_query_len, 3);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let toml = r#"
[api]
base_url = "http://10.0.0.5:9000"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.search.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(config.search.min_query_len, DEFAULT_MIN_QUERY_LEN);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let toml = r#"
[api]
base_url = "http://localhost:8000"
bse_url = "typo"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err(), "Typoed keys should fail to parse");
    }

    #[test]
    fn test_malformed_toml_example() {
        let toml = "[api\nbase_url = \"http://localhost\""; // Missing closing bracket
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err(), "Malformed TOML should fail to parse");
    }

    #[test]
    fn test_config_file_round_trip_through_disk() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search]\ndebounce_ms = 500").unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        let config: Config = toml::from_str(&contents).unwrap();
        assert_eq!(config.search.debounce_ms, 500);
    }

    // For any malformed TOML syntax in the config file, parsing should fail
    // and the loader falls back to a config with all default values.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_malformed_toml_fallback(
            malformed in prop::sample::select(vec![
                "[api\nbase_url = \"http://x\"",       // Missing closing bracket
                "[api]\nbase_url = http://x",           // Missing quotes
                "[api]\n base_url",                     // Missing value
                "api]\nbase_url = \"http://x\"",        // Missing opening bracket
                "[api]\nbase_url = \"http://x",         // Unterminated string
                "[search]\ndebounce_ms = \"fast\"",     // Wrong type
            ])
        ) {
            let config: Result<Config, _> = toml::from_str(malformed);
            prop_assert!(config.is_err(), "Malformed TOML should fail to parse");

            // load_config catches the error and falls back to defaults
            let default_config = Config::default();
            prop_assert_eq!(default_config.api.base_url, DEFAULT_BASE_URL);
        }
    }

    // For any execution, the loader should target the same standardized path.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_config_path_consistency(_iteration in 0..10u32) {
            let path1 = get_config_path();
            let path2 = get_config_path();
            prop_assert_eq!(&path1, &path2, "Config path should be consistent");

            let path_str = path1.to_string_lossy();
            prop_assert!(
                path_str.ends_with("devpick/config.toml")
                    || path_str.ends_with("devpick\\config.toml"),
                "Config path should end with devpick/config.toml, got: {}",
                path_str
            );
        }
    }
}
