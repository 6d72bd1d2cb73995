// Configuration type definitions

use serde::Deserialize;

/// Default suggestions endpoint
pub const DEFAULT_URL: &str = "http://localhost:8080/suggestions";

/// Seconds between the end of one poll attempt and the start of the next
pub const DEFAULT_INTERVAL_SECS: u64 = 3;

/// Total timeout for a single poll request, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_interval_secs() -> u64 {
    DEFAULT_INTERVAL_SECS
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

/// Poller configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PollerConfig {
    /// Endpoint queried every cycle
    #[serde(default = "default_url")]
    pub url: String,

    /// Sleep between cycles, in seconds
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Per-request timeout, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PollerConfig {
    fn default() -> Self {
        PollerConfig {
            url: default_url(),
            interval_secs: default_interval_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// UI configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Show the key-hint line in the footer
    #[serde(default = "default_true")]
    pub hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { hints: true }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub poller: PollerConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults_match_endpoint_contract() {
        let config = Config::default();
        assert_eq!(config.poller.url, "http://localhost:8080/suggestions");
        assert_eq!(config.poller.interval_secs, 3);
        assert_eq!(config.poller.timeout_secs, 2);
        assert!(config.ui.hints);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_toml_round_trip() {
        let config: Config = toml::from_str(
            r#"
[poller]
url = "http://127.0.0.1:9999/suggestions"
interval_secs = 10
timeout_secs = 5

[ui]
hints = false
"#,
        )
        .unwrap();

        assert_eq!(config.poller.url, "http://127.0.0.1:9999/suggestions");
        assert_eq!(config.poller.interval_secs, 10);
        assert_eq!(config.poller.timeout_secs, 5);
        assert!(!config.ui.hints);
    }

    // For any combination of present/missing poller fields, parsing succeeds
    // and missing fields take their default values.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_url in prop::bool::ANY,
            include_interval in prop::bool::ANY,
            include_timeout in prop::bool::ANY,
        ) {
            let mut toml_content = String::from("[poller]\n");
            if include_url {
                toml_content.push_str("url = \"http://example.test/s\"\n");
            }
            if include_interval {
                toml_content.push_str("interval_secs = 7\n");
            }
            if include_timeout {
                toml_content.push_str("timeout_secs = 4\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

            let config = config.unwrap();
            if include_url {
                prop_assert_eq!(config.poller.url, "http://example.test/s".to_string());
            } else {
                prop_assert_eq!(config.poller.url, DEFAULT_URL.to_string());
            }
            if include_interval {
                prop_assert_eq!(config.poller.interval_secs, 7);
            } else {
                prop_assert_eq!(config.poller.interval_secs, DEFAULT_INTERVAL_SECS);
            }
            if include_timeout {
                prop_assert_eq!(config.poller.timeout_secs, 4);
            } else {
                prop_assert_eq!(config.poller.timeout_secs, DEFAULT_TIMEOUT_SECS);
            }
        }
    }

    // For any positive interval and timeout values, parsing preserves them
    // exactly.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_timing_values_preserved(
            interval in 1u64..3600u64,
            timeout in 1u64..600u64,
        ) {
            let toml_content = format!(
                "[poller]\ninterval_secs = {}\ntimeout_secs = {}\n",
                interval, timeout
            );

            let config: Config = toml::from_str(&toml_content).unwrap();
            prop_assert_eq!(config.poller.interval_secs, interval);
            prop_assert_eq!(config.poller.timeout_secs, timeout);
        }
    }
}
