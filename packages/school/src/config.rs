//! # Front-end configuration — `pianoschool.toml`
//!
//! The file sits next to the server binary and tunes how the front-end talks
//! to the backend and how list controls behave. Every field has a default, so
//! a missing or empty file is equivalent to [`SchoolConfig::default`].
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"
//! timeout_secs = 30
//!
//! [picker]
//! page_size = 10
//! debounce_ms = 300
//! badge_cap = 3
//!
//! [table]
//! page_size = 10
//!
//! [progress]
//! poll_interval_ms = 1000
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ApiConfig`] | Backend base URL and request timeout. `API_BASE_URL` in the environment wins over the file (applied by the server). |
//! | [`PickerConfig`] | Page size, keystroke debounce and badge display cap of the paged pickers. |
//! | [`TableConfig`] | Rows per page of server-driven tables. |
//! | [`ProgressConfig`] | Poll interval for long-running backend jobs. |

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `pianoschool.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SchoolConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
}

/// Remote backend settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Paged picker settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Selected items shown as badges before collapsing into "+N more".
    #[serde(default = "default_badge_cap")]
    pub badge_cap: usize,
}

/// Data table settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

/// Job progress polling settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> u32 {
    10
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_badge_cap() -> usize {
    3
}

fn default_poll_interval_ms() -> u64 {
    1000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            badge_cap: default_badge_cap(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Join an endpoint path onto the base URL, tolerating stray slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl PickerConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl ProgressConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl SchoolConfig {
    /// Builder method to point at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "pianoschool.toml"
    }

    /// Resolve the effective configuration from the optional file contents
    /// and the optional `API_BASE_URL` override.
    pub fn resolve(
        file: Option<&str>,
        base_url_override: Option<String>,
    ) -> Result<Self, toml::de::Error> {
        let config = match file {
            Some(text) => Self::from_toml(text)?,
            None => Self::default(),
        };
        Ok(match base_url_override {
            Some(url) if !url.trim().is_empty() => config.with_base_url(url.trim()),
            _ => config,
        })
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = SchoolConfig::from_toml("").unwrap();
        assert_eq!(config, SchoolConfig::default());
        assert_eq!(config.picker.page_size, 10);
        assert_eq!(config.picker.debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = SchoolConfig::from_toml(
            r#"
            [picker]
            badge_cap = 5

            [api]
            base_url = "https://school.example/api/"
            "#,
        )
        .unwrap();
        assert_eq!(config.picker.badge_cap, 5);
        assert_eq!(config.picker.page_size, 10);
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.table.page_size, 10);
    }

    #[test]
    fn test_endpoint_joins_slashes() {
        let config = SchoolConfig::default().with_base_url("https://school.example/api/");
        assert_eq!(
            config.api.endpoint("/rooms"),
            "https://school.example/api/rooms"
        );
        assert_eq!(
            config.api.endpoint("rooms/3"),
            "https://school.example/api/rooms/3"
        );
    }

    #[test]
    fn test_resolve_env_wins_over_file() {
        let file = "[api]\nbase_url = \"http://file:5000\"\n";
        let config = SchoolConfig::resolve(Some(file), Some("http://env:5000".into())).unwrap();
        assert_eq!(config.api.base_url, "http://env:5000");

        let config = SchoolConfig::resolve(Some(file), Some("  ".into())).unwrap();
        assert_eq!(config.api.base_url, "http://file:5000");

        let config = SchoolConfig::resolve(None, None).unwrap();
        assert_eq!(config, SchoolConfig::default());

        assert!(SchoolConfig::resolve(Some("[picker]\npage_size = \"ten\""), None).is_err());
    }

    #[test]
    fn test_toml_output_parses_back() {
        let config = SchoolConfig::default().with_base_url("http://10.0.0.2:5000");
        let text = config.to_toml().unwrap();
        assert!(text.contains("[picker]"));
        assert_eq!(SchoolConfig::from_toml(&text).unwrap(), config);
    }
}
