//! Hub Configuration
//!
//! Build-time settings. Override with `API_FETCH_HUB_BASE_URL` and
//! `API_FETCH_HUB_LOG_LEVEL` when running `trunk build`.

use crate::models::Tab;

/// Public demo API used when no override is set
pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";

/// Maximum number of items kept per tab
pub const ITEM_LIMIT: usize = 9;

#[derive(Debug, Clone, PartialEq)]
pub struct HubConfig {
    pub api_base: String,
    pub log_level: log::Level,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: log::Level::Info,
        }
    }
}

impl HubConfig {
    /// Resolve from environment variables captured at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("API_FETCH_HUB_BASE_URL"),
            option_env!("API_FETCH_HUB_LOG_LEVEL"),
        )
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base = api_base
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base);
        let log_level = log_level
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);
        Self { api_base, log_level }
    }

    /// Full URL of the endpoint serving `tab`
    pub fn endpoint_url(&self, tab: Tab) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), tab.endpoint())
    }
}
