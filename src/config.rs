//! Runtime Configuration
//!
//! Read once from `<meta name="sense-studio:*" content="...">` tags of the host page.

use std::sync::OnceLock;

use log::LevelFilter;

const META_PREFIX: &str = "sense-studio:";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for backend endpoints; empty means same origin
    pub api_base: String,
    pub log_level: LevelFilter,
    /// Quiet period before an input change hits the backend
    pub debounce_ms: u32,
    pub autocomplete_min_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: LevelFilter::Info,
            debounce_ms: 150,
            autocomplete_min_chars: 1,
        }
    }
}

impl AppConfig {
    /// Build from a key lookup; unknown or malformed values keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base) = lookup("api-base") {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(level) = lookup("log-level").and_then(|v| v.trim().parse().ok()) {
            config.log_level = level;
        }
        if let Some(ms) = lookup("debounce-ms").and_then(|v| v.trim().parse().ok()) {
            config.debounce_ms = ms;
        }
        if let Some(n) = lookup("autocomplete-min-chars").and_then(|v| v.trim().parse().ok()) {
            config.autocomplete_min_chars = n;
        }
        config
    }

    /// Read the meta tags of the current document
    pub fn from_document() -> Self {
        let document = leptos::prelude::document();
        Self::from_lookup(|key| {
            let selector = format!("meta[name='{}{}']", META_PREFIX, key);
            document
                .query_selector(&selector)
                .ok()
                .flatten()
                .and_then(|meta| meta.get_attribute("content"))
        })
    }

    /// Full URL for a backend path
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}{}", self.api_base, path)
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Install the configuration; later calls are ignored
pub fn init(config: AppConfig) -> &'static AppConfig {
    CONFIG.get_or_init(|| config)
}

/// Installed configuration, or defaults when `init` never ran
pub fn get() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_no_meta() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.endpoint("/browse-directory"), "/browse-directory");
    }

    #[test]
    fn test_reads_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("api-base", "http://localhost:5000/"),
            ("log-level", "debug"),
            ("debounce-ms", "300"),
            ("autocomplete-min-chars", "2"),
        ]));
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.autocomplete_min_chars, 2);
        assert_eq!(
            config.endpoint("/project-config"),
            "http://localhost:5000/project-config"
        );
    }

    #[test]
    fn test_malformed_values_keep_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("log-level", "loud"),
            ("debounce-ms", "-5"),
        ]));
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.debounce_ms, 150);
    }

    #[test]
    fn test_absolute_endpoint_passes_through() {
        let config = AppConfig::from_lookup(lookup_from(&[("api-base", "/api")]));
        assert_eq!(config.endpoint("/toggle-project-setting"), "/api/toggle-project-setting");
        assert_eq!(
            config.endpoint("https://other.host/create-counterpart"),
            "https://other.host/create-counterpart"
        );
    }
}
