// ============================================================================
// CONFIG - Compile-time application configuration
// ============================================================================
// Values are baked in at build time through option_env! (build.rs forwards
// them from .env). There is no runtime config file in the browser.
// ============================================================================

use log::LevelFilter;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL prepended to every /api path. Empty means same origin.
    pub backend_url: String,
    pub enable_logging: bool,
    pub log_level: LevelFilter,
    pub default_language: String,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            enable_logging: true,
            log_level: LevelFilter::Info,
            default_language: "KO".to_string(),
            toast_duration_ms: 5000,
        }
    }
}

impl AppConfig {
    /// Build the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
            option_env!("DEFAULT_LANGUAGE"),
            option_env!("TOAST_DURATION_MS"),
        )
    }

    /// Parse raw values, falling back to defaults for anything missing or malformed
    pub fn from_values(
        backend_url: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
        default_language: Option<&str>,
        toast_duration_ms: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.log_level),
            default_language: default_language
                .map(|lang| lang.trim().to_uppercase())
                .filter(|lang| lang == "KO" || lang == "EN")
                .unwrap_or(defaults.default_language),
            toast_duration_ms: toast_duration_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.toast_duration_ms),
        }
    }

    /// Absolute URL for an API path such as `/api/students`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }

    /// Effective log level (Off when logging is disabled)
    pub fn effective_log_level(&self) -> LevelFilter {
        if self.enable_logging {
            self.log_level
        } else {
            LevelFilter::Off
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_url("/api/login"), "/api/login");
    }

    #[test]
    fn backend_url_is_trimmed_and_joined() {
        let config = AppConfig::from_values(Some("http://localhost:8000/"), None, None, None, None);
        assert_eq!(config.api_url("/api/students"), "http://localhost:8000/api/students");
    }

    #[test]
    fn malformed_values_are_ignored() {
        let config = AppConfig::from_values(None, Some("maybe"), Some("loud"), Some("fr"), Some("soon"));
        assert!(config.enable_logging);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.default_language, "KO");
        assert_eq!(config.toast_duration_ms, 5000);
    }

    #[test]
    fn disabled_logging_turns_level_off() {
        let config = AppConfig::from_values(None, Some("false"), Some("debug"), Some("en"), Some("2500"));
        assert_eq!(config.effective_log_level(), LevelFilter::Off);
        assert_eq!(config.default_language, "EN");
        assert_eq!(config.toast_duration_ms, 2500);
    }
}
