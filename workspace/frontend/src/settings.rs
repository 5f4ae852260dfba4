use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Prefix prepended to the forecast endpoints. Empty means same origin,
    /// which is how the dashboard is served by the forecast server.
    pub api_base: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// How long each export feedback label stays up, in milliseconds
    pub export_feedback_ms: u32,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: Level::Info,
            debug_mode: false,
            export_feedback_ms: 2000,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            // Custom settings from localStorage
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(api_base)) = storage.get_item("forecast_api_base") {
                    settings.api_base = api_base.trim_end_matches('/').to_string();
                }

                if let Ok(Some(log_level)) = storage.get_item("forecast_log_level") {
                    settings.log_level = parse_level(&log_level).unwrap_or(settings.log_level);
                }

                if let Ok(Some(delay)) = storage.get_item("forecast_export_feedback_ms") {
                    if let Ok(delay) = delay.parse::<u32>() {
                        settings.export_feedback_ms = delay;
                    }
                }

                if let Ok(Some(duration)) = storage.get_item("forecast_toast_duration_ms") {
                    if let Ok(duration) = duration.parse::<u32>() {
                        settings.toast_duration_ms = duration;
                    }
                }
            }
        }

        settings
    }

    /// Get the full URL for an endpoint path such as `/get_data`
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base, endpoint)
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_same_origin() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_url("/get_data"), "/get_data");
        assert_eq!(settings.export_feedback_ms, 2000);
    }

    #[test]
    fn test_api_url_with_base() {
        let settings = AppSettings {
            api_base: "http://localhost:3000".to_string(),
            ..AppSettings::default()
        };
        assert_eq!(settings.api_url("/export_csv"), "http://localhost:3000/export_csv");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Some(Level::Debug));
        assert_eq!(parse_level("warn"), Some(Level::Warn));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn test_update_settings_is_visible_to_readers() {
        update_settings(|s| s.api_base = "http://forecast.test".to_string());
        assert_eq!(get_settings().api_base, "http://forecast.test");
        update_settings(|s| *s = AppSettings::default());
    }
}
