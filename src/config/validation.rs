//! Configuration validation logic
//!
//! Validation methods for all configuration structures, run once after
//! loading so a bad deployment fails at startup rather than at first firing.

use crate::config::error::ConfigError;
use crate::config::settings::{
    JobScheduleConfig, LoggerSettings, ProvidersConfig, RobotConfig, ScheduleConfig, Settings,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::validation(
            field,
            "URL is required and cannot be empty.",
        ));
    }
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(ConfigError::validation(
            field,
            format!("'{}' is not an http(s) URL.", value),
        ));
    }
    Ok(())
}

impl RobotConfig {
    /// Validate robot webhook configuration
    ///
    /// # Validation Rules
    /// - Access token must not be empty
    /// - Base URL must be an http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_token.trim().is_empty() {
            return Err(ConfigError::validation(
                "robot.access_token",
                "Access token is required. Set DINGBOT_ROBOT__ACCESS_TOKEN or robot.access_token.",
            ));
        }

        validate_http_url("robot.base_url", &self.base_url)
    }
}

impl ProvidersConfig {
    /// Validate all provider endpoints
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_http_url("providers.weather.endpoint", &self.weather.endpoint)?;
        validate_http_url("providers.juejin.endpoint", &self.juejin.endpoint)?;
        validate_http_url("providers.toutiao.endpoint", &self.toutiao.endpoint)?;
        validate_http_url("providers.toutiao.site_url", &self.toutiao.site_url)?;

        if self.weather.location.trim().is_empty() {
            return Err(ConfigError::validation(
                "providers.weather.location",
                "Location display name cannot be empty.",
            ));
        }

        Ok(())
    }
}

impl JobScheduleConfig {
    /// Validate one job schedule
    ///
    /// # Validation Rules
    /// - An enabled job must carry a six-field cron expression
    /// - Disabled jobs are not checked
    ///
    /// Full syntax checking happens when the job is handed to the scheduler;
    /// this catches the obvious deployment mistakes early.
    pub fn validate(&self, field: &str) -> Result<(), ConfigError> {
        if !self.enabled {
            return Ok(());
        }

        if self.cron.trim().is_empty() {
            return Err(ConfigError::validation(
                field,
                "Cron expression is required for an enabled job.",
            ));
        }

        let fields = self.cron.split_whitespace().count();
        if fields != 6 {
            return Err(ConfigError::validation(
                field,
                format!(
                    "Cron expression '{}' has {} fields; expected 6 (seconds minutes hours day month weekday).",
                    self.cron, fields
                ),
            ));
        }

        Ok(())
    }
}

impl ScheduleConfig {
    /// Validate all job schedules
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weather.validate("schedule.weather.cron")?;
        self.juejin.validate("schedule.juejin.cron")?;
        self.toutiao.validate("schedule.toutiao.cron")?;
        Ok(())
    }

    /// Whether any job would be registered at startup
    pub fn any_enabled(&self) -> bool {
        self.weather.enabled || self.juejin.enabled || self.toutiao.enabled
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - Log format must be one of: full, compact, json
    /// - If file logging is enabled, path must not be empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.level",
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.file.format.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.file.format",
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.file.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        if self.file.enabled && self.file.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate the complete settings tree
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.robot.validate()?;
        self.providers.validate()?;
        self.schedule.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.robot.access_token = "a8d9c2b1f4e6".to_string();
        settings
    }

    #[test]
    fn test_default_settings_with_token_are_valid() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_missing_access_token_is_rejected() {
        let settings = Settings::default();
        let err = settings.validate().unwrap_err();
        match err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "robot.access_token");
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_non_http_endpoint_is_rejected() {
        let mut settings = valid_settings();
        settings.providers.juejin.endpoint = "ftp://feed.example.com".to_string();
        let err = settings.validate().unwrap_err();
        match err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "providers.juejin.endpoint");
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_enabled_job_with_empty_cron_is_rejected() {
        let mut settings = valid_settings();
        settings.schedule.toutiao.cron = String::new();
        let err = settings.validate().unwrap_err();
        match err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "schedule.toutiao.cron");
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_disabled_job_skips_cron_check() {
        let mut settings = valid_settings();
        settings.schedule.toutiao.cron = String::new();
        settings.schedule.toutiao.enabled = false;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_five_field_cron_is_rejected() {
        let mut settings = valid_settings();
        settings.schedule.weather.cron = "30 8 * * 1-5".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("expected 6"));
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let mut settings = valid_settings();
        settings.logger.level = "verbose".to_string();
        let err = settings.validate().unwrap_err();
        match err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "logger.level");
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_log_format_is_rejected() {
        let mut settings = valid_settings();
        settings.logger.file.format = "xml".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_any_enabled_reflects_flags() {
        let mut settings = valid_settings();
        assert!(settings.schedule.any_enabled());
        settings.schedule.weather.enabled = false;
        settings.schedule.juejin.enabled = false;
        settings.schedule.toutiao.enabled = false;
        assert!(!settings.schedule.any_enabled());
    }
}
