//! Configuration settings structures for dingbot
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "dingbot".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_base_url() -> String {
    "https://oapi.dingtalk.com/robot/send?access_token={ACCESS_TOKEN}".to_string()
}

fn default_weather_endpoint() -> String {
    "https://api.caiyunapp.com/v2/TAkhjf8d1nlSlspN/116.3176,39.9760/realtime.json".to_string()
}

fn default_weather_location() -> String {
    "互联网金融中心".to_string()
}

fn default_juejin_endpoint() -> String {
    "https://timeline-merger-ms.juejin.im/v1/get_entry_by_timeline?before=&limit=200&src=ios&tag=5597a05ae4b08a686ce56f6f"
        .to_string()
}

fn default_toutiao_endpoint() -> String {
    "http://www.toutiao.com/api/pc/feed/?category=internet&utm_source=toutiao".to_string()
}

fn default_toutiao_site_url() -> String {
    "http://www.toutiao.com".to_string()
}

fn default_weather_schedule() -> JobScheduleConfig {
    JobScheduleConfig {
        cron: "0 30 8 * * 1-5".to_string(),
        enabled: true,
    }
}

fn default_juejin_schedule() -> JobScheduleConfig {
    JobScheduleConfig {
        cron: "0 30 12,18 * * *".to_string(),
        enabled: true,
    }
}

fn default_toutiao_schedule() -> JobScheduleConfig {
    JobScheduleConfig {
        cron: "0 0 20 * * *".to_string(),
        enabled: true,
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/dingbot.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Robot Configuration
// ============================================================================

/// DingTalk robot webhook configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Webhook access token
    /// IMPORTANT: keep this secret; supply it via DINGBOT_ROBOT__ACCESS_TOKEN
    /// or an uncommitted local.toml rather than a checked-in file
    #[serde(default)]
    pub access_token: String,

    /// Send URL template; `{ACCESS_TOKEN}` is substituted at startup
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whether a failed job sends the plain-text apology notice
    #[serde(default = "default_true")]
    pub notify_failure: bool,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            base_url: default_base_url(),
            notify_failure: default_true(),
        }
    }
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Realtime weather provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherProviderConfig {
    /// Realtime endpoint, location baked into the URL path
    #[serde(default = "default_weather_endpoint")]
    pub endpoint: String,

    /// Display name of the covered location, used in the report header
    #[serde(default = "default_weather_location")]
    pub location: String,
}

impl Default for WeatherProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_weather_endpoint(),
            location: default_weather_location(),
        }
    }
}

/// Article timeline provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JuejinProviderConfig {
    #[serde(default = "default_juejin_endpoint")]
    pub endpoint: String,
}

impl Default for JuejinProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_juejin_endpoint(),
        }
    }
}

/// News feed provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToutiaoProviderConfig {
    #[serde(default = "default_toutiao_endpoint")]
    pub endpoint: String,

    /// Site prefix prepended to each entry's relative source path
    #[serde(default = "default_toutiao_site_url")]
    pub site_url: String,
}

impl Default for ToutiaoProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_toutiao_endpoint(),
            site_url: default_toutiao_site_url(),
        }
    }
}

/// All content provider configurations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub weather: WeatherProviderConfig,

    #[serde(default)]
    pub juejin: JuejinProviderConfig,

    #[serde(default)]
    pub toutiao: ToutiaoProviderConfig,
}

// ============================================================================
// Schedule Configuration
// ============================================================================

/// One job's firing schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobScheduleConfig {
    /// Six-field cron expression (seconds minutes hours day month weekday)
    #[serde(default)]
    pub cron: String,

    /// Whether the job is registered at startup
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for JobScheduleConfig {
    fn default() -> Self {
        Self {
            cron: String::new(),
            enabled: default_true(),
        }
    }
}

/// Firing schedules for all jobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_weather_schedule")]
    pub weather: JobScheduleConfig,

    #[serde(default = "default_juejin_schedule")]
    pub juejin: JobScheduleConfig,

    #[serde(default = "default_toutiao_schedule")]
    pub toutiao: JobScheduleConfig,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            weather: default_weather_schedule(),
            juejin: default_juejin_schedule(),
            toutiao: default_toutiao_schedule(),
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Whether file output is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Path to the log file
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to existing file
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output settings
    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from TOML files and environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Robot webhook configuration
    #[serde(default)]
    pub robot: RobotConfig,

    /// Content provider configuration
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Job schedules
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}
