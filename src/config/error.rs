//! Errors raised while loading the bot's layered configuration.

use thiserror::Error;

/// Failures on the settings path: locating config files, deserializing the
/// merged sources into [`Settings`], and the post-deserialize validation
/// pass.
///
/// [`Settings`]: crate::config::Settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required configuration file is missing. Layered mode requires
    /// `default.toml` under the config dir; single-file mode requires the
    /// `DINGBOT_CONFIG_FILE` path itself.
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// The merged sources did not deserialize into the settings tree.
    #[error("Failed to deserialize configuration: {0}")]
    ParseError(String),

    /// A deserialized value was rejected by validation. `field` is the
    /// dotted settings path, e.g. `robot.access_token`.
    #[error("Invalid configuration for {field}: {message}")]
    ValidationError { field: String, message: String },

    /// `DINGBOT_APP_ENV` named an unknown environment.
    #[error("Environment selection failed: {0}")]
    EnvVarError(String),

    /// `DINGBOT_CONFIG_DIR` and `DINGBOT_CONFIG_FILE` were both set; the
    /// loader takes a directory of layered files or a single file, not both.
    #[error("Conflicting configuration sources: {0}")]
    MutualExclusivityError(String),

    /// Passthrough for the config crate's own read/merge failures.
    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    /// Validation failure for the settings value at `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
