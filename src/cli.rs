use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Custom validation functions for CLI arguments
mod validation {
    use std::fs;
    use std::path::PathBuf;

    /// Validate that a configuration file path is an existing, readable TOML file
    pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
        let path = PathBuf::from(path_str);

        // Check if file exists
        if !path.exists() {
            return Err(format!("Configuration file does not exist: '{}'", path_str));
        }

        // Check if it's a file (not a directory)
        if !path.is_file() {
            return Err(format!("Configuration path is not a file: '{}'", path_str));
        }

        // Check the expected format
        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            return Err(format!(
                "Configuration file must be a .toml file: '{}'",
                path_str
            ));
        }

        // Check if file is readable
        match fs::File::open(&path) {
            Ok(_) => Ok(path),
            Err(e) => Err(format!(
                "Cannot read configuration file '{}': {}",
                path_str, e
            )),
        }
    }
}

/// A scheduled DingTalk group-chat notification bot
#[derive(Parser, Debug)]
#[command(name = "dingbot")]
#[command(about = "A scheduled DingTalk group-chat notification bot")]
#[command(long_about = "
Dingbot posts scheduled notifications to a DingTalk group-chat webhook:
a weather report on workday mornings, an article digest at noon and in
the evening, and a tech-news pick at night. Schedules, provider
endpoints, and the webhook access token all come from layered TOML
configuration plus DINGBOT_* environment variables.

EXAMPLES:
    # Start with the default layered configuration in ./config
    dingbot

    # Use a single configuration file
    dingbot --config /etc/dingbot/production.toml

    # Force the production environment configuration
    dingbot --env production

    # Validate configuration and print the schedule without starting
    dingbot --dry-run

    # Troubleshoot with debug logging
    dingbot --verbose

The webhook access token is a secret; supply it via
DINGBOT_ROBOT__ACCESS_TOKEN or an uncommitted local.toml.
")]
#[command(version = crate::build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Configuration file path
    ///
    /// Specify a single configuration file to use instead of the layered
    /// default.toml / {environment}.toml / local.toml loading. The file
    /// must exist, be readable, and be in TOML format.
    ///
    /// Example: --config /etc/dingbot/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Force the application to use a specific environment configuration
    /// instead of reading DINGBOT_APP_ENV. This selects which
    /// {environment}.toml layer is loaded.
    ///
    /// Available values: development (dev), test, staging (stage),
    /// production (prod)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level, showing detailed information
    /// about provider fetches and webhook sends. Cannot be used with
    /// --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only.
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Validate configuration and exit
    ///
    /// Loads and validates the configuration, prints the job schedule
    /// summary, and exits without contacting any provider or the webhook.
    /// Returns exit code 0 if valid, non-zero if invalid.
    #[arg(long)]
    pub dry_run: bool,
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl Cli {
    /// Validate CLI arguments beyond what clap enforces
    ///
    /// Clap already rejects the conflicting flag combination during
    /// parsing; this covers manually constructed instances as well.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }
        Ok(())
    }

    /// Log level forced by the global flags, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}
