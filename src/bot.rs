//! Bot module for managing the notification bot lifecycle
//!
//! This module handles job registration, scheduler startup, and graceful
//! shutdown.

use std::sync::Arc;

use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::config::{Environment, settings::Settings};
use crate::jobs::{
    JobBinding, JobContext, JobScheduler, JuejinFeedTask, ToutiaoNewsTask, WeatherReportTask,
};
use crate::robot::DingRobot;

/// Notification bot manager
pub struct Bot {
    settings: Settings,
}

impl Bot {
    /// Create a new bot with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Build the binding table from the schedule configuration
    fn bindings(&self) -> Vec<JobBinding> {
        let mut bindings = Vec::new();

        if self.settings.schedule.weather.enabled {
            bindings.push(JobBinding {
                cron: self.settings.schedule.weather.cron.clone(),
                task: Arc::new(WeatherReportTask::new(&self.settings.providers.weather)),
            });
        }

        if self.settings.schedule.juejin.enabled {
            bindings.push(JobBinding {
                cron: self.settings.schedule.juejin.cron.clone(),
                task: Arc::new(JuejinFeedTask::new(&self.settings.providers.juejin)),
            });
        }

        if self.settings.schedule.toutiao.enabled {
            bindings.push(JobBinding {
                cron: self.settings.schedule.toutiao.cron.clone(),
                task: Arc::new(ToutiaoNewsTask::new(&self.settings.providers.toutiao)),
            });
        }

        bindings
    }

    /// Start the bot and run until shutdown signal
    ///
    /// This method:
    /// 1. Logs startup information
    /// 2. Builds the webhook client and the enabled job bindings
    /// 3. Starts the cron scheduler
    /// 4. Waits for Ctrl+C or SIGTERM, then shuts the scheduler down
    ///
    /// # Returns
    /// Returns Ok(()) on successful shutdown, or error on startup failure
    ///
    /// # Errors
    /// - Invalid cron expression in the schedule configuration
    /// - Scheduler startup or shutdown errors
    pub async fn run(self) -> anyhow::Result<()> {
        // Log application startup information
        tracing::info!(
            app_name = %self.settings.application.name,
            app_version = %self.settings.application.version,
            environment = %Environment::from_env().as_str(),
            "Application starting"
        );

        // Log robot configuration (without the access token)
        tracing::info!(
            base_url = %self.settings.robot.base_url,
            access_token_configured = %(!self.settings.robot.access_token.is_empty()),
            notify_failure = %self.settings.robot.notify_failure,
            "Robot configuration loaded"
        );

        // Log schedule configuration
        tracing::info!(
            weather_enabled = %self.settings.schedule.weather.enabled,
            weather_cron = %self.settings.schedule.weather.cron,
            juejin_enabled = %self.settings.schedule.juejin.enabled,
            juejin_cron = %self.settings.schedule.juejin.cron,
            toutiao_enabled = %self.settings.schedule.toutiao.enabled,
            toutiao_cron = %self.settings.schedule.toutiao.cron,
            "Schedule configuration loaded"
        );

        // Log logger configuration
        tracing::info!(
            level = %self.settings.logger.level,
            console_enabled = %self.settings.logger.console.enabled,
            file_enabled = %self.settings.logger.file.enabled,
            "Logger configuration loaded"
        );

        tracing::info!("Configuration loaded successfully");

        let robot = Arc::new(DingRobot::new(
            &self.settings.robot.base_url,
            &self.settings.robot.access_token,
        ));
        let context = JobContext {
            robot,
            notify_failure: self.settings.robot.notify_failure,
        };

        let mut scheduler = JobScheduler::new(context).await?;
        for binding in self.bindings() {
            scheduler.register(binding);
        }

        if scheduler.bindings().is_empty() {
            tracing::warn!("No jobs enabled; the bot will idle until shutdown");
        }

        // Cancel the token when a shutdown signal arrives
        let token = CancellationToken::new();
        let signal_token = token.clone();
        tokio::spawn(async move {
            shutdown_signal().await;
            signal_token.cancel();
        });

        scheduler.run_until_cancelled(token).await?;

        tracing::info!("Bot shutdown complete");

        Ok(())
    }
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
///
/// This function returns when either signal is received, allowing
/// the bot to perform graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
