use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::robot::DingRobot;

/// Job execution context passed to tasks
#[derive(Clone)]
pub struct JobContext {
    /// Robot handle shared by all jobs, read-only after startup
    pub robot: Arc<DingRobot>,
    /// Whether a failed run sends the plain-text apology notice
    pub notify_failure: bool,
}

/// Trait that all notify tasks must implement
#[async_trait]
pub trait NotifyTask: Send + Sync + std::fmt::Debug {
    /// Stable job name used in schedules and logs
    fn name(&self) -> &'static str;

    /// Data category label used in the failure notice
    fn category(&self) -> &'static str;

    /// Fetch upstream data, format it, and push one notification
    async fn run(&self, ctx: &JobContext) -> AppResult<()>;
}

/// A task paired with the cron expression that fires it
pub struct JobBinding {
    pub cron: String,
    pub task: Arc<dyn NotifyTask>,
}
