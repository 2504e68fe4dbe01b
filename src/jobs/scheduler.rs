use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler as TokioCronScheduler};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::jobs::error::{JobError, JobResult};
use crate::jobs::types::{JobBinding, JobContext, NotifyTask};

/// Wrapper around tokio-cron-scheduler with a fixed binding table
pub struct JobScheduler {
    scheduler: Arc<Mutex<TokioCronScheduler>>,
    context: JobContext,
    bindings: Vec<JobBinding>,
}

impl JobScheduler {
    pub async fn new(context: JobContext) -> JobResult<Self> {
        let scheduler = TokioCronScheduler::new()
            .await
            .map_err(|e| JobError::Scheduler(e.to_string()))?;

        Ok(Self {
            scheduler: Arc::new(Mutex::new(scheduler)),
            context,
            bindings: Vec::new(),
        })
    }

    /// Register a binding; takes effect at the next `start`
    pub fn register(&mut self, binding: JobBinding) {
        self.bindings.push(binding);
    }

    pub fn bindings(&self) -> &[JobBinding] {
        &self.bindings
    }

    /// Schedule all registered bindings and start the scheduler
    pub async fn start(&self) -> JobResult<()> {
        for binding in &self.bindings {
            self.schedule_binding(binding).await?;
        }
        self.scheduler
            .lock()
            .await
            .start()
            .await
            .map_err(|e| JobError::Scheduler(e.to_string()))?;
        Ok(())
    }

    /// Stop the scheduler gracefully
    pub async fn stop(&self) -> JobResult<()> {
        self.scheduler
            .lock()
            .await
            .shutdown()
            .await
            .map_err(|e| JobError::Scheduler(e.to_string()))?;
        Ok(())
    }

    /// Start the scheduler, park on the token, then shut down
    pub async fn run_until_cancelled(&self, token: CancellationToken) -> JobResult<()> {
        self.start().await?;
        token.cancelled().await;
        info!("Shutdown requested, stopping scheduler");
        self.stop().await
    }

    /// Schedule a single binding
    async fn schedule_binding(&self, binding: &JobBinding) -> JobResult<()> {
        let task = Arc::clone(&binding.task);
        let context = self.context.clone();

        let cron_job = Job::new_async(binding.cron.as_str(), move |_uuid, _lock| {
            let task = Arc::clone(&task);
            let context = context.clone();

            Box::pin(async move {
                run_job(task.as_ref(), &context).await;
            })
        })
        .map_err(|e| {
            JobError::InvalidCronExpression(format!("'{}': {}", binding.cron, e))
        })?;

        self.scheduler
            .lock()
            .await
            .add(cron_job)
            .await
            .map_err(|e| JobError::Scheduler(e.to_string()))?;

        info!(job = binding.task.name(), cron = %binding.cron, "Job scheduled");
        Ok(())
    }
}

/// Run one task to completion, logging the outcome.
///
/// A failed run sends the plain-text apology notice naming the task's data
/// category (when enabled); a failure of that notice itself is logged and
/// swallowed so it can never take the scheduler down.
pub async fn run_job(task: &dyn NotifyTask, ctx: &JobContext) {
    info!(job = task.name(), "Job started");

    match task.run(ctx).await {
        Ok(()) => {
            info!(job = task.name(), "Job completed");
        }
        Err(e) => {
            error!(
                job = task.name(),
                category = task.category(),
                kind = e.kind(),
                error = %e,
                "Job failed"
            );
            if ctx.notify_failure {
                let notice = format!("抱歉~狗狗今儿没拿到最新{}数据。", task.category());
                if let Err(send_err) = ctx.robot.send_text(notice).await {
                    warn!(job = task.name(), error = %send_err, "Failed to send failure notice");
                }
            }
        }
    }
}
