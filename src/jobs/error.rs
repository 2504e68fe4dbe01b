use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobError {
    #[error("Invalid cron expression: {0}")]
    InvalidCronExpression(String),

    #[error("Scheduler error: {0}")]
    Scheduler(String),
}

pub type JobResult<T> = Result<T, JobError>;
