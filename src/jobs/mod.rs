pub mod error;
pub mod scheduler;
pub mod tasks;
pub mod types;

pub use error::{JobError, JobResult};
pub use scheduler::{run_job, JobScheduler};
pub use tasks::{JuejinFeedTask, ToutiaoNewsTask, WeatherReportTask};
pub use types::{JobBinding, JobContext, NotifyTask};
