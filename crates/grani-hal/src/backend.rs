//! Backend trait and configuration.
//!
//! The [`Backend`] trait defines the lifecycle the playground's serving
//! layer drives for every execution target, mock or real:
//!
//! ```text
//!   capabilities() ──→ submit() ──→ status() ──→ result()
//!    (sync, &ref)       (async)      (async)      (async)
//! ```
//!
//! Design principles:
//!
//! - **Async-native**: everything that may wait is async.
//! - **Thread-safe**: `Send + Sync` so one backend value can serve
//!   concurrent submissions.
//! - **Infallible introspection**: `capabilities()` is synchronous and
//!   cached at construction — a backend that cannot describe itself
//!   without I/O is not correctly initialized.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use grani_ir::Circuit;

use crate::capability::Capabilities;
use crate::error::{HalError, HalResult};
use crate::job::{JobId, JobStatus};
use crate::result::ExecutionResult;

/// Configuration for a backend instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the backend.
    pub name: String,
    /// Additional configuration.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BackendConfig {
    /// Create a new backend configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Add extra configuration.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl fmt::Display for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Trait for execution backends.
///
/// # Contract
///
/// - `capabilities()` MUST be synchronous and infallible, returning a
///   reference cached at construction time.
/// - `submit()` MUST return a `JobId` whose job starts in `Queued`.
/// - `result()` MUST only be relied on once `status()` is `Completed`.
/// - Terminal job states are permanent.
/// - `wait()` has a default implementation (25 ms poll, 30 s timeout).
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the capabilities of this backend.
    fn capabilities(&self) -> &Capabilities;

    /// Lightweight liveness check.
    async fn is_available(&self) -> HalResult<bool>;

    /// Submit a circuit for execution.
    ///
    /// Returns a job ID usable with `status`, `result` and `cancel`.
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId>;

    /// Get the status of a job.
    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus>;

    /// Get the result of a completed job.
    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult>;

    /// Cancel a job. A no-op on jobs already in a terminal state.
    async fn cancel(&self, job_id: &JobId) -> HalResult<()>;

    /// Wait for a job to complete and return its result.
    ///
    /// Default implementation polls every 25 ms for up to 30 seconds —
    /// generous for mock latencies, tight enough that a wedged job
    /// surfaces as [`HalError::Timeout`] instead of hanging the caller.
    async fn wait(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        use tokio::time::sleep;
        use tracing::{debug, warn};

        let poll_interval = Duration::from_millis(25);
        let max_polls = 1200;

        for _ in 0..max_polls {
            let status = self.status(job_id).await?;

            match status {
                JobStatus::Completed => {
                    debug!(job_id = %job_id, "job completed");
                    return self.result(job_id).await;
                }
                JobStatus::Failed(msg) => return Err(HalError::JobFailed(msg)),
                JobStatus::Cancelled => return Err(HalError::JobCancelled),
                JobStatus::Queued | JobStatus::Running => {
                    sleep(poll_interval).await;
                }
            }
        }

        warn!(job_id = %job_id, "gave up waiting for job");
        Err(HalError::Timeout(job_id.0.clone()))
    }
}

/// Trait for creating backends from configuration.
pub trait BackendFactory: Backend + Sized {
    /// Create a backend from configuration.
    fn from_config(config: BackendConfig) -> HalResult<Self>;
}
