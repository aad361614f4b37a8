//! The mock local backend.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};
use uuid::Uuid;

use grani_hal::{
    Backend, BackendConfig, BackendFactory, Capabilities, ExecutionResult, HalError, HalResult,
    Job, JobId, JobStatus,
};
use grani_ir::Circuit;
use grani_sim::evaluate;

use crate::sampler::sample_counts;

/// Job record held by the mock backend.
struct MockJob {
    job: Job,
    result: Option<ExecutionResult>,
}

/// Shared job store: id → record. One store per backend value, owned by
/// it — nothing here is process-global.
type JobStore = Arc<Mutex<FxHashMap<String, MockJob>>>;

/// The playground's stand-in for a quantum-cloud device.
///
/// Jobs move Queued → Running → Completed on the tokio timer with a
/// configurable simulated latency per transition, so the UI's polling
/// code sees the same shape of lifecycle a real provider produces.
/// Counts come from evaluating the circuit once with `grani-sim` and
/// sampling the resulting distribution.
pub struct MockBackend {
    /// Backend configuration.
    config: BackendConfig,
    /// Capabilities, cached at construction.
    capabilities: Capabilities,
    /// Active and finished jobs.
    jobs: JobStore,
    /// Simulated delay before each lifecycle transition.
    latency: Duration,
}

impl MockBackend {
    /// Default queue-latency of the mock device.
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(10);

    /// Create a mock backend with the playground's default limits
    /// (8 qubits, 10 ms simulated latency).
    pub fn new() -> Self {
        Self::with_max_qubits(8)
    }

    /// Create a mock backend with a custom qubit ceiling.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            config: BackendConfig::new("simulator_local"),
            capabilities: Capabilities::simulator(max_qubits),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            latency: Self::DEFAULT_LATENCY,
        }
    }

    /// Override the simulated latency (tests use zero).
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Drive one job through Running to Completed on the timer.
    ///
    /// Each transition re-checks the stored status first, so a cancel
    /// that lands between sleeps wins and the terminal state sticks.
    async fn run_job(jobs: JobStore, job_id: JobId, circuit: Circuit, shots: u32, latency: Duration) {
        tokio::time::sleep(latency).await;
        {
            let mut jobs = jobs.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            let Some(mock_job) = jobs.get_mut(&job_id.0) else {
                return;
            };
            if mock_job.job.status != JobStatus::Queued {
                return;
            }
            mock_job.job = mock_job.job.clone().with_status(JobStatus::Running);
        }

        let start = Instant::now();
        let statevector = evaluate(&circuit);
        let counts = sample_counts(&statevector, shots);
        let elapsed = start.elapsed();
        debug!(job_id = %job_id, shots, elapsed_us = elapsed.as_micros() as u64, "mock run finished");

        tokio::time::sleep(latency).await;
        {
            let mut jobs = jobs.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            let Some(mock_job) = jobs.get_mut(&job_id.0) else {
                return;
            };
            if mock_job.job.status != JobStatus::Running {
                return;
            }
            mock_job.result = Some(
                ExecutionResult::new(counts, shots)
                    .with_execution_time(elapsed.as_millis() as u64),
            );
            mock_job.job = mock_job.job.clone().with_status(JobStatus::Completed);
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for MockBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn is_available(&self) -> HalResult<bool> {
        Ok(true)
    }

    #[instrument(skip(self, circuit))]
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId> {
        if shots == 0 {
            return Err(HalError::InvalidShots("shots must be positive".into()));
        }
        if shots > self.capabilities.max_shots {
            return Err(HalError::InvalidShots(format!(
                "{shots} exceeds backend maximum of {}",
                self.capabilities.max_shots
            )));
        }
        if circuit.num_qubits() > self.capabilities.num_qubits {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but {} only supports {}",
                circuit.num_qubits(),
                self.config.name,
                self.capabilities.num_qubits
            )));
        }

        let job_id = JobId::new(Uuid::new_v4().to_string());
        let job = Job::new(job_id.clone(), shots).with_backend(self.config.name.clone());

        {
            let mut jobs = self
                .jobs
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            jobs.insert(job_id.0.clone(), MockJob { job, result: None });
        }

        debug!(job_id = %job_id, shots, "submitted mock job");

        tokio::spawn(Self::run_job(
            Arc::clone(&self.jobs),
            job_id.clone(),
            circuit.clone(),
            shots,
            self.latency,
        ));

        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .and_then(|j| j.result.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        let mut jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(mock_job) = jobs.get_mut(&job_id.0) {
            // Sticky on terminal states, so cancelling a finished job is
            // a harmless no-op.
            mock_job.job = mock_job.job.clone().with_status(JobStatus::Cancelled);
            Ok(())
        } else {
            Err(HalError::JobNotFound(job_id.0.clone()))
        }
    }
}

impl BackendFactory for MockBackend {
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let max_qubits = config
            .extra
            .get("max_qubits")
            .and_then(serde_json::Value::as_u64)
            .map_or(8, |v| v as u32);
        let latency_ms = config
            .extra
            .get("latency_ms")
            .and_then(serde_json::Value::as_u64)
            .map_or(Self::DEFAULT_LATENCY.as_millis() as u64, |v| v);

        Ok(Self {
            capabilities: Capabilities::simulator(max_qubits),
            config,
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            latency: Duration::from_millis(latency_ms),
        })
    }
}
