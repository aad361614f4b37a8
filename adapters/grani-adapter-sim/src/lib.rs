//! Grani Mock Local Backend
//!
//! The playground's stand-in for a quantum-cloud device: a
//! [`Backend`](grani_hal::Backend) implementation that evaluates circuits
//! with `grani-sim`, samples measurement counts from the resulting
//! distribution, and replays the Queued → Running → Completed lifecycle
//! over the tokio timer with a configurable simulated latency.
//!
//! Multi-shot sampling lives here on purpose — the simulator core stays a
//! pure, deterministic function and never draws random outcomes.
//!
//! # Example
//!
//! ```rust
//! use grani_adapter_sim::MockBackend;
//! use grani_hal::Backend;
//! use grani_ir::Circuit;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = MockBackend::new().with_latency(Duration::ZERO);
//! let job_id = backend.submit(&Circuit::bell()?, 1000).await?;
//! let result = backend.wait(&job_id).await?;
//! assert_eq!(result.counts.total(), 1000);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod sampler;

pub use backend::MockBackend;
pub use sampler::sample_counts;
