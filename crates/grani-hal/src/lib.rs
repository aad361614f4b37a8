//! Grani Backend Abstraction
//!
//! A unified interface between the playground's serving layer and the
//! places a circuit can run. Today that is the bundled mock simulator
//! (`grani-adapter-sim`); the trait keeps the seam open for real devices
//! without changing callers.
//!
//! # Overview
//!
//! - A common [`Backend`] trait for job submission and management
//! - [`Capabilities`] describing what a backend can accept
//! - The job state machine ([`Job`], [`JobId`], [`JobStatus`])
//! - Unified result handling via [`ExecutionResult`] and [`Counts`]
//!
//! # Example: Running a Circuit
//!
//! ```ignore
//! use grani_hal::Backend;
//! use grani_adapter_sim::MockBackend;
//! use grani_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = MockBackend::new();
//!     let job_id = backend.submit(&Circuit::bell()?, 1000).await?;
//!
//!     let result = backend.wait(&job_id).await?;
//!     if let Some((bitstring, count)) = result.counts.most_frequent() {
//!         println!("Most frequent: {bitstring} ({count} times)");
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod job;
pub mod result;

pub use backend::{Backend, BackendConfig, BackendFactory};
pub use capability::Capabilities;
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use result::{Counts, ExecutionResult};
