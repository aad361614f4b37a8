//! Grani Statevector Simulator
//!
//! The simulation core of the playground: exact complex linear algebra
//! over the full 2^n amplitude vector. Given a [`Circuit`](grani_ir::Circuit),
//! [`evaluate`] produces a fresh [`Statevector`]; the reporting methods
//! derive measurement probabilities, a printable amplitude listing, and a
//! per-qubit Bloch reduction from it.
//!
//! Everything in this crate is synchronous, deterministic, and pure: no
//! I/O, no shared state, no caching across calls. Each evaluation
//! allocates its own output, so independent snapshots may be evaluated
//! concurrently from any number of threads. Cost is O(2^n · gates) — the
//! playground keeps n ≤ 8, this crate imposes no ceiling of its own.
//!
//! There is deliberately no sampling here: measurement counts come from an
//! execution backend (see `grani-adapter-sim`), never from the core.
//!
//! # Example
//!
//! ```rust
//! use grani_ir::{Circuit, QubitId};
//! use grani_sim::evaluate;
//!
//! let circuit = Circuit::bell().unwrap();
//! let state = evaluate(&circuit);
//!
//! let probs = state.probabilities();
//! assert!((probs["00"] - 0.5).abs() < 1e-9);
//! assert!((probs["11"] - 0.5).abs() < 1e-9);
//! ```

pub mod evaluator;
pub mod kernels;
pub mod matrices;
pub mod measurement;
pub mod statevector;

pub use evaluator::evaluate;
pub use matrices::{DEFAULT_ANGLE, Matrix2, unitary};
pub use measurement::ReducedQubit;
pub use statevector::Statevector;
