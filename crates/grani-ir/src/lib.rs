//! Grani Circuit Representation
//!
//! This crate provides the data structures for representing the playground's
//! quantum circuits: a column × qubit placement grid plus the list of placed
//! gates. It is the shared vocabulary between the editor surface, the
//! statevector simulator, code export, and execution backends.
//!
//! # Overview
//!
//! A [`Circuit`] is a grid: columns are discrete time steps, rows are qubit
//! wires. Each placed [`GateInstance`] records its own column, so evaluation
//! needs only the gate list; the grid exists for collision detection while
//! editing. All mutation flows through the editor API
//! ([`Circuit::add_gate`], [`Circuit::remove_gate`],
//! [`Circuit::set_theta`]), which enforces the placement invariants —
//! downstream consumers can assume gates within a column are pairwise
//! disjoint in qubit usage.
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use grani_ir::{Circuit, QubitId};
//!
//! // 2 qubits, 2 time steps
//! let mut circuit = Circuit::new(2, 2);
//!
//! // |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0), 0).unwrap();
//! circuit.cnot(QubitId(0), QubitId(1), 1).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.gates().len(), 2);
//! ```
//!
//! # Supported Gates
//!
//! | Kind | Qubits | Angle | Description |
//! |------|--------|-------|-------------|
//! | `X`, `Y`, `Z` | 1 | — | Pauli gates |
//! | `H` | 1 | — | Hadamard |
//! | `S`, `T` | 1 | — | Phase quarter/eighth turns |
//! | `Rx`, `Ry`, `Rz` | 1 | θ | Axis rotations |
//! | `P` | 1 | θ | Phase gate |
//! | `Cnot` | 2 | — | Controlled-NOT (control first) |
//! | `Measure` | 1 | — | Marker only; no state evolution |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{GateId, GateInstance, GateKind};
pub use qubit::QubitId;
