//! Grani Code Export
//!
//! Turns a playground [`Circuit`](grani_ir::Circuit) into source code for
//! external toolchains. Currently one target: a runnable Python program
//! against Qiskit, mirroring what the playground shows in its export
//! dialog.
//!
//! Export is presentation, not evolution: emitters read the circuit and
//! never touch simulator state. Measurement markers become comments
//! because the playground models no classical registers.
//!
//! # Example
//!
//! ```rust
//! use grani_ir::Circuit;
//!
//! let program = grani_export::qiskit::emit(&Circuit::bell().unwrap());
//! assert!(program.starts_with("from qiskit import QuantumCircuit"));
//! ```

pub mod qiskit;
