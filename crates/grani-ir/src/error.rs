//! Error types for the IR crate.

use crate::gate::GateId;
use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur while editing a circuit.
///
/// The simulator core never produces these; they exist so the editor
/// surface can refuse an illegal placement before it ever reaches
/// evaluation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index outside the circuit.
    #[error("Qubit {qubit} out of range for {num_qubits}-qubit circuit")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Width of the circuit.
        num_qubits: u32,
    },

    /// Column index outside the circuit grid.
    #[error("Column {column} out of range for {num_columns}-column circuit")]
    ColumnOutOfRange {
        /// The offending column.
        column: u32,
        /// Width of the time axis.
        num_columns: u32,
    },

    /// Grid cell already holds a gate.
    #[error("Cell (column {column}, {qubit}) is occupied by gate '{occupant}'")]
    CellOccupied {
        /// Column of the collision.
        column: u32,
        /// Qubit of the collision.
        qubit: QubitId,
        /// The gate already in the cell.
        occupant: GateId,
    },

    /// Gate id already used in this circuit.
    #[error("Gate id '{0}' already exists in circuit")]
    DuplicateGateId(GateId),

    /// No gate with the given id.
    #[error("Gate '{0}' not found in circuit")]
    GateNotFound(GateId),

    /// Gate kind given the wrong number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate kind.
        gate_name: &'static str,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// The same qubit used twice in one placement (e.g. CNOT with
    /// control == target).
    #[error("Duplicate qubit {qubit} in '{gate_name}' placement")]
    DuplicateQubit {
        /// The duplicated qubit.
        qubit: QubitId,
        /// Name of the gate kind.
        gate_name: &'static str,
    },

    /// Angle set on a kind that takes none.
    #[error("Gate '{gate}' of kind '{gate_name}' takes no angle parameter")]
    NotParameterized {
        /// The gate being edited.
        gate: GateId,
        /// Name of the gate kind.
        gate_name: &'static str,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
