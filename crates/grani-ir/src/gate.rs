//! Gate kinds and placed gate instances.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::QubitId;

/// Unique identifier for a placed gate within a circuit.
///
/// Ids are assigned by the editor (or by the [`Circuit`](crate::Circuit)
/// placement helpers) and stay stable across edits of other gates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GateId(pub String);

impl GateId {
    /// Create a new gate ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GateId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for GateId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The closed set of gate kinds the playground places on the grid.
///
/// `Measure` is a marker, not a unitary: it never evolves the state during
/// simulation and only matters to export and visualization layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// T gate (fourth root of Z).
    T,
    /// Rotation around X axis.
    Rx,
    /// Rotation around Y axis.
    Ry,
    /// Rotation around Z axis.
    Rz,
    /// Phase gate.
    P,
    /// Controlled-NOT gate.
    Cnot,
    /// Measurement marker (Z basis).
    Measure,
}

impl GateKind {
    /// Get the display name of this gate kind.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::H => "h",
            GateKind::S => "s",
            GateKind::T => "t",
            GateKind::Rx => "rx",
            GateKind::Ry => "ry",
            GateKind::Rz => "rz",
            GateKind::P => "p",
            GateKind::Cnot => "cnot",
            GateKind::Measure => "measure",
        }
    }

    /// Number of qubits a placement of this kind occupies.
    #[inline]
    pub fn num_qubits(self) -> u32 {
        match self {
            GateKind::Cnot => 2,
            _ => 1,
        }
    }

    /// Whether this kind carries an angle parameter.
    #[inline]
    pub fn takes_angle(self) -> bool {
        matches!(
            self,
            GateKind::Rx | GateKind::Ry | GateKind::Rz | GateKind::P
        )
    }

    /// Whether this kind is an entangling two-qubit gate.
    #[inline]
    pub fn is_entangling(self) -> bool {
        matches!(self, GateKind::Cnot)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A gate placed on the circuit grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateInstance {
    /// Stable identifier, unique within the owning circuit.
    pub id: GateId,
    /// The kind of gate.
    pub kind: GateKind,
    /// Target qubits. One entry for single-qubit kinds; for [`GateKind::Cnot`]
    /// the first entry is the control and the second the target.
    pub qubits: Vec<QubitId>,
    /// Angle in radians; meaningful only for Rx/Ry/Rz/P.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theta: Option<f64>,
    /// Column (time step) this gate sits in. Gates without a column are
    /// never evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl GateInstance {
    /// Create a single-qubit gate placement.
    pub fn single(id: impl Into<GateId>, kind: GateKind, qubit: QubitId, column: u32) -> Self {
        Self {
            id: id.into(),
            kind,
            qubits: vec![qubit],
            theta: None,
            column: Some(column),
        }
    }

    /// Create a CNOT placement with explicit control and target.
    pub fn cnot(id: impl Into<GateId>, control: QubitId, target: QubitId, column: u32) -> Self {
        Self {
            id: id.into(),
            kind: GateKind::Cnot,
            qubits: vec![control, target],
            theta: None,
            column: Some(column),
        }
    }

    /// Set the rotation/phase angle.
    #[must_use]
    pub fn with_theta(mut self, theta: f64) -> Self {
        self.theta = Some(theta);
        self
    }

    /// Detach the gate from any column.
    #[must_use]
    pub fn unplaced(mut self) -> Self {
        self.column = None;
        self
    }

    /// Control qubit of a CNOT placement.
    pub fn control(&self) -> Option<QubitId> {
        if self.kind == GateKind::Cnot {
            self.qubits.first().copied()
        } else {
            None
        }
    }

    /// Target qubit of a CNOT placement.
    pub fn target(&self) -> Option<QubitId> {
        if self.kind == GateKind::Cnot {
            self.qubits.get(1).copied()
        } else {
            None
        }
    }
}
