//! The circuit grid and its editor-facing mutation API.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::{GateId, GateInstance, GateKind};
use crate::qubit::QubitId;

/// A quantum circuit laid out on a column × qubit grid.
///
/// The grid exists for the editor: it answers "is this cell free?" before a
/// placement is accepted. Evaluation reads only the gate list; each gate
/// carries its own column.
///
/// Mutation goes through [`add_gate`](Circuit::add_gate),
/// [`remove_gate`](Circuit::remove_gate) and
/// [`set_theta`](Circuit::set_theta), which uphold the placement
/// invariants. Readers get an immutable snapshot; the circuit is `Clone`
/// so callers that recompute while editing can hand the evaluator its own
/// copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubit wires.
    num_qubits: u32,
    /// Number of time-axis columns.
    num_columns: u32,
    /// Cell occupancy: `grid[column][qubit]` holds the occupying gate id.
    grid: Vec<Vec<Option<GateId>>>,
    /// All gates, placed or not, in insertion order.
    gates: Vec<GateInstance>,
    /// Counter backing the placement helpers' generated ids.
    next_gate_id: u64,
}

impl Circuit {
    /// Create an empty circuit of the given width and column count.
    pub fn new(num_qubits: u32, num_columns: u32) -> Self {
        Self {
            num_qubits,
            num_columns,
            grid: vec![vec![None; num_qubits as usize]; num_columns as usize],
            gates: vec![],
            next_gate_id: 0,
        }
    }

    /// Number of qubit wires.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of time-axis columns.
    #[inline]
    pub fn num_columns(&self) -> u32 {
        self.num_columns
    }

    /// All gates in insertion order.
    #[inline]
    pub fn gates(&self) -> &[GateInstance] {
        &self.gates
    }

    /// Whether the circuit holds no gates at all.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Look up a gate by id.
    pub fn gate(&self, id: &GateId) -> Option<&GateInstance> {
        self.gates.iter().find(|g| &g.id == id)
    }

    /// The gate occupying a grid cell, if any.
    pub fn gate_at(&self, column: u32, qubit: QubitId) -> Option<&GateInstance> {
        let id = self
            .grid
            .get(column as usize)?
            .get(qubit.0 as usize)?
            .as_ref()?;
        self.gate(id)
    }

    /// Placed gates grouped by column.
    ///
    /// Column keys are whatever the gates carry; they need not be
    /// contiguous. Unplaced gates are absent.
    pub fn gates_by_column(&self) -> FxHashMap<u32, Vec<&GateInstance>> {
        let mut by_col: FxHashMap<u32, Vec<&GateInstance>> = FxHashMap::default();
        for gate in &self.gates {
            if let Some(col) = gate.column {
                by_col.entry(col).or_default().push(gate);
            }
        }
        by_col
    }

    // =========================================================================
    // Editor API
    // =========================================================================

    /// Add a gate, validating arity, ranges and grid collisions.
    ///
    /// Placed gates occupy one grid cell per qubit they touch; the cells
    /// are released again by [`remove_gate`](Circuit::remove_gate).
    pub fn add_gate(&mut self, gate: GateInstance) -> IrResult<()> {
        let expected = gate.kind.num_qubits();
        let got = u32::try_from(gate.qubits.len()).unwrap_or(u32::MAX);
        if got != expected {
            return Err(IrError::QubitCountMismatch {
                gate_name: gate.kind.name(),
                expected,
                got,
            });
        }

        for (i, &qubit) in gate.qubits.iter().enumerate() {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
            if gate.qubits[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: gate.kind.name(),
                });
            }
        }

        if self.gate(&gate.id).is_some() {
            return Err(IrError::DuplicateGateId(gate.id));
        }

        if let Some(column) = gate.column {
            if column >= self.num_columns {
                return Err(IrError::ColumnOutOfRange {
                    column,
                    num_columns: self.num_columns,
                });
            }
            for &qubit in &gate.qubits {
                if let Some(occupant) = &self.grid[column as usize][qubit.0 as usize] {
                    return Err(IrError::CellOccupied {
                        column,
                        qubit,
                        occupant: occupant.clone(),
                    });
                }
            }
            for &qubit in &gate.qubits {
                self.grid[column as usize][qubit.0 as usize] = Some(gate.id.clone());
            }
        }

        self.gates.push(gate);
        Ok(())
    }

    /// Remove a gate by id, releasing its grid cells.
    pub fn remove_gate(&mut self, id: &GateId) -> IrResult<GateInstance> {
        let index = self
            .gates
            .iter()
            .position(|g| &g.id == id)
            .ok_or_else(|| IrError::GateNotFound(id.clone()))?;
        let gate = self.gates.remove(index);
        if let Some(column) = gate.column {
            for &qubit in &gate.qubits {
                self.grid[column as usize][qubit.0 as usize] = None;
            }
        }
        Ok(gate)
    }

    /// Change the angle of a placed rotation/phase gate.
    pub fn set_theta(&mut self, id: &GateId, theta: f64) -> IrResult<()> {
        let gate = self
            .gates
            .iter_mut()
            .find(|g| &g.id == id)
            .ok_or_else(|| IrError::GateNotFound(id.clone()))?;
        if !gate.kind.takes_angle() {
            return Err(IrError::NotParameterized {
                gate: gate.id.clone(),
                gate_name: gate.kind.name(),
            });
        }
        gate.theta = Some(theta);
        Ok(())
    }

    // =========================================================================
    // Placement helpers
    // =========================================================================

    fn fresh_id(&mut self) -> GateId {
        let id = GateId(format!("g{}", self.next_gate_id));
        self.next_gate_id += 1;
        id
    }

    fn place_single(&mut self, kind: GateKind, qubit: QubitId, column: u32) -> IrResult<GateId> {
        let id = self.fresh_id();
        self.add_gate(GateInstance::single(id.clone(), kind, qubit, column))?;
        Ok(id)
    }

    fn place_rotation(
        &mut self,
        kind: GateKind,
        theta: f64,
        qubit: QubitId,
        column: u32,
    ) -> IrResult<GateId> {
        let id = self.fresh_id();
        self.add_gate(GateInstance::single(id.clone(), kind, qubit, column).with_theta(theta))?;
        Ok(id)
    }

    /// Place a Hadamard gate.
    pub fn h(&mut self, qubit: QubitId, column: u32) -> IrResult<GateId> {
        self.place_single(GateKind::H, qubit, column)
    }

    /// Place a Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId, column: u32) -> IrResult<GateId> {
        self.place_single(GateKind::X, qubit, column)
    }

    /// Place a Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId, column: u32) -> IrResult<GateId> {
        self.place_single(GateKind::Y, qubit, column)
    }

    /// Place a Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId, column: u32) -> IrResult<GateId> {
        self.place_single(GateKind::Z, qubit, column)
    }

    /// Place an S gate.
    pub fn s(&mut self, qubit: QubitId, column: u32) -> IrResult<GateId> {
        self.place_single(GateKind::S, qubit, column)
    }

    /// Place a T gate.
    pub fn t(&mut self, qubit: QubitId, column: u32) -> IrResult<GateId> {
        self.place_single(GateKind::T, qubit, column)
    }

    /// Place an Rx rotation.
    pub fn rx(&mut self, theta: f64, qubit: QubitId, column: u32) -> IrResult<GateId> {
        self.place_rotation(GateKind::Rx, theta, qubit, column)
    }

    /// Place an Ry rotation.
    pub fn ry(&mut self, theta: f64, qubit: QubitId, column: u32) -> IrResult<GateId> {
        self.place_rotation(GateKind::Ry, theta, qubit, column)
    }

    /// Place an Rz rotation.
    pub fn rz(&mut self, theta: f64, qubit: QubitId, column: u32) -> IrResult<GateId> {
        self.place_rotation(GateKind::Rz, theta, qubit, column)
    }

    /// Place a phase gate.
    pub fn p(&mut self, theta: f64, qubit: QubitId, column: u32) -> IrResult<GateId> {
        self.place_rotation(GateKind::P, theta, qubit, column)
    }

    /// Place a CNOT gate.
    pub fn cnot(&mut self, control: QubitId, target: QubitId, column: u32) -> IrResult<GateId> {
        let id = self.fresh_id();
        self.add_gate(GateInstance::cnot(id.clone(), control, target, column))?;
        Ok(id)
    }

    /// Place a measurement marker.
    pub fn measure(&mut self, qubit: QubitId, column: u32) -> IrResult<GateId> {
        self.place_single(GateKind::Measure, qubit, column)
    }

    // =========================================================================
    // Sample circuits
    // =========================================================================

    /// The two-qubit Bell circuit: H on q0, then CNOT(q0 → q1).
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::new(2, 2);
        circuit.h(QubitId(0), 0)?;
        circuit.cnot(QubitId(0), QubitId(1), 1)?;
        Ok(circuit)
    }

    /// The n-qubit GHZ circuit: H on q0, then a CNOT chain.
    pub fn ghz(num_qubits: u32) -> IrResult<Self> {
        let mut circuit = Self::new(num_qubits, num_qubits.max(1));
        circuit.h(QubitId(0), 0)?;
        for i in 1..num_qubits {
            circuit.cnot(QubitId(i - 1), QubitId(i), i)?;
        }
        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_circuit() {
        let circuit = Circuit::new(3, 8);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_columns(), 8);
        assert!(circuit.is_empty());
        assert!(circuit.gate_at(0, QubitId(0)).is_none());
    }

    #[test]
    fn test_placement_occupies_cells() {
        let mut circuit = Circuit::new(2, 4);
        let id = circuit.cnot(QubitId(0), QubitId(1), 2).unwrap();
        assert_eq!(circuit.gate_at(2, QubitId(0)).map(|g| &g.id), Some(&id));
        assert_eq!(circuit.gate_at(2, QubitId(1)).map(|g| &g.id), Some(&id));
        assert!(circuit.gate_at(1, QubitId(0)).is_none());
    }

    #[test]
    fn test_collision_rejected() {
        let mut circuit = Circuit::new(2, 4);
        circuit.h(QubitId(0), 0).unwrap();
        let err = circuit.x(QubitId(0), 0).unwrap_err();
        assert!(matches!(err, IrError::CellOccupied { column: 0, .. }));
        // The colliding gate never landed in the gate list.
        assert_eq!(circuit.gates().len(), 1);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut circuit = Circuit::new(2, 4);
        assert!(matches!(
            circuit.h(QubitId(2), 0),
            Err(IrError::QubitOutOfRange { .. })
        ));
        assert!(matches!(
            circuit.h(QubitId(0), 4),
            Err(IrError::ColumnOutOfRange { .. })
        ));
    }

    #[test]
    fn test_cnot_control_equals_target_rejected() {
        let mut circuit = Circuit::new(2, 4);
        assert!(matches!(
            circuit.cnot(QubitId(1), QubitId(1), 0),
            Err(IrError::DuplicateQubit { .. })
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut circuit = Circuit::new(2, 4);
        circuit
            .add_gate(GateInstance::single("mine", GateKind::H, QubitId(0), 0))
            .unwrap();
        let err = circuit
            .add_gate(GateInstance::single("mine", GateKind::X, QubitId(1), 1))
            .unwrap_err();
        assert!(matches!(err, IrError::DuplicateGateId(_)));
    }

    #[test]
    fn test_remove_frees_cells() {
        let mut circuit = Circuit::new(2, 4);
        let id = circuit.h(QubitId(0), 0).unwrap();
        let removed = circuit.remove_gate(&id).unwrap();
        assert_eq!(removed.kind, GateKind::H);
        assert!(circuit.is_empty());
        // The freed cell accepts a new placement.
        circuit.x(QubitId(0), 0).unwrap();
    }

    #[test]
    fn test_set_theta() {
        let mut circuit = Circuit::new(1, 2);
        let rx = circuit.rx(0.5, QubitId(0), 0).unwrap();
        circuit.set_theta(&rx, 1.5).unwrap();
        assert_eq!(circuit.gate(&rx).unwrap().theta, Some(1.5));

        let h = circuit.h(QubitId(0), 1).unwrap();
        assert!(matches!(
            circuit.set_theta(&h, 1.0),
            Err(IrError::NotParameterized { .. })
        ));
    }

    #[test]
    fn test_unplaced_gate_skips_grid() {
        let mut circuit = Circuit::new(1, 1);
        circuit.h(QubitId(0), 0).unwrap();
        // An unplaced gate coexists with a full grid.
        circuit
            .add_gate(GateInstance::single("float", GateKind::X, QubitId(0), 0).unplaced())
            .unwrap();
        assert_eq!(circuit.gates().len(), 2);
        assert_eq!(circuit.gates_by_column()[&0].len(), 1);
    }

    #[test]
    fn test_gates_by_column_sparse() {
        let mut circuit = Circuit::new(2, 10);
        circuit.h(QubitId(0), 0).unwrap();
        circuit.x(QubitId(1), 7).unwrap();
        let by_col = circuit.gates_by_column();
        assert_eq!(by_col.len(), 2);
        assert!(by_col.contains_key(&7));
    }

    #[test]
    fn test_bell_shape() {
        let circuit = Circuit::bell().unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.gates().len(), 2);
    }

    #[test]
    fn test_serde_roundtrip() {
        let circuit = Circuit::ghz(3).unwrap();
        let json = serde_json::to_string(&circuit).unwrap();
        let back: Circuit = serde_json::from_str(&json).unwrap();
        assert_eq!(back.num_qubits(), 3);
        assert_eq!(back.gates().len(), circuit.gates().len());
    }
}
