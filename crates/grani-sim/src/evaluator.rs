//! Column-ordered circuit evaluation.

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use grani_ir::{Circuit, GateInstance, GateKind};

use crate::kernels::{apply_cnot, apply_single_qubit};
use crate::matrices::unitary;
use crate::statevector::Statevector;

/// Evaluate a circuit from |0…0⟩ to its final statevector.
///
/// Placed gates are grouped by column and columns visited in ascending
/// numeric order; gaps in the numbering are fine. Within a column the
/// evaluator makes two passes: first every gate that is neither CNOT nor
/// a measurement marker, applied through the single-qubit kernel, then
/// every CNOT. Single-qubit gates in one column act on disjoint qubits in
/// any well-formed circuit, so their relative order is immaterial; the
/// two-pass split makes all of a step's rotations logically simultaneous
/// before that step's entangling operations.
///
/// Measurement markers never evolve the state. Gates without a column are
/// skipped. Nothing here fails: the editor API is responsible for keeping
/// malformed placements out, and the leniencies below exist so stale or
/// hand-built input degrades instead of panicking.
pub fn evaluate(circuit: &Circuit) -> Statevector {
    let n = circuit.num_qubits();
    let mut state = Statevector::zero(n).into_amplitudes();

    let by_col = circuit.gates_by_column();
    let mut columns: Vec<u32> = by_col.keys().copied().collect();
    columns.sort_unstable();

    debug!(
        num_qubits = n,
        gates = circuit.gates().len(),
        columns = columns.len(),
        "evaluating circuit"
    );

    for col in columns {
        let gates = &by_col[&col];
        if !column_is_disjoint(gates) {
            // Tolerated, but the result depends on the documented pass
            // order rather than anything the user chose.
            warn!(
                column = col,
                "gates in column share a qubit; applying single-qubit gates before CNOTs"
            );
        }

        for gate in gates {
            if matches!(gate.kind, GateKind::Cnot | GateKind::Measure) {
                continue;
            }
            let Some(&qubit) = gate.qubits.first() else {
                continue;
            };
            state = apply_single_qubit(&state, qubit.0 as usize, &unitary(gate.kind, gate.theta));
        }

        for gate in gates {
            if gate.kind != GateKind::Cnot {
                continue;
            }
            let (Some(control), Some(target)) = (gate.control(), gate.target()) else {
                continue;
            };
            state = apply_cnot(&state, control.0 as usize, target.0 as usize);
        }
    }

    Statevector::from_amplitudes(state, n)
}

/// Whether the placed gates of one column are pairwise qubit-disjoint.
fn column_is_disjoint(gates: &[&GateInstance]) -> bool {
    let mut seen = FxHashSet::default();
    for gate in gates {
        for qubit in &gate.qubits {
            if !seen.insert(*qubit) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use grani_ir::{GateInstance, QubitId};
    use num_complex::Complex64;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_empty_circuit_is_ground_state() {
        for n in 1..=4 {
            let sv = evaluate(&Circuit::new(n, 4));
            assert!(approx_eq(sv.amplitudes()[0], Complex64::new(1.0, 0.0)));
            for amp in &sv.amplitudes()[1..] {
                assert!(approx_eq(*amp, Complex64::new(0.0, 0.0)));
            }
        }
    }

    #[test]
    fn test_double_hadamard_is_identity() {
        let mut circuit = Circuit::new(1, 2);
        circuit.h(QubitId(0), 0).unwrap();
        circuit.h(QubitId(0), 1).unwrap();
        let sv = evaluate(&circuit);
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(1.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_bell_state() {
        let sv = evaluate(&Circuit::bell().unwrap());
        let s = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(s, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[3], Complex64::new(s, 0.0)));
    }

    #[test]
    fn test_column_gaps_and_order() {
        // Same gates, far-apart columns: X then H on one qubit.
        let mut circuit = Circuit::new(1, 100);
        circuit.x(QubitId(0), 3).unwrap();
        circuit.h(QubitId(0), 97).unwrap();
        let sv = evaluate(&circuit);
        let s = 1.0 / 2.0_f64.sqrt();
        // H|1⟩ = (|0⟩ − |1⟩)/√2
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(s, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(-s, 0.0)));
    }

    #[test]
    fn test_disjoint_gates_commute_within_column() {
        let mut ab = Circuit::new(2, 1);
        ab.x(QubitId(0), 0).unwrap();
        ab.z(QubitId(1), 0).unwrap();

        let mut ba = Circuit::new(2, 1);
        ba.z(QubitId(1), 0).unwrap();
        ba.x(QubitId(0), 0).unwrap();

        let left = evaluate(&ab);
        let right = evaluate(&ba);
        for (a, b) in left.amplitudes().iter().zip(right.amplitudes()) {
            assert!(approx_eq(*a, *b));
        }
    }

    #[test]
    fn test_measure_marker_is_noop() {
        let mut circuit = Circuit::new(1, 2);
        circuit.h(QubitId(0), 0).unwrap();
        let mut with_measure = circuit.clone();
        with_measure.measure(QubitId(0), 1).unwrap();

        let plain = evaluate(&circuit);
        let measured = evaluate(&with_measure);
        for (a, b) in plain.amplitudes().iter().zip(measured.amplitudes()) {
            assert!(approx_eq(*a, *b));
        }
    }

    #[test]
    fn test_unplaced_gate_ignored() {
        let mut circuit = Circuit::new(1, 1);
        circuit
            .add_gate(GateInstance::single("float", GateKind::X, QubitId(0), 0).unplaced())
            .unwrap();
        let sv = evaluate(&circuit);
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_overlapping_column_uses_pass_order() {
        // The editor refuses this placement, but a stale snapshot can
        // still carry it. The single-qubit pass runs before the CNOT
        // pass, so H-then-CNOT in one shared column yields the Bell
        // distribution rather than panicking.
        let json = serde_json::json!({
            "num_qubits": 2,
            "num_columns": 1,
            "grid": [[null, null]],
            "gates": [
                {"id": "h0", "kind": "H", "qubits": [0], "column": 0},
                {"id": "cx0", "kind": "Cnot", "qubits": [0, 1], "column": 0}
            ],
            "next_gate_id": 2
        });
        let circuit: Circuit = serde_json::from_value(json).unwrap();
        let sv = evaluate(&circuit);
        let s = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(s, 0.0)));
        assert!(approx_eq(sv.amplitudes()[3], Complex64::new(s, 0.0)));
    }
}
