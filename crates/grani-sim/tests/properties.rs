//! Property-based tests for the statevector evaluator.
//!
//! Random well-formed circuits must preserve the norm, evaluate
//! deterministically, and keep the documented invariances.

use grani_ir::{Circuit, QubitId};
use grani_sim::evaluate;
use proptest::prelude::*;
use std::f64::consts::PI;

/// One gate placement for a generated circuit.
#[derive(Debug, Clone)]
enum GateOp {
    H(u32),
    X(u32),
    Y(u32),
    Z(u32),
    S(u32),
    T(u32),
    Rx(u32, f64),
    Ry(u32, f64),
    Rz(u32, f64),
    P(u32, f64),
    Cnot(u32, u32),
}

impl GateOp {
    /// Place the op in its own column so any op sequence is well-formed.
    fn place(&self, circuit: &mut Circuit, column: u32) {
        let r = match *self {
            GateOp::H(q) => circuit.h(QubitId(q), column),
            GateOp::X(q) => circuit.x(QubitId(q), column),
            GateOp::Y(q) => circuit.y(QubitId(q), column),
            GateOp::Z(q) => circuit.z(QubitId(q), column),
            GateOp::S(q) => circuit.s(QubitId(q), column),
            GateOp::T(q) => circuit.t(QubitId(q), column),
            GateOp::Rx(q, theta) => circuit.rx(theta, QubitId(q), column),
            GateOp::Ry(q, theta) => circuit.ry(theta, QubitId(q), column),
            GateOp::Rz(q, theta) => circuit.rz(theta, QubitId(q), column),
            GateOp::P(q, theta) => circuit.p(theta, QubitId(q), column),
            GateOp::Cnot(c, t) => circuit.cnot(QubitId(c), QubitId(t), column),
        };
        r.expect("generated placement must be legal");
    }
}

fn arb_gate_op(num_qubits: u32) -> BoxedStrategy<GateOp> {
    let angle = -2.0 * PI..2.0 * PI;
    if num_qubits < 2 {
        prop_oneof![
            (0..num_qubits).prop_map(GateOp::H),
            (0..num_qubits).prop_map(GateOp::X),
            (0..num_qubits).prop_map(GateOp::Y),
            (0..num_qubits).prop_map(GateOp::Z),
            (0..num_qubits).prop_map(GateOp::S),
            (0..num_qubits).prop_map(GateOp::T),
            (0..num_qubits, angle.clone()).prop_map(|(q, t)| GateOp::Rx(q, t)),
            (0..num_qubits, angle.clone()).prop_map(|(q, t)| GateOp::Ry(q, t)),
            (0..num_qubits, angle.clone()).prop_map(|(q, t)| GateOp::Rz(q, t)),
            (0..num_qubits, angle).prop_map(|(q, t)| GateOp::P(q, t)),
        ]
        .boxed()
    } else {
        prop_oneof![
            (0..num_qubits).prop_map(GateOp::H),
            (0..num_qubits).prop_map(GateOp::X),
            (0..num_qubits).prop_map(GateOp::Y),
            (0..num_qubits).prop_map(GateOp::Z),
            (0..num_qubits).prop_map(GateOp::S),
            (0..num_qubits).prop_map(GateOp::T),
            (0..num_qubits, angle.clone()).prop_map(|(q, t)| GateOp::Rx(q, t)),
            (0..num_qubits, angle.clone()).prop_map(|(q, t)| GateOp::Ry(q, t)),
            (0..num_qubits, angle.clone()).prop_map(|(q, t)| GateOp::Rz(q, t)),
            (0..num_qubits, angle).prop_map(|(q, t)| GateOp::P(q, t)),
            (0..num_qubits, 0..num_qubits)
                .prop_filter("control and target must differ", |(c, t)| c != t)
                .prop_map(|(c, t)| GateOp::Cnot(c, t)),
        ]
        .boxed()
    }
}

fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (1_u32..=5).prop_flat_map(|num_qubits| {
        prop::collection::vec(arb_gate_op(num_qubits), 0..=12).prop_map(move |ops| {
            let mut circuit = Circuit::new(num_qubits, ops.len().max(1) as u32);
            for (column, op) in ops.iter().enumerate() {
                op.place(&mut circuit, column as u32);
            }
            circuit
        })
    })
}

proptest! {
    /// Unitary-only circuits keep the statevector normalized.
    #[test]
    fn prop_norm_preserved(circuit in arb_circuit()) {
        let sv = evaluate(&circuit);
        prop_assert!((sv.norm_sqr() - 1.0).abs() < 1e-9);
    }

    /// The probability map always sums to ≈ 1.
    #[test]
    fn prop_probabilities_sum_to_one(circuit in arb_circuit()) {
        let total: f64 = evaluate(&circuit).probabilities().values().sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    /// Evaluation is a pure function of the circuit.
    #[test]
    fn prop_evaluation_deterministic(circuit in arb_circuit()) {
        let first = evaluate(&circuit);
        let second = evaluate(&circuit);
        prop_assert_eq!(first.amplitudes(), second.amplitudes());
    }

    /// Rz never changes the |0⟩ measurement distribution, whatever the angle.
    #[test]
    fn prop_rz_probability_invariant(theta in -4.0 * PI..4.0 * PI) {
        let mut circuit = Circuit::new(1, 1);
        circuit.rz(theta, QubitId(0), 0).unwrap();
        let probs = evaluate(&circuit).probabilities();
        prop_assert!((probs["0"] - 1.0).abs() < 1e-9);
        prop_assert!(probs["1"].abs() < 1e-9);
    }

    /// A reduced qubit always lands on (or inside numerical reach of)
    /// the Bloch sphere: |alpha|² + |beta|² ≈ 1.
    #[test]
    fn prop_reduction_normalized(circuit in arb_circuit(), qubit in 0_u32..5) {
        let sv = evaluate(&circuit);
        prop_assume!(qubit < sv.num_qubits());
        let reduced = sv.reduce_qubit(qubit).unwrap();
        let len = reduced.alpha.norm_sqr() + reduced.beta.norm_sqr();
        prop_assert!((len - 1.0).abs() < 1e-9);
    }
}
