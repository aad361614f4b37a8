//! Qiskit source emitter.

use grani_ir::{Circuit, GateInstance, GateKind};
use std::f64::consts::FRAC_PI_2;

/// Emit a circuit as a runnable Qiskit program.
///
/// One statement per placed gate, in ascending column order (insertion
/// order within a column). Gates without a column never execute in the
/// simulator, so they are omitted here too. Output is deterministic for a
/// given circuit.
pub fn emit(circuit: &Circuit) -> String {
    let mut emitter = Emitter::new();
    emitter.emit_circuit(circuit)
}

/// Qiskit emitter.
struct Emitter {
    output: String,
}

#[allow(clippy::unused_self)]
impl Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_circuit(&mut self, circuit: &Circuit) -> String {
        self.writeln("from qiskit import QuantumCircuit");
        self.writeln(&format!("qc = QuantumCircuit({})", circuit.num_qubits()));

        let mut placed: Vec<&GateInstance> =
            circuit.gates().iter().filter(|g| g.column.is_some()).collect();
        placed.sort_by_key(|g| g.column);

        for gate in placed {
            let line = self.emit_gate(gate);
            self.writeln(&line);
        }

        self.writeln("print(qc)");
        self.output.clone()
    }

    fn emit_gate(&self, gate: &GateInstance) -> String {
        let q0 = gate.qubits.first().map_or(0, |q| q.0);
        match gate.kind {
            GateKind::X
            | GateKind::Y
            | GateKind::Z
            | GateKind::H
            | GateKind::S
            | GateKind::T => {
                format!("qc.{}({q0})", gate.kind.name())
            }
            GateKind::Rx | GateKind::Ry | GateKind::Rz | GateKind::P => {
                let theta = gate.theta.unwrap_or(FRAC_PI_2);
                format!("qc.{}({theta:.6}, {q0})", gate.kind.name())
            }
            GateKind::Cnot => {
                let q1 = gate.qubits.get(1).map_or(0, |q| q.0);
                format!("qc.cx({q0}, {q1})")
            }
            GateKind::Measure => {
                // No classical register is modeled; leave a marker for the
                // user to wire one up.
                format!("# measurement in Z basis on q{q0} (add classical register to record)")
            }
        }
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}
