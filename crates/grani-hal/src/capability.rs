//! Backend capability introspection.

use serde::{Deserialize, Serialize};

/// What a backend can do: qubit ceiling, shot ceiling, and whether it is
/// a simulator. The playground's backend panel renders these directly;
/// submission code uses them to refuse oversized requests early.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the backend.
    pub name: String,
    /// Number of qubits available.
    pub num_qubits: u32,
    /// Maximum number of shots per job.
    pub max_shots: u32,
    /// Whether this is a simulator (`true`) vs real hardware (`false`).
    pub is_simulator: bool,
    /// Additional capability flags, e.g. `"statevector"`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Capabilities {
    /// Create capabilities for a local statevector simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            name: "simulator_local".into(),
            num_qubits,
            max_shots: 100_000,
            is_simulator: true,
            features: vec!["statevector".into()],
        }
    }
}
