//! Statevector update kernels.
//!
//! Both kernels are pure: they read the input slice and return a freshly
//! allocated vector, so callers can keep the previous state (the playground
//! diffs successive states for animation).

use num_complex::Complex64;

use crate::matrices::Matrix2;

/// Apply a 2×2 unitary to one qubit of the state.
///
/// Basis indices pair up by the target bit: index `i` with bit = 0 and
/// `i | mask` with bit = 1. Iterating the bit = 0 half covers every index
/// exactly once, writing both halves of the matrix-vector product per
/// pair. O(2^n) with constant work per index.
///
/// `qubit` must be in range for the state length; the evaluator validates
/// indices before calling.
pub fn apply_single_qubit(state: &[Complex64], qubit: usize, u: &Matrix2) -> Vec<Complex64> {
    let mask = 1usize << qubit;
    let mut out = vec![Complex64::new(0.0, 0.0); state.len()];
    let [u00, u01, u10, u11] = *u;
    for i in 0..state.len() {
        if i & mask == 0 {
            let j = i | mask;
            let a = state[i];
            let b = state[j];
            out[i] = u00 * a + u01 * b;
            out[j] = u10 * a + u11 * b;
        }
    }
    out
}

/// Apply a controlled-NOT between two qubits of the state.
///
/// Amplitudes with the control bit clear keep their index; amplitudes with
/// the control bit set land on the index with the target bit flipped.
/// Writes accumulate into the destination cell rather than assigning —
/// for a valid CNOT each destination receives exactly one source, so the
/// sum degenerates to plain assignment, but overlapping writes from
/// malformed input cannot silently drop amplitude.
///
/// `control == target` is a geometric impossibility for a placed gate;
/// the kernel returns the input unchanged rather than corrupting the
/// state.
pub fn apply_cnot(state: &[Complex64], control: usize, target: usize) -> Vec<Complex64> {
    if control == target {
        return state.to_vec();
    }
    let ctrl_mask = 1usize << control;
    let tgt_mask = 1usize << target;
    let mut out = vec![Complex64::new(0.0, 0.0); state.len()];
    for (i, amp) in state.iter().enumerate() {
        let dest = if i & ctrl_mask != 0 { i ^ tgt_mask } else { i };
        out[dest] += *amp;
    }
    out
}
