//! Shot sampling from a statevector.
//!
//! This is the only place in the workspace that draws measurement
//! outcomes — the simulator core stays sampling-free by design.

use rand::Rng;

use grani_hal::Counts;
use grani_sim::Statevector;

/// Sample `shots` measurement outcomes from the state's probability
/// distribution.
pub fn sample_counts(state: &Statevector, shots: u32) -> Counts {
    let mut rng = rand::thread_rng();
    let mut counts = Counts::new();
    for _ in 0..shots {
        let outcome = sample_index(state, rng.r#gen());
        counts.insert(state.bitstring(outcome), 1);
    }
    counts
}

/// Invert the cumulative distribution at a uniform draw `r ∈ [0, 1)`.
///
/// Falls back to the last index when accumulated probability never
/// reaches `r`; with a normalized state that only happens through
/// floating-point shortfall at r ≈ 1.
fn sample_index(state: &Statevector, r: f64) -> usize {
    let mut cumulative = 0.0;
    for (i, amp) in state.amplitudes().iter().enumerate() {
        cumulative += amp.norm_sqr();
        if r < cumulative {
            return i;
        }
    }
    state.len() - 1
}
