//! Read-only reporting over a completed statevector.

use num_complex::Complex64;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt::Write as _;

use crate::statevector::Statevector;

/// A one-qubit summary used to position the Bloch vector.
///
/// For a single-qubit circuit this is the state itself. For wider
/// circuits it is a marginal-population approximation: `alpha` and `beta`
/// are real pseudo-amplitudes √p₀ and √p₁ with no relative phase —
/// entanglement and phase information is deliberately discarded, which is
/// what the playground's Bloch sphere wants (direction, not a reduced
/// density matrix).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReducedQubit {
    /// Amplitude of the |0⟩ component.
    pub alpha: Complex64,
    /// Amplitude of the |1⟩ component.
    pub beta: Complex64,
}

impl Statevector {
    /// Measurement probability per basis label.
    ///
    /// Keys are binary labels, zero-padded, qubit n−1 first. Values are
    /// plain squared magnitudes; no normalization happens here — the
    /// evaluator hands back unit vectors and this function does not
    /// second-guess it.
    pub fn probabilities(&self) -> FxHashMap<String, f64> {
        let mut probs =
            FxHashMap::with_capacity_and_hasher(self.len(), rustc_hash::FxBuildHasher);
        for (i, amp) in self.amplitudes().iter().enumerate() {
            probs.insert(self.bitstring(i), amp.norm_sqr());
        }
        probs
    }

    /// Human-readable amplitude listing, one basis state per line:
    /// label, amplitude, magnitude, and phase angle in radians, all to
    /// three decimals.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        for (i, amp) in self.amplitudes().iter().enumerate() {
            let sign = if amp.im >= 0.0 { "+" } else { "" };
            let _ = writeln!(
                out,
                "|{}⟩: amp={:.3}{}{:.3}i  |amp|={:.3}  φ={:.3}",
                self.bitstring(i),
                amp.re,
                sign,
                amp.im,
                amp.norm(),
                amp.im.atan2(amp.re),
            );
        }
        out
    }

    /// Reduce to a single qubit for Bloch-sphere display.
    ///
    /// Returns `None` for an out-of-range qubit. Exact for one-qubit
    /// states; see [`ReducedQubit`] for the multi-qubit approximation.
    /// The marginal populations are renormalized by their sum before the
    /// square root, so a slightly drifted input still lands on the
    /// sphere.
    pub fn reduce_qubit(&self, qubit: u32) -> Option<ReducedQubit> {
        if qubit >= self.num_qubits() {
            return None;
        }
        if self.num_qubits() == 1 {
            return Some(ReducedQubit {
                alpha: self.amplitudes()[0],
                beta: self.amplitudes()[1],
            });
        }

        let mask = 1usize << qubit;
        let mut p0 = 0.0;
        let mut p1 = 0.0;
        for (i, amp) in self.amplitudes().iter().enumerate() {
            if i & mask == 0 {
                p0 += amp.norm_sqr();
            } else {
                p1 += amp.norm_sqr();
            }
        }

        let total = p0 + p1;
        if total > 0.0 {
            p0 /= total;
            p1 /= total;
        }

        Some(ReducedQubit {
            alpha: Complex64::new(p0.sqrt(), 0.0),
            beta: Complex64::new(p1.sqrt(), 0.0),
        })
    }
}
