//! The 2×2 unitary catalog.

use num_complex::Complex64;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use grani_ir::GateKind;

/// Row-major 2×2 matrix: `[u00, u01, u10, u11]`.
pub type Matrix2 = [Complex64; 4];

/// Angle used for Rx/Ry/Rz/P when the placement carries none.
pub const DEFAULT_ANGLE: f64 = FRAC_PI_2;

const ZERO: Complex64 = Complex64 { re: 0.0, im: 0.0 };
const ONE: Complex64 = Complex64 { re: 1.0, im: 0.0 };

/// The identity matrix.
pub fn identity() -> Matrix2 {
    [ONE, ZERO, ZERO, ONE]
}

/// Look up the single-qubit unitary for a gate kind.
///
/// Rotation and phase kinds derive their matrix from `theta`, falling back
/// to [`DEFAULT_ANGLE`] when the placement carries no angle. `Cnot` has no
/// single-qubit matrix (the evaluator applies it with its own kernel) and
/// `Measure` never evolves the state; both map to identity here so the
/// catalog stays total.
pub fn unitary(kind: GateKind, theta: Option<f64>) -> Matrix2 {
    let angle = || theta.unwrap_or(DEFAULT_ANGLE);
    match kind {
        GateKind::X => [ZERO, ONE, ONE, ZERO],
        GateKind::Y => [
            ZERO,
            Complex64::new(0.0, -1.0),
            Complex64::new(0.0, 1.0),
            ZERO,
        ],
        GateKind::Z => [ONE, ZERO, ZERO, Complex64::new(-1.0, 0.0)],
        GateKind::H => {
            let s = Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0);
            [s, s, s, -s]
        }
        GateKind::S => [ONE, ZERO, ZERO, Complex64::new(0.0, 1.0)],
        GateKind::T => [ONE, ZERO, ZERO, Complex64::from_polar(1.0, FRAC_PI_4)],
        GateKind::P => [ONE, ZERO, ZERO, Complex64::from_polar(1.0, angle())],
        GateKind::Rx => {
            let half = angle() / 2.0;
            let c = Complex64::new(half.cos(), 0.0);
            let ns = Complex64::new(0.0, -half.sin());
            [c, ns, ns, c]
        }
        GateKind::Ry => {
            let half = angle() / 2.0;
            let c = Complex64::new(half.cos(), 0.0);
            let s = Complex64::new(half.sin(), 0.0);
            [c, -s, s, c]
        }
        GateKind::Rz => {
            let half = angle() / 2.0;
            [
                Complex64::from_polar(1.0, -half),
                ZERO,
                ZERO,
                Complex64::from_polar(1.0, half),
            ]
        }
        GateKind::Cnot | GateKind::Measure => identity(),
    }
}
