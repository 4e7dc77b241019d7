//! Mikkola's non-iterative two-step method.
//!
//! Step 1 solves the cubic approximation `s^3 + 3*a*s - 2*b = 0` of the
//! Kepler Equation in `s = sin(E/3)` and applies an O(s^5) correction;
//! step 2 polishes the resulting starter with a single order-5 core step.
//! Reference: Mikkola (1987), Celestial Mechanics 40, p. 329-334.
//!
//! The cubic root uses the direct form `s = c - a/c`, which cancels for
//! small `M`; Nijenhuis' algebraically equivalent resistant form is used
//! by that method instead (see `nijenh`).

use crate::constants::{Eccentricity, Radian};
use crate::itercore::itercore5;
use crate::iteration::IterationData;
use crate::kepeq::keq_ell;

pub(crate) fn mikkola(
    ecc: Eccentricity,
    ma: Radian,
    _starter: Radian,
    res: &mut IterationData,
) -> u32 {
    let corr = ecc / (1.0 - ecc);

    res.reset_diagnostics();

    // step 1: starter from the cubic approximation
    let mut a = 1.0 / (0.5 + 4.0 * ecc);
    let b = 0.5 * ma * a;
    a *= 1.0 - ecc;
    let c = ((a * a * a + b * b).sqrt() + b).cbrt();

    let mut s = if c > 0.0 { c - a / c } else { 0.0 };
    let mut s2 = s * s;

    // correction term O(s^5)
    s -= 0.078 * s * s2 * s2 / (1.0 + ecc);
    s2 = s * s;

    // starting approximation
    let x0 = ma + ecc * s * (3.0 - 4.0 * s2);
    res.starter = x0;

    // step 2: single fifth-order correction
    let x = itercore5(ecc, ma, x0);
    res.tally(1, 1, 1);

    let deltax = (x - x0).abs();
    let deltaf = keq_ell(ecc, ma, x).abs() * corr;
    res.tally(1, 0, 1);
    res.emit_trace("mikkola", 1, deltax, deltaf);

    res.result = x;
    res.err_df = deltaf;
    res.err_dx = deltax;

    1
}
