//! Markley's non-iterative method.
//!
//! A Pade-type cubic approximation over the whole (e, M) plane provides
//! the starter, followed by a single order-5 core polish. Reference:
//! Markley (1995), Celestial Mechanics and Dynamical Astronomy 63,
//! p. 101-111, eqs. (5)-(20).

use std::f64::consts::PI;

use crate::constants::{Eccentricity, Radian, PISQ};
use crate::itercore::itercore5;
use crate::iteration::IterationData;
use crate::kepeq::keq_ell;

pub(crate) fn markley(
    ecc: Eccentricity,
    ma: Radian,
    _starter: Radian,
    res: &mut IterationData,
) -> u32 {
    let corr = ecc / (1.0 - ecc);

    res.reset_diagnostics();

    let mut ad = 1.0 / (PISQ - 6.0);
    let ak = 1.6 * PI * ad;
    ad *= 3.0 * PISQ;

    // alpha(e, M) : eq. (20)
    let alpha = ad + ak * (PI - ma) / (1.0 + ecc);

    // d : eq. (5)
    let d = 3.0 * (1.0 - ecc) + alpha * ecc;

    // q : eq. (9)
    let q = 2.0 * alpha * d * (1.0 - ecc) - ma * ma;

    // r : eq. (10)
    let r = 3.0 * alpha * d * (d - 1.0 + ecc) * ma + ma * ma * ma;

    // w^(2/3) : eq. (14)
    let mut w = (r.abs() + (q * q * q + r * r).sqrt()).cbrt();
    w *= w;

    // step 1: starter from the Pade approximation
    let x0 = if w > 0.0 {
        (2.0 * r * w / (w * w + q * w + q * q) + ma) / d
    } else {
        0.0
    };
    res.starter = x0;

    // step 2: single fifth-order correction
    let x = itercore5(ecc, ma, x0);
    res.tally(1, 1, 1);

    let deltax = (x - x0).abs();
    let deltaf = keq_ell(ecc, ma, x).abs() * corr;
    res.tally(1, 0, 1);
    res.emit_trace("markley", 1, deltax, deltaf);

    res.result = x;
    res.err_df = deltaf;
    res.err_dx = deltax;

    1
}
