//! Wegstein's modification of the secant method.
//!
//! Runs the secant update on the fixed-point map `g(x) = M + e*sin(x)`,
//! damping its oscillations. Reference: Wegstein (1958), Comm. ACM 1,
//! p. 9-13.

use crate::constants::{Eccentricity, Radian};
use crate::iteration::IterationData;
use crate::kepeq::keq_ell;

pub(crate) fn wegsec(
    ecc: Eccentricity,
    ma: Radian,
    starter: Radian,
    res: &mut IterationData,
) -> u32 {
    let mut count = 0u32;
    let corr = ecc / (1.0 - ecc);

    res.reset_diagnostics();

    // first seed (x0, y0) from the starter
    let mut x0 = starter;
    let mut y0 = ma + ecc * x0.sin();
    res.tally(1, 0, 0);

    // second seed (x1, y1) one fixed-point step further
    let mut x1 = y0;
    let mut y1 = ma + ecc * x1.sin();
    res.tally(1, 0, 0);

    let mut x2;
    let mut deltax;
    let mut deltaf;
    loop {
        // damped secant step on the fixed-point map
        x2 = x1 + (x1 - x0) / ((x0 - y0) / (x1 - y1) - 1.0);
        let y2 = ma + ecc * x2.sin();
        res.tally(1, 0, 0);

        count += 1;

        deltax = (x1 - x2).abs();
        deltaf = keq_ell(ecc, ma, x2).abs() * corr;
        res.tally(1, 0, 1);
        res.emit_trace("wegstein_secant", count, deltax, deltaf);

        // shift old/new variables
        x0 = x1;
        x1 = x2;
        y0 = y1;
        y1 = y2;

        if !(deltax > res.tolx && deltaf > res.tolf && count < res.maxiter) {
            break;
        }
    }

    res.result = x2;
    res.err_df = deltaf;
    res.err_dx = deltax;

    count
}
