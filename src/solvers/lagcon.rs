//! Laguerre-Conway iteration.
//!
//! Cubic convergence even from poor starting values, which makes it the
//! robust choice for high eccentricities. Reference: Conway (1986),
//! Celestial Mechanics 39, p. 199-211, eq. (16).
//!
//! Note the sign convention: here `f0 = x - e*sin(x) - M` (the plain
//! residual, not the negated one of the Newton-series cores) and the
//! update subtracts the increment.

use crate::constants::{Eccentricity, Radian};
use crate::iteration::IterationData;
use crate::utils::sincos;

pub(crate) fn lagcon(
    ecc: Eccentricity,
    ma: Radian,
    starter: Radian,
    res: &mut IterationData,
) -> u32 {
    let mut count = 0u32;
    let corr = ecc / (1.0 - ecc);

    res.reset_diagnostics();

    let mut x = starter;
    let mut deltax;
    let mut deltaf;
    loop {
        let (esinx, ecosx) = sincos(x, ecc);

        let f0 = x - esinx - ma;
        let f1 = 1.0 - ecosx;
        res.tally(1, 1, 1);

        // Laguerre increment for n = 5
        let dx = 5.0 * f0 / (f1 + (16.0 * f1 * f1 - 20.0 * f0 * esinx).abs().sqrt());

        x -= dx;

        count += 1;

        deltax = dx.abs();
        deltaf = f0.abs() * corr;
        res.emit_trace("laguerre_conway", count, deltax, deltaf);

        if !(deltax > res.tolx && deltaf > res.tolf && count < res.maxiter) {
            break;
        }
    }

    res.result = x;
    res.err_df = deltaf;
    res.err_dx = deltax;

    count
}
