//! Secant method on the bracket `[M, M + e]`.
//!
//! Replaces the bisection midpoint with the secant intersection, giving
//! super-linear convergence of order ~1.618. The caller's starter is
//! ignored, the bracket replaces it.

use crate::constants::{Eccentricity, Radian};
use crate::iteration::IterationData;
use crate::kepeq::keq_ell;

pub(crate) fn secant(
    ecc: Eccentricity,
    ma: Radian,
    _starter: Radian,
    res: &mut IterationData,
) -> u32 {
    let mut count = 0u32;
    let corr = ecc / (1.0 - ecc);

    res.reset_diagnostics();

    // lower and upper limits for the solution, overriding the starter
    let mut xl = ma;
    let mut xr = ma + ecc;
    let mut deltax = (xr - xl).abs();

    if deltax < res.tolx {
        res.result = 0.5 * (xl + xr);
        return 1;
    }

    let mut fl = keq_ell(ecc, ma, xl);
    res.tally(1, 0, 1);
    if fl.abs() < res.tolf {
        res.result = xl;
        return 1;
    }

    let mut fr = keq_ell(ecc, ma, xr);
    res.tally(1, 0, 1);
    if fr.abs() < res.tolf {
        res.result = xr;
        return 1;
    }

    let mut x;
    let mut deltaf;
    loop {
        // secant intersection of the current pair
        x = (fr * xl - fl * xr) / (fr - fl);

        let fx = keq_ell(ecc, ma, x);
        res.tally(1, 0, 1);

        // shift the pair
        xl = xr;
        fl = fr;
        xr = x;
        fr = fx;

        count += 1;

        deltax = (xr - xl).abs();
        deltaf = fx.abs() * corr;
        res.emit_trace("secant", count, deltax, deltaf);

        if !(deltax > res.tolx && deltaf > res.tolf && count < res.maxiter) {
            break;
        }
    }

    res.result = x;
    res.err_df = deltaf;
    res.err_dx = deltax;

    count
}
