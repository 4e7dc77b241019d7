//! Bisection (interval halving) on the bracket `[M, M + e]`.
//!
//! Guaranteed linear convergence; the iteration count is bounded by
//! `ceil(log2(e / tolx))`. The caller's starter is ignored, the bracket
//! replaces it.

use crate::constants::{Eccentricity, Radian};
use crate::iteration::IterationData;
use crate::kepeq::keq_ell;

pub(crate) fn bisect(
    ecc: Eccentricity,
    ma: Radian,
    _starter: Radian,
    res: &mut IterationData,
) -> u32 {
    let mut count = 0u32;

    // converts |f(x)| into an upper bound on the angular error
    let corr = ecc / (1.0 - ecc);

    res.reset_diagnostics();

    // lower and upper limits for the solution, overriding the starter
    let mut xl = ma;
    let mut xr = ma + ecc;
    let mut deltax = (xr - xl).abs();

    // interval already small enough
    if deltax < res.tolx {
        res.result = 0.5 * (xl + xr);
        return 1;
    }

    // either endpoint may already be a solution
    let mut fl = keq_ell(ecc, ma, xl);
    res.tally(1, 0, 1);
    if fl.abs() < res.tolf {
        res.result = xl;
        return 1;
    }

    let fr = keq_ell(ecc, ma, xr);
    res.tally(1, 0, 1);
    if fr.abs() < res.tolf {
        res.result = xr;
        return 1;
    }

    let mut x;
    let mut deltaf;
    loop {
        // new interval midpoint
        x = 0.5 * (xl + xr);

        let fx = keq_ell(ecc, ma, x);
        res.tally(1, 0, 1);

        // keep the half that still brackets the sign change
        if fl * fx < 0.0 {
            xr = x;
        } else {
            xl = x;
            fl = fx;
        }

        count += 1;

        deltax = (xr - xl).abs();
        deltaf = fx.abs() * corr;
        res.emit_trace("bisect", count, deltax, deltaf);

        if !(deltax > res.tolx && deltaf > res.tolf && count < res.maxiter) {
            break;
        }
    }

    res.result = x;
    res.err_df = deltaf;
    res.err_dx = deltax;

    count
}
