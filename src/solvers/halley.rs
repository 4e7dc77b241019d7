//! Halley iteration, wrapping the order-3 core in the shared convergence
//! loop.

use crate::constants::{Eccentricity, Radian};
use crate::itercore::itercore3;
use crate::iteration::IterationData;
use crate::kepeq::keq_ell;

pub(crate) fn halley(
    ecc: Eccentricity,
    ma: Radian,
    starter: Radian,
    res: &mut IterationData,
) -> u32 {
    let mut count = 0u32;
    let corr = ecc / (1.0 - ecc);

    res.reset_diagnostics();

    let mut xnew = starter;
    let mut deltax;
    let mut deltaf;
    loop {
        let xold = xnew;

        xnew = itercore3(ecc, ma, xold);
        res.tally(1, 1, 1);

        let fx = keq_ell(ecc, ma, xnew);
        res.tally(1, 0, 1);

        count += 1;

        deltax = (xnew - xold).abs();
        deltaf = fx.abs() * corr;
        res.emit_trace("halley", count, deltax, deltaf);

        if !(deltax > res.tolx && deltaf > res.tolf && count < res.maxiter) {
            break;
        }
    }

    res.result = xnew;
    res.err_df = deltaf;
    res.err_dx = deltax;

    count
}
