//! Fixed-point iteration `x(n+1) = M + e*sin(x(n))`.
//!
//! Linear convergence with contraction factor `e`; diverges for `e >= 1`.
//! The iterate-gap test is omitted from the termination rule: `err_dx`
//! lags `err_df` by one iteration on this map, so only the residual and
//! the iteration budget gate the loop. The gap is still recorded.

use crate::constants::{Eccentricity, Radian};
use crate::iteration::IterationData;
use crate::kepeq::keq_ell;

pub(crate) fn fixedp(
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
        let xsave = x;

        // new approximation
        x = ma + ecc * xsave.sin();

        let fx = keq_ell(ecc, ma, x);
        res.tally(2, 0, 1);

        count += 1;

        deltax = (x - xsave).abs();
        deltaf = fx.abs() * corr;
        res.emit_trace("fixed_point", count, deltax, deltaf);

        if !(deltaf > res.tolf && count < res.maxiter) {
            break;
        }
    }

    res.result = x;
    res.err_df = deltaf;
    res.err_dx = deltax;

    count
}
