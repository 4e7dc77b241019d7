//! Nijenhuis' region-split composite method.
//!
//! The (e, M) plane splits at (M < 0.4, e > 0.6): region D gets a
//! Mikkola-like cubic seed refined by one Newton step on a quintic in
//! `s = sin(E/3)`, the remaining regions A-C take the rough S7 starter
//! and refine it with one Halley step on a modified Kepler Equation that
//! replaces `sin` by a cheap polynomial approximant. A generalized
//! Newton correction of fixed depth finishes either branch. Reference:
//! Nijenhuis (1991), Celestial Mechanics and Dynamical Astronomy 51,
//! p. 319-330.
//!
//! The dispatcher always feeds this kernel the S7 starter.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::constants::{Eccentricity, Radian};
use crate::iteration::IterationData;
use crate::kepeq::keq_ell;
use crate::utils::sincos;

const MAX_DEPTH: usize = 3;

/// Polynomial approximant of `sin(x)` on `[0, pi/2]`, extended by the
/// symmetry `sn(pi - x) = sn(x)`.
#[inline]
fn snx(x: f64) -> f64 {
    const A: f64 = -0.16605; // Taylor series coeff. O(x^3)
    const B: f64 = 0.00761; // Taylor series coeff. O(x^5)

    let x = if x > FRAC_PI_2 { PI - x } else { x };
    let x2 = x * x;
    x * (1.0 + x2 * (A + B * x2))
}

/// Derivative of [`snx`], extended by `sn'(pi - x) = -sn'(x)`.
#[inline]
fn snxd(x: f64) -> f64 {
    const A: f64 = -0.49815; // Taylor series coeff. O(x^2)
    const B: f64 = 0.03805; // Taylor series coeff. O(x^4)

    if x > FRAC_PI_2 {
        let x = PI - x;
        let x2 = x * x;
        -(1.0 + x2 * (A + B * x2))
    } else {
        let x2 = x * x;
        1.0 + x2 * (A + B * x2)
    }
}

pub(crate) fn nijenh(
    ecc: Eccentricity,
    ma: Radian,
    starter: Radian,
    res: &mut IterationData,
) -> u32 {
    let e1 = 1.0 - ecc;
    let corr = ecc / e1;

    res.reset_diagnostics();

    let mut x;
    // region (D): Mikkola-like starter, ad hoc boundary values
    if ma < 0.4 && ecc > 0.6 {
        // rough starter from the cubic s^3 + 3*p*s - 2*q = 0, using the
        // cancellation-resistant root
        let frac = 1.0 / (0.5 + 4.0 * ecc);
        let p = e1 * frac;
        let q = 0.5 * ma * frac;
        let mut z = ((p * p * p + q * q).sqrt() + q).cbrt();
        z *= z;

        let mut s = if z > 0.0 { 2.0 * q / (z + p + p * p / z) } else { 0.0 };

        // refined starter: one Newton step on
        // g(s) = (3/40)*s^5 + ((4e+0.5)/3)*s^3 + (1-e)*s - M/3
        let mut s2 = s * s;
        if s > 0.0 {
            s -= 0.075 * s * s2 * s2 / (e1 + s2 * (1.0 / frac + 0.375 * s2));
        }
        s2 = s * s;

        x = ma + ecc * s * (3.0 - 4.0 * s2);
    }
    // regions (A), (B), (C): polynomial Halley step on the S7 starter
    else {
        x = starter;

        let f2 = ecc * snx(x);
        let f0 = x - f2 - ma;
        let f1 = 1.0 - ecc * snxd(x);

        x -= f0 / (f1 - 0.5 * f0 * f2 / f1);
    }

    // refined starter replaces whatever the caller provided
    res.starter = x;

    // final correction: generalized Newton of fixed depth with the
    // recurrence h_i = f0 / (f_i + sum_{j<i} h_j * f_{i-j})
    let (esinx, ecosx) = sincos(x, ecc);
    res.tally(1, 1, 0);

    let mut f = [0.0f64; MAX_DEPTH + 1];
    let mut h = [0.0f64; MAX_DEPTH + 1];
    f[0] = ma - x + esinx;
    f[1] = 1.0 - ecosx;
    f[2] = 0.5 * esinx;
    f[3] = ecosx / 6.0;

    for i in 1..=MAX_DEPTH {
        let mut denom = f[i];
        for j in 1..i {
            denom = denom * h[j] + f[i - j];
        }
        h[i] = f[0] / denom;
    }

    if x > 0.0 {
        x += h[MAX_DEPTH];
    }

    let deltax = (x - res.starter).abs();
    let deltaf = keq_ell(ecc, ma, x).abs() * corr;
    res.tally(1, 0, 1);
    res.emit_trace("nijenhuis", 1, deltax, deltaf);

    res.result = x;
    res.err_df = deltaf;
    res.err_dx = deltax;

    1
}

#[cfg(test)]
mod nijenh_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sn_approximant_tracks_sine() {
        for &x in &[0.0, 0.5, 1.0, FRAC_PI_2, 2.0, 3.0] {
            assert_abs_diff_eq!(snx(x), x.sin(), epsilon = 2e-3);
            assert_abs_diff_eq!(snxd(x), x.cos(), epsilon = 2e-2);
        }
        // symmetry across pi/2 (up to the rounding of pi - x)
        assert_abs_diff_eq!(snx(PI - 0.3), snx(0.3), epsilon = 1e-15);
        assert_abs_diff_eq!(snxd(PI - 0.3), -snxd(0.3), epsilon = 1e-15);
    }

    #[test]
    fn region_d_branch_converges() {
        // M < 0.4 and e > 0.6 exercises the Mikkola-like seed
        let (ecc, ma) = (0.9, 0.1);
        let mut res = IterationData::default();

        let count = nijenh(ecc, ma, 0.0, &mut res);
        assert_eq!(count, 1);
        assert!(keq_ell(ecc, ma, res.result).abs() < 1e-10);
    }

    #[test]
    fn outer_region_branch_converges_from_s7() {
        let (ecc, ma): (f64, f64) = (0.3, 2.0);
        // S7 = min{M/(1-e), M+e, (M+e*pi)/(1+e)}
        let s7 = (ma / (1.0 - ecc))
            .min(ma + ecc)
            .min((ma + ecc * PI) / (1.0 + ecc));
        let mut res = IterationData::default();

        nijenh(ecc, ma, s7, &mut res);
        assert!(keq_ell(ecc, ma, res.result).abs() < 1e-10);
    }
}
