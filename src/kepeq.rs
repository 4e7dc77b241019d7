//! # Kepler Equation residuals
//!
//! Residual functions for the three conic regimes. Each evaluates how far
//! a candidate anomaly `x` is from solving the equation for the given mean
//! anomaly; a root of the residual is a solution of Kepler's Equation.
//!
//! These are pure and stateless: argument sanity (finiteness, eccentricity
//! range) is entirely the caller's responsibility.

use crate::constants::{Eccentricity, Radian};

/// Evaluate the elliptic Kepler Equation.
///
/// Arguments
/// -----------------
/// * `ecc`: eccentricity (`0 <= ecc < 1`)
/// * `ma`: mean anomaly (radians)
/// * `x`: elliptic eccentric anomaly candidate (radians)
///
/// Return
/// ----------
/// * Residual `x - ecc*sin(x) - ma`.
#[inline]
pub fn keq_ell(ecc: Eccentricity, ma: Radian, x: Radian) -> f64 {
    x - ecc * x.sin() - ma
}

/// Evaluate the hyperbolic Kepler Equation.
///
/// Arguments
/// -----------------
/// * `ecc`: eccentricity (`ecc > 1`)
/// * `ma`: mean anomaly (radians)
/// * `x`: hyperbolic eccentric anomaly candidate (radians)
///
/// Return
/// ----------
/// * Residual `ecc*sinh(x) - x - ma`.
#[inline]
pub fn keq_hyp(ecc: Eccentricity, ma: Radian, x: Radian) -> f64 {
    ecc * x.sinh() - x - ma
}

/// Evaluate the parabolic Kepler Equation (Barker's Equation).
///
/// The residual is `s + s^3/3 - ma` with `s = tan(x/2)`, where `x` is the
/// true anomaly. Undefined at `x = pi` where the tangent blows up; callers
/// must avoid that point.
///
/// Arguments
/// -----------------
/// * `ma`: mean anomaly (radians)
/// * `x`: true anomaly candidate (radians), `x != pi`
///
/// Return
/// ----------
/// * Residual `tan(x/2) + tan(x/2)^3 / 3 - ma`.
#[inline]
pub fn keq_par(ma: Radian, x: Radian) -> f64 {
    let s = (0.5 * x).tan();
    s + s * s * s / 3.0 - ma
}

#[cfg(test)]
mod kepeq_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

    #[test]
    fn elliptic_residual_vanishes_at_root() {
        // E = pi/3 with e = 0.5 gives M = E - e*sin(E)
        let ma = FRAC_PI_3 - 0.5 * FRAC_PI_3.sin();
        assert_abs_diff_eq!(keq_ell(0.5, ma, FRAC_PI_3), 0.0, epsilon = 1e-15);
        // off the root the residual is signed
        assert!(keq_ell(0.5, ma, FRAC_PI_3 + 0.1) > 0.0);
        assert!(keq_ell(0.5, ma, FRAC_PI_3 - 0.1) < 0.0);
    }

    #[test]
    fn hyperbolic_residual_vanishes_at_root() {
        let f: f64 = 0.75;
        let ma = 1.5 * f.sinh() - f;
        assert_abs_diff_eq!(keq_hyp(1.5, ma, f), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn parabolic_residual_vanishes_at_root() {
        let nu = FRAC_PI_2;
        let s = (0.5 * nu).tan();
        let ma = s + s * s * s / 3.0;
        assert_abs_diff_eq!(keq_par(ma, nu), 0.0, epsilon = 1e-15);
    }
}
