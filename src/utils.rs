//! # Numeric utilities
//!
//! Shared helpers for the solver kernels and the dispatcher:
//!
//! - **Validation** — [`check_val`] rejects NaN/infinite inputs,
//!   [`classify_ecc`] sorts an eccentricity into its conic regime.
//! - **Angle reduction** — [`reduce`] maps a mean anomaly into the
//!   canonical interval around zero.
//! - **Joint sine/cosine** — [`sincos`] produces both values from a single
//!   call to `tan(x/2)`; the kernels use it pervasively to amortize the
//!   transcendental cost.
//! - **True anomaly** — [`true_anomaly`] converts a solved eccentric
//!   anomaly into the angular position seen from the focus.

use std::f64::consts::PI;

use crate::constants::{Eccentricity, Radian, DPI, ECC_MIN};
use crate::kepes_errors::KepesError;

/// Conic regime of an eccentricity value.
///
/// Decided by [`classify_ecc`] with the threshold
/// [`ECC_MIN`](crate::constants::ECC_MIN): values within the threshold of
/// 0 count as circular, within the threshold of 1 as parabolic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EccRegime {
    /// e < 0 or non-finite
    Invalid,
    /// 0 <= e <= ECC_MIN
    Circular,
    /// ECC_MIN < e < 1 - ECC_MIN
    Elliptic,
    /// |e - 1| <= ECC_MIN
    Parabolic,
    /// e > 1 + ECC_MIN
    Hyperbolic,
}

impl EccRegime {
    /// `Ok` for every regime except [`EccRegime::Invalid`].
    pub fn validate(self) -> Result<(), KepesError> {
        match self {
            EccRegime::Invalid => Err(KepesError::BadEccentricity),
            _ => Ok(()),
        }
    }
}

/// Check that `x` is a valid finite number (neither NaN nor infinite).
#[inline]
pub fn check_val(x: f64) -> Result<(), KepesError> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(KepesError::BadValue)
    }
}

/// Classify an eccentricity into its conic regime.
///
/// Arguments
/// -----------------
/// * `ecc`: eccentricity value to classify
///
/// Return
/// ----------
/// * The [`EccRegime`] of `ecc`; [`EccRegime::Invalid`] for negative or
///   non-finite input.
pub fn classify_ecc(ecc: Eccentricity) -> EccRegime {
    if check_val(ecc).is_err() {
        return EccRegime::Invalid;
    }

    if ecc > ECC_MIN {
        if ecc < 1.0 - ECC_MIN {
            EccRegime::Elliptic
        } else if ecc > 1.0 + ECC_MIN {
            EccRegime::Hyperbolic
        } else {
            EccRegime::Parabolic
        }
    } else if ecc < 0.0 {
        EccRegime::Invalid
    } else {
        EccRegime::Circular
    }
}

/// Reduce an angle to the interval `[-pi, pi)`.
///
/// Computes `x` modulo `2*pi`, then folds the result around zero.
/// Idempotent on the target interval; non-finite input passes through
/// unchanged.
#[inline]
pub fn reduce(x: Radian) -> Radian {
    if check_val(x).is_err() {
        return x;
    }

    // x modulo (2*pi)
    let mut x = x - (x / DPI).floor() * DPI;

    if x > PI {
        x -= DPI;
    }
    if x < -PI {
        x += DPI;
    }

    x
}

/// Joint sine/cosine via the half-angle tangent.
///
/// A single call to `tan(x/2)` yields both values:
/// `t = tan(x/2)`, `d = 1/(1 + t^2)`, `sin(x) = 2*t*d`,
/// `cos(x) = (1 - t^2)*d`.
///
/// Arguments
/// -----------------
/// * `x`: angle (radians)
/// * `scale`: if `scale >= 0`, both return values are multiplied by it
///   (yielding `scale*sin(x)`, `scale*cos(x)`); a negative `scale` returns
///   the plain `sin(x)`, `cos(x)`.
///
/// Return
/// ----------
/// * `(sin, cos)` pair, scaled as described above.
#[inline]
pub fn sincos(x: Radian, scale: f64) -> (f64, f64) {
    let tx = (0.5 * x).tan();
    let cd = 1.0 / (1.0 + tx * tx);

    let mut sx = 2.0 * tx * cd;
    let mut cx = (1.0 - tx * tx) * cd;

    if scale >= 0.0 {
        sx *= scale;
        cx *= scale;
    }

    (sx, cx)
}

/// True anomaly from the solved eccentric anomaly.
///
/// For `ecc < 1` uses `2*atan(sqrt((1+e)/(1-e)) * tan(x/2))`, otherwise
/// the hyperbolic form `2*atan(sqrt((e+1)/(e-1)) * tanh(x/2))`. The
/// circular and parabolic cases are the caller's business.
///
/// Arguments
/// -----------------
/// * `ecc`: eccentricity
/// * `x`: eccentric anomaly (radians), solution of Kepler's Equation
///
/// Return
/// ----------
/// * True anomaly (radians).
pub fn true_anomaly(ecc: Eccentricity, x: Radian) -> Radian {
    if ecc < 1.0 {
        2.0 * (((1.0 + ecc) / (1.0 - ecc)).sqrt() * (0.5 * x).tan()).atan()
    } else {
        2.0 * (((ecc + 1.0) / (ecc - 1.0)).sqrt() * (0.5 * x).tanh()).atan()
    }
}

#[cfg(test)]
mod utils_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn check_val_rejects_nan_and_inf() {
        assert!(check_val(1.234).is_ok());
        assert!(check_val(0.0).is_ok());
        assert_eq!(check_val(f64::NAN), Err(KepesError::BadValue));
        assert_eq!(check_val(f64::INFINITY), Err(KepesError::BadValue));
        assert_eq!(check_val(f64::NEG_INFINITY), Err(KepesError::BadValue));
    }

    #[test]
    fn classify_ecc_regimes() {
        assert_eq!(classify_ecc(0.0), EccRegime::Circular);
        assert_eq!(classify_ecc(0.5e-10), EccRegime::Circular);
        assert_eq!(classify_ecc(0.567), EccRegime::Elliptic);
        assert_eq!(classify_ecc(1.0), EccRegime::Parabolic);
        assert_eq!(classify_ecc(2.5), EccRegime::Hyperbolic);
        assert_eq!(classify_ecc(-0.1), EccRegime::Invalid);
        assert_eq!(classify_ecc(f64::NAN), EccRegime::Invalid);
    }

    #[test]
    fn classify_ecc_boundaries_around_one() {
        // the closed ECC_MIN neighborhood of 1 is parabolic,
        // just outside it is elliptic below and hyperbolic above
        assert_eq!(classify_ecc(1.0 - ECC_MIN), EccRegime::Parabolic);
        assert_eq!(classify_ecc(1.0 + ECC_MIN), EccRegime::Parabolic);
        assert_eq!(classify_ecc(1.0 - 2.0 * ECC_MIN), EccRegime::Elliptic);
        assert_eq!(classify_ecc(1.0 + 2.0 * ECC_MIN), EccRegime::Hyperbolic);
    }

    #[test]
    fn validate_flags_only_invalid() {
        assert!(EccRegime::Elliptic.validate().is_ok());
        assert!(EccRegime::Parabolic.validate().is_ok());
        assert_eq!(
            EccRegime::Invalid.validate(),
            Err(KepesError::BadEccentricity)
        );
    }

    #[test]
    fn reduce_maps_into_canonical_interval() {
        assert_abs_diff_eq!(reduce(0.5), 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(reduce(0.5 + DPI), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(reduce(0.5 - 3.0 * DPI), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(reduce(-2.0), -2.0, epsilon = 1e-15);
        // idempotent on the target interval
        let x = reduce(17.25);
        assert_eq!(reduce(x), x);
        assert!((-PI..PI).contains(&x));
    }

    #[test]
    fn reduce_passes_non_finite_through() {
        assert!(reduce(f64::NAN).is_nan());
        assert!(reduce(f64::INFINITY).is_infinite());
    }

    #[test]
    fn sincos_matches_library_functions() {
        for &x in &[0.1, 0.9, 1.5, 2.9, -0.7] {
            let (sx, cx) = sincos(x, -1.0);
            assert_abs_diff_eq!(sx, x.sin(), epsilon = 1e-14);
            assert_abs_diff_eq!(cx, x.cos(), epsilon = 1e-14);

            let (esx, ecx) = sincos(x, 0.567);
            assert_abs_diff_eq!(esx, 0.567 * x.sin(), epsilon = 1e-14);
            assert_abs_diff_eq!(ecx, 0.567 * x.cos(), epsilon = 1e-14);
        }
    }

    #[test]
    fn true_anomaly_elliptic_and_hyperbolic() {
        // at x = 0 the true anomaly vanishes in both regimes
        assert_abs_diff_eq!(true_anomaly(0.3, 0.0), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(true_anomaly(1.7, 0.0), 0.0, epsilon = 1e-15);
        // elliptic: nu >= E for prograde angles in (0, pi)
        let nu = true_anomaly(0.3, 1.0);
        assert!(nu > 1.0 && nu < PI);
    }
}
