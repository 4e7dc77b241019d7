//! # Starting-value catalog
//!
//! Closed-form first approximations `x0 = S(e, M)` for the elliptic Kepler
//! Equation, intended for a mean anomaly already reduced to `[0, pi]`.
//! Each starter carries an asymptotic order in the eccentricity; the
//! higher the order, the smaller the initial residual for small `e`.
//!
//! Most formulas follow Odell & Gooding (1986), Celestial Mechanics 38,
//! p. 307-334; S5 is from Smith (1979), S10 from Ng (1979), S13 from
//! Encke (1850) and S14 from Charles & Tatum (1998).
//!
//! Hyperbolic and parabolic starter families are reserved in the
//! enumeration layout but not implemented.

use std::f64::consts::PI;
use std::fmt;

use crate::constants::{Eccentricity, Radian, PISQ};
use crate::kepes_errors::KepesError;
use crate::utils::sincos;

/// Identifier of a starting-value method.
///
/// `None` denotes "no method" and is rejected by [`starting_value`]; the
/// dispatcher then falls back to `x0 = M + e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarterMethod {
    None,
    S0,
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    S8,
    S9,
    S10,
    S11,
    S12,
    S13,
    S14,
}

impl StarterMethod {
    /// Every valid elliptic starter, in catalog order.
    pub const ALL: [StarterMethod; 15] = [
        StarterMethod::S0,
        StarterMethod::S1,
        StarterMethod::S2,
        StarterMethod::S3,
        StarterMethod::S4,
        StarterMethod::S5,
        StarterMethod::S6,
        StarterMethod::S7,
        StarterMethod::S8,
        StarterMethod::S9,
        StarterMethod::S10,
        StarterMethod::S11,
        StarterMethod::S12,
        StarterMethod::S13,
        StarterMethod::S14,
    ];

    /// Advertised asymptotic order in the eccentricity.
    ///
    /// `|S(e, M) - E(e, M)| = O(e^k)` on small-e grids; 0 for the
    /// order-free starters S0 and S10.
    pub const fn order(self) -> u8 {
        match self {
            StarterMethod::None => 0,
            StarterMethod::S0 => 0,
            StarterMethod::S1 => 1,
            StarterMethod::S2 => 2,
            StarterMethod::S3 => 3,
            StarterMethod::S4 => 1,
            StarterMethod::S5 => 3,
            StarterMethod::S6 => 1,
            StarterMethod::S7 => 1,
            StarterMethod::S8 => 3,
            StarterMethod::S9 => 4,
            StarterMethod::S10 => 0,
            StarterMethod::S11 => 4,
            StarterMethod::S12 => 1,
            StarterMethod::S13 => 6,
            StarterMethod::S14 => 1,
        }
    }

    /// Human-readable description of the starter.
    pub const fn description(self) -> &'static str {
        match self {
            StarterMethod::None => "invalid starter method",
            StarterMethod::S0 => "constant starter pi",
            StarterMethod::S1 => "starter S1 from Odell & Gooding (1986)",
            StarterMethod::S2 => "starter S2 from Odell & Gooding (1986)",
            StarterMethod::S3 => "starter S3 from Odell & Gooding (1986)",
            StarterMethod::S4 => "starter S4 from Odell & Gooding (1986)",
            StarterMethod::S5 => "starter S5 from Smith (1979)",
            StarterMethod::S6 => "starter S6 from Odell & Gooding (1986)",
            StarterMethod::S7 => "starter S7 from Odell & Gooding (1986)",
            StarterMethod::S8 => "starter S8 from Odell & Gooding (1986)",
            StarterMethod::S9 => "starter S9 from Odell & Gooding (1986)",
            StarterMethod::S10 => "cubic starter from Ng (1979)",
            StarterMethod::S11 => "quartic starter S11 from Odell & Gooding (1986)",
            StarterMethod::S12 => "starter S12 from Odell & Gooding (1986)",
            StarterMethod::S13 => "double-arctan starter from Encke (1850)",
            StarterMethod::S14 => "starter from Charles & Tatum (1998)",
        }
    }
}

impl fmt::Display for StarterMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// O(e^0): E0 = pi
#[inline]
fn stm_s0(_ecc: Eccentricity, _ma: Radian) -> Radian {
    PI
}

/// O(e^1): E0 = M
#[inline]
fn stm_s1(_ecc: Eccentricity, ma: Radian) -> Radian {
    ma
}

/// O(e^2): E0 = M + e*sin(M)
#[inline]
fn stm_s2(ecc: Eccentricity, ma: Radian) -> Radian {
    ma + ecc * ma.sin()
}

/// O(e^3): E0 = M + e*sin(M) * (1 + e*cos(M))
#[inline]
fn stm_s3(ecc: Eccentricity, ma: Radian) -> Radian {
    let (esinx, ecosx) = sincos(ma, ecc);
    ma + esinx * (1.0 + ecosx)
}

/// O(e^1): E0 = M + e
#[inline]
fn stm_s4(ecc: Eccentricity, ma: Radian) -> Radian {
    ma + ecc
}

/// O(e^3): E0 = M + e*sin(M) / (1 - sin(M + e) + sin(M))
#[inline]
fn stm_s5(ecc: Eccentricity, ma: Radian) -> Radian {
    let sinx = ma.sin();
    ma + ecc * sinx / (1.0 - (ma + ecc).sin() + sinx)
}

/// O(e^1): E0 = (M + e*pi) / (1 + e)
#[inline]
fn stm_s6(ecc: Eccentricity, ma: Radian) -> Radian {
    (ma + ecc * PI) / (1.0 + ecc)
}

/// O(e^1): E0 = min{M/(1-e), S4, S6}
#[inline]
fn stm_s7(ecc: Eccentricity, ma: Radian) -> Radian {
    let tmp = ma / (1.0 - ecc);
    let s4 = stm_s4(ecc, ma);
    let s6 = stm_s6(ecc, ma);

    tmp.min(s4).min(s6)
}

/// O(e^3): E0 = S3 + e^4 * (pi - S3) / (20*pi)
#[inline]
fn stm_s8(ecc: Eccentricity, ma: Radian) -> Radian {
    const LAMBDA: f64 = 0.05 / PI;
    let x = stm_s3(ecc, ma);

    x + LAMBDA * ecc * ecc * ecc * ecc * (PI - x)
}

/// O(e^4): E0 = M + e*sin(M) / sqrt(1 - 2*e*cos(M) + e^2)
///
/// Degenerates to M at the singular point (e, M) = (1, 0).
#[inline]
fn stm_s9(ecc: Eccentricity, ma: Radian) -> Radian {
    if ecc < 1.0 && ma > 0.0 {
        let (esinx, ecosx) = sincos(ma, ecc);
        ma + esinx / (1.0 - 2.0 * ecosx + ecc * ecc).sqrt()
    } else {
        ma
    }
}

/// O(e^0): Ng's cubic, E0 = s - q/s with
/// q = 2*(1-e)/e, r = 3*M/e, s = cbrt(sqrt(q^3 + r^2) + r)
#[inline]
fn stm_s10(ecc: Eccentricity, ma: Radian) -> Radian {
    // avoid division by e = 0
    if ecc > 0.0 {
        let q = 2.0 * (1.0 - ecc) / ecc;
        let r = 3.0 * ma / ecc;
        let s = ((q * q * q + r * r).sqrt() + r).cbrt();

        s - q / s
    } else {
        ma
    }
}

/// O(e^4): Odell & Gooding quartic expansion; degenerates to M at e = 1.
fn stm_s11(ecc: Eccentricity, ma: Radian) -> Radian {
    const A: f64 = -0.092_226_780_236_419_915_572_1;
    const B: f64 = 0.830_041_022_127_779_240_149; // b = -9*a
    const C: f64 = -0.184_453_560_472_839_831_144; // c = 2*a

    if ecc < 1.0 {
        let (sinx, cosx) = sincos(ma, -1.0);

        let e1 = 1.0 - ecc;
        let cos2x = 2.0 * cosx * cosx - 1.0;
        let ecosx = ecc * cosx;
        let esinx = ecc * sinx;

        ma + esinx
            * (1.0
                + ecosx * 2.0 / 3.0
                + ecc * ecc * (1.0 - 48.0 * cosx + 19.0 * cos2x) / 36.0
                + ecc * ecc * ecc * (A + B * cosx + C * cos2x))
            / (1.0 - (1.0 + ecc * e1 * (1.0 + e1) * (1.0 + e1)) * ecosx).cbrt()
    } else {
        ma
    }
}

/// O(e^1): E0 = e * E(M, e=1) + (1 - e) * M, interpolating between the
/// exact circular solution and a rational fit of the e = 1 solution.
#[inline]
fn stm_s12(ecc: Eccentricity, ma: Radian) -> Radian {
    let a = (PI - 1.0) * (PI - 1.0) / (PI + 2.0 / 3.0);
    let b = 2.0 * (PI - 1.0 / 6.0) * (PI - 1.0 / 6.0) / (PI + 2.0 / 3.0);
    let w = PI - ma;

    ecc * (PI - a * w / (b - w)) + (1.0 - ecc) * ma
}

/// O(e^6): Encke's double-arctan scheme.
#[inline]
fn stm_s13(ecc: Eccentricity, ma: Radian) -> Radian {
    let (esinx, ecosx) = sincos(ma, ecc);
    let x = esinx.atan2(1.0 - ecosx);
    let y = ma + x.sin() - x;
    let (siny, cosy) = sincos(y, -1.0);

    siny.atan2(cosy - ecc)
}

/// O(e^1): E0 = M + e * (cbrt(pi^2 * M) - pi*sin(M)/15 - M)
#[inline]
fn stm_s14(ecc: Eccentricity, ma: Radian) -> Radian {
    ma + ecc * ((PISQ * ma).cbrt() - PI * ma.sin() / 15.0 - ma)
}

/// Evaluate the chosen starter method.
///
/// Arguments
/// -----------------
/// * `ecc`: eccentricity
/// * `ma`: mean anomaly (radians), expected in `[0, pi]`
/// * `method`: which starter to evaluate
///
/// Return
/// ----------
/// * `Ok(x0)` with the starting value, or `Err(KepesError::BadStarter)`
///   for [`StarterMethod::None`] (the dispatcher falls back to `M + e`).
pub fn starting_value(
    ecc: Eccentricity,
    ma: Radian,
    method: StarterMethod,
) -> Result<Radian, KepesError> {
    match method {
        StarterMethod::S0 => Ok(stm_s0(ecc, ma)),
        StarterMethod::S1 => Ok(stm_s1(ecc, ma)),
        StarterMethod::S2 => Ok(stm_s2(ecc, ma)),
        StarterMethod::S3 => Ok(stm_s3(ecc, ma)),
        StarterMethod::S4 => Ok(stm_s4(ecc, ma)),
        StarterMethod::S5 => Ok(stm_s5(ecc, ma)),
        StarterMethod::S6 => Ok(stm_s6(ecc, ma)),
        StarterMethod::S7 => Ok(stm_s7(ecc, ma)),
        StarterMethod::S8 => Ok(stm_s8(ecc, ma)),
        StarterMethod::S9 => Ok(stm_s9(ecc, ma)),
        StarterMethod::S10 => Ok(stm_s10(ecc, ma)),
        StarterMethod::S11 => Ok(stm_s11(ecc, ma)),
        StarterMethod::S12 => Ok(stm_s12(ecc, ma)),
        StarterMethod::S13 => Ok(stm_s13(ecc, ma)),
        StarterMethod::S14 => Ok(stm_s14(ecc, ma)),
        StarterMethod::None => Err(KepesError::BadStarter),
    }
}
