use std::f64::consts::PI;

// Constants
pub const DPI: f64 = 2.0 * PI;
pub const PISQ: f64 = PI * PI;

/// Minimum threshold on the eccentricity used to discriminate between
/// the circular, elliptic, parabolic and hyperbolic domains.
///
/// This is a design choice, not a derived quantity: eccentricities within
/// `ECC_MIN` of 0 are treated as circular, within `ECC_MIN` of 1 as
/// parabolic.
pub const ECC_MIN: f64 = 1e-10;

/// Default convergence tolerance for both residual tests (`tolf`, `tolx`).
pub const STD_TOL: f64 = 1e-15;
/// Default iteration budget for the iterative kernels.
pub const STD_MAXITER: u32 = 100;

/// Tiny addend to the first derivative `1 - e*cos(x)` of the elliptic
/// Kepler Equation. Fixes the division by zero at (e, x) = (1, 0) where
/// the derivative vanishes.
pub const ADD_ZERO: f64 = 1e-19;

// type def
pub type Radian = f64;
/// Conic shape parameter: 0 circle, (0,1) ellipse, 1 parabola, >1 hyperbola
pub type Eccentricity = f64;
