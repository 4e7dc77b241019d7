//! # Solver dispatch
//!
//! This module owns the main entry point [`solve`]: it validates the
//! inputs, classifies the eccentricity regime, reduces the mean anomaly
//! into the canonical interval, obtains the starting value, runs the
//! selected kernel under the shared convergence contract and maps the
//! result back through the symmetry it applied.
//!
//! ## Overview
//!
//! - [`SolverMethod`] — closed enumeration of the available kernels, with
//!   [`SolverMethod::ALL`] for iteration and
//!   [`SolverMethod::description`] for diagnostics.
//! - [`solve`] — solve Kepler's Equation for one `(e, M)` pair; the
//!   caller names both the starter and the kernel, nothing is selected
//!   automatically.
//!
//! Only the circular and elliptic regimes are implemented; parabolic and
//! hyperbolic eccentricities are classified but rejected with
//! [`KepesError::BadEccentricity`].
//!
//! The dispatcher and all kernels are re-entrant: state flows only
//! through the caller-owned [`IterationData`] and stack values, so
//! distinct records may be solved concurrently without synchronization.

use std::fmt;

use crate::constants::{Eccentricity, Radian, DPI};
use crate::iteration::IterationData;
use crate::kepes_errors::KepesError;
use crate::solvers;
use crate::starter::{starting_value, StarterMethod};
use crate::utils::{check_val, classify_ecc, reduce, EccRegime};

/// Signature shared by every solver kernel.
type KernelFn = fn(Eccentricity, Radian, Radian, &mut IterationData) -> u32;

/// Identifier of a solver kernel.
///
/// `None` denotes "no method" and makes [`solve`] fail with
/// [`KepesError::BadSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverMethod {
    None,
    Bisection,
    DanbyBurkardt4,
    DanbyBurkardt5,
    FixedPoint,
    Halley,
    LaguerreConway,
    Markley,
    Mikkola,
    NewtonRaphson,
    Nijenhuis,
    Secant,
    WegsteinSecant,
}

impl SolverMethod {
    /// Every valid kernel, in catalog order.
    pub const ALL: [SolverMethod; 12] = [
        SolverMethod::Bisection,
        SolverMethod::DanbyBurkardt4,
        SolverMethod::DanbyBurkardt5,
        SolverMethod::FixedPoint,
        SolverMethod::Halley,
        SolverMethod::LaguerreConway,
        SolverMethod::Markley,
        SolverMethod::Mikkola,
        SolverMethod::NewtonRaphson,
        SolverMethod::Nijenhuis,
        SolverMethod::Secant,
        SolverMethod::WegsteinSecant,
    ];

    /// Human-readable description of the kernel.
    pub const fn description(self) -> &'static str {
        match self {
            SolverMethod::None => "invalid solver method",
            SolverMethod::Bisection => "Bisection method (interval halving)",
            SolverMethod::DanbyBurkardt4 => "Danby-Burkardt method of order 4",
            SolverMethod::DanbyBurkardt5 => "Danby-Burkardt method of order 5",
            SolverMethod::FixedPoint => "Fixed-point iteration",
            SolverMethod::Halley => "Halley method",
            SolverMethod::LaguerreConway => "Laguerre-Conway method",
            SolverMethod::Markley => "Markley method",
            SolverMethod::Mikkola => "Mikkola method",
            SolverMethod::NewtonRaphson => "Newton-Raphson method",
            SolverMethod::Nijenhuis => "Nijenhuis method",
            SolverMethod::Secant => "Secant method",
            SolverMethod::WegsteinSecant => "Wegstein's secant modification",
        }
    }

    /// Kernel function behind the identifier; `None` for the sentinel.
    fn kernel(self) -> Option<KernelFn> {
        match self {
            SolverMethod::None => Option::None,
            SolverMethod::Bisection => Some(solvers::bisect::bisect as KernelFn),
            SolverMethod::DanbyBurkardt4 => Some(solvers::danbur4::danbur4 as KernelFn),
            SolverMethod::DanbyBurkardt5 => Some(solvers::danbur5::danbur5 as KernelFn),
            SolverMethod::FixedPoint => Some(solvers::fixedp::fixedp as KernelFn),
            SolverMethod::Halley => Some(solvers::halley::halley as KernelFn),
            SolverMethod::LaguerreConway => Some(solvers::lagcon::lagcon as KernelFn),
            SolverMethod::Markley => Some(solvers::markley::markley as KernelFn),
            SolverMethod::Mikkola => Some(solvers::mikkola::mikkola as KernelFn),
            SolverMethod::NewtonRaphson => Some(solvers::newrap::newrap as KernelFn),
            SolverMethod::Nijenhuis => Some(solvers::nijenh::nijenh as KernelFn),
            SolverMethod::Secant => Some(solvers::secant::secant as KernelFn),
            SolverMethod::WegsteinSecant => Some(solvers::wegsec::wegsec as KernelFn),
        }
    }
}

impl fmt::Display for SolverMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Specialized solver for the elliptic case.
///
/// Expects `ecc` already classified as elliptic. Reduces the mean anomaly
/// to `[-pi, pi)`, iterates on its absolute value and restores the sign
/// symmetry `E(-M) = 2*pi - E(M)` afterwards.
fn solve_ell(
    ecc: Eccentricity,
    ma: Radian,
    init: StarterMethod,
    method: SolverMethod,
    data: &mut IterationData,
) -> Result<Radian, KepesError> {
    let mut redma = reduce(ma);

    // side of the symmetry axis the anomaly falls on
    let mut side = 1;
    if redma < 0.0 {
        side = -1;
        redma = -redma;
    }

    // Nijenhuis' refinement is built around the S7 starter
    let init = if method == SolverMethod::Nijenhuis {
        StarterMethod::S7
    } else {
        init
    };

    // a bad starter is recovered locally: fall back to M + e, run the
    // kernel anyway, and surface the flag once the record is populated
    let starter_status = match starting_value(ecc, redma, init) {
        Ok(x0) => {
            data.starter = x0;
            Ok(())
        }
        Err(_) => {
            data.starter = redma + ecc;
            Err(KepesError::BadStarter)
        }
    };

    let Some(kernel) = method.kernel() else {
        return Err(KepesError::BadSolver);
    };

    data.iterations = kernel(ecc, redma, data.starter, data);

    // map the solution back to the caller's side
    if side < 0 {
        data.result = DPI - data.result;
    }

    starter_status.map(|_| data.result)
}

/// Solve Kepler's Equation for the given eccentricity and mean anomaly.
///
/// Arguments
/// -----------------
/// * `ecc`: eccentricity
/// * `ma`: mean anomaly (radians), any finite value
/// * `init`: starting-value method (ignored by the bracketing kernels and
///   the composite ones, which compute their own seed)
/// * `method`: solver kernel to run
/// * `data`: caller-owned iteration record; configuration is read (and
///   clamped) from it, the solution and diagnostics are written back
///
/// Return
/// ----------
/// * `Ok(x)` with the eccentric anomaly in `[0, 2*pi)`.
/// * `Err(KepesError::BadValue)` for non-finite `ecc` or `ma`.
/// * `Err(KepesError::BadEccentricity)` for a negative eccentricity or a
///   regime without an implemented solver (parabolic, hyperbolic).
/// * `Err(KepesError::BadSolver)` for [`SolverMethod::None`].
/// * `Err(KepesError::BadStarter)` for [`StarterMethod::None`]: the solve
///   still ran from the fallback starter `M + e` and `data` holds the
///   full diagnostics, but the flag is surfaced to the caller.
///
/// The circular regime short-circuits to `Ok(ma)` with zero iterations.
pub fn solve(
    ecc: Eccentricity,
    ma: Radian,
    init: StarterMethod,
    method: SolverMethod,
    data: &mut IterationData,
) -> Result<Radian, KepesError> {
    check_val(ecc)?;
    check_val(ma)?;

    // clamp useless settings; the warning count is deliberately ignored
    data.check_input();

    data.result = 0.0;
    match classify_ecc(ecc) {
        EccRegime::Invalid => Err(KepesError::BadEccentricity),

        // circular case: the equation is the identity
        EccRegime::Circular => {
            data.result = ma;
            data.starter = ma;
            data.err_df = 0.0;
            data.err_dx = 0.0;
            data.iterations = 0;
            Ok(ma)
        }

        EccRegime::Elliptic => solve_ell(ecc, ma, init, method, data),

        // declared in the regime enumeration, not implemented
        EccRegime::Parabolic | EccRegime::Hyperbolic => Err(KepesError::BadEccentricity),
    }
}
