//! # Iteration record
//!
//! [`IterationData`] is the caller-facing state of a solver run: the
//! convergence configuration goes in, the solution and its diagnostics
//! come out. The record is a plain `Copy` value owned by the caller for
//! its entire lifetime; kernels write to it by reference and never retain
//! the reference after return. No heap allocation occurs anywhere in a
//! solver call.
//!
//! Construction:
//!
//! - [`IterationData::default`] — default tolerances, zeroed outputs.
//! - [`IterationData::builder`] — validated subset configuration of
//!   `{tolf, tolx, maxiter}`.
//! - Literal construction with zeroed fields also works; the dispatcher
//!   clamps useless settings back to the defaults via
//!   [`IterationData::check_input`].

use crate::constants::{Radian, STD_MAXITER, STD_TOL};
use crate::kepes_errors::KepesError;

/// Per-iteration diagnostic handed to the optional trace sink.
#[derive(Debug, Clone, Copy)]
pub struct IterationTrace {
    /// Kernel that produced the step
    pub solver: &'static str,
    /// 1-based loop count
    pub iteration: u32,
    /// Current iterate gap `|x(n+1) - x(n)|`
    pub err_dx: f64,
    /// Current scaled residual `|f(x(n+1))| * e/(1-e)`
    pub err_df: f64,
}

/// Configuration and diagnostics of one solver invocation.
#[derive(Debug, Clone, Copy)]
pub struct IterationData {
    /// Convergence target on `|f(x(n))|`, valid in `(STD_TOL, 1)`
    pub tolf: f64,
    /// Convergence target on `|x(n+1) - x(n)|`, valid in `(STD_TOL, 1)`
    pub tolx: f64,
    /// Iteration budget, valid in `[1, 10 * STD_MAXITER)`
    pub maxiter: u32,

    /// Solution of Kepler's Equation (written by the kernel/dispatcher)
    pub result: Radian,
    /// Starting value actually used; composite kernels override it
    pub starter: Radian,
    /// Final scaled residual `|f(x(n+1))| * e/(1-e)`
    pub err_df: f64,
    /// Final iterate gap `|x(n+1) - x(n)|`
    pub err_dx: f64,
    /// Number of iterations performed until convergence
    pub iterations: u32,

    /// Evaluation counters, maintained only while `count_evals` is set
    pub nbr_sin_eval: u32,
    pub nbr_cos_eval: u32,
    pub nbr_fkt_eval: u32,
    /// Run-time toggle for the evaluation counters
    pub count_evals: bool,

    /// Optional per-iteration trace sink, off by default
    pub trace: Option<fn(&IterationTrace)>,
}

impl Default for IterationData {
    fn default() -> Self {
        IterationData {
            tolf: STD_TOL,
            tolx: STD_TOL,
            maxiter: STD_MAXITER,
            result: 0.0,
            starter: 0.0,
            err_df: 0.0,
            err_dx: 0.0,
            iterations: 0,
            nbr_sin_eval: 0,
            nbr_cos_eval: 0,
            nbr_fkt_eval: 0,
            count_evals: false,
            trace: None,
        }
    }
}

impl IterationData {
    /// Start building a record from the defaults.
    pub fn builder() -> IterationDataBuilder {
        IterationDataBuilder::default()
    }

    // getters
    pub fn tolf(&self) -> f64 {
        self.tolf
    }
    pub fn tolx(&self) -> f64 {
        self.tolx
    }
    pub fn maxiter(&self) -> u32 {
        self.maxiter
    }

    /// Set the residual tolerance `tolf`.
    ///
    /// The value must be finite and inside `(STD_TOL, 1)`, otherwise
    /// `Err(KepesError::BadTolerance)` and the record is unchanged.
    pub fn set_tolf(&mut self, tolf: f64) -> Result<(), KepesError> {
        if tolf.is_finite() && tolf > STD_TOL && tolf < 1.0 {
            self.tolf = tolf;
            Ok(())
        } else {
            Err(KepesError::BadTolerance)
        }
    }

    /// Set the iterate-gap tolerance `tolx`; same predicate as
    /// [`IterationData::set_tolf`].
    pub fn set_tolx(&mut self, tolx: f64) -> Result<(), KepesError> {
        if tolx.is_finite() && tolx > STD_TOL && tolx < 1.0 {
            self.tolx = tolx;
            Ok(())
        } else {
            Err(KepesError::BadTolerance)
        }
    }

    /// Set the iteration budget, valid in `[1, 10 * STD_MAXITER)`.
    pub fn set_maxiter(&mut self, maxiter: u32) -> Result<(), KepesError> {
        if maxiter >= 1 && maxiter < 10 * STD_MAXITER {
            self.maxiter = maxiter;
            Ok(())
        } else {
            Err(KepesError::BadValue)
        }
    }

    /// Clamp useless settings back to their defaults.
    ///
    /// Every field failing its predicate is replaced by the default value.
    /// Returns the number of replacements as a warning count; the
    /// dispatcher currently ignores it.
    pub fn check_input(&mut self) -> u32 {
        let mut warnings = 0;

        if !(self.tolf >= STD_TOL && self.tolf < 1.0) {
            self.tolf = STD_TOL;
            warnings += 1;
        }
        if !(self.tolx >= STD_TOL && self.tolx < 1.0) {
            self.tolx = STD_TOL;
            warnings += 1;
        }
        if self.maxiter == 0 || self.maxiter >= 10 * STD_MAXITER {
            self.maxiter = STD_MAXITER;
            warnings += 1;
        }

        warnings
    }

    /// Reset the diagnostics at kernel entry: residuals to zero (so an
    /// immediately converged run reports 0) and, when counting, the
    /// evaluation counters.
    pub(crate) fn reset_diagnostics(&mut self) {
        self.err_df = 0.0;
        self.err_dx = 0.0;
        if self.count_evals {
            self.nbr_sin_eval = 0;
            self.nbr_cos_eval = 0;
            self.nbr_fkt_eval = 0;
        }
    }

    /// Bump the evaluation counters, if counting is enabled.
    #[inline]
    pub(crate) fn tally(&mut self, sin: u32, cos: u32, fkt: u32) {
        if self.count_evals {
            self.nbr_sin_eval += sin;
            self.nbr_cos_eval += cos;
            self.nbr_fkt_eval += fkt;
        }
    }

    /// Hand one iteration's residuals to the trace sink, if any.
    #[inline]
    pub(crate) fn emit_trace(&self, solver: &'static str, iteration: u32, err_dx: f64, err_df: f64) {
        if let Some(sink) = self.trace {
            sink(&IterationTrace {
                solver,
                iteration,
                err_dx,
                err_df,
            });
        }
    }
}

/// Validated subset configuration of an [`IterationData`].
///
/// Recognized options are exactly `{tolf, tolx, maxiter}`; omitted ones
/// stay at their defaults.
#[derive(Debug, Default, Clone, Copy)]
pub struct IterationDataBuilder {
    tolf: Option<f64>,
    tolx: Option<f64>,
    maxiter: Option<u32>,
}

impl IterationDataBuilder {
    pub fn tolf(mut self, tolf: f64) -> Self {
        self.tolf = Some(tolf);
        self
    }

    pub fn tolx(mut self, tolx: f64) -> Self {
        self.tolx = Some(tolx);
        self
    }

    pub fn maxiter(mut self, maxiter: u32) -> Self {
        self.maxiter = Some(maxiter);
        self
    }

    /// Validate the chosen options through the record's setters.
    pub fn build(self) -> Result<IterationData, KepesError> {
        let mut data = IterationData::default();
        if let Some(tolf) = self.tolf {
            data.set_tolf(tolf)?;
        }
        if let Some(tolx) = self.tolx {
            data.set_tolx(tolx)?;
        }
        if let Some(maxiter) = self.maxiter {
            data.set_maxiter(maxiter)?;
        }
        Ok(data)
    }
}
