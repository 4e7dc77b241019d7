//! # Solver kernels
//!
//! One module per method, all obeying the same contract: given
//! `(ecc, ma, starter, &mut IterationData)` with the mean anomaly already
//! reduced to `[0, pi]`, refine the starting value until convergence and
//! return the iteration count, writing `result`, `err_dx` and `err_df`
//! into the record.
//!
//! The shared termination rule for the iterative kernels is the
//! conjunction of all three tests: the loop continues while
//! `err_dx > tolx` AND `err_df > tolf` AND `count < maxiter`, and stops
//! as soon as any of them fails. `err_df` carries the factor `e/(1-e)`
//! that converts the function residual into an upper bound on the angular
//! error. The fixed-point kernel omits the `err_dx` test because its two
//! residuals lag each other by one step.
//!
//! The composite kernels (Mikkola, Markley, Nijenhuis) compute a
//! closed-form seed, override `record.starter` with it, apply a single
//! high-order polish and report one iteration.

pub(crate) mod bisect;
pub(crate) mod danbur4;
pub(crate) mod danbur5;
pub(crate) mod fixedp;
pub(crate) mod halley;
pub(crate) mod lagcon;
pub(crate) mod markley;
pub(crate) mod mikkola;
pub(crate) mod newrap;
pub(crate) mod nijenh;
pub(crate) mod secant;
pub(crate) mod wegsec;
