//! Library-wide invariants checked over (e, M) grids.

mod common;

use approx::assert_abs_diff_eq;
use common::{mean_anomaly_of, solve_default};
use kepes::constants::DPI;
use kepes::iteration::{IterationData, IterationTrace};
use kepes::kepeq::keq_ell;
use kepes::solver::{solve, SolverMethod};
use kepes::starter::StarterMethod;
use kepes::utils::reduce;
use std::f64::consts::PI;
use std::sync::atomic::{AtomicUsize, Ordering};

const ECC_GRID: [f64; 5] = [0.05, 0.2, 0.5, 0.8, 0.95];
const MA_GRID: [f64; 6] = [0.05, 0.5, 1.0, 1.8, 2.6, 3.1];

/// The kernels that iterate from the caller's starter.
const ITERATIVE: [SolverMethod; 8] = [
    SolverMethod::Bisection,
    SolverMethod::Secant,
    SolverMethod::WegsteinSecant,
    SolverMethod::FixedPoint,
    SolverMethod::NewtonRaphson,
    SolverMethod::Halley,
    SolverMethod::DanbyBurkardt4,
    SolverMethod::DanbyBurkardt5,
];

#[test]
fn termination_contract_holds_for_the_iterative_kernels() {
    for method in ITERATIVE.into_iter().chain([SolverMethod::LaguerreConway]) {
        for ecc in ECC_GRID {
            for ma in MA_GRID {
                let (x, data) = solve_default(ecc, ma, StarterMethod::S3, method);

                assert!(data.iterations <= data.maxiter());
                // the loop only stops once one of the three tests fails
                assert!(
                    data.err_df <= data.tolf()
                        || data.err_dx <= data.tolx()
                        || data.iterations == data.maxiter(),
                    "{method:?} stopped early at e={ecc}, M={ma}"
                );
                // and the solution is a genuine root unless the budget ran out
                if data.iterations < data.maxiter() {
                    assert!(
                        keq_ell(ecc, ma, x).abs() < 1e-9,
                        "{method:?} residual too large at e={ecc}, M={ma}"
                    );
                }
            }
        }
    }
}

#[test]
fn composite_kernels_finish_in_one_step() {
    for method in [
        SolverMethod::Mikkola,
        SolverMethod::Markley,
        SolverMethod::Nijenhuis,
    ] {
        for ecc in ECC_GRID {
            for ma in MA_GRID {
                let (x, data) = solve_default(ecc, ma, StarterMethod::S7, method);
                assert_eq!(data.iterations, 1, "{method:?} is non-iterative");
                assert!(
                    keq_ell(ecc, ma, x).abs() < 1e-9,
                    "{method:?} residual too large at e={ecc}, M={ma}"
                );
            }
        }
    }
}

#[test]
fn newton_family_reaches_the_scaled_residual_target() {
    for method in [
        SolverMethod::NewtonRaphson,
        SolverMethod::Halley,
        SolverMethod::DanbyBurkardt4,
        SolverMethod::DanbyBurkardt5,
        SolverMethod::LaguerreConway,
    ] {
        for ecc in ECC_GRID {
            for ma in MA_GRID {
                let (_, data) = solve_default(ecc, ma, StarterMethod::S3, method);
                assert!(
                    data.err_df <= data.tolf()
                        || data.err_dx <= data.tolx()
                        || data.iterations == data.maxiter()
                );
                assert!(data.iterations < data.maxiter(), "{method:?} exhausted budget");
            }
        }
    }
}

#[test]
fn symmetry_about_the_apsidal_line() {
    for method in ITERATIVE {
        for ecc in ECC_GRID {
            for ma in [0.3, 1.1, 2.2, 3.0] {
                let (xp, _) = solve_default(ecc, ma, StarterMethod::S2, method);
                let (xn, _) = solve_default(ecc, -ma, StarterMethod::S2, method);
                assert_abs_diff_eq!(xp + xn, DPI, epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn round_trip_through_the_mean_anomaly() {
    for ecc in ECC_GRID {
        for x_ref in [0.2, 0.7, 1.3, 2.0, 2.9] {
            let ma = mean_anomaly_of(ecc, x_ref);
            let (x, _) = solve_default(ecc, ma, StarterMethod::S3, SolverMethod::DanbyBurkardt5);
            // a few ulps of slack for the trip through M and back
            assert_abs_diff_eq!(x, x_ref, epsilon = 1e-13);
        }
    }
}

#[test]
fn angle_reduction_is_idempotent() {
    for x in [-9.7, -3.0, -0.4, 0.0, 1.0, 3.0, 8.5, 123.456] {
        let r = reduce(x);
        assert!((-PI..PI).contains(&r), "reduce({x}) = {r} out of range");
        assert_eq!(reduce(r), r);
    }
}

#[test]
fn mean_anomaly_far_outside_the_principal_interval() {
    let (ecc, ma) = (0.4, 1.1);
    let (x_ref, _) = solve_default(ecc, ma, StarterMethod::S1, SolverMethod::Halley);

    for turns in [1.0, -2.0, 7.0] {
        let (x, _) = solve_default(ecc, ma + turns * DPI, StarterMethod::S1, SolverMethod::Halley);
        assert_abs_diff_eq!(x, x_ref, epsilon = 1e-10);
    }
}

static TRACE_CALLS: AtomicUsize = AtomicUsize::new(0);

fn counting_sink(trace: &IterationTrace) {
    assert!(trace.iteration >= 1);
    assert!(trace.err_dx >= 0.0 && trace.err_df >= 0.0);
    TRACE_CALLS.fetch_add(1, Ordering::Relaxed);
}

#[test]
fn trace_sink_sees_every_iteration() {
    let mut data = IterationData {
        trace: Some(counting_sink),
        ..IterationData::default()
    };
    let status = solve(
        0.5,
        1.0,
        StarterMethod::S1,
        SolverMethod::NewtonRaphson,
        &mut data,
    );
    assert!(status.is_ok());
    assert_eq!(TRACE_CALLS.load(Ordering::Relaxed) as u32, data.iterations);
}

#[test]
fn instrumentation_counters_are_opt_in() {
    let (_, silent) = solve_default(0.5, 1.0, StarterMethod::S1, SolverMethod::NewtonRaphson);
    assert_eq!(silent.nbr_sin_eval, 0);
    assert_eq!(silent.nbr_fkt_eval, 0);

    let mut data = IterationData {
        count_evals: true,
        ..IterationData::default()
    };
    solve(
        0.5,
        1.0,
        StarterMethod::S1,
        SolverMethod::NewtonRaphson,
        &mut data,
    )
    .unwrap();
    assert!(data.nbr_sin_eval > 0);
    assert!(data.nbr_cos_eval > 0);
    assert!(data.nbr_fkt_eval > 0);
}

#[test]
fn zero_initialized_record_is_clamped_to_defaults() {
    // literal construction with useless settings; the dispatcher clamps
    let mut data = IterationData {
        tolf: 0.0,
        tolx: 0.0,
        maxiter: 0,
        ..IterationData::default()
    };
    let x = solve(
        0.3,
        0.9,
        StarterMethod::S2,
        SolverMethod::Halley,
        &mut data,
    )
    .unwrap();
    assert!(keq_ell(0.3, 0.9, x).abs() < 1e-12);
    assert!(data.tolf() > 0.0 && data.maxiter() > 0);
}

#[test]
fn results_stay_in_the_full_circle() {
    for method in SolverMethod::ALL {
        for ecc in ECC_GRID {
            for ma in [-3.0, -1.0, 0.1, 2.0, 3.1] {
                let (x, data) = solve_default(ecc, ma, StarterMethod::S7, method);
                assert!((0.0..=DPI).contains(&x), "{method:?} left [0, 2pi]");
                assert!(data.starter >= 0.0 && data.starter <= PI + 1e-12);
            }
        }
    }
}
