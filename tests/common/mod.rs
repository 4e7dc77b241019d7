use kepes::iteration::IterationData;
use kepes::solver::{solve, SolverMethod};
use kepes::starter::StarterMethod;

/// Mean anomaly generated from a reference eccentric anomaly, so that a
/// solve must reproduce `x_ref`.
pub fn mean_anomaly_of(ecc: f64, x_ref: f64) -> f64 {
    x_ref - ecc * x_ref.sin()
}

/// Solve with a fresh default record and return `(result, record)`.
pub fn solve_default(
    ecc: f64,
    ma: f64,
    init: StarterMethod,
    method: SolverMethod,
) -> (f64, IterationData) {
    let mut data = IterationData::default();
    let x = solve(ecc, ma, init, method, &mut data)
        .unwrap_or_else(|e| panic!("solve({ecc}, {ma}, {init:?}, {method:?}) failed: {e}"));
    (x, data)
}
