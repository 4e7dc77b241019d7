//! Numerical methods for solving Kepler's Equation: a catalog of
//! closed-form starting values, iteration kernels from bisection to
//! Danby-Burkardt order 5 and the composite Mikkola/Markley/Nijenhuis
//! methods, behind a single dispatching entry point
//! [`solver::solve`].

pub mod constants;
mod itercore;
pub mod iteration;
pub mod kepeq;
pub mod kepes_errors;
pub mod solver;
mod solvers;
pub mod starter;
pub mod utils;

/// Crate version as a `(major, minor)` pair.
pub fn version() -> (u64, u64) {
    let major = env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0);
    let minor = env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0);
    (major, minor)
}

#[cfg(test)]
mod version_test {
    #[test]
    fn version_matches_the_manifest() {
        let (major, minor) = super::version();
        assert_eq!(
            format!("{major}.{minor}"),
            format!(
                "{}.{}",
                env!("CARGO_PKG_VERSION_MAJOR"),
                env!("CARGO_PKG_VERSION_MINOR")
            )
        );
    }
}
