use thiserror::Error;

/// Error taxonomy of the solver library.
///
/// Every fallible entry point reports its failure through this enum; the
/// numeric codes returned by [`KepesError::code`] are stable across
/// releases (0 is reserved for success, i.e. the absence of an error).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KepesError {
    #[error("bad value for eccentricity (negative, non-finite, or unimplemented regime)")]
    BadEccentricity,

    #[error("bad value for parameter (INF or NaN)")]
    BadValue,

    #[error("bad starter method")]
    BadStarter,

    #[error("bad solver method")]
    BadSolver,

    #[error("bad value for error tolerance")]
    BadTolerance,
}

impl KepesError {
    /// Stable numeric identifier of the error case.
    pub const fn code(self) -> u32 {
        match self {
            KepesError::BadEccentricity => 1,
            KepesError::BadValue => 2,
            KepesError::BadStarter => 3,
            KepesError::BadSolver => 4,
            KepesError::BadTolerance => 5,
        }
    }
}
