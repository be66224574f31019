//! Error taxonomy for solver-backed analyses.
//!
//! Two failure classes exist: the requested backend is unknown (surfaced
//! before any solver resources are allocated), or the engine itself fails
//! while loading clauses or solving. Analyses never return partial results;
//! any error aborts the whole call.

use thiserror::Error;

/// The requested solver-backend name is not recognized.
///
/// Raised by [`Backend::from_name`][crate::solver::Backend::from_name]
/// before any session is created or any clause is loaded.
#[derive(Debug, Clone, Error)]
#[error("unsupported solver backend {name:?}")]
pub struct UnsupportedSolverError {
    /// The name as given by the caller.
    pub name: String,
}

/// The underlying SAT engine failed during clause loading or solving.
#[derive(Debug, Clone, Error)]
#[error("solver failure: {message}")]
pub struct SolverError {
    pub message: String,
}

impl SolverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Any failure of an analysis call.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    UnsupportedSolver(#[from] UnsupportedSolverError),
    #[error(transparent)]
    Solver(#[from] SolverError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = UnsupportedSolverError { name: "glucose99".to_string() };
        assert_eq!(err.to_string(), "unsupported solver backend \"glucose99\"");

        let err = SolverError::new("out of memory");
        assert_eq!(err.to_string(), "solver failure: out of memory");
    }

    #[test]
    fn test_conversion() {
        let err: AnalysisError = SolverError::new("boom").into();
        assert!(matches!(err, AnalysisError::Solver(_)));

        let err: AnalysisError =
            UnsupportedSolverError { name: "x".to_string() }.into();
        assert!(matches!(err, AnalysisError::UnsupportedSolver(_)));
    }
}
