//! Session adapter for the bundled CaDiCaL engine.

use crate::error::SolverError;
use crate::types::Lit;

use super::Session;

/// An incremental CaDiCaL session.
///
/// CaDiCaL answers `None` when a solve is interrupted or inconclusive
/// (e.g. a configured resource limit fired); that is surfaced as a
/// [`SolverError`] since this crate's analyses need definite answers.
/// Native resources are freed when the session is dropped.
pub struct CadicalSession {
    inner: cadical::Solver,
}

impl CadicalSession {
    pub fn new() -> Self {
        Self { inner: cadical::Solver::new() }
    }
}

impl Default for CadicalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Session for CadicalSession {
    fn add_clause(&mut self, clause: &[Lit]) -> Result<(), SolverError> {
        self.inner.add_clause(clause.iter().map(|lit| lit.to_dimacs()));
        Ok(())
    }

    fn solve(&mut self) -> Result<bool, SolverError> {
        self.inner
            .solve()
            .ok_or_else(|| SolverError::new("cadical: solve interrupted"))
    }

    fn solve_with(&mut self, assumptions: &[Lit]) -> Result<bool, SolverError> {
        self.inner
            .solve_with(assumptions.iter().map(|lit| lit.to_dimacs()))
            .ok_or_else(|| SolverError::new("cadical: solve interrupted"))
    }
}
