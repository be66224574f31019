//! Session adapter for the pure-Rust Varisat engine.

use varisat::ExtendFormula;

use crate::error::SolverError;
use crate::types::Lit;

use super::Session;

/// An incremental Varisat session.
///
/// Varisat keeps assumptions set via `assume` active for all subsequent
/// solves, so this adapter resets them around every call to preserve the
/// [`Session`] contract that assumptions are scoped to one `solve_with`.
pub struct VarisatSession {
    inner: varisat::Solver<'static>,
}

impl VarisatSession {
    pub fn new() -> Self {
        Self { inner: varisat::Solver::new() }
    }
}

impl Default for VarisatSession {
    fn default() -> Self {
        Self::new()
    }
}

fn to_varisat(lit: Lit) -> varisat::Lit {
    varisat::Lit::from_dimacs(lit.to_dimacs() as isize)
}

impl Session for VarisatSession {
    fn add_clause(&mut self, clause: &[Lit]) -> Result<(), SolverError> {
        let lits: Vec<varisat::Lit> = clause.iter().map(|&lit| to_varisat(lit)).collect();
        self.inner.add_clause(&lits);
        Ok(())
    }

    fn solve(&mut self) -> Result<bool, SolverError> {
        self.inner.assume(&[]);
        self.inner
            .solve()
            .map_err(|err| SolverError::new(format!("varisat: {}", err)))
    }

    fn solve_with(&mut self, assumptions: &[Lit]) -> Result<bool, SolverError> {
        let lits: Vec<varisat::Lit> =
            assumptions.iter().map(|&lit| to_varisat(lit)).collect();
        self.inner.assume(&lits);
        let result = self
            .inner
            .solve()
            .map_err(|err| SolverError::new(format!("varisat: {}", err)));
        self.inner.assume(&[]);
        result
    }
}
