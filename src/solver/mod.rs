//! Incremental SAT solver sessions and backend selection.
//!
//! This module provides the minimal solving capability the analyses in this
//! crate need, behind the [`Session`] trait, plus a [`Backend`] selector
//! that resolves user-facing engine names to concrete implementations:
//!
//! | Backend | Engine | Aliases |
//! |---------|--------|---------|
//! | [`CadicalSession`] | CaDiCaL (bundled C++) | `cd`, `cdl`, `cadical` |
//! | [`VarisatSession`] | Varisat (pure Rust) | `vs`, `vsat`, `varisat` |
//!
//! A session is one exclusively-owned incremental solving context: clauses
//! accumulate across calls, and learned clauses survive assumption-scoped
//! solves. Sessions release their native resources on drop, so the usual
//! ownership rules already give "release on every exit path".
//!
//! # Example
//!
//! ```
//! use satfm_rs::solver::Backend;
//! use satfm_rs::types::Lit;
//!
//! let backend = Backend::from_name("varisat")?;
//! let mut session = backend.session()?;
//! session.add_clause(&[Lit::from_dimacs(1)])?;
//! assert!(session.solve()?);
//! assert!(!session.solve_with(&[Lit::from_dimacs(-1)])?);
//! # Ok::<(), satfm_rs::error::AnalysisError>(())
//! ```

mod cadical;
mod varisat;

pub use self::cadical::CadicalSession;
pub use self::varisat::VarisatSession;

use crate::error::{SolverError, UnsupportedSolverError};
use crate::types::Lit;

/// One incremental solving session.
///
/// Callers must not interleave calls from multiple threads; a session is
/// exclusively owned by one analysis for its whole lifetime. Assumptions
/// passed to [`solve_with`][Session::solve_with] constrain only that call —
/// they are not added to the clause set.
pub trait Session {
    /// Loads one clause (a disjunction of literals) into the session.
    fn add_clause(&mut self, clause: &[Lit]) -> Result<(), SolverError>;

    /// Checks satisfiability of the loaded clauses.
    fn solve(&mut self) -> Result<bool, SolverError>;

    /// Checks satisfiability under temporary unit assumptions.
    fn solve_with(&mut self, assumptions: &[Lit]) -> Result<bool, SolverError>;
}

/// A selectable solver engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Backend {
    Cadical,
    Varisat,
}

/// Accepted spellings per engine, mirroring the many-aliases convention of
/// SAT benchmarking harnesses.
const ALIASES: &[(Backend, &[&str])] = &[
    (Backend::Cadical, &["cd", "cdl", "cadical"]),
    (Backend::Varisat, &["vs", "vsat", "varisat"]),
];

impl Backend {
    /// All supported backends.
    pub const ALL: &'static [Backend] = &[Backend::Cadical, Backend::Varisat];

    /// Resolves a backend name (case-insensitive, alias-aware).
    ///
    /// Fails with [`UnsupportedSolverError`] for unknown names, before any
    /// solver resources are allocated.
    pub fn from_name(name: &str) -> Result<Self, UnsupportedSolverError> {
        let lower = name.to_ascii_lowercase();
        for &(backend, aliases) in ALIASES {
            if aliases.contains(&lower.as_str()) {
                return Ok(backend);
            }
        }
        Err(UnsupportedSolverError { name: name.to_string() })
    }

    /// The canonical name of this backend.
    pub fn name(self) -> &'static str {
        match self {
            Backend::Cadical => "cadical",
            Backend::Varisat => "varisat",
        }
    }

    /// Instantiates a fresh session for this backend.
    pub fn session(self) -> Result<Box<dyn Session>, SolverError> {
        Ok(match self {
            Backend::Cadical => Box::new(CadicalSession::new()),
            Backend::Varisat => Box::new(VarisatSession::new()),
        })
    }
}

impl Default for Backend {
    fn default() -> Self {
        Backend::Cadical
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_resolution() {
        assert_eq!(Backend::from_name("cadical").unwrap(), Backend::Cadical);
        assert_eq!(Backend::from_name("cd").unwrap(), Backend::Cadical);
        assert_eq!(Backend::from_name("CDL").unwrap(), Backend::Cadical);
        assert_eq!(Backend::from_name("varisat").unwrap(), Backend::Varisat);
        assert_eq!(Backend::from_name("vs").unwrap(), Backend::Varisat);
    }

    #[test]
    fn test_unknown_name() {
        let err = Backend::from_name("glucose99").unwrap_err();
        assert_eq!(err.name, "glucose99");
    }

    #[test]
    fn test_canonical_names_resolve_to_themselves() {
        for &backend in Backend::ALL {
            assert_eq!(Backend::from_name(backend.name()).unwrap(), backend);
        }
    }

    // Behavioral contract checks run against every wired-in engine.

    fn unit(value: i32) -> Vec<Lit> {
        vec![Lit::from_dimacs(value)]
    }

    #[test]
    fn test_sessions_solve_empty_formula() {
        for &backend in Backend::ALL {
            let mut session = backend.session().unwrap();
            assert!(session.solve().unwrap(), "backend {}", backend);
        }
    }

    #[test]
    fn test_sessions_detect_contradiction() {
        for &backend in Backend::ALL {
            let mut session = backend.session().unwrap();
            session.add_clause(&unit(1)).unwrap();
            session.add_clause(&unit(-1)).unwrap();
            assert!(!session.solve().unwrap(), "backend {}", backend);
        }
    }

    #[test]
    fn test_assumptions_are_scoped_to_one_call() {
        for &backend in Backend::ALL {
            let mut session = backend.session().unwrap();
            session.add_clause(&unit(1)).unwrap();
            assert!(!session.solve_with(&unit(-1)).unwrap(), "backend {}", backend);
            // The assumption must not have stuck.
            assert!(session.solve().unwrap(), "backend {}", backend);
            assert!(session.solve_with(&unit(1)).unwrap(), "backend {}", backend);
        }
    }

    #[test]
    fn test_incremental_clause_addition() {
        for &backend in Backend::ALL {
            let mut session = backend.session().unwrap();
            session.add_clause(&[Lit::from_dimacs(1), Lit::from_dimacs(2)]).unwrap();
            assert!(session.solve().unwrap(), "backend {}", backend);
            session.add_clause(&unit(-1)).unwrap();
            assert!(session.solve().unwrap(), "backend {}", backend);
            session.add_clause(&unit(-2)).unwrap();
            assert!(!session.solve().unwrap(), "backend {}", backend);
        }
    }
}
