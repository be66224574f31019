//! Core/dead feature classification.
//!
//! A feature is **core** if it is selected in every valid product and
//! **dead** if it is selected in none. Given a CNF encoding of a feature
//! model, both properties reduce to unsatisfiability of a single assumption:
//! forcing a core feature false (or a dead feature true) must contradict the
//! clause set.
//!
//! The analyzer drives one incremental solver session: every learned clause
//! from earlier checks is reused by later ones, which is what keeps
//! `1 + 2·n` solves tractable on industrial models with thousands of
//! features.
//!
//! # Example
//!
//! ```
//! use satfm_rs::analysis::CoreDeadAnalysis;
//! use satfm_rs::model::PropositionalModel;
//! use satfm_rs::solver::Backend;
//!
//! let mut model = PropositionalModel::new();
//! let base = model.add_variable("Base");
//! let gui = model.add_variable("Gui");
//! model.add_clause([base.pos()]);           // Base is mandatory
//! model.add_clause([gui.neg(), base.pos()]); // Gui requires Base
//!
//! let result = CoreDeadAnalysis::new(Backend::Varisat).execute(&model)?;
//! assert!(result.core.contains("Base"));
//! assert!(result.dead.is_empty());
//! # Ok::<(), satfm_rs::error::AnalysisError>(())
//! ```

use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use crate::error::{AnalysisError, SolverError, UnsupportedSolverError};
use crate::model::PropositionalModel;
use crate::solver::{Backend, Session};

/// Result of one core/dead classification.
///
/// Both sets hold feature names. For a satisfiable model the sets are
/// disjoint; for an unsatisfiable model both are empty (there are no valid
/// products, so the classification is vacuous by policy). A feature in
/// neither set varies across valid products.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct CoreDeadFeatures {
    pub core: BTreeSet<String>,
    pub dead: BTreeSet<String>,
}

impl CoreDeadFeatures {
    pub fn is_disjoint(&self) -> bool {
        self.core.is_disjoint(&self.dead)
    }
}

impl fmt::Display for CoreDeadFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Core/dead classification:")?;
        writeln!(f, "  Core features: {}", self.core.len())?;
        for name in &self.core {
            writeln!(f, "  - {}", name)?;
        }
        writeln!(f, "  Dead features: {}", self.dead.len())?;
        for name in &self.dead {
            writeln!(f, "  - {}", name)?;
        }
        Ok(())
    }
}

/// Classifies every variable of `model` using an already-created session.
///
/// Loads all clauses, runs one unconstrained satisfiability check, then two
/// assumption-scoped checks per variable: exactly `1 + 2·n` solver calls on
/// a satisfiable model, `1` on an unsatisfiable one. The session is left
/// loaded; dropping it is the caller's concern (see
/// [`CoreDeadAnalysis::execute`] for the owning wrapper).
pub fn coredead_features(
    model: &PropositionalModel,
    session: &mut dyn Session,
) -> Result<CoreDeadFeatures, SolverError> {
    debug!(
        "loading {} clauses over {} variables",
        model.num_clauses(),
        model.num_variables()
    );
    for clause in model.all_clauses() {
        session.add_clause(clause)?;
    }

    let mut result = CoreDeadFeatures::default();

    if !session.solve()? {
        // No valid product exists; report nothing rather than the degenerate
        // "every feature is both core and dead" reading.
        debug!("model is unsatisfiable, classification is vacuous");
        return Ok(result);
    }

    for (name, &var) in model.variables() {
        if !session.solve_with(&[var.neg()])? {
            result.core.insert(name.clone());
        }
        if !session.solve_with(&[var.pos()])? {
            result.dead.insert(name.clone());
        }
    }

    debug!(
        "classified {} core and {} dead of {} features",
        result.core.len(),
        result.dead.len(),
        model.num_variables()
    );
    Ok(result)
}

/// The core/dead feature analyzer.
///
/// Owns the choice of solver backend; each [`execute`][Self::execute] call
/// creates a fresh session, runs the classification, and releases the
/// session on every exit path (sessions are owned values, so this holds on
/// errors too). No partial results are returned on failure.
#[derive(Debug, Default, Copy, Clone)]
pub struct CoreDeadAnalysis {
    backend: Backend,
}

impl CoreDeadAnalysis {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Shorthand resolving a backend name first.
    ///
    /// Fails with [`UnsupportedSolverError`] for unknown names; no solver
    /// resources are allocated in that case.
    pub fn with_solver(name: &str) -> Result<Self, UnsupportedSolverError> {
        Ok(Self::new(Backend::from_name(name)?))
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Runs the classification on a fresh session of the chosen backend.
    pub fn execute(
        &self,
        model: &PropositionalModel,
    ) -> Result<CoreDeadFeatures, AnalysisError> {
        let session = self.backend.session()?;
        self.execute_session(model, session)
    }

    /// Runs the classification on a caller-supplied session.
    ///
    /// The session must be fresh (no clauses loaded). It is consumed and
    /// dropped before this method returns, whether the analysis succeeds or
    /// fails.
    pub fn execute_session(
        &self,
        model: &PropositionalModel,
        mut session: Box<dyn Session>,
    ) -> Result<CoreDeadFeatures, AnalysisError> {
        let result = coredead_features(model, session.as_mut());
        drop(session);
        Ok(result?)
    }
}
