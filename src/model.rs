//! Propositional (CNF) snapshot of a feature model.
//!
//! A [`PropositionalModel`] is the hand-off point between a feature-model
//! translation (UVL, DIMACS, hand-built — all outside this crate) and the
//! analyses in this crate: a mapping from feature names to variable ids plus
//! an ordered clause list. Once built, it is only queried.

use std::collections::BTreeMap;

use crate::types::{Lit, Var};

/// An immutable-after-build Boolean satisfiability instance.
///
/// Variables are named (a feature name) and 1-indexed; clauses are
/// disjunctions of [`Lit`]s, the clause list as a whole an implicit
/// conjunction. Clause order is preserved because it can affect solver
/// heuristics, though not correctness.
///
/// The model performs no well-formedness validation: a clause referencing a
/// variable id that was never registered is the builder's bug, not checked
/// here.
///
/// # Example
///
/// ```
/// use satfm_rs::model::PropositionalModel;
///
/// let mut model = PropositionalModel::new();
/// let a = model.add_variable("A");
/// let b = model.add_variable("B");
/// model.add_clause([a.pos()]);          // A is mandatory
/// model.add_clause([b.neg(), a.pos()]); // B requires A
/// assert_eq!(model.num_variables(), 2);
/// assert_eq!(model.num_clauses(), 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct PropositionalModel {
    variables: BTreeMap<String, Var>,
    clauses: Vec<Vec<Lit>>,
    next_id: u32,
}

impl PropositionalModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a named variable and returns its id.
    ///
    /// Ids are assigned sequentially starting from 1. Registering a name
    /// that already exists returns the existing id (names are unique).
    pub fn add_variable(&mut self, name: impl Into<String>) -> Var {
        let name = name.into();
        if let Some(&var) = self.variables.get(&name) {
            return var;
        }
        self.next_id += 1;
        let var = Var::new(self.next_id);
        self.variables.insert(name, var);
        var
    }

    /// Looks up a variable by name.
    pub fn var(&self, name: &str) -> Option<Var> {
        self.variables.get(name).copied()
    }

    /// Appends a clause (a disjunction of literals).
    pub fn add_clause<I, L>(&mut self, literals: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<Lit>,
    {
        self.clauses.push(literals.into_iter().map(Into::into).collect());
    }

    /// The name-to-id mapping, in lexicographic name order.
    pub fn variables(&self) -> &BTreeMap<String, Var> {
        &self.variables
    }

    /// The full clause sequence, in insertion order.
    pub fn all_clauses(&self) -> &[Vec<Lit>] {
        &self.clauses
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }
}
