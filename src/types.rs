//! Type-safe wrappers for propositional variables and literals.
//!
//! This module provides newtype wrappers that enforce compile-time
//! distinction between variable ids and signed clause literals, preventing
//! common mistakes when building and querying CNF instances.

use std::fmt;
use std::ops::Neg;

/// A propositional variable identifier (1-indexed).
///
/// Variables represent Boolean decision points (a feature's presence or
/// absence). Ids are assigned at model-construction time and never change.
///
/// # Invariants
///
/// - Variable ids must be >= 1 (0 is not a valid DIMACS variable)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a new variable with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id == 0`. Variables must be 1-indexed.
    pub fn new(id: u32) -> Self {
        assert_ne!(id, 0, "Variable ids must be >= 1");
        Var(id)
    }

    /// Returns the raw variable id as a `u32`.
    pub fn id(self) -> u32 {
        self.0
    }

    /// The positive literal for this variable.
    pub fn pos(self) -> Lit {
        Lit(self.0 as i32)
    }

    /// The negative literal for this variable.
    pub fn neg(self) -> Lit {
        Lit(-(self.0 as i32))
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl From<Var> for u32 {
    fn from(var: Var) -> Self {
        var.0
    }
}

/// A signed literal: a variable or its negation.
///
/// The internal representation is the DIMACS convention, i.e. a nonzero
/// `i32` whose sign carries the polarity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Lit(i32);

impl Lit {
    /// Creates a literal from a signed DIMACS value.
    ///
    /// # Panics
    ///
    /// Panics if `value == 0` (0 is the DIMACS clause terminator, not a
    /// literal).
    pub fn from_dimacs(value: i32) -> Self {
        assert_ne!(value, 0, "Literals must be nonzero");
        Lit(value)
    }

    /// Returns the signed DIMACS representation.
    pub fn to_dimacs(self) -> i32 {
        self.0
    }

    /// The variable this literal refers to.
    pub fn var(self) -> Var {
        Var(self.0.unsigned_abs())
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// The same variable with the opposite polarity.
    pub fn negate(self) -> Self {
        Lit(-self.0)
    }
}

impl Neg for Lit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl From<i32> for Lit {
    fn from(value: i32) -> Self {
        Lit::from_dimacs(value)
    }
}

impl From<Var> for Lit {
    fn from(var: Var) -> Self {
        var.pos()
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            if self.is_negative() { "~" } else { "" },
            self.var()
        )
    }
}
