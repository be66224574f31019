//! # satfm-rs: SAT-based feature-model analysis in Rust
//!
//! **`satfm-rs`** classifies the features of a configurable product model as
//! **core** (present in every valid product), **dead** (present in none), or
//! ordinary, by driving an incremental SAT solver over the model's CNF
//! encoding.
//!
//! ## How it works
//!
//! A feature model translated to conjunctive normal form is a
//! [`PropositionalModel`][crate::model::PropositionalModel]: feature names
//! mapped to variable ids plus a clause list. The
//! [`CoreDeadAnalysis`][crate::analysis::CoreDeadAnalysis] loads the clauses
//! into one incremental solver session and asks, per feature, whether the
//! model stays satisfiable with the feature forced off (if not, it is core)
//! and with it forced on (if not, it is dead). Learned clauses are shared
//! across all checks, so the whole classification costs `1 + 2·n` cheap
//! incremental solves rather than `2·n` cold ones.
//!
//! ## Quick Start
//!
//! ```rust
//! use satfm_rs::analysis::CoreDeadAnalysis;
//! use satfm_rs::model::PropositionalModel;
//!
//! // 1. Build the CNF snapshot (normally produced by a UVL/DIMACS
//! //    translation outside this crate).
//! let mut model = PropositionalModel::new();
//! let base = model.add_variable("Base");
//! let ssl = model.add_variable("Ssl");
//! let telnet = model.add_variable("Telnet");
//! model.add_clause([base.pos()]);             // root is mandatory
//! model.add_clause([ssl.neg(), base.pos()]);  // Ssl requires Base
//! model.add_clause([telnet.neg()]);           // Telnet was disabled
//!
//! // 2. Pick a solver backend by name and analyze.
//! let analysis = CoreDeadAnalysis::with_solver("varisat")?;
//! let result = analysis.execute(&model)?;
//!
//! assert!(result.core.contains("Base"));
//! assert!(result.dead.contains("Telnet"));
//! assert!(!result.core.contains("Ssl")); // Ssl is ordinary
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Core Components
//!
//! - **[`model`]**: the immutable CNF snapshot handed over by the
//!   feature-model translation.
//! - **[`analysis`]**: the core/dead feature analyzer.
//! - **[`solver`]**: the incremental-session capability trait, the backend
//!   name/alias table, and the wired-in engines (CaDiCaL, Varisat).
//! - **[`types`]**: `Var` and `Lit` newtypes.
//! - **[`error`]**: `UnsupportedSolverError`, `SolverError`, and the
//!   umbrella `AnalysisError`.
//! - **[`measure`]**: caller-owned wall-clock measurement contexts for
//!   benchmarking harnesses.

pub mod analysis;
pub mod error;
pub mod measure;
pub mod model;
pub mod solver;
pub mod types;
