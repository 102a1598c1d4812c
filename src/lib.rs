//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! tern_sat is a conflict-driven clause-learning solver built around a handful of databases and the
//! procedures which relate them:
//!
//! - A formula is stored in a [clause database](crate::db::clause), with every non-unit clause
//!   carrying two watched positions into its own literal vector.
//! - A (partial) valuation, together with saved phases, decision levels, and antecedents, is stored
//!   in an [atom database](crate::db::atom).
//! - The order in which values were given to atoms is stored on a [trail](crate::db::trail), with
//!   per-level separators and the decision literal taken at each level.
//! - Which clauses watch which literals is recorded in a [watch index](crate::db::watches).
//! - Variable activity is kept in an [activity database](crate::db::activity) as a descending
//!   score → variables map, walked by the decision procedure through a pair of persistent cursors.
//!
//! A solve alternates [boolean constraint propagation](crate::procedures::bcp) and
//! [decisions](crate::procedures::decision), learning a clause by
//! [first-UIP analysis](crate::procedures::analysis) on each conflict and recovering by either
//! [non-chronological or chronological backtracking](crate::procedures::backtrack), with restarts
//! on a [geometric schedule](crate::procedures::restart).
//!
//! # Orientation
//!
//! Useful starting points:
//! - The high-level [solve procedure](crate::procedures::solve) for the dynamics of a solve.
//! - The [context](crate::context) for the data considered during a solve.
//! - The [configuration](crate::config) for the supported heuristics and switches.
//!
//! # Example
//!
//! ```rust
//! # use tern_sat::config::Config;
//! # use tern_sat::context::Context;
//! # use tern_sat::reports::Report;
//! let mut ctx = Context::from_config(Config::default());
//!
//! let mut dimacs = vec![];
//! # use std::io::Write;
//! let _ = dimacs.write(b"
//! p cnf 2 3
//!  1  2 0
//! -1  2 0
//! -2  1 0
//! ");
//!
//! assert!(ctx.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with a target defined for each subsystem
//! in order to help narrow output to relevant parts of a solve.
//! The targets are listed in [misc::log].
//! No log implementation is bundled; when used with [env_logger](https://docs.rs/env_logger) logs
//! related to conflict analysis can be filtered with `RUST_LOG=analysis …`, and so on.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod reports;
