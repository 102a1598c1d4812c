//! The context --- to which formulas are added and within which solves take place.
//!
//! A single context owns every data structure of a solve: the databases, the counters, and the
//! configuration.
//! Mutation is serial and unsynchronised --- there are no background tasks and no yield points ---
//! and all storage is released together at teardown.
//!
//! # Example
//! ```rust
//! # use tern_sat::context::Context;
//! # use tern_sat::config::Config;
//! # use tern_sat::reports::Report;
//! let mut ctx = Context::from_config(Config::default());
//! ctx.initialise(2, 2);
//!
//! assert!(ctx.add_clause(vec![1.into(), 2.into()]).is_ok());
//! assert!(ctx.add_clause(vec![(-1).into()]).is_ok());
//!
//! assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
//! assert_eq!(ctx.atom_db.value_of(2), Some(true));
//! ```

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{
        activity::ActivityDB, atom::AtomDB, clause::ClauseDB, trail::Trail, watches::WatchDB,
        ClauseIdx, LevelIndex,
    },
    structures::literal::CLiteral,
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// Input may be added; the consistency of the formula is unknown.
    Input,

    /// A solve is underway.
    Solving,

    /// The formula is known to be satisfiable, with a complete valuation as witness.
    Satisfiable,

    /// The formula is known to be unsatisfiable.
    Unsatisfiable,
}

/// A context: the formula, the valuation, and every structure relating the two.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a solve.
    pub counters: Counters,

    /// The atom database: valuation, phases, levels, antecedents.
    pub atom_db: AtomDB,

    /// The activity database: scores ordered for the decision procedure.
    pub activity_db: ActivityDB,

    /// The clause database: stored clauses and the unary list.
    pub clause_db: ClauseDB,

    /// The watch index.
    pub watch_db: WatchDB,

    /// The trail and decision stack.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,

    /// The literal asserted by the most recent learned clause, re-asserted on backtracking.
    pub(crate) asserted_literal: Option<CLiteral>,

    /// The antecedent to record when re-asserting, [None] when the learned clause was a unit.
    pub(crate) asserted_antecedent: Option<ClauseIdx>,

    /// The current restart threshold, in learned clauses.
    pub(crate) restart_threshold: usize,

    /// The current ceiling of the restart threshold.
    pub(crate) restart_ceiling: usize,
}

impl Context {
    /// Creates a context from some given configuration, without atoms.
    /// [initialise](Context::initialise) sizes the databases once the atom count is known.
    pub fn from_config(config: Config) -> Self {
        Context {
            counters: Counters::default(),

            atom_db: AtomDB::new(0),
            activity_db: ActivityDB::new(0, &config),
            clause_db: ClauseDB::new(0),
            watch_db: WatchDB::new(0),
            trail: Trail::new(),

            state: ContextState::Input,
            asserted_literal: None,
            asserted_antecedent: None,

            restart_threshold: config.restart_lower.value,
            restart_ceiling: config.restart_upper.value,

            config,
        }
    }

    /// A report on the status of the context.
    pub fn report(&self) -> crate::reports::Report {
        crate::reports::Report::from(self.state)
    }

    /// Sizes every database for a formula over `atoms` atoms and (an advisory) `clauses` clauses.
    pub fn initialise(&mut self, atoms: usize, clauses: usize) {
        self.atom_db = AtomDB::new(atoms);
        self.activity_db = ActivityDB::new(atoms, &self.config);
        self.clause_db = ClauseDB::new(clauses);
        self.watch_db = WatchDB::new(atoms);
        self.trail = Trail::new();
    }

    /// Appends `literal` to the trail and values its atom at `level`, with `antecedent` as the
    /// forcing clause, if any.
    pub(crate) fn assert_literal(
        &mut self,
        literal: CLiteral,
        level: LevelIndex,
        antecedent: Option<ClauseIdx>,
    ) {
        self.trail.literals.push(literal);
        self.atom_db.set_value(literal, level, antecedent);
        self.counters.assignments += 1;
        log::trace!(target: crate::misc::log::targets::VALUATION, "{literal} @ {level}");
    }

    /// Checks every stored clause is watched by exactly the literals at its watched positions.
    ///
    /// An audit of the watch index, for tests and debugging.
    pub fn watches_consistent(&self) -> bool {
        for (index, clause) in self.clause_db.all_clauses() {
            for literal in [clause.lw_literal(), clause.rw_literal()] {
                let references = self
                    .watch_db
                    .watchers(literal)
                    .iter()
                    .filter(|watcher| **watcher == index)
                    .count();
                if references != 1 {
                    return false;
                }
            }
            if clause.lw() == clause.rw() || clause.lw_literal() == clause.rw_literal() {
                return false;
            }
        }
        true
    }
}
