/*!
Building a context: clause addition and input ingestion.

Clauses reach a context through [add_clause](crate::context::Context::add_clause), whether from
the [DIMACS reader](crate::builder::dimacs) or programmatically.
Each clause is deduplicated on addition --- conflict analysis removes its resolution pivot in a
single pass, and termination of analysis rests on no clause holding the same literal twice.

Clause length settles what addition amounts to:
- An empty clause is refused; the reader aborts before the core ever sees one.
- A unit clause is asserted at decision level zero and recorded on the unary list.
  If the atom is already valued with the opposite polarity the formula is unsatisfiable, and is
  reported as such immediately.
- A longer clause is stored, watched at its first two positions.

Addition also seeds the decision heuristics: each literal bumps its atom's activity, and, under
the LITSCORE value heuristic, the literal's occurrence count.
*/

pub mod dimacs;

use crate::{
    config::ValueHeuristic,
    context::{Context, ContextState},
    misc::log::targets,
    structures::{
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self, BuildError},
};

/// Ok results from adding a clause to a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was stored, and is watched.
    Added,

    /// The clause was a unit, asserted at level zero and recorded on the unary list.
    Unit,
}

impl Context {
    /// Adds a clause to the context.
    ///
    /// The clause is deduplicated, and its literals seed the decision heuristics.
    ///
    /// ```rust
    /// # use tern_sat::config::Config;
    /// # use tern_sat::context::Context;
    /// let mut ctx = Context::from_config(Config::default());
    /// ctx.initialise(3, 1);
    ///
    /// assert!(ctx.add_clause(vec![1.into(), (-2).into(), 3.into()]).is_ok());
    /// ```
    pub fn add_clause(&mut self, clause: CClause) -> Result<ClauseOk, err::ErrorKind> {
        let mut clause = clause;
        clause.sort_unstable();
        clause.dedup();

        for literal in &clause {
            let atom = literal.atom();
            if atom == 0 || atom as usize > self.atom_db.count() {
                return Err(err::ErrorKind::from(BuildError::AtomOutOfBounds));
            }
        }

        for literal in &clause {
            self.activity_db.bump(literal.atom());
            if self.config.value_heuristic == ValueHeuristic::LitScore {
                self.activity_db.bump_literal(*literal);
            }
        }

        match clause.len() {
            0 => Err(err::ErrorKind::from(BuildError::EmptyClause)),

            1 => {
                let literal = clause[0];
                self.add_unary_clause(literal)
            }

            _ => {
                log::trace!(target: targets::CLAUSE_DB, "Adding clause: {}", clause.as_dimacs());
                let index = self.clause_db.store(clause, 0, 1);
                let stored = self.clause_db.get(index);
                let (lw_literal, rw_literal) = (stored.lw_literal(), stored.rw_literal());
                self.watch_db.watch(lw_literal, index);
                self.watch_db.watch(rw_literal, index);
                Ok(ClauseOk::Added)
            }
        }
    }

    /// Asserts the literal of a unit clause at level zero and records it on the unary list.
    ///
    /// Conflicting unaries are sufficiently rare to be checked here rather than during BCP.
    fn add_unary_clause(&mut self, literal: CLiteral) -> Result<ClauseOk, err::ErrorKind> {
        match self.atom_db.value_of(literal.atom()) {
            Some(value) if value != literal.polarity() => {
                log::info!(target: targets::CLAUSE_DB, "Conflicting unit clauses for atom {}", literal.atom());
                self.state = ContextState::Unsatisfiable;
                Err(err::ErrorKind::from(BuildError::Unsatisfiable))
            }

            Some(_) => {
                self.clause_db.store_unary(literal);
                Ok(ClauseOk::Unit)
            }

            None => {
                self.assert_literal(literal, 0, None);
                self.clause_db.store_unary(literal);
                Ok(ClauseOk::Unit)
            }
        }
    }
}
