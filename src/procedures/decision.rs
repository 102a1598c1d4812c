/*!
Methods for choosing the next decision.

# Variable heuristic

Atoms are taken in descending activity from the [activity database](crate::db::activity), through
its persistent cursors: the outer cursor over score buckets and the inner cursor within a bucket
keep their position across calls, and are repositioned at the resume point after a backtrack,
restart, or rescale.
When the cursors are exhausted every atom occurring in the formula has a value, and the formula is
satisfied by the current valuation.

# Value heuristic

Having chosen an atom:
- PHASESAVING values it as it was most recently valued (false, if never valued).
- LITSCORE values it so the literal with the higher occurrence count is satisfied.

# Bookkeeping

A decision opens a new level: the level's separator, learned-clause count, and decision literal
are recorded before the literal joins the trail.
The per-level stores are regrown on demand, as chronological backtracking may have shrunk them.
*/

use crate::{
    config::ValueHeuristic,
    context::{Context, ContextState},
    misc::log::targets,
    structures::literal::{CLiteral, Literal},
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// A decision was made, and a fresh level opened.
    Made,

    /// Every atom occurring in the formula has a value, so the formula is satisfiable.
    Exhausted,
}

impl Context {
    /// Chooses the next decision literal and opens a level for it, or reports the valuation
    /// complete.
    pub fn decide(&mut self) -> DecisionOk {
        // MINISAT is the only variable heuristic; the activity cursors settle the atom.
        let atom_db = &self.atom_db;
        let chosen = self
            .activity_db
            .next_unassigned(|atom| atom_db.value_of(atom).is_none());

        match chosen {
            None => {
                self.state = ContextState::Satisfiable;
                DecisionOk::Exhausted
            }

            Some(atom) => {
                let decision = match self.config.value_heuristic {
                    ValueHeuristic::PhaseSaving => {
                        CLiteral::new(atom, self.atom_db.previous_value_of(atom))
                    }
                    ValueHeuristic::LitScore => {
                        CLiteral::new(atom, self.activity_db.popular_polarity_of(atom))
                    }
                };

                self.trail.open_level(decision, self.counters.learned);
                self.assert_literal(decision, self.trail.level, None);
                self.counters.decisions += 1;
                log::info!(target: targets::DECISION, "Decided {decision} at level {}", self.trail.level);

                DecisionOk::Made
            }
        }
    }
}
