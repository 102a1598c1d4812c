/*!
Analysis of a conflicting clause.

Takes the index of a clause which is unsatisfied on the current valuation and learns an asserting
clause by resolution, returning the backtrack level.

# Overview

The learned clause is the first unique implication point (first-UIP) clause: resolution is applied
to the conflicting clause, against the antecedents of current-level variables in reverse trail
order, exactly until a single current-level variable remains.

Concretely, a count is kept of marked variables at the current level (the candidates to resolve
on), while variables from earlier levels enter the clause under construction directly.
The trail is walked backwards for the most recently assigned marked current-level variable; while
more than one candidate remains, the walk's variable is the resolution pivot and its antecedent is
the next clause to merge.
When exactly one remains, that variable is the first UIP: the negation of its literal is appended
as the asserting literal.

The learned clause watches the asserting literal (at the last position) and the literal of maximum
non-current level (recorded as positions were assigned) --- the latter level is the backtrack
level.

Resolution removes the pivot in a single pass, so termination rests on no clause holding a
duplicate literal; clause addition deduplicates to guarantee this.

Each variable entering the learned clause bumps its activity (and, under LITSCORE, its literal's
occurrence count), and the bump increment grows by `1 / decay` per conflict.

A learned clause of size one is not stored: its literal is recorded on the unary list, and
re-asserted at level zero once the backtracker unwinds the trail.

# Literature

This is Alg. 1 from [HaifaSat: a SAT solver based on an Abstraction/Refinement
model](https://doi.org/10.1007/11527695_12).
*/

use crate::{
    config::ValueHeuristic,
    context::Context,
    db::{ClauseIdx, LevelIndex},
    misc::log::targets,
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, AnalysisError},
};

impl Context {
    /// Learns the first-UIP clause of the conflict given by `conflict`, returning the backtrack
    /// level.
    ///
    /// The asserting literal is left in [asserted_literal](Context), for the backtracker to
    /// re-assert, with [asserted_antecedent](Context) as its antecedent record.
    pub fn analyze(&mut self, conflict: ClauseIdx) -> Result<LevelIndex, err::ErrorKind> {
        let level = self.trail.level;
        log::info!(target: targets::ANALYSIS, "Analysis of clause {conflict} at level {level}");

        let mut resolve_count = 0;
        let mut learned: CClause = Vec::new();
        let mut backtrack_level = 0;
        // The position in the learned clause of the first literal attaining the maximum
        // non-current level; the watch aside the asserting literal.
        let mut watch_position = 0;

        let mut current: CClause = self.clause_db.get(conflict).literals().to_vec();
        let mut trail_index = self.trail.literals.len();

        let uip: CLiteral = loop {
            for literal in &current {
                let atom = literal.atom();
                if self.atom_db.is_marked(atom) {
                    continue;
                }
                self.atom_db.mark(atom);

                if self.atom_db.level_of(atom) == level {
                    resolve_count += 1;
                } else {
                    // Variables from previous decision levels enter the learned clause.
                    learned.push(*literal);
                    self.activity_db.bump(atom);
                    if self.config.value_heuristic == ValueHeuristic::LitScore {
                        self.activity_db.bump_literal(*literal);
                    }

                    let literal_level = self.atom_db.level_of(atom);
                    if literal_level > backtrack_level {
                        backtrack_level = literal_level;
                        watch_position = learned.len() - 1;
                    }
                }
            }

            // The most recently assigned marked variable at the current level.
            // With chronological backtracking the trail interleaves levels, so marked variables
            // from other levels are passed over rather than stopped on.
            let pivot = loop {
                if trail_index == 0 {
                    return Err(err::ErrorKind::from(AnalysisError::Exhausted));
                }
                trail_index -= 1;
                let candidate = self.trail.literals[trail_index];
                debug_assert!(self.atom_db.level_of(candidate.atom()) <= level);
                if self.atom_db.is_marked(candidate.atom())
                    && self.atom_db.level_of(candidate.atom()) == level
                {
                    break candidate;
                }
            };

            self.atom_db.unmark(pivot.atom());
            resolve_count -= 1;
            if resolve_count == 0 {
                break pivot;
            }

            let antecedent = match self.atom_db.antecedent_of(pivot.atom()) {
                Some(antecedent) => antecedent,
                None => return Err(err::ErrorKind::from(AnalysisError::MissingAntecedent)),
            };

            // The antecedent, with the pivot resolved away.
            current = self
                .clause_db
                .get(antecedent)
                .literals()
                .iter()
                .copied()
                .filter(|resolvent| *resolvent != pivot)
                .collect();
        };

        for literal in &learned {
            self.atom_db.unmark(literal.atom());
        }

        let asserted = uip.negate();
        learned.push(asserted);
        log::info!(target: targets::ANALYSIS, "UIP {uip}, learned clause asserting {asserted} at level {backtrack_level}");

        self.activity_db.decay_on_conflict();
        self.counters.learned += 1;
        if self.counters.learned % 1000 == 0 {
            log::info!(target: targets::ANALYSIS, "Learned: {} clauses", self.counters.learned);
        }

        self.asserted_literal = Some(asserted);

        if learned.len() == 1 {
            self.clause_db.store_unary(asserted);
            self.asserted_antecedent = None;
        } else {
            let rw = learned.len() - 1;
            let index = self.clause_db.store(learned, watch_position, rw);
            let stored = self.clause_db.get(index);
            let (lw_literal, rw_literal) = (stored.lw_literal(), stored.rw_literal());
            self.watch_db.watch(lw_literal, index);
            self.watch_db.watch(rw_literal, index);
            self.asserted_antecedent = Some(index);
        }

        Ok(backtrack_level)
    }
}
