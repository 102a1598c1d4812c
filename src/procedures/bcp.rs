/*!
Boolean constraint propagation.

# Overview

[bcp](crate::context::Context::bcp) drains the trail from the propagation head forward.
For each newly asserted literal its negation has become unsatisfied, and may have falsified a
watch.
So, the engine walks the watch list of the negation and, for each watching clause, tries to repair
the watch invariant through [next_not_false](crate::db::clause::DbClause::next_not_false): either
a replacement watch is found, or the clause has become unit and the other watch is asserted as an
implication, or the other watch is already satisfied and there is nothing to do, or no repair
exists and the clause conflicts with the valuation.

# The watch-list rewrite

Clauses which keep their watch at the falsified literal stay in its list; clauses which migrated
their watch move to the new literal's list.
The list is traversed from the end, with kept entries written into a buffer of the same size at a
descending index; the tail of the buffer then replaces the original list.
When a conflict is met mid-list every not-yet-visited entry is copied over as kept --- those
clauses have not been re-examined, and their watches must stand.
The order of untouched entries is preserved.

The list itself is taken out of the index for the traversal.
This keeps the borrow checker satisfied without aliasing tricks: appends during the traversal only
target *other* lists, as no clause migrates a watch to a literal which is unsatisfied --- and the
literal whose list is under traversal is exactly that.

# Implication levels

An implication is normally made at the current decision level.
With chronological backtracking enabled the implied literal is instead assigned at the highest
decision level among the supporting literals, which may be below the current level.

# Conflicts

A conflict above decision level zero is a learning opportunity, returned as an error carrying the
conflicting clause.
A conflict at decision level zero refutes the formula.
*/

use crate::{
    context::Context,
    db::clause::WatchUpdate,
    misc::log::targets,
    structures::literal::Literal,
    types::err::BCPError,
};

impl Context {
    /// Propagates every literal on the trail at or after the propagation head, to quiescence or
    /// conflict.
    ///
    /// Calling bcp twice in a row is equivalent to calling it once: the second call finds the
    /// head at the end of the trail and returns immediately.
    pub fn bcp(&mut self) -> Result<(), BCPError> {
        while self.trail.q_head < self.trail.literals.len() {
            let literal = self.trail.literals[self.trail.q_head];
            self.trail.q_head += 1;

            let falsified = literal.negate();
            debug_assert_eq!(self.atom_db.value_of_literal(falsified), Some(false));
            log::trace!(target: targets::PROPAGATION, "Propagating {literal}");

            let watchers = self.watch_db.take_watchers(falsified);
            let mut kept = vec![0; watchers.len()];
            let mut kept_from = watchers.len();

            let mut conflict = None;

            'watcher_loop: for (position, index) in watchers.iter().enumerate().rev() {
                let index = *index;
                let clause = self.clause_db.get_mut(index);

                let is_left_watch = clause.lw_literal() == falsified;
                let other_watch = match is_left_watch {
                    true => clause.rw_literal(),
                    false => clause.lw_literal(),
                };

                match clause.next_not_false(is_left_watch, other_watch, &self.atom_db) {
                    WatchUpdate::Moved(new_position) => {
                        let new_literal = clause.literal_at(new_position);
                        self.watch_db.watch(new_literal, index);
                        log::trace!(target: targets::PROPAGATION, "Clause {index} now watched by {new_literal}");
                    }

                    WatchUpdate::Satisfied => {
                        kept_from -= 1;
                        kept[kept_from] = index;
                    }

                    WatchUpdate::Asserting => {
                        kept_from -= 1;
                        kept[kept_from] = index;

                        let level = match self.config.chronological_backtracking.value {
                            false => self.trail.level,

                            // The highest level among the supporting literals, which may sit
                            // below the current level.
                            true => clause
                                .literals()
                                .iter()
                                .filter(|supporting| **supporting != other_watch)
                                .map(|supporting| self.atom_db.level_of(supporting.atom()))
                                .max()
                                .unwrap_or(0),
                        };

                        self.assert_literal(other_watch, level, Some(index));
                        log::trace!(target: targets::PROPAGATION, "Implication of clause {index}: {other_watch} @ {level}");
                    }

                    WatchUpdate::Conflict => {
                        kept_from -= 1;
                        kept[kept_from] = index;
                        conflict = Some(index);

                        // Entries not yet visited keep their watches, unexamined.
                        for unvisited in (0..position).rev() {
                            kept_from -= 1;
                            kept[kept_from] = watchers[unvisited];
                        }

                        log::trace!(target: targets::PROPAGATION, "Conflict with clause {index}");
                        break 'watcher_loop;
                    }
                }
            }

            self.watch_db.replace_watchers(falsified, kept.split_off(kept_from));

            if let Some(index) = conflict {
                match self.trail.level {
                    0 => return Err(BCPError::FundamentalConflict),
                    _ => return Err(BCPError::Conflict(index)),
                }
            }
        }

        Ok(())
    }
}
