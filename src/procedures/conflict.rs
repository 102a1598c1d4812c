/*!
Conflict handling: what to do with a conflicting clause before (or instead of) analysis.

# Overview

Without chronological backtracking every conflict goes to
[analysis](crate::procedures::analysis).
With it, the decision levels of the conflicting clause's literals are inspected first:

- *The conflict is already a unit, one level down.*
  When exactly one literal sits at the maximum level, backtracking to the second-highest level
  leaves the clause asserting that literal --- no analysis needed.
  The literal is asserted with the clause as antecedent and BCP resumes.

- *Several literals share the maximum level.*
  The conflict belongs to that level: backtrack chronologically to it, then analyse.

- Otherwise, analysis proceeds at the current level.

# Watched literals under chronological backtracking

Plain two-watched-literal invariants are preserved only by non-chronological backtracking.
After undoing a suffix of the trail, a conflicting clause's two watches may both sit at levels at
or below the backtrack level (one of them false), while a third literal --- the would-be unit ---
sat at a higher level and is now unassigned.
So, before re-asserting in the first case above, the watch invariant is restored on the clause:
if the asserted literal is not watched, the (falsified) left watch is replaced by it, updating
both the clause's watch pointer and the watch index.
Skipping this repair corrupts propagation; see *Backing Backtracking* (Möhle & Biere, SAT'19).

# Fundamental conflicts

A clause falsified entirely at level zero refutes the formula.
Under chronological backtracking such a clause can surface while the current level is above zero
(the propagation head returns to zero after a backtrack), and is reported as unsatisfiable
directly rather than analysed.
*/

use crate::{
    context::Context,
    db::ClauseIdx,
    misc::log::targets,
    structures::literal::{CLiteral, Literal},
    types::err,
};

/// What a conflict, once inspected, asks of the solve loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConflictOk {
    /// The conflict was resolved without learning; continue with BCP.
    Continue,

    /// The conflict requires analysis.
    Analyze,

    /// The conflict is fundamental; the formula is unsatisfiable.
    Fundamental,
}

impl Context {
    /// Inspects the conflicting clause at `conflict` and either resolves it by a chronological
    /// backtrack or hands it to analysis.
    pub fn handle_conflict(&mut self, conflict: ClauseIdx) -> Result<ConflictOk, err::ErrorKind> {
        if !self.config.chronological_backtracking.value {
            return Ok(ConflictOk::Analyze);
        }

        // A census of the conflicting clause's decision levels.
        let mut max_level = 0;
        let mut second_level = 0;
        let mut max_count = 0;
        let mut max_level_literal: Option<CLiteral> = None;

        for literal in self.clause_db.get(conflict).literals() {
            let level = self.atom_db.level_of(literal.atom());
            if level > max_level {
                second_level = max_level;
                max_level = level;
                max_count = 1;
                max_level_literal = Some(*literal);
            } else if level == max_level {
                max_count += 1;
            } else if level > second_level {
                second_level = level;
            }
        }

        if max_level == 0 {
            log::info!(target: targets::BACKTRACK, "Clause {conflict} is falsified at level 0");
            return Ok(ConflictOk::Fundamental);
        }

        if max_count == 1 && max_level > second_level {
            // Backtracking to the second level leaves the clause unit.
            let Some(asserting) = max_level_literal else {
                return Ok(ConflictOk::Analyze);
            };

            self.backtrack_cb_preserve(second_level);

            // Restore the watch invariant: both watches may be falsified at levels at or below
            // the backtrack level, with `asserting` the natural watch.
            let clause = self.clause_db.get_mut(conflict);
            if asserting != clause.lw_literal() && asserting != clause.rw_literal() {
                let position = clause
                    .literals()
                    .iter()
                    .position(|literal| *literal == asserting);

                if let Some(position) = position {
                    let displaced = clause.lw_literal();
                    clause.set_lw(position);
                    self.watch_db.unwatch(displaced, conflict);
                    self.watch_db.watch(asserting, conflict);
                    log::trace!(target: targets::BACKTRACK, "Clause {conflict}: watch moved from {displaced} to {asserting}");
                }
            }

            self.assert_literal(asserting, second_level, Some(conflict));
            log::trace!(target: targets::BACKTRACK, "Conflict clause {conflict} asserts {asserting} at level {second_level}");

            return Ok(ConflictOk::Continue);
        }

        if max_count > 1 {
            // The conflict belongs to the maximum level; analysis takes place there.
            self.backtrack_cb_preserve(max_level);
        }

        Ok(ConflictOk::Analyze)
    }
}
