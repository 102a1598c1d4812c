/*!
Recovery from a conflict, in two flavours.

# Non-chronological backtracking (NCB)

A backtrack from the current level to the level at which the learned clause asserts.
Every literal above the target level is unassigned, the trail and decision stack are truncated at
the target's boundary, and the asserting literal of the learned clause is asserted at the target
level with that clause as its antecedent.
Under NCB the trail is level-contiguous, so a level boundary is exactly a separator index.

As atoms are unassigned the decision resume point is lifted to the highest activity seen among
them, so the next decision restarts near the top of what was exposed.

# Chronological backtracking (CB)

A backtrack of (usually) a single level, leaving assignments from lower levels in place even when
they were made after the target level was opened.
The trail is rebuilt by filtering rather than truncation --- trail entries are no longer
level-contiguous --- and the structures this breaks are rebuilt:
- separators are recomputed by locating each stored decision literal on the rebuilt trail;
- the propagation head returns to zero, so BCP re-propagates every kept literal, the cheap
  invariant-preserving choice.

The asserting literal is asserted at the level computed by analysis, which may sit below the
backtrack target.

[backtrack_cb_preserve](crate::context::Context::backtrack_cb_preserve) is the pre-analysis
variant: it unwinds in the same way without asserting anything, used by the
[conflict handler](crate::procedures::conflict) before analysis, or in place of it.

# Local restarts

Both asserting variants first compare the clauses learned since the target level was entered
against the restart threshold, and hand over to the
[restart controller](crate::procedures::restart) when the threshold is exceeded.

# Literature

Chronological backtracking in a CDCL solver follows
[Chronological Backtracking](https://doi.org/10.1007/978-3-319-94144-8_7) (Nadel & Ryvchin,
SAT'18); the watch repair required on its account is discussed with the
[conflict handler](crate::procedures::conflict).
*/

use crate::{
    context::Context,
    db::LevelIndex,
    misc::log::targets,
    structures::literal::Literal,
};

impl Context {
    /// Backtracks to level `target`, unassigning every literal above it, and asserts the learned
    /// clause's literal at `target`.
    pub fn backtrack_ncb(&mut self, target: LevelIndex) {
        log::trace!(target: targets::BACKTRACK, "NCB to level {target} from {}", self.trail.level);

        if self.trail.separators.len() <= target + 1 {
            self.trail.separators.resize(target + 2, self.trail.literals.len());
        }
        if self.trail.conflicts_at_level.len() <= target {
            self.trail.conflicts_at_level.resize(target + 1, self.counters.learned);
        }

        if target > 0
            && self.counters.learned - self.trail.conflicts_at_level[target] > self.restart_threshold
        {
            self.restart();
            return;
        }

        let level_end = self.trail.separators[target + 1];
        for index in level_end..self.trail.literals.len() {
            let atom = self.trail.literals[index].atom();
            if self.atom_db.level_of(atom) > 0 {
                self.activity_db.lift_resume(atom);
                self.atom_db.drop_value(atom);
            }
        }
        self.activity_db.request_reset();

        self.trail.literals.truncate(level_end);
        self.trail.q_head = self.trail.literals.len();
        self.trail.level = target;
        self.trail.decision_literals.truncate(target + 1);

        if let Some(asserted) = self.asserted_literal.take() {
            let antecedent = self.asserted_antecedent.take();
            self.assert_literal(asserted, target, antecedent);
        }

        if self.trail.separators.len() <= target + 1 {
            self.trail.separators.resize(target + 2, self.trail.literals.len());
        }
        self.trail.separators[target + 1] = self.trail.literals.len();
    }

    /// Backtracks chronologically to level `target`, and asserts the learned clause's literal at
    /// `asserting_level` --- the level computed by analysis, possibly below the target.
    pub fn backtrack_cb(&mut self, target: LevelIndex, asserting_level: LevelIndex) {
        log::trace!(target: targets::BACKTRACK, "CB to level {target} from {}, asserting at {asserting_level}", self.trail.level);

        if target > 0
            && self.trail.conflicts_at_level.len() > target
            && self.counters.learned - self.trail.conflicts_at_level[target] > self.restart_threshold
        {
            self.restart();
            return;
        }

        self.unwind_keeping(target);

        if let Some(asserted) = self.asserted_literal.take() {
            let antecedent = self.asserted_antecedent.take();
            self.assert_literal(asserted, asserting_level, antecedent);
        }

        self.recompute_separators();
    }

    /// Backtracks chronologically to level `target` without asserting anything.
    ///
    /// Used before (or instead of) analysis, when the conflicting clause itself settles what
    /// happens next.
    pub fn backtrack_cb_preserve(&mut self, target: LevelIndex) {
        log::trace!(target: targets::BACKTRACK, "CB (preserving) to level {target} from {}", self.trail.level);

        self.unwind_keeping(target);
        self.recompute_separators();
    }

    /// Rebuilds the trail keeping literals at levels at or below `target`, unassigning the rest.
    ///
    /// Level-zero units always survive.
    /// The propagation head returns to zero so every kept literal is re-propagated.
    fn unwind_keeping(&mut self, target: LevelIndex) {
        let literals = std::mem::take(&mut self.trail.literals);
        let mut kept = Vec::with_capacity(literals.len());

        for literal in literals {
            let atom = literal.atom();
            if self.atom_db.level_of(atom) <= target {
                kept.push(literal);
            } else {
                self.activity_db.lift_resume(atom);
                self.atom_db.drop_value(atom);
            }
        }

        self.trail.literals = kept;
        self.trail.q_head = 0;
        self.trail.level = target;
        self.trail.decision_literals.truncate(target + 1);
        self.activity_db.request_reset();
    }

    /// Recomputes the separators of a level-interleaved trail, by locating each stored decision
    /// literal on it.
    pub(crate) fn recompute_separators(&mut self) {
        self.trail.separators.clear();
        self.trail.conflicts_at_level.clear();
        self.trail.separators.push(0);
        self.trail.conflicts_at_level.push(0);

        let mut search_from = 0;
        for level in 1..=self.trail.level {
            let decision = self.trail.decision_literals.get(level).copied().flatten();

            let mut position = self.trail.literals.len();
            for index in search_from..self.trail.literals.len() {
                if Some(self.trail.literals[index]) == decision {
                    position = index;
                    break;
                }
            }

            self.trail.separators.push(position);
            self.trail.conflicts_at_level.push(self.counters.learned);
            search_from = match position < self.trail.literals.len() {
                true => position + 1,
                false => self.trail.literals.len(),
            };
        }

        let end = self.trail.literals.len();
        if self.trail.separators.len() <= self.trail.level + 1 {
            self.trail.separators.resize(self.trail.level + 2, end);
        } else {
            self.trail.separators[self.trail.level + 1] = end;
        }
    }
}
