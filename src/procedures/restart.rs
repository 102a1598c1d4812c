/*!
The restart controller.

# Schedule

Restarts follow a geometric schedule with a rising ceiling: each restart multiplies the threshold
by the multiplier, and when the threshold passes its ceiling the threshold returns to the lower
bound while the ceiling itself grows by the multiplier.
The effect is bursts of increasingly patient restarts, starting over a little higher each cycle.

A restart is triggered from a backtrack, when the clauses learned since the target level was
entered exceed the current threshold.

# What survives

A restart unassigns every atom valued above level zero and clears the trail, the separators, and
the decision stack.
Unit consequences at level zero keep their values, and learned clauses and activity scores are
untouched --- the point is to escape an unhelpful prefix of decisions, not to forget what the
prefix taught.
*/

use crate::{context::Context, misc::log::targets};

impl Context {
    /// Abandons the current decision prefix, rescheduling the next restart.
    pub fn restart(&mut self) {
        self.restart_threshold =
            (self.restart_threshold as f64 * self.config.restart_multiplier.value) as usize;
        if self.restart_threshold > self.restart_ceiling {
            self.restart_threshold = self.config.restart_lower.value;
            self.restart_ceiling =
                (self.restart_ceiling as f64 * self.config.restart_multiplier.value) as usize;
            log::info!(target: targets::RESTART, "New restart ceiling: {}", self.restart_ceiling);
        }
        log::info!(target: targets::RESTART, "Restart: new threshold {}", self.restart_threshold);

        self.counters.restarts += 1;

        for atom in 1..=(self.atom_db.count() as u32) {
            if self.atom_db.level_of(atom) > 0 {
                self.atom_db.drop_value(atom);
            }
        }

        self.trail.literals.clear();
        self.trail.q_head = 0;
        self.trail.reset();

        // The resume point does not really become zero: the next decision repositions at the top
        // of the activity map.
        self.activity_db.clear_resume();

        self.asserted_literal = None;
        self.asserted_antecedent = None;
    }
}
