/*!
The trail: assignments in the order they were made, with per-level bookkeeping.

The trail is an append-only sequence of the literals of the current (partial) valuation.
A propagation head `q_head` marks how far [BCP](crate::procedures::bcp) has consumed; literals
before the head have been propagated.

Per decision level *d* the trail keeps:
- `separators[d]`, the trail index at which level *d* began, so under non-chronological
  backtracking the literals of level *d* are `literals[separators[d]..separators[d + 1])`.
  `separators[0] = 0`, and level 0 holds the consequences of unit clauses.
- `conflicts_at_level[d]`, the learned-clause count on entering the level, compared against the
  restart threshold by the [backtracker](crate::procedures::backtrack).
- `decision_literals[d]`, the literal decided at the level (index 0 unused), used to reconstruct
  separators after a chronological backtrack leaves the trail level-interleaved.
*/

use crate::{db::LevelIndex, structures::literal::CLiteral};

/// The trail and decision stack.
pub struct Trail {
    /// The assigned literals, in assignment order.
    pub literals: Vec<CLiteral>,

    /// The propagation head: literals before the head have been propagated.
    pub q_head: usize,

    /// The trail index at which each decision level began.
    pub separators: Vec<usize>,

    /// The learned-clause count on entering each decision level.
    pub conflicts_at_level: Vec<usize>,

    /// The literal decided at each decision level, index 0 unused.
    pub decision_literals: Vec<Option<CLiteral>>,

    /// The current decision level.
    pub level: LevelIndex,

    /// The highest decision level seen.
    pub max_level: LevelIndex,
}

impl Trail {
    pub fn new() -> Self {
        let mut trail = Trail {
            literals: Vec::new(),
            q_head: 0,
            separators: Vec::new(),
            conflicts_at_level: Vec::new(),
            decision_literals: Vec::new(),
            level: 0,
            max_level: 0,
        };
        trail.reset();
        trail
    }

    /// Resets the per-level bookkeeping to level zero.
    /// Invoked initially and on every restart; the literal vector is cleared by the caller.
    pub fn reset(&mut self) {
        self.separators.clear();
        self.conflicts_at_level.clear();
        self.decision_literals.clear();
        self.separators.push(0);
        self.conflicts_at_level.push(0);
        self.decision_literals.push(None);
        self.level = 0;
    }

    /// Opens a new decision level for `decision`, noting `num_learned` for the restart check.
    ///
    /// Growth guards cover the case where chronological backtracking shrank the per-level stores
    /// below the new level.
    pub fn open_level(&mut self, decision: CLiteral, num_learned: usize) {
        self.level += 1;
        if self.level > self.max_level {
            self.max_level = self.level;
        }

        if self.separators.len() <= self.level {
            self.separators.resize(self.level + 1, self.literals.len());
        }
        if self.conflicts_at_level.len() <= self.level {
            self.conflicts_at_level.resize(self.level + 1, num_learned);
        }
        self.separators[self.level] = self.literals.len();
        self.conflicts_at_level[self.level] = num_learned;

        if self.decision_literals.len() <= self.level {
            self.decision_literals.resize(self.level + 1, None);
        }
        self.decision_literals[self.level] = Some(decision);
    }

    /// The trail index at which `level` began, or the end of the trail for unopened levels.
    pub fn level_start(&self, level: LevelIndex) -> usize {
        match self.separators.get(level) {
            Some(start) => *start,
            None => self.literals.len(),
        }
    }
}

impl Default for Trail {
    fn default() -> Self {
        Trail::new()
    }
}

#[cfg(test)]
mod trail_tests {
    use super::*;
    use crate::structures::literal::Literal;

    #[test]
    fn levels_window_the_trail() {
        let mut trail = Trail::new();
        trail.literals.push(CLiteral::new(1, true));

        trail.open_level(CLiteral::new(2, true), 0);
        trail.literals.push(CLiteral::new(2, true));
        trail.literals.push(CLiteral::new(3, false));

        assert_eq!(trail.level, 1);
        assert_eq!(trail.level_start(1), 1);
        assert_eq!(trail.level_start(2), 3);
        assert_eq!(&trail.literals[trail.level_start(1)..], &[CLiteral::new(2, true), CLiteral::new(3, false)]);
    }
}
