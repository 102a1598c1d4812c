/*!
Determines the satisfiability of the formula in a context.

# Overview

The solve loop alternates propagation and decision:

```none
          +--------+
  +-------| decide |-----> satisfiable, if no unassigned atom remains
  |       +--------+
  |            ⌃
  |            | quiescent
  |            |
  ⌄        +-------+
--+------->|  bcp  |-----> unsatisfiable, on a conflict at level zero
  ⌃        +-------+
  |            |
  |            | conflict
  |            ⌄
  |    +-----------------+      +---------+     +-----------+
  +----| handle_conflict |----->| analyze |---->| backtrack |
  |    +-----------------+      +---------+     +-----+-----+
  |            |                                      |
  +------------+--------------------------------------+
```

Each iteration begins with a poll of the time budget --- the only external event of a solve ---
and cancellation is cooperative at exactly this point.

[BCP](crate::procedures::bcp) runs to quiescence.
A conflict at level zero refutes the formula.
Any other conflict goes to the [conflict handler](crate::procedures::conflict), which under
chronological backtracking may resolve it outright; otherwise
[analysis](crate::procedures::analysis) learns a clause and the
[backtracker](crate::procedures::backtrack) unwinds --- chronologically to the previous level when
enabled and the asserting level is above zero, non-chronologically to the asserting level
otherwise.

When propagation is quiescent a [decision](crate::procedures::decision) is made, and the formula
is satisfiable once no unassigned atom remains.

# Example

```rust
# use tern_sat::config::Config;
# use tern_sat::context::Context;
# use tern_sat::reports::Report;
let mut ctx = Context::from_config(Config::default());
ctx.initialise(3, 3);

assert!(ctx.add_clause(vec![1.into(), 2.into()]).is_ok());
assert!(ctx.add_clause(vec![(-1).into(), 2.into()]).is_ok());
assert!(ctx.add_clause(vec![(-2).into(), 3.into()]).is_ok());

assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
assert_eq!(ctx.atom_db.value_of(2), Some(true));
assert_eq!(ctx.atom_db.value_of(3), Some(true));
```
*/

use crate::{
    context::{Context, ContextState},
    procedures::{conflict::ConflictOk, decision::DecisionOk},
    reports::Report,
    types::err::{self, BCPError},
};

impl Context {
    /// Determines the satisfiability of the formula of the context, within the configured time
    /// budget.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        match self.state {
            ContextState::Satisfiable | ContextState::Unsatisfiable => {
                return Ok(self.report());
            }
            ContextState::Input | ContextState::Solving => {
                self.state = ContextState::Solving;
            }
        }

        let timer = std::time::Instant::now();
        let time_limit = self.config.time_limit.value;

        'solve_loop: loop {
            self.counters.iterations += 1;
            self.counters.time = timer.elapsed();
            if !time_limit.is_zero() && self.counters.time > time_limit {
                return Ok(Report::Timeout);
            }

            'bcp_loop: loop {
                match self.bcp() {
                    Ok(()) => break 'bcp_loop,

                    Err(BCPError::FundamentalConflict) => {
                        self.state = ContextState::Unsatisfiable;
                        break 'solve_loop;
                    }

                    Err(BCPError::Conflict(conflict)) => {
                        match self.handle_conflict(conflict)? {
                            ConflictOk::Continue => continue 'bcp_loop,

                            ConflictOk::Fundamental => {
                                self.state = ContextState::Unsatisfiable;
                                break 'solve_loop;
                            }

                            ConflictOk::Analyze => {
                                let asserting_level = self.analyze(conflict)?;

                                if self.config.chronological_backtracking.value
                                    && asserting_level > 0
                                {
                                    let target = self.trail.level.saturating_sub(1);
                                    self.backtrack_cb(target, asserting_level);
                                } else {
                                    self.backtrack_ncb(asserting_level);
                                }

                                continue 'bcp_loop;
                            }
                        }
                    }
                }
            }

            match self.decide() {
                DecisionOk::Made => continue 'solve_loop,
                DecisionOk::Exhausted => break 'solve_loop,
            }
        }

        self.counters.time = timer.elapsed();
        Ok(self.report())
    }
}
