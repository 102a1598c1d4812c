use std::time::Duration;

/// Counts for various things which count, roughly.
pub struct Counters {
    /// A count of every assignment made during a solve.
    pub assignments: usize,

    /// A count of all decisions made.
    pub decisions: usize,

    /// A count of clauses learned through conflict analysis.
    pub learned: usize,

    /// The number of restarts through a solve.
    pub restarts: usize,

    /// The total number of iterations through the solve loop.
    pub iterations: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            assignments: 0,
            decisions: 0,
            learned: 0,
            restarts: 0,
            iterations: 0,
            time: Duration::ZERO,
        }
    }
}
