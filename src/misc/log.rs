/*!
Log targets.

The library logs through the [log] facade and attaches a target to every call, one per subsystem:
the propagation engine, conflict analysis, the two backtrackers, the decision procedure, the
restart controller, clause storage, valuation changes, and DIMACS parsing.
A solve at trace level is verbose --- every assignment and watch move is reported --- so the
targets exist to narrow output to the subsystem under investigation, e.g.
`RUST_LOG=backtrack=trace` with [env_logger](https://docs.rs/env_logger).

No log implementation is bundled with the library; the CLI binary initialises one.
*/

/// The target attached to each [log]! call, by subsystem.
pub mod targets {
    pub const PROPAGATION: &str = "propagation";
    pub const ANALYSIS: &str = "analysis";
    pub const BACKTRACK: &str = "backtrack";
    pub const DECISION: &str = "decision";
    pub const RESTART: &str = "restart";
    pub const CLAUSE_DB: &str = "clause_db";
    pub const VALUATION: &str = "valuation";
    pub const PARSE: &str = "parse";
}
