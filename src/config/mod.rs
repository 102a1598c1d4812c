/*!
Configuration of a context.

All configuration for a context is contained within a [Config], fixed before input is read.
Options carry their limits via [ConfigOption], so a CLI (or any other frontend) can echo sensible
diagnostics without duplicating them.
*/

mod config_option;
pub use config_option::ConfigOption;

mod heuristics;
pub use heuristics::{ValueHeuristic, VariableHeuristic};

/// The representation of variable activity.
pub type Activity = f64;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// Which variable decision heuristic to use.
    pub variable_heuristic: VariableHeuristic,

    /// Which value decision heuristic to use.
    pub value_heuristic: ValueHeuristic,

    /// Enable chronological backtracking.
    ///
    /// When disabled every conflict is followed by a non-chronological backtrack to the level at
    /// which the learned clause asserts.
    pub chronological_backtracking: ConfigOption<bool>,

    /// The decay factor for variable activity.
    ///
    /// The bump increment is multiplied by `1 / decay` after each conflict, so earlier bumps decay
    /// relative to later ones.
    pub variable_decay: ConfigOption<Activity>,

    /// The bound on variable activity; on exceeding it every score is divided by it.
    pub rescale_threshold: ConfigOption<Activity>,

    /// The initial (and post-ceiling) restart threshold, in learned clauses.
    pub restart_lower: ConfigOption<usize>,

    /// The ceiling of the restart threshold; itself grows by the multiplier when hit.
    pub restart_upper: ConfigOption<usize>,

    /// The factor by which the restart threshold (and its ceiling) grow.
    pub restart_multiplier: ConfigOption<f64>,

    /// The time limit for a solve, checked at the top of each driver iteration.
    /// Zero is no limit.
    pub time_limit: ConfigOption<std::time::Duration>,
}

impl Default for Config {
    /// The default configuration: phase saving, non-chronological backtracking, restarts from 100
    /// learned clauses with a rising ceiling, and no time limit.
    fn default() -> Self {
        Config {
            variable_heuristic: VariableHeuristic::Minisat,
            value_heuristic: ValueHeuristic::PhaseSaving,

            chronological_backtracking: ConfigOption {
                name: "chronological_backtracking",
                min: false,
                max: true,
                value: false,
            },

            variable_decay: ConfigOption {
                name: "variable_decay",
                min: 0.5,
                max: 1.0,
                value: 0.95,
            },

            rescale_threshold: ConfigOption {
                name: "rescale_threshold",
                min: 1e10,
                max: Activity::MAX,
                value: 1e100,
            },

            restart_lower: ConfigOption {
                name: "restart_lower",
                min: 1,
                max: usize::MAX,
                value: 100,
            },

            restart_upper: ConfigOption {
                name: "restart_upper",
                min: 1,
                max: usize::MAX,
                value: 1000,
            },

            restart_multiplier: ConfigOption {
                name: "restart_multiplier",
                min: 1.0,
                max: 10.0,
                value: 1.1,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: std::time::Duration::ZERO,
                max: std::time::Duration::MAX,
                value: std::time::Duration::ZERO,
            },
        }
    }
}
