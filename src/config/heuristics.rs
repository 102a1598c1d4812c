/*!
Decision heuristics.

Two decisions are made when branching: which atom to value, and which value to give it.
The variable heuristic settles the former, the value heuristic the latter.
*/

/// Variants of the variable decision heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariableHeuristic {
    /// Branch on the unassigned atom of highest activity, MiniSAT style.
    ///
    /// Activity is seeded by occurrence counts at input, bumped for each variable entering a
    /// learned clause, and decayed (by growing the bump increment) each conflict.
    Minisat,
}

impl std::fmt::Display for VariableHeuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Minisat => write!(f, "MINISAT"),
        }
    }
}

impl std::str::FromStr for VariableHeuristic {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MINISAT" | "minisat" => Ok(Self::Minisat),
            _ => Err(()),
        }
    }
}

/// Variants of the value decision heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueHeuristic {
    /// Value the chosen atom as it was most recently valued (false, if never valued).
    PhaseSaving,

    /// Value the chosen atom so the literal with the higher occurrence count is satisfied.
    LitScore,
}

impl std::fmt::Display for ValueHeuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PhaseSaving => write!(f, "PHASESAVING"),
            Self::LitScore => write!(f, "LITSCORE"),
        }
    }
}

impl std::str::FromStr for ValueHeuristic {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PHASESAVING" | "phasesaving" => Ok(Self::PhaseSaving),
            "LITSCORE" | "litscore" => Ok(Self::LitScore),
            _ => Err(()),
        }
    }
}
