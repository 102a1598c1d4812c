/*!
Validation of a satisfying assignment.

A solver bug can report satisfiable with a valuation which fails to satisfy the formula; checking
is cheap, so the produced assignment is never taken on trust.
Every stored clause must contain a satisfied literal, and every recorded unit clause must be
satisfied.
Validation failure is fatal for the caller, with a distinct exit code at the CLI.

An atom with no value after a satisfiable solve is possible --- exactly when the atom occurs in no
clause --- and noted rather than failed.
*/

use crate::{
    context::Context,
    misc::log::targets,
    types::err::ValidationError,
};

impl Context {
    /// Checks the current valuation satisfies every stored clause and every unit clause.
    pub fn validate_assignment(&self) -> Result<(), ValidationError> {
        for atom in self.atom_db.atoms() {
            if self.atom_db.value_of(atom).is_none() {
                log::warn!(target: targets::VALUATION, "Atom {atom} has no value (it occurs in no clause)");
            }
        }

        for (index, clause) in self.clause_db.all_clauses() {
            let satisfied = clause
                .literals()
                .iter()
                .any(|literal| self.atom_db.value_of_literal(*literal) == Some(true));
            if !satisfied {
                return Err(ValidationError::UnsatisfiedClause(index));
            }
        }

        for literal in self.clause_db.unaries() {
            if self.atom_db.value_of_literal(*literal) != Some(true) {
                return Err(ValidationError::UnsatisfiedUnit);
            }
        }

        Ok(())
    }
}
