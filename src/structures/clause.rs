/*!
Clauses, as sequences of literals.

A clause is a disjunction of literals.
During input and analysis clauses are built as plain vectors of literals; once a clause of length
two or more is added to a context it is wrapped in a [DbClause](crate::db::clause::DbClause) which
pairs the literal vector with its two watched positions.
Unit clauses are never stored this way — see the notes on the
[clause database](crate::db::clause).
*/

use crate::structures::literal::{CLiteral, Literal};

/// The canonical clause: a vector of canonical literals.
pub type CClause = Vec<CLiteral>;

/// Generic operations on a clause.
pub trait Clause {
    /// The clause as a DIMACS string, terminated with 0.
    fn as_dimacs(&self) -> String;
}

impl Clause for [CLiteral] {
    fn as_dimacs(&self) -> String {
        let mut string = String::new();
        for literal in self {
            string.push_str(&format!("{} ", literal.as_int()));
        }
        string.push('0');
        string
    }
}
