/*!
The clause database: every stored clause, and the unary list.

# Stored clauses

Clauses of length two or more --- original and learned alike --- are stored as [DbClause]s: the
literal vector together with the two watched positions `lw` and `rw`.
The store only ever appends, so a [ClauseIdx] is stable for the lifetime of the solver and is used
as the antecedent record for implied atoms.

# Unit clauses

Unit clauses are *not* stored alongside the others.
A unit is asserted at decision level zero and retained in a side list purely for
[assignment validation](crate::procedures::validate).
In particular, when conflict analysis produces a clause of size one the asserting literal is
re-asserted at level zero after backtracking, rather than inserted into the store.

# Watched literals

The two watch positions of a clause are distinct positions holding distinct literals.
While a clause is watched cleanly neither watched literal is unsatisfied; restoring this invariant
after an assignment is the job of [next_not_false](DbClause::next_not_false), the per-clause
decision procedure of [BCP](crate::procedures::bcp).
*/

use crate::{
    db::atom::AtomDB,
    structures::{clause::CClause, literal::CLiteral},
};

/// The result of searching a clause for a replacement watch, relative to some valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchUpdate {
    /// A replacement was found, and now holds the watch at the returned position.
    Moved(usize),

    /// No replacement, and the other watched literal is unsatisfied.
    Conflict,

    /// No replacement, and the other watched literal has no value — the clause asserts it.
    Asserting,

    /// No replacement, and the other watched literal is satisfied.
    Satisfied,
}

/// A stored clause: a sequence of two or more literals, and two watched positions.
pub struct DbClause {
    /// The literals of the clause.
    literals: CClause,

    /// The left watched position.
    lw: usize,

    /// The right watched position.
    rw: usize,
}

impl DbClause {
    /// A stored clause over `literals` watched at positions `lw` and `rw`.
    pub fn new(literals: CClause, lw: usize, rw: usize) -> Self {
        debug_assert!(literals.len() > 1);
        debug_assert!(lw != rw);
        debug_assert!(literals[lw] != literals[rw]);
        DbClause { literals, lw, rw }
    }

    /// The size of the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// The literals of the clause.
    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    /// The literal at `position`.
    pub fn literal_at(&self, position: usize) -> CLiteral {
        self.literals[position]
    }

    /// The left watched position.
    pub fn lw(&self) -> usize {
        self.lw
    }

    /// The right watched position.
    pub fn rw(&self) -> usize {
        self.rw
    }

    /// The literal at the left watched position.
    pub fn lw_literal(&self) -> CLiteral {
        self.literals[self.lw]
    }

    /// The literal at the right watched position.
    pub fn rw_literal(&self) -> CLiteral {
        self.literals[self.rw]
    }

    /// Points the left watch at `position`.
    pub fn set_lw(&mut self, position: usize) {
        self.lw = position;
    }

    /// Searches for a literal to watch in place of a falsified watch, updating the watched
    /// position on success.
    ///
    /// - For a binary clause there is nothing to swap to, so the scan is skipped.
    /// - Otherwise the first literal which is not unsatisfied and is not `other_watch` takes the
    ///   watch on the falsified side, and [Moved](WatchUpdate::Moved) carries its position.
    /// - With no replacement the status of `other_watch` settles the clause: unsatisfied is a
    ///   [Conflict](WatchUpdate::Conflict), unvalued means the clause is
    ///   [Asserting](WatchUpdate::Asserting) `other_watch`, and satisfied is
    ///   [Satisfied](WatchUpdate::Satisfied).
    pub fn next_not_false(
        &mut self,
        is_left_watch: bool,
        other_watch: CLiteral,
        atoms: &AtomDB,
    ) -> WatchUpdate {
        if self.literals.len() > 2 {
            for (position, literal) in self.literals.iter().enumerate() {
                if atoms.value_of_literal(*literal) != Some(false) && *literal != other_watch {
                    match is_left_watch {
                        true => self.lw = position,
                        false => self.rw = position,
                    }
                    return WatchUpdate::Moved(position);
                }
            }
        }

        match atoms.value_of_literal(other_watch) {
            Some(false) => WatchUpdate::Conflict,
            None => WatchUpdate::Asserting,
            Some(true) => WatchUpdate::Satisfied,
        }
    }
}

/// The clause database.
pub struct ClauseDB {
    /// Every stored (non-unit) clause, originals first, learned clauses appended as found.
    clauses: Vec<DbClause>,

    /// The literals of unit clauses, original and learned, kept for validation.
    unaries: Vec<CLiteral>,

    /// A count of clauses stored from the input formula.
    original_count: usize,
}

impl ClauseDB {
    /// A database with capacity for `clause_count` clauses.
    pub fn new(clause_count: usize) -> Self {
        ClauseDB {
            clauses: Vec::with_capacity(clause_count),
            unaries: Vec::new(),
            original_count: 0,
        }
    }

    /// Stores a clause watched at positions `lw` and `rw`, returning its index.
    ///
    /// The caller registers the watched literals with the watch index.
    pub fn store(&mut self, literals: CClause, lw: usize, rw: usize) -> super::ClauseIdx {
        let index = self.clauses.len();
        self.clauses.push(DbClause::new(literals, lw, rw));
        index
    }

    /// Notes every clause stored so far came from the input formula.
    pub fn seal_originals(&mut self) {
        self.original_count = self.clauses.len();
    }

    /// Records the literal of a unit clause.
    pub fn store_unary(&mut self, literal: CLiteral) {
        self.unaries.push(literal);
    }

    /// The stored clause at `index`.
    pub fn get(&self, index: super::ClauseIdx) -> &DbClause {
        &self.clauses[index]
    }

    /// The stored clause at `index`, mutably.
    pub fn get_mut(&mut self, index: super::ClauseIdx) -> &mut DbClause {
        &mut self.clauses[index]
    }

    /// A count of every stored clause.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of stored clauses from the input formula.
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// The stored clauses, by index.
    pub fn all_clauses(&self) -> impl Iterator<Item = (super::ClauseIdx, &DbClause)> {
        self.clauses.iter().enumerate()
    }

    /// The literals of the recorded unit clauses.
    pub fn unaries(&self) -> &[CLiteral] {
        &self.unaries
    }
}
