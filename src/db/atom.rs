/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- A current (often partial) valuation, and for each atom the value it most recently held (used by
  phase saving, initialised to false).
- A record of which decision level an atom was valued on.
- For implied atoms, the antecedent: the index of the clause which forced the value.
- A `marked` flag per atom, used transiently by [conflict analysis](crate::procedures::analysis).

The database is indexed directly by atoms; index 0 is reserved and unused.
*/

use crate::{
    db::{ClauseIdx, LevelIndex},
    misc::log::targets,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// The atom database.
pub struct AtomDB {
    /// A current (often partial) valuation, indexed by atoms.
    valuation: Vec<Option<bool>>,

    /// The value each atom most recently held, indexed by atoms.
    previous_value: Vec<bool>,

    /// The decision level each atom was valued on, indexed by atoms.
    /// Zero for unassigned atoms and for unit consequences.
    decision_level: Vec<LevelIndex>,

    /// The clause which forced the value of an atom, indexed by atoms.
    /// [None] for decisions, units, and unassigned atoms.
    antecedent: Vec<Option<ClauseIdx>>,

    /// Per-atom marks, used transiently by conflict analysis.
    marked: Vec<bool>,
}

impl AtomDB {
    /// A database over atoms 1..=`count`.
    pub fn new(count: usize) -> Self {
        AtomDB {
            valuation: vec![None; count + 1],
            previous_value: vec![false; count + 1],
            decision_level: vec![0; count + 1],
            antecedent: vec![None; count + 1],
            marked: vec![false; count + 1],
        }
    }

    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.valuation.len().saturating_sub(1)
    }

    /// The value of an atom on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation[atom as usize]
    }

    /// The status of a literal on the current valuation.
    ///
    /// [Some]\(true\) if the literal is satisfied, [Some]\(false\) if unsatisfied, and [None] if
    /// the atom of the literal has no value.
    pub fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.valuation[literal.atom() as usize].map(|value| value == literal.polarity())
    }

    /// The value an atom most recently held.
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous_value[atom as usize]
    }

    /// Values the atom of `literal` to the polarity of `literal` at `level`, with `antecedent` as
    /// the clause which forced the value, if any.
    ///
    /// The previous value of the atom is updated in step, for phase saving.
    pub fn set_value(&mut self, literal: CLiteral, level: LevelIndex, antecedent: Option<ClauseIdx>) {
        let atom = literal.atom() as usize;
        self.valuation[atom] = Some(literal.polarity());
        self.previous_value[atom] = literal.polarity();
        self.decision_level[atom] = level;
        self.antecedent[atom] = antecedent;
    }

    /// Clears the value (and level and antecedent) of an atom.
    /// The previous value is kept, for phase saving.
    pub fn drop_value(&mut self, atom: Atom) {
        log::trace!(target: targets::VALUATION, "Cleared atom: {atom}");
        let atom = atom as usize;
        self.valuation[atom] = None;
        self.decision_level[atom] = 0;
        self.antecedent[atom] = None;
    }

    /// The decision level on which an atom was valued.
    /// Zero if the atom is unassigned, or a unit consequence.
    pub fn level_of(&self, atom: Atom) -> LevelIndex {
        self.decision_level[atom as usize]
    }

    /// The clause which forced the value of an atom, if any.
    pub fn antecedent_of(&self, atom: Atom) -> Option<ClauseIdx> {
        self.antecedent[atom as usize]
    }

    /// Whether an atom is marked.
    pub fn is_marked(&self, atom: Atom) -> bool {
        self.marked[atom as usize]
    }

    /// Marks an atom.
    pub fn mark(&mut self, atom: Atom) {
        self.marked[atom as usize] = true;
    }

    /// Unmarks an atom.
    pub fn unmark(&mut self, atom: Atom) {
        self.marked[atom as usize] = false;
    }

    /// The atoms of the database, 1..=count.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        1..=(self.count() as Atom)
    }

    /// The assignment as DIMACS-style signed literals, one per atom.
    /// Atoms without a value are written negatively (the default phase).
    pub fn assignment_string(&self) -> String {
        let mut string = String::new();
        for atom in self.atoms() {
            let literal = match self.value_of(atom) {
                Some(value) => CLiteral::new(atom, value),
                None => CLiteral::new(atom, false),
            };
            string.push_str(&format!("{literal}\n"));
        }
        string
    }
}
