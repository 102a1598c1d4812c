/*!
The watch index: for each literal, which clauses watch it.

# Theory

A core part of a solve is [boolean constraint propagation](crate::procedures::bcp).
BCP rests on the observation that a clause forces a literal exactly when that literal has no value
and every other literal in the clause conflicts with the background valuation.
Watching two literals per clause suffices to notice every such moment: so long as both watched
literals are non-falsified nothing is forced, and only when an assignment falsifies a watch does
the clause need to be examined.

The index records, for each literal, the clauses in which that literal currently occupies one of
the two watched positions.
A clause of size two or more appears exactly twice across the whole index, once under each watched
literal.
Unit clauses never watch anything.

# Use

[BCP](crate::procedures::bcp) takes the pending list for a falsified literal out of the index
wholesale, examines each entry, and splices back the entries which keep their watch.
Taking the list is sound as no clause can migrate a watch *to* a falsified literal, so the list
cannot be appended to while it is out.

# Literature

Watched literals in the given form follow
[Chaff](https://dl.acm.org/doi/10.1145/378239.379017); see also *Optimal implementation of watched
literals and more general techniques* (JAIR 2013).
*/

use crate::{
    db::ClauseIdx,
    structures::literal::CLiteral,
};

/// The watch index, keyed by the dense index of a literal.
pub struct WatchDB {
    lists: Vec<Vec<ClauseIdx>>,
}

impl WatchDB {
    /// An index over the literals of `atom_count` atoms.
    pub fn new(atom_count: usize) -> Self {
        WatchDB {
            lists: vec![Vec::new(); 2 * atom_count + 2],
        }
    }

    /// Notes the clause at `index` watches `literal`.
    pub fn watch(&mut self, literal: CLiteral, index: ClauseIdx) {
        self.lists[literal.index()].push(index);
    }

    /// Removes the clause at `index` from the watchers of `literal`.
    ///
    /// Used when a watch is moved outside of propagation, e.g. to restore the watch invariant
    /// after a chronological backtrack.
    pub fn unwatch(&mut self, literal: CLiteral, index: ClauseIdx) {
        self.lists[literal.index()].retain(|watcher| *watcher != index);
    }

    /// The clauses watching `literal`.
    pub fn watchers(&self, literal: CLiteral) -> &[ClauseIdx] {
        &self.lists[literal.index()]
    }

    /// Takes the list of clauses watching `literal`, leaving an empty list.
    ///
    /// To be used in conjunction with [replace_watchers](WatchDB::replace_watchers).
    pub fn take_watchers(&mut self, literal: CLiteral) -> Vec<ClauseIdx> {
        std::mem::take(&mut self.lists[literal.index()])
    }

    /// Sets the list of clauses watching `literal`.
    pub fn replace_watchers(&mut self, literal: CLiteral, watchers: Vec<ClauseIdx>) {
        self.lists[literal.index()] = watchers;
    }
}
