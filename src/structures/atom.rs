/*!
(The internal representation of) an atom, aka. a 'variable'.

Each atom is a u32 in 1..=*V* for a formula over *V* variables, matching the DIMACS convention.
The atom 0 is reserved, and the per-atom stores in the [atom database](crate::db::atom) are sized
*V + 1* so an atom may be used directly as an index.

# Notes
- In the SAT literature these are often called 'variables', in the logic literature 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom, limited by the dense literal representation.
pub const ATOM_MAX: Atom = (u32::MAX >> 1) - 1;
