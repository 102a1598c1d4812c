/*!
The representation of a literal as a dense index.

A literal is an atom paired with a polarity.
The canonical representation packs both into a single u32: for an atom *v* the positive literal is
*2v* and the negative literal is *2v + 1*.
On this encoding negation is an XOR with 1, the atom is recovered by a right shift, and a formula
over *V* atoms uses literal indices below *2V + 2* — so a literal may index literal-keyed stores
(watch lists, occurrence counts) directly.

# Example

```rust
# use tern_sat::structures::literal::{CLiteral, Literal};
let p = CLiteral::new(3, true);
let not_p = p.negate();

assert_eq!(p.atom(), not_p.atom());
assert_eq!(p.index(), 6);
assert_eq!(not_p.index(), 7);
assert_eq!(not_p.as_int(), -3);
```
*/

use crate::structures::atom::Atom;

/// Generic operations on a literal.
pub trait Literal {
    /// A literal over `atom` with the given `polarity`.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal — true for *v*, false for *¬v*.
    fn polarity(&self) -> bool;

    /// The literal as a signed integer, DIMACS style.
    fn as_int(&self) -> isize;
}

/// The canonical literal: an atom and polarity packed into a dense index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CLiteral(u32);

impl CLiteral {
    /// The index of the literal, for use against literal-keyed stores.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => CLiteral(atom << 1),
            false => CLiteral((atom << 1) | 1),
        }
    }

    fn negate(&self) -> Self {
        CLiteral(self.0 ^ 1)
    }

    fn atom(&self) -> Atom {
        self.0 >> 1
    }

    fn polarity(&self) -> bool {
        self.0 & 1 == 0
    }

    fn as_int(&self) -> isize {
        match self.polarity() {
            true => self.atom() as isize,
            false => -(self.atom() as isize),
        }
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

impl From<i32> for CLiteral {
    fn from(value: i32) -> Self {
        CLiteral::new(value.unsigned_abs(), value.is_positive())
    }
}

impl std::ops::Neg for CLiteral {
    type Output = CLiteral;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn dense_encoding() {
        let p = CLiteral::new(1, true);
        let not_p = CLiteral::new(1, false);

        assert_eq!(p.index(), 2);
        assert_eq!(not_p.index(), 3);
        assert_eq!(p.negate(), not_p);
        assert_eq!(not_p.negate(), p);
        assert_eq!(p.atom(), not_p.atom());
    }

    #[test]
    fn int_round_trip() {
        for int in [1, -1, 7, -42] {
            let literal = CLiteral::from(int);
            assert_eq!(literal.as_int(), int as isize);
        }
    }
}
