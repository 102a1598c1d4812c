//! The abstract elements of a solve and their representation: atoms, literals, and clauses.

pub mod atom;
pub mod clause;
pub mod literal;
