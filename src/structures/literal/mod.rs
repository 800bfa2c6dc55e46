//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The 'canonical' implementation of the literal trait is the [ABLiteral] structure, made of an atom (the 'a') and a boolean (the 'b').
//!
//! ```rust
//! # use propkb::structures::literal::{CLiteral, Literal};
//! let atom = 79;
//! let polarity = true;
//! let literal = CLiteral::new(atom, polarity);
//!
//! assert!(literal.polarity());
//!
//! assert!(literal.atom().cmp(&79).is_eq());
//! assert!(literal.negate().polarity().cmp(&false).is_eq());
//!
//! assert!(literal.is_complement_of(&CLiteral::new(79, false)));
//! ```
//!
//! Implementation of the literal trait requires implementation of two additional traits:
//! - [Ord]
//!   + Literals are ordered by atom and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.
//!   + Canonical [clauses](crate::structures::clause) are sorted by this order.
//! - [Hash](std::hash::Hash)
//!   + Literals are hashed structurally, so two literals built in different ways are identified whenever their atom and polarity agree.

mod ab_literal;
pub use ab_literal::ABLiteral;

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// Whether the literal is the negation of `other`.
    ///
    /// Two literals are complementary exactly when they share an atom and differ in polarity.
    fn is_complement_of(&self, other: &Self) -> bool {
        self.atom() == other.atom() && self.polarity() != other.polarity()
    }
}

/// The canonical implementation of a literal.
pub type CLiteral = ABLiteral;
