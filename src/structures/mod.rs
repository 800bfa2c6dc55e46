//! Key structures, such as literals, clauses, and expressions.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//! Use of a trait or it's canonical implementation within the library is situational.
//!
//! # Other structures without a trait and/or canonical implementation.
//!
//! ## Formulas
//!
//! A formula 𝐅 is a sequence of [clauses](clause), interpreted as the conjunction of those clauses.
//!
//! The clauses stored in a [knowledge base](crate::context) form a formula, and the knowledge base entails exactly what the formula entails.
//!
//! ## Sentences
//!
//! A sentence is an arbitrary [expression](expression), built from atoms with negation, conjunction, disjunction, implication, and equivalence.
//! Sentences are [normalized](crate::normal) to conjunctive normal form before they become part of a formula.

pub mod atom;
pub mod clause;
pub mod expression;
pub mod literal;
