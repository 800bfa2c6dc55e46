//! Error types used in the library.
//!
//! - The resolution engine itself has no failure modes: telling, retracting, and asking on an expression always succeed.
//! - Errors arise at the edges, when reading a sentence from text, when interning a fresh atom, or when some expression does not have the shape of a clause.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::expression::Expr;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    Clause(ClauseError),
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomDB(e) => write!(f, "{e}"),
            Self::Clause(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors in the atom database.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl std::fmt::Display for AtomDBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomsExhausted => write!(f, "no fresh atoms remain"),
        }
    }
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Errors when reading a clause from an expression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClauseError {
    /// Some disjunct of a would-be clause is not an atom or the negation of an atom.
    /// Perhaps the expression was not in conjunctive normal form…?
    NotALiteral(Expr),
}

impl std::fmt::Display for ClauseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotALiteral(expr) => write!(f, "not a literal: {expr}"),
        }
    }
}

impl From<ClauseError> for ErrorKind {
    fn from(e: ClauseError) -> Self {
        ErrorKind::Clause(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// Input remained after a complete sentence was read, beginning at the given offset.
    Trailing(usize),

    /// No sentence could be read at the given offset.
    Malformed(usize),

    /// A named connective was given the wrong number of arguments.
    Arity {
        connective: &'static str,
        expected: usize,
        found: usize,
    },

    /// An atom could not be interned.
    AtomDB(AtomDBError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty sentence"),
            Self::Trailing(offset) => write!(f, "unexpected input at offset {offset}"),
            Self::Malformed(offset) => write!(f, "malformed sentence at offset {offset}"),
            Self::Arity {
                connective,
                expected,
                found,
            } => write!(
                f,
                "{connective} expects {expected} argument(s) but {found} were given"
            ),
            Self::AtomDB(e) => write!(f, "{e}"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl From<AtomDBError> for ParseError {
    fn from(e: AtomDBError) -> Self {
        ParseError::AtomDB(e)
    }
}
