//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals, sorted by the order on literals and without duplicates.
//! As a consequence, two canonical clauses are equal (and hash equally) exactly when they contain the same literals, regardless of the order in which the literals were given.
//!
//! ```rust
//! # use propkb::structures::literal::{CLiteral, Literal};
//! # use propkb::structures::clause::{canonical_clause, Clause};
//! let p = CLiteral::new(23, true);
//! let q = CLiteral::new(4, false);
//!
//! let clause = canonical_clause(vec![p, q, p]);
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause, canonical_clause(vec![q, p]));
//!
//! assert!(canonical_clause(vec![p, -p]).is_tautology());
//! ```
//!
//! - The empty clause is always false (never true), and is the result of resolving two complementary unit clauses.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use crate::{
    db::atom::AtomDB,
    structures::{
        expression::{associate, disjuncts, unique, Connective, Expr},
        literal::{CLiteral, Literal},
    },
    types::err::ClauseError,
};

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause, using the internal representation of atoms.
    fn as_string(&self) -> String;

    /// The clause written with the external names of atoms, with `False` for the empty clause.
    fn as_external_string(&self, atom_db: &AtomDB) -> String;

    /// The clause as an expression, the disjunction of its literals.
    fn as_expr(&self) -> Expr;

    /// An iterator over all literals in the clause, in the order of the representation.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// Whether some literal and its negation both belong to the clause.
    fn is_tautology(&self) -> bool;

    /// Whether every literal of the clause is in `other`.
    fn subsumes(&self, other: &impl Clause) -> bool;
}

/// The implementation of a clause as a vector of literals.
pub type VClause = Vec<CLiteral>;

/// The canonical implementation of a clause.
pub type CClause = VClause;

impl Clause for VClause {
    fn as_string(&self) -> String {
        match self.is_empty() {
            true => "False".to_string(),
            false => self
                .iter()
                .map(|literal| literal.to_string())
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }

    fn as_external_string(&self, atom_db: &AtomDB) -> String {
        match self.is_empty() {
            true => "False".to_string(),
            false => self
                .iter()
                .map(|literal| literal.as_string(atom_db))
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }

    fn as_expr(&self) -> Expr {
        associate(Connective::Or, self.iter().map(|literal| literal.as_expr()))
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn is_tautology(&self) -> bool {
        // Canonical clauses place the two polarities of an atom side by side, though the check is made in general.
        self.iter()
            .any(|literal| self.iter().any(|other| literal.is_complement_of(other)))
    }

    fn subsumes(&self, other: &impl Clause) -> bool {
        self.iter()
            .all(|literal| other.literals().any(|other_literal| literal == other_literal))
    }}

/// The canonical form of a collection of literals.
pub fn canonical_clause(literals: impl IntoIterator<Item = CLiteral>) -> CClause {
    unique(literals)
}

/// The canonical clause of a disjunction of literals.
///
/// - [Top](Expr::Top) is the identity of conjunction, and so no clause is returned.
/// - [Bottom](Expr::Bottom) is the identity of disjunction, and so the empty clause is returned.
/// - Otherwise, each disjunct must be a literal, or [Bottom](Expr::Bottom) (which is dropped).
///
/// ```rust
/// # use propkb::structures::clause::{clause_from_disjunction, Clause};
/// # use propkb::structures::expression::Expr;
/// let clause = clause_from_disjunction(&(Expr::Atom(1) | !Expr::Atom(0)));
/// assert_eq!(clause.unwrap().unwrap().as_string(), "~0 | 1");
///
/// assert_eq!(clause_from_disjunction(&Expr::Bottom), Ok(Some(vec![])));
/// assert_eq!(clause_from_disjunction(&Expr::Top), Ok(None));
/// ```
pub fn clause_from_disjunction(expr: &Expr) -> Result<Option<CClause>, ClauseError> {
    let mut literals = Vec::default();

    for disjunct in disjuncts(expr) {
        match disjunct {
            Expr::Top => return Ok(None),
            Expr::Bottom => {}
            other => match CLiteral::try_from(&other) {
                Ok(literal) => literals.push(literal),
                Err(_) => return Err(ClauseError::NotALiteral(other)),
            },
        }
    }

    Ok(Some(canonical_clause(literals)))
}
