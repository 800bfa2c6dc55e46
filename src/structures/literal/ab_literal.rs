use crate::{
    db::atom::AtomDB,
    structures::{atom::Atom, expression::Expr},
};

use super::Literal;

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug)]
pub struct ABLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal for ABLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }}

impl ABLiteral {
    /// The literal as an expression, either an atom or the negation of an atom.
    pub fn as_expr(&self) -> Expr {
        match self.polarity {
            true => Expr::Atom(self.atom),
            false => Expr::Not(Box::new(Expr::Atom(self.atom))),
        }
    }

    /// The literal written with the external name of its atom.
    pub fn as_string(&self, atom_db: &AtomDB) -> String {
        match self.polarity {
            true => atom_db.external_name(self.atom).to_string(),
            false => format!("~{}", atom_db.external_name(self.atom)),
        }
    }
}

// Traits

impl PartialOrd for ABLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ABLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl PartialEq for ABLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.atom == other.atom && self.polarity == other.polarity
    }
}

impl Eq for ABLiteral {}

impl std::hash::Hash for ABLiteral {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.atom.hash(state);
        self.polarity.hash(state);
    }
}

impl std::fmt::Display for ABLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "~{}", self.atom),
        }
    }
}

impl std::ops::Neg for ABLiteral {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// From

impl TryFrom<&Expr> for ABLiteral {
    type Error = ();

    /// An atom, or the negation of an atom, as a literal.
    fn try_from(value: &Expr) -> Result<Self, Self::Error> {
        match value {
            Expr::Atom(atom) => Ok(ABLiteral::new(*atom, true)),
            Expr::Not(inner) => match inner.as_ref() {
                Expr::Atom(atom) => Ok(ABLiteral::new(*atom, false)),
                _ => Err(()),
            },
            _ => Err(()),
        }
    }
}
