/*!
Boolean expressions, the sentences told to and asked of a knowledge base.

An expression is a tree over atoms built with the usual connectives.
The two constants [Top](Expr::Top) and [Bottom](Expr::Bottom) are the identities of conjunction and disjunction, respectively.
And, so, an empty conjunction is [Top](Expr::Top) and an empty disjunction is [Bottom](Expr::Bottom).

Conjunction and disjunction are n-ary, and may nest.
For example, `(p ∨ q) ∨ r` is written `Or([Or([p, q]), r])` and may be flattened to `Or([p, q, r])` through [associate].

```rust
# use propkb::structures::expression::{associate, disjuncts, Connective, Expr};
let (p, q, r) = (Expr::Atom(0), Expr::Atom(1), Expr::Atom(2));
let nested = Expr::Or(vec![Expr::Or(vec![p.clone(), q.clone()]), r.clone()]);

assert_eq!(disjuncts(&nested), vec![p.clone(), q.clone(), r.clone()]);
assert_eq!(associate(Connective::Or, vec![nested]), Expr::Or(vec![p, q, r]));
assert_eq!(associate(Connective::And, vec![]), Expr::Top);
```

Expressions with implication or equivalence are accepted by a knowledge base, though are eliminated by [normalization](crate::normal) before any clause is stored.
*/

mod associate;
pub use associate::*;

use crate::{db::atom::AtomDB, structures::atom::Atom};

/// A boolean expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Expr {
    /// The true expression, and the identity of conjunction.
    Top,

    /// The false expression, and the identity of disjunction.
    Bottom,

    /// An atom.
    Atom(Atom),

    /// The negation of an expression.
    Not(Box<Expr>),

    /// The conjunction of some expressions.
    And(Vec<Expr>),

    /// The disjunction of some expressions.
    Or(Vec<Expr>),

    /// The material implication from the first expression to the second.
    Implies(Box<Expr>, Box<Expr>),

    /// The equivalence of two expressions.
    Equivalent(Box<Expr>, Box<Expr>),
}

/// The associative connectives, those which may be flattened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    /// The identity element of the connective.
    pub fn identity(&self) -> Expr {
        match self {
            Self::And => Expr::Top,
            Self::Or => Expr::Bottom,
        }
    }

    /// The application of the connective to some operands, without any flattening.
    pub fn apply(&self, operands: Vec<Expr>) -> Expr {
        match self {
            Self::And => Expr::And(operands),
            Self::Or => Expr::Or(operands),
        }
    }
}

impl Expr {
    /// Builds an implication from `self` to `consequent`.
    pub fn implies(self, consequent: Expr) -> Expr {
        Expr::Implies(Box::new(self), Box::new(consequent))
    }

    /// Builds the equivalence of `self` and `other`.
    pub fn equivalent(self, other: Expr) -> Expr {
        Expr::Equivalent(Box::new(self), Box::new(other))
    }

    /// The value of the expression on a valuation, given as a function from atoms to booleans.
    pub fn evaluate(&self, valuation: &impl Fn(Atom) -> bool) -> bool {
        match self {
            Expr::Top => true,
            Expr::Bottom => false,
            Expr::Atom(atom) => valuation(*atom),
            Expr::Not(inner) => !inner.evaluate(valuation),
            Expr::And(operands) => operands.iter().all(|e| e.evaluate(valuation)),
            Expr::Or(operands) => operands.iter().any(|e| e.evaluate(valuation)),
            Expr::Implies(a, b) => !a.evaluate(valuation) || b.evaluate(valuation),
            Expr::Equivalent(a, b) => a.evaluate(valuation) == b.evaluate(valuation),
        }
    }

    /// The expression written with the external names of atoms.
    ///
    /// Binary and n-ary connectives are always parenthesised when nested, so the string may be read back by the [parser](crate::parse).
    pub fn as_string(&self, atom_db: &AtomDB) -> String {
        self.write_with(&|atom| atom_db.external_name(atom).to_string(), false)
    }

    fn write_with(&self, name: &impl Fn(Atom) -> String, nested: bool) -> String {
        let joined = |operands: &[Expr], symbol: &str| {
            operands
                .iter()
                .map(|e| e.write_with(name, true))
                .collect::<Vec<_>>()
                .join(symbol)
        };

        let (string, compound) = match self {
            Expr::Top => ("True".to_string(), false),
            Expr::Bottom => ("False".to_string(), false),
            Expr::Atom(atom) => (name(*atom), false),
            Expr::Not(inner) => (format!("~{}", inner.write_with(name, true)), false),
            Expr::And(operands) if operands.is_empty() => ("True".to_string(), false),
            Expr::Or(operands) if operands.is_empty() => ("False".to_string(), false),
            Expr::And(operands) => (joined(operands, " & "), operands.len() > 1),
            Expr::Or(operands) => (joined(operands, " | "), operands.len() > 1),
            Expr::Implies(a, b) => (
                format!("{} => {}", a.write_with(name, true), b.write_with(name, true)),
                true,
            ),
            Expr::Equivalent(a, b) => (
                format!("{} <=> {}", a.write_with(name, true), b.write_with(name, true)),
                true,
            ),
        };

        match nested && compound {
            true => format!("({string})"),
            false => string,
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.write_with(&|atom| atom.to_string(), false))
    }
}

impl std::ops::Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::Not(Box::new(self))
    }
}

impl std::ops::BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::And(vec![self, rhs])
    }
}

impl std::ops::BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::Or(vec![self, rhs])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation() {
        let (p, q) = (Expr::Atom(0), Expr::Atom(1));
        let implication = p.clone().implies(q.clone());

        assert!(implication.evaluate(&|_| false));
        assert!(!implication.evaluate(&|atom| atom == 0));
        assert!((p.clone().equivalent(q.clone())).evaluate(&|_| true));
        assert!(!(p & !Expr::Atom(0)).evaluate(&|_| true));
    }

    #[test]
    fn display_parenthesises_nested() {
        let expr = (Expr::Atom(0) | Expr::Atom(1)) & !Expr::Atom(2);
        assert_eq!(expr.to_string(), "(0 | 1) & ~2");
    }
}
