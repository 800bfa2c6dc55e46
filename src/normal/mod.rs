/*!
Normalization of expressions to conjunctive normal form.

A knowledge base stores clauses, and so every sentence told, retracted, or asked is first normalized to a conjunction of clauses.
Normalization is behind the [Normalizer] trait, and a [knowledge base](crate::context::GenericKnowledgeBase) is generic over the normalizer used.

The default normalizer, [Distributive], is the textbook procedure:
1. Implications and equivalences are eliminated, and negations are pushed to atoms (negation normal form).
2. Disjunction is distributed over conjunction.
3. The result is simplified:
   - Repeated literals within a clause and repeated clauses are dropped.
   - Tautological clauses (containing some literal and its negation) are dropped, as each is equivalent to [Top](Expr::Top).
   - A conjunction with no remaining clauses is [Top](Expr::Top), and a conjunction with an empty clause is [Bottom](Expr::Bottom).

Distribution may produce a number of clauses exponential in the size of the expression.
This is fine for the sentences of a knowledge base, though a definitional transformation would be needed for large sentences.

```rust
# use propkb::normal::{Distributive, Normalizer};
# use propkb::structures::expression::Expr;
let (p, q, r) = (Expr::Atom(0), Expr::Atom(1), Expr::Atom(2));

let dnf = (p.clone() & q.clone()) | r.clone();
let cnf = Distributive.to_cnf(&dnf);
assert_eq!(cnf, (p.clone() | r.clone()) & (q.clone() | r.clone()));

assert_eq!(Distributive.to_cnf(&(p.clone() | !p.clone())), Expr::Top);
assert_eq!(Distributive.to_cnf(&(q.clone() & !q.clone() & Expr::Bottom)), Expr::Bottom);
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::{clause_from_disjunction, CClause, Clause},
        expression::{associate, conjuncts, Connective, Expr},
    },
};

/// Something which returns an equivalent expression in conjunctive normal form.
pub trait Normalizer {
    /// An expression equivalent to `expr`, which is a conjunction of disjunctions of literals.
    ///
    /// [Top](Expr::Top), [Bottom](Expr::Bottom), a single literal, or a single disjunction are all (degenerate) conjunctions.
    fn to_cnf(&self, expr: &Expr) -> Expr;

    /// The canonical clauses of `expr`, in the order given by the [conjuncts] of its normal form.
    ///
    /// Tautological clauses are not returned, and any conjunct which is not a clause is skipped (with a log).
    fn clauses(&self, expr: &Expr) -> Vec<CClause> {
        let cnf = self.to_cnf(expr);
        log::debug!(target: targets::NORMALIZATION, "Normalized {expr} to {cnf}");

        let mut clauses = Vec::default();
        for conjunct in conjuncts(&cnf) {
            match clause_from_disjunction(&conjunct) {
                Ok(Some(clause)) if clause.is_tautology() => {}
                Ok(Some(clause)) => clauses.push(clause),
                Ok(None) => {}
                Err(e) => {
                    log::error!(target: targets::NORMALIZATION, "Skipped conjunct of {cnf}: {e}")
                }
            }
        }
        clauses
    }
}

/// Normalization by distribution of disjunction over conjunction.
#[derive(Clone, Copy, Debug, Default)]
pub struct Distributive;

impl Normalizer for Distributive {
    fn to_cnf(&self, expr: &Expr) -> Expr {
        let nnf = negation_normal_form(expr, true);
        let clauses = simplify(distribute(&nnf));

        if clauses.iter().any(|clause| clause.is_empty()) {
            return Expr::Bottom;
        }

        associate(
            Connective::And,
            clauses
                .into_iter()
                .map(|clause| associate(Connective::Or, clause)),
        )
    }
}

/// An equivalent expression (or its negation, if `positive` is false) built from literals with conjunction and disjunction alone.
pub fn negation_normal_form(expr: &Expr, positive: bool) -> Expr {
    match expr {
        Expr::Top => match positive {
            true => Expr::Top,
            false => Expr::Bottom,
        },

        Expr::Bottom => match positive {
            true => Expr::Bottom,
            false => Expr::Top,
        },

        Expr::Atom(atom) => match positive {
            true => Expr::Atom(*atom),
            false => Expr::Not(Box::new(Expr::Atom(*atom))),
        },

        Expr::Not(inner) => negation_normal_form(inner, !positive),

        Expr::And(operands) => {
            let operands = operands.iter().map(|e| negation_normal_form(e, positive));
            match positive {
                true => Expr::And(operands.collect()),
                false => Expr::Or(operands.collect()),
            }
        }

        Expr::Or(operands) => {
            let operands = operands.iter().map(|e| negation_normal_form(e, positive));
            match positive {
                true => Expr::Or(operands.collect()),
                false => Expr::And(operands.collect()),
            }
        }

        // a → b is ¬a ∨ b, and ¬(a → b) is a ∧ ¬b
        Expr::Implies(a, b) => match positive {
            true => Expr::Or(vec![
                negation_normal_form(a, false),
                negation_normal_form(b, true),
            ]),
            false => Expr::And(vec![
                negation_normal_form(a, true),
                negation_normal_form(b, false),
            ]),
        },

        // a ↔ b is (¬a ∨ b) ∧ (a ∨ ¬b), and ¬(a ↔ b) is (a ∨ b) ∧ (¬a ∨ ¬b)
        Expr::Equivalent(a, b) => Expr::And(vec![
            Expr::Or(vec![
                negation_normal_form(a, !positive),
                negation_normal_form(b, true),
            ]),
            Expr::Or(vec![
                negation_normal_form(a, positive),
                negation_normal_form(b, false),
            ]),
        ]),
    }
}

/// The clauses of an expression in negation normal form, as lists of literal expressions.
fn distribute(nnf: &Expr) -> Vec<Vec<Expr>> {
    match nnf {
        Expr::Top => vec![],
        Expr::Bottom => vec![vec![]],

        Expr::And(operands) => operands.iter().flat_map(distribute).collect(),

        Expr::Or(operands) => {
            let mut product: Vec<Vec<Expr>> = vec![vec![]];
            for operand in operands {
                let operand_clauses = distribute(operand);
                product = product
                    .iter()
                    .flat_map(|partial| {
                        operand_clauses.iter().map(move |clause| {
                            let mut extended = partial.clone();
                            extended.extend(clause.iter().cloned());
                            extended
                        })
                    })
                    .collect();
            }
            product
        }

        literal => vec![vec![literal.clone()]],
    }
}

/// Drops repeated literals, tautological clauses, and repeated clauses.
fn simplify(clauses: Vec<Vec<Expr>>) -> Vec<Vec<Expr>> {
    let mut simplified: Vec<Vec<Expr>> = Vec::with_capacity(clauses.len());

    'clause_loop: for clause in clauses {
        let mut literals: Vec<Expr> = Vec::with_capacity(clause.len());
        for literal in clause {
            let complement = match &literal {
                Expr::Not(inner) => inner.as_ref().clone(),
                other => Expr::Not(Box::new(other.clone())),
            };

            if literals.contains(&complement) {
                continue 'clause_loop;
            }
            if !literals.contains(&literal) {
                literals.push(literal);
            }
        }

        if !simplified.iter().any(|kept| same_literals(kept, &literals)) {
            simplified.push(literals);
        }
    }

    simplified
}

fn same_literals(a: &[Expr], b: &[Expr]) -> bool {
    a.len() == b.len() && a.iter().all(|literal| b.contains(literal))
}
