/*!
Flattening and merging of expressions over associative connectives.

- [dissociate] unwraps nested applications of a connective into one flat sequence of operands.
- [associate] is the reverse, and builds a single application of the connective from a flat sequence, using the identity of the connective for an empty sequence.
- [conjuncts] and [disjuncts] dissociate a single expression.

[remove_all] and [unique] are small sequence helpers used when two clauses are merged during [resolution](crate::procedures::resolve).
*/

use std::collections::BTreeSet;

use super::{Connective, Expr};

/// The operands of some nested applications of `op`, collected into a single flat sequence.
///
/// Order is preserved, and any operand which is not an application of `op` is kept as is.
pub fn dissociate(op: Connective, operands: impl IntoIterator<Item = Expr>) -> Vec<Expr> {
    let mut flat = Vec::default();
    collect(op, operands, &mut flat);
    flat
}

fn collect(op: Connective, operands: impl IntoIterator<Item = Expr>, flat: &mut Vec<Expr>) {
    for operand in operands {
        match (op, operand) {
            (Connective::And, Expr::And(nested)) | (Connective::Or, Expr::Or(nested)) => {
                collect(op, nested, flat)
            }
            (_, leaf) => flat.push(leaf),
        }
    }
}

/// The flattened application of `op` to `operands`.
///
/// - No operands gives the identity of `op`.
/// - A single operand is returned unchanged.
/// - Otherwise, `op` is applied to the dissociated operands.
pub fn associate(op: Connective, operands: impl IntoIterator<Item = Expr>) -> Expr {
    let mut flat = dissociate(op, operands);
    match flat.len() {
        0 => op.identity(),
        1 => flat.swap_remove(0),
        _ => op.apply(flat),
    }
}

/// The top-level conjuncts of an expression.
///
/// An expression which is not a conjunction is its only conjunct.
pub fn conjuncts(expr: &Expr) -> Vec<Expr> {
    dissociate(Connective::And, [expr.clone()])
}

/// The top-level disjuncts of an expression.
///
/// An expression which is not a disjunction (including a conjunction) is its only disjunct.
pub fn disjuncts(expr: &Expr) -> Vec<Expr> {
    dissociate(Connective::Or, [expr.clone()])
}

/// A copy of `sequence` with every occurrence of `item` removed.
pub fn remove_all<T: PartialEq + Clone>(item: &T, sequence: &[T]) -> Vec<T> {
    sequence.iter().filter(|x| *x != item).cloned().collect()
}

/// The distinct items of `sequence`, in ascending order.
pub fn unique<T: Ord>(sequence: impl IntoIterator<Item = T>) -> Vec<T> {
    sequence
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
