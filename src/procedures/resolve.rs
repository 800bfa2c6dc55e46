/*!
Resolution of a pair of clauses.

Given clauses `ci` and `cj`, for each literal `l` of `ci` whose complement `-l` is in `cj`, the resolvent on `l` is the clause of every other literal of `ci` and of `cj`.
That is:

```text
unique(remove_all(l, ci) ++ remove_all(-l, cj))
```

A pair of clauses may have zero or more resolvents, one for each complementary pair of literals.
Resolvents are canonical clauses, so the literals of a resolvent are ordered by the order on literals, whatever the order of the parents.

```rust
# use propkb::procedures::resolve::pl_resolve;
# use propkb::structures::literal::{CLiteral, Literal};
let p = CLiteral::new(0, true);
let q = CLiteral::new(1, true);
let r = CLiteral::new(2, true);

// p ∨ q and ¬p ∨ r resolve on p to q ∨ r
assert_eq!(pl_resolve(&vec![p, q], &vec![-p, r]), vec![vec![q, r]]);

// complementary unit clauses resolve to the empty clause
assert_eq!(pl_resolve(&vec![p], &vec![-p]), vec![vec![]]);

// no complementary literals, no resolvents
assert!(pl_resolve(&vec![p, q], &vec![r]).is_empty());
```
*/

use crate::structures::{
    clause::CClause,
    expression::{remove_all, unique},
    literal::Literal,
};

/// Every resolvent of `ci` and `cj`, in the order of the literals of `ci` resolved on.
pub fn pl_resolve(ci: &CClause, cj: &CClause) -> Vec<CClause> {
    let mut resolvents = Vec::default();

    for di in ci {
        for dj in cj {
            if di.is_complement_of(dj) {
                let mut literals = remove_all(di, ci);
                literals.extend(remove_all(dj, cj));
                resolvents.push(unique(literals));
            }
        }
    }

    resolvents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{
        clause::{canonical_clause, Clause},
        literal::CLiteral,
    };

    #[test]
    fn two_complementary_pairs() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);

        // resolving on either atom leaves a tautology
        let resolvents = pl_resolve(&vec![p, q], &canonical_clause([-p, -q]));
        assert_eq!(resolvents.len(), 2);
        assert!(resolvents.iter().all(|resolvent| resolvent.is_tautology()));
    }

    #[test]
    fn shared_literals_merge() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, false);
        let r = CLiteral::new(2, true);

        let resolvents = pl_resolve(&vec![p, q], &canonical_clause([-p, q, r]));
        assert_eq!(resolvents, vec![canonical_clause([q, r])]);
    }

    #[test]
    fn order_of_parents() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, true);

        let ci = canonical_clause([r, -p]);
        let cj = canonical_clause([q, p]);
        assert_eq!(pl_resolve(&ci, &cj), pl_resolve(&cj, &ci));
        assert_eq!(pl_resolve(&ci, &cj)[0].as_string(), "1 | 2");
    }
}
