/*!
A database of clauses, interpreted as their conjunction.

The clause database is the formula of a knowledge base.
It is an ordered collection, mutated only by appending a clause, removing the first occurrence of a clause, or clearing every clause.

Duplicates are permitted, as the same clause may follow from two different sentences.
And, removal takes only the first occurrence so that a clause from one sentence survives the retraction of the other.

```rust
# use propkb::db::clause::ClauseDB;
# use propkb::structures::literal::{CLiteral, Literal};
let mut clause_db = ClauseDB::default();
let p = CLiteral::new(0, true);

clause_db.store(vec![p]);
clause_db.store(vec![p]);
assert_eq!(clause_db.count(), 2);

assert!(clause_db.remove_first(&vec![p]));
assert_eq!(clause_db.count(), 1);

assert!(clause_db.remove_first(&vec![p]));
assert!(!clause_db.remove_first(&vec![p]));
```
*/

use crate::{
    misc::log::targets::{self},
    structures::clause::{CClause, Clause},
};

/// The clause database.
#[derive(Default, Clone)]
pub struct ClauseDB {
    /// Clauses, in order of storage.
    clauses: Vec<CClause>,
}

impl ClauseDB {
    /// Appends a (canonical) clause.
    pub fn store(&mut self, clause: CClause) {
        log::trace!(target: targets::KNOWLEDGE_BASE, "Stored clause: {}", clause.as_string());
        self.clauses.push(clause);
    }

    /// Removes the first clause equal to `clause`, returning whether some clause was removed.
    pub fn remove_first(&mut self, clause: &CClause) -> bool {
        match self.clauses.iter().position(|stored| stored == clause) {
            Some(index) => {
                log::trace!(target: targets::KNOWLEDGE_BASE, "Removed clause: {}", clause.as_string());
                self.clauses.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every clause.
    pub fn clear(&mut self) {
        self.clauses.clear()
    }

    /// A count of the stored clauses, including duplicates.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }

    /// Whether no clause is stored.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// An iterator over the stored clauses, in order of storage.
    pub fn iter(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }
}
