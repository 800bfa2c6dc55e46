/*!
Telling sentences to, and retracting sentences from, a knowledge base.

A sentence is [normalized](crate::normal) and each clause of the normal form is appended to the clause database, in order.
Retraction normalizes the sentence in the same way, and removes the first stored occurrence of each clause.

So, a retract undoes a tell of the same sentence, though only one occurrence of each clause is removed:

```rust
# use propkb::context::KnowledgeBase;
let mut kb = KnowledgeBase::default();
kb.tell_str("p & q").unwrap();
kb.tell_str("p").unwrap();
assert_eq!(kb.clause_count(), 3);

kb.retract_str("p & q").unwrap();
assert_eq!(kb.clause_count(), 1);

let p = kb.parse("p").unwrap();
assert!(kb.ask_if_true(&p));
```

Tautologies normalize to no clauses, and so telling a tautology leaves the knowledge base unchanged.
*/

use crate::{
    context::GenericKnowledgeBase,
    misc::log::targets::{self},
    normal::Normalizer,
    structures::{clause::Clause, expression::Expr},
    types::err::{self},
};

impl<N: Normalizer> GenericKnowledgeBase<N> {
    /// Adds the clauses of `sentence` to the knowledge base.
    pub fn tell(&mut self, sentence: &Expr) {
        let clauses = self.normalizer.clauses(sentence);
        log::info!(target: targets::KNOWLEDGE_BASE, "Tell {sentence} as {} clauses", clauses.len());

        for clause in clauses {
            log::trace!(target: targets::KNOWLEDGE_BASE, "Storing {}", clause.as_string());
            self.clause_db.store(clause);
        }
    }

    /// Removes the first occurrence of each clause of `sentence` from the knowledge base.
    ///
    /// Clauses not in the knowledge base are ignored.
    pub fn retract(&mut self, sentence: &Expr) {
        let clauses = self.normalizer.clauses(sentence);
        log::info!(target: targets::KNOWLEDGE_BASE, "Retract {sentence} as {} clauses", clauses.len());

        for clause in clauses {
            if !self.clause_db.remove_first(&clause) {
                log::debug!(target: targets::KNOWLEDGE_BASE, "No occurrence of {} to retract", clause.as_string());
            }
        }
    }

    /// Reads a sentence from `text` and [tells](GenericKnowledgeBase::tell) the sentence.
    pub fn tell_str(&mut self, text: &str) -> Result<(), err::ParseError> {
        let sentence = self.parse(text)?;
        self.tell(&sentence);
        Ok(())
    }

    /// Reads a sentence from `text` and [retracts](GenericKnowledgeBase::retract) the sentence.
    pub fn retract_str(&mut self, text: &str) -> Result<(), err::ParseError> {
        let sentence = self.parse(text)?;
        self.retract(&sentence);
        Ok(())
    }
}
