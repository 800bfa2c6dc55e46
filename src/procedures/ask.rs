/*!
Queries of a knowledge base.

Each query is a run of [resolution](crate::procedures::resolution), and the methods here differ only in how the [outcome](crate::reports::Outcome) of the run is returned:

- [ask_if_true](GenericKnowledgeBase::ask_if_true) returns whether the query is entailed.
- [ask_generator](GenericKnowledgeBase::ask_generator) returns an iterator which yields the empty [Substitution] once if the query is entailed, and nothing otherwise.
- [ask](GenericKnowledgeBase::ask) returns the first substitution of the generator, if any.
- [ask_report](GenericKnowledgeBase::ask_report) returns the full outcome.
- [validate](GenericKnowledgeBase::validate) asks both the query and its negation, for a [Verdict].

If some limit was reached during a query, entailment is unknown and the query is treated as not entailed by each method except [ask_report](GenericKnowledgeBase::ask_report).

```rust
# use propkb::context::KnowledgeBase;
# use propkb::reports::Substitution;
let mut kb = KnowledgeBase::default();
let a_or_not_a = kb.parse("A | ~A").unwrap();
let a = kb.parse("A").unwrap();

assert_eq!(kb.ask(&a_or_not_a), Some(Substitution));
assert_eq!(kb.ask(&a), None);
assert_eq!(kb.ask_generator(&a_or_not_a).count(), 1);
```
*/

use crate::{
    context::GenericKnowledgeBase,
    misc::log::targets::{self},
    normal::Normalizer,
    reports::{Outcome, Report, Substitution, Verdict},
    structures::expression::Expr,
    types::err::{self},
};

impl<N: Normalizer> GenericKnowledgeBase<N> {
    /// Whether the knowledge base entails `query`.
    pub fn ask_if_true(&self, query: &Expr) -> bool {
        self.pl_resolution(query).report == Report::Entailed
    }

    /// A lazy iterator over the substitutions for which `query` holds.
    ///
    /// No query is made until the iterator is first advanced.
    pub fn ask_generator<'kb>(
        &'kb self,
        query: &'kb Expr,
    ) -> impl Iterator<Item = Substitution> + 'kb {
        std::iter::once_with(move || match self.ask_if_true(query) {
            true => Some(Substitution),
            false => None,
        })
        .flatten()
    }

    /// The first substitution for which `query` holds, if any.
    pub fn ask(&self, query: &Expr) -> Option<Substitution> {
        self.ask_generator(query).next()
    }

    /// The outcome of a query, with counters and any derivation.
    pub fn ask_report(&self, query: &Expr) -> Outcome {
        self.pl_resolution(query)
    }

    /// The verdict on `query`, from asking both `query` and its negation.
    pub fn validate(&self, query: &Expr) -> Verdict {
        let holds = self.ask_if_true(query);
        let fails = self.ask_if_true(&!query.clone());

        let verdict = match (holds, fails) {
            (true, false) => Verdict::True,
            (false, true) => Verdict::False,
            (false, false) => Verdict::Undetermined,
            (true, true) => Verdict::Inconsistent,
        };

        if verdict == Verdict::Inconsistent {
            log::warn!(target: targets::KNOWLEDGE_BASE, "Both {query} and its negation are entailed");
        }
        verdict
    }

    /// Reads a sentence from `text` and asks whether the sentence is entailed.
    pub fn ask_str(&mut self, text: &str) -> Result<bool, err::ParseError> {
        let query = self.parse(text)?;
        Ok(self.ask_if_true(&query))
    }

    /// Reads a sentence from `text` and [validates](GenericKnowledgeBase::validate) the sentence.
    pub fn validate_str(&mut self, text: &str) -> Result<Verdict, err::ParseError> {
        let query = self.parse(text)?;
        Ok(self.validate(&query))
    }
}
