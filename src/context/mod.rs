/*!
The knowledge base --- to which sentences are told and of which queries are asked.

Strictly, a [GenericKnowledgeBase] and a [KnowledgeBase].

The generic knowledge base is generic over the [normalizer](crate::normal::Normalizer) used to turn sentences into clauses.
A knowledge base uses the [distributive](crate::normal::Distributive) normalizer, and [from_config](KnowledgeBase::from_config) is implemented for a knowledge base to avoid requiring a normalizer be supplied alongside a config.

A knowledge base holds:
- A [configuration](crate::config), read at the start of each query.
- An [atom database](crate::db::atom), mapping the names of atoms to atoms.
- A [clause database](crate::db::clause), the clauses told and not retracted, in order.

Queries take a shared reference to the knowledge base, and build a private working set of clauses.
So, the only way the knowledge base changes is through a [tell](GenericKnowledgeBase::tell), a [retract](GenericKnowledgeBase::retract), or a [clear](GenericKnowledgeBase::clear).

# Example
```rust
# use propkb::context::KnowledgeBase;
# use propkb::reports::Verdict;
let mut kb = KnowledgeBase::default();

assert!(kb.tell_str("(B | C) & ~(B & C)").is_ok());
assert!(kb.tell_str("C").is_ok());

let b = kb.parse("B").unwrap();
assert!(!kb.ask_if_true(&b));
assert!(kb.ask_if_true(&!b.clone()));

assert_eq!(kb.validate_str("B"), Ok(Verdict::False));
assert_eq!(kb.validate_str("D"), Ok(Verdict::Undetermined));
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericKnowledgeBase;
mod specific;
pub use specific::KnowledgeBase;
