/*!
A record of the resolution steps taken during a query.

The derivation is a directed graph whose nodes are the clauses of the working set, in the order the clauses were added.
Each resolvent has an edge from each of its two parents, and the clauses of the initial working set have no parents.

As nodes are added in the order clauses enter the working set, the index of a node is the position of the clause in the working set, and every parent precedes its resolvent.

If the empty clause was derived, the [refutation](Derivation::refutation) is the part of the graph from which the empty clause follows, as a list of steps with parents before children.

```rust
# use propkb::context::KnowledgeBase;
# use propkb::config::Config;
let mut config = Config::default();
config.derivation.value = true;

let mut kb = KnowledgeBase::from_config(config);
kb.tell_str("p & (p => q)").unwrap();
let query = kb.parse("q").unwrap();

let outcome = kb.ask_report(&query);
let refutation = outcome.derivation.unwrap().refutation().unwrap();

assert!(refutation.last().unwrap().clause.is_empty());
assert_eq!(refutation.len(), 5);
```
*/

use std::collections::{BTreeSet, VecDeque};

use petgraph::{graph::Graph, prelude::NodeIndex, Direction};

use crate::{
    db::atom::AtomDB,
    structures::clause::{CClause, Clause},
};

/// Where a clause of the working set came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// A clause of the knowledge base.
    KnowledgeBase,

    /// A clause of the negated query.
    Query,

    /// A resolvent of two clauses in the working set.
    Resolution,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KnowledgeBase => write!(f, "kb"),
            Self::Query => write!(f, "query"),
            Self::Resolution => write!(f, "resolution"),
        }
    }
}

#[derive(Debug)]
struct Node {
    clause: CClause,
    origin: Origin,
}

/// A graph of resolution steps.
#[derive(Debug, Default)]
pub struct Derivation {
    graph: Graph<Node, ()>,
}

/// A step of a refutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// The clause of the step.
    pub clause: CClause,

    /// The origin of the clause.
    pub origin: Origin,

    /// The parents of the clause, if the clause is a resolvent.
    pub parents: Vec<CClause>,
}

impl Step {
    /// The step written with the external names of atoms.
    pub fn as_string(&self, atom_db: &AtomDB) -> String {
        match self.parents.as_slice() {
            [left, right] => format!(
                "{} from ({}) and ({})",
                self.clause.as_external_string(atom_db),
                left.as_external_string(atom_db),
                right.as_external_string(atom_db)
            ),
            _ => format!(
                "{} from {}",
                self.clause.as_external_string(atom_db),
                self.origin
            ),
        }
    }
}

impl Derivation {
    /// Records a clause of the initial working set.
    pub fn add_given(&mut self, clause: CClause, origin: Origin) -> usize {
        self.graph.add_node(Node { clause, origin }).index()
    }

    /// Records a resolvent of the clauses at positions `left` and `right` of the working set.
    pub fn add_resolvent(&mut self, clause: CClause, left: usize, right: usize) -> usize {
        let resolvent = self.graph.add_node(Node {
            clause,
            origin: Origin::Resolution,
        });
        self.graph.add_edge(NodeIndex::new(left), resolvent, ());
        self.graph.add_edge(NodeIndex::new(right), resolvent, ());
        resolvent.index()
    }

    /// A count of clauses in the derivation.
    pub fn clause_count(&self) -> usize {
        self.graph.node_count()
    }

    /// The steps from which the empty clause follows, if the empty clause was derived.
    ///
    /// Steps are ordered so parents precede their resolvents, and the last step is the empty clause.
    pub fn refutation(&self) -> Option<Vec<Step>> {
        let empty = self
            .graph
            .node_indices()
            .find(|index| self.graph[*index].clause.is_empty())?;

        let mut required = BTreeSet::new();
        let mut queue = VecDeque::from([empty]);
        while let Some(index) = queue.pop_front() {
            if required.insert(index) {
                queue.extend(self.graph.neighbors_directed(index, Direction::Incoming));
            }
        }

        Some(required.into_iter().map(|index| self.step(index)).collect())
    }

    fn step(&self, index: NodeIndex) -> Step {
        let node = &self.graph[index];

        let mut parents = self
            .graph
            .neighbors_directed(index, Direction::Incoming)
            .collect::<Vec<_>>();
        parents.sort();

        Step {
            clause: node.clause.clone(),
            origin: node.origin,
            parents: parents
                .into_iter()
                .map(|parent| self.graph[parent].clause.clone())
                .collect(),
        }
    }
}
