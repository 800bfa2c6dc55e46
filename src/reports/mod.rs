/*!
Reports on queries made of a knowledge base.

- A [Report] is the result of a single run of [resolution](crate::procedures::resolution).
- A [Verdict] is the result of [validation](crate::context::GenericKnowledgeBase::validate), which combines two reports.
- An [Outcome] bundles a report with the [counters](crate::context::Counters) of the run and, if configured, the [derivation] of the run.
*/

use crate::context::Counters;

pub mod derivation;
pub use derivation::Derivation;

/// High-level reports regarding a query.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The knowledge base entails the query, as the empty clause was derived.
    Entailed,

    /// The knowledge base does not entail the query, as the working set saturated without the empty clause.
    NotEntailed,

    /// Entailment is unknown, as some limit was reached or the query was terminated.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entailed => write!(f, "Entailed"),
            Self::NotEntailed => write!(f, "Not entailed"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The verdict on a sentence, from asking both the sentence and its negation.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Verdict {
    /// The sentence is entailed, and its negation is not.
    True,

    /// The negation of the sentence is entailed, and the sentence is not.
    False,

    /// Neither the sentence nor its negation is entailed.
    Undetermined,

    /// Both the sentence and its negation are entailed, and so the knowledge base is inconsistent.
    Inconsistent,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
            Self::Undetermined => write!(f, "Undetermined"),
            Self::Inconsistent => write!(f, "Inconsistent"),
        }
    }
}

/// A binding of variables, for which a query holds.
///
/// Propositional queries have no variables, and so the only substitution is the empty substitution.
/// A query [yields](crate::context::GenericKnowledgeBase::ask_generator) the empty substitution exactly when the query is entailed.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct Substitution;

impl std::fmt::Display for Substitution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{}}")
    }
}

/// The outcome of a run of resolution.
#[derive(Debug)]
pub struct Outcome {
    /// The report of the run.
    pub report: Report,

    /// Counts from the run.
    pub counters: Counters,

    /// The derivation of the run, if [recorded](crate::config::Config::derivation).
    pub derivation: Option<Derivation>,
}

impl Outcome {
    /// Whether the query was entailed.
    pub fn entailed(&self) -> bool {
        self.report == Report::Entailed
    }
}
