/*!
Determines whether the knowledge base entails a query, by resolution refutation.

# Overview

The knowledge base entails a query α exactly when the clauses of the knowledge base together with the clauses of ¬α are unsatisfiable.
And, a set of clauses is unsatisfiable exactly when the empty clause may be derived from the set by resolution.

So, a working set of clauses is built from the clauses of the knowledge base followed by the clauses of ¬α, and resolution is applied until either:
- The empty clause is derived, and α is entailed.
- Every resolvent of a pass is already in the working set, and α is not entailed.

As there are finitely many clauses over the atoms of the working set, one of the two always happens.
Tautological resolvents are equivalent to [Top](crate::structures::expression::Expr::Top) and are dropped, so at most 3^n clauses over n atoms are ever added.

In some more detail:

```text
working set ← kb clauses ++ clauses of ¬α
fresh       ← every clause of the working set

loop
  if the round or time limit is reached, or termination is requested
    return Unknown

  new ← ∅
  for each pair of clauses (i < j) of the working set, where the clause j is fresh
    for each resolvent of the pair
      if the resolvent is the empty clause
        return Entailed
      if the resolvent is neither a tautology nor in the working set nor in new
        new ← new ∪ { resolvent }

  if new is empty
    return NotEntailed

  fresh ← new, less any clause subsumed by some clause of the working set (if configured)
  working set ← working set ++ fresh
```

Pairs of clauses which were both in the working set at the start of a pass were resolved during that pass or an earlier one, and so only pairs with a fresh clause are resolved.
The order in which resolvents are added to the working set is the order in which each was first derived.

# Limits

Each query reads the [configuration](crate::config) of the knowledge base:
- [round_limit](crate::config::Config::round_limit) bounds the number of passes.
- [time_limit](crate::config::Config::time_limit) bounds the duration of a query, checked between passes.

Further, the [terminate callback](crate::context::callbacks) is checked before each pass.
If any limit is reached the report is [Unknown](Report::Unknown).
*/

use std::collections::HashSet;

use crate::{
    context::{Counters, GenericKnowledgeBase},
    misc::log::targets::{self},
    normal::Normalizer,
    procedures::resolve::pl_resolve,
    reports::{
        derivation::{Derivation, Origin},
        Outcome, Report,
    },
    structures::{
        clause::{CClause, Clause},
        expression::Expr,
    },
};

/// The working set of clauses, private to a query.
struct WorkingSet {
    clauses: Vec<CClause>,
    members: HashSet<CClause>,
    derivation: Option<Derivation>,
}

impl WorkingSet {
    fn contains(&self, clause: &CClause) -> bool {
        self.members.contains(clause)
    }

    fn add_given(&mut self, clause: CClause, origin: Origin) {
        if self.members.insert(clause.clone()) {
            if let Some(derivation) = &mut self.derivation {
                derivation.add_given(clause.clone(), origin);
            }
            self.clauses.push(clause);
        }
    }

    fn add_resolvent(&mut self, clause: CClause, left: usize, right: usize) {
        if let Some(derivation) = &mut self.derivation {
            derivation.add_resolvent(clause.clone(), left, right);
        }
        self.members.insert(clause.clone());
        self.clauses.push(clause);
    }

    fn is_subsumed(&self, clause: &CClause) -> bool {
        self.clauses.iter().any(|existing| existing.subsumes(clause))
    }
}

impl<N: Normalizer> GenericKnowledgeBase<N> {
    /// Determines whether the knowledge base entails `query`.
    pub fn pl_resolution(&self, query: &Expr) -> Outcome {
        let start = std::time::Instant::now();
        let time_limit = self.config.time_limit();
        let round_limit = self.config.round_limit();
        let subsumption = self.config.subsumption.value;

        let mut counters = Counters::default();

        let mut working_set = WorkingSet {
            clauses: Vec::default(),
            members: HashSet::default(),
            derivation: match self.config.derivation.value {
                true => Some(Derivation::default()),
                false => None,
            },
        };

        for clause in self.clauses() {
            working_set.add_given(clause.clone(), Origin::KnowledgeBase);
        }
        let negated_query = !query.clone();
        for clause in self.normalizer.clauses(&negated_query) {
            working_set.add_given(clause, Origin::Query);
        }

        log::info!(target: targets::RESOLUTION, "Query {query} with a working set of {} clauses", working_set.clauses.len());

        let finish = |report: Report, mut counters: Counters, working_set: WorkingSet| {
            counters.working_clauses = working_set.clauses.len();
            counters.time = start.elapsed();
            log::info!(target: targets::RESOLUTION, "{report} after {} passes, {} pairs, and {} resolvents", counters.passes, counters.pairs, counters.resolvents);
            Outcome {
                report,
                counters,
                derivation: working_set.derivation,
            }
        };

        if working_set.contains(&CClause::default()) {
            log::info!(target: targets::RESOLUTION, "Empty clause in the initial working set");
            return finish(Report::Entailed, counters, working_set);
        }

        let mut fresh_from = 0;

        loop {
            if let Some(limit) = round_limit {
                if counters.passes >= limit {
                    log::info!(target: targets::RESOLUTION, "Round limit of {limit} reached");
                    return finish(Report::Unknown, counters, working_set);
                }
            }

            if let Some(limit) = time_limit {
                if start.elapsed() > limit {
                    log::info!(target: targets::RESOLUTION, "Time limit of {limit:?} reached");
                    return finish(Report::Unknown, counters, working_set);
                }
            }

            if self.check_callback_terminate() {
                log::info!(target: targets::RESOLUTION, "Terminated by callback");
                return finish(Report::Unknown, counters, working_set);
            }

            counters.passes += 1;

            // Resolvents of the pass, with the positions of their parents.
            let mut new: Vec<(CClause, usize, usize)> = Vec::default();
            let mut new_members: HashSet<CClause> = HashSet::default();

            for j in fresh_from..working_set.clauses.len() {
                for i in 0..j {
                    counters.pairs += 1;

                    let resolvents =
                        pl_resolve(&working_set.clauses[i], &working_set.clauses[j]);

                    for resolvent in resolvents {
                        counters.resolvents += 1;

                        if resolvent.is_empty() {
                            log::debug!(target: targets::RESOLUTION, "Empty clause from {} and {}", working_set.clauses[i].as_string(), working_set.clauses[j].as_string());
                            working_set.add_resolvent(resolvent, i, j);
                            return finish(Report::Entailed, counters, working_set);
                        }

                        if resolvent.is_tautology()
                            || working_set.contains(&resolvent)
                            || new_members.contains(&resolvent)
                        {
                            continue;
                        }

                        log::trace!(target: targets::RESOLUTION, "Resolvent {}", resolvent.as_string());
                        new_members.insert(resolvent.clone());
                        new.push((resolvent, i, j));
                    }
                }
            }

            if new.is_empty() {
                return finish(Report::NotEntailed, counters, working_set);
            }

            fresh_from = working_set.clauses.len();
            for (resolvent, i, j) in new {
                if subsumption && working_set.is_subsumed(&resolvent) {
                    log::trace!(target: targets::RESOLUTION, "Subsumed {}", resolvent.as_string());
                    continue;
                }
                working_set.add_resolvent(resolvent, i, j);
            }

            log::debug!(target: targets::RESOLUTION, "Pass {} added {} clauses", counters.passes, working_set.clauses.len() - fresh_from);

            if working_set.clauses.len() == fresh_from {
                return finish(Report::NotEntailed, counters, working_set);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::KnowledgeBase, reports::Report};

    #[test]
    fn modus_ponens() {
        let mut kb = KnowledgeBase::default();
        kb.tell_str("p").unwrap();
        kb.tell_str("p => q").unwrap();

        let q = kb.parse("q").unwrap();
        let outcome = kb.pl_resolution(&q);
        assert_eq!(outcome.report, Report::Entailed);
        assert_eq!(outcome.counters.passes, 2);
        assert!(outcome.derivation.is_none());
    }

    #[test]
    fn saturation() {
        let mut kb = KnowledgeBase::default();
        kb.tell_str("p | q").unwrap();

        let p = kb.parse("p").unwrap();
        let outcome = kb.pl_resolution(&p);
        assert_eq!(outcome.report, Report::NotEntailed);
        assert_eq!(outcome.counters.working_clauses, 3);
    }

    #[test]
    fn inconsistent_knowledge_base() {
        let mut kb = KnowledgeBase::default();
        kb.tell_str("False").unwrap();

        let anything = kb.parse("anything").unwrap();
        let outcome = kb.pl_resolution(&anything);
        assert_eq!(outcome.report, Report::Entailed);
        assert_eq!(outcome.counters.passes, 0);
    }

    #[test]
    fn tautological_query() {
        let mut kb = KnowledgeBase::default();
        let query = kb.parse("a | ~a").unwrap();
        assert_eq!(kb.pl_resolution(&query).report, Report::Entailed);
    }

    #[test]
    fn round_limit() {
        let mut config = Config::default();
        config.round_limit.value = 1;

        let mut kb = KnowledgeBase::from_config(config);
        kb.tell_str("a & (a => b) & (b => c)").unwrap();

        let c = kb.parse("c").unwrap();
        assert_eq!(kb.pl_resolution(&c).report, Report::Unknown);

        kb.config.round_limit.value = 2;
        assert_eq!(kb.pl_resolution(&c).report, Report::Entailed);
    }
}
