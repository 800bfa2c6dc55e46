use propkb::{
    config::Config,
    context::KnowledgeBase,
    reports::{Report, Substitution, Verdict},
};

mod scenarios {
    use super::*;

    #[test]
    fn exactly_one_suspect() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.tell_str("(B | C) & ~(B & C)").is_ok());
        assert!(kb.tell_str("C").is_ok());

        assert_eq!(kb.ask_str("B"), Ok(false));
        assert_eq!(kb.ask_str("~B"), Ok(true));
    }

    #[test]
    fn unicorn() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.tell_str("M => I").is_ok());
        assert!(kb.tell_str("~M => (Ma & ~I)").is_ok());
        assert!(kb.tell_str("(I | Ma) => H").is_ok());
        assert!(kb.tell_str("H => Mg").is_ok());
        assert!(kb.tell_str("M").is_ok());

        assert_eq!(kb.ask_str("I"), Ok(true));
        assert_eq!(kb.ask_str("H"), Ok(true));
        assert_eq!(kb.ask_str("Mg"), Ok(true));
        assert_eq!(kb.ask_str("Ma"), Ok(false));
    }

    #[test]
    fn tautology_of_empty_knowledge_base() {
        let mut kb = KnowledgeBase::default();
        assert_eq!(kb.ask_str("A | ~A"), Ok(true));
        assert_eq!(kb.clause_count(), 0);
    }
}

mod knowledge_base {
    use super::*;

    #[test]
    fn tell_order() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.tell_str("(p => q) & r").is_ok());

        let clauses = kb
            .clauses()
            .map(|clause| {
                use propkb::structures::clause::Clause;
                clause.as_external_string(&kb.atom_db)
            })
            .collect::<Vec<_>>();
        assert_eq!(clauses, vec!["~p | q", "r"]);
    }

    #[test]
    fn tautology_not_stored() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.tell_str("p | ~p").is_ok());
        assert!(kb.tell_str("True").is_ok());
        assert_eq!(kb.clause_count(), 0);
    }

    #[test]
    fn idempotent_tell() {
        let mut once = KnowledgeBase::default();
        let mut twice = KnowledgeBase::default();

        for kb in [&mut once, &mut twice] {
            assert!(kb.tell_str("(a => b) & (b | c) & ~(c & a)").is_ok());
        }
        assert!(twice.tell_str("(a => b) & (b | c) & ~(c & a)").is_ok());
        assert_eq!(twice.clause_count(), 2 * once.clause_count());

        for query in ["a", "b", "c", "~a", "~c", "b | c", "a => c", "~a | ~c"] {
            assert_eq!(once.ask_str(query), twice.ask_str(query), "{query}");
        }
    }

    #[test]
    fn retract_inverts_tell() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.tell_str("p => q").is_ok());
        assert!(kb.tell_str("p").is_ok());
        assert_eq!(kb.ask_str("q"), Ok(true));

        assert!(kb.retract_str("p").is_ok());
        assert_eq!(kb.clause_count(), 1);
        assert_eq!(kb.ask_str("q"), Ok(false));
    }

    #[test]
    fn retract_leaves_duplicates() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.tell_str("p").is_ok());
        assert!(kb.tell_str("p").is_ok());

        assert!(kb.retract_str("p").is_ok());
        assert_eq!(kb.clause_count(), 1);
        assert_eq!(kb.ask_str("p"), Ok(true));

        assert!(kb.retract_str("p").is_ok());
        assert_eq!(kb.ask_str("p"), Ok(false));
    }

    #[test]
    fn retract_absent_is_ignored() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.tell_str("p | q").is_ok());
        assert!(kb.retract_str("q | r").is_ok());
        assert!(kb.retract_str("q").is_ok());
        assert_eq!(kb.clause_count(), 1);
    }

    #[test]
    fn retract_by_clause_not_by_literal_order() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.tell_str("a | b").is_ok());
        assert!(kb.retract_str("b | a").is_ok());
        assert_eq!(kb.clause_count(), 0);
    }

    #[test]
    fn contradiction_entails_everything() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.tell_str("p & ~p").is_ok());

        for query in ["q", "~q", "p & q", "False"] {
            assert_eq!(kb.ask_str(query), Ok(true), "{query}");
        }
    }

    #[test]
    fn from_sentence() {
        let mut atoms = KnowledgeBase::default();
        let sentence = atoms.parse("p & (p => q)").unwrap();
        let q = atoms.parse("q").unwrap();

        let kb = KnowledgeBase::from_sentence(Config::default(), &sentence);
        assert_eq!(kb.clause_count(), 2);
        assert!(kb.ask_if_true(&q));
    }

    #[test]
    fn clear() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.tell_str("p & q").is_ok());
        kb.clear();
        assert_eq!(kb.clause_count(), 0);
        assert_eq!(kb.ask_str("p"), Ok(false));
        assert_eq!(kb.as_string(), "True");
    }

    #[test]
    fn parse_errors_leave_knowledge_base_unchanged() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.tell_str("p &").is_err());
        assert!(kb.tell_str("").is_err());
        assert_eq!(kb.clause_count(), 0);
    }
}

mod queries {
    use super::*;

    #[test]
    fn ask_yields_the_empty_substitution() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.tell_str("p").is_ok());
        let p = kb.parse("p").unwrap();
        let q = kb.parse("q").unwrap();

        assert_eq!(kb.ask(&p), Some(Substitution));
        assert_eq!(kb.ask(&q), None);
        assert_eq!(kb.ask_generator(&p).collect::<Vec<_>>(), vec![Substitution]);
        assert_eq!(kb.ask_generator(&q).count(), 0);
    }

    #[test]
    fn validate_verdicts() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.tell_str("p & (p => q)").is_ok());

        assert_eq!(kb.validate_str("q"), Ok(Verdict::True));
        assert_eq!(kb.validate_str("~p"), Ok(Verdict::False));
        assert_eq!(kb.validate_str("r"), Ok(Verdict::Undetermined));

        assert!(kb.tell_str("~q").is_ok());
        assert_eq!(kb.validate_str("r"), Ok(Verdict::Inconsistent));
    }

    #[test]
    fn queries_do_not_change_the_knowledge_base() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.tell_str("(a | b) & (~a | c) & (~b | c)").is_ok());
        let before = kb.clauses().cloned().collect::<Vec<_>>();

        assert_eq!(kb.ask_str("c"), Ok(true));
        assert_eq!(kb.ask_str("a"), Ok(false));

        assert_eq!(kb.clauses().cloned().collect::<Vec<_>>(), before);
    }
}

mod limits {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    fn chain() -> KnowledgeBase {
        let mut kb = KnowledgeBase::default();
        assert!(kb.tell_str("a & (a => b) & (b => c) & (c => d)").is_ok());
        kb
    }

    #[test]
    fn round_limit() {
        let mut kb = chain();
        let d = kb.parse("d").unwrap();

        kb.config.round_limit.value = 1;
        assert_eq!(kb.ask_report(&d).report, Report::Unknown);
        assert!(!kb.ask_if_true(&d));

        kb.config.round_limit.value = Config::default().round_limit.value;
        assert_eq!(kb.ask_report(&d).report, Report::Entailed);
    }

    #[test]
    fn terminate_callback() {
        let mut kb = chain();
        let d = kb.parse("d").unwrap();

        let calls = Rc::new(Cell::new(0));
        let count = calls.clone();
        kb.set_callback_terminate(Box::new(move || {
            count.set(count.get() + 1);
            true
        }));

        let outcome = kb.ask_report(&d);
        assert_eq!(outcome.report, Report::Unknown);
        assert_eq!(outcome.counters.passes, 0);
        assert_eq!(calls.get(), 1);

        kb.clear_callback_terminate();
        assert!(kb.ask_if_true(&d));
    }

    #[test]
    fn time_limit_option() {
        let mut config = Config::default();
        assert!(config.time_limit().is_none());
        assert!(config.time_limit.set(std::time::Duration::from_secs(2)));
        assert_eq!(config.time_limit(), Some(std::time::Duration::from_secs(2)));

        let mut kb = KnowledgeBase::from_config(config);
        assert!(kb.tell_str("a & (a => b)").is_ok());
        assert_eq!(kb.ask_str("b"), Ok(true));
    }
}

mod derivation {
    use super::*;
    use propkb::reports::derivation::Origin;

    #[test]
    fn refutation_ends_in_the_empty_clause() {
        let mut config = Config::default();
        config.derivation.value = true;

        let mut kb = KnowledgeBase::from_config(config);
        assert!(kb.tell_str("(B | C) & ~(B & C)").is_ok());
        assert!(kb.tell_str("C").is_ok());
        let not_b = kb.parse("~B").unwrap();

        let outcome = kb.ask_report(&not_b);
        assert!(outcome.entailed());

        let refutation = outcome.derivation.unwrap().refutation().unwrap();
        let last = refutation.last().unwrap();
        assert!(last.clause.is_empty());
        assert_eq!(last.parents.len(), 2);

        for (index, step) in refutation.iter().enumerate() {
            match step.origin {
                Origin::Resolution => {
                    for parent in &step.parents {
                        let position = refutation.iter().position(|s| &s.clause == parent);
                        assert!(position.is_some_and(|position| position < index));
                    }
                }
                _ => assert!(step.parents.is_empty()),
            }
        }

        assert!(refutation.iter().any(|step| step.origin == Origin::Query));
    }

    #[test]
    fn no_refutation_when_not_entailed() {
        let mut config = Config::default();
        config.derivation.value = true;

        let mut kb = KnowledgeBase::from_config(config);
        assert!(kb.tell_str("p | q").is_ok());
        let p = kb.parse("p").unwrap();

        let outcome = kb.ask_report(&p);
        assert_eq!(outcome.report, Report::NotEntailed);
        let derivation = outcome.derivation.unwrap();
        assert_eq!(derivation.clause_count(), outcome.counters.working_clauses);
        assert!(derivation.refutation().is_none());
    }
}
