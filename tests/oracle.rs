use propkb::{
    config::Config,
    context::KnowledgeBase,
    reports::Report,
    structures::{
        atom::Atom,
        clause::{canonical_clause, CClause, Clause},
        expression::Expr,
        literal::{CLiteral, Literal},
    },
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_clause(rng: &mut StdRng, atoms: Atom, max_size: usize) -> CClause {
    let size = rng.gen_range(1..=max_size);
    canonical_clause(
        (0..size).map(|_| CLiteral::new(rng.gen_range(0..atoms), rng.gen_bool(0.5))),
    )
}

fn random_formula(rng: &mut StdRng, atoms: Atom, clauses: usize, max_size: usize) -> Vec<CClause> {
    (0..clauses)
        .map(|_| random_clause(rng, atoms, max_size))
        .collect()
}

/// Whether every valuation of the atoms [0..atoms) which satisfies `kb` also satisfies `query`.
fn entailed_by_truth_table(kb: &[CClause], query: &Expr, atoms: Atom) -> bool {
    (0..(1_u32 << atoms)).all(|bits| {
        let valuation = |atom: Atom| bits & (1 << atom) != 0;
        let satisfies_kb = kb.iter().all(|clause| clause.as_expr().evaluate(&valuation));
        !satisfies_kb || query.evaluate(&valuation)
    })
}

fn knowledge_base(config: Config, formula: &[CClause]) -> KnowledgeBase {
    let mut kb = KnowledgeBase::from_config(config);
    for clause in formula {
        kb.tell(&clause.as_expr());
    }
    kb
}

mod oracle {
    use super::*;

    #[test]
    fn clause_queries() {
        let mut rng = StdRng::seed_from_u64(31);
        let atoms = 4;

        for _ in 0..200 {
            let clause_count = rng.gen_range(0..=7);
            let formula = random_formula(&mut rng, atoms, clause_count, 3);
            let kb = knowledge_base(Config::default(), &formula);

            let query = random_clause(&mut rng, atoms, 2).as_expr();
            assert_eq!(
                kb.ask_if_true(&query),
                entailed_by_truth_table(&formula, &query, atoms),
                "{query} of {}",
                kb.as_string()
            );
        }
    }

    #[test]
    fn compound_queries() {
        let mut rng = StdRng::seed_from_u64(5);
        let atoms = 3;

        for _ in 0..100 {
            let formula = random_formula(&mut rng, atoms, 4, 2);
            let kb = knowledge_base(Config::default(), &formula);

            let [a, b, c] = std::array::from_fn(|_| {
                random_clause(&mut rng, atoms, 1).as_expr()
            });
            let queries = [
                a.clone() & b.clone(),
                a.clone().implies(b.clone() | c.clone()),
                a.clone().equivalent(!c.clone()),
                !(a & b & c),
            ];

            for query in queries {
                assert_eq!(
                    kb.ask_if_true(&query),
                    entailed_by_truth_table(&formula, &query, atoms),
                    "{query} of {}",
                    kb.as_string()
                );
            }
        }
    }

    #[test]
    fn subsumption_preserves_answers() {
        let mut rng = StdRng::seed_from_u64(101);
        let atoms = 5;

        let mut with_subsumption = Config::default();
        with_subsumption.subsumption.value = true;

        for _ in 0..60 {
            let formula = random_formula(&mut rng, atoms, 8, 3);
            let plain = knowledge_base(Config::default(), &formula);
            let subsuming = knowledge_base(with_subsumption.clone(), &formula);

            let query = random_clause(&mut rng, atoms, 2).as_expr();
            let expected = entailed_by_truth_table(&formula, &query, atoms);

            assert_eq!(plain.ask_if_true(&query), expected);
            assert_eq!(subsuming.ask_if_true(&query), expected);

            let plain_size = plain.ask_report(&query).counters.working_clauses;
            let subsuming_size = subsuming.ask_report(&query).counters.working_clauses;
            if !expected {
                assert!(subsuming_size <= plain_size);
            }
        }
    }
}

mod termination {
    use super::*;

    #[test]
    fn working_set_within_three_to_the_n() {
        let mut rng = StdRng::seed_from_u64(17);
        let atoms: Atom = 5;
        let bound = 3_usize.pow(atoms);

        for _ in 0..20 {
            let formula = random_formula(&mut rng, atoms, 6, 3);
            let kb = knowledge_base(Config::default(), &formula);

            // an atom outside the formula is never entailed by a consistent kb
            let query = Expr::Atom(atoms);
            let outcome = kb.ask_report(&query);

            assert_ne!(outcome.report, Report::Unknown);
            assert!(outcome.counters.working_clauses <= 3_usize.pow(atoms + 1));

            let within_formula = random_clause(&mut rng, atoms, 1).as_expr();
            let outcome = kb.ask_report(&within_formula);
            assert_ne!(outcome.report, Report::Unknown);
            assert!(outcome.counters.working_clauses <= bound);
        }
    }

    #[test]
    fn every_binary_clause() {
        let atoms: Atom = 3;
        let mut kb = KnowledgeBase::default();

        let literals = (0..atoms)
            .flat_map(|atom| [CLiteral::new(atom, true), CLiteral::new(atom, false)])
            .collect::<Vec<_>>();
        for (index, a) in literals.iter().enumerate() {
            for b in &literals[index + 1..] {
                let clause = canonical_clause([*a, *b]);
                if !clause.is_tautology() {
                    kb.tell(&clause.as_expr());
                }
            }
        }

        // p ∨ q, p ∨ ¬q, ¬p ∨ q, ¬p ∨ ¬q for any pair of atoms is unsatisfiable
        let outcome = kb.ask_report(&Expr::Bottom);
        assert_eq!(outcome.report, Report::Entailed);
        assert!(outcome.counters.working_clauses <= 3_usize.pow(atoms));
    }
}
