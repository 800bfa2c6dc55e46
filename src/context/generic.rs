use std::cell::RefCell;

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB},
    misc::log::targets::{self},
    normal::Normalizer,
    parse::parse_expr,
    structures::{clause::CClause, expression::Expr},
    types::err::{self},
};

use super::callbacks::CallbackTerminate;

/// A generic knowledge base, parameratised to a normalizer.
///
/// # Example
///
/// ```rust
/// # use propkb::context::GenericKnowledgeBase;
/// # use propkb::normal::Distributive;
/// # use propkb::config::Config;
/// let kb = GenericKnowledgeBase::from_normalizer(Config::default(), Distributive);
/// assert_eq!(kb.clause_count(), 0);
/// ```
pub struct GenericKnowledgeBase<N: Normalizer> {
    /// The configuration of a knowledge base.
    pub config: Config,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The normalizer, used on each sentence told, retracted, or asked.
    pub normalizer: N,

    /// Terminates queries, if true.
    pub(super) callback_terminate: RefCell<Option<Box<CallbackTerminate>>>,
}

impl<N: Normalizer> GenericKnowledgeBase<N> {
    /// Creates a knowledge base from some given configuration and normalizer.
    pub fn from_normalizer(config: Config, normalizer: N) -> Self {
        Self {
            config,
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
            normalizer,
            callback_terminate: RefCell::new(None),
        }
    }

    /// An iterator over the clauses of the knowledge base, in the order stored.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clause_db.iter()
    }

    /// A count of the clauses of the knowledge base, with repetition.
    pub fn clause_count(&self) -> usize {
        self.clause_db.count()
    }

    /// Removes every clause from the knowledge base.
    ///
    /// Atoms remain interned, so an atom keeps its name across a clear.
    pub fn clear(&mut self) {
        log::info!(target: targets::KNOWLEDGE_BASE, "Cleared {} clauses", self.clause_count());
        self.clause_db.clear();
    }

    /// Reads an expression from `text`, interning any fresh atoms.
    pub fn parse(&mut self, text: &str) -> Result<Expr, err::ParseError> {
        parse_expr(text, &mut self.atom_db)
    }

    /// The clauses of the knowledge base, as a single conjunction, written with the external names of atoms.
    pub fn as_string(&self) -> String {
        use crate::structures::clause::Clause;

        match self.clause_db.is_empty() {
            true => "True".to_string(),
            false => self
                .clauses()
                .map(|clause| match clause.size() {
                    1 => clause.as_external_string(&self.atom_db),
                    _ => format!("({})", clause.as_external_string(&self.atom_db)),
                })
                .collect::<Vec<_>>()
                .join(" & "),
        }
    }
}
