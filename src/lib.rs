//! A library for propositional knowledge bases, with entailment decided by resolution refutation.
//!
//! propkb stores sentences of propositional logic as clauses, and determines whether a stored collection of sentences entails some query.
//! Queries are answered by the textbook procedure: the negation of the query is added to the clauses of the knowledge base, and resolution is applied until either the empty clause is found or no new clause follows.
//!
//! propkb is intended as a readable implementation of the procedure, for anyone curious about resolution or in need of a small, dependable entailment check.
//! Resolution is complete for propositional logic, though the procedure is exponential in the worst case, and so propkb is not a replacement for a SAT solver on large problems.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [knowledge base](context).
//!
//! Knowledge bases are built with a [configuration](config), and sentences may be told to a knowledge base either as [expressions](structures::expression) or as text to be [parsed](parse).
//!
//! Internally, and at a high-level:
//! - Each sentence is [normalized](normal) to a conjunction of clauses.
//! - The clauses are stored, in order, in a [clause database](db::clause).
//! - The names of atoms are stored in an [atom database](db::atom).
//! - A query builds a private working set of clauses, to which [resolution](procedures::resolution) is applied.
//!
//! Useful starting points, then, may be:
//! - The [resolution procedure](crate::procedures::resolution) to inspect the dynamics of a query.
//! - The [structures] to familiarise yourself with the representation of atoms, literals, clauses, and expressions.
//! - The [configuration](crate::config) to see what limits are supported.
//!
//! # Examples
//!
//! + Some consequences of a description of unicorns.
//!
//! ```rust
//! # use propkb::context::KnowledgeBase;
//! let mut kb = KnowledgeBase::default();
//!
//! kb.tell_str("Mythical => Immortal").unwrap();
//! kb.tell_str("~Mythical => (Mortal & Mammal)").unwrap();
//! kb.tell_str("(Immortal | Mammal) => Horned").unwrap();
//! kb.tell_str("Horned => Magical").unwrap();
//!
//! assert_eq!(kb.ask_str("Horned"), Ok(true));
//! assert_eq!(kb.ask_str("Magical"), Ok(true));
//! assert_eq!(kb.ask_str("Mythical"), Ok(false));
//! assert_eq!(kb.ask_str("~Mythical"), Ok(false));
//! ```
//!
//! + Build sentences directly, without parsing.
//!
//! ```rust
//! # use propkb::context::KnowledgeBase;
//! # use propkb::structures::expression::Expr;
//! # use propkb::reports::Verdict;
//! let mut kb = KnowledgeBase::default();
//!
//! let p = Expr::Atom(kb.atom_db.atom_or_fresh("p").unwrap());
//! let q = Expr::Atom(kb.atom_db.atom_or_fresh("q").unwrap());
//!
//! kb.tell(&(p.clone() | q.clone()));
//! kb.tell(&!p.clone());
//!
//! assert_eq!(kb.validate(&q), Verdict::True);
//! assert_eq!(kb.validate(&p), Verdict::False);
//!
//! kb.tell(&p);
//! assert_eq!(kb.validate(&q), Verdict::Inconsistent);
//! ```
//!
//! + Errors from reading sentences gather into a single [ErrorKind](types::err::ErrorKind).
//!
//! ```rust
//! # use propkb::context::KnowledgeBase;
//! # use propkb::types::err::{self, ErrorKind};
//! fn consistent(sentences: &[&str]) -> Result<bool, ErrorKind> {
//!     let mut kb = KnowledgeBase::default();
//!     for sentence in sentences {
//!         kb.tell_str(sentence)?;
//!     }
//!     Ok(!kb.ask_str("False")?)
//! }
//!
//! assert_eq!(consistent(&["p => q", "p", "~q"]), Ok(false));
//! assert_eq!(consistent(&["p => q", "~q"]), Ok(true));
//! assert_eq!(consistent(&["p =>"]), Err(ErrorKind::Parse(err::ParseError::Trailing(2))));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to tells and retracts can be filtered with `RUST_LOG=knowledge_base …` or,
//! - A summary of each query without individual resolvents can be found with `RUST_LOG=resolution=info …`

#![allow(clippy::single_match)]

pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod normal;
pub mod parse;
pub mod reports;
