//! Various procedures on a knowledge base.
//!
//! For the most part these are methods accessed via a knowledge base, and primarily placed here for documentation.
//! The exception is [resolve], which resolves a pair of clauses without reference to any knowledge base.

pub mod ask;
pub mod resolution;
pub mod resolve;
pub mod tell;
