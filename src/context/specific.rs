use crate::{config::Config, normal::Distributive, structures::expression::Expr};

use super::GenericKnowledgeBase;

/// A knowledge base which uses [Distributive] normalization.
pub type KnowledgeBase = GenericKnowledgeBase<Distributive>;

impl KnowledgeBase {
    /// Creates a knowledge base from some given configuration.
    pub fn from_config(config: Config) -> Self {
        GenericKnowledgeBase::from_normalizer(config, Distributive)
    }

    /// Creates a knowledge base from some given configuration, told `sentence`.
    pub fn from_sentence(config: Config, sentence: &Expr) -> Self {
        let mut kb = Self::from_config(config);
        kb.tell(sentence);
        kb
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}
