use clap::Parser;
use propkb::config::Config;

/// Tells sentences to a propositional knowledge base, and asks what follows
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Files of commands, read in order (stdin is read if no file is given)
    pub files: Vec<std::path::PathBuf>,

    /// The maximum number of passes through the working set during a query
    #[arg(short, long)]
    pub round_limit: Option<usize>,

    /// Time limit for each query, in seconds
    #[arg(short, long, value_parser = |seconds: &str| seconds.parse().map(std::time::Duration::from_secs))]
    pub time_limit: Option<std::time::Duration>,

    #[arg(short = 'u', long, default_value_t = false, verbatim_doc_comment)]
    /// Skip resolvents subsumed by some clause already derived
    /// For example, p ∨ q ∨ r is skipped if p ∨ r has been derived
    pub subsumption: bool,

    /// Display a refutation for each entailed query
    #[arg(short, long, default_value_t = false)]
    pub proof: bool,

    /// Display stats after each query
    #[arg(short, long, default_value_t = false)]
    pub stats: bool,
}

impl Args {
    /// The configuration of a knowledge base, as given by the arguments.
    pub fn config(&self) -> Result<Config, String> {
        let mut config = Config::default();

        if let Some(limit) = self.round_limit {
            if !config.round_limit.set(limit) {
                let (min, _) = config.round_limit.min_max();
                return Err(format!("{} must be at least {min}", config.round_limit.name));
            }
        }

        if let Some(limit) = self.time_limit {
            config.time_limit.set(limit);
        }

        config.subsumption.value = self.subsumption;
        config.derivation.value = self.proof;

        Ok(config)
    }
}
