/*!
Configuration of a knowledge base.

All configuration of a knowledge base is contained within a [Config], and is read when a query is made.
The default configuration runs each query to completion, without recording any derivation.

```rust
# use propkb::config::Config;
let mut config = Config::default();
assert!(config.round_limit.set(16));
assert!(!config.round_limit.set(0));
assert_eq!(config.round_limit.value, 16);
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// A count of passes through the working set of a resolution procedure.
pub type Rounds = usize;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum number of passes through the working set during a query.
    ///
    /// The maximum value is treated as no limit.
    pub round_limit: ConfigOption<Rounds>,

    /// The time limit for a query.
    ///
    /// A duration of zero is treated as no limit.
    pub time_limit: ConfigOption<std::time::Duration>,

    /// Skip clauses which are subsumed by some clause already in the working set.
    pub subsumption: ConfigOption<bool>,

    /// Record a graph of resolution steps during a query, from which a refutation may be read.
    pub derivation: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            round_limit: ConfigOption {
                name: "round_limit",
                min: 1,
                max: Rounds::MAX,
                value: Rounds::MAX,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: std::time::Duration::from_secs(0),
                max: std::time::Duration::MAX,
                value: std::time::Duration::from_secs(0),
            },

            subsumption: ConfigOption {
                name: "subsumption",
                min: false,
                max: true,
                value: false,
            },

            derivation: ConfigOption {
                name: "derivation",
                min: false,
                max: true,
                value: false,
            },
        }
    }
}

impl Config {
    /// The time limit, if one is set.
    pub fn time_limit(&self) -> Option<std::time::Duration> {
        match self.time_limit.value.is_zero() {
            true => None,
            false => Some(self.time_limit.value),
        }
    }

    /// The round limit, if one is set.
    pub fn round_limit(&self) -> Option<Rounds> {
        match self.round_limit.value {
            Rounds::MAX => None,
            limit => Some(limit),
        }
    }
}
