use std::time::Duration;

/// Counts for various things which count, roughly, during a query.
#[derive(Clone, Debug)]
pub struct Counters {
    /// The number of passes through the working set.
    pub passes: usize,

    /// The number of pairs of clauses resolved.
    pub pairs: usize,

    /// The number of resolvents derived, including repeats and tautologies.
    pub resolvents: usize,

    /// The size of the working set when the query finished.
    pub working_clauses: usize,

    /// The time taken during a query.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            passes: 0,
            pairs: 0,
            resolvents: 0,

            working_clauses: 0,
            time: Duration::from_secs(0),
        }
    }
}
