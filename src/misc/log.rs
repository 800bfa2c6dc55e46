/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [knowledge base](crate::context), tells and retracts.
    pub const KNOWLEDGE_BASE: &str = "knowledge_base";

    /// Logs related to [resolution](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [normalization](crate::normal)
    pub const NORMALIZATION: &str = "normalization";

    /// Logs related to [parsing](crate::parse)
    pub const PARSE: &str = "parse";
}
