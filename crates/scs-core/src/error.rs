//! Core error taxonomy.
//!
//! Policy for unknown selector keys: fail loudly with the offending key named.
//! There is no silent fallback to generic placeholder lists anywhere in the
//! core. A caller that passes a bad category or tone gets a configuration
//! error, not a degraded script.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The category key is not present in the category lexicon.
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    /// The tone label does not parse to any known tone (including legacy aliases).
    #[error("unknown tone: {0:?}")]
    UnknownTone(String),

    /// A lookup table resolved to an empty candidate list. Failing here keeps
    /// empty placeholders out of the downstream sentence templates.
    #[error("empty candidate list: {0}")]
    EmptySelection(&'static str),
}
