//! Store error taxonomy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sled storage error: {0}")]
    Sled(#[from] sled::Error),

    #[error("stored record failed to (de)serialize: {0}")]
    Serde(#[from] serde_json::Error),
}
