//! scs-store: the persistence collaborator for ShortCircuit Studio.
//!
//! The core never touches storage; this crate implements the consumed
//! interfaces: bounded script history with content-hash dedup, and the
//! rolling score aggregator behind `scs_core::ScoreHistory`.

mod error;
mod history;

pub use error::StoreError;
pub use history::{script_hash, HistoryStore, StoredScript, HISTORY_CAP, SCORE_CAP};
