//! Sled-backed script history and score aggregation.
//!
//! One tree per concern: `scripts` holds the bounded, newest-first script
//! history (content-hash dedup, last 30 kept); `score_history` holds the
//! rolling list of totals behind the running average. A DashMap hot cache
//! fronts the hash-dedup lookups so repeated persists of the same script
//! never touch sled.

use crate::error::StoreError;
use dashmap::DashMap;
use scs_core::{Script, ScoreHistory};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sled::Db;
use std::path::Path;
use uuid::Uuid;

/// Retention cap for the script history; the oldest entry beyond this is evicted.
pub const HISTORY_CAP: usize = 30;

/// Retention cap for the rolling score list behind the running average.
pub const SCORE_CAP: usize = 50;

const SCRIPTS_TREE: &str = "scripts";
const SCORES_TREE: &str = "score_history";

fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// One persisted script with its storage envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredScript {
    pub id: Uuid,
    /// SHA-256 over the script's canonical JSON; the dedup key.
    pub hash: String,
    pub timestamp_ms: i64,
    pub script: Script,
}

/// SHA-256 content hash of a script's canonical JSON, hex encoded.
pub fn script_hash(script: &Script) -> Result<String, StoreError> {
    let bytes = serde_json::to_vec(script)?;
    let digest = Sha256::digest(&bytes);
    Ok(format!("{:x}", digest))
}

/// The persistence collaborator: bounded history plus score aggregation.
pub struct HistoryStore {
    db: Db,
    /// Known content hashes; checked before sled on dedup lookups.
    seen_hashes: DashMap<String, ()>,
}

impl HistoryStore {
    /// Opens or creates the store at `path` and warms the dedup cache from
    /// the existing history.
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let store = Self {
            db,
            seen_hashes: DashMap::new(),
        };
        for entry in store.stored_scripts()? {
            store.seen_hashes.insert(entry.hash, ());
        }
        Ok(store)
    }

    // -- script history ----------------------------------------------------

    /// Persists a script. Returns `false` without writing when an identical
    /// script (same content hash) is already in the history. Evicts the
    /// oldest entries beyond [`HISTORY_CAP`].
    pub fn persist(&self, script: &Script) -> Result<bool, StoreError> {
        let hash = script_hash(script)?;
        if self.seen_hashes.contains_key(&hash) {
            tracing::warn!(target: "scs::store", %hash, "duplicate script rejected");
            return Ok(false);
        }

        let entry = StoredScript {
            id: Uuid::new_v4(),
            hash: hash.clone(),
            timestamp_ms: now_ms(),
            script: script.clone(),
        };
        // Zero-padded monotonic id: lexicographic order == insertion order,
        // even for persists landing in the same millisecond.
        let key = format!("script/{:020}", self.db.generate_id()?);
        let tree = self.db.open_tree(SCRIPTS_TREE)?;
        tree.insert(key.as_bytes(), serde_json::to_vec(&entry)?)?;
        self.seen_hashes.insert(hash, ());
        tracing::info!(
            target: "scs::store",
            category = %entry.script.metadata.category,
            tone = entry.script.metadata.tone.as_str(),
            "script persisted"
        );

        self.evict_beyond_cap(&tree)?;
        Ok(true)
    }

    /// The stored history, newest first, up to `limit` entries.
    pub fn history(&self, limit: usize) -> Result<Vec<StoredScript>, StoreError> {
        let mut entries = self.stored_scripts()?;
        entries.reverse();
        entries.truncate(limit);
        Ok(entries)
    }

    /// Drops every stored script (scores are kept).
    pub fn clear_history(&self) -> Result<(), StoreError> {
        let tree = self.db.open_tree(SCRIPTS_TREE)?;
        tree.clear()?;
        self.seen_hashes.clear();
        tracing::info!(target: "scs::store", "history cleared");
        Ok(())
    }

    /// All stored scripts, oldest first.
    fn stored_scripts(&self) -> Result<Vec<StoredScript>, StoreError> {
        let tree = self.db.open_tree(SCRIPTS_TREE)?;
        let mut out = Vec::new();
        for item in tree.iter() {
            let (_, value) = item?;
            out.push(serde_json::from_slice(&value)?);
        }
        Ok(out)
    }

    fn evict_beyond_cap(&self, tree: &sled::Tree) -> Result<(), StoreError> {
        let mut keys: Vec<Vec<u8>> = Vec::new();
        for item in tree.iter() {
            let (key, _) = item?;
            keys.push(key.to_vec());
        }
        if keys.len() <= HISTORY_CAP {
            return Ok(());
        }
        let excess = keys.len() - HISTORY_CAP;
        for key in keys.into_iter().take(excess) {
            if let Some(value) = tree.remove(&key)? {
                if let Ok(entry) = serde_json::from_slice::<StoredScript>(&value) {
                    self.seen_hashes.remove(&entry.hash);
                    tracing::warn!(
                        target: "scs::store",
                        hash = %entry.hash,
                        "history cap reached; oldest script evicted"
                    );
                }
            }
        }
        Ok(())
    }

    // -- score aggregation -------------------------------------------------

    /// Appends a total to the rolling score list (bounded to [`SCORE_CAP`])
    /// and returns the new running average.
    pub fn record_score_total(&self, total: u32) -> Result<u32, StoreError> {
        let tree = self.db.open_tree(SCORES_TREE)?;
        let key = format!("score/{:020}", self.db.generate_id()?);
        tree.insert(key.as_bytes(), serde_json::to_vec(&total)?)?;

        // Trim to the last SCORE_CAP totals.
        let mut keys: Vec<Vec<u8>> = Vec::new();
        for item in tree.iter() {
            let (k, _) = item?;
            keys.push(k.to_vec());
        }
        if keys.len() > SCORE_CAP {
            for key in keys.iter().take(keys.len() - SCORE_CAP) {
                tree.remove(key.as_slice())?;
            }
        }
        self.average(&tree)
    }

    /// The rounded running average over the retained totals; 0 when empty.
    pub fn running_average_total(&self) -> Result<u32, StoreError> {
        let tree = self.db.open_tree(SCORES_TREE)?;
        self.average(&tree)
    }

    fn average(&self, tree: &sled::Tree) -> Result<u32, StoreError> {
        let mut sum = 0u64;
        let mut count = 0u64;
        for item in tree.iter() {
            let (_, value) = item?;
            let total: u32 = serde_json::from_slice(&value)?;
            sum += total as u64;
            count += 1;
        }
        if count == 0 {
            return Ok(0);
        }
        Ok((sum as f64 / count as f64).round() as u32)
    }
}

impl ScoreHistory for HistoryStore {
    fn record_score(&self, total: u32) -> Result<u32, String> {
        self.record_score_total(total).map_err(|e| e.to_string())
    }

    fn running_average(&self) -> Result<u32, String> {
        self.running_average_total().map_err(|e| e.to_string())
    }
}
