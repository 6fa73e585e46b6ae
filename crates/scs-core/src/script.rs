//! Script assembler: bundles one seed, its three clips, and generation
//! metadata into a single immutable record.

use crate::composer::{AudioConfig, Clip};
use crate::lexicon::Tone;
use crate::seed::ConsistencySeed;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptMetadata {
    pub category: String,
    pub tone: Tone,
    pub audio_mode: String,
    pub language: String,
    /// RFC 3339 generation timestamp.
    pub generated_at: String,
}

/// One generated script. Immutable after assembly except for the
/// externally-attached score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub seed: ConsistencySeed,
    pub clips: [Clip; 3],
    pub metadata: ScriptMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl Script {
    /// Assembles a script from one seed and the three clips composed from it,
    /// stamping the generation metadata.
    pub fn assemble(seed: ConsistencySeed, clips: [Clip; 3], audio: AudioConfig) -> Self {
        let metadata = ScriptMetadata {
            category: seed.category.clone(),
            tone: seed.tone,
            audio_mode: audio.mode.as_str().to_string(),
            language: audio.language.as_str().to_string(),
            generated_at: Utc::now().to_rfc3339(),
        };
        tracing::info!(
            target: "scs::composer",
            category = %metadata.category,
            tone = metadata.tone.as_str(),
            "script assembled"
        );
        Self {
            seed,
            clips,
            metadata,
            score: None,
        }
    }

    /// Returns a copy with the viral score attached.
    pub fn with_score(mut self, total: u32) -> Self {
        self.score = Some(total);
        self
    }
}
