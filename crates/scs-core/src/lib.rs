//! scs-core: ShortCircuit Studio engine.
//!
//! Deterministic pipeline over in-memory data: lexicon → seed builder → clip
//! composer → script assembler → viral score engine. No I/O, no ambient
//! state; randomness is an injected `rand::Rng` and persistence is a
//! collaborator behind the [`ScoreHistory`] trait.

mod composer;
mod error;
mod lexicon;
mod remix;
mod rng;
mod score;
mod script;
mod seed;

pub use composer::{
    compose_clips, AudioConfig, AudioMode, AudioPlan, Clip, Language, VisualPlan,
};
pub use error::CoreError;
pub use lexicon::{
    category_names, category_objects, viral_rule_for, Beat, Tone, ALL_BEATS, ALL_TONES,
    CATEGORY_OBJECTS, ENVIRONMENTAL_CHANGES, LOOP_HINTS, VIRAL_RULES,
};
pub use remix::remix;
pub use rng::pick;
pub use score::{
    combine, EmotionRule, KeywordRule, LoopRule, ScoreBreakdown, ScoreConfig, ScoreEngine,
    ScoreHistory, ScoreResult, VisualRule, WEIGHT_EMOTION, WEIGHT_LOOP, WEIGHT_SHOCK,
    WEIGHT_VISUAL, WEIGHT_WEIRD,
};
pub use script::{Script, ScriptMetadata};
pub use seed::{build_seed, ConsistencySeed};

/// Convenience: build a seed, compose its clips, and assemble the script in
/// one call (the generate flow the front-end drives).
pub fn generate_script<R: rand::Rng + ?Sized>(
    category: &str,
    tone: Tone,
    audio: AudioConfig,
    rng: &mut R,
) -> Result<Script, CoreError> {
    let seed = build_seed(category, tone, rng)?;
    let clips = compose_clips(&seed, audio, rng)?;
    Ok(Script::assemble(seed, clips, audio))
}
