//! Remix operator: keep the continuity fields of an existing seed, redraw the
//! mood-bearing fields under a freshly drawn tone.

use crate::lexicon::{Tone, ALL_TONES};
use crate::seed::ConsistencySeed;
use rand::Rng;

/// Produces a new seed from `seed`. The tone is drawn uniformly from the
/// fixed tone enumeration (a repeat of the current tone is allowed); palette,
/// ambient sound, and emotion arc follow the new tone. `primary_object`,
/// `location`, and `category` are preserved: continuity across a remix is
/// object + location.
pub fn remix<R: Rng + ?Sized>(seed: &ConsistencySeed, rng: &mut R) -> ConsistencySeed {
    let new_tone: Tone = ALL_TONES[rng.gen_range(0..ALL_TONES.len())];
    tracing::debug!(
        target: "scs::seed",
        from = seed.tone.as_str(),
        to = new_tone.as_str(),
        "remixing seed"
    );
    ConsistencySeed {
        primary_object: seed.primary_object.clone(),
        location: seed.location.clone(),
        palette: new_tone.palette().to_string(),
        ambient_sound: new_tone.ambient_sound().to_string(),
        emotion_arc: new_tone.emotion_arc().map(String::from),
        tone: new_tone,
        category: seed.category.clone(),
    }
}
