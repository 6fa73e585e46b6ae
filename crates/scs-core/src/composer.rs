//! Clip composer: turns one consistency seed into exactly three clip records,
//! one per narrative beat (hook → escalation → resolution).
//!
//! Sentence templates differ per beat because each beat has a distinct
//! narrative function: establish → break → return. Clip 3 always references
//! the return to the opening frame and mirrors clip 1's framing; that shared
//! vocabulary is the structural basis of the loop sub-score.

use crate::error::CoreError;
use crate::lexicon::{viral_rule_for, Beat, ENVIRONMENTAL_CHANGES, LOOP_HINTS};
use crate::rng::pick;
use crate::seed::ConsistencySeed;
use rand::Rng;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Audio configuration
// ---------------------------------------------------------------------------

/// How the spoken track is produced, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioMode {
    None,
    Voiceover,
    Dialogue,
    Narration,
}

impl AudioMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioMode::None => "none",
            AudioMode::Voiceover => "voiceover",
            AudioMode::Dialogue => "dialogue",
            AudioMode::Narration => "narration",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Some(AudioMode::None),
            "voiceover" => Some(AudioMode::Voiceover),
            "dialogue" => Some(AudioMode::Dialogue),
            "narration" => Some(AudioMode::Narration),
            _ => None,
        }
    }
}

/// Spoken-line language. Static string lookup only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Bn,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bn => "bn",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Language::En),
            "bn" | "bangla" | "bengali" => Some(Language::Bn),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioConfig {
    pub mode: AudioMode,
    pub language: Language,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            mode: AudioMode::None,
            language: Language::En,
        }
    }
}

// ---------------------------------------------------------------------------
// Clip schema (the one canonical shape)
// ---------------------------------------------------------------------------

/// Camera, lighting, and scene plan for one clip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualPlan {
    pub camera_angle: String,
    pub camera_movement: String,
    pub framing: String,
    pub lighting: String,
    pub color_palette: String,
    pub scene_description: String,
}

/// Spoken line (absent when audio mode is `none`) plus the music cue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_over: Option<String>,
    pub background_music: String,
}

/// One of exactly three clips per script, numbered 1–3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    pub number: u8,
    /// Fixed 8-second window label, e.g. "0-8 seconds".
    pub duration: String,
    /// The viral rule pair this beat is built to satisfy.
    pub viral_rule: String,
    /// The generation prompt for this beat.
    pub core_prompt: String,
    pub visual: VisualPlan,
    pub audio: AudioPlan,
    /// Equals `seed.emotion_arc[number - 1]`.
    pub emotion: String,
}

impl Clip {
    /// The text a scorer searches: prompt plus scene description, lowercased.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.core_prompt, self.visual.scene_description).to_lowercase()
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Synthesizes the three clips for `seed`. Beat order is fixed: clip 1 hook,
/// clip 2 escalation, clip 3 resolution. The only failure mode is an empty
/// fragment table; a seed produced by `build_seed` always composes.
pub fn compose_clips<R: Rng + ?Sized>(
    seed: &ConsistencySeed,
    audio: AudioConfig,
    rng: &mut R,
) -> Result<[Clip; 3], CoreError> {
    let clips = [
        compose_hook(seed, audio),
        compose_escalation(seed, audio, rng)?,
        compose_resolution(seed, audio, rng)?,
    ];
    tracing::debug!(
        target: "scs::composer",
        tone = seed.tone.as_str(),
        audio = audio.mode.as_str(),
        "composed 3 clips"
    );
    Ok(clips)
}

fn compose_hook(seed: &ConsistencySeed, audio: AudioConfig) -> Clip {
    let beat = Beat::Hook;
    let tone = seed.tone;
    let core_prompt = format!(
        "{}, {}, {} color palette, {}, featuring {}, 9:16 vertical format, 24fps, cinematic quality, hyper realistic",
        tone.visual_style(),
        tone.lighting(),
        seed.palette,
        seed.location,
        seed.primary_object,
    );
    let scene_description = format!(
        "{}. A {} sits perfectly still. Everything appears normal. Then suddenly, {}.",
        seed.location,
        seed.primary_object,
        tone.shock_action(),
    );
    Clip {
        number: beat.index(),
        duration: beat.duration_label(),
        viral_rule: viral_rule_for(beat),
        core_prompt,
        visual: VisualPlan {
            camera_angle: "Low angle looking up at subject".to_string(),
            camera_movement: "Slow push in (0 to 20% zoom)".to_string(),
            framing: "Medium shot establishing scene".to_string(),
            lighting: tone.lighting().to_string(),
            color_palette: seed.palette.clone(),
            scene_description,
        },
        audio: audio_plan(seed, audio, beat),
        emotion: seed.emotion_arc[0].clone(),
    }
}

fn compose_escalation<R: Rng + ?Sized>(
    seed: &ConsistencySeed,
    audio: AudioConfig,
    rng: &mut R,
) -> Result<Clip, CoreError> {
    let beat = Beat::Escalation;
    let tone = seed.tone;
    let environmental_change = *pick(rng, ENVIRONMENTAL_CHANGES, "environmental changes")?;
    let core_prompt = format!(
        "{}, {} intensified, {} glowing dramatically, {} reality distorting, featuring {}, 9:16 vertical format, 24fps, surreal cinematic quality",
        tone.visual_style(),
        tone.lighting(),
        seed.palette,
        seed.location,
        seed.primary_object,
    );
    let scene_description = format!(
        "Same {}, but reality bends. The {} {}. {}. Impossible physics manifest visually.",
        seed.location,
        seed.primary_object,
        tone.escalation(),
        environmental_change,
    );
    Ok(Clip {
        number: beat.index(),
        duration: beat.duration_label(),
        viral_rule: viral_rule_for(beat),
        core_prompt,
        visual: VisualPlan {
            camera_angle: "Dutch angle tilted 15 degrees".to_string(),
            camera_movement: "Intense handheld shake or swirl".to_string(),
            framing: "Extreme close-up on impossible detail".to_string(),
            lighting: format!("{} + dramatic contrast", tone.lighting()),
            color_palette: format!("{} + glowing effects", seed.palette),
            scene_description,
        },
        audio: audio_plan(seed, audio, beat),
        emotion: seed.emotion_arc[1].clone(),
    })
}

fn compose_resolution<R: Rng + ?Sized>(
    seed: &ConsistencySeed,
    audio: AudioConfig,
    rng: &mut R,
) -> Result<Clip, CoreError> {
    let beat = Beat::Resolution;
    let tone = seed.tone;
    let loop_hint = *pick(rng, LOOP_HINTS, "loop hints")?;
    let core_prompt = format!(
        "{}, {}, {} subtle baseline, {}, {} centered, 9:16 vertical format, 24fps, matches Clip 1 composition, cinematic loop-ready",
        tone.visual_style(),
        tone.lighting(),
        seed.palette,
        seed.location,
        seed.primary_object,
    );
    let scene_description = format!(
        "Return to opening. {}, same angle as Clip 1. The {} {}. {}. Perfect loop point.",
        seed.location,
        seed.primary_object,
        tone.resolution(),
        loop_hint,
    );
    Ok(Clip {
        number: beat.index(),
        duration: beat.duration_label(),
        viral_rule: viral_rule_for(beat),
        core_prompt,
        visual: VisualPlan {
            camera_angle: "Eye level centered (matches Clip 1)".to_string(),
            camera_movement: "Slow pull out (reverse of Clip 1)".to_string(),
            framing: "Wide shot matching opening frame".to_string(),
            lighting: tone.lighting().to_string(),
            color_palette: seed.palette.clone(),
            scene_description,
        },
        audio: audio_plan(seed, audio, beat),
        emotion: seed.emotion_arc[2].clone(),
    })
}

fn audio_plan(seed: &ConsistencySeed, audio: AudioConfig, beat: Beat) -> AudioPlan {
    AudioPlan {
        voice_over: voice_line(audio, beat, &seed.primary_object),
        background_music: seed.tone.music(beat).to_string(),
    }
}

/// The beat- and language-indexed spoken line, or `None` when the audio mode
/// carries no speech.
fn voice_line(audio: AudioConfig, beat: Beat, object: &str) -> Option<String> {
    use AudioMode::*;
    use Language::*;
    let line = match (audio.mode, beat, audio.language) {
        (None, _, _) => return Option::None,

        (Voiceover, Beat::Hook, En) => {
            format!("I thought I knew what a {object} was. I was completely wrong.")
        }
        (Voiceover, Beat::Hook, Bn) => {
            format!("আমি ভেবেছিলাম {object} কি তা আমি জানি। আমি সম্পূর্ণ ভুল ছিলাম।")
        }
        (Voiceover, Beat::Escalation, En) => {
            "Reality doesn't work the way we think it does. Watch closely.".to_string()
        }
        (Voiceover, Beat::Escalation, Bn) => {
            "বাস্তবতা আমরা যেভাবে ভাবি সেভাবে কাজ করে না। ভালো করে দেখুন।".to_string()
        }
        (Voiceover, Beat::Resolution, En) => {
            "Some things can't be explained. They can only be experienced.".to_string()
        }
        (Voiceover, Beat::Resolution, Bn) => {
            "কিছু জিনিস ব্যাখ্যা করা যায় না। শুধু অনুভব করা যায়।".to_string()
        }

        (Dialogue, Beat::Hook, En) => format!("CHARACTER: \"What is that {object}?\""),
        (Dialogue, Beat::Hook, Bn) => format!("চরিত্র: \"ওটা কি {object}?\""),
        (Dialogue, Beat::Escalation, En) => "CHARACTER: \"This is impossible!\"".to_string(),
        (Dialogue, Beat::Escalation, Bn) => "চরিত্র: \"এটা অসম্ভব!\"".to_string(),
        (Dialogue, Beat::Resolution, En) => "CHARACTER: \"Did that really happen?\"".to_string(),
        (Dialogue, Beat::Resolution, Bn) => "চরিত্র: \"এটা কি সত্যিই ঘটল?\"".to_string(),

        (Narration, Beat::Hook, En) => {
            format!("An ordinary {object}. Or so everyone believed.")
        }
        (Narration, Beat::Hook, Bn) => {
            format!("একটি সাধারণ {object}। অন্তত সবাই তাই ভাবত।")
        }
        (Narration, Beat::Escalation, En) => {
            "Then the rules began to break, one by one.".to_string()
        }
        (Narration, Beat::Escalation, Bn) => {
            "তারপর নিয়মগুলো একে একে ভাঙতে শুরু করল।".to_string()
        }
        (Narration, Beat::Resolution, En) => {
            "And everything returned to how it began. Almost.".to_string()
        }
        (Narration, Beat::Resolution, Bn) => {
            "এবং সবকিছু আবার আগের মতো হয়ে গেল। প্রায়।".to_string()
        }
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Tone;
    use crate::seed::build_seed;
    use rand::{rngs::StdRng, SeedableRng};

    fn seed_for(tone: Tone) -> ConsistencySeed {
        let mut rng = StdRng::seed_from_u64(1);
        build_seed("Reality Errors", tone, &mut rng).unwrap()
    }

    #[test]
    fn produces_three_ordered_clips_for_every_tone() {
        for tone in crate::lexicon::ALL_TONES {
            let seed = seed_for(tone);
            let mut rng = StdRng::seed_from_u64(2);
            let clips = compose_clips(&seed, AudioConfig::default(), &mut rng).unwrap();
            assert_eq!(clips.len(), 3);
            for (i, clip) in clips.iter().enumerate() {
                assert_eq!(clip.number as usize, i + 1);
            }
            assert_eq!(clips[0].duration, "0-8 seconds");
            assert_eq!(clips[1].duration, "8-16 seconds");
            assert_eq!(clips[2].duration, "16-24 seconds");
        }
    }

    #[test]
    fn every_clip_references_the_seed_object_and_location() {
        let seed = seed_for(Tone::DarkMystery);
        let mut rng = StdRng::seed_from_u64(5);
        let clips = compose_clips(&seed, AudioConfig::default(), &mut rng).unwrap();
        for clip in &clips {
            assert!(clip.core_prompt.contains(&seed.primary_object));
            assert!(clip.core_prompt.contains(&seed.location));
            assert!(clip.visual.scene_description.contains(&seed.primary_object));
            assert!(clip.visual.scene_description.contains(&seed.location));
        }
    }

    #[test]
    fn emotions_follow_the_arc_in_order() {
        let seed = seed_for(Tone::ComedyBright);
        let mut rng = StdRng::seed_from_u64(6);
        let clips = compose_clips(&seed, AudioConfig::default(), &mut rng).unwrap();
        for (i, clip) in clips.iter().enumerate() {
            assert_eq!(clip.emotion, seed.emotion_arc[i]);
        }
    }

    #[test]
    fn clip3_returns_to_the_opening_frame() {
        for tone in crate::lexicon::ALL_TONES {
            let seed = seed_for(tone);
            let mut rng = StdRng::seed_from_u64(7);
            let clips = compose_clips(&seed, AudioConfig::default(), &mut rng).unwrap();
            assert!(clips[2]
                .visual
                .scene_description
                .starts_with("Return to opening."));
            assert!(clips[2].visual.framing.contains("matching opening frame"));
            assert!(clips[2].core_prompt.contains("matches Clip 1 composition"));
        }
    }

    #[test]
    fn audio_mode_none_omits_speech_but_keeps_music() {
        let seed = seed_for(Tone::WarmEmotional);
        let mut rng = StdRng::seed_from_u64(8);
        let clips = compose_clips(&seed, AudioConfig::default(), &mut rng).unwrap();
        for clip in &clips {
            assert!(clip.audio.voice_over.is_none());
            assert!(!clip.audio.background_music.is_empty());
        }
    }

    #[test]
    fn voiceover_lines_are_beat_and_language_indexed() {
        let seed = seed_for(Tone::SurrealDream);
        let mut rng = StdRng::seed_from_u64(9);
        let cfg = AudioConfig {
            mode: AudioMode::Voiceover,
            language: Language::En,
        };
        let clips = compose_clips(&seed, cfg, &mut rng).unwrap();
        let first = clips[0].audio.voice_over.as_deref().unwrap();
        assert!(first.contains(&seed.primary_object));
        assert_eq!(
            clips[1].audio.voice_over.as_deref(),
            Some("Reality doesn't work the way we think it does. Watch closely.")
        );

        let bn = AudioConfig {
            mode: AudioMode::Dialogue,
            language: Language::Bn,
        };
        let mut rng = StdRng::seed_from_u64(9);
        let clips = compose_clips(&seed, bn, &mut rng).unwrap();
        assert_eq!(clips[1].audio.voice_over.as_deref(), Some("চরিত্র: \"এটা অসম্ভব!\""));
    }

    #[test]
    fn narration_mode_has_lines_for_every_beat() {
        let seed = seed_for(Tone::CinematicEpic);
        for language in [Language::En, Language::Bn] {
            let cfg = AudioConfig {
                mode: AudioMode::Narration,
                language,
            };
            let mut rng = StdRng::seed_from_u64(10);
            let clips = compose_clips(&seed, cfg, &mut rng).unwrap();
            for clip in &clips {
                assert!(clip.audio.voice_over.is_some());
            }
        }
    }

    #[test]
    fn music_is_a_tone_and_beat_lookup() {
        let seed = seed_for(Tone::HorrorTension);
        let mut rng = StdRng::seed_from_u64(12);
        let clips = compose_clips(&seed, AudioConfig::default(), &mut rng).unwrap();
        assert_eq!(
            clips[0].audio.background_music,
            "Deep ominous drone with unsettling bass rumble"
        );
        assert_eq!(
            clips[2].audio.background_music,
            "Haunting silence with breathing sound design"
        );
    }

    #[test]
    fn audio_mode_and_language_labels_round_trip() {
        for mode in [AudioMode::None, AudioMode::Voiceover, AudioMode::Dialogue, AudioMode::Narration] {
            assert_eq!(AudioMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(Language::from_str("Bengali"), Some(Language::Bn));
        assert_eq!(AudioMode::from_str("karaoke"), Option::None);
    }
}
