//! Viral score engine: five keyword/structure sub-scores combined by a fixed
//! weighted sum into one 0–100 total.
//!
//! The keyword lists, base values, and per-match bonuses are a hand-tuned
//! heuristic, not a fitted model, so they live in [`ScoreConfig`] as plain
//! serde data and can be replaced from a TOML file. The combination weights
//! are deliberately NOT configurable: they must sum to 1.00 and are never
//! renormalized, even if a sub-score rule changes.

use crate::composer::Clip;
use crate::script::Script;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Fixed combination weights: shock, visual, weird, loop, emotion.
pub const WEIGHT_SHOCK: f64 = 0.25;
pub const WEIGHT_VISUAL: f64 = 0.20;
pub const WEIGHT_WEIRD: f64 = 0.20;
pub const WEIGHT_LOOP: f64 = 0.20;
pub const WEIGHT_EMOTION: f64 = 0.15;

// ---------------------------------------------------------------------------
// Configuration (replaceable heuristic data)
// ---------------------------------------------------------------------------

/// Keyword-counting rule: base value plus a bonus per match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub base: u32,
    pub per_match: u32,
    pub keywords: Vec<String>,
}

/// Structural-richness rule for the visual sub-score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualRule {
    pub base: u32,
    pub per_check: u32,
    /// Minimum searchable-text length every clip must exceed.
    pub min_text_len: usize,
    /// Marker every clip's prompt must carry (vertical aspect ratio).
    pub aspect_marker: String,
}

/// Shared-vocabulary rule for the loop sub-score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopRule {
    pub base: u32,
    pub per_shared_word: u32,
    /// Words must be strictly longer than this to count.
    pub min_word_len: usize,
}

/// Emotional-completeness rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionRule {
    pub base: u32,
    /// Bonus when every clip carries a non-empty emotion label.
    pub emotion_bonus: u32,
    /// Bonus when every clip carries a non-empty music cue.
    pub music_bonus: u32,
}

/// The full heuristic configuration. `Default` is the documented variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    pub shock: KeywordRule,
    pub weird: KeywordRule,
    pub visual: VisualRule,
    #[serde(rename = "loop")]
    pub loop_rule: LoopRule,
    pub emotion: EmotionRule,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        let to_owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        Self {
            shock: KeywordRule {
                base: 75,
                per_match: 5,
                keywords: to_owned(&["suddenly", "impossible", "dramatic", "shock", "reveals"]),
            },
            weird: KeywordRule {
                base: 70,
                per_match: 5,
                keywords: to_owned(&["impossible", "distort", "surreal", "defying", "reality"]),
            },
            visual: VisualRule {
                base: 80,
                per_check: 10,
                min_text_len: 200,
                aspect_marker: "9:16".to_string(),
            },
            loop_rule: LoopRule {
                base: 70,
                per_shared_word: 2,
                min_word_len: 5,
            },
            emotion: EmotionRule {
                base: 75,
                emotion_bonus: 15,
                music_bonus: 10,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// The five fixed sub-scores, each already clamped to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub shock: u32,
    pub visual: u32,
    pub weird: u32,
    #[serde(rename = "loop")]
    pub loop_score: u32,
    pub emotion: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// `round(Σ weight_i * breakdown_i)`, in 0..=100.
    pub total: u32,
    pub breakdown: ScoreBreakdown,
}

/// Combines an already-clamped breakdown with the fixed weights.
pub fn combine(breakdown: ScoreBreakdown) -> u32 {
    let total = WEIGHT_SHOCK * breakdown.shock as f64
        + WEIGHT_VISUAL * breakdown.visual as f64
        + WEIGHT_WEIRD * breakdown.weird as f64
        + WEIGHT_LOOP * breakdown.loop_score as f64
        + WEIGHT_EMOTION * breakdown.emotion as f64;
    total.round() as u32
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Deterministic, rule-weighted scorer over a finished script. Pure: no
/// stored state beyond the configuration, no I/O.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    config: ScoreConfig,
}

impl ScoreEngine {
    pub fn new(config: ScoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    pub fn score(&self, script: &Script) -> ScoreResult {
        let breakdown = ScoreBreakdown {
            shock: self.score_shock(script),
            visual: self.score_visual(script),
            weird: self.score_weird(script),
            loop_score: self.score_loop(script),
            emotion: self.score_emotion(script),
        };
        let total = combine(breakdown).min(100);
        tracing::debug!(
            target: "scs::score",
            total,
            shock = breakdown.shock,
            visual = breakdown.visual,
            weird = breakdown.weird,
            loop_score = breakdown.loop_score,
            emotion = breakdown.emotion,
            "script scored"
        );
        ScoreResult { total, breakdown }
    }

    /// Shock: distinct shock keywords in clip 1's text.
    fn score_shock(&self, script: &Script) -> u32 {
        let rule = &self.config.shock;
        let text = script.clips[0].searchable_text();
        let matches = rule
            .keywords
            .iter()
            .filter(|word| text.contains(word.as_str()))
            .count() as u32;
        clamp(rule.base + matches * rule.per_match)
    }

    /// Visual: three structural richness checks over all clips.
    fn score_visual(&self, script: &Script) -> u32 {
        let rule = &self.config.visual;
        let clips = &script.clips;
        let mut satisfied = 0u32;
        if clips.iter().all(|c| c.searchable_text().len() > rule.min_text_len) {
            satisfied += 1;
        }
        if clips.iter().all(|c| {
            !c.visual.camera_angle.trim().is_empty() && !c.visual.lighting.trim().is_empty()
        }) {
            satisfied += 1;
        }
        if clips.iter().all(|c| c.core_prompt.contains(&rule.aspect_marker)) {
            satisfied += 1;
        }
        clamp(rule.base + satisfied * rule.per_check)
    }

    /// Weird: reality-break keywords counted across all three clips.
    fn score_weird(&self, script: &Script) -> u32 {
        let rule = &self.config.weird;
        let matches: u32 = script
            .clips
            .iter()
            .map(|clip| {
                let text = clip.searchable_text();
                rule.keywords
                    .iter()
                    .filter(|word| text.contains(word.as_str()))
                    .count() as u32
            })
            .sum();
        clamp(rule.base + matches * rule.per_match)
    }

    /// Loop: distinct words (longer than `min_word_len`) shared between
    /// clip 1 and clip 3, whitespace-tokenized and case-insensitive.
    fn score_loop(&self, script: &Script) -> u32 {
        let rule = &self.config.loop_rule;
        let shared = shared_long_words(&script.clips[0], &script.clips[2], rule.min_word_len);
        clamp(rule.base + shared as u32 * rule.per_shared_word)
    }

    /// Emotion: every clip labeled with an emotion, every clip carrying music.
    fn score_emotion(&self, script: &Script) -> u32 {
        let rule = &self.config.emotion;
        let clips = &script.clips;
        let mut score = rule.base;
        if clips.iter().all(|c| !c.emotion.trim().is_empty()) {
            score += rule.emotion_bonus;
        }
        if clips.iter().all(|c| !c.audio.background_music.trim().is_empty()) {
            score += rule.music_bonus;
        }
        clamp(score)
    }
}

fn clamp(score: u32) -> u32 {
    score.min(100)
}

/// Distinct shared words longer than `min_len`, over the clips' searchable text.
fn shared_long_words(a: &Clip, b: &Clip, min_len: usize) -> usize {
    let words = |clip: &Clip| -> HashSet<String> {
        clip.searchable_text()
            .split_whitespace()
            .filter(|w| w.chars().count() > min_len)
            .map(|w| w.to_string())
            .collect()
    };
    words(a).intersection(&words(b)).count()
}

// ---------------------------------------------------------------------------
// Score history (consumed collaborator interface)
// ---------------------------------------------------------------------------

/// Rolling score aggregation, implemented by the persistence collaborator.
/// The engine only assumes these signatures.
pub trait ScoreHistory {
    /// Records a total and returns the new running average (rounded).
    fn record_score(&self, total: u32) -> Result<u32, String>;
    /// The current running average, 0 when no scores have been recorded.
    fn running_average(&self) -> Result<u32, String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::{compose_clips, AudioConfig, AudioPlan, VisualPlan};
    use crate::lexicon::{Tone, ALL_TONES};
    use crate::script::{Script, ScriptMetadata};
    use crate::seed::{build_seed, ConsistencySeed};
    use rand::{rngs::StdRng, SeedableRng};

    fn generated_script(tone: Tone, rng_seed: u64) -> Script {
        let mut rng = StdRng::seed_from_u64(rng_seed);
        let seed = build_seed("Reality Errors", tone, &mut rng).unwrap();
        let audio = AudioConfig::default();
        let clips = compose_clips(&seed, audio, &mut rng).unwrap();
        Script::assemble(seed, clips, audio)
    }

    /// A synthetic script whose clip texts are fully controlled, for exact
    /// sub-score assertions.
    fn synthetic_script(texts: [&str; 3]) -> Script {
        let seed = ConsistencySeed {
            primary_object: "prop".to_string(),
            location: "set".to_string(),
            palette: "flat gray".to_string(),
            ambient_sound: "room tone".to_string(),
            emotion_arc: ["calm".to_string(), "tense".to_string(), "calm".to_string()],
            tone: Tone::DarkMystery,
            category: "Reality Errors".to_string(),
        };
        let clips = [0usize, 1, 2].map(|i| crate::composer::Clip {
            number: (i + 1) as u8,
            duration: format!("{}-{} seconds", i * 8, (i + 1) * 8),
            viral_rule: String::new(),
            core_prompt: texts[i].to_string(),
            visual: VisualPlan {
                camera_angle: "eye level".to_string(),
                camera_movement: "static".to_string(),
                framing: "medium".to_string(),
                lighting: "flat".to_string(),
                color_palette: "flat gray".to_string(),
                scene_description: String::new(),
            },
            audio: AudioPlan {
                voice_over: None,
                background_music: "cue".to_string(),
            },
            emotion: "calm".to_string(),
        });
        Script {
            seed,
            clips,
            metadata: ScriptMetadata {
                category: "Reality Errors".to_string(),
                tone: Tone::DarkMystery,
                audio_mode: "none".to_string(),
                language: "en".to_string(),
                generated_at: "2024-01-01T00:00:00+00:00".to_string(),
            },
            score: None,
        }
    }

    #[test]
    fn weight_law_on_a_fixed_breakdown() {
        let breakdown = ScoreBreakdown {
            shock: 80,
            visual: 90,
            weird: 70,
            loop_score: 100,
            emotion: 60,
        };
        assert_eq!(combine(breakdown), 81);
    }

    #[test]
    fn weights_sum_to_one() {
        let sum = WEIGHT_SHOCK + WEIGHT_VISUAL + WEIGHT_WEIRD + WEIGHT_LOOP + WEIGHT_EMOTION;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn generated_scripts_stay_in_bounds_for_every_tone() {
        let engine = ScoreEngine::default();
        for (i, tone) in ALL_TONES.into_iter().enumerate() {
            let script = generated_script(tone, 100 + i as u64);
            let result = engine.score(&script);
            assert!(result.total <= 100);
            for sub in [
                result.breakdown.shock,
                result.breakdown.visual,
                result.breakdown.weird,
                result.breakdown.loop_score,
                result.breakdown.emotion,
            ] {
                assert!(sub <= 100, "sub-score {} out of bounds for {}", sub, tone.as_str());
            }
        }
    }

    #[test]
    fn loop_score_is_base_without_shared_vocabulary() {
        // No word longer than 5 chars appears in both clip 1 and clip 3.
        let script = synthetic_script(["alpha beta pencil", "middle", "quartz zebra plums"]);
        let engine = ScoreEngine::default();
        let result = engine.score(&script);
        assert_eq!(result.breakdown.loop_score, ScoreConfig::default().loop_rule.base);
    }

    #[test]
    fn one_shared_six_letter_word_adds_the_fixed_increment() {
        let base_script = synthetic_script(["alpha beta pencil", "middle", "quartz zebra plums"]);
        let bonus_script = synthetic_script([
            "alpha beta pencil violet",
            "middle",
            "quartz zebra plums violet",
        ]);
        let engine = ScoreEngine::default();
        let rule = ScoreConfig::default().loop_rule;
        let base = engine.score(&base_script).breakdown.loop_score;
        let with_bonus = engine.score(&bonus_script).breakdown.loop_score;
        assert_eq!(base, rule.base);
        assert_eq!(with_bonus, rule.base + rule.per_shared_word);
        assert!(with_bonus >= base);
    }

    #[test]
    fn shock_counts_distinct_keywords_in_clip1_only() {
        // "suddenly" twice counts once; "reveals" in clip 3 does not count.
        let script = synthetic_script([
            "suddenly it moved suddenly and the impossible happened",
            "quiet",
            "it reveals nothing",
        ]);
        let engine = ScoreEngine::default();
        let rule = &ScoreConfig::default().shock;
        assert_eq!(
            engine.score(&script).breakdown.shock,
            rule.base + 2 * rule.per_match
        );
    }

    #[test]
    fn weird_sums_matches_across_all_clips() {
        let script = synthetic_script([
            "reality bends",
            "impossible surreal scene",
            "colors distort",
        ]);
        let engine = ScoreEngine::default();
        let rule = &ScoreConfig::default().weird;
        // reality (1) + impossible, surreal (2) + distort (1) = 4 matches.
        assert_eq!(
            engine.score(&script).breakdown.weird,
            rule.base + 4 * rule.per_match
        );
    }

    #[test]
    fn emotion_rewards_complete_labels_and_music() {
        let engine = ScoreEngine::default();
        let rule = ScoreConfig::default().emotion;

        let complete = synthetic_script(["a", "b", "c"]);
        assert_eq!(
            engine.score(&complete).breakdown.emotion,
            rule.base + rule.emotion_bonus + rule.music_bonus
        );

        let mut missing_music = synthetic_script(["a", "b", "c"]);
        missing_music.clips[1].audio.background_music.clear();
        assert_eq!(
            engine.score(&missing_music).breakdown.emotion,
            rule.base + rule.emotion_bonus
        );
    }

    #[test]
    fn full_generated_script_hits_the_visual_checks() {
        // Real compositions carry long prompts, camera + lighting, and the
        // 9:16 marker in every clip, so all three checks are satisfied.
        let engine = ScoreEngine::default();
        let script = generated_script(Tone::SurrealDream, 55);
        assert_eq!(engine.score(&script).breakdown.visual, 100);
    }

    #[test]
    fn config_overrides_parse_from_toml() {
        let toml_src = r#"
            [shock]
            base = 70
            per_match = 10
            keywords = ["gasp", "twist"]

            [loop]
            base = 72
            per_shared_word = 4
            min_word_len = 4
        "#;
        let config: ScoreConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.shock.base, 70);
        assert_eq!(config.shock.keywords, vec!["gasp", "twist"]);
        assert_eq!(config.loop_rule.per_shared_word, 4);
        // Sections left out fall back to the documented defaults.
        assert_eq!(config.visual, ScoreConfig::default().visual);
        assert_eq!(config.emotion, ScoreConfig::default().emotion);
    }
}
