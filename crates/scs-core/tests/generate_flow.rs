//! End-to-end generate → remix → score flow over the public API.

use rand::{rngs::StdRng, SeedableRng};
use scs_core::{
    category_objects, compose_clips, generate_script, remix, AudioConfig, AudioMode, Language,
    ScoreEngine, Script, Tone, ALL_TONES,
};

#[test]
fn reality_errors_creepy_scenario() {
    let tone = Tone::from_str("Creepy").unwrap();
    assert_eq!(tone, Tone::HorrorTension);

    let mut rng = StdRng::seed_from_u64(2024);
    let audio = AudioConfig {
        mode: AudioMode::None,
        language: Language::En,
    };
    let script = generate_script("Reality Errors", tone, audio, &mut rng).unwrap();

    let objects = category_objects("Reality Errors").unwrap();
    assert!(objects.contains(&script.seed.primary_object.as_str()));
    assert!(tone.locations().contains(&script.seed.location.as_str()));

    for (i, clip) in script.clips.iter().enumerate() {
        assert_eq!(clip.emotion, script.seed.emotion_arc[i]);
        assert!(clip.audio.voice_over.is_none());
    }

    let result = ScoreEngine::default().score(&script);
    assert!(result.total <= 100);
}

#[test]
fn every_category_and_tone_pair_generates_three_ordered_clips() {
    let engine = ScoreEngine::default();
    for (category, _) in scs_core::CATEGORY_OBJECTS {
        for tone in ALL_TONES {
            let mut rng = StdRng::seed_from_u64(7);
            let script =
                generate_script(category, tone, AudioConfig::default(), &mut rng).unwrap();
            assert_eq!(script.clips.len(), 3);
            for (i, clip) in script.clips.iter().enumerate() {
                assert_eq!(clip.number as usize, i + 1);
                let text = clip.searchable_text();
                assert!(text.contains(&script.seed.primary_object.to_lowercase()));
                assert!(text.contains(&script.seed.location.to_lowercase()));
            }
            assert!(engine.score(&script).total <= 100);
        }
    }
}

#[test]
fn remixed_seed_recomposes_into_a_consistent_script() {
    let mut rng = StdRng::seed_from_u64(404);
    let audio = AudioConfig::default();
    let script = generate_script("Parallel Me", Tone::SurrealDream, audio, &mut rng).unwrap();

    let remixed_seed = remix(&script.seed, &mut rng);
    let clips = compose_clips(&remixed_seed, audio, &mut rng).unwrap();
    let remixed_script = Script::assemble(remixed_seed, clips, audio);

    assert_eq!(
        remixed_script.seed.primary_object,
        script.seed.primary_object
    );
    assert_eq!(remixed_script.seed.location, script.seed.location);
    assert_eq!(remixed_script.metadata.category, "Parallel Me");
    for clip in &remixed_script.clips {
        assert!(clip
            .visual
            .scene_description
            .contains(&script.seed.primary_object));
    }
}

#[test]
fn scored_script_serializes_and_deserializes_unchanged() {
    let mut rng = StdRng::seed_from_u64(8);
    let audio = AudioConfig {
        mode: AudioMode::Voiceover,
        language: Language::Bn,
    };
    let script = generate_script("Urban Myths 2.0", Tone::DarkMystery, audio, &mut rng).unwrap();
    let scored = script.clone().with_score(ScoreEngine::default().score(&script).total);

    let json = serde_json::to_string_pretty(&scored).unwrap();
    let back: Script = serde_json::from_str(&json).unwrap();
    assert_eq!(back, scored);
}
