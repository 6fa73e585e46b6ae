//! ShortCircuit Studio CLI.
//!
//! Thin presentation glue over scs-core + scs-store: the core produces the
//! script and score as plain data, this binary owns all I/O (terminal output,
//! history storage, config files).

use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use scs_core::{
    category_names, compose_clips, generate_script, remix, AudioConfig, AudioMode, Language,
    ScoreConfig, ScoreEngine, ScoreHistory, ScoreResult, Script, Tone, ALL_TONES,
};
use scs_store::HistoryStore;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliError = Box<dyn std::error::Error>;

#[derive(Parser)]
#[command(name = "scs-studio", about = "Procedural 3-clip viral video script studio")]
struct Cli {
    /// Seed for the random source (reproducible output).
    #[arg(long, global = true)]
    rng_seed: Option<u64>,

    /// Emit JSON instead of formatted clip boxes.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a new script, score it, and persist it to the history.
    Generate {
        #[arg(long)]
        category: String,
        #[arg(long)]
        tone: String,
        /// none | voiceover | dialogue | narration
        #[arg(long, default_value = "none")]
        audio: String,
        /// en | bn
        #[arg(long, default_value = "en")]
        language: String,
    },
    /// Remix the most recent script: same object and location, new mood.
    Remix,
    /// Re-score the most recent script and record the total.
    Score,
    /// Show the stored history, newest first.
    History {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Drop every stored script.
    ClearHistory,
    /// Show the running average over recorded scores.
    Average,
    /// List the category catalog.
    Categories,
    /// List the tone catalog.
    Tones,
}

fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let store = open_store()?;
    let engine = ScoreEngine::new(load_score_config()?);
    let mut rng = match cli.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.command {
        Command::Generate {
            category,
            tone,
            audio,
            language,
        } => {
            let tone = Tone::from_str(&tone)?;
            let audio = parse_audio(&audio, &language)?;
            let script = generate_script(&category, tone, audio, &mut rng)?;
            finish_script(script, &engine, &store, cli.json)?;
        }
        Command::Remix => {
            let latest = latest_script(&store)?;
            let seed = remix(&latest.seed, &mut rng);
            let audio = AudioConfig {
                mode: AudioMode::from_str(&latest.metadata.audio_mode)
                    .unwrap_or(AudioMode::None),
                language: Language::from_str(&latest.metadata.language)
                    .unwrap_or(Language::En),
            };
            let clips = compose_clips(&seed, audio, &mut rng)?;
            let script = Script::assemble(seed, clips, audio);
            finish_script(script, &engine, &store, cli.json)?;
        }
        Command::Score => {
            let latest = latest_script(&store)?;
            let result = engine.score(&latest);
            let average = store.record_score(result.total)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_score(&result, average);
            }
        }
        Command::History { limit } => {
            let entries = store.history(limit)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("(history is empty)");
            } else {
                for entry in entries {
                    println!(
                        "{}  {}  {} / {}  score {}",
                        entry.timestamp_ms,
                        &entry.hash[..12],
                        entry.script.metadata.category,
                        entry.script.metadata.tone.as_str(),
                        entry
                            .script
                            .score
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "-".into()),
                    );
                }
            }
        }
        Command::ClearHistory => {
            store.clear_history()?;
            println!("History cleared.");
        }
        Command::Average => {
            println!("Running average: {}", store.running_average()?);
        }
        Command::Categories => {
            for name in category_names() {
                println!("{name}");
            }
        }
        Command::Tones => {
            for tone in ALL_TONES {
                println!("{}", tone.as_str());
            }
        }
    }
    Ok(())
}

fn open_store() -> Result<HistoryStore, CliError> {
    let base = std::env::var("SCS_STORAGE_PATH").unwrap_or_else(|_| "./data".to_string());
    let path = PathBuf::from(base).join("scs_history");
    Ok(HistoryStore::open_path(path)?)
}

/// Optional score-heuristic overrides from a TOML file (SCS_SCORE_CONFIG).
fn load_score_config() -> Result<ScoreConfig, CliError> {
    match std::env::var("SCS_SCORE_CONFIG") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)?;
            let config = toml::from_str(&raw)?;
            tracing::info!(target: "scs::studio", %path, "score config loaded");
            Ok(config)
        }
        Err(_) => Ok(ScoreConfig::default()),
    }
}

fn parse_audio(mode: &str, language: &str) -> Result<AudioConfig, CliError> {
    let mode = AudioMode::from_str(mode)
        .ok_or_else(|| format!("unknown audio mode: {mode:?} (none | voiceover | dialogue | narration)"))?;
    let language = Language::from_str(language)
        .ok_or_else(|| format!("unknown language: {language:?} (en | bn)"))?;
    Ok(AudioConfig { mode, language })
}

/// Score, persist, and print a freshly assembled script (the generate flow).
fn finish_script(
    script: Script,
    engine: &ScoreEngine,
    store: &HistoryStore,
    json: bool,
) -> Result<(), CliError> {
    let result = engine.score(&script);
    let scored = script.with_score(result.total);
    let stored = store.persist(&scored)?;
    let average = store.record_score(result.total)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&scored)?);
    } else {
        print_script(&scored);
        print_score(&result, average);
        if !stored {
            println!("(identical script already in history; not stored again)");
        }
    }
    Ok(())
}

fn latest_script(store: &HistoryStore) -> Result<Script, CliError> {
    store
        .history(1)?
        .into_iter()
        .next()
        .map(|entry| entry.script)
        .ok_or_else(|| "history is empty; run `generate` first".into())
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn print_script(script: &Script) {
    println!("=== CONSISTENCY SEED ===");
    println!("Primary Object : {}", script.seed.primary_object);
    println!("Location       : {}", script.seed.location);
    println!("Color Palette  : {}", script.seed.palette);
    println!("Ambient Sound  : {}", script.seed.ambient_sound);
    println!("Emotion Arc    : {}", script.seed.emotion_arc.join(" → "));
    println!();

    for clip in &script.clips {
        println!("--- CLIP {} ({}) ---", clip.number, clip.duration);
        println!("VIRAL RULE:\n{}\n", clip.viral_rule);
        println!("CORE PROMPT:\n{}\n", clip.core_prompt);
        println!("VISUAL:");
        println!("Camera Angle: {}", clip.visual.camera_angle);
        println!("Camera Movement: {}", clip.visual.camera_movement);
        println!("Framing: {}", clip.visual.framing);
        println!("Lighting: {}", clip.visual.lighting);
        println!("Color Palette: {}", clip.visual.color_palette);
        println!("Scene: {}", clip.visual.scene_description);
        if let Some(voice) = &clip.audio.voice_over {
            println!("VOICE OVER:\n{voice}");
        }
        println!("BACKGROUND MUSIC:\n{}", clip.audio.background_music);
        println!("Emotion: {}", clip.emotion);
        println!();
    }
}

fn print_score(result: &ScoreResult, average: u32) {
    println!("=== VIRAL SCORE ===");
    println!(
        "Total {}  (shock {} | visual {} | weird {} | loop {} | emotion {})",
        result.total,
        result.breakdown.shock,
        result.breakdown.visual,
        result.breakdown.weird,
        result.breakdown.loop_score,
        result.breakdown.emotion,
    );
    println!("Running average: {average}");
}
