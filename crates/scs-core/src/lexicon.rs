//! Static lookup tables: categories → primary objects; tones → locations,
//! palettes, ambient sounds, emotion arcs, beat phrases, music cues.
//!
//! Pure data, no behavior. The tone-keyed tables are total over the [`Tone`]
//! enum, so a valid tone can never miss a lookup; the only fallible lookup is
//! the category table, which is an open string set from the UI.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tone: mood selector keying every tone-dependent table
// ---------------------------------------------------------------------------

/// The six canonical tones. Keys the location, palette, sound, emotion-arc,
/// beat-phrase, and music tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    CinematicEpic,
    DarkMystery,
    WarmEmotional,
    SurrealDream,
    HorrorTension,
    ComedyBright,
}

/// The fixed tone enumeration the remix operator draws from.
pub const ALL_TONES: [Tone; 6] = [
    Tone::CinematicEpic,
    Tone::DarkMystery,
    Tone::WarmEmotional,
    Tone::SurrealDream,
    Tone::HorrorTension,
    Tone::ComedyBright,
];

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::CinematicEpic => "Cinematic Epic",
            Tone::DarkMystery => "Dark Mystery",
            Tone::WarmEmotional => "Warm Emotional",
            Tone::SurrealDream => "Surreal Dream",
            Tone::HorrorTension => "Horror Tension",
            Tone::ComedyBright => "Comedy Bright",
        }
    }

    /// Parses a tone label. Accepts the canonical labels plus the short
    /// legacy labels older UI builds used ("Creepy", "Epic", "Dreamy",
    /// "Funny", "Warm"). Unknown labels are a configuration error.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();
        match lower.as_str() {
            "cinematic epic" | "cinematic_epic" | "epic" => Ok(Tone::CinematicEpic),
            "dark mystery" | "dark_mystery" | "mystery" => Ok(Tone::DarkMystery),
            "warm emotional" | "warm_emotional" | "warm" => Ok(Tone::WarmEmotional),
            "surreal dream" | "surreal_dream" | "dreamy" | "surreal" => Ok(Tone::SurrealDream),
            "horror tension" | "horror_tension" | "creepy" | "horror" => Ok(Tone::HorrorTension),
            "comedy bright" | "comedy_bright" | "funny" | "comedy" => Ok(Tone::ComedyBright),
            _ => Err(CoreError::UnknownTone(trimmed.to_string())),
        }
    }

    /// Candidate locations for this tone. The seed builder draws one.
    pub fn locations(&self) -> &'static [&'static str] {
        match self {
            Tone::CinematicEpic => &[
                "mountain peak ancient temple at sunrise",
                "vast desert ruins at golden hour",
                "stormy ocean cliff with crashing waves",
                "grand cathedral with light streaming",
            ],
            Tone::DarkMystery => &[
                "abandoned Victorian mansion hallway",
                "foggy moonlit forest path",
                "empty midnight subway station",
                "rain-soaked dark alley",
            ],
            Tone::WarmEmotional => &[
                "cozy childhood bedroom at sunset",
                "quiet beach at golden hour",
                "grandmother's warm kitchen",
                "family living room with fireplace",
            ],
            Tone::SurrealDream => &[
                "floating cloud islands in sky",
                "infinite mirror hallway",
                "impossible spiral staircase",
                "upside-down room defying gravity",
            ],
            Tone::HorrorTension => &[
                "decaying hospital corridor",
                "haunted church basement",
                "dark forest clearing with fog",
                "abandoned asylum room",
            ],
            Tone::ComedyBright => &[
                "busy colorful coffee shop",
                "sunny public park",
                "vibrant apartment living room",
                "cheerful kitchen counter",
            ],
        }
    }

    /// Color palette descriptor (one per tone).
    pub fn palette(&self) -> &'static str {
        match self {
            Tone::CinematicEpic => "warm amber gold + deep cinematic blue",
            Tone::DarkMystery => "deep shadow black + cool moonlight blue",
            Tone::WarmEmotional => "soft peach + gentle cream",
            Tone::SurrealDream => "pastel lavender purple + dreamy cotton candy pink",
            Tone::HorrorTension => "dark charcoal gray + blood crimson red",
            Tone::ComedyBright => "vibrant sunny yellow + playful bright orange",
        }
    }

    /// Ambient sound bed (one per tone).
    pub fn ambient_sound(&self) -> &'static str {
        match self {
            Tone::CinematicEpic => "wind + distant thunder + epic atmosphere",
            Tone::DarkMystery => "creaking wood + whispers + eerie silence",
            Tone::WarmEmotional => "gentle birds + soft breeze + warmth",
            Tone::SurrealDream => "ethereal hum + echoes + floating sounds",
            Tone::HorrorTension => "ominous silence + breathing + dread",
            Tone::ComedyBright => "cheerful ambience + light chatter + joy",
        }
    }

    /// Emotion labels for the three beats, in hook → escalation → resolution order.
    pub fn emotion_arc(&self) -> [&'static str; 3] {
        match self {
            Tone::CinematicEpic => ["building anticipation", "overwhelming awe", "triumphant satisfaction"],
            Tone::DarkMystery => ["intrigued curiosity", "growing unease", "chilling dread"],
            Tone::WarmEmotional => ["gentle nostalgia", "heartfelt warmth", "peaceful contentment"],
            Tone::SurrealDream => ["enchanted wonder", "beautiful confusion", "ethereal enlightenment"],
            Tone::HorrorTension => ["deceptive calm", "rising fear", "absolute terror"],
            Tone::ComedyBright => ["playful amusement", "delighted surprise", "infectious joy"],
        }
    }

    /// Overall look for the core prompt.
    pub fn visual_style(&self) -> &'static str {
        match self {
            Tone::CinematicEpic => "Epic cinematic film style, anamorphic lens flare, Hollywood blockbuster aesthetic",
            Tone::DarkMystery => "Film noir aesthetic, high contrast chiaroscuro lighting, mystery thriller cinematography",
            Tone::WarmEmotional => "Soft cinematic warmth, natural film grain, indie film heartfelt aesthetic",
            Tone::SurrealDream => "Dreamy ethereal atmosphere, soft focus edges, magical realism visual style",
            Tone::HorrorTension => "Dark horror film aesthetic, desaturated colors, grainy found footage quality",
            Tone::ComedyBright => "Bright colorful sitcom style, vibrant clarity, commercial advertisement aesthetic",
        }
    }

    pub fn lighting(&self) -> &'static str {
        match self {
            Tone::CinematicEpic => "golden hour dramatic side lighting with rim light separation",
            Tone::DarkMystery => "moody low-key lighting with deep noir shadows",
            Tone::WarmEmotional => "soft warm natural window light with gentle fill",
            Tone::SurrealDream => "ethereal diffused backlight with magical glow",
            Tone::HorrorTension => "harsh single-source dramatic shadows",
            Tone::ComedyBright => "bright even studio three-point lighting",
        }
    }

    /// The "wait what?" action that breaks normality in clip 1.
    pub fn shock_action(&self) -> &'static str {
        match self {
            Tone::CinematicEpic => "begins glowing with ancient divine power radiating golden light",
            Tone::DarkMystery => "reveals a cryptic impossible symbol that pulses with dark energy",
            Tone::WarmEmotional => "shows a forgotten cherished memory glowing with warm light",
            Tone::SurrealDream => "floats upward and rotates slowly defying all known physics",
            Tone::HorrorTension => "opens countless unblinking eyes where none existed before",
            Tone::ComedyBright => "starts dancing energetically to completely silent music",
        }
    }

    /// How the break intensifies in clip 2.
    pub fn escalation(&self) -> &'static str {
        match self {
            Tone::CinematicEpic => "unleashes massive cosmic waves of transformative divine energy",
            Tone::DarkMystery => "multiplies into infinite impossible mirror copies filling space",
            Tone::WarmEmotional => "projects beautiful glowing memories into air like holograms",
            Tone::SurrealDream => "tears reality fabric like paper revealing parallel dimension",
            Tone::HorrorTension => "grows organic pulsing tendrils covered with bloodshot eyes",
            Tone::ComedyBright => "recruits all nearby objects into perfectly choreographed dance",
        }
    }

    /// How clip 3 settles back toward the opening frame.
    pub fn resolution(&self) -> &'static str {
        match self {
            Tone::CinematicEpic => "settles back radiating quiet eternal divine power",
            Tone::DarkMystery => "appears completely normal but one detail remains impossibly wrong",
            Tone::WarmEmotional => "rests peacefully having shared its precious heartfelt gift",
            Tone::SurrealDream => "fades gently away leaving only mysterious ethereal shimmer",
            Tone::HorrorTension => "looks perfectly normal except subtle wrongness still lingers",
            Tone::ComedyBright => "freezes mid-wink looking directly at camera with knowing smile",
        }
    }

    /// Background music cue for a beat of this tone.
    pub fn music(&self, beat: Beat) -> &'static str {
        let cues: [&'static str; 3] = match self {
            Tone::CinematicEpic => [
                "Epic orchestral build with soaring brass and strings",
                "Full orchestra dramatic crescendo with thundering percussion",
                "Triumphant resolution fading to mysterious quiet",
            ],
            Tone::DarkMystery => [
                "Eerie ambient drone with distant whispers",
                "Dissonant string tension with sharp violin stabs",
                "Mysterious fade to haunting silence",
            ],
            Tone::WarmEmotional => [
                "Gentle piano melody with soft string accompaniment",
                "Emotional string swell with heartfelt crescendo",
                "Soft peaceful resolution with tender piano notes",
            ],
            Tone::SurrealDream => [
                "Ethereal synth pads with floating atmosphere",
                "Dreamy echoing arpeggios with reverb wash",
                "Floating ambient fade with celestial tones",
            ],
            Tone::HorrorTension => [
                "Deep ominous drone with unsettling bass rumble",
                "Sharp violin sting with discordant screech",
                "Haunting silence with breathing sound design",
            ],
            Tone::ComedyBright => [
                "Playful ukulele with bouncing cheerful rhythm",
                "Upbeat comedy timing with bouncy brass accents",
                "Happy cheerful ending with xylophone flourish",
            ],
        };
        cues[beat.index() as usize - 1]
    }
}

// ---------------------------------------------------------------------------
// Beat: the three fixed narrative roles mapped to clips 1–3
// ---------------------------------------------------------------------------

/// Narrative beat. The clip order hook → escalation → resolution is fixed and
/// never permuted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Beat {
    Hook,
    Escalation,
    Resolution,
}

pub const ALL_BEATS: [Beat; 3] = [Beat::Hook, Beat::Escalation, Beat::Resolution];

impl Beat {
    /// Clip number for this beat (1–3).
    #[inline]
    pub fn index(&self) -> u8 {
        match self {
            Beat::Hook => 1,
            Beat::Escalation => 2,
            Beat::Resolution => 3,
        }
    }

    /// Fixed 8-second window label: `[(n-1)*8, n*8)` seconds.
    pub fn duration_label(&self) -> String {
        let n = self.index() as u32;
        format!("{}-{} seconds", (n - 1) * 8, n * 8)
    }
}

// ---------------------------------------------------------------------------
// Viral rules: the hand-written heuristics each beat is built to satisfy
// ---------------------------------------------------------------------------

/// Rules 1–5, indexed by `VIRAL_RULES[rule - 1]`.
pub const VIRAL_RULES: [&str; 5] = [
    "Instant shock or twist — 'wait what?' moment in the first two seconds",
    "Ultra-visual clarity — reader sees the image instantly (< 2 sec mental render)",
    "Relatable but weird — familiar object/action becomes impossible",
    "Loopable / replayable — Clip 3 returns to Clip 1 idea for replay satisfaction",
    "Emotional hook + curiosity — funny, cute, creepy, or OMG tone that invites sharing",
];

/// The pair of viral rules a beat is designed around, as display text.
pub fn viral_rule_for(beat: Beat) -> String {
    let (a, b) = match beat {
        Beat::Hook => (1, 2),
        Beat::Escalation => (3, 2),
        Beat::Resolution => (4, 5),
    };
    format!("{} + {}", VIRAL_RULES[a - 1], VIRAL_RULES[b - 1])
}

// ---------------------------------------------------------------------------
// Categories → primary objects
// ---------------------------------------------------------------------------

/// Category → candidate primary objects. Open string set (UI-supplied), so
/// lookups are fallible unlike the tone tables.
pub const CATEGORY_OBJECTS: &[(&str, &[&str])] = &[
    ("Hyper-Real Illusions", &[
        "antique mirror with ornate gold frame",
        "faded black and white photograph",
        "shadow moving on wall",
        "reflection in still water",
    ]),
    ("Pocket Worlds", &[
        "snow globe with miniature city",
        "glass jar with tiny forest",
        "smartphone showing another dimension",
        "wooden music box",
    ]),
    ("Reverse Cause & Effect", &[
        "clock running backwards",
        "candle unmelting itself",
        "shattered glass reforming",
        "spilled coffee returning to cup",
    ]),
    ("Everyday Portals", &[
        "ordinary wooden door",
        "bedroom window",
        "puddle on street",
        "elevator doors",
    ]),
    ("Reality Errors", &[
        "digital glitch in real world",
        "duplicate person",
        "floating coffee cup",
        "person buffering like video",
    ]),
    ("Micro Mundane Rebels", &[
        "rebellious paperclip",
        "sentient pen writing alone",
        "dancing stapler",
        "escaping sticky note",
    ]),
    ("Time Sneaks", &[
        "vintage pocket watch",
        "wall calendar flipping",
        "sand hourglass",
        "digital clock",
    ]),
    ("Nature Reboots", &[
        "ancient tree glowing",
        "storm cloud forming patterns",
        "flower blooming rapidly",
        "river reversing flow",
    ]),
    ("Emotions as Errors", &[
        "crystallized tear",
        "frozen laugh in air",
        "trapped scream",
        "visible sigh",
    ]),
    ("Micro Dreams", &[
        "dream pillow",
        "blanket showing visions",
        "glowing bedroom door",
        "nightstand lamp",
    ]),
    ("Parallel Me", &[
        "mirror twin stepping out",
        "photograph coming alive",
        "shadow acting independently",
        "reflection showing different life",
    ]),
    ("AI Paradoxes", &[
        "glowing chatbot",
        "sentient algorithm",
        "conscious AI eye",
        "self-aware app",
    ]),
    ("Cute → Creepy → Cute", &[
        "vintage teddy bear",
        "porcelain doll",
        "childhood toy",
        "music box ballerina",
    ]),
    ("Instant Evolution", &[
        "seed sprouting instantly",
        "egg hatching creature",
        "chrysalis opening",
        "flower blooming",
    ]),
    ("Object Existential Crisis", &[
        "lonely chair",
        "forgotten book",
        "unused key",
        "waiting coffee mug",
    ]),
    ("Impossible Lifestyle Hacks", &[
        "self-tying shoelace",
        "auto-cooking pan",
        "self-cleaning room",
        "auto-organizing desk",
    ]),
    ("Emotion Metaphors", &[
        "glowing heart",
        "storm cloud mind",
        "burning soul",
        "frozen fear",
    ]),
    ("Data Ghosts", &[
        "old email notification",
        "deleted file phantom",
        "forgotten password",
        "cached memory",
    ]),
    ("Pocket Time Machines", &[
        "vintage photo album",
        "grandfather's watch",
        "childhood toy box",
        "old cassette tape",
    ]),
    ("Dream Becomes News", &[
        "breaking news headline",
        "phone notification",
        "TV broadcast",
        "newspaper",
    ]),
    ("Everyday Deities", &[
        "cosmic barista",
        "divine janitor",
        "godlike bus driver",
        "celestial cashier",
    ]),
    ("Reflections in Reverse", &[
        "mirror showing past",
        "water puddle portal",
        "glass window twin",
        "reflection living separately",
    ]),
    ("Digital Wildlife", &[
        "escaped cursor",
        "wild loading bar",
        "free wifi signal",
        "notification butterfly",
    ]),
    ("Forgotten Futures", &[
        "retro robot toy",
        "vintage sci-fi poster",
        "old prediction book",
        "yesterday's tomorrow",
    ]),
    ("Urban Myths 2.0", &[
        "haunted wifi router",
        "cursed mobile app",
        "viral ghost",
        "algorithm curse",
    ]),
    ("Silent Signals", &[
        "meaningful glance",
        "secret gesture",
        "knowing smile",
        "silent nod",
    ]),
    ("Quantum Routines", &[
        "morning coffee ritual",
        "daily commute",
        "bedtime routine",
        "workout session",
    ]),
    ("Human Software Updates", &[
        "person buffering",
        "emotion loading bar",
        "memory updating",
        "consciousness rebooting",
    ]),
    ("Dream Shortcuts", &[
        "lucid dream doorway",
        "sleep tunnel",
        "subconscious staircase",
        "dream highway",
    ]),
    ("Reality Audits", &[
        "life review screen",
        "existence meter",
        "reality check popup",
        "simulation test",
    ]),
];

/// All category names, in catalog order (for UI/CLI listings).
pub fn category_names() -> Vec<&'static str> {
    CATEGORY_OBJECTS.iter().map(|(name, _)| *name).collect()
}

/// Candidate objects for a category, or `UnknownCategory` naming the key.
/// Matching is case-insensitive on the trimmed name.
pub fn category_objects(category: &str) -> Result<&'static [&'static str], CoreError> {
    let needle = category.trim();
    CATEGORY_OBJECTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(needle))
        .map(|(_, objects)| *objects)
        .ok_or_else(|| CoreError::UnknownCategory(needle.to_string()))
}

// ---------------------------------------------------------------------------
// Free-floating narrative fragments (random per composition, not per seed)
// ---------------------------------------------------------------------------

/// Environment reactions for the escalation beat.
pub const ENVIRONMENTAL_CHANGES: &[&str] = &[
    "Walls ripple and wave like disturbed water surface",
    "Gravity loses all meaning with objects floating chaotically",
    "Colors shift to impossible spectrum beyond human vision",
    "Time visibly fragments and stutters in broken loops",
];

/// Loop-closure hints for the resolution beat.
pub const LOOP_HINTS: &[&str] = &[
    "but one subtle crucial element has permanently changed",
    "perfectly ready for seamless cycle to begin again",
    "inviting viewer to replay and discover hidden difference",
    "perfect loop point seamlessly transitioning back",
];
