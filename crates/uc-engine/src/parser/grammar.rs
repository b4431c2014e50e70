//! The verb vocabulary.

use uc_core::{Direction, VerbType};

/// Multi-word verbs, matched before single words.
const PHRASES: &[(&[&str], VerbType)] = &[
    (&["turn", "on"], VerbType::Light),
    (&["switch", "on"], VerbType::Light),
    (&["turn", "off"], VerbType::Extinguish),
    (&["switch", "off"], VerbType::Extinguish),
    (&["blow", "out"], VerbType::Extinguish),
    (&["put", "out"], VerbType::Extinguish),
    (&["pick", "up"], VerbType::Take),
    (&["put", "down"], VerbType::Drop),
    (&["look", "at"], VerbType::Examine),
    (&["look", "in"], VerbType::Examine),
    (&["look", "inside"], VerbType::Examine),
    (&["wind", "up"], VerbType::Wind),
];

/// Verb synonyms for command parsing.
const GO_VERBS: &[&str] = &["go", "walk", "run", "head", "travel", "proceed"];
const LOOK_VERBS: &[&str] = &["look", "l"];
const EXAMINE_VERBS: &[&str] = &["examine", "x", "inspect", "describe", "check"];
const READ_VERBS: &[&str] = &["read", "skim"];
const TAKE_VERBS: &[&str] = &["take", "get", "grab", "carry", "pick"];
const DROP_VERBS: &[&str] = &["drop", "discard", "dump"];
const PUT_VERBS: &[&str] = &["put", "place", "insert", "stuff"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i"];
const OPEN_VERBS: &[&str] = &["open"];
const CLOSE_VERBS: &[&str] = &["close", "shut"];
const UNLOCK_VERBS: &[&str] = &["unlock"];
const LOCK_VERBS: &[&str] = &["lock"];
const LIGHT_VERBS: &[&str] = &["light", "ignite", "activate"];
const EXTINGUISH_VERBS: &[&str] = &["extinguish", "douse", "deactivate"];
const ATTACK_VERBS: &[&str] = &["attack", "kill", "fight", "hit", "strike", "stab", "slay"];
const GIVE_VERBS: &[&str] = &["give", "offer", "hand", "pay"];
const SAY_VERBS: &[&str] = &["say", "speak", "yell", "shout", "answer"];
const MOVE_VERBS: &[&str] = &["move", "shift", "lift", "slide"];
const PUSH_VERBS: &[&str] = &["push", "press"];
const TURN_VERBS: &[&str] = &["turn", "flip", "switch", "rotate"];
const TIE_VERBS: &[&str] = &["tie", "fasten", "attach"];
const UNTIE_VERBS: &[&str] = &["untie", "unfasten", "detach", "release"];
const RING_VERBS: &[&str] = &["ring"];
const PRAY_VERBS: &[&str] = &["pray"];
const DIG_VERBS: &[&str] = &["dig", "excavate"];
const WAVE_VERBS: &[&str] = &["wave", "brandish"];
const RAISE_VERBS: &[&str] = &["raise", "hoist"];
const LOWER_VERBS: &[&str] = &["lower"];
const BREAK_VERBS: &[&str] = &["break", "smash", "shatter", "destroy"];
const WIND_VERBS: &[&str] = &["wind"];
const FILL_VERBS: &[&str] = &["fill"];
const POUR_VERBS: &[&str] = &["pour", "spill", "empty"];
const EAT_VERBS: &[&str] = &["eat", "consume", "devour"];
const DRINK_VERBS: &[&str] = &["drink", "sip", "quaff"];
const BURN_VERBS: &[&str] = &["burn", "incinerate"];
const CLIMB_VERBS: &[&str] = &["climb", "scale"];
const JUMP_VERBS: &[&str] = &["jump", "leap"];
const WAIT_VERBS: &[&str] = &["wait", "z"];
const SCORE_VERBS: &[&str] = &["score"];
const DIAGNOSE_VERBS: &[&str] = &["diagnose", "health"];
const VERBOSE_VERBS: &[&str] = &["verbose"];
const BRIEF_VERBS: &[&str] = &["brief"];
const SAVE_VERBS: &[&str] = &["save"];
const RESTORE_VERBS: &[&str] = &["restore", "load"];
const RESTART_VERBS: &[&str] = &["restart"];
const QUIT_VERBS: &[&str] = &["quit", "q"];
const HELP_VERBS: &[&str] = &["help", "commands", "hint"];
const VERSION_VERBS: &[&str] = &["version"];
const AGAIN_VERBS: &[&str] = &["again", "g"];

const VOCABULARY: &[(&[&str], VerbType)] = &[
    (GO_VERBS, VerbType::Go),
    (LOOK_VERBS, VerbType::Look),
    (EXAMINE_VERBS, VerbType::Examine),
    (READ_VERBS, VerbType::Read),
    (TAKE_VERBS, VerbType::Take),
    (DROP_VERBS, VerbType::Drop),
    (PUT_VERBS, VerbType::Put),
    (INVENTORY_VERBS, VerbType::Inventory),
    (OPEN_VERBS, VerbType::Open),
    (CLOSE_VERBS, VerbType::Close),
    (UNLOCK_VERBS, VerbType::Unlock),
    (LOCK_VERBS, VerbType::Lock),
    (LIGHT_VERBS, VerbType::Light),
    (EXTINGUISH_VERBS, VerbType::Extinguish),
    (ATTACK_VERBS, VerbType::Attack),
    (GIVE_VERBS, VerbType::Give),
    (SAY_VERBS, VerbType::Say),
    (MOVE_VERBS, VerbType::Move),
    (PUSH_VERBS, VerbType::Push),
    (TURN_VERBS, VerbType::Turn),
    (TIE_VERBS, VerbType::Tie),
    (UNTIE_VERBS, VerbType::Untie),
    (RING_VERBS, VerbType::Ring),
    (PRAY_VERBS, VerbType::Pray),
    (DIG_VERBS, VerbType::Dig),
    (WAVE_VERBS, VerbType::Wave),
    (RAISE_VERBS, VerbType::Raise),
    (LOWER_VERBS, VerbType::Lower),
    (BREAK_VERBS, VerbType::Break),
    (WIND_VERBS, VerbType::Wind),
    (FILL_VERBS, VerbType::Fill),
    (POUR_VERBS, VerbType::Pour),
    (EAT_VERBS, VerbType::Eat),
    (DRINK_VERBS, VerbType::Drink),
    (BURN_VERBS, VerbType::Burn),
    (CLIMB_VERBS, VerbType::Climb),
    (JUMP_VERBS, VerbType::Jump),
    (WAIT_VERBS, VerbType::Wait),
    (SCORE_VERBS, VerbType::Score),
    (DIAGNOSE_VERBS, VerbType::Diagnose),
    (VERBOSE_VERBS, VerbType::Verbose),
    (BRIEF_VERBS, VerbType::Brief),
    (SAVE_VERBS, VerbType::Save),
    (RESTORE_VERBS, VerbType::Restore),
    (RESTART_VERBS, VerbType::Restart),
    (QUIT_VERBS, VerbType::Quit),
    (HELP_VERBS, VerbType::Help),
    (VERSION_VERBS, VerbType::Version),
    (AGAIN_VERBS, VerbType::Again),
];

/// Words that split a sentence into direct and indirect phrases.
pub const PREPOSITIONS: &[&str] = &[
    "in", "into", "inside", "on", "onto", "with", "to", "at", "from", "using",
];

/// Words dropped before matching.
pub const ARTICLES: &[&str] = &["the", "a", "an"];

/// Verbs that move the player in a direction.
pub const ENTER_VERBS: &[(&str, Direction)] = &[("enter", Direction::In), ("exit", Direction::Out)];

/// Match the verb at the start of `tokens`.
///
/// Returns the verb and how many tokens it used. Phrases win over single
/// words, so "turn on lamp" lights the lamp while "turn switch" turns it.
pub fn match_verb(tokens: &[String]) -> Option<(VerbType, usize)> {
    for (words, verb) in PHRASES {
        if tokens.len() >= words.len() && tokens.iter().zip(words.iter()).all(|(t, w)| t == w) {
            return Some((*verb, words.len()));
        }
    }
    let first = tokens.first()?;
    VOCABULARY
        .iter()
        .find(|(words, _)| words.contains(&first.as_str()))
        .map(|(_, verb)| (*verb, 1))
}

/// Whether a word is any known verb.
pub fn is_verb(word: &str) -> bool {
    VOCABULARY.iter().any(|(words, _)| words.contains(&word))
        || ENTER_VERBS.iter().any(|(w, _)| *w == word)
}
