//! Error types for the engine.
//!
//! The `Display` text of [`ParseError`] and [`PreconditionError`] is what the
//! player sees; neither is fatal.

use thiserror::Error;
use uc_core::{CoreError, EntityRef};

use crate::persistence::RestoreError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// A noun-phrase match offered back to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The matched object or actor.
    pub entity: EntityRef,
    /// How it is named to the player ("green button").
    pub label: String,
}

/// Input that did not become a command. Nothing changes and no turn passes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The first word is not a verb or direction.
    #[error("I don't know the word \"{0}\".")]
    UnknownVerb(String),

    /// A noun phrase matched more than one thing in scope.
    #[error("Which {phrase} do you mean, {}?", or_list(.candidates))]
    Ambiguous {
        /// The phrase as typed.
        phrase: String,
        /// Everything it matched.
        candidates: Vec<Candidate>,
    },

    /// A noun phrase matched nothing in scope.
    #[error("You can't see any {0} here!")]
    NotVisible(String),

    /// The sentence is incomplete or unreadable.
    #[error("{0}")]
    Malformed(String),
}

fn or_list(candidates: &[Candidate]) -> String {
    let labels: Vec<String> = candidates
        .iter()
        .map(|c| format!("the {}", c.label))
        .collect();
    match labels.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {last}", rest.join(", ")),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

/// A verb that could not be carried out. The turn still passes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    /// The object is out of reach, for example inside a closed container.
    #[error("You can't reach the {0}.")]
    NotReachable(String),

    /// The verb needs the object in hand.
    #[error("You're not carrying the {0}.")]
    NotHolding(String),

    /// The object cannot be picked up.
    #[error("You can't take the {0}.")]
    NotTakeable(String),

    /// The object is already in hand.
    #[error("You already have the {0}.")]
    AlreadyHave(String),

    /// Taking the object would exceed the weight ceiling.
    #[error("Your load is too heavy.")]
    TooHeavy,

    /// Taking the object would exceed the slot limit.
    #[error("You're holding too many things already!")]
    TooMany,

    /// The object has no lid or door.
    #[error("You can't open or close the {0}.")]
    NotOpenable(String),

    /// Already open.
    #[error("The {0} is already open.")]
    AlreadyOpen(String),

    /// Already closed.
    #[error("The {0} is already closed.")]
    AlreadyClosed(String),

    /// Locked.
    #[error("The {0} is locked.")]
    Locked(String),

    /// Not locked.
    #[error("The {0} isn't locked.")]
    NotLocked(String),

    /// Missing or unsuitable instrument.
    #[error("{0}")]
    WrongTool(String),

    /// The target does not hold things.
    #[error("You can't put anything in the {0}.")]
    NotContainer(String),

    /// The container is closed.
    #[error("The {0} isn't open.")]
    NotOpen(String),

    /// The container is full.
    #[error("There's no room in the {0}.")]
    NoRoom(String),

    /// An object would end up inside itself.
    #[error("You can't put something inside itself.")]
    SelfContainment,

    /// No exit that way.
    #[error("You can't go that way.")]
    NoExit,

    /// An exit exists but something stops the player.
    #[error("{0}")]
    Blocked(String),

    /// Not a light source.
    #[error("You can't light the {0}.")]
    NotLightable(String),

    /// The light source is burned out.
    #[error("The {0} has no more power left.")]
    NoFuel(String),

    /// The light source needs a flame the player does not have.
    #[error("You have nothing to light the {0} with.")]
    NoFlame(String),

    /// The world declines, with a reason.
    #[error("{0}")]
    Refused(String),

    /// The verb had no effect.
    #[error("Nothing happens.")]
    Nothing,
}

/// Why a verb handler stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The player's request cannot be carried out.
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    /// The world model refused a mutation. Indicates a content or engine bug.
    #[error("internal error: {0}")]
    Internal(#[from] CoreError),
}

/// Errors surfaced by the session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The world model refused a mutation.
    #[error("world error: {0}")]
    Core(#[from] CoreError),

    /// Saving or restoring failed.
    #[error("save error: {0}")]
    Restore(#[from] RestoreError),
}
