use uc_core::{ActorId, ObjectId};

/// What kind of turn event occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEventKind {
    // Lamp
    /// Fuel reached the warning level.
    LampLow,
    /// Fuel ran out and the lamp went dark.
    LampExpired,

    // Actors
    /// An actor noticed the player and squared up.
    ActorEncountered {
        /// Who.
        actor: ActorId,
    },
    /// An actor swung at the player.
    ActorAttacked {
        /// Who.
        actor: ActorId,
        /// Whether it landed.
        hit: bool,
    },
    /// An actor walked into the player's room.
    ActorArrived {
        /// Who.
        actor: ActorId,
    },
    /// An actor walked out of the player's room.
    ActorDeparted {
        /// Who.
        actor: ActorId,
    },
    /// An actor ran from something the player carries.
    ActorFled {
        /// Who.
        actor: ActorId,
    },
    /// An actor took something from the player.
    ItemStolen {
        /// The thief.
        actor: ActorId,
        /// What was taken.
        object: ObjectId,
    },

    // Player
    /// The player died.
    PlayerDied {
        /// What killed them.
        cause: String,
    },
    /// The last life is gone.
    GameOver,
}

impl TurnEventKind {
    /// Whether a given actor is involved in this event.
    pub fn involves(&self, id: &ActorId) -> bool {
        match self {
            Self::ActorEncountered { actor }
            | Self::ActorAttacked { actor, .. }
            | Self::ActorArrived { actor }
            | Self::ActorDeparted { actor }
            | Self::ActorFled { actor }
            | Self::ItemStolen { actor, .. } => actor == id,
            Self::LampLow | Self::LampExpired | Self::PlayerDied { .. } | Self::GameOver => false,
        }
    }
}

/// A record of something that happened during a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnEvent {
    /// The move count when this happened.
    pub turn: u32,
    /// The specific kind of event.
    pub kind: TurnEventKind,
    /// What the player sees.
    pub text: String,
}

impl TurnEvent {
    /// Create an event.
    pub fn new(turn: u32, kind: TurnEventKind, text: impl Into<String>) -> Self {
        Self {
            turn,
            kind,
            text: text.into(),
        }
    }
}
