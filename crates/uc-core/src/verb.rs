use serde::{Deserialize, Serialize};

/// The closed set of verbs the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbType {
    /// Walk in a direction.
    Go,
    /// Describe the current room.
    Look,
    /// Look closely at something.
    Examine,
    /// Read something with writing on it.
    Read,
    /// Pick something up.
    Take,
    /// Put something down.
    Drop,
    /// Put something in or on something else.
    Put,
    /// List what the player carries.
    Inventory,
    /// Open a container or door.
    Open,
    /// Close a container or door.
    Close,
    /// Unlock with a key.
    Unlock,
    /// Lock with a key.
    Lock,
    /// Light a light source.
    Light,
    /// Put out a light source.
    Extinguish,
    /// Fight someone.
    Attack,
    /// Hand something to an actor.
    Give,
    /// Speak a word aloud.
    Say,
    /// Shift something heavy.
    Move,
    /// Press something.
    Push,
    /// Turn a dial or switch.
    Turn,
    /// Tie a rope to something.
    Tie,
    /// Undo a knot.
    Untie,
    /// Ring a bell.
    Ring,
    /// Pray.
    Pray,
    /// Dig in the ground.
    Dig,
    /// Wave something about.
    Wave,
    /// Hoist something up.
    Raise,
    /// Let something down, on a chain or rope.
    Lower,
    /// Smash something.
    Break,
    /// Wind up a clockwork device.
    Wind,
    /// Fill a vessel.
    Fill,
    /// Pour out a liquid.
    Pour,
    /// Eat something.
    Eat,
    /// Drink something.
    Drink,
    /// Set something alight.
    Burn,
    /// Climb up or down.
    Climb,
    /// Jump.
    Jump,
    /// Let a turn pass.
    Wait,
    /// Report the score and rank.
    Score,
    /// Report the player's health.
    Diagnose,
    /// Always print full room descriptions.
    Verbose,
    /// Print full descriptions only on first visit.
    Brief,
    /// Save the game to a slot.
    Save,
    /// Restore the game from a slot.
    Restore,
    /// Start over.
    Restart,
    /// Leave the game.
    Quit,
    /// List the vocabulary.
    Help,
    /// Show the release banner.
    Version,
    /// Repeat the previous command.
    Again,
}

impl VerbType {
    /// Whether the verb talks to the game rather than acting in the world.
    ///
    /// Meta verbs take no time and do not advance actors.
    pub fn is_meta(self) -> bool {
        matches!(
            self,
            Self::Score
                | Self::Diagnose
                | Self::Verbose
                | Self::Brief
                | Self::Save
                | Self::Restore
                | Self::Restart
                | Self::Quit
                | Self::Help
                | Self::Version
                | Self::Again
        )
    }

    /// Whether the verb needs a direct object to make sense.
    pub fn needs_object(self) -> bool {
        matches!(
            self,
            Self::Examine
                | Self::Read
                | Self::Take
                | Self::Drop
                | Self::Put
                | Self::Open
                | Self::Close
                | Self::Unlock
                | Self::Lock
                | Self::Light
                | Self::Extinguish
                | Self::Attack
                | Self::Give
                | Self::Move
                | Self::Push
                | Self::Turn
                | Self::Tie
                | Self::Untie
                | Self::Ring
                | Self::Wave
                | Self::Raise
                | Self::Lower
                | Self::Break
                | Self::Wind
                | Self::Fill
                | Self::Pour
                | Self::Eat
                | Self::Drink
                | Self::Burn
        )
    }

    /// The word used when asking the player for a missing object.
    pub fn name(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Look => "look",
            Self::Examine => "examine",
            Self::Read => "read",
            Self::Take => "take",
            Self::Drop => "drop",
            Self::Put => "put",
            Self::Inventory => "inventory",
            Self::Open => "open",
            Self::Close => "close",
            Self::Unlock => "unlock",
            Self::Lock => "lock",
            Self::Light => "light",
            Self::Extinguish => "extinguish",
            Self::Attack => "attack",
            Self::Give => "give",
            Self::Say => "say",
            Self::Move => "move",
            Self::Push => "push",
            Self::Turn => "turn",
            Self::Tie => "tie",
            Self::Untie => "untie",
            Self::Ring => "ring",
            Self::Pray => "pray",
            Self::Dig => "dig",
            Self::Wave => "wave",
            Self::Raise => "raise",
            Self::Lower => "lower",
            Self::Break => "break",
            Self::Wind => "wind",
            Self::Fill => "fill",
            Self::Pour => "pour",
            Self::Eat => "eat",
            Self::Drink => "drink",
            Self::Burn => "burn",
            Self::Climb => "climb",
            Self::Jump => "jump",
            Self::Wait => "wait",
            Self::Score => "score",
            Self::Diagnose => "diagnose",
            Self::Verbose => "verbose",
            Self::Brief => "brief",
            Self::Save => "save",
            Self::Restore => "restore",
            Self::Restart => "restart",
            Self::Quit => "quit",
            Self::Help => "help",
            Self::Version => "version",
            Self::Again => "again",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_verbs_need_no_object() {
        for verb in [VerbType::Score, VerbType::Save, VerbType::Help, VerbType::Version] {
            assert!(verb.is_meta());
            assert!(!verb.needs_object());
        }
    }

    #[test]
    fn verb_serde_is_snake_case() {
        let json = serde_json::to_string(&VerbType::Extinguish).unwrap();
        assert_eq!(json, "\"extinguish\"");
    }
}
