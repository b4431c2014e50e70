//! Puzzle rules carried by content.
//!
//! A [`Hook`] binds a verb to a list of [`Requirement`]s and a list of
//! [`Effect`]s. Hooks live on objects (the direct object of the command) and
//! on rooms (for verbs like `pray` or `jump` that need no object). The engine
//! fires the first hook whose requirements all hold.

use serde::{Deserialize, Serialize};

use crate::entity::{ActorId, ObjectId, RoomId};
use crate::flags::{ObjectFlag, RoomFlag, WorldFlag};
use crate::verb::VerbType;

/// A content-defined reaction to a verb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hook {
    /// The verb that triggers the hook.
    pub verb: VerbType,
    /// Required indirect object, if any. `None` accepts any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with: Option<ObjectId>,
    /// Whether the hook replaces the built-in verb or follows it.
    #[serde(default)]
    pub mode: HookMode,
    /// All must hold for the hook to fire.
    #[serde(default)]
    pub requires: Vec<Requirement>,
    /// Applied in order when the hook fires.
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Narrative shown when the hook fires.
    #[serde(default)]
    pub message: String,
    /// Narrative shown when the verb matched but a requirement failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otherwise: Option<String>,
}

/// When a hook runs relative to the built-in verb handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookMode {
    /// The hook is the whole action.
    #[default]
    Instead,
    /// The built-in action runs first; the hook adds to a success.
    After,
}

/// A precondition of a hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// A world flag is set.
    Flag(WorldFlag),
    /// A world flag is clear.
    NotFlag(WorldFlag),
    /// The player carries the object, directly or in a container.
    Holding(ObjectId),
    /// The player stands in the room.
    InRoom(RoomId),
    /// The player stands in one of the rooms.
    InAnyRoom(Vec<RoomId>),
    /// The object is directly inside the container.
    ObjectIn {
        /// The contained object.
        object: ObjectId,
        /// The container.
        container: ObjectId,
    },
    /// The object is out of play.
    Hidden(ObjectId),
    /// The object has a flag.
    ObjectHas {
        /// Object to check.
        object: ObjectId,
        /// Flag that must be set.
        flag: ObjectFlag,
    },
    /// The object lacks a flag.
    ObjectLacks {
        /// Object to check.
        object: ObjectId,
        /// Flag that must be clear.
        flag: ObjectFlag,
    },
    /// The player's room has a flag.
    RoomHas(RoomFlag),
    /// The actor is in the player's room.
    ActorPresent(ActorId),
}

/// Where a revealed or moved object ends up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// The player's current room.
    Here,
    /// A named room.
    Room(RoomId),
    /// Inside an object.
    Inside(ObjectId),
    /// The player's hands.
    Player,
}

/// A state change applied by a hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Set a world flag.
    SetFlag(WorldFlag),
    /// Clear a world flag.
    ClearFlag(WorldFlag),
    /// Bring an out-of-play object into play. No-op if already in play.
    Reveal {
        /// Object to reveal.
        object: ObjectId,
        /// Where it appears.
        to: Placement,
    },
    /// Move an object regardless of where it is.
    Relocate {
        /// Object to move.
        object: ObjectId,
        /// Destination.
        to: Placement,
    },
    /// Take an object out of play.
    Remove(ObjectId),
    /// Set a flag on an object.
    SetObjectFlag {
        /// Target object.
        object: ObjectId,
        /// Flag to set.
        flag: ObjectFlag,
    },
    /// Clear a flag on an object.
    ClearObjectFlag {
        /// Target object.
        object: ObjectId,
        /// Flag to clear.
        flag: ObjectFlag,
    },
    /// Set a flag on a room.
    SetRoomFlag {
        /// Target room.
        room: RoomId,
        /// Flag to set.
        flag: RoomFlag,
    },
    /// Clear a flag on a room.
    ClearRoomFlag {
        /// Target room.
        room: RoomId,
        /// Flag to clear.
        flag: RoomFlag,
    },
    /// Change an object's point value.
    SetValue {
        /// Target object.
        object: ObjectId,
        /// New value.
        value: i32,
    },
    /// Remove an actor from play for good.
    Banish(ActorId),
    /// Kill the player with the given cause.
    Kill(String),
    /// Award points.
    Award(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_parses_from_catalog_json() {
        let json = r#"{
            "verb": "move",
            "requires": [{"not_flag": "rug_moved"}],
            "effects": [
                {"set_flag": "rug_moved"},
                {"reveal": {"object": "trap_door", "to": "here"}}
            ],
            "message": "The rug slides aside."
        }"#;
        let hook: Hook = serde_json::from_str(json).unwrap();
        assert_eq!(hook.verb, VerbType::Move);
        assert_eq!(hook.mode, HookMode::Instead);
        assert_eq!(hook.requires, vec![Requirement::NotFlag(WorldFlag::RugMoved)]);
        assert_eq!(hook.effects.len(), 2);
        assert!(hook.with.is_none());
    }
}
