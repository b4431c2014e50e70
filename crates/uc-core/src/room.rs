use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::entity::{ObjectId, RoomId};
use crate::flags::{RoomFlag, WorldFlag};
use crate::hook::Hook;

/// A location in the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique id.
    pub id: RoomId,
    /// Display name, printed as the room heading.
    pub name: String,
    /// Long description.
    pub description: String,
    /// Exits keyed by direction. A missing key means no exit.
    #[serde(default)]
    pub exits: BTreeMap<Direction, Exit>,
    /// Mutable room flags.
    #[serde(default)]
    pub flags: BTreeSet<RoomFlag>,
    /// Puzzle rules that belong to the room rather than to an object.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hooks: Vec<Hook>,
}

impl Room {
    /// Create a room with no exits or flags.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: RoomId::new(id),
            name: name.into(),
            description: String::new(),
            exits: BTreeMap::new(),
            flags: BTreeSet::new(),
            hooks: Vec::new(),
        }
    }

    /// Check a room flag.
    pub fn has(&self, flag: RoomFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Builder: add a flag.
    pub fn with_flag(mut self, flag: RoomFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    /// Builder: add an unguarded exit.
    pub fn with_exit(mut self, dir: Direction, to: impl Into<String>) -> Self {
        self.exits.insert(dir, Exit::open(to));
        self
    }

    /// Builder: set the description.
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }
}

/// One way out of a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exit {
    /// Destination room.
    pub to: RoomId,
    /// Condition that must hold for the exit to be usable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guard: Option<Guard>,
}

impl Exit {
    /// An exit with no guard.
    pub fn open(to: impl Into<String>) -> Self {
        Self {
            to: RoomId::new(to),
            guard: None,
        }
    }

    /// An exit with a guard and its refusal text.
    pub fn guarded(
        to: impl Into<String>,
        condition: GuardCondition,
        blocked: impl Into<String>,
    ) -> Self {
        Self {
            to: RoomId::new(to),
            guard: Some(Guard {
                condition,
                blocked: blocked.into(),
            }),
        }
    }
}

/// A condition gating an exit, with the narrative shown when it fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guard {
    /// What must be true.
    pub condition: GuardCondition,
    /// Shown when the condition is false.
    pub blocked: String,
}

/// The predicate half of a [`Guard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardCondition {
    /// A world flag must be set.
    Flag(WorldFlag),
    /// A door object must be open. If the door is still out of play the exit
    /// does not exist yet.
    ObjectOpen(ObjectId),
}
