use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entity::RoomId;
use crate::flags::WorldFlag;

/// The player's inventory bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarryLimit {
    /// Maximum number of top-level items in hand.
    pub slots: usize,
    /// Maximum total weight, counting container contents.
    pub weight: u32,
}

impl Default for CarryLimit {
    fn default() -> Self {
        Self {
            slots: 7,
            weight: 20,
        }
    }
}

/// Whether the game can still be played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeState {
    /// Playing.
    #[default]
    Alive,
    /// Out of lives. Terminal.
    GameOver,
}

/// Everything about the player that changes during play.
///
/// Inventory is not stored here: it is the set of objects whose location is
/// [`crate::Location::Player`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Current room.
    pub location: RoomId,
    /// Inventory bound.
    pub carry: CarryLimit,
    /// Points earned so far.
    pub score: i32,
    /// Turn-costing commands so far.
    pub moves: u32,
    /// Turns of light left in the lamp.
    pub lamp_fuel: u32,
    /// Current hit points.
    pub health: i32,
    /// Hit points after a full recovery.
    pub max_health: i32,
    /// Alive or game over.
    pub status: LifeState,
    /// Times the player has died.
    pub deaths: u32,
    /// Print full room descriptions on every visit.
    pub verbose: bool,
    /// Consecutive turns ended in darkness.
    pub dark_turns: u32,
    /// Global puzzle-progress markers.
    pub flags: BTreeSet<WorldFlag>,
}

impl PlayerState {
    /// A fresh player standing in `start`.
    pub fn new(start: RoomId) -> Self {
        Self {
            location: start,
            carry: CarryLimit::default(),
            score: 0,
            moves: 0,
            lamp_fuel: 330,
            health: 10,
            max_health: 10,
            status: LifeState::Alive,
            deaths: 0,
            verbose: true,
            dark_turns: 0,
            flags: BTreeSet::new(),
        }
    }

    /// Check a world flag.
    pub fn has(&self, flag: WorldFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Whether the game has ended for good.
    pub fn is_over(&self) -> bool {
        self.status == LifeState::GameOver
    }
}
