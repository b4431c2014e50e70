use serde::{Deserialize, Serialize};

/// Per-room flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomFlag {
    /// Naturally lit; no lamp needed.
    Lit,
    /// The player has been here.
    Visited,
    /// Part of a maze.
    Maze,
    /// The thief never wanders in.
    NoThief,
    /// There is water here to fill a vessel with.
    Water,
    /// Holy ground.
    Sacred,
}

/// Per-object flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectFlag {
    /// Can be picked up.
    Takeable,
    /// Holds other objects.
    Container,
    /// Container or door is open.
    Open,
    /// Needs a key before it will open.
    Locked,
    /// Opens and closes but holds nothing.
    Door,
    /// Contents are visible while closed.
    Transparent,
    /// Can be lit.
    LightSource,
    /// Currently giving light.
    Lit,
    /// Burns fuel from the player's lamp counter while lit.
    Fueled,
    /// Needs a flame to light.
    NeedsFlame,
    /// Provides a flame while held.
    FireStarter,
    /// Scores when placed in the trophy case.
    Treasure,
    /// Breaks when mistreated.
    Fragile,
    /// Usable in combat.
    Weapon,
    /// Already scored; never scores again.
    Scored,
    /// Has text to read.
    Readable,
    /// Can be eaten.
    Edible,
    /// Can be drunk.
    Drinkable,
    /// Burns when set alight.
    Flammable,
    /// Part of the room; never listed.
    Scenery,
    /// Has been moved from its initial spot.
    Touched,
}

/// Global puzzle-progress markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorldFlag {
    /// Sluice gates open; the reservoir has drained.
    DamOpen,
    /// The rainbow can be walked on.
    RainbowSolid,
    /// The mirror between the two mirror rooms is gone.
    MirrorBroken,
    /// The machine has turned coal into a diamond.
    CoalTransformed,
    /// The spirits at the gate of Hades are banished.
    ExorcismPerformed,
    /// The brass bell has been rung.
    BellRung,
    /// The black book has been read.
    BookRead,
    /// The oriental rug has been moved aside.
    RugMoved,
    /// The pile of leaves has been disturbed.
    LeavesMoved,
    /// The rope hangs from the dome railing.
    RopeTied,
    /// Prayer opened the passage beneath the altar.
    AltarPassageOpen,
    /// The cyclops ran off through the east wall.
    CyclopsFled,
    /// The troll took a payment and left.
    TrollPaid,
    /// The scarab has been dug up.
    ScarabFound,
    /// The clockwork canary has sung.
    CanaryWound,
}
