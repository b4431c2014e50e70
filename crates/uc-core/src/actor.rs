use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::entity::{ActorId, ObjectId, RoomId};

/// A non-player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Unique id.
    pub id: ActorId,
    /// Head noun the parser matches.
    pub name: String,
    /// Other nouns that also match.
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Words that may precede the noun.
    #[serde(default)]
    pub adjectives: Vec<String>,
    /// Current room, or `None` once the actor has left play.
    pub location: Option<RoomId>,
    /// Which behavior drives this actor each turn.
    pub behavior: Behavior,
    /// Remaining hit points.
    pub health: i32,
    /// Combat strength.
    pub strength: u32,
    /// Damage bonus of the actor's natural or carried weapon.
    #[serde(default)]
    pub power: u32,
    /// Combat and social state.
    pub disposition: Disposition,
    /// Whether the actor is currently engaged with the player.
    #[serde(default)]
    pub engagement: Engagement,
    /// Which exits the actor blocks while active.
    #[serde(default)]
    pub blocking: Blocking,
    /// Narrative lines keyed by situation.
    #[serde(default)]
    pub messages: BTreeMap<Cue, String>,
    /// Words that make the actor flee when spoken in its presence.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fear_words: Vec<String>,
    /// An object that makes the actor flee when the player carries it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ward: Option<ObjectId>,
    /// Where the actor stashes stolen goods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hoard: Option<RoomId>,
    /// Objects the actor has stolen, oldest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loot: Vec<ObjectId>,
}

impl Actor {
    /// Create a neutral, dormant actor.
    pub fn new(id: impl Into<String>, name: impl Into<String>, behavior: Behavior) -> Self {
        Self {
            id: ActorId::new(id),
            name: name.into(),
            synonyms: Vec::new(),
            adjectives: Vec::new(),
            location: None,
            behavior,
            health: 10,
            strength: 5,
            power: 0,
            disposition: Disposition::Neutral,
            engagement: Engagement::Dormant,
            blocking: Blocking::None,
            messages: BTreeMap::new(),
            fear_words: Vec::new(),
            ward: None,
            hoard: None,
            loot: Vec::new(),
        }
    }

    /// Hostile or neutral: still a force in the world.
    pub fn is_active(&self) -> bool {
        matches!(self.disposition, Disposition::Hostile | Disposition::Neutral)
    }

    /// Whether the actor stops the player leaving by `dir`.
    ///
    /// Defeated and fled actors never block.
    pub fn blocks(&self, dir: Direction) -> bool {
        if !self.is_active() {
            return false;
        }
        match &self.blocking {
            Blocking::None => false,
            Blocking::All => true,
            Blocking::Exits(dirs) => dirs.contains(&dir),
        }
    }

    /// The narrative line for a cue, if the content provides one.
    pub fn line(&self, cue: Cue) -> Option<&str> {
        self.messages.get(&cue).map(String::as_str)
    }

    /// Whether speaking `word` frightens the actor.
    pub fn fears(&self, word: &str) -> bool {
        self.fear_words.iter().any(|w| w == word)
    }

    /// Every word that can serve as the head noun.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.synonyms.iter().map(String::as_str))
    }
}

/// Behavior variant. Each variant has its own per-turn logic in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    /// Guards a room and fights anyone who lingers.
    Troll,
    /// Wanders and steals.
    Thief,
    /// Will not fight; flees from a spoken name.
    Cyclops,
    /// Cannot be fought; banished by ritual.
    SpiritGuard,
    /// No autonomous behavior beyond fleeing a ward.
    Generic,
}

/// Combat and social state of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// Will fight.
    Hostile,
    /// Will not start a fight.
    Neutral,
    /// Beaten in combat.
    Defeated,
    /// Gone of its own accord (paid, frightened, banished).
    Fled,
}

/// Whether an actor is currently in a fight with the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Engagement {
    /// Idle.
    #[default]
    Dormant,
    /// Fighting or guarding against the player.
    Engaged,
}

/// Exit-blocking rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Blocking {
    /// Blocks nothing.
    #[default]
    None,
    /// Blocks every exit from its room.
    All,
    /// Blocks only these exits.
    Exits(Vec<Direction>),
}

/// Situations an actor has narrative lines for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// Listed in the room description.
    Present,
    /// First noticed by the player.
    Encounter,
    /// Arrives in the player's room.
    Arrive,
    /// Leaves the player's room.
    Depart,
    /// Stops the player at an exit.
    Block,
    /// Lands a blow on the player.
    Hit,
    /// Swings and misses.
    Miss,
    /// Is hit by the player.
    Wounded,
    /// Dodges the player.
    Dodge,
    /// Beaten in combat.
    Defeat,
    /// Refuses to fight.
    Refuse,
    /// Takes an offering.
    Accept,
    /// Declines an offering.
    Decline,
    /// Runs off.
    Flee,
    /// Steals from the player.
    Steal,
    /// Leaves its loot behind on defeat.
    Return,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defeated_actor_blocks_nothing() {
        let mut troll = Actor::new("troll", "troll", Behavior::Troll);
        troll.blocking = Blocking::All;
        troll.disposition = Disposition::Hostile;
        assert!(troll.blocks(Direction::North));
        troll.disposition = Disposition::Defeated;
        assert!(!troll.blocks(Direction::North));
    }

    #[test]
    fn blocking_specific_exits() {
        let mut cyclops = Actor::new("cyclops", "cyclops", Behavior::Cyclops);
        cyclops.blocking = Blocking::Exits(vec![Direction::Up]);
        assert!(cyclops.blocks(Direction::Up));
        assert!(!cyclops.blocks(Direction::West));
    }
}
