//! Combat between the player and actors.
//!
//! A swing hits with probability `100·A / (A + D)` percent, clamped to
//! [10, 90], where A and D are the strengths of attacker and defender. A hit
//! deals `1 + rand(0..=power)` damage.

use uc_core::{
    ActorId, Behavior, CoreError, CoreResult, Cue, Disposition, Engagement, Location, ObjectId,
    World,
};

use crate::config::EngineConfig;
use crate::narration;
use crate::rng::GameRng;

/// Outcome of one swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blow {
    /// Landed for this much damage.
    Hit(i32),
    /// Missed.
    Miss,
}

/// Chance in percent that an attacker of strength `attack` hits a defender
/// of strength `defense`.
pub fn hit_chance(attack: u32, defense: u32) -> u32 {
    let total = attack + defense;
    if total == 0 {
        return 50;
    }
    (100 * attack / total).clamp(10, 90)
}

/// Roll one swing.
pub fn swing(rng: &mut GameRng, attack: u32, defense: u32, power: u32) -> Blow {
    if rng.percent(hit_chance(attack, defense)) {
        Blow::Hit(1 + rng.up_to(power) as i32)
    } else {
        Blow::Miss
    }
}

/// The player swings at an actor with a weapon. Engages the actor.
pub fn player_strikes(
    world: &mut World,
    rng: &mut GameRng,
    config: &EngineConfig,
    target: &ActorId,
    weapon: &ObjectId,
) -> CoreResult<Vec<String>> {
    let power = world.require_object(weapon)?.power;
    let actor = world
        .actor_mut(target)
        .ok_or_else(|| CoreError::ActorNotFound(target.clone()))?;
    actor.engagement = Engagement::Engaged;
    actor.disposition = Disposition::Hostile;

    let mut lines = Vec::new();
    match swing(rng, config.player_strength, actor.strength, power) {
        Blow::Hit(damage) => {
            actor.health -= damage;
            lines.push(
                narration::cue(actor, Cue::Wounded, "")
                    .unwrap_or_else(|| format!("You hit the {}.", actor.name)),
            );
            tracing::debug!(actor = %target, damage, health = actor.health, "player hit");
            if actor.health <= 0 {
                lines.extend(defeat(world, rng, config, target)?);
            }
        }
        Blow::Miss => {
            lines.push(
                narration::cue(actor, Cue::Dodge, "")
                    .unwrap_or_else(|| format!("You miss the {}.", actor.name)),
            );
        }
    }
    Ok(lines)
}

/// One actor blow against the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strike {
    /// Whether it landed.
    pub hit: bool,
    /// What the player sees.
    pub text: String,
}

/// An actor swings at the player. Damage is applied; death is left to the
/// caller.
pub fn actor_strikes(
    world: &mut World,
    rng: &mut GameRng,
    config: &EngineConfig,
    attacker: &ActorId,
) -> CoreResult<Strike> {
    let actor = world.require_actor(attacker)?;
    let blow = swing(rng, actor.strength, config.player_strength, actor.power);
    let strike = match blow {
        Blow::Hit(damage) => {
            let text = narration::cue(actor, Cue::Hit, "")
                .unwrap_or_else(|| format!("The {} hits you.", actor.name));
            world.player.health -= damage;
            tracing::debug!(actor = %attacker, damage, health = world.player.health, "player hit");
            Strike { hit: true, text }
        }
        Blow::Miss => Strike {
            hit: false,
            text: narration::cue(actor, Cue::Miss, "")
                .unwrap_or_else(|| format!("The {} misses you.", actor.name)),
        },
    };
    Ok(strike)
}

/// Take a beaten actor out of play. It drops what it carries where it fell;
/// a thief may also give back his hoard.
pub fn defeat(
    world: &mut World,
    rng: &mut GameRng,
    config: &EngineConfig,
    id: &ActorId,
) -> CoreResult<Vec<String>> {
    let actor = world.require_actor(id)?;
    let fell_in = actor.location.clone();
    let behavior = actor.behavior;
    let hoard = actor.hoard.clone();
    let mut lines = vec![
        narration::cue(actor, Cue::Defeat, "")
            .unwrap_or_else(|| format!("The {} is defeated.", actor.name)),
    ];
    let return_line = narration::cue(actor, Cue::Return, "");

    let drop_to = fell_in
        .clone()
        .map(Location::Room)
        .unwrap_or(Location::Nowhere);
    let carried: Vec<ObjectId> = world
        .contents(&Location::Actor(id.clone()))
        .cloned()
        .collect();
    for item in &carried {
        world.move_object(item, drop_to.clone())?;
    }

    let loot = match world.actor_mut(id) {
        Some(actor) => {
            actor.disposition = Disposition::Defeated;
            actor.engagement = Engagement::Dormant;
            actor.health = actor.health.max(0);
            std::mem::take(&mut actor.loot)
        }
        None => return Err(CoreError::ActorNotFound(id.clone())),
    };

    if behavior == Behavior::Thief && !loot.is_empty() && rng.percent(config.loot_return_percent)
    {
        let mut returned = false;
        for item in &loot {
            let in_hoard = hoard.as_ref().is_some_and(|h| {
                world
                    .object(item)
                    .is_some_and(|o| o.location == Location::Room(h.clone()))
            });
            if in_hoard {
                world.move_object(item, drop_to.clone())?;
                returned = true;
            }
        }
        if returned && let Some(line) = return_line {
            lines.push(line);
        }
    }

    world.move_actor(id, None)?;
    tracing::info!(actor = %id, "actor defeated");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing;
    use uc_core::{Actor, RoomId};

    /// The test world with a beaten thief in the yard whose loot sits in
    /// the crypt.
    fn robbed_world() -> (World, ActorId) {
        let mut world = testing::world();
        let mut thief = Actor::new("thief", "thief", Behavior::Thief);
        thief.location = Some(RoomId::new("yard"));
        thief.hoard = Some(RoomId::new("crypt"));
        thief.loot = vec![ObjectId::new("coin")];
        thief.disposition = Disposition::Hostile;
        thief
            .messages
            .insert(Cue::Return, "The thief's loot spills out.".to_string());
        world.add_actor(thief).unwrap();
        world
            .move_object(&ObjectId::new("coin"), Location::room("crypt"))
            .unwrap();
        world
            .move_object(&ObjectId::new("sword"), Location::Actor(ActorId::new("thief")))
            .unwrap();
        (world, ActorId::new("thief"))
    }

    #[test]
    fn hit_chance_is_clamped() {
        assert_eq!(hit_chance(5, 5), 50);
        assert_eq!(hit_chance(1, 99), 10);
        assert_eq!(hit_chance(99, 1), 90);
        assert_eq!(hit_chance(0, 0), 50);
    }

    #[test]
    fn damage_stays_in_range() {
        let mut rng = GameRng::new(11);
        for _ in 0..200 {
            if let Blow::Hit(damage) = swing(&mut rng, 9, 1, 3) {
                assert!((1..=4).contains(&damage));
            }
        }
    }

    #[test]
    fn defeated_thief_returns_his_hoard() {
        let (mut world, thief) = robbed_world();
        let config = EngineConfig::default().with_loot_return_percent(100);
        let lines = defeat(&mut world, &mut GameRng::new(3), &config, &thief).unwrap();

        assert_eq!(lines.last().unwrap(), "The thief's loot spills out.");
        assert_eq!(
            world.object(&ObjectId::new("coin")).unwrap().location,
            Location::room("yard")
        );
        assert_eq!(
            world.object(&ObjectId::new("sword")).unwrap().location,
            Location::room("yard")
        );
        let thief = world.actor(&thief).unwrap();
        assert_eq!(thief.disposition, Disposition::Defeated);
        assert!(thief.loot.is_empty());
        world.validate().unwrap();
    }

    #[test]
    fn hoard_can_stay_hidden() {
        let (mut world, thief) = robbed_world();
        let config = EngineConfig::default().with_loot_return_percent(0);
        let lines = defeat(&mut world, &mut GameRng::new(3), &config, &thief).unwrap();

        assert_eq!(lines.len(), 1);
        assert_eq!(
            world.object(&ObjectId::new("coin")).unwrap().location,
            Location::room("crypt")
        );
        assert_eq!(
            world.object(&ObjectId::new("sword")).unwrap().location,
            Location::room("yard")
        );
    }
}
