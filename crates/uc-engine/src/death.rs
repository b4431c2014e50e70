//! Death and resurrection.

use uc_core::{CoreResult, Engagement, LifeState, Location, ObjectFlag, ObjectId, World};

use crate::config::EngineConfig;
use crate::narration;
use crate::rng::GameRng;

/// What happened when the player died.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Death {
    /// Narrative, ending with the new room when the player comes back.
    pub lines: Vec<String>,
    /// Treasures sent to the underworld.
    pub lost: Vec<ObjectId>,
    /// Whether that was the last life.
    pub game_over: bool,
}

/// Kill the player.
///
/// Half the carried treasures (rounded up) go to the underworld and the rest
/// of the inventory falls where the player died. After `max_deaths` deaths the
/// game is over; before that the player wakes in the start room at full
/// health.
pub fn perish(
    world: &mut World,
    rng: &mut GameRng,
    config: &EngineConfig,
    cause: &str,
) -> CoreResult<Death> {
    let fell_in = world.player.location.clone();
    world.player.deaths += 1;

    let mut treasures: Vec<ObjectId> = world
        .objects()
        .filter(|o| o.has(ObjectFlag::Treasure) && world.is_carried(&o.id))
        .map(|o| o.id.clone())
        .collect();
    rng.shuffle(&mut treasures);
    treasures.truncate(treasures.len().div_ceil(2));
    let underworld = Location::Room(world.meta.underworld.clone());
    for id in &treasures {
        world.move_object(id, underworld.clone())?;
    }
    let held: Vec<ObjectId> = world.contents(&Location::Player).cloned().collect();
    for id in &held {
        world.move_object(id, Location::Room(fell_in.clone()))?;
    }

    world.player.score = (world.player.score - config.death_penalty).max(0);

    let mut lines = vec![
        cause.to_string(),
        String::new(),
        "    ****  You have died  ****".to_string(),
        String::new(),
    ];

    let game_over = world.player.deaths >= config.max_deaths;
    if game_over {
        world.player.status = LifeState::GameOver;
        lines.push(
            "You clearly are a suicidal maniac. Your adventure is over. \
             You may RESTART, RESTORE a saved game, or QUIT."
                .to_string(),
        );
        tracing::info!(deaths = world.player.deaths, "game over");
    } else {
        let start = world.meta.start_room.clone();
        world.move_player(start)?;
        world.player.health = world.player.max_health;
        world.player.dark_turns = 0;
        let engaged: Vec<_> = world
            .actors()
            .filter(|a| a.engagement == Engagement::Engaged)
            .map(|a| a.id.clone())
            .collect();
        for id in engaged {
            if let Some(actor) = world.actor_mut(&id) {
                actor.engagement = Engagement::Dormant;
            }
        }
        lines.push(
            "Now, let's take a look here... Well, you probably deserve another chance."
                .to_string(),
        );
        lines.push(String::new());
        lines.extend(narration::describe_room(world, true));
        tracing::info!(deaths = world.player.deaths, "player resurrected");
    }

    Ok(Death {
        lines,
        lost: treasures,
        game_over,
    })
}
