use uc_core::{
    ActorId, Behavior, Cue, Disposition, Engagement, Location, ObjectFlag, ObjectId, WorldFlag,
    World,
};

use super::{ActionContext, ActionResult, carried_with, direct_object, object};
use crate::combat;
use crate::error::{ActionError, PreconditionError};
use crate::narration;
use crate::parser::ParsedCommand;

fn choose_weapon(world: &World, explicit: Option<&ObjectId>, foe: &str) -> Result<ObjectId, ActionError> {
    match explicit {
        Some(id) => {
            let obj = object(world, id)?;
            if !world.is_carried(id) {
                return Err(PreconditionError::NotHolding(obj.brief.clone()).into());
            }
            if !obj.has(ObjectFlag::Weapon) {
                return Err(PreconditionError::WrongTool(format!(
                    "Trying to attack the {foe} with a {} is suicidal.",
                    obj.brief
                ))
                .into());
            }
            Ok(id.clone())
        }
        None => carried_with(world, ObjectFlag::Weapon)
            .max_by_key(|o| o.power)
            .map(|o| o.id.clone())
            .ok_or_else(|| {
                PreconditionError::WrongTool(format!(
                    "Trying to attack the {foe} with your bare hands is suicidal."
                ))
                .into()
            }),
    }
}

pub(super) fn attack(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let Some(target) = cmd.direct_actor() else {
        return Err(PreconditionError::Refused(
            "Violence isn't the answer to this one.".to_string(),
        )
        .into());
    };
    let actor = ctx.world.require_actor(target)?;
    let name = actor.name.clone();
    if !actor.is_active() {
        return Err(PreconditionError::Refused(format!(
            "The {name} is in no condition to fight."
        ))
        .into());
    }
    if matches!(actor.behavior, Behavior::Cyclops | Behavior::SpiritGuard) {
        let line = actor
            .line(Cue::Refuse)
            .map(str::to_string)
            .unwrap_or_else(|| format!("The {name} is unmoved by your threats."));
        return Err(PreconditionError::Refused(line).into());
    }
    let weapon = choose_weapon(ctx.world, cmd.indirect_object(), &name)?;
    let lines = combat::player_strikes(ctx.world, ctx.rng, ctx.config, target, &weapon)?;
    Ok(ActionResult::lines(lines))
}

/// Give an item to an actor. The troll takes any treasure as a toll and
/// leaves; the thief pockets anything.
pub(super) fn give(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let world = &mut *ctx.world;
    let id = direct_object(cmd, world)?;
    let item = object(world, &id)?;
    let brief = item.brief.clone();
    let treasure = item.has(ObjectFlag::Treasure);
    if !world.is_carried(&id) {
        return Err(PreconditionError::NotHolding(brief).into());
    }
    let Some(target) = cmd.indirect_actor() else {
        return Err(PreconditionError::Refused(
            "You can't give anything to that.".to_string(),
        )
        .into());
    };
    let actor = world.require_actor(target)?;
    let name = actor.name.clone();
    if !actor.is_active() {
        return Err(PreconditionError::Refused(format!(
            "The {name} is in no state to accept gifts."
        ))
        .into());
    }
    let accepted = narration::cue(actor, Cue::Accept, &brief)
        .unwrap_or_else(|| format!("The {name} takes the {brief}."));
    let declined = narration::cue(actor, Cue::Decline, &brief)
        .unwrap_or_else(|| format!("The {name} is not interested in the {brief}."));
    let behavior = actor.behavior;
    let stash = actor
        .hoard
        .clone()
        .map_or(Location::Nowhere, Location::Room);

    match behavior {
        Behavior::Troll if treasure => {
            world.move_object(&id, Location::Nowhere)?;
            leave_play(world, target, Disposition::Fled)?;
            world.set_flag(WorldFlag::TrollPaid);
            tracing::info!(actor = %target, toll = %id, "toll paid");
            Ok(ActionResult::turn(accepted))
        }
        Behavior::Thief => {
            world.move_object(&id, stash)?;
            if let Some(thief) = world.actor_mut(target) {
                thief.loot.push(id.clone());
            }
            Ok(ActionResult::turn(accepted))
        }
        _ => Err(PreconditionError::Refused(declined).into()),
    }
}

/// Speak a word. Actors who fear it run away.
pub(super) fn say(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let world = &mut *ctx.world;
    let word = cmd.literal.clone().unwrap_or_default();
    let frightened: Vec<(ActorId, Behavior, String)> = world
        .actors_in(&world.player.location)
        .filter(|a| a.fears(&word))
        .map(|a| {
            let line = a
                .line(Cue::Flee)
                .map(str::to_string)
                .unwrap_or_else(|| format!("The {} flees.", a.name));
            (a.id.clone(), a.behavior, line)
        })
        .collect();
    if frightened.is_empty() {
        return Err(PreconditionError::Nothing.into());
    }

    let mut result = ActionResult::default().costing(1);
    for (id, behavior, line) in frightened {
        leave_play(world, &id, Disposition::Fled)?;
        if behavior == Behavior::Cyclops {
            world.set_flag(WorldFlag::CyclopsFled);
        }
        tracing::info!(actor = %id, word = %word, "actor frightened off");
        result.push(line);
    }
    Ok(result)
}

fn leave_play(world: &mut World, id: &ActorId, disposition: Disposition) -> Result<(), ActionError> {
    if let Some(actor) = world.actor_mut(id) {
        actor.disposition = disposition;
        actor.engagement = Engagement::Dormant;
    }
    world.move_actor(id, None)?;
    Ok(())
}
