use std::collections::BTreeSet;

use uc_core::{
    ActorId, Behavior, CoreError, CoreResult, Cue, Disposition, Engagement, Location, ObjectFlag,
    ObjectId, RoomFlag, RoomId, World,
};

use super::{TurnContext, TurnEventKind, TurnSystem};
use crate::combat;
use crate::narration;

/// Drives every active actor once per turn.
///
/// - The troll squares up the first turn he shares a room with the player and
///   fights from the next turn on.
/// - The thief fights once engaged. Otherwise he may rob the player and may
///   wander to a neighboring room.
/// - Generic actors run from their ward.
/// - The cyclops and spirits only react to the player's verbs.
#[derive(Debug, Default)]
pub struct ActorSystem;

impl TurnSystem for ActorSystem {
    fn name(&self) -> &str {
        "actors"
    }

    fn advance(&mut self, ctx: &mut TurnContext<'_>) -> CoreResult<()> {
        let active: Vec<(ActorId, Behavior)> = ctx
            .world
            .actors()
            .filter(|a| a.location.is_some() && a.is_active())
            .map(|a| (a.id.clone(), a.behavior))
            .collect();
        for (id, behavior) in active {
            if ctx.player_down() {
                break;
            }
            match behavior {
                Behavior::Troll => troll(ctx, &id)?,
                Behavior::Thief => thief(ctx, &id)?,
                Behavior::Generic => skittish(ctx, &id)?,
                Behavior::Cyclops | Behavior::SpiritGuard => {}
            }
        }
        Ok(())
    }
}

fn with_player(world: &World, id: &ActorId) -> bool {
    world
        .actor(id)
        .is_some_and(|a| a.location.as_ref() == Some(&world.player.location))
}

fn troll(ctx: &mut TurnContext<'_>, id: &ActorId) -> CoreResult<()> {
    if !with_player(ctx.world, id) {
        return Ok(());
    }
    let actor = ctx.world.require_actor(id)?;
    match (actor.engagement, actor.disposition) {
        (Engagement::Dormant, _) => {
            let text = narration::cue(actor, Cue::Encounter, "")
                .unwrap_or_else(|| format!("The {} notices you.", actor.name));
            if let Some(a) = ctx.world.actor_mut(id) {
                a.engagement = Engagement::Engaged;
            }
            ctx.emit(TurnEventKind::ActorEncountered { actor: id.clone() }, text);
            Ok(())
        }
        (Engagement::Engaged, Disposition::Hostile) => assault(ctx, id),
        _ => Ok(()),
    }
}

fn thief(ctx: &mut TurnContext<'_>, id: &ActorId) -> CoreResult<()> {
    let actor = ctx.world.require_actor(id)?;
    let engaged = actor.engagement == Engagement::Engaged;
    if with_player(ctx.world, id) {
        if engaged && actor.disposition == Disposition::Hostile {
            return assault(ctx, id);
        }
        if ctx.rng.percent(ctx.config.thief_steal_percent) {
            steal(ctx, id)?;
        }
    }
    if !engaged && ctx.rng.percent(ctx.config.thief_move_percent) {
        wander(ctx, id)?;
    }
    Ok(())
}

/// Flee when the player carries the actor's ward.
fn skittish(ctx: &mut TurnContext<'_>, id: &ActorId) -> CoreResult<()> {
    if !with_player(ctx.world, id) {
        return Ok(());
    }
    let actor = ctx.world.require_actor(id)?;
    let Some(ward) = actor.ward.clone() else {
        return Ok(());
    };
    if !ctx.world.is_carried(&ward) {
        return Ok(());
    }
    let text = narration::cue(actor, Cue::Flee, "")
        .unwrap_or_else(|| format!("The {} flees.", actor.name));
    if let Some(a) = ctx.world.actor_mut(id) {
        a.disposition = Disposition::Fled;
        a.engagement = Engagement::Dormant;
    }
    ctx.world.move_actor(id, None)?;
    ctx.emit(TurnEventKind::ActorFled { actor: id.clone() }, text);
    Ok(())
}

fn assault(ctx: &mut TurnContext<'_>, id: &ActorId) -> CoreResult<()> {
    if !ctx.rng.percent(ctx.config.npc_aggression_percent) {
        return Ok(());
    }
    let strike = combat::actor_strikes(ctx.world, ctx.rng, ctx.config, id)?;
    ctx.emit(
        TurnEventKind::ActorAttacked {
            actor: id.clone(),
            hit: strike.hit,
        },
        strike.text,
    );
    if ctx.world.player.health <= 0 {
        let name = ctx.world.require_actor(id)?.name.clone();
        return ctx.kill_player(&format!("The {name} has killed you."));
    }
    Ok(())
}

/// Take one top-level item from the player, favoring valuable ones.
fn steal(ctx: &mut TurnContext<'_>, id: &ActorId) -> CoreResult<()> {
    let pool: Vec<(ObjectId, u32)> = ctx
        .world
        .contents(&Location::Player)
        .filter_map(|o| ctx.world.object(o))
        .filter(|o| o.has(ObjectFlag::Takeable))
        .map(|o| (o.id.clone(), 1 + o.value.max(0).unsigned_abs()))
        .collect();
    let weights: Vec<u32> = pool.iter().map(|(_, w)| *w).collect();
    let Some(pick) = ctx.rng.weighted_index(&weights) else {
        return Ok(());
    };
    let item = pool[pick].0.clone();

    let actor = ctx.world.require_actor(id)?;
    let brief = ctx.world.require_object(&item)?.brief.clone();
    let text = narration::cue(actor, Cue::Steal, &brief)
        .unwrap_or_else(|| format!("Someone has stolen the {brief}!"));
    let stash = actor
        .hoard
        .clone()
        .map_or(Location::Nowhere, Location::Room);

    ctx.world.move_object(&item, stash)?;
    ctx.world
        .actor_mut(id)
        .ok_or_else(|| CoreError::ActorNotFound(id.clone()))?
        .loot
        .push(item.clone());
    tracing::info!(actor = %id, object = %item, "item stolen");
    ctx.emit(
        TurnEventKind::ItemStolen {
            actor: id.clone(),
            object: item,
        },
        text,
    );
    Ok(())
}

/// Distinct rooms a wandering actor may enter from `from`, in id order.
fn neighbors(world: &World, from: &RoomId) -> CoreResult<Vec<RoomId>> {
    let room = world.require_room(from)?;
    let open: BTreeSet<RoomId> = room
        .exits
        .values()
        .filter(|exit| {
            exit.guard
                .as_ref()
                .is_none_or(|g| world.guard_allows(&g.condition) == Some(true))
        })
        .map(|exit| exit.to.clone())
        .filter(|to| world.room(to).is_some_and(|r| !r.has(RoomFlag::NoThief)))
        .collect();
    Ok(open.into_iter().collect())
}

/// Move to a random neighbor the actor may enter.
fn wander(ctx: &mut TurnContext<'_>, id: &ActorId) -> CoreResult<()> {
    let actor = ctx.world.require_actor(id)?;
    let Some(from) = actor.location.clone() else {
        return Ok(());
    };
    let options = neighbors(ctx.world, &from)?;
    let Some(to) = ctx.rng.choose(&options).cloned() else {
        return Ok(());
    };

    let depart = narration::cue(actor, Cue::Depart, "");
    let arrive = narration::cue(actor, Cue::Arrive, "");
    let here = ctx.world.player.location.clone();
    ctx.world.move_actor(id, Some(to.clone()))?;
    tracing::debug!(actor = %id, from = %from, to = %to, "actor moved");

    if from == here
        && let Some(text) = depart
    {
        ctx.emit(TurnEventKind::ActorDeparted { actor: id.clone() }, text);
    }
    if to == here
        && let Some(text) = arrive
    {
        ctx.emit(TurnEventKind::ActorArrived { actor: id.clone() }, text);
    }
    Ok(())
}
