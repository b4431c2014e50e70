//! Content-defined puzzle hooks.
//!
//! Hooks are gathered from the direct object first, then from the room. The
//! first hook whose requirements all hold fires. If hooks matched the verb but
//! none could fire, the first `otherwise` text refuses the action; with no
//! such text the built-in handler runs.

use uc_core::{
    CoreResult, Disposition, Effect, Engagement, Hook, HookMode, Location, Placement, Requirement,
    VerbType, World,
};

use super::ActionResult;
use crate::parser::ParsedCommand;

/// What the instead-hooks decided.
#[derive(Debug)]
pub(super) enum HookOutcome {
    /// A hook handled the whole action.
    Fired(ActionResult),
    /// Hooks matched but the world said no.
    Refused(String),
    /// Nothing matched; run the built-in handler.
    Pass,
}

/// Run instead-hooks for a command.
pub(super) fn run_instead(cmd: &ParsedCommand, world: &mut World) -> CoreResult<HookOutcome> {
    let hooks = matching(cmd, world, HookMode::Instead);
    if hooks.is_empty() {
        return Ok(HookOutcome::Pass);
    }
    if let Some(hook) = hooks.iter().find(|h| holds(world, &h.requires)) {
        let mut result = ActionResult::default().costing(1);
        fire(world, hook, &mut result)?;
        tracing::debug!(verb = ?cmd.verb, "hook fired");
        return Ok(HookOutcome::Fired(result));
    }
    Ok(match hooks.iter().find_map(|h| h.otherwise.clone()) {
        Some(text) => HookOutcome::Refused(text),
        None => HookOutcome::Pass,
    })
}

/// Run after-hooks on top of a successful built-in action.
pub(super) fn run_after(
    cmd: &ParsedCommand,
    world: &mut World,
    result: &mut ActionResult,
) -> CoreResult<()> {
    let hooks = matching(cmd, world, HookMode::After);
    if let Some(hook) = hooks.iter().find(|h| holds(world, &h.requires)) {
        fire(world, hook, result)?;
    }
    Ok(())
}

fn matching(cmd: &ParsedCommand, world: &World, mode: HookMode) -> Vec<Hook> {
    let mut sources: Vec<&Hook> = Vec::new();
    if let Some(obj) = cmd.direct_object().and_then(|id| world.object(id)) {
        sources.extend(&obj.hooks);
    }
    if let Some(room) = world.room(&world.player.location) {
        sources.extend(&room.hooks);
    }
    let pick = |verb: VerbType| -> Vec<Hook> {
        sources
            .iter()
            .filter(|h| h.verb == verb && h.mode == mode)
            .filter(|h| h.with.is_none() || h.with.as_ref() == cmd.indirect_object())
            .map(|h| (*h).clone())
            .collect()
    };
    let found = pick(cmd.verb);
    // "push rug" means what "move rug" means unless content says otherwise.
    if found.is_empty() && cmd.verb == VerbType::Push {
        return pick(VerbType::Move);
    }
    found
}

/// Whether every requirement holds.
pub(crate) fn holds(world: &World, requires: &[Requirement]) -> bool {
    requires.iter().all(|req| match req {
        Requirement::Flag(flag) => world.has_flag(*flag),
        Requirement::NotFlag(flag) => !world.has_flag(*flag),
        Requirement::Holding(id) => world.is_carried(id),
        Requirement::InRoom(room) => &world.player.location == room,
        Requirement::InAnyRoom(rooms) => rooms.contains(&world.player.location),
        Requirement::ObjectIn { object, container } => world
            .object(object)
            .is_some_and(|o| o.location == Location::Object(container.clone())),
        Requirement::Hidden(id) => world
            .object(id)
            .is_some_and(|o| o.location == Location::Nowhere),
        Requirement::ObjectHas { object, flag } => {
            world.object(object).is_some_and(|o| o.has(*flag))
        }
        Requirement::ObjectLacks { object, flag } => {
            world.object(object).is_some_and(|o| !o.has(*flag))
        }
        Requirement::RoomHas(flag) => world
            .room(&world.player.location)
            .is_some_and(|r| r.has(*flag)),
        Requirement::ActorPresent(actor) => world
            .actor(actor)
            .is_some_and(|a| a.location.as_ref() == Some(&world.player.location)),
    })
}

fn fire(world: &mut World, hook: &Hook, result: &mut ActionResult) -> CoreResult<()> {
    if !hook.message.is_empty() {
        result.text.push(hook.message.clone());
    }
    for effect in &hook.effects {
        apply(world, effect, result)?;
    }
    Ok(())
}

/// Apply one effect.
pub(crate) fn apply(world: &mut World, effect: &Effect, result: &mut ActionResult) -> CoreResult<()> {
    match effect {
        Effect::SetFlag(flag) => world.set_flag(*flag),
        Effect::ClearFlag(flag) => world.clear_flag(*flag),
        Effect::Reveal { object, to } => {
            if world.require_object(object)?.location == Location::Nowhere {
                let dest = place(world, to);
                world.move_object(object, dest)?;
            }
        }
        Effect::Relocate { object, to } => {
            let dest = place(world, to);
            world.move_object(object, dest)?;
        }
        Effect::Remove(object) => world.move_object(object, Location::Nowhere)?,
        Effect::SetObjectFlag { object, flag } => world.set_object_flag(object, *flag)?,
        Effect::ClearObjectFlag { object, flag } => world.clear_object_flag(object, *flag)?,
        Effect::SetRoomFlag { room, flag } => world.set_room_flag(room, *flag)?,
        Effect::ClearRoomFlag { room, flag } => world.clear_room_flag(room, *flag)?,
        Effect::SetValue { object, value } => world.set_object_value(object, *value)?,
        Effect::Banish(actor) => {
            if let Some(a) = world.actor_mut(actor) {
                a.disposition = Disposition::Fled;
                a.engagement = Engagement::Dormant;
            }
            world.move_actor(actor, None)?;
        }
        Effect::Kill(cause) => result.fatal = Some(cause.clone()),
        Effect::Award(points) => result.award(world, *points),
    }
    Ok(())
}

fn place(world: &World, placement: &Placement) -> Location {
    match placement {
        Placement::Here => Location::Room(world.player.location.clone()),
        Placement::Room(room) => Location::Room(room.clone()),
        Placement::Inside(obj) => Location::Object(obj.clone()),
        Placement::Player => Location::Player,
    }
}
