use uc_core::{GameObject, Location, ObjectFlag, ObjectId, World};

use super::{ActionContext, ActionResult, carried_with, direct_object, object};
use crate::error::{ActionError, PreconditionError};
use crate::narration;
use crate::parser::ParsedCommand;

fn is_flame(obj: &GameObject) -> bool {
    obj.has(ObjectFlag::FireStarter) || (obj.has(ObjectFlag::Flammable) && obj.is_shining())
}

/// Find something burning in the player's hands to light `target` with.
fn find_flame(
    world: &World,
    explicit: Option<&ObjectId>,
    target: &ObjectId,
) -> Result<ObjectId, ActionError> {
    let target_brief = object(world, target)?.brief.clone();
    match explicit {
        Some(tool) => {
            let obj = object(world, tool)?;
            if !world.is_carried(tool) {
                return Err(PreconditionError::NotHolding(obj.brief.clone()).into());
            }
            if !is_flame(obj) {
                return Err(PreconditionError::NoFlame(target_brief).into());
            }
            Ok(tool.clone())
        }
        None => carried_with(world, ObjectFlag::FireStarter)
            .chain(carried_with(world, ObjectFlag::Flammable))
            .find(|o| &o.id != target && is_flame(o))
            .map(|o| o.id.clone())
            .ok_or_else(|| PreconditionError::NoFlame(target_brief).into()),
    }
}

fn ignite(
    world: &mut World,
    id: &ObjectId,
    tool: Option<&ObjectId>,
) -> Result<ActionResult, ActionError> {
    let obj = object(world, id)?;
    let brief = obj.brief.clone();
    if !obj.has(ObjectFlag::LightSource) {
        return Err(PreconditionError::NotLightable(brief).into());
    }
    if obj.has(ObjectFlag::Lit) {
        return Err(PreconditionError::Refused(format!("The {brief} is already on.")).into());
    }
    if !world.is_reachable(id) {
        return Err(PreconditionError::NotReachable(brief).into());
    }
    if obj.has(ObjectFlag::Fueled) && world.player.lamp_fuel == 0 {
        return Err(PreconditionError::NoFuel(brief).into());
    }
    let needs_flame = obj.has(ObjectFlag::NeedsFlame);
    if needs_flame {
        find_flame(world, tool, id)?;
    }

    let here = world.player.location.clone();
    let was_dark = !world.is_lit(&here);
    world.set_object_flag(id, ObjectFlag::Lit)?;
    let mut result = ActionResult::turn(if needs_flame {
        format!("The {brief} is now burning.")
    } else {
        format!("The {brief} is now on.")
    });
    if was_dark && world.is_lit(&here) {
        result.text.extend(narration::describe_room(world, true));
    }
    Ok(result)
}

pub(super) fn light(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let id = direct_object(cmd, ctx.world)?;
    ignite(ctx.world, &id, cmd.indirect_object())
}

pub(super) fn extinguish(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let world = &mut *ctx.world;
    let id = direct_object(cmd, world)?;
    let obj = object(world, &id)?;
    let brief = obj.brief.clone();
    if !obj.has(ObjectFlag::LightSource) {
        return Err(PreconditionError::Refused(format!("You can't turn off the {brief}.")).into());
    }
    if !obj.has(ObjectFlag::Lit) {
        return Err(PreconditionError::Refused(format!("The {brief} is already off.")).into());
    }
    if !world.is_reachable(&id) {
        return Err(PreconditionError::NotReachable(brief).into());
    }
    world.clear_object_flag(&id, ObjectFlag::Lit)?;
    let mut result = ActionResult::turn(format!("The {brief} is now off."));
    if !world.is_lit(&world.player.location) {
        result.push("It is now pitch black.");
    }
    Ok(result)
}

/// Set fire to something. Flame-lit light sources are lit; other flammable
/// things burn away.
pub(super) fn burn(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let world = &mut *ctx.world;
    let id = direct_object(cmd, world)?;
    let obj = object(world, &id)?;
    let brief = obj.brief.clone();
    if obj.has(ObjectFlag::LightSource) && obj.has(ObjectFlag::NeedsFlame) {
        return ignite(world, &id, cmd.indirect_object());
    }
    if !obj.has(ObjectFlag::Flammable) {
        return Err(PreconditionError::Refused(format!("You can't burn the {brief}.")).into());
    }
    if !world.is_reachable(&id) {
        return Err(PreconditionError::NotReachable(brief).into());
    }
    find_flame(world, cmd.indirect_object(), &id)?;

    let here = Location::Room(world.player.location.clone());
    let inside: Vec<ObjectId> = world
        .contents(&Location::Object(id.clone()))
        .cloned()
        .collect();
    for inner in &inside {
        world.move_object(inner, here.clone())?;
    }
    world.move_object(&id, Location::Nowhere)?;
    Ok(ActionResult::turn(format!(
        "The {brief} catches fire and is consumed."
    )))
}
