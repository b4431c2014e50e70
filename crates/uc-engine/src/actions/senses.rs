use uc_core::{Cue, EntityRef, ObjectFlag, World};

use super::{ActionResult, direct_object, label, object};
use crate::error::{ActionError, PreconditionError};
use crate::narration;
use crate::parser::ParsedCommand;

pub(super) fn look(world: &World) -> Result<ActionResult, ActionError> {
    Ok(ActionResult::lines(narration::describe_room(world, true)))
}

pub(super) fn examine(cmd: &ParsedCommand, world: &World) -> Result<ActionResult, ActionError> {
    if let Some(EntityRef::Actor(id)) = &cmd.direct {
        let actor = world.require_actor(id)?;
        let text = actor
            .line(Cue::Present)
            .map(str::to_string)
            .unwrap_or_else(|| format!("There's nothing special about the {}.", actor.name));
        return Ok(ActionResult::turn(text));
    }

    let id = direct_object(cmd, world)?;
    let obj = object(world, &id)?;
    let mut result = ActionResult::turn(if obj.examine.is_empty() {
        format!("There's nothing special about the {}.", obj.brief)
    } else {
        obj.examine.clone()
    });
    if obj.has(ObjectFlag::LightSource) {
        let state = if obj.has(ObjectFlag::Lit) { "on" } else { "off" };
        result.push(format!("The {} is {state}.", obj.brief));
    }
    let openable = obj.has(ObjectFlag::Door)
        || (obj.has(ObjectFlag::Container) && !obj.has(ObjectFlag::Scenery));
    if openable && !obj.has(ObjectFlag::Open) && !obj.has(ObjectFlag::Transparent) {
        result.push(format!("The {} is closed.", obj.brief));
    } else if obj.shows_contents() {
        let inside = narration::contents(world, &id, 0);
        if inside.is_empty() && obj.has(ObjectFlag::Container) {
            result.push(format!("The {} is empty.", obj.brief));
        }
        result.text.extend(inside);
    }
    Ok(result)
}

pub(super) fn read(cmd: &ParsedCommand, world: &World) -> Result<ActionResult, ActionError> {
    if let Some(target @ EntityRef::Actor(_)) = &cmd.direct {
        return Err(PreconditionError::Refused(format!(
            "You can't read the {}.",
            label(world, target)
        ))
        .into());
    }
    let id = direct_object(cmd, world)?;
    if !world.is_lit(&world.player.location) {
        return Err(PreconditionError::Refused("It is too dark to read.".to_string()).into());
    }
    let obj = object(world, &id)?;
    match &obj.read_text {
        Some(text) => Ok(ActionResult::turn(text.clone())),
        None => Err(PreconditionError::Refused(format!(
            "There's nothing written on the {}.",
            obj.brief
        ))
        .into()),
    }
}
