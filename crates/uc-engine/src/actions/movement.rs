use uc_core::{Cue, Direction, RoomFlag, World};

use super::{ActionContext, ActionResult};
use crate::error::{ActionError, PreconditionError};
use crate::narration;
use crate::parser::ParsedCommand;

pub(super) fn go(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let dir = cmd.direction.ok_or(PreconditionError::NoExit)?;
    travel(ctx.world, dir)
}

/// `climb` goes the named way, or up, or down, whichever exists.
pub(super) fn climb(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let room = ctx.world.current_room()?;
    let dir = cmd.direction.or_else(|| {
        [Direction::Up, Direction::Down]
            .into_iter()
            .find(|d| room.exits.contains_key(d))
    });
    match dir {
        Some(dir) => travel(ctx.world, dir),
        None => Err(PreconditionError::Refused("You can't climb that.".to_string()).into()),
    }
}

/// Leave the current room by `dir`.
///
/// An active actor blocking the exit stops the player before any guard is
/// checked. A guard on a door that is still out of play means there is no
/// exit yet.
pub(crate) fn travel(world: &mut World, dir: Direction) -> Result<ActionResult, ActionError> {
    let room = world.current_room()?;
    let exit = room
        .exits
        .get(&dir)
        .cloned()
        .ok_or(PreconditionError::NoExit)?;
    if let Some(actor) = world.actors_in(&room.id).find(|a| a.blocks(dir)) {
        let line = actor
            .line(Cue::Block)
            .map(str::to_string)
            .unwrap_or_else(|| format!("The {} won't let you pass.", actor.name));
        return Err(PreconditionError::Blocked(line).into());
    }
    if let Some(guard) = &exit.guard {
        match world.guard_allows(&guard.condition) {
            None => return Err(PreconditionError::NoExit.into()),
            Some(false) => return Err(PreconditionError::Blocked(guard.blocked.clone()).into()),
            Some(true) => {}
        }
    }

    world.move_player(exit.to.clone())?;
    tracing::debug!(room = %exit.to, direction = dir.name(), "player moved");
    let text = narration::describe_room(world, false);
    if world.is_lit(&exit.to) {
        world.set_room_flag(&exit.to, RoomFlag::Visited)?;
    }
    Ok(ActionResult::lines(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing;
    use uc_core::{RoomId, WorldFlag};

    #[test]
    fn walking_describes_the_new_room() {
        let mut world = testing::world();
        let result = travel(&mut world, Direction::North).unwrap();
        assert_eq!(world.player.location, RoomId::new("gate"));
        assert_eq!(result.text[0], "Gate");
        assert!(world.room(&RoomId::new("gate")).unwrap().has(RoomFlag::Visited));
    }

    #[test]
    fn missing_exit() {
        let mut world = testing::world();
        let err = travel(&mut world, Direction::West).unwrap_err();
        assert_eq!(err, ActionError::Precondition(PreconditionError::NoExit));
        assert_eq!(world.player.location, RoomId::new("yard"));
    }

    #[test]
    fn guard_blocks_until_flag_set() {
        let mut world = testing::world();
        let err = travel(&mut world, Direction::East).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The sluice is shut."
        );
        world.set_flag(WorldFlag::DamOpen);
        travel(&mut world, Direction::East).unwrap();
        assert_eq!(world.player.location, RoomId::new("gate"));
    }

    #[test]
    fn active_actor_blocks_exit() {
        let mut world = testing::world();
        travel(&mut world, Direction::North).unwrap();
        let err = travel(&mut world, Direction::South).unwrap_err();
        assert_eq!(err.to_string(), "The ogre bars the way.");
    }

    #[test]
    fn dark_room_is_not_marked_visited() {
        let mut world = testing::world();
        let result = travel(&mut world, Direction::Down).unwrap();
        assert_eq!(result.text, vec![narration::DARKNESS.to_string()]);
        assert!(!world.room(&RoomId::new("cellar")).unwrap().has(RoomFlag::Visited));
    }
}
