use uc_core::{Location, ObjectFlag, ObjectId, World};

use super::{ActionContext, ActionResult, direct_object, object};
use crate::error::{ActionError, PreconditionError};
use crate::narration;
use crate::parser::ParsedCommand;

fn openable(world: &World, id: &ObjectId) -> Result<String, ActionError> {
    let obj = object(world, id)?;
    if !(obj.has(ObjectFlag::Container) || obj.has(ObjectFlag::Door)) {
        return Err(PreconditionError::NotOpenable(obj.brief.clone()).into());
    }
    if !world.is_reachable(id) {
        return Err(PreconditionError::NotReachable(obj.brief.clone()).into());
    }
    Ok(obj.brief.clone())
}

pub(super) fn open(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let world = &mut *ctx.world;
    let id = direct_object(cmd, world)?;
    let brief = openable(world, &id)?;
    let obj = object(world, &id)?;
    if obj.has(ObjectFlag::Open) {
        return Err(PreconditionError::AlreadyOpen(brief).into());
    }
    if obj.has(ObjectFlag::Locked) {
        return Err(PreconditionError::Locked(brief).into());
    }

    world.set_object_flag(&id, ObjectFlag::Open)?;
    let inside: Vec<String> = world
        .contents(&Location::Object(id.clone()))
        .filter_map(|inner| world.object(inner))
        .map(|o| narration::with_article(&o.brief))
        .collect();
    let text = if inside.is_empty() {
        "Opened.".to_string()
    } else {
        format!("Opening the {brief} reveals {}.", narration::join_list(&inside))
    };
    Ok(ActionResult::turn(text))
}

pub(super) fn close(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let world = &mut *ctx.world;
    let id = direct_object(cmd, world)?;
    let brief = openable(world, &id)?;
    if !object(world, &id)?.has(ObjectFlag::Open) {
        return Err(PreconditionError::AlreadyClosed(brief).into());
    }
    world.clear_object_flag(&id, ObjectFlag::Open)?;
    Ok(ActionResult::turn("Closed."))
}

/// The key that works this lock, checked against what the player holds.
fn check_key(
    world: &World,
    cmd: &ParsedCommand,
    id: &ObjectId,
) -> Result<(), ActionError> {
    let obj = object(world, id)?;
    let Some(key) = &obj.key else {
        return Err(PreconditionError::WrongTool(format!(
            "The {} has no keyhole.",
            obj.brief
        ))
        .into());
    };
    match cmd.indirect_object() {
        Some(tool) => {
            let tool_obj = object(world, tool)?;
            if !world.is_carried(tool) {
                return Err(PreconditionError::NotHolding(tool_obj.brief.clone()).into());
            }
            if tool != key {
                return Err(PreconditionError::WrongTool(format!(
                    "The {} doesn't fit the lock.",
                    tool_obj.brief
                ))
                .into());
            }
        }
        None if !world.is_carried(key) => {
            return Err(PreconditionError::WrongTool(format!(
                "You have nothing that fits the {}.",
                obj.brief
            ))
            .into());
        }
        None => {}
    }
    Ok(())
}

pub(super) fn unlock(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let world = &mut *ctx.world;
    let id = direct_object(cmd, world)?;
    let obj = object(world, &id)?;
    if !obj.has(ObjectFlag::Locked) {
        return Err(PreconditionError::NotLocked(obj.brief.clone()).into());
    }
    if !world.is_reachable(&id) {
        return Err(PreconditionError::NotReachable(obj.brief.clone()).into());
    }
    check_key(world, cmd, &id)?;
    world.clear_object_flag(&id, ObjectFlag::Locked)?;
    Ok(ActionResult::turn("Unlocked."))
}

pub(super) fn lock(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let world = &mut *ctx.world;
    let id = direct_object(cmd, world)?;
    let obj = object(world, &id)?;
    let brief = obj.brief.clone();
    if obj.has(ObjectFlag::Locked) {
        return Err(PreconditionError::Locked(brief).into());
    }
    if !world.is_reachable(&id) {
        return Err(PreconditionError::NotReachable(brief).into());
    }
    check_key(world, cmd, &id)?;
    if object(world, &id)?.has(ObjectFlag::Open) {
        return Err(PreconditionError::Refused(format!("You'll have to close the {brief} first.")).into());
    }
    world.set_object_flag(&id, ObjectFlag::Locked)?;
    Ok(ActionResult::turn("Locked."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{resolve, testing};
    use crate::config::EngineConfig;
    use crate::parser::parse;
    use crate::rng::GameRng;
    use uc_core::GameObject;

    fn run(world: &mut World, input: &str) -> Result<ActionResult, ActionError> {
        let cmd = parse(input, &world.scope(), world).unwrap();
        let config = EngineConfig::default();
        let mut rng = GameRng::new(1);
        let mut ctx = ActionContext {
            world,
            config: &config,
            rng: &mut rng,
        };
        resolve(&cmd, &mut ctx)
    }

    fn with_chest(world: &mut World) {
        let mut chest = GameObject::new("chest", "chest", Location::room("yard"))
            .with_flag(ObjectFlag::Container)
            .with_flag(ObjectFlag::Locked)
            .with_capacity(10);
        chest.key = Some(ObjectId::new("key"));
        world.add_object(chest).unwrap();
        world
            .add_object(
                GameObject::new("key", "key", Location::room("yard"))
                    .with_flag(ObjectFlag::Takeable),
            )
            .unwrap();
        world
            .add_object(GameObject::new("ring", "ring", Location::inside("chest")).with_flag(ObjectFlag::Takeable))
            .unwrap();
    }

    #[test]
    fn opening_reveals_contents() {
        let mut world = testing::world();
        with_chest(&mut world);
        world.clear_object_flag(&ObjectId::new("chest"), ObjectFlag::Locked).unwrap();
        let text = run(&mut world, "open chest").unwrap().text;
        assert_eq!(text, vec!["Opening the chest reveals a ring."]);
        assert_eq!(
            run(&mut world, "open chest").unwrap_err().to_string(),
            "The chest is already open."
        );
    }

    #[test]
    fn locked_until_key_in_hand() {
        let mut world = testing::world();
        with_chest(&mut world);
        assert_eq!(run(&mut world, "open chest").unwrap_err().to_string(), "The chest is locked.");
        assert_eq!(
            run(&mut world, "unlock chest").unwrap_err().to_string(),
            "You have nothing that fits the chest."
        );
        run(&mut world, "take key").unwrap();
        assert_eq!(run(&mut world, "unlock chest with key").unwrap().text, vec!["Unlocked."]);
        run(&mut world, "open chest").unwrap();
        assert_eq!(
            run(&mut world, "lock chest").unwrap_err().to_string(),
            "You'll have to close the chest first."
        );
    }

    #[test]
    fn wrong_key_does_not_fit() {
        let mut world = testing::world();
        with_chest(&mut world);
        run(&mut world, "take coin").unwrap();
        let err = run(&mut world, "unlock chest with coin").unwrap_err();
        assert_eq!(err.to_string(), "The gold coin doesn't fit the lock.");
    }

    #[test]
    fn non_containers_do_not_open() {
        let mut world = testing::world();
        assert_eq!(
            run(&mut world, "open coin").unwrap_err(),
            ActionError::Precondition(PreconditionError::NotOpenable("gold coin".to_string()))
        );
    }
}
