use uc_core::{EntityRef, Location, ObjectFlag, ObjectId, World};

use super::{ActionContext, ActionResult, direct_object, label, object};
use crate::error::{ActionError, PreconditionError};
use crate::narration;
use crate::parser::ParsedCommand;

pub(super) fn take(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let world = &mut *ctx.world;
    let id = direct_object(cmd, world)?;
    let obj = object(world, &id)?;
    if obj.location == Location::Player {
        return Err(PreconditionError::AlreadyHave(obj.brief.clone()).into());
    }
    if !world.is_reachable(&id) {
        return Err(PreconditionError::NotReachable(obj.brief.clone()).into());
    }
    if !obj.has(ObjectFlag::Takeable) {
        return Err(PreconditionError::NotTakeable(obj.brief.clone()).into());
    }
    let limit = world.player.carry;
    if world.slots_used() + 1 > limit.slots {
        return Err(PreconditionError::TooMany.into());
    }
    // Something already inside a carried bag weighs the same in hand.
    if !world.is_carried(&id) && world.carried_weight() + world.weight_of(&id) > limit.weight {
        return Err(PreconditionError::TooHeavy.into());
    }

    world.move_object(&id, Location::Player)?;
    world.set_object_flag(&id, ObjectFlag::Touched)?;
    tracing::debug!(object = %id, "taken");
    Ok(ActionResult::turn("Taken."))
}

pub(super) fn drop(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let world = &mut *ctx.world;
    let id = direct_object(cmd, world)?;
    if !world.is_carried(&id) {
        return Err(PreconditionError::NotHolding(object(world, &id)?.brief.clone()).into());
    }
    let here = Location::Room(world.player.location.clone());
    world.move_object(&id, here)?;
    world.set_object_flag(&id, ObjectFlag::Touched)?;
    Ok(ActionResult::turn("Dropped."))
}

/// Put a carried object into a container. Depositing a treasure in the trophy
/// case scores it once.
pub(super) fn put(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let world = &mut *ctx.world;
    let id = direct_object(cmd, world)?;
    let target = match &cmd.indirect {
        Some(EntityRef::Object(target)) => target.clone(),
        Some(other) => {
            return Err(PreconditionError::NotContainer(label(world, other)).into());
        }
        None => {
            return Err(
                PreconditionError::Refused("Where do you want to put it?".to_string()).into(),
            );
        }
    };
    let item = object(world, &id)?;
    if !world.is_carried(&id) {
        return Err(PreconditionError::NotHolding(item.brief.clone()).into());
    }
    if id == target || world.encloses(&id, &target) {
        return Err(PreconditionError::SelfContainment.into());
    }
    let container = object(world, &target)?;
    if !world.is_reachable(&target) {
        return Err(PreconditionError::NotReachable(container.brief.clone()).into());
    }
    if !container.has(ObjectFlag::Container) {
        return Err(PreconditionError::NotContainer(container.brief.clone()).into());
    }
    if !container.has(ObjectFlag::Open) {
        return Err(PreconditionError::NotOpen(container.brief.clone()).into());
    }
    if world.contents_size(&target) + item.size > container.capacity {
        return Err(PreconditionError::NoRoom(container.brief.clone()).into());
    }

    world.move_object(&id, Location::Object(target.clone()))?;
    let mut result = ActionResult::turn("Done.");
    if target == world.meta.trophy_case {
        deposit(world, &id, &mut result)?;
    }
    Ok(result)
}

/// Score a treasure placed in the trophy case. A treasure scores at most once
/// per game, however often it goes in and out.
fn deposit(world: &mut World, id: &ObjectId, result: &mut ActionResult) -> Result<(), ActionError> {
    let obj = object(world, id)?;
    if !obj.has(ObjectFlag::Treasure) || obj.has(ObjectFlag::Scored) {
        return Ok(());
    }
    let value = obj.value;
    world.set_object_flag(id, ObjectFlag::Scored)?;
    result.award(world, value);
    tracing::info!(treasure = %id, value, score = world.player.score, "treasure scored");
    Ok(())
}

pub(super) fn inventory(world: &World) -> Result<ActionResult, ActionError> {
    Ok(ActionResult::lines(narration::inventory(world)))
}

pub(super) fn eat(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    consume(
        cmd,
        ctx.world,
        ObjectFlag::Edible,
        "Thank you very much. It really hit the spot.",
        |brief| format!("I don't think that the {brief} would agree with you."),
    )
}

pub(super) fn drink(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    consume(
        cmd,
        ctx.world,
        ObjectFlag::Drinkable,
        "Thank you very much. I was rather thirsty.",
        |brief| format!("I don't think that you can drink the {brief}."),
    )
}

fn consume(
    cmd: &ParsedCommand,
    world: &mut World,
    flag: ObjectFlag,
    success: &str,
    refusal: impl Fn(&str) -> String,
) -> Result<ActionResult, ActionError> {
    let id = direct_object(cmd, world)?;
    let obj = object(world, &id)?;
    if !obj.has(flag) {
        return Err(PreconditionError::Refused(refusal(&obj.brief)).into());
    }
    if !world.is_reachable(&id) {
        return Err(PreconditionError::NotReachable(obj.brief.clone()).into());
    }
    world.move_object(&id, Location::Nowhere)?;
    Ok(ActionResult::turn(success))
}

/// Break something fragile. Its contents spill onto the floor.
pub(super) fn smash(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let world = &mut *ctx.world;
    let id = direct_object(cmd, world)?;
    let obj = object(world, &id)?;
    let brief = obj.brief.clone();
    if !obj.has(ObjectFlag::Fragile) {
        return Err(
            PreconditionError::Refused(format!("Trying to destroy the {brief} is futile.")).into(),
        );
    }
    if !world.is_reachable(&id) {
        return Err(PreconditionError::NotReachable(brief).into());
    }
    let here = Location::Room(world.player.location.clone());
    let spilled: Vec<ObjectId> = world
        .contents(&Location::Object(id.clone()))
        .cloned()
        .collect();
    for inner in &spilled {
        world.move_object(inner, here.clone())?;
    }
    world.move_object(&id, Location::Nowhere)?;
    Ok(ActionResult::turn(format!("The {brief} shatters into pieces.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{resolve, testing};
    use crate::config::EngineConfig;
    use crate::parser::parse;
    use crate::rng::GameRng;

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

    #[test]
    fn take_and_drop() {
        let mut world = testing::world();
        assert_eq!(run(&mut world, "take coin").unwrap().text, vec!["Taken."]);
        assert!(world.is_carried(&ObjectId::new("coin")));
        assert_eq!(
            run(&mut world, "take coin").unwrap_err().to_string(),
            "You already have the gold coin."
        );
        assert_eq!(run(&mut world, "drop coin").unwrap().text, vec!["Dropped."]);
        assert_eq!(
            object(&world, &ObjectId::new("coin")).unwrap().location,
            Location::room("yard")
        );
    }

    #[test]
    fn weight_ceiling_refuses_heavy_things() {
        let mut world = testing::world();
        let err = run(&mut world, "take anvil").unwrap_err();
        assert_eq!(err, ActionError::Precondition(PreconditionError::TooHeavy));
        assert!(!world.is_carried(&ObjectId::new("anvil")));
    }

    #[test]
    fn slot_limit_refuses_one_more() {
        let mut world = testing::world();
        world.player.carry.slots = 1;
        run(&mut world, "take coin").unwrap();
        let err = run(&mut world, "take sword").unwrap_err();
        assert_eq!(err, ActionError::Precondition(PreconditionError::TooMany));
    }

    #[test]
    fn scenery_cannot_be_taken() {
        let mut world = testing::world();
        let err = run(&mut world, "take case").unwrap_err();
        assert_eq!(err.to_string(), "You can't take the trophy case.");
    }

    #[test]
    fn trophy_case_scores_once() {
        let mut world = testing::world();
        run(&mut world, "take coin").unwrap();
        let first = run(&mut world, "put coin in case").unwrap();
        assert_eq!(first.score_delta, 10);
        assert_eq!(world.player.score, 10);

        run(&mut world, "take coin").unwrap();
        let again = run(&mut world, "put coin in case").unwrap();
        assert_eq!(again.score_delta, 0);
        assert_eq!(world.player.score, 10);
    }

    #[test]
    fn closed_container_refuses_items() {
        let mut world = testing::world();
        run(&mut world, "take coin").unwrap();
        let err = run(&mut world, "put coin in box").unwrap_err();
        assert_eq!(err.to_string(), "The wooden box isn't open.");
    }

    #[test]
    fn container_cannot_hold_itself() {
        let mut world = testing::world();
        run(&mut world, "take box").unwrap();
        world.set_object_flag(&ObjectId::new("box"), ObjectFlag::Open).unwrap();
        let err = run(&mut world, "put box in box").unwrap_err();
        assert_eq!(err, ActionError::Precondition(PreconditionError::SelfContainment));
    }

    #[test]
    fn full_container_refuses() {
        let mut world = testing::world();
        world.set_object_flag(&ObjectId::new("box"), ObjectFlag::Open).unwrap();
        run(&mut world, "take lamp").unwrap();
        let err = run(&mut world, "put lamp in box").unwrap_err();
        assert_eq!(err.to_string(), "There's no room in the wooden box.");
    }
}
