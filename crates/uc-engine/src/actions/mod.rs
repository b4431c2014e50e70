//! Verb resolution: turning a parsed command into a world change.
//!
//! Every verb first checks content hooks, then falls back to a built-in
//! handler. Handlers check preconditions before touching the world, so a
//! refused action leaves everything as it was.

mod containers;
mod hooks;
mod items;
mod light;
mod meta;
mod movement;
mod people;
mod senses;

use uc_core::{EntityRef, GameObject, ObjectFlag, ObjectId, VerbType, World};

use crate::config::EngineConfig;
use crate::error::{ActionError, PreconditionError};
use crate::parser::ParsedCommand;
use crate::rng::GameRng;

pub(crate) use hooks::holds;
pub(crate) use meta::score as score_report;

/// What a resolver may touch.
pub struct ActionContext<'a> {
    /// The world being changed.
    pub world: &'a mut World,
    /// Tuning.
    pub config: &'a EngineConfig,
    /// Shared random stream.
    pub rng: &'a mut GameRng,
}

/// The outcome of one successful action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionResult {
    /// What the player sees.
    pub text: Vec<String>,
    /// Points gained by this action.
    pub score_delta: i32,
    /// Turns consumed. Zero for meta verbs.
    pub turn_cost: u32,
    /// Set when the action kills the player.
    pub fatal: Option<String>,
}

impl ActionResult {
    /// A one-line result that takes a turn.
    pub fn turn(line: impl Into<String>) -> Self {
        Self::lines(vec![line.into()])
    }

    /// A multi-line result that takes a turn.
    pub fn lines(text: Vec<String>) -> Self {
        Self {
            text,
            turn_cost: 1,
            ..Self::default()
        }
    }

    /// A one-line result that takes no time.
    pub fn free(line: impl Into<String>) -> Self {
        Self {
            text: vec![line.into()],
            ..Self::default()
        }
    }

    /// Builder: set the turn cost.
    pub fn costing(mut self, turns: u32) -> Self {
        self.turn_cost = turns;
        self
    }

    /// Append a line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.text.push(line.into());
    }

    /// Add points to the player's score and record them.
    pub fn award(&mut self, world: &mut World, points: i32) {
        world.player.score += points;
        self.score_delta += points;
    }
}

/// Carry out a command.
///
/// Precondition failures come back as [`ActionError::Precondition`] and leave
/// the world unchanged.
pub fn resolve(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    match hooks::run_instead(cmd, ctx.world)? {
        hooks::HookOutcome::Fired(result) => return Ok(result),
        hooks::HookOutcome::Refused(text) => {
            return Err(PreconditionError::Refused(text).into());
        }
        hooks::HookOutcome::Pass => {}
    }
    let mut result = dispatch(cmd, ctx)?;
    hooks::run_after(cmd, ctx.world, &mut result)?;
    Ok(result)
}

/// Answer a question about the world without changing it.
///
/// Only looking, reading and status verbs are answered; hooks never run.
/// Anything else comes back as `None`.
pub fn inspect(cmd: &ParsedCommand, world: &World) -> Option<Result<ActionResult, ActionError>> {
    let result = match cmd.verb {
        VerbType::Look => senses::look(world),
        VerbType::Examine => senses::examine(cmd, world),
        VerbType::Read => senses::read(cmd, world),
        VerbType::Inventory => items::inventory(world),
        VerbType::Score => Ok(meta::score(world)),
        VerbType::Diagnose => Ok(meta::diagnose(world)),
        VerbType::Help => Ok(meta::help()),
        VerbType::Version => Ok(meta::version(world)),
        _ => return None,
    };
    Some(result)
}

fn dispatch(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    match cmd.verb {
        VerbType::Go => movement::go(cmd, ctx),
        VerbType::Climb => movement::climb(cmd, ctx),
        VerbType::Look => senses::look(ctx.world),
        VerbType::Examine => senses::examine(cmd, ctx.world),
        VerbType::Read => senses::read(cmd, ctx.world),
        VerbType::Take => items::take(cmd, ctx),
        VerbType::Drop => items::drop(cmd, ctx),
        VerbType::Put => items::put(cmd, ctx),
        VerbType::Inventory => items::inventory(ctx.world),
        VerbType::Eat => items::eat(cmd, ctx),
        VerbType::Drink => items::drink(cmd, ctx),
        VerbType::Break => items::smash(cmd, ctx),
        VerbType::Open => containers::open(cmd, ctx),
        VerbType::Close => containers::close(cmd, ctx),
        VerbType::Unlock => containers::unlock(cmd, ctx),
        VerbType::Lock => containers::lock(cmd, ctx),
        VerbType::Light => light::light(cmd, ctx),
        VerbType::Extinguish => light::extinguish(cmd, ctx),
        VerbType::Burn => light::burn(cmd, ctx),
        VerbType::Attack => people::attack(cmd, ctx),
        VerbType::Give => people::give(cmd, ctx),
        VerbType::Say => people::say(cmd, ctx),
        VerbType::Wait => Ok(ActionResult::turn("Time passes...")),
        VerbType::Score => Ok(meta::score(ctx.world)),
        VerbType::Diagnose => Ok(meta::diagnose(ctx.world)),
        VerbType::Verbose => Ok(meta::verbosity(ctx.world, true)),
        VerbType::Brief => Ok(meta::verbosity(ctx.world, false)),
        VerbType::Help => Ok(meta::help()),
        VerbType::Version => Ok(meta::version(ctx.world)),
        VerbType::Move
        | VerbType::Push
        | VerbType::Turn
        | VerbType::Tie
        | VerbType::Untie
        | VerbType::Ring
        | VerbType::Raise
        | VerbType::Lower
        | VerbType::Wave
        | VerbType::Wind
        | VerbType::Fill
        | VerbType::Pour
        | VerbType::Pray
        | VerbType::Dig
        | VerbType::Jump => meta::no_effect(cmd, ctx),
        // Handled by the session before resolution.
        VerbType::Save
        | VerbType::Restore
        | VerbType::Restart
        | VerbType::Quit
        | VerbType::Again => Err(PreconditionError::Nothing.into()),
    }
}

/// The direct object, refusing verbs aimed at an actor.
fn direct_object(cmd: &ParsedCommand, world: &World) -> Result<ObjectId, ActionError> {
    match &cmd.direct {
        Some(EntityRef::Object(id)) => Ok(id.clone()),
        Some(EntityRef::Actor(id)) => {
            let name = world.require_actor(id)?.name.clone();
            Err(PreconditionError::Refused(format!(
                "You can't {} the {name}.",
                cmd.verb.name()
            ))
            .into())
        }
        None => Err(PreconditionError::Refused(format!(
            "What do you want to {}?",
            cmd.verb.name()
        ))
        .into()),
    }
}

fn object<'w>(world: &'w World, id: &ObjectId) -> Result<&'w GameObject, ActionError> {
    Ok(world.require_object(id)?)
}

/// Short name for any entity, for messages.
fn label(world: &World, entity: &EntityRef) -> String {
    match entity {
        EntityRef::Object(id) => world
            .object(id)
            .map_or_else(|| id.to_string(), |o| o.brief.clone()),
        EntityRef::Actor(id) => world
            .actor(id)
            .map_or_else(|| id.to_string(), |a| a.name.clone()),
    }
}

/// Objects the player carries at any depth.
fn carried_with<'w>(world: &'w World, flag: ObjectFlag) -> impl Iterator<Item = &'w GameObject> {
    world
        .objects()
        .filter(move |o| o.has(flag) && world.is_carried(&o.id))
}
