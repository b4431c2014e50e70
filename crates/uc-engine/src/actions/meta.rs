use uc_core::{EntityRef, VerbType, World};

use super::{ActionContext, ActionResult, label};
use crate::error::{ActionError, PreconditionError};
use crate::parser::ParsedCommand;

const HELP: &[&str] = &[
    "Commands:",
    "  north, south, east, west, up, down, in, out (or n, s, e, w, u, d)",
    "  look, examine <thing>, read <thing>, inventory (i)",
    "  take <thing>, drop <thing>, put <thing> in <container>",
    "  open, close, unlock <thing> with <key>, lock",
    "  turn on <lamp>, turn off <lamp>, light <thing> with <flame>",
    "  attack <creature> with <weapon>, give <thing> to <creature>, say <word>",
    "  move, push, turn, tie, untie, raise, lower, ring, wave, wind, fill, pour, dig, pray, jump",
    "  eat, drink, break, burn, climb, wait (z)",
    "  score, diagnose, verbose, brief, version, again (g)",
    "  save [slot], restore [slot], restart, quit",
];

pub(crate) fn score(world: &World) -> ActionResult {
    let player = &world.player;
    let mut result = ActionResult::free(format!(
        "Your score is {} (total of {} points), in {} moves.",
        player.score, world.meta.max_score, player.moves
    ));
    result.push(format!(
        "This gives you the rank of {}.",
        world.meta.rank_for(player.score)
    ));
    result
}

pub(super) fn diagnose(world: &World) -> ActionResult {
    let player = &world.player;
    let mut result = if player.health >= player.max_health {
        ActionResult::free("You are in perfect health.")
    } else {
        ActionResult::free(format!(
            "You have {} of {} hit points left.",
            player.health.max(0),
            player.max_health
        ))
    };
    match player.deaths {
        0 => {}
        1 => result.push("You have been killed once."),
        2 => result.push("You have been killed twice."),
        n => result.push(format!("You have been killed {n} times.")),
    }
    result
}

pub(super) fn verbosity(world: &mut World, verbose: bool) -> ActionResult {
    world.player.verbose = verbose;
    if verbose {
        ActionResult::free("Maximum verbosity.")
    } else {
        ActionResult::free("Brief descriptions.")
    }
}

pub(super) fn help() -> ActionResult {
    let mut result = ActionResult::default();
    result.text = HELP.iter().map(|line| line.to_string()).collect();
    result
}

pub(super) fn version(world: &World) -> ActionResult {
    let mut result = ActionResult::free(world.meta.name.clone());
    result.push(format!("Undercroft release {}", env!("CARGO_PKG_VERSION")));
    result
}

/// Puzzle verbs with no hook to drive them.
pub(super) fn no_effect(cmd: &ParsedCommand, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let target = cmd
        .direct
        .as_ref()
        .map(|entity| label(ctx.world, entity))
        .unwrap_or_default();
    let refuse = |text: String| -> Result<ActionResult, ActionError> {
        Err(PreconditionError::Refused(text).into())
    };
    match cmd.verb {
        VerbType::Pray => Ok(ActionResult::turn(
            "If you pray enough, your prayers may be answered.",
        )),
        VerbType::Jump => Ok(ActionResult::turn("Wheeeeeeeeee!!!!!")),
        VerbType::Dig => refuse("The ground is too hard for digging here.".to_string()),
        VerbType::Tie => refuse(format!("You can't tie the {target} to anything.")),
        VerbType::Untie => refuse(format!("The {target} isn't tied to anything.")),
        VerbType::Fill => refuse("There is nothing to fill it with here.".to_string()),
        VerbType::Pour => refuse(format!("You can't pour the {target}.")),
        VerbType::Raise => refuse("You can't raise that.".to_string()),
        VerbType::Lower => refuse("You can't lower that.".to_string()),
        VerbType::Move | VerbType::Push if matches!(cmd.direct, Some(EntityRef::Object(_))) => {
            refuse(format!("Moving the {target} reveals nothing."))
        }
        _ => Err(PreconditionError::Nothing.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing;

    #[test]
    fn score_reports_rank_and_moves() {
        let mut world = testing::world();
        world.player.score = 4;
        world.player.moves = 12;
        let result = score(&world);
        assert_eq!(result.turn_cost, 0);
        assert_eq!(result.text[0], "Your score is 4 (total of 10 points), in 12 moves.");
        assert_eq!(result.text[1], "This gives you the rank of Beginner.");
    }

    #[test]
    fn diagnose_counts_deaths() {
        let mut world = testing::world();
        world.player.health = 3;
        world.player.deaths = 2;
        let result = diagnose(&world);
        assert_eq!(
            result.text,
            vec!["You have 3 of 10 hit points left.", "You have been killed twice."]
        );
    }

    #[test]
    fn version_names_the_world() {
        let world = testing::world();
        let result = version(&world);
        assert_eq!(result.turn_cost, 0);
        assert_eq!(result.text[0], "Test");
        assert!(result.text[1].starts_with("Undercroft release "));
    }

    #[test]
    fn verbosity_is_free() {
        let mut world = testing::world();
        assert_eq!(verbosity(&mut world, false).turn_cost, 0);
        assert!(!world.player.verbose);
    }
}
