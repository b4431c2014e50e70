//! Interactive game session management.

use uc_core::{LifeState, RoomFlag, VerbType, World};

use crate::actions::{self, ActionContext, ActionResult};
use crate::config::EngineConfig;
use crate::death;
use crate::error::{ActionError, EngineResult, ParseError};
use crate::narration;
use crate::parser::{self, DEFAULT_SLOT, ParsedCommand};
use crate::persistence::{RestoreError, SlotStore, Snapshot};
use crate::rng::GameRng;
use crate::turn::{TurnEngine, TurnEvent};

const GAME_OVER: &str = "The game is over. You can RESTART, RESTORE a saved game, or QUIT.";

/// What one line of input produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnOutput {
    /// Text for the player, in order.
    pub lines: Vec<String>,
    /// Net change in score, including death penalties.
    pub score_delta: i32,
    /// Turns consumed.
    pub turn_cost: u32,
    /// Everything the turn systems did.
    pub events: Vec<TurnEvent>,
}

impl TurnOutput {
    fn say(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            ..Self::default()
        }
    }

    fn from_lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }
}

/// A question the parser asked, waiting for a one-word answer.
#[derive(Debug, Clone)]
struct Pending {
    /// The normalized command that was ambiguous.
    input: String,
    /// The phrase that needs a qualifier.
    phrase: String,
}

/// A game in progress.
///
/// Owns the world, the random stream, the turn systems and an optional save
/// directory. Each call to [`GameSession::process`] runs exactly one command.
#[derive(Debug)]
pub struct GameSession {
    world: World,
    pristine: World,
    rng: GameRng,
    config: EngineConfig,
    engine: TurnEngine,
    slots: Option<SlotStore>,
    last_input: Option<String>,
    pending: Option<Pending>,
    finished: bool,
}

impl GameSession {
    /// Start a game in `world` with the default turn systems.
    pub fn new(mut world: World, config: EngineConfig) -> Self {
        world.player.carry = config.carry;
        world.player.lamp_fuel = config.lamp_fuel;
        world.player.health = config.player_health;
        world.player.max_health = config.player_health;
        let pristine = world.clone();
        Self {
            world,
            pristine,
            rng: GameRng::new(config.seed),
            config,
            engine: TurnEngine::default(),
            slots: None,
            last_input: None,
            pending: None,
            finished: false,
        }
    }

    /// Builder: enable `save` and `restore` against a slot directory.
    pub fn with_slots(mut self, slots: SlotStore) -> Self {
        self.slots = Some(slots);
        self
    }

    /// Builder: replace the turn systems.
    pub fn with_engine(mut self, engine: TurnEngine) -> Self {
        self.engine = engine;
        self
    }

    /// The current world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world, for tests and tools.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The configuration this game runs with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether the player has quit.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The intro and the first room. Marks the start room visited.
    pub fn opening(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.world.meta.intro.is_empty() {
            lines.push(self.world.meta.intro.clone());
            lines.push(String::new());
        }
        lines.extend(narration::describe_room(&self.world, true));
        let here = self.world.player.location.clone();
        if self.world.is_lit(&here)
            && let Err(e) = self.world.set_room_flag(&here, RoomFlag::Visited)
        {
            tracing::warn!(room = %here, error = %e, "could not mark start room visited");
        }
        lines
    }

    /// Run one line of input.
    pub fn process(&mut self, input: &str) -> EngineResult<TurnOutput> {
        let line = self.answer_pending(input);
        let scope = self.world.scope();
        let cmd = match parser::parse(&line, &scope, &self.world) {
            Ok(cmd) => cmd,
            Err(err) => {
                if let ParseError::Ambiguous { phrase, .. } = &err {
                    self.pending = Some(Pending {
                        input: normalize(&line),
                        phrase: phrase.clone(),
                    });
                }
                tracing::debug!(input = %line, error = %err, "parse failed");
                return Ok(TurnOutput::say(err.to_string()));
            }
        };

        if cmd.verb == VerbType::Again {
            return match self.last_input.clone() {
                Some(previous) => self.process(&previous),
                None => Ok(TurnOutput::say("You haven't done anything yet.")),
            };
        }
        self.last_input = Some(line);
        self.execute(&cmd)
    }

    /// Run an already-parsed command.
    pub fn execute(&mut self, cmd: &ParsedCommand) -> EngineResult<TurnOutput> {
        tracing::debug!(verb = cmd.verb.name(), moves = self.world.player.moves, "command");
        if self.world.player.status == LifeState::GameOver {
            return self.after_game_over(cmd);
        }

        let slot = cmd.literal.as_deref().unwrap_or(DEFAULT_SLOT);
        match cmd.verb {
            VerbType::Save => return Ok(self.do_save(slot)),
            VerbType::Restore => return Ok(self.do_restore(slot)),
            VerbType::Restart => return Ok(self.do_restart()),
            VerbType::Quit => return Ok(self.do_quit()),
            _ => {}
        }

        let lamp_was_lit = self.lamp_lit();
        let score_before = self.world.player.score;
        let mut ctx = ActionContext {
            world: &mut self.world,
            config: &self.config,
            rng: &mut self.rng,
        };
        let result = match actions::resolve(cmd, &mut ctx) {
            Ok(result) => result,
            Err(ActionError::Precondition(refusal)) => ActionResult::turn(refusal.to_string()),
            Err(ActionError::Internal(e)) => return Err(e.into()),
        };

        let turn_cost = result.turn_cost;
        let mut output = TurnOutput {
            lines: result.text,
            turn_cost,
            ..TurnOutput::default()
        };

        if let Some(cause) = &result.fatal {
            let death = death::perish(&mut self.world, &mut self.rng, &self.config, cause)?;
            output.lines.extend(death.lines);
        }

        self.world.player.moves += turn_cost;
        let alive = result.fatal.is_none() && !self.world.player.is_over();
        if turn_cost > 0 && alive {
            let events =
                self.engine
                    .advance(&mut self.world, &mut self.rng, &self.config, lamp_was_lit)?;
            for event in &events {
                if !event.text.is_empty() {
                    output.lines.extend(event.text.lines().map(str::to_string));
                }
            }
            output.events = events;
        }
        output.score_delta = self.world.player.score - score_before;
        Ok(output)
    }

    /// Once the game is over only restarting, restoring, quitting and
    /// read-only questions are answered. Nothing here touches the world.
    fn after_game_over(&mut self, cmd: &ParsedCommand) -> EngineResult<TurnOutput> {
        let slot = cmd.literal.as_deref().unwrap_or(DEFAULT_SLOT);
        match cmd.verb {
            VerbType::Restore => Ok(self.do_restore(slot)),
            VerbType::Restart => Ok(self.do_restart()),
            VerbType::Quit => Ok(self.do_quit()),
            _ => match actions::inspect(cmd, &self.world) {
                Some(Ok(result)) => Ok(TurnOutput::from_lines(result.text)),
                Some(Err(ActionError::Precondition(refusal))) => {
                    Ok(TurnOutput::say(refusal.to_string()))
                }
                Some(Err(ActionError::Internal(e))) => Err(e.into()),
                None => Ok(TurnOutput::say(GAME_OVER)),
            },
        }
    }

    /// Save to a named slot. The random stream is reseeded so the saved and
    /// continuing games draw the same numbers.
    pub fn save_slot(&mut self, slot: &str) -> EngineResult<()> {
        let store = self.store()?;
        let seed = self.rng.reseed();
        let snapshot = Snapshot::capture(&self.world, seed);
        store.save(slot, &snapshot)?;
        Ok(())
    }

    /// Restore a named slot. On failure the current game is untouched.
    pub fn restore_slot(&mut self, slot: &str) -> EngineResult<()> {
        let store = self.store()?;
        let snapshot = store.load(slot)?;
        self.world = snapshot.apply(&self.pristine)?;
        self.rng = GameRng::new(snapshot.rng_seed);
        self.pending = None;
        Ok(())
    }

    fn store(&self) -> EngineResult<SlotStore> {
        let Some(store) = &self.slots else {
            let missing = std::io::Error::other("no save directory is configured");
            return Err(RestoreError::Io(missing).into());
        };
        Ok(store.clone())
    }

    fn do_save(&mut self, slot: &str) -> TurnOutput {
        match self.save_slot(slot) {
            Ok(()) => TurnOutput::say("Saved."),
            Err(e) => TurnOutput::say(format!("Save failed: {e}")),
        }
    }

    fn do_restore(&mut self, slot: &str) -> TurnOutput {
        match self.restore_slot(slot) {
            Ok(()) => {
                let mut lines = vec!["Restored.".to_string(), String::new()];
                lines.extend(narration::describe_room(&self.world, true));
                TurnOutput::from_lines(lines)
            }
            Err(e) => TurnOutput::say(format!("Restore failed: {e}")),
        }
    }

    fn do_restart(&mut self) -> TurnOutput {
        self.world = self.pristine.clone();
        self.rng = GameRng::new(self.config.seed);
        self.last_input = None;
        self.pending = None;
        tracing::info!("game restarted");
        let mut lines = vec!["Restarting.".to_string(), String::new()];
        lines.extend(self.opening());
        TurnOutput::from_lines(lines)
    }

    fn do_quit(&mut self) -> TurnOutput {
        self.finished = true;
        let mut output = TurnOutput::from_lines(actions::score_report(&self.world).text);
        output.lines.push("Goodbye.".to_string());
        output
    }

    fn lamp_lit(&self) -> bool {
        self.world
            .object(&self.world.meta.lamp)
            .is_some_and(|o| o.is_shining())
    }

    /// Fold a one-word answer into the question it answers.
    ///
    /// Anything that starts with a verb or a direction is a new command.
    fn answer_pending(&mut self, input: &str) -> String {
        let Some(pending) = self.pending.take() else {
            return input.to_string();
        };
        let reply = normalize(input);
        let starts_command = reply.split(' ').next().is_none_or(|first| {
            first.is_empty() || parser::is_verb(first) || uc_core::Direction::parse(first).is_some()
        });
        if starts_command {
            return input.to_string();
        }
        pending
            .input
            .replacen(&pending.phrase, &format!("{reply} {}", pending.phrase), 1)
    }
}

fn normalize(input: &str) -> String {
    parser::tokenize(input)
        .map(|tokens| tokens.join(" "))
        .unwrap_or_else(|_| input.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing;
    use uc_core::{Location, ObjectId, RoomId};

    fn session() -> GameSession {
        GameSession::new(testing::world(), EngineConfig::peaceful())
    }

    fn text(output: &TurnOutput) -> String {
        output.lines.join("\n")
    }

    #[test]
    fn opening_describes_start_room() {
        let mut game = session();
        let lines = game.opening();
        assert_eq!(lines[0], "Yard");
        assert!(game
            .world()
            .require_room(&RoomId::new("yard"))
            .unwrap()
            .has(RoomFlag::Visited));
    }

    #[test]
    fn parse_errors_cost_nothing() {
        let mut game = session();
        let out = game.process("xyzzy").unwrap();
        insta::assert_snapshot!(text(&out), @r#"I don't know the word "xyzzy"."#);
        assert_eq!(out.turn_cost, 0);
        assert_eq!(game.world().player.moves, 0);
    }

    #[test]
    fn refusals_still_take_a_turn() {
        let mut game = session();
        let out = game.process("west").unwrap();
        assert_eq!(text(&out), "You can't go that way.");
        assert_eq!(game.world().player.moves, 1);
    }

    #[test]
    fn score_is_free() {
        let mut game = session();
        let out = game.process("score").unwrap();
        assert_eq!(out.turn_cost, 0);
        assert_eq!(game.world().player.moves, 0);
    }

    #[test]
    fn again_repeats_the_last_command() {
        let mut game = session();
        assert_eq!(text(&game.process("g").unwrap()), "You haven't done anything yet.");
        game.process("wait").unwrap();
        game.process("again").unwrap();
        assert_eq!(game.world().player.moves, 2);
    }

    #[test]
    fn trophy_points_show_in_score_delta() {
        let mut game = session();
        game.process("take coin").unwrap();
        let out = game.process("put coin in case").unwrap();
        assert_eq!(out.score_delta, 10);
        assert_eq!(game.world().player.score, 10);
    }

    #[test]
    fn game_over_allows_only_a_few_verbs() {
        let mut game = session();
        game.world_mut().player.status = LifeState::GameOver;
        assert_eq!(text(&game.process("take coin").unwrap()), GAME_OVER);
        let look = game.process("look").unwrap();
        assert_eq!(look.turn_cost, 0);
        assert_eq!(game.world().player.moves, 0);
    }

    #[test]
    fn game_over_leaves_verbosity_alone() {
        let mut game = session();
        game.world_mut().player.status = LifeState::GameOver;
        let before = game.world().player.verbose;
        assert_eq!(text(&game.process("brief").unwrap()), GAME_OVER);
        assert_eq!(text(&game.process("verbose").unwrap()), GAME_OVER);
        assert_eq!(game.world().player.verbose, before);
        assert_eq!(
            text(&game.process("read coin").unwrap()),
            "There's nothing written on the gold coin."
        );
    }

    #[test]
    fn restart_resets_the_world() {
        let mut game = session();
        game.process("take coin").unwrap();
        game.world_mut().player.status = LifeState::GameOver;
        game.process("restart").unwrap();
        assert_eq!(
            game.world().object(&ObjectId::new("coin")).unwrap().location,
            Location::room("yard")
        );
        assert!(!game.world().player.is_over());
    }

    #[test]
    fn save_without_a_directory_is_reported() {
        let mut game = session();
        let out = game.process("save").unwrap();
        assert!(text(&out).starts_with("Save failed:"));
    }

    #[test]
    fn save_and_restore_through_slots() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = session().with_slots(SlotStore::new(dir.path()));
        game.process("take coin").unwrap();
        assert_eq!(text(&game.process("save first").unwrap()), "Saved.");
        game.process("drop coin").unwrap();
        let out = game.process("restore first").unwrap();
        assert_eq!(out.lines[0], "Restored.");
        assert!(game.world().is_carried(&ObjectId::new("coin")));
    }

    #[test]
    fn failed_restore_leaves_the_game_alone() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = session().with_slots(SlotStore::new(dir.path()));
        game.process("take coin").unwrap();
        let out = game.process("restore missing").unwrap();
        assert!(text(&out).starts_with("Restore failed:"));
        assert!(game.world().is_carried(&ObjectId::new("coin")));
    }

    #[test]
    fn quit_finishes_with_the_score() {
        let mut game = session();
        let out = game.process("quit").unwrap();
        assert!(game.is_finished());
        assert!(out.lines[0].starts_with("Your score is 0"));
        assert_eq!(out.lines.last().unwrap(), "Goodbye.");
    }
}
