//! Autonomous systems that run once after every turn-costing command.
//!
//! Systems run in registration order: lamp, actors, darkness, recovery. Once
//! the player dies the rest of the turn is skipped.

mod actors;
mod darkness;
mod event;
mod lamp;
mod recovery;

pub use actors::ActorSystem;
pub use darkness::DarknessSystem;
pub use event::{TurnEvent, TurnEventKind};
pub use lamp::LampSystem;
pub use recovery::RecoverySystem;

use uc_core::{CoreResult, World};

use crate::config::EngineConfig;
use crate::death;
use crate::rng::GameRng;

/// A subsystem that runs each turn.
pub trait TurnSystem: std::fmt::Debug {
    /// Human-readable name for this system.
    fn name(&self) -> &str;

    /// Called once per turn.
    fn advance(&mut self, ctx: &mut TurnContext<'_>) -> CoreResult<()>;
}

/// Mutable context passed to each system during a turn.
pub struct TurnContext<'a> {
    /// The world.
    pub world: &'a mut World,
    /// Shared random stream.
    pub rng: &'a mut GameRng,
    /// Tuning.
    pub config: &'a EngineConfig,
    /// Move count after this turn.
    pub turn: u32,
    /// Whether the lamp was lit before the command ran.
    pub lamp_was_lit: bool,
    events: &'a mut Vec<TurnEvent>,
}

impl TurnContext<'_> {
    /// Emit an event at the current turn.
    pub fn emit(&mut self, kind: TurnEventKind, text: impl Into<String>) {
        self.events.push(TurnEvent::new(self.turn, kind, text));
    }

    /// Whether the player died this turn or the game is over.
    pub fn player_down(&self) -> bool {
        self.world.player.is_over()
            || self
                .events
                .iter()
                .any(|e| matches!(e.kind, TurnEventKind::PlayerDied { .. }))
    }

    /// Kill the player and report it.
    pub fn kill_player(&mut self, cause: &str) -> CoreResult<()> {
        let death = death::perish(self.world, self.rng, self.config, cause)?;
        self.emit(
            TurnEventKind::PlayerDied {
                cause: cause.to_string(),
            },
            death.lines.join("\n"),
        );
        if death.game_over {
            self.emit(TurnEventKind::GameOver, "");
        }
        Ok(())
    }
}

/// Runs the registered systems in order.
#[derive(Debug)]
pub struct TurnEngine {
    systems: Vec<Box<dyn TurnSystem>>,
}

impl Default for TurnEngine {
    fn default() -> Self {
        let mut engine = Self::empty();
        engine.add_system(LampSystem);
        engine.add_system(ActorSystem);
        engine.add_system(DarknessSystem);
        engine.add_system(RecoverySystem);
        engine
    }
}

impl TurnEngine {
    /// An engine with no systems.
    pub fn empty() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    /// Register a system. Systems run in registration order.
    pub fn add_system<S: TurnSystem + 'static>(&mut self, system: S) {
        self.systems.push(Box::new(system));
    }

    /// Names of the registered systems, in order.
    pub fn system_names(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.name()).collect()
    }

    /// Run one turn of every system.
    pub fn advance(
        &mut self,
        world: &mut World,
        rng: &mut GameRng,
        config: &EngineConfig,
        lamp_was_lit: bool,
    ) -> CoreResult<Vec<TurnEvent>> {
        let mut events = Vec::new();
        let turn = world.player.moves;
        for system in &mut self.systems {
            let mut ctx = TurnContext {
                world: &mut *world,
                rng: &mut *rng,
                config,
                turn,
                lamp_was_lit,
                events: &mut events,
            };
            if ctx.player_down() {
                break;
            }
            system.advance(&mut ctx)?;
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing;

    #[derive(Debug)]
    struct Counter(u32);

    impl TurnSystem for Counter {
        fn name(&self) -> &str {
            "counter"
        }

        fn advance(&mut self, ctx: &mut TurnContext<'_>) -> CoreResult<()> {
            self.0 += 1;
            ctx.emit(TurnEventKind::LampLow, format!("tick {}", self.0));
            Ok(())
        }
    }

    #[test]
    fn default_order() {
        assert_eq!(
            TurnEngine::default().system_names(),
            vec!["lamp", "actors", "darkness", "recovery"]
        );
    }

    #[test]
    fn custom_system_runs_each_turn() {
        let mut engine = TurnEngine::empty();
        engine.add_system(Counter(0));
        let mut world = testing::world();
        let mut rng = GameRng::new(1);
        let config = EngineConfig::default();
        engine.advance(&mut world, &mut rng, &config, false).unwrap();
        let events = engine.advance(&mut world, &mut rng, &config, false).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].text, "tick 2");
    }

    #[test]
    fn nothing_runs_after_game_over() {
        let mut engine = TurnEngine::empty();
        engine.add_system(Counter(0));
        let mut world = testing::world();
        world.player.status = uc_core::LifeState::GameOver;
        let mut rng = GameRng::new(1);
        let events = engine
            .advance(&mut world, &mut rng, &EngineConfig::default(), false)
            .unwrap();
        assert!(events.is_empty());
    }
}
