//! The Undercroft game engine.
//!
//! Turns a line of player input into world changes. A turn is:
//! parse against the current scope, resolve the verb against the world,
//! then advance every autonomous system (lamp, actors, darkness, recovery)
//! once. [`GameSession`] owns the state and runs that loop; the modules
//! below are usable on their own for tests and tools.

/// Verb handlers and the content hook interpreter.
pub mod actions;
/// Hit chance and damage rolls.
pub mod combat;
/// Tuning knobs for a game.
pub mod config;
/// Player death and resurrection.
pub mod death;
/// Error types for the engine.
pub mod error;
/// Room and inventory text.
pub mod narration;
/// Free text to [`parser::ParsedCommand`].
pub mod parser;
/// Snapshots and save slots.
pub mod persistence;
/// The seeded random source.
pub mod rng;
/// One game in progress.
pub mod session;
/// Autonomous per-turn systems.
pub mod turn;

pub use actions::{ActionContext, ActionResult, resolve};
pub use config::EngineConfig;
pub use error::{ActionError, EngineError, EngineResult, ParseError, PreconditionError};
pub use parser::{ParsedCommand, parse};
pub use persistence::{RestoreError, SCHEMA_VERSION, SlotStore, Snapshot};
pub use rng::GameRng;
pub use session::{GameSession, TurnOutput};
pub use turn::{TurnEngine, TurnEvent, TurnEventKind, TurnSystem};
