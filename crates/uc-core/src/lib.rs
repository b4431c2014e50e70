//! Core types for Undercroft: rooms, objects, actors, and the world model.
//!
//! This crate is pure data plus the invariant-preserving mutators the engine
//! uses to change it. It knows nothing about parsing or turns; you can build a
//! [`World`] by hand or load one from the content catalog.

/// Non-player characters and their behavior tags.
pub mod actor;
/// Compass and vertical directions.
pub mod direction;
/// Identifiers, locations, and entity references.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Closed flag sets for rooms, objects, and the world.
pub mod flags;
/// Content-defined puzzle rules.
pub mod hook;
/// Portable game objects and scenery.
pub mod object;
/// The player's mutable state.
pub mod player;
/// Rooms and their exits.
pub mod room;
/// The closed verb vocabulary.
pub mod verb;
/// The central world model that owns rooms, objects, and actors.
pub mod world;

/// Re-export actor types.
pub use actor::{Actor, Behavior, Blocking, Cue, Disposition, Engagement};
/// Re-export directions.
pub use direction::Direction;
/// Re-export identifier types.
pub use entity::{ActorId, EntityRef, Location, ObjectId, RoomId};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export flag enums.
pub use flags::{ObjectFlag, RoomFlag, WorldFlag};
/// Re-export hook types.
pub use hook::{Effect, Hook, HookMode, Placement, Requirement};
/// Re-export object types.
pub use object::GameObject;
/// Re-export player state.
pub use player::{CarryLimit, LifeState, PlayerState};
/// Re-export room types.
pub use room::{Exit, Guard, GuardCondition, Room};
/// Re-export the verb enum.
pub use verb::VerbType;
/// Re-export world model types.
pub use world::{Rank, Scope, World, WorldMeta};
