//! Static content for Undercroft.
//!
//! The catalog is a JSON document embedded at compile time. It lists rooms,
//! objects, and actors with their initial placement; the loader turns it into
//! a validated [`World`]. Content is data only: the engine never hardcodes
//! narrative text.

use std::path::Path;

use serde::{Deserialize, Serialize};
use uc_core::{Actor, CoreError, GameObject, PlayerState, Room, World, WorldMeta};

/// The built-in catalog.
const GREAT_UNDERGROUND_EMPIRE: &str = include_str!("../data/great_underground_empire.json");

/// Alias for `Result<T, ContentError>`.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors raised while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The catalog is not valid JSON, or does not match the schema.
    #[error("catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog parsed but describes an inconsistent world.
    #[error("catalog is invalid: {0}")]
    Invalid(#[from] CoreError),

    /// The catalog file could not be read.
    #[error("cannot read catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// The on-disk shape of a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// World metadata.
    pub meta: WorldMeta,
    /// Every room.
    pub rooms: Vec<Room>,
    /// Every object, at its starting location.
    pub objects: Vec<GameObject>,
    /// Every actor, at its starting location.
    #[serde(default)]
    pub actors: Vec<Actor>,
}

impl Catalog {
    /// Build and validate a world from the catalog.
    pub fn into_world(self) -> ContentResult<World> {
        let player = PlayerState::new(self.meta.start_room.clone());
        let mut world = World::new(self.meta, player);
        for room in self.rooms {
            world.add_room(room)?;
        }
        for object in self.objects {
            world.add_object(object)?;
        }
        for actor in self.actors {
            world.add_actor(actor)?;
        }
        world.validate()?;
        tracing::debug!(
            rooms = world.room_count(),
            objects = world.objects().count(),
            actors = world.actors().count(),
            "catalog loaded"
        );
        Ok(world)
    }
}

/// Load the built-in Great Underground Empire.
pub fn load() -> ContentResult<World> {
    from_json(GREAT_UNDERGROUND_EMPIRE)
}

/// Load a world from catalog JSON.
pub fn from_json(json: &str) -> ContentResult<World> {
    let catalog: Catalog = serde_json::from_str(json)?;
    catalog.into_world()
}

/// Load a world from a catalog file.
pub fn from_path(path: &Path) -> ContentResult<World> {
    let json = std::fs::read_to_string(path)?;
    from_json(&json)
}
