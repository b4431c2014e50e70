//! Snapshots of the mutable game state, and named save slots on disk.
//!
//! A [`Snapshot`] holds only what play can change: locations, flags, point
//! values, actor state, the player and the RNG seed. Static content (names,
//! descriptions, exits, hooks) comes from the base world it is applied to.
//! Restoring never touches the live world; it builds a new one or fails.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uc_core::{
    ActorId, CoreError, Disposition, Engagement, Location, ObjectFlag, ObjectId, PlayerState,
    RoomFlag, RoomId, World,
};

use crate::rng::GameRng;

/// Version written into every snapshot. Anything else is refused.
pub const SCHEMA_VERSION: u64 = 1;

/// Why a snapshot could not be read or applied.
#[derive(Debug, Error)]
pub enum RestoreError {
    /// The text is not valid snapshot JSON.
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// No `schema_version` field.
    #[error("snapshot has no schema version")]
    MissingVersion,

    /// A `schema_version` this build does not understand.
    #[error("unsupported schema version {0} (expected {SCHEMA_VERSION})")]
    UnsupportedVersion(u64),

    /// The snapshot names an entity the world does not have.
    #[error("snapshot refers to unknown id \"{0}\"")]
    UnknownId(String),

    /// The world has an entity the snapshot does not mention.
    #[error("snapshot is missing id \"{0}\"")]
    MissingId(String),

    /// Applying the snapshot would break a world invariant.
    #[error("snapshot is inconsistent: {0}")]
    Invalid(#[from] CoreError),

    /// Reading or writing a save file failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Slot names are limited to lowercase letters, digits, `-` and `_`.
    #[error("invalid save slot name \"{0}\"")]
    InvalidSlot(String),
}

/// Mutable state of one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomState {
    /// All flags, including `Visited`.
    pub flags: BTreeSet<RoomFlag>,
}

/// Mutable state of one object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectState {
    /// Current holder.
    pub location: Location,
    /// All flags.
    pub flags: BTreeSet<ObjectFlag>,
    /// Point value.
    pub value: i32,
}

/// Mutable state of one actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorState {
    /// Current room, `None` once out of play.
    pub location: Option<RoomId>,
    /// Hit points.
    pub health: i32,
    /// Combat and social state.
    pub disposition: Disposition,
    /// Engaged with the player or not.
    pub engagement: Engagement,
    /// Stolen goods, oldest first.
    #[serde(default)]
    pub loot: Vec<ObjectId>,
}

/// Everything that changes during play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Always [`SCHEMA_VERSION`] when written by this build.
    pub schema_version: u64,
    /// The player, in full.
    pub player: PlayerState,
    /// Per-room state.
    pub rooms: BTreeMap<RoomId, RoomState>,
    /// Per-object state.
    pub objects: BTreeMap<ObjectId, ObjectState>,
    /// Per-actor state.
    pub actors: BTreeMap<ActorId, ActorState>,
    /// Seed to continue the random stream from.
    pub rng_seed: u64,
}

impl Snapshot {
    /// Capture the mutable state of `world`.
    pub fn capture(world: &World, rng_seed: u64) -> Self {
        let rooms = world
            .rooms()
            .map(|r| {
                (
                    r.id.clone(),
                    RoomState {
                        flags: r.flags.clone(),
                    },
                )
            })
            .collect();
        let objects = world
            .objects()
            .map(|o| {
                (
                    o.id.clone(),
                    ObjectState {
                        location: o.location.clone(),
                        flags: o.flags.clone(),
                        value: o.value,
                    },
                )
            })
            .collect();
        let actors = world
            .actors()
            .map(|a| {
                (
                    a.id.clone(),
                    ActorState {
                        location: a.location.clone(),
                        health: a.health,
                        disposition: a.disposition,
                        engagement: a.engagement,
                        loot: a.loot.clone(),
                    },
                )
            })
            .collect();
        Self {
            schema_version: SCHEMA_VERSION,
            player: world.player.clone(),
            rooms,
            objects,
            actors,
            rng_seed,
        }
    }

    /// Serialize to pretty, key-ordered JSON.
    pub fn to_json(&self) -> Result<String, RestoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse snapshot JSON, checking the schema version first.
    pub fn from_json(json: &str) -> Result<Self, RestoreError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, RestoreError> {
        match value.get("schema_version") {
            None | Some(serde_json::Value::Null) => return Err(RestoreError::MissingVersion),
            Some(v) => match v.as_u64() {
                Some(SCHEMA_VERSION) => {}
                Some(other) => return Err(RestoreError::UnsupportedVersion(other)),
                None => return Err(RestoreError::MissingVersion),
            },
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Build a new world from `base` with this snapshot's state laid over it.
    ///
    /// The id sets must match `base` exactly. `base` itself is left alone.
    pub fn apply(&self, base: &World) -> Result<World, RestoreError> {
        check_ids(base.rooms().map(|r| &r.id), self.rooms.keys())?;
        check_ids(base.objects().map(|o| &o.id), self.objects.keys())?;
        check_ids(base.actors().map(|a| &a.id), self.actors.keys())?;

        let mut world = base.clone();
        for (id, state) in &self.rooms {
            world.replace_room_flags(id, state.flags.clone())?;
        }
        for (id, state) in &self.actors {
            world.move_actor(id, state.location.clone())?;
            let actor = world
                .actor_mut(id)
                .ok_or_else(|| CoreError::ActorNotFound(id.clone()))?;
            actor.health = state.health;
            actor.disposition = state.disposition;
            actor.engagement = state.engagement;
            actor.loot = state.loot.clone();
        }
        // Park everything first so containment is rebuilt from an empty graph.
        for id in self.objects.keys() {
            world.move_object(id, Location::Nowhere)?;
        }
        for (id, state) in &self.objects {
            world.move_object(id, state.location.clone())?;
            world.replace_object_flags(id, state.flags.clone())?;
            world.set_object_value(id, state.value)?;
        }
        world.player = self.player.clone();
        world.validate()?;
        Ok(world)
    }
}

fn check_ids<'a, T>(
    base: impl Iterator<Item = &'a T>,
    saved: impl Iterator<Item = &'a T>,
) -> Result<(), RestoreError>
where
    T: Ord + std::fmt::Display + 'a,
{
    let base: BTreeSet<&T> = base.collect();
    let saved: BTreeSet<&T> = saved.collect();
    if let Some(extra) = saved.difference(&base).next() {
        return Err(RestoreError::UnknownId(extra.to_string()));
    }
    if let Some(missing) = base.difference(&saved).next() {
        return Err(RestoreError::MissingId(missing.to_string()));
    }
    Ok(())
}

/// Capture `world` together with the RNG's current seed.
pub fn snapshot(world: &World, rng: &GameRng) -> Snapshot {
    Snapshot::capture(world, rng.seed())
}

/// Parse `json` and apply it to `base`, returning the restored world and a
/// random stream positioned where the save left it.
pub fn restore(base: &World, json: &str) -> Result<(World, GameRng), RestoreError> {
    let snapshot = Snapshot::from_json(json)?;
    let world = snapshot.apply(base)?;
    Ok((world, GameRng::new(snapshot.rng_seed)))
}

/// On-disk form of a save: the snapshot plus when it was written.
#[derive(Debug, Serialize, Deserialize)]
struct SaveFile {
    saved_at: DateTime<Utc>,
    snapshot: serde_json::Value,
}

/// A slot as listed by [`SlotStore::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotInfo {
    /// Slot name.
    pub name: String,
    /// When it was last written.
    pub saved_at: DateTime<Utc>,
}

/// One JSON file per named slot in a directory.
#[derive(Debug, Clone)]
pub struct SlotStore {
    dir: PathBuf,
}

impl SlotStore {
    /// A store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, slot: &str) -> Result<PathBuf, RestoreError> {
        let valid = !slot.is_empty()
            && slot
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
        if !valid {
            return Err(RestoreError::InvalidSlot(slot.to_string()));
        }
        Ok(self.dir.join(format!("{slot}.json")))
    }

    /// Write `snapshot` to `slot`, replacing any earlier save there.
    pub fn save(&self, slot: &str, snapshot: &Snapshot) -> Result<PathBuf, RestoreError> {
        let path = self.path_for(slot)?;
        fs::create_dir_all(&self.dir)?;
        let file = SaveFile {
            saved_at: Utc::now(),
            snapshot: serde_json::to_value(snapshot)?,
        };
        fs::write(&path, serde_json::to_string_pretty(&file)?)?;
        tracing::info!(slot, path = %path.display(), "game saved");
        Ok(path)
    }

    /// Read the snapshot in `slot`.
    pub fn load(&self, slot: &str) -> Result<Snapshot, RestoreError> {
        let path = self.path_for(slot)?;
        let text = fs::read_to_string(&path)?;
        let file: SaveFile = serde_json::from_str(&text)?;
        let snapshot = Snapshot::from_value(file.snapshot)?;
        tracing::info!(slot, saved_at = %file.saved_at, "save loaded");
        Ok(snapshot)
    }

    /// Every readable slot, by name.
    pub fn list(&self) -> Result<Vec<SlotInfo>, RestoreError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut slots = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let Ok(text) = fs::read_to_string(&path) else {
                continue;
            };
            match serde_json::from_str::<SaveFile>(&text) {
                Ok(file) => slots.push(SlotInfo {
                    name: name.to_string(),
                    saved_at: file.saved_at,
                }),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping unreadable save"),
            }
        }
        slots.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(slots)
    }
}
