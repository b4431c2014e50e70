use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::actor::Actor;
use crate::entity::{ActorId, Location, ObjectId, RoomId};
use crate::error::{CoreError, CoreResult};
use crate::flags::{ObjectFlag, RoomFlag, WorldFlag};
use crate::hook::{Effect, Placement, Requirement};
use crate::object::GameObject;
use crate::player::PlayerState;
use crate::room::{GuardCondition, Room};

/// Metadata about the world itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldMeta {
    /// Title of the world.
    pub name: String,
    /// Text printed before the first room description.
    #[serde(default)]
    pub intro: String,
    /// Where the player starts and respawns.
    pub start_room: RoomId,
    /// The container that scores treasures.
    pub trophy_case: ObjectId,
    /// The fuel-limited lamp.
    pub lamp: ObjectId,
    /// Where treasures go when the player dies.
    pub underworld: RoomId,
    /// Highest reachable score.
    pub max_score: i32,
    /// Rank titles, any order.
    #[serde(default)]
    pub ranks: Vec<Rank>,
}

/// A title awarded at a score threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    /// Minimum score for the title.
    pub threshold: i32,
    /// The title.
    pub title: String,
}

impl WorldMeta {
    /// The best rank the score reaches, or "Beginner" with no table.
    pub fn rank_for(&self, score: i32) -> &str {
        self.ranks
            .iter()
            .filter(|r| score >= r.threshold)
            .max_by_key(|r| r.threshold)
            .map(|r| r.title.as_str())
            .unwrap_or("Beginner")
    }
}

/// What the player can see and refer to this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// The player's room.
    pub room: RoomId,
    /// Whether the room is lit.
    pub lit: bool,
    /// Carried objects, including visible container contents.
    pub held: Vec<ObjectId>,
    /// Objects in the room, including visible container contents.
    pub present: Vec<ObjectId>,
    /// Actors in the room.
    pub actors: Vec<ActorId>,
}

impl Scope {
    /// Every object in scope, held first.
    pub fn objects(&self) -> impl Iterator<Item = &ObjectId> {
        self.held.iter().chain(self.present.iter())
    }

    /// Whether the object is in scope.
    pub fn contains_object(&self, id: &ObjectId) -> bool {
        self.objects().any(|o| o == id)
    }

    /// Whether the actor is in scope.
    pub fn contains_actor(&self, id: &ActorId) -> bool {
        self.actors.contains(id)
    }
}

/// The central world model. Owns every room, object, and actor, plus the
/// player's state.
///
/// Object locations are a single edge per object. An index from location to
/// contents is kept alongside and updated only by [`World::move_object`].
#[derive(Debug, Clone)]
pub struct World {
    /// World metadata.
    pub meta: WorldMeta,
    /// The player.
    pub player: PlayerState,
    rooms: BTreeMap<RoomId, Room>,
    objects: BTreeMap<ObjectId, GameObject>,
    actors: BTreeMap<ActorId, Actor>,

    // Index
    contents: BTreeMap<Location, BTreeSet<ObjectId>>,
}

impl World {
    /// Create an empty world.
    pub fn new(meta: WorldMeta, player: PlayerState) -> Self {
        Self {
            meta,
            player,
            rooms: BTreeMap::new(),
            objects: BTreeMap::new(),
            actors: BTreeMap::new(),
            contents: BTreeMap::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Add a room.
    pub fn add_room(&mut self, room: Room) -> CoreResult<()> {
        if self.rooms.contains_key(&room.id) {
            return Err(CoreError::DuplicateId(room.id.to_string()));
        }
        self.rooms.insert(room.id.clone(), room);
        Ok(())
    }

    /// Add an object at the location it already names.
    pub fn add_object(&mut self, object: GameObject) -> CoreResult<()> {
        if self.objects.contains_key(&object.id) {
            return Err(CoreError::DuplicateId(object.id.to_string()));
        }
        self.contents
            .entry(object.location.clone())
            .or_default()
            .insert(object.id.clone());
        self.objects.insert(object.id.clone(), object);
        Ok(())
    }

    /// Add an actor.
    pub fn add_actor(&mut self, actor: Actor) -> CoreResult<()> {
        if self.actors.contains_key(&actor.id) {
            return Err(CoreError::DuplicateId(actor.id.to_string()));
        }
        self.actors.insert(actor.id.clone(), actor);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Get a room by id.
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Get an object by id.
    pub fn object(&self, id: &ObjectId) -> Option<&GameObject> {
        self.objects.get(id)
    }

    /// Get an actor by id.
    pub fn actor(&self, id: &ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    /// Mutable access to an actor's combat and social state.
    ///
    /// Use [`World::move_actor`] to change where the actor is.
    pub fn actor_mut(&mut self, id: &ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id)
    }

    /// Get a room, or an error naming it.
    pub fn require_room(&self, id: &RoomId) -> CoreResult<&Room> {
        self.rooms
            .get(id)
            .ok_or_else(|| CoreError::RoomNotFound(id.clone()))
    }

    /// Get an object, or an error naming it.
    pub fn require_object(&self, id: &ObjectId) -> CoreResult<&GameObject> {
        self.objects
            .get(id)
            .ok_or_else(|| CoreError::ObjectNotFound(id.clone()))
    }

    /// Get an actor, or an error naming it.
    pub fn require_actor(&self, id: &ActorId) -> CoreResult<&Actor> {
        self.actors
            .get(id)
            .ok_or_else(|| CoreError::ActorNotFound(id.clone()))
    }

    /// Iterate all rooms in id order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Iterate all objects in id order.
    pub fn objects(&self) -> impl Iterator<Item = &GameObject> {
        self.objects.values()
    }

    /// Iterate all actors in id order.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Objects directly at a location, in id order.
    pub fn contents(&self, loc: &Location) -> impl Iterator<Item = &ObjectId> {
        self.contents.get(loc).into_iter().flatten()
    }

    /// The player's current room.
    pub fn current_room(&self) -> CoreResult<&Room> {
        self.require_room(&self.player.location)
    }

    /// Actors standing in a room.
    pub fn actors_in(&self, room: &RoomId) -> impl Iterator<Item = &Actor> {
        self.actors
            .values()
            .filter(move |a| a.location.as_ref() == Some(room))
    }

    // -----------------------------------------------------------------------
    // Mutators
    // -----------------------------------------------------------------------

    /// Move an object. The old edge is dropped and the new one set in one
    /// step; a move that would put an object inside itself is refused.
    pub fn move_object(&mut self, id: &ObjectId, to: Location) -> CoreResult<()> {
        let from = self.require_object(id)?.location.clone();
        self.check_destination(id, &to)?;

        if let Some(set) = self.contents.get_mut(&from) {
            set.remove(id);
            if set.is_empty() {
                self.contents.remove(&from);
            }
        }
        self.contents.entry(to.clone()).or_default().insert(id.clone());
        if let Some(obj) = self.objects.get_mut(id) {
            obj.location = to;
        }
        Ok(())
    }

    fn check_destination(&self, id: &ObjectId, to: &Location) -> CoreResult<()> {
        match to {
            Location::Room(room) => {
                self.require_room(room)?;
            }
            Location::Actor(actor) => {
                self.require_actor(actor)?;
            }
            Location::Object(container) => {
                self.require_object(container)?;
                if self.encloses(id, container) {
                    return Err(CoreError::InvariantViolation(format!(
                        "{id} cannot go inside {container}: it would contain itself"
                    )));
                }
            }
            Location::Player | Location::Nowhere => {}
        }
        Ok(())
    }

    /// Whether `outer` is `inner` or one of its holders.
    pub fn encloses(&self, outer: &ObjectId, inner: &ObjectId) -> bool {
        let mut current = inner.clone();
        for _ in 0..=self.objects.len() {
            if &current == outer {
                return true;
            }
            match self.objects.get(&current).map(|o| &o.location) {
                Some(Location::Object(parent)) => current = parent.clone(),
                _ => return false,
            }
        }
        true
    }

    /// Move an actor to a room, or out of play.
    pub fn move_actor(&mut self, id: &ActorId, to: Option<RoomId>) -> CoreResult<()> {
        if let Some(room) = &to {
            self.require_room(room)?;
        }
        let actor = self
            .actors
            .get_mut(id)
            .ok_or_else(|| CoreError::ActorNotFound(id.clone()))?;
        actor.location = to;
        Ok(())
    }

    /// Move the player to a room.
    pub fn move_player(&mut self, to: RoomId) -> CoreResult<()> {
        self.require_room(&to)?;
        self.player.location = to;
        Ok(())
    }

    /// Set a world flag.
    pub fn set_flag(&mut self, flag: WorldFlag) {
        self.player.flags.insert(flag);
    }

    /// Clear a world flag.
    pub fn clear_flag(&mut self, flag: WorldFlag) {
        self.player.flags.remove(&flag);
    }

    /// Check a world flag.
    pub fn has_flag(&self, flag: WorldFlag) -> bool {
        self.player.has(flag)
    }

    /// Set a flag on a room.
    pub fn set_room_flag(&mut self, id: &RoomId, flag: RoomFlag) -> CoreResult<()> {
        self.room_mut(id)?.flags.insert(flag);
        Ok(())
    }

    /// Clear a flag on a room.
    pub fn clear_room_flag(&mut self, id: &RoomId, flag: RoomFlag) -> CoreResult<()> {
        self.room_mut(id)?.flags.remove(&flag);
        Ok(())
    }

    /// Replace every flag on a room.
    pub fn replace_room_flags(&mut self, id: &RoomId, flags: BTreeSet<RoomFlag>) -> CoreResult<()> {
        self.room_mut(id)?.flags = flags;
        Ok(())
    }

    /// Set a flag on an object.
    pub fn set_object_flag(&mut self, id: &ObjectId, flag: ObjectFlag) -> CoreResult<()> {
        self.object_mut(id)?.flags.insert(flag);
        Ok(())
    }

    /// Clear a flag on an object.
    pub fn clear_object_flag(&mut self, id: &ObjectId, flag: ObjectFlag) -> CoreResult<()> {
        self.object_mut(id)?.flags.remove(&flag);
        Ok(())
    }

    /// Replace every flag on an object.
    pub fn replace_object_flags(
        &mut self,
        id: &ObjectId,
        flags: BTreeSet<ObjectFlag>,
    ) -> CoreResult<()> {
        self.object_mut(id)?.flags = flags;
        Ok(())
    }

    /// Change an object's point value.
    pub fn set_object_value(&mut self, id: &ObjectId, value: i32) -> CoreResult<()> {
        self.object_mut(id)?.value = value;
        Ok(())
    }

    fn room_mut(&mut self, id: &RoomId) -> CoreResult<&mut Room> {
        self.rooms
            .get_mut(id)
            .ok_or_else(|| CoreError::RoomNotFound(id.clone()))
    }

    fn object_mut(&mut self, id: &ObjectId) -> CoreResult<&mut GameObject> {
        self.objects
            .get_mut(id)
            .ok_or_else(|| CoreError::ObjectNotFound(id.clone()))
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The first non-object holder of an object: a room, the player, an
    /// actor, or nowhere.
    pub fn root_of(&self, id: &ObjectId) -> Location {
        let mut current = id.clone();
        for _ in 0..=self.objects.len() {
            match self.objects.get(&current).map(|o| &o.location) {
                Some(Location::Object(parent)) => current = parent.clone(),
                Some(other) => return other.clone(),
                None => return Location::Nowhere,
            }
        }
        Location::Nowhere
    }

    /// Whether the player carries the object, directly or in a container.
    pub fn is_carried(&self, id: &ObjectId) -> bool {
        self.root_of(id) == Location::Player
    }

    /// Whether a room is lit: it has the `Lit` flag, or a shining object sits
    /// in it, is carried by someone in it, or glows through open or
    /// transparent containers there.
    pub fn is_lit(&self, room: &RoomId) -> bool {
        if self.rooms.get(room).is_some_and(|r| r.has(RoomFlag::Lit)) {
            return true;
        }
        self.objects
            .values()
            .filter(|o| o.is_shining())
            .any(|o| self.light_reaches(&o.id, room))
    }

    fn light_reaches(&self, id: &ObjectId, room: &RoomId) -> bool {
        let mut current = id.clone();
        for _ in 0..=self.objects.len() {
            let Some(obj) = self.objects.get(&current) else {
                return false;
            };
            match &obj.location {
                Location::Room(r) => return r == room,
                Location::Player => return &self.player.location == room,
                Location::Actor(a) => {
                    return self
                        .actors
                        .get(a)
                        .is_some_and(|actor| actor.location.as_ref() == Some(room));
                }
                Location::Nowhere => return false,
                Location::Object(parent) => {
                    if !self.objects.get(parent).is_some_and(|p| p.shows_contents()) {
                        return false;
                    }
                    current = parent.clone();
                }
            }
        }
        false
    }

    /// Whether the player can touch the object from where they stand: it is
    /// carried or in the room, and every container around it is open.
    pub fn is_reachable(&self, id: &ObjectId) -> bool {
        let mut current = id.clone();
        for _ in 0..=self.objects.len() {
            let Some(obj) = self.objects.get(&current) else {
                return false;
            };
            match &obj.location {
                Location::Room(r) => return r == &self.player.location,
                Location::Player => return true,
                Location::Actor(_) | Location::Nowhere => return false,
                Location::Object(parent) => {
                    if !self.objects.get(parent).is_some_and(|p| p.admits_hands()) {
                        return false;
                    }
                    current = parent.clone();
                }
            }
        }
        false
    }

    /// Build the scope for the player's current room. In darkness only
    /// carried things are in scope.
    pub fn scope(&self) -> Scope {
        let room = self.player.location.clone();
        let lit = self.is_lit(&room);
        let mut held = Vec::new();
        self.collect_visible(&Location::Player, &mut held);
        let mut present = Vec::new();
        let mut actors = Vec::new();
        if lit {
            self.collect_visible(&Location::Room(room.clone()), &mut present);
            actors = self.actors_in(&room).map(|a| a.id.clone()).collect();
        }
        Scope {
            room,
            lit,
            held,
            present,
            actors,
        }
    }

    fn collect_visible(&self, loc: &Location, out: &mut Vec<ObjectId>) {
        for id in self.contents(loc) {
            out.push(id.clone());
            if self.objects.get(id).is_some_and(|o| o.shows_contents()) {
                self.collect_visible(&Location::Object(id.clone()), out);
            }
        }
    }

    /// Weight of an object plus everything inside it.
    pub fn weight_of(&self, id: &ObjectId) -> u32 {
        let own = self.objects.get(id).map_or(0, |o| o.weight);
        own + self
            .contents(&Location::Object(id.clone()))
            .map(|inner| self.weight_of(inner))
            .sum::<u32>()
    }

    /// Total weight the player carries.
    pub fn carried_weight(&self) -> u32 {
        self.contents(&Location::Player)
            .map(|id| self.weight_of(id))
            .sum()
    }

    /// Number of items directly in the player's hands.
    pub fn slots_used(&self) -> usize {
        self.contents(&Location::Player).count()
    }

    /// Combined size of an object's direct contents.
    pub fn contents_size(&self, id: &ObjectId) -> u32 {
        self.contents(&Location::Object(id.clone()))
            .filter_map(|inner| self.objects.get(inner))
            .map(|o| o.size)
            .sum()
    }

    /// Whether the guard on an exit currently lets the player through.
    /// `None` means the guarded thing is out of play and the exit does not
    /// exist yet.
    pub fn guard_allows(&self, condition: &GuardCondition) -> Option<bool> {
        match condition {
            GuardCondition::Flag(flag) => Some(self.has_flag(*flag)),
            GuardCondition::ObjectOpen(id) => {
                let obj = self.objects.get(id)?;
                if obj.location == Location::Nowhere {
                    return None;
                }
                Some(obj.has(ObjectFlag::Open))
            }
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Check every structural invariant: references resolve, the location
    /// graph is acyclic, and the contents index agrees with the edges.
    pub fn validate(&self) -> CoreResult<()> {
        self.require_room(&self.meta.start_room)?;
        self.require_room(&self.meta.underworld)?;
        self.require_object(&self.meta.trophy_case)?;
        self.require_object(&self.meta.lamp)?;
        self.require_room(&self.player.location)?;

        for room in self.rooms.values() {
            for (dir, exit) in &room.exits {
                if !self.rooms.contains_key(&exit.to) {
                    return Err(CoreError::InvariantViolation(format!(
                        "exit {} from {} leads to unknown room {}",
                        dir.name(),
                        room.id,
                        exit.to
                    )));
                }
                if let Some(guard) = &exit.guard
                    && let GuardCondition::ObjectOpen(id) = &guard.condition
                {
                    self.require_object(id)?;
                }
            }
            for hook in &room.hooks {
                self.check_hook_refs(&hook.requires, &hook.effects)?;
            }
        }

        for obj in self.objects.values() {
            match &obj.location {
                Location::Room(r) => {
                    self.require_room(r)?;
                }
                Location::Actor(a) => {
                    self.require_actor(a)?;
                }
                Location::Object(parent) => {
                    self.require_object(parent)?;
                    if self.encloses(&obj.id, parent) {
                        return Err(CoreError::InvariantViolation(format!(
                            "{} contains itself",
                            obj.id
                        )));
                    }
                }
                Location::Player | Location::Nowhere => {}
            }
            if let Some(key) = &obj.key {
                self.require_object(key)?;
            }
            for hook in &obj.hooks {
                if let Some(with) = &hook.with {
                    self.require_object(with)?;
                }
                self.check_hook_refs(&hook.requires, &hook.effects)?;
            }
            let indexed = self
                .contents
                .get(&obj.location)
                .is_some_and(|set| set.contains(&obj.id));
            if !indexed {
                return Err(CoreError::InvariantViolation(format!(
                    "{} missing from the contents index",
                    obj.id
                )));
            }
        }

        let indexed_total: usize = self.contents.values().map(BTreeSet::len).sum();
        if indexed_total != self.objects.len() {
            return Err(CoreError::InvariantViolation(
                "contents index out of step with object locations".to_string(),
            ));
        }

        for actor in self.actors.values() {
            if let Some(room) = &actor.location {
                self.require_room(room)?;
            }
            if let Some(hoard) = &actor.hoard {
                self.require_room(hoard)?;
            }
            for id in actor.loot.iter().chain(actor.ward.iter()) {
                self.require_object(id)?;
            }
        }
        Ok(())
    }

    fn check_hook_refs(&self, requires: &[Requirement], effects: &[Effect]) -> CoreResult<()> {
        for req in requires {
            match req {
                Requirement::Holding(id) | Requirement::Hidden(id) => {
                    self.require_object(id)?;
                }
                Requirement::ObjectIn { object, container } => {
                    self.require_object(object)?;
                    self.require_object(container)?;
                }
                Requirement::ObjectHas { object, .. } | Requirement::ObjectLacks { object, .. } => {
                    self.require_object(object)?;
                }
                Requirement::InRoom(room) => {
                    self.require_room(room)?;
                }
                Requirement::InAnyRoom(rooms) => {
                    for room in rooms {
                        self.require_room(room)?;
                    }
                }
                Requirement::ActorPresent(actor) => {
                    self.require_actor(actor)?;
                }
                Requirement::Flag(_) | Requirement::NotFlag(_) | Requirement::RoomHas(_) => {}
            }
        }
        for effect in effects {
            match effect {
                Effect::Reveal { object, to } | Effect::Relocate { object, to } => {
                    self.require_object(object)?;
                    match to {
                        Placement::Room(room) => {
                            self.require_room(room)?;
                        }
                        Placement::Inside(container) => {
                            self.require_object(container)?;
                        }
                        Placement::Here | Placement::Player => {}
                    }
                }
                Effect::Remove(object)
                | Effect::SetObjectFlag { object, .. }
                | Effect::ClearObjectFlag { object, .. }
                | Effect::SetValue { object, .. } => {
                    self.require_object(object)?;
                }
                Effect::SetRoomFlag { room, .. } | Effect::ClearRoomFlag { room, .. } => {
                    self.require_room(room)?;
                }
                Effect::Banish(actor) => {
                    self.require_actor(actor)?;
                }
                Effect::SetFlag(_) | Effect::ClearFlag(_) | Effect::Kill(_) | Effect::Award(_) => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    fn meta() -> WorldMeta {
        WorldMeta {
            name: "Test".to_string(),
            intro: String::new(),
            start_room: RoomId::new("field"),
            trophy_case: ObjectId::new("case"),
            lamp: ObjectId::new("lamp"),
            underworld: RoomId::new("cave"),
            max_score: 10,
            ranks: vec![
                Rank {
                    threshold: 0,
                    title: "Beginner".to_string(),
                },
                Rank {
                    threshold: 10,
                    title: "Master".to_string(),
                },
            ],
        }
    }

    fn test_world() -> World {
        let mut world = World::new(meta(), PlayerState::new(RoomId::new("field")));
        world
            .add_room(
                Room::new("field", "Field")
                    .with_flag(RoomFlag::Lit)
                    .with_exit(Direction::Down, "cave"),
            )
            .unwrap();
        world
            .add_room(Room::new("cave", "Cave").with_exit(Direction::Up, "field"))
            .unwrap();
        world
            .add_object(
                GameObject::new("case", "case", Location::room("field"))
                    .with_flag(ObjectFlag::Container)
                    .with_flag(ObjectFlag::Open)
                    .with_capacity(20),
            )
            .unwrap();
        world
            .add_object(
                GameObject::new("lamp", "lamp", Location::room("field"))
                    .with_flag(ObjectFlag::Takeable)
                    .with_flag(ObjectFlag::LightSource)
                    .with_bulk(3, 3),
            )
            .unwrap();
        world
            .add_object(
                GameObject::new("sack", "sack", Location::Player)
                    .with_flag(ObjectFlag::Takeable)
                    .with_flag(ObjectFlag::Container)
                    .with_capacity(5)
                    .with_bulk(1, 2),
            )
            .unwrap();
        world
            .add_object(
                GameObject::new("coin", "coin", Location::inside("sack"))
                    .with_flag(ObjectFlag::Takeable)
                    .with_bulk(2, 1),
            )
            .unwrap();
        world
    }

    #[test]
    fn test_world_validates() {
        test_world().validate().unwrap();
    }

    #[test]
    fn move_object_updates_index() {
        let mut world = test_world();
        let lamp = ObjectId::new("lamp");
        world.move_object(&lamp, Location::Player).unwrap();
        assert!(world.contents(&Location::Player).any(|id| id == &lamp));
        assert!(!world.contents(&Location::room("field")).any(|id| id == &lamp));
        world.validate().unwrap();
    }

    #[test]
    fn move_object_refuses_cycles() {
        let mut world = test_world();
        let sack = ObjectId::new("sack");
        let err = world
            .move_object(&sack, Location::inside("coin"))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvariantViolation(_)));
        let err = world.move_object(&sack, Location::inside("sack")).unwrap_err();
        assert!(matches!(err, CoreError::InvariantViolation(_)));
        // Nothing moved.
        assert_eq!(world.object(&sack).unwrap().location, Location::Player);
    }

    #[test]
    fn move_object_to_unknown_room_fails() {
        let mut world = test_world();
        let err = world
            .move_object(&ObjectId::new("lamp"), Location::room("nowhere_land"))
            .unwrap_err();
        assert_eq!(err, CoreError::RoomNotFound(RoomId::new("nowhere_land")));
    }

    #[test]
    fn dark_room_lit_by_carried_lamp() {
        let mut world = test_world();
        let cave = RoomId::new("cave");
        let lamp = ObjectId::new("lamp");
        assert!(!world.is_lit(&cave));

        world.move_object(&lamp, Location::Player).unwrap();
        world.set_object_flag(&lamp, ObjectFlag::Lit).unwrap();
        world.move_player(cave.clone()).unwrap();
        assert!(world.is_lit(&cave));

        // Inside a closed sack the light is hidden.
        world.move_object(&lamp, Location::inside("sack")).unwrap();
        world
            .clear_object_flag(&ObjectId::new("sack"), ObjectFlag::Open)
            .unwrap();
        assert!(!world.is_lit(&cave));
    }

    #[test]
    fn reachability_through_containers() {
        let mut world = test_world();
        let coin = ObjectId::new("coin");
        let sack = ObjectId::new("sack");
        assert!(!world.is_reachable(&coin));
        world.set_object_flag(&sack, ObjectFlag::Open).unwrap();
        assert!(world.is_reachable(&coin));
        world.move_object(&sack, Location::room("cave")).unwrap();
        assert!(!world.is_reachable(&coin));
    }

    #[test]
    fn weight_counts_contents() {
        let world = test_world();
        assert_eq!(world.weight_of(&ObjectId::new("sack")), 3);
        assert_eq!(world.carried_weight(), 3);
        assert_eq!(world.slots_used(), 1);
        assert_eq!(world.contents_size(&ObjectId::new("sack")), 1);
    }

    #[test]
    fn scope_hides_room_in_darkness() {
        let mut world = test_world();
        world.move_player(RoomId::new("cave")).unwrap();
        world
            .move_object(&ObjectId::new("case"), Location::room("cave"))
            .unwrap();
        let scope = world.scope();
        assert!(!scope.lit);
        assert!(scope.present.is_empty());
        assert_eq!(scope.held, vec![ObjectId::new("sack")]);
    }

    #[test]
    fn guard_on_hidden_object_means_no_exit() {
        let mut world = test_world();
        world
            .add_object(
                GameObject::new("trap_door", "door", Location::Nowhere)
                    .with_flag(ObjectFlag::Door),
            )
            .unwrap();
        let cond = GuardCondition::ObjectOpen(ObjectId::new("trap_door"));
        assert_eq!(world.guard_allows(&cond), None);
        world
            .move_object(&ObjectId::new("trap_door"), Location::room("field"))
            .unwrap();
        assert_eq!(world.guard_allows(&cond), Some(false));
        world
            .set_object_flag(&ObjectId::new("trap_door"), ObjectFlag::Open)
            .unwrap();
        assert_eq!(world.guard_allows(&cond), Some(true));
    }

    #[test]
    fn validate_catches_dangling_exit() {
        let mut world = test_world();
        world
            .add_room(Room::new("attic", "Attic").with_exit(Direction::Down, "basement"))
            .unwrap();
        assert!(matches!(
            world.validate(),
            Err(CoreError::InvariantViolation(_))
        ));
    }

    #[test]
    fn rank_lookup() {
        let world = test_world();
        assert_eq!(world.meta.rank_for(3), "Beginner");
        assert_eq!(world.meta.rank_for(10), "Master");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        const OBJECTS: [&str; 4] = ["case", "lamp", "sack", "coin"];

        fn destination(i: usize) -> Location {
            match i {
                0 => Location::room("field"),
                1 => Location::room("cave"),
                2 => Location::Player,
                3 => Location::Nowhere,
                n => Location::inside(OBJECTS[(n - 4) % OBJECTS.len()]),
            }
        }

        proptest! {
            #[test]
            fn random_moves_keep_graph_acyclic(
                moves in proptest::collection::vec((0usize..4, 0usize..8), 0..40)
            ) {
                let mut world = test_world();
                for (obj, dest) in moves {
                    // Refused moves must leave the world untouched.
                    let _ = world.move_object(&ObjectId::new(OBJECTS[obj]), destination(dest));
                    prop_assert!(world.validate().is_ok());
                }
            }
        }
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut world = test_world();
        let err = world.add_room(Room::new("cave", "Cave again")).unwrap_err();
        assert_eq!(err, CoreError::DuplicateId("cave".to_string()));
    }
}
