use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create an id from anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// Unique identifier for a room.
    RoomId
);
string_id!(
    /// Unique identifier for a game object.
    ObjectId
);
string_id!(
    /// Unique identifier for an actor.
    ActorId
);

/// Where an object currently is. Exactly one holder at any time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Lying in a room.
    Room(RoomId),
    /// Carried by the player.
    Player,
    /// Carried by an actor.
    Actor(ActorId),
    /// Inside (or on) another object.
    Object(ObjectId),
    /// Out of play: not yet revealed, or consumed.
    Nowhere,
}

impl Location {
    /// Shorthand for a room location.
    pub fn room(id: impl Into<String>) -> Self {
        Location::Room(RoomId::new(id))
    }

    /// Shorthand for an object location.
    pub fn inside(id: impl Into<String>) -> Self {
        Location::Object(ObjectId::new(id))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Room(id) => write!(f, "room {id}"),
            Location::Player => f.write_str("player"),
            Location::Actor(id) => write!(f, "actor {id}"),
            Location::Object(id) => write!(f, "object {id}"),
            Location::Nowhere => f.write_str("nowhere"),
        }
    }
}

/// A resolved noun: either an object or an actor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityRef {
    /// A game object.
    Object(ObjectId),
    /// An actor.
    Actor(ActorId),
}

impl EntityRef {
    /// The object id, if this reference names an object.
    pub fn object(&self) -> Option<&ObjectId> {
        match self {
            EntityRef::Object(id) => Some(id),
            EntityRef::Actor(_) => None,
        }
    }

    /// The actor id, if this reference names an actor.
    pub fn actor(&self) -> Option<&ActorId> {
        match self {
            EntityRef::Actor(id) => Some(id),
            EntityRef::Object(_) => None,
        }
    }
}
