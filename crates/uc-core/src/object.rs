use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entity::{Location, ObjectId};
use crate::flags::ObjectFlag;
use crate::hook::Hook;

/// Anything the player can refer to that is not a room or an actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameObject {
    /// Unique id.
    pub id: ObjectId,
    /// Head noun the parser matches ("lamp").
    pub name: String,
    /// Other nouns that also match ("lantern").
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Words that may precede the noun ("brass").
    #[serde(default)]
    pub adjectives: Vec<String>,
    /// Short phrase used in lists ("brass lantern").
    pub brief: String,
    /// Text for `examine`.
    #[serde(default)]
    pub examine: String,
    /// Room-listing text used until the object is first moved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<String>,
    /// Text for `read`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_text: Option<String>,
    /// Current holder.
    pub location: Location,
    /// Mutable flags.
    #[serde(default)]
    pub flags: BTreeSet<ObjectFlag>,
    /// Weight toward the carry ceiling.
    #[serde(default)]
    pub weight: u32,
    /// Room taken up inside a container.
    #[serde(default)]
    pub size: u32,
    /// Total size this container holds.
    #[serde(default)]
    pub capacity: u32,
    /// Points for depositing in the trophy case.
    #[serde(default)]
    pub value: i32,
    /// Damage bonus when used as a weapon.
    #[serde(default)]
    pub power: u32,
    /// The object that locks and unlocks this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<ObjectId>,
    /// Puzzle rules triggered with this object as the direct object.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hooks: Vec<Hook>,
}

impl GameObject {
    /// Create an object with no flags at the given location.
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Location) -> Self {
        let name = name.into();
        Self {
            id: ObjectId::new(id),
            brief: name.clone(),
            name,
            synonyms: Vec::new(),
            adjectives: Vec::new(),
            examine: String::new(),
            initial: None,
            read_text: None,
            location,
            flags: BTreeSet::new(),
            weight: 0,
            size: 0,
            capacity: 0,
            value: 0,
            power: 0,
            key: None,
            hooks: Vec::new(),
        }
    }

    /// Check an object flag.
    pub fn has(&self, flag: ObjectFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Builder: add a flag.
    pub fn with_flag(mut self, flag: ObjectFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    /// Builder: set weight and size together.
    pub fn with_bulk(mut self, weight: u32, size: u32) -> Self {
        self.weight = weight;
        self.size = size;
        self
    }

    /// Builder: set capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder: set point value.
    pub fn with_value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    /// Builder: set the brief description.
    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.brief = brief.into();
        self
    }

    /// Whether the contents can be seen from outside.
    pub fn shows_contents(&self) -> bool {
        self.has(ObjectFlag::Container)
            && (self.has(ObjectFlag::Open) || self.has(ObjectFlag::Transparent))
    }

    /// Whether the contents can be touched from outside.
    pub fn admits_hands(&self) -> bool {
        self.has(ObjectFlag::Container) && self.has(ObjectFlag::Open)
    }

    /// Whether the object is giving light right now.
    pub fn is_shining(&self) -> bool {
        self.has(ObjectFlag::LightSource) && self.has(ObjectFlag::Lit)
    }

    /// Every word that can serve as the head noun.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.synonyms.iter().map(String::as_str))
    }
}
