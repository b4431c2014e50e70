use uc_core::{ActorId, Direction, EntityRef, ObjectId, VerbType};

/// A fully resolved player command. Built once per input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// What to do.
    pub verb: VerbType,
    /// The thing acted on.
    pub direct: Option<EntityRef>,
    /// The instrument or destination.
    pub indirect: Option<EntityRef>,
    /// The preposition linking direct and indirect ("in", "with").
    pub preposition: Option<String>,
    /// Where to go, for movement verbs.
    pub direction: Option<Direction>,
    /// A free word: the thing said, or a save slot name.
    pub literal: Option<String>,
    /// Tokens after article stripping, for diagnostics.
    pub tokens: Vec<String>,
}

impl ParsedCommand {
    /// A bare command with no objects.
    pub fn new(verb: VerbType) -> Self {
        Self {
            verb,
            direct: None,
            indirect: None,
            preposition: None,
            direction: None,
            literal: None,
            tokens: Vec::new(),
        }
    }

    /// Movement in a direction.
    pub fn go(direction: Direction) -> Self {
        let mut cmd = Self::new(VerbType::Go);
        cmd.direction = Some(direction);
        cmd
    }

    /// The direct object, if it is an object.
    pub fn direct_object(&self) -> Option<&ObjectId> {
        self.direct.as_ref().and_then(EntityRef::object)
    }

    /// The direct object, if it is an actor.
    pub fn direct_actor(&self) -> Option<&ActorId> {
        self.direct.as_ref().and_then(EntityRef::actor)
    }

    /// The indirect object, if it is an object.
    pub fn indirect_object(&self) -> Option<&ObjectId> {
        self.indirect.as_ref().and_then(EntityRef::object)
    }

    /// The indirect object, if it is an actor.
    pub fn indirect_actor(&self) -> Option<&ActorId> {
        self.indirect.as_ref().and_then(EntityRef::actor)
    }
}
