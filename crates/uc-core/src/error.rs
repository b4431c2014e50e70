use crate::entity::{ActorId, ObjectId, RoomId};

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating a world.
///
/// None of these should reach a player: every variant means a handler or a
/// content file broke an invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The requested room does not exist in the world.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// The requested object does not exist in the world.
    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),

    /// The requested actor does not exist in the world.
    #[error("actor not found: {0}")]
    ActorNotFound(ActorId),

    /// An entity with the same id already exists.
    #[error("duplicate id: \"{0}\"")]
    DuplicateId(String),

    /// A mutation would have left the world inconsistent.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
