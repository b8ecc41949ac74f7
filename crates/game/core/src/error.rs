//! Error types for the entity model.
//!
//! Decision cores never see these: an unreachable room or a missing target is
//! a behavior `Failure`, not an error. These errors come from building or
//! wiring a dungeon incorrectly.

use crate::state::RoomId;

/// Structural errors raised while assembling a [`crate::Dungeon`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DungeonError {
    #[error("room {0} does not exist")]
    UnknownRoom(RoomId),

    #[error("room {0} cannot be connected to itself")]
    SelfConnection(RoomId),

    #[error("room {0} already exists")]
    DuplicateRoom(RoomId),
}
