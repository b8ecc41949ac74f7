use std::fmt;

/// Identifier of a room inside a dungeon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomId(pub u32);

impl RoomId {
    /// Conventional entrance identifier used by generated dungeons.
    pub const ENTRANCE: Self = Self(0);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier of an enemy: its room plus its slot in that room.
///
/// Enemies never leave their room and are never removed from it (the dead
/// stay in place), so the slot stays valid for the whole session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyId {
    pub room: RoomId,
    pub slot: u32,
}

impl EnemyId {
    pub const fn new(room: RoomId, slot: u32) -> Self {
        Self { room, slot }
    }
}

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.room, self.slot)
    }
}
