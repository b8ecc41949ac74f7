//! The dungeon graph.

use std::collections::BTreeMap;

use super::{Enemy, EnemyId, Room, RoomId};
use crate::error::DungeonError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dungeon {
    rooms: BTreeMap<RoomId, Room>,
    entrance: Option<RoomId>,
}

impl Dungeon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a room. The first room added becomes the entrance unless one
    /// is set explicitly.
    pub fn add_room(&mut self, room: Room) -> Result<RoomId, DungeonError> {
        let id = room.id;
        if self.rooms.contains_key(&id) {
            return Err(DungeonError::DuplicateRoom(id));
        }
        self.rooms.insert(id, room);
        self.entrance.get_or_insert(id);
        Ok(id)
    }

    /// Connects two rooms in both directions. Connecting twice is a no-op.
    pub fn connect(&mut self, a: RoomId, b: RoomId) -> Result<(), DungeonError> {
        if a == b {
            return Err(DungeonError::SelfConnection(a));
        }
        for id in [a, b] {
            if !self.rooms.contains_key(&id) {
                return Err(DungeonError::UnknownRoom(id));
            }
        }
        for (from, to) in [(a, b), (b, a)] {
            if let Some(room) = self.rooms.get_mut(&from)
                && !room.connections.contains(&to)
            {
                room.connections.push(to);
            }
        }
        Ok(())
    }

    pub fn set_entrance(&mut self, id: RoomId) -> Result<(), DungeonError> {
        if !self.rooms.contains_key(&id) {
            return Err(DungeonError::UnknownRoom(id));
        }
        self.entrance = Some(id);
        Ok(())
    }

    pub fn entrance(&self) -> Option<RoomId> {
        self.entrance
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(&id)
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.rooms.get(&id.room)?.enemy(id)
    }

    pub fn enemy_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        self.rooms.get_mut(&id.room)?.enemy_mut(id)
    }

    /// Rooms in ascending id order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.values()
    }

    pub fn rooms_mut(&mut self) -> impl Iterator<Item = &mut Room> + '_ {
        self.rooms.values_mut()
    }

    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.rooms.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RoomKind;

    fn dungeon_with(ids: &[u32]) -> Dungeon {
        let mut dungeon = Dungeon::new();
        for &id in ids {
            dungeon
                .add_room(Room::new(RoomId(id), RoomKind::Normal))
                .expect("fresh room id");
        }
        dungeon
    }

    #[test]
    fn connect_is_bidirectional_and_idempotent() {
        let mut dungeon = dungeon_with(&[0, 1]);
        dungeon.connect(RoomId(0), RoomId(1)).unwrap();
        dungeon.connect(RoomId(1), RoomId(0)).unwrap();

        assert_eq!(dungeon.room(RoomId(0)).unwrap().connections, vec![RoomId(1)]);
        assert_eq!(dungeon.room(RoomId(1)).unwrap().connections, vec![RoomId(0)]);
    }

    #[test]
    fn structural_errors_are_reported() {
        let mut dungeon = dungeon_with(&[0, 1]);

        assert_eq!(
            dungeon.connect(RoomId(0), RoomId(7)),
            Err(DungeonError::UnknownRoom(RoomId(7)))
        );
        assert_eq!(
            dungeon.connect(RoomId(1), RoomId(1)),
            Err(DungeonError::SelfConnection(RoomId(1)))
        );
        assert_eq!(
            dungeon.add_room(Room::new(RoomId(0), RoomKind::Boss)),
            Err(DungeonError::DuplicateRoom(RoomId(0)))
        );
        assert_eq!(
            dungeon.set_entrance(RoomId(9)),
            Err(DungeonError::UnknownRoom(RoomId(9)))
        );
    }

    #[test]
    fn first_room_is_the_default_entrance() {
        let mut dungeon = dungeon_with(&[3, 1]);
        assert_eq!(dungeon.entrance(), Some(RoomId(3)));

        dungeon.set_entrance(RoomId(1)).unwrap();
        assert_eq!(dungeon.entrance(), Some(RoomId(1)));
        assert_eq!(dungeon.room_ids().collect::<Vec<_>>(), vec![RoomId(1), RoomId(3)]);
    }
}
