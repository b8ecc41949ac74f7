//! Rooms: the nodes of the dungeon graph and the containers of everything in it.

use super::{Enemy, EnemyId, Item, RoomId, Trap};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoomKind {
    Entrance,
    #[default]
    Normal,
    Treasure,
    Boss,
    Trap,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub id: RoomId,
    pub kind: RoomKind,
    pub items: Vec<Item>,
    /// Insertion order is turn order. Dead enemies are kept in place.
    pub enemies: Vec<Enemy>,
    pub traps: Vec<Trap>,
    pub connections: Vec<RoomId>,
    pub visited: bool,
    pub altered: bool,
}

impl Room {
    pub fn new(id: RoomId, kind: RoomKind) -> Self {
        Self {
            id,
            kind,
            items: Vec::new(),
            enemies: Vec::new(),
            traps: Vec::new(),
            connections: Vec::new(),
            visited: false,
            altered: false,
        }
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Places an enemy in the room and returns its stable identifier.
    pub fn add_enemy(&mut self, enemy: Enemy) -> EnemyId {
        let slot = self.enemies.len() as u32;
        self.enemies.push(enemy);
        EnemyId::new(self.id, slot)
    }

    pub fn add_trap(&mut self, trap: Trap) {
        self.traps.push(trap);
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        if id.room != self.id {
            return None;
        }
        self.enemies.get(id.slot as usize)
    }

    pub fn enemy_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        if id.room != self.id {
            return None;
        }
        self.enemies.get_mut(id.slot as usize)
    }

    /// Identifiers of every enemy in the room, dead or alive, in room order.
    pub fn enemy_ids(&self) -> impl Iterator<Item = EnemyId> + '_ {
        (0..self.enemies.len() as u32).map(|slot| EnemyId::new(self.id, slot))
    }

    /// Living enemies with their identifiers, in room order.
    pub fn living_enemies(&self) -> impl Iterator<Item = (EnemyId, &Enemy)> + '_ {
        self.enemy_ids()
            .zip(self.enemies.iter())
            .filter(|(_, enemy)| enemy.is_alive())
    }

    pub fn has_living_enemies(&self) -> bool {
        self.enemies.iter().any(Enemy::is_alive)
    }

    pub fn armed_trap_count(&self) -> usize {
        self.traps.iter().filter(|trap| trap.is_armed()).count()
    }

    pub fn is_connected_to(&self, other: RoomId) -> bool {
        self.connections.contains(&other)
    }

    /// Marks the room as altered and adds `trap`. Only the first call has
    /// an effect; returns whether it did.
    pub fn alter(&mut self, trap: Trap) -> bool {
        if self.altered {
            return false;
        }
        self.altered = true;
        self.traps.push(trap);
        true
    }
}
