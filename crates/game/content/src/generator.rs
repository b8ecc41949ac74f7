//! Seeded dungeon generation.

use game_core::{Dungeon, Enemy, GameConfig, Item, Room, RoomId, RoomKind, Trap, TrapKind};
use rand::rngs::StdRng;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::GenerationError;
use crate::tables::ContentTables;

const ENEMY_CHANCE: f64 = 0.5;
const ITEM_CHANCE: f64 = 0.4;
const TRAP_CHANCE: f64 = 0.3;
const BRANCH_CHANCE: f64 = 0.3;
const TREASURE_GUARDS: usize = 2;
const BOSS_HOARDS: usize = 3;

const TRAP_KINDS: [TrapKind; 4] = [
    TrapKind::Spike,
    TrapKind::Poison,
    TrapKind::Arrow,
    TrapKind::Fire,
];

/// Builds dungeons from [`ContentTables`] with a deterministic RNG.
///
/// Layout: room 0 is the entrance, the second-to-last room holds the treasure,
/// the last room holds the boss. Rooms are chained in id order, with
/// occasional `i <-> i + 2` shortcuts between normal rooms.
pub struct DungeonGenerator {
    rng: StdRng,
    tables: ContentTables,
}

impl DungeonGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_tables(seed, ContentTables::default())
    }

    pub fn with_tables(seed: u64, tables: ContentTables) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            tables,
        }
    }

    pub fn tables(&self) -> &ContentTables {
        &self.tables
    }

    pub fn generate(&mut self, num_rooms: usize) -> Result<Dungeon, GenerationError> {
        if num_rooms < GameConfig::MIN_ROOMS {
            return Err(GenerationError::TooFewRooms {
                requested: num_rooms,
                minimum: GameConfig::MIN_ROOMS,
            });
        }
        self.tables.validate()?;

        let treasure_id = num_rooms - 2;
        let boss_id = num_rooms - 1;
        let mut dungeon = Dungeon::new();

        dungeon.add_room(Room::new(RoomId::ENTRANCE, RoomKind::Entrance))?;
        for index in 1..treasure_id {
            let room = self.normal_room(room_id(index));
            dungeon.add_room(room)?;
        }
        let treasure = self.treasure_room(room_id(treasure_id));
        dungeon.add_room(treasure)?;
        let boss = self.boss_room(room_id(boss_id));
        dungeon.add_room(boss)?;
        dungeon.set_entrance(RoomId::ENTRANCE)?;

        for index in 0..boss_id {
            dungeon.connect(room_id(index), room_id(index + 1))?;
        }
        for index in 1..treasure_id {
            if self.rng.gen_bool(BRANCH_CHANCE) && index + 2 < boss_id {
                dungeon.connect(room_id(index), room_id(index + 2))?;
            }
        }

        debug!(
            target: "game_content::generator",
            rooms = num_rooms,
            "generated dungeon"
        );
        Ok(dungeon)
    }

    /// A random enemy from the common pool, or from the guard pool if `strong`.
    pub fn random_enemy(&mut self, strong: bool) -> Option<Enemy> {
        let archetype = if strong {
            self.tables.guard_enemies().choose(&mut self.rng)
        } else {
            self.tables.common_enemies().choose(&mut self.rng)
        };
        archetype.map(|archetype| archetype.spawn())
    }

    pub fn random_item(&mut self) -> Option<Item> {
        let template = self.tables.room_items.choose(&mut self.rng)?;
        Some(template.roll(&mut self.rng))
    }

    pub fn random_trap(&mut self) -> Trap {
        random_trap(&mut self.rng, &self.tables)
    }

    fn normal_room(&mut self, id: RoomId) -> Room {
        let mut room = Room::new(id, RoomKind::Normal);
        if self.rng.gen_bool(ENEMY_CHANCE) {
            let count = self.rng.gen_range(1..=2);
            for _ in 0..count {
                if let Some(enemy) = self.random_enemy(false) {
                    room.add_enemy(enemy);
                }
            }
        }
        if self.rng.gen_bool(ITEM_CHANCE)
            && let Some(item) = self.random_item()
        {
            room.add_item(item);
        }
        if self.rng.gen_bool(TRAP_CHANCE) {
            room.add_trap(self.random_trap());
        }
        room
    }

    fn treasure_room(&mut self, id: RoomId) -> Room {
        let mut room = Room::new(id, RoomKind::Treasure);
        let piles = self.rng.gen_range(2..=4);
        for _ in 0..piles {
            room.add_item(self.tables.treasure_coins.roll(&mut self.rng));
        }
        room.add_item(self.tables.treasure_weapon.roll(&mut self.rng));
        room.add_item(self.tables.treasure_armor.roll(&mut self.rng));
        for _ in 0..TREASURE_GUARDS {
            let guard = self
                .random_enemy(true)
                .or_else(|| self.random_enemy(false));
            if let Some(guard) = guard {
                room.add_enemy(guard);
            }
        }
        room
    }

    fn boss_room(&mut self, id: RoomId) -> Room {
        let mut room = Room::new(id, RoomKind::Boss);
        room.add_enemy(self.tables.boss.spawn());
        for _ in 0..BOSS_HOARDS {
            room.add_item(self.tables.boss_hoard.roll(&mut self.rng));
        }
        room
    }
}

/// Rolls a trap of a random kind with damage from the room trap table.
pub fn random_trap<R: Rng + ?Sized>(rng: &mut R, tables: &ContentTables) -> Trap {
    let kind = TRAP_KINDS.choose(rng).copied().unwrap_or(TrapKind::Spike);
    Trap::new(kind, tables.trap_damage.roll(rng).max(0) as u32)
}

fn room_id(index: usize) -> RoomId {
    RoomId(index as u32)
}
