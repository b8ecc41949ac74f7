//! Entity model and rule constants for the dungeon simulation.
//!
//! `game-core` owns the data the decision cores judge and mutate: the hero,
//! rooms, enemies, items and traps, wired together in a [`Dungeon`]. It also
//! fixes the single damage formula every attacker uses and the tunable
//! [`GameConfig`]. There is no behavior here; see the `runtime` crate.
pub mod combat;
pub mod config;
pub mod error;
pub mod state;

pub use combat::strike_damage;
pub use config::{GameConfig, clamp_chance};
pub use error::DungeonError;
pub use state::{
    Dungeon, Enemy, EnemyId, EnemyKind, Hero, Item, ItemKind, ItemQuality, Room, RoomId, RoomKind,
    Trap, TrapKind,
};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn room_round_trips_through_json() {
        let mut room = Room::new(RoomId(2), RoomKind::Treasure);
        room.add_item(Item::new(ItemKind::Treasure, "Gold Coins", 25));
        room.add_enemy(Enemy::new(EnemyKind::Orc, "Orc Guard", 50, 12, 5));
        room.add_trap(Trap::new(TrapKind::Arrow, 9));

        let json = serde_json::to_string(&room).unwrap();
        assert!(json.contains("\"kind\":\"treasure\""));
        let back: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(back, room);
    }
}
