//! Archetype tables: enemy stat lines, item templates and trap damage.
//!
//! [`ContentTables::default`] holds the built-in content. With the `loaders`
//! feature the same structure can be read from RON or TOML.

use game_core::{Enemy, EnemyKind, Item, ItemKind};
use rand::Rng;

use crate::error::GenerationError;

/// Inclusive integer range rolled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueRange {
    pub min: i32,
    pub max: i32,
}

impl ValueRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.gen_range(self.min..=self.max)
    }

    fn validate(&self, name: &'static str) -> Result<(), GenerationError> {
        if self.min > self.max {
            return Err(GenerationError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyArchetype {
    pub kind: EnemyKind,
    pub name: String,
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
}

impl EnemyArchetype {
    pub fn new(kind: EnemyKind, name: &str, health: u32, attack: u32, defense: u32) -> Self {
        Self {
            kind,
            name: name.to_owned(),
            health,
            attack,
            defense,
        }
    }

    pub fn spawn(&self) -> Enemy {
        Enemy::new(self.kind, self.name.clone(), self.health, self.attack, self.defense)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub kind: ItemKind,
    pub name: String,
    pub value: ValueRange,
}

impl ItemTemplate {
    pub fn new(kind: ItemKind, name: &str, min: i32, max: i32) -> Self {
        Self {
            kind,
            name: name.to_owned(),
            value: ValueRange::new(min, max),
        }
    }

    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Item {
        Item::new(self.kind, self.name.clone(), self.value.roll(rng))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentTables {
    /// Regular enemies. Normal rooms draw from the non-dragon entries.
    pub enemies: Vec<EnemyArchetype>,
    pub boss: EnemyArchetype,
    /// Loot found in normal rooms.
    pub room_items: Vec<ItemTemplate>,
    pub trap_damage: ValueRange,
    pub treasure_coins: ItemTemplate,
    pub treasure_weapon: ItemTemplate,
    pub treasure_armor: ItemTemplate,
    pub boss_hoard: ItemTemplate,
    /// Damage of the trap added when the curse alters a room.
    pub altered_trap_damage: ValueRange,
    /// Damage of a trap planted directly by the curse.
    pub placed_trap_damage: u32,
}

impl ContentTables {
    pub fn archetype(&self, kind: EnemyKind) -> Option<&EnemyArchetype> {
        self.enemies.iter().find(|archetype| archetype.kind == kind)
    }

    /// Enemies that may appear in ordinary rooms.
    pub fn common_enemies(&self) -> impl Iterator<Item = &EnemyArchetype> + '_ {
        self.enemies
            .iter()
            .filter(|archetype| archetype.kind != EnemyKind::Dragon)
    }

    /// Enemies strong enough to guard treasure.
    pub fn guard_enemies(&self) -> impl Iterator<Item = &EnemyArchetype> + '_ {
        self.enemies
            .iter()
            .filter(|archetype| matches!(archetype.kind, EnemyKind::Orc | EnemyKind::Skeleton))
    }

    /// Rejects tables the generator could not roll from.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.common_enemies().next().is_none() {
            return Err(GenerationError::EmptyTable("enemies"));
        }
        if self.room_items.is_empty() {
            return Err(GenerationError::EmptyTable("room_items"));
        }
        self.trap_damage.validate("trap_damage")?;
        self.altered_trap_damage.validate("altered_trap_damage")?;
        for template in self.room_items.iter().chain([
            &self.treasure_coins,
            &self.treasure_weapon,
            &self.treasure_armor,
            &self.boss_hoard,
        ]) {
            template.value.validate("item value")?;
        }
        Ok(())
    }
}

impl Default for ContentTables {
    fn default() -> Self {
        Self {
            enemies: vec![
                EnemyArchetype::new(EnemyKind::Goblin, "Goblin", 30, 8, 2),
                EnemyArchetype::new(EnemyKind::Orc, "Orc", 50, 12, 5),
                EnemyArchetype::new(EnemyKind::Skeleton, "Skeleton", 40, 10, 3),
                EnemyArchetype::new(EnemyKind::Dragon, "Dragon", 150, 25, 10),
            ],
            boss: EnemyArchetype::new(EnemyKind::Dragon, "Dragon Boss", 150, 25, 10),
            room_items: vec![
                ItemTemplate::new(ItemKind::HealthPotion, "Health Potion", 20, 40),
                ItemTemplate::new(ItemKind::Weapon, "Sword", 3, 8),
                ItemTemplate::new(ItemKind::Armor, "Shield", 2, 5),
                ItemTemplate::new(ItemKind::Treasure, "Coins", 10, 50),
            ],
            trap_damage: ValueRange::new(5, 15),
            treasure_coins: ItemTemplate::new(ItemKind::Treasure, "Gold Coins", 50, 150),
            treasure_weapon: ItemTemplate::new(ItemKind::Weapon, "Enchanted Sword", 10, 20),
            treasure_armor: ItemTemplate::new(ItemKind::Armor, "Sturdy Armor", 5, 10),
            boss_hoard: ItemTemplate::new(ItemKind::Treasure, "Dragon Hoard", 100, 200),
            altered_trap_damage: ValueRange::new(10, 30),
            placed_trap_damage: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_tables_are_valid() {
        let tables = ContentTables::default();
        assert_eq!(tables.validate(), Ok(()));

        let orc = tables.archetype(EnemyKind::Orc).unwrap();
        assert_eq!((orc.health, orc.attack, orc.defense), (50, 12, 5));
        assert_eq!(tables.common_enemies().count(), 3);
        assert!(tables.guard_enemies().all(|a| a.kind != EnemyKind::Goblin));
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let tables = ContentTables {
            trap_damage: ValueRange::new(9, 3),
            ..ContentTables::default()
        };
        assert_eq!(
            tables.validate(),
            Err(GenerationError::InvalidRange {
                name: "trap_damage",
                min: 9,
                max: 3
            })
        );
    }

    #[test]
    fn missing_common_enemies_are_rejected() {
        let tables = ContentTables {
            enemies: vec![EnemyArchetype::new(EnemyKind::Dragon, "Dragon", 150, 25, 10)],
            ..ContentTables::default()
        };
        assert_eq!(tables.validate(), Err(GenerationError::EmptyTable("enemies")));
    }
}
