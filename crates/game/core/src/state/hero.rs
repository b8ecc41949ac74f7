//! The hero entity.

use super::{Item, ItemKind, ItemQuality, RoomId};
use crate::config::GameConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    pub name: String,
    pub max_health: u32,
    pub health: u32,
    pub base_attack: u32,
    pub attack: u32,
    pub defense: u32,
    pub inventory: Vec<Item>,
    pub current_room: Option<RoomId>,
    /// Rooms in first-visit order.
    pub visited_rooms: Vec<RoomId>,
    pub alive: bool,
    pub suspicion: u32,
    pub gold: u32,
}

impl Hero {
    pub const DEFAULT_HEALTH: u32 = 100;
    pub const DEFAULT_ATTACK: u32 = 15;
    pub const DEFAULT_DEFENSE: u32 = 5;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_health: Self::DEFAULT_HEALTH,
            health: Self::DEFAULT_HEALTH,
            base_attack: Self::DEFAULT_ATTACK,
            attack: Self::DEFAULT_ATTACK,
            defense: Self::DEFAULT_DEFENSE,
            inventory: Vec::new(),
            current_room: None,
            visited_rooms: Vec::new(),
            alive: true,
            suspicion: 0,
            gold: 0,
        }
    }

    /// Overrides the combat stats. Health is reset to the new maximum.
    pub fn with_stats(mut self, health: u32, attack: u32, defense: u32) -> Self {
        self.max_health = health;
        self.health = health;
        self.base_attack = attack;
        self.attack = attack;
        self.defense = defense;
        self.alive = health > 0;
        self
    }

    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health.min(self.max_health);
        self.alive = self.health > 0;
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn is_suspicious(&self) -> bool {
        self.suspicion > GameConfig::SUSPICIOUS_THRESHOLD
    }

    /// `true` if health is strictly below the critical share of max health.
    pub fn is_critical(&self) -> bool {
        u64::from(self.health) * 100
            < u64::from(self.max_health) * u64::from(GameConfig::CRITICAL_HEALTH_PERCENT)
    }

    /// Applies an already-mitigated amount of damage and returns it.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.alive = false;
        }
        amount
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// Puts the item in the inventory and applies its effect.
    ///
    /// A cursed potion hurts on pickup but never kills.
    pub fn add_item(&mut self, item: Item) {
        match item.kind {
            ItemKind::Weapon => self.attack = self.attack.saturating_add_signed(item.value),
            ItemKind::Armor => self.defense = self.defense.saturating_add_signed(item.value),
            ItemKind::Treasure => self.gold = self.gold.saturating_add_signed(item.value),
            ItemKind::HealthPotion => {
                if item.quality == ItemQuality::Cursed {
                    self.health = self.health.saturating_add_signed(item.value).max(1);
                }
            }
        }
        self.inventory.push(item);
    }

    /// Drinks the first non-cursed potion. Returns the consumed item.
    pub fn use_health_potion(&mut self) -> Option<Item> {
        let index = self.inventory.iter().position(|item| {
            item.kind == ItemKind::HealthPotion && item.quality != ItemQuality::Cursed
        })?;
        let potion = self.inventory.remove(index);
        self.heal(potion.value.max(0) as u32);
        Some(potion)
    }

    pub fn has_usable_potion(&self) -> bool {
        self.inventory.iter().any(|item| {
            item.kind == ItemKind::HealthPotion && item.quality != ItemQuality::Cursed
        })
    }

    /// Raises suspicion, clamped to the maximum. Returns the new level.
    pub fn increase_suspicion(&mut self, amount: u32) -> u32 {
        self.suspicion = self
            .suspicion
            .saturating_add(amount)
            .min(GameConfig::MAX_SUSPICION);
        self.suspicion
    }

    pub fn decrease_suspicion(&mut self, amount: u32) -> u32 {
        self.suspicion = self.suspicion.saturating_sub(amount);
        self.suspicion
    }

    /// Moves the hero and records the first visit. Returns `true` on a first visit.
    pub fn enter_room(&mut self, room: RoomId) -> bool {
        self.current_room = Some(room);
        if self.visited_rooms.contains(&room) {
            return false;
        }
        self.visited_rooms.push(room);
        true
    }

    pub fn has_visited(&self, room: RoomId) -> bool {
        self.visited_rooms.contains(&room)
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self::new("Hero")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_kills_at_zero() {
        let mut hero = Hero::new("Ayla").with_stats(10, 5, 0);

        hero.apply_damage(3);
        assert_eq!(hero.health, 7);
        assert!(hero.is_alive());

        hero.apply_damage(50);
        assert_eq!(hero.health, 0);
        assert!(!hero.is_alive());
    }

    #[test]
    fn items_apply_their_effects() {
        let mut hero = Hero::default();
        hero.add_item(Item::new(ItemKind::Weapon, "Sword", 5));
        hero.add_item(Item::new(ItemKind::Armor, "Shield", 3));
        hero.add_item(Item::new(ItemKind::Treasure, "Gold Coins", 40));

        assert_eq!(hero.attack, 20);
        assert_eq!(hero.defense, 8);
        assert_eq!(hero.gold, 40);
        assert_eq!(hero.inventory.len(), 3);
    }

    #[test]
    fn cursed_potion_hurts_but_never_kills() {
        let mut hero = Hero::default().with_health(10);
        let mut potion = Item::new(ItemKind::HealthPotion, "Health Potion", 40);
        potion.corrupt();
        potion.corrupt();

        hero.add_item(potion);
        assert_eq!(hero.health, 1);
        assert!(hero.is_alive());
        assert!(!hero.has_usable_potion());
        assert!(hero.use_health_potion().is_none());
    }

    #[test]
    fn potion_heals_up_to_max() {
        let mut hero = Hero::default().with_health(20);
        hero.add_item(Item::new(ItemKind::HealthPotion, "Health Potion", 30));
        hero.add_item(Item::new(ItemKind::HealthPotion, "Health Potion", 30));

        assert!(hero.use_health_potion().is_some());
        assert_eq!(hero.health, 50);
        assert_eq!(hero.inventory.len(), 1);

        hero.health = 90;
        hero.use_health_potion();
        assert_eq!(hero.health, 100);
        assert!(hero.inventory.is_empty());
    }

    #[test]
    fn suspicion_is_clamped() {
        let mut hero = Hero::default();
        assert_eq!(hero.increase_suspicion(45), 45);
        assert!(!hero.is_suspicious());
        assert_eq!(hero.increase_suspicion(10), 55);
        assert!(hero.is_suspicious());
        assert_eq!(hero.increase_suspicion(500), 100);
        assert_eq!(hero.decrease_suspicion(150), 0);
    }

    #[test]
    fn critical_health_threshold_is_strict() {
        assert!(!Hero::default().with_health(30).is_critical());
        assert!(Hero::default().with_health(29).is_critical());
    }
}
