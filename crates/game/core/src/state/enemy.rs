//! Enemy entity.

use crate::combat::scale;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EnemyKind {
    Goblin,
    Orc,
    Skeleton,
    Dragon,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub kind: EnemyKind,
    pub name: String,
    pub max_health: u32,
    pub health: u32,
    pub base_attack: u32,
    pub attack: u32,
    pub base_defense: u32,
    pub defense: u32,
    /// Set once by the curse; never cleared.
    pub mutated: bool,
    pub alive: bool,
    /// Set once when a boss first drops to low health; never cleared.
    pub enraged: bool,
    /// Position in the boss special-attack cycle.
    pub special_attack_step: u32,
    /// Brought in mid-game by another enemy rather than generated with the room.
    #[cfg_attr(feature = "serde", serde(default))]
    pub summoned: bool,
}

impl Enemy {
    pub fn new(
        kind: EnemyKind,
        name: impl Into<String>,
        health: u32,
        attack: u32,
        defense: u32,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            max_health: health,
            health,
            base_attack: attack,
            attack,
            base_defense: defense,
            defense,
            mutated: false,
            alive: health > 0,
            enraged: false,
            special_attack_step: 0,
            summoned: false,
        }
    }

    /// Marks the enemy as summoned by another enemy.
    pub fn as_summoned(mut self) -> Self {
        self.summoned = true;
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

    /// `true` if health is strictly below `percent`% of max health.
    #[inline]
    pub fn health_below_percent(&self, percent: u32) -> bool {
        u64::from(self.health) * 100 < u64::from(self.max_health) * u64::from(percent)
    }

    /// `true` if health is strictly above `percent`% of max health.
    #[inline]
    pub fn health_above_percent(&self, percent: u32) -> bool {
        u64::from(self.health) * 100 > u64::from(self.max_health) * u64::from(percent)
    }

    /// Applies an already-mitigated amount of damage.
    ///
    /// Returns the damage dealt. The alive → dead transition happens once.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.alive = false;
        }
        amount
    }

    /// Permanently strengthens the enemy. Returns `false` if already mutated.
    pub fn mutate(&mut self) -> bool {
        if self.mutated {
            return false;
        }
        self.mutated = true;
        self.attack = scale(self.attack, 3, 2);
        self.defense = scale(self.defense, 13, 10);
        self.max_health = scale(self.max_health, 14, 10);
        self.health = scale(self.health, 14, 10).min(self.max_health);
        true
    }

    /// Multiplies attack by 1.5 and sets the enraged flag. Idempotent.
    pub fn enrage(&mut self) -> bool {
        if self.enraged {
            return false;
        }
        self.enraged = true;
        self.attack = scale(self.attack, 3, 2);
        true
    }

    /// Permanent attack boost by `percent`%, truncating. Boosts stack.
    pub fn boost_attack(&mut self, percent: u32) {
        self.attack = scale(self.attack, 100 + percent, 100);
    }

    /// Permanent defense gain. Gains stack without bound.
    pub fn fortify(&mut self, amount: u32) {
        self.defense = self.defense.saturating_add(amount);
    }

    /// Current attack scaled by a pattern multiplier, truncating.
    pub fn scaled_attack(&self, multiplier: f64) -> u32 {
        (f64::from(self.attack) * multiplier) as u32
    }
}
