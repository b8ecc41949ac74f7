/// Game rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Turn limit after which the session ends without a winner.
    pub max_turns: u32,
    /// Probability (0.0-1.0) that a suspicious hero leaves a non-normal item behind.
    pub cautious_loot_chance: f64,
    /// Suspicion removed by the turn driver after every turn.
    pub suspicion_decay: u32,
}

impl GameConfig {
    // ===== rule constants =====
    /// Suspicion added per anomaly the hero noticed during a tick.
    pub const SUSPICION_PER_ANOMALY: u32 = 5;
    /// Suspicion strictly above this value makes the hero cautious.
    pub const SUSPICIOUS_THRESHOLD: u32 = 50;
    pub const MAX_SUSPICION: u32 = 100;
    /// Health strictly below this percentage of max counts as critical.
    pub const CRITICAL_HEALTH_PERCENT: u32 = 30;
    /// Rooms with more traps than this feel rigged.
    pub const CROWDED_TRAP_COUNT: usize = 2;
    /// Entrance, treasure room and boss room.
    pub const MIN_ROOMS: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_TURNS: u32 = 200;
    pub const DEFAULT_CAUTIOUS_LOOT_CHANCE: f64 = 0.5;
    pub const DEFAULT_SUSPICION_DECAY: u32 = 0;

    pub fn new() -> Self {
        Self {
            max_turns: Self::DEFAULT_MAX_TURNS,
            cautious_loot_chance: Self::DEFAULT_CAUTIOUS_LOOT_CHANCE,
            suspicion_decay: Self::DEFAULT_SUSPICION_DECAY,
        }
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn with_cautious_loot_chance(mut self, chance: f64) -> Self {
        self.cautious_loot_chance = clamp_chance(chance, Self::DEFAULT_CAUTIOUS_LOOT_CHANCE);
        self
    }

    pub fn with_suspicion_decay(mut self, decay: u32) -> Self {
        self.suspicion_decay = decay;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamps a probability into 0.0-1.0. NaN becomes `fallback`.
pub fn clamp_chance(chance: f64, fallback: f64) -> f64 {
    if chance.is_nan() {
        fallback
    } else {
        chance.clamp(0.0, 1.0)
    }
}
