//! Runtime configuration.

use std::env;

use game_core::{GameConfig, clamp_chance};
use serde::{Deserialize, Serialize};

use crate::api::{Result, RuntimeError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    pub num_rooms: usize,
    /// Root seed. Every random choice in a session derives from it.
    pub seed: u64,
    pub enable_curse: bool,
    /// Probability (0.0-1.0) that the curse acts in a given turn.
    pub curse_chance: f64,
    pub hero_name: String,
}

impl RuntimeConfig {
    pub const DEFAULT_ROOMS: usize = 10;
    pub const DEFAULT_SEED: u64 = 42;
    pub const DEFAULT_CURSE_CHANCE: f64 = 0.3;

    /// Defaults overridden by `DUNGEON_*` and `HERO_NAME` environment
    /// variables. Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RuntimeConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = parse(lookup("DUNGEON_SEED")) {
            config.seed = seed;
        }
        if let Some(rooms) = parse::<usize>(lookup("DUNGEON_ROOMS")) {
            config.num_rooms = rooms.max(GameConfig::MIN_ROOMS);
        }
        if let Some(turns) = parse(lookup("DUNGEON_MAX_TURNS")) {
            config.game.max_turns = turns;
        }
        if let Some(enable) = parse(lookup("DUNGEON_CURSE")) {
            config.enable_curse = enable;
        }
        if let Some(chance) = parse::<f64>(lookup("DUNGEON_CURSE_CHANCE")) {
            config = config.with_curse_chance(chance);
        }
        if let Some(decay) = parse(lookup("DUNGEON_SUSPICION_DECAY")) {
            config.game.suspicion_decay = decay;
        }
        if let Some(chance) = parse::<f64>(lookup("DUNGEON_LOOT_CAUTION")) {
            config.game = config.game.with_cautious_loot_chance(chance);
        }
        if let Some(name) = lookup("HERO_NAME").filter(|name| !name.trim().is_empty()) {
            config.hero_name = name;
        }
        config
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_rooms(mut self, num_rooms: usize) -> Self {
        self.num_rooms = num_rooms;
        self
    }

    pub fn with_curse(mut self, enable: bool) -> Self {
        self.enable_curse = enable;
        self
    }

    pub fn with_curse_chance(mut self, chance: f64) -> Self {
        self.curse_chance = clamp_chance(chance, Self::DEFAULT_CURSE_CHANCE);
        self
    }

    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.curse_chance) {
            return Err(RuntimeError::InvalidConfig(format!(
                "curse chance {} is outside 0.0-1.0",
                self.curse_chance
            )));
        }
        if !(0.0..=1.0).contains(&self.game.cautious_loot_chance) {
            return Err(RuntimeError::InvalidConfig(format!(
                "loot caution {} is outside 0.0-1.0",
                self.game.cautious_loot_chance
            )));
        }
        Ok(())
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            num_rooms: Self::DEFAULT_ROOMS,
            seed: Self::DEFAULT_SEED,
            enable_curse: true,
            curse_chance: Self::DEFAULT_CURSE_CHANCE,
            hero_name: "Hero".to_owned(),
        }
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
