//! Closed set of event kinds and their categories.

use serde::{Deserialize, Serialize};

/// Every kind of event the simulation publishes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
    // Hero
    HeroMoved,
    HeroAttacked,
    HeroDamaged,
    HeroDied,
    HeroLooted,
    HeroUsedItem,

    // Enemy
    EnemySpawned,
    EnemyAttacked,
    EnemyDied,
    EnemyMutated,

    // Room
    RoomEntered,
    RoomCleared,
    RoomAltered,

    // Trap
    TrapTriggered,
    TrapPlaced,

    // Item
    ItemCorrupted,
    ItemFound,

    // Player
    PlayerAction,
    SuspicionIncreased,

    // Game
    GameStarted,
    GameEnded,
}

/// Coarse grouping of [`EventKind`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(strum::Display, strum::EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EventCategory {
    Hero,
    Enemy,
    Room,
    Trap,
    Item,
    Player,
    Game,
}

impl EventKind {
    pub fn category(self) -> EventCategory {
        use EventKind::*;
        match self {
            HeroMoved | HeroAttacked | HeroDamaged | HeroDied | HeroLooted | HeroUsedItem => {
                EventCategory::Hero
            }
            EnemySpawned | EnemyAttacked | EnemyDied | EnemyMutated => EventCategory::Enemy,
            RoomEntered | RoomCleared | RoomAltered => EventCategory::Room,
            TrapTriggered | TrapPlaced => EventCategory::Trap,
            ItemCorrupted | ItemFound => EventCategory::Item,
            PlayerAction | SuspicionIncreased => EventCategory::Player,
            GameStarted | GameEnded => EventCategory::Game,
        }
    }
}
