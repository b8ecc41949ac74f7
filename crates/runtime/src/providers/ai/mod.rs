//! Behavior-tree AI for the hero and the enemies.
//!
//! - [`hero`]: one persistent core driving the hero through the dungeon
//! - [`enemy`]: one core per enemy, its tree chosen from five behaviors

pub mod enemy;
pub mod hero;

pub use enemy::{EnemyBehavior, EnemyContext, EnemyCore};
pub use hero::{HeroContext, HeroCore};
