//! Content provider: archetype tables and seeded dungeon generation.
//!
//! Content is static. It seeds the entity model in `game-core` and is never
//! consulted by the decision cores afterwards.

pub mod error;
pub mod generator;
pub mod tables;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use error::GenerationError;
pub use generator::{DungeonGenerator, random_trap};
pub use tables::{ContentTables, EnemyArchetype, ItemTemplate, ValueRange};

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, TablesLoader};
