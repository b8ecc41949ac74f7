//! Entity model shared by the content generator and the decision cores.
//!
//! Entities are plain data with small, self-contained mutators. Nothing here
//! publishes events or rolls dice; callers own both.
mod dungeon;
mod enemy;
mod hero;
mod ids;
mod item;
mod room;
mod trap;

pub use dungeon::Dungeon;
pub use enemy::{Enemy, EnemyKind};
pub use hero::Hero;
pub use ids::{EnemyId, RoomId};
pub use item::{Item, ItemKind, ItemQuality};
pub use room::{Room, RoomKind};
pub use trap::{Trap, TrapKind};
