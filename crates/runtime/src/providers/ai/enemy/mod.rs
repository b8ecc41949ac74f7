//! Enemy decision cores.
//!
//! Each enemy gets its own tree, picked from five behaviors when the core is
//! created. The turn driver builds a fresh [`EnemyContext`] for every tick.

mod context;
pub mod nodes;
pub mod presets;

pub use context::EnemyContext;

use behavior_tree::{BehaviorTree, Status};
use game_core::{Enemy, EnemyId, EnemyKind, RoomKind};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::events::EventBus;
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(strum::Display, strum::EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EnemyBehavior {
    Aggressive,
    Defensive,
    Cowardly,
    Tactical,
    Boss,
}

impl EnemyBehavior {
    /// Health percentage below which the enemy retreats.
    pub fn flee_threshold(self) -> u32 {
        match self {
            Self::Defensive | Self::Boss => 30,
            Self::Aggressive | Self::Cowardly | Self::Tactical => 50,
        }
    }

    /// Fixed behavior of summoned minions.
    pub const MINION: Self = Self::Aggressive;

    /// Behavior for a concrete enemy. Summoned minions always fight as
    /// [`Self::MINION`]; everything else goes through [`Self::assign`].
    pub fn for_enemy<R: Rng + ?Sized>(enemy: &Enemy, room: RoomKind, rng: &mut R) -> Self {
        if enemy.summoned {
            return Self::MINION;
        }
        Self::assign(enemy.kind, room, rng)
    }

    /// Picks a behavior for an enemy: bosses and dragons fight as bosses,
    /// goblins are cowards, orcs are aggressive, the rest is rolled.
    pub fn assign<R: Rng + ?Sized>(kind: EnemyKind, room: RoomKind, rng: &mut R) -> Self {
        if room == RoomKind::Boss || kind == EnemyKind::Dragon {
            return Self::Boss;
        }
        match kind {
            EnemyKind::Goblin => Self::Cowardly,
            EnemyKind::Orc => Self::Aggressive,
            _ => [Self::Aggressive, Self::Defensive, Self::Tactical]
                .choose(rng)
                .copied()
                .unwrap_or(Self::Aggressive),
        }
    }
}

/// One enemy's tree.
pub struct EnemyCore {
    id: EnemyId,
    behavior: EnemyBehavior,
    bus: EventBus,
    tree: BehaviorTree<EnemyContext>,
}

impl EnemyCore {
    pub fn new(id: EnemyId, behavior: EnemyBehavior, bus: EventBus) -> Self {
        Self {
            id,
            behavior,
            bus,
            tree: presets::tree_for(behavior),
        }
    }

    pub fn id(&self) -> EnemyId {
        self.id
    }

    pub fn behavior(&self) -> EnemyBehavior {
        self.behavior
    }

    /// Fresh context for this enemy's next tick.
    pub fn context(&self, world: &World, seed: u64) -> EnemyContext {
        EnemyContext::new(self.id, world, self.bus.clone(), seed)
    }

    /// Runs one turn. `Failure` without evaluating the tree if the enemy is
    /// already dead.
    pub fn tick(&self, ctx: &mut EnemyContext) -> Status {
        if !ctx.with_enemy(|enemy| enemy.is_alive()).unwrap_or(false) {
            trace!(target: "runtime::ai::enemy", enemy = %self.id, "enemy is dead, skipping tick");
            return Status::Failure;
        }
        let status = self.tree.tick(ctx);
        trace!(
            target: "runtime::ai::enemy",
            enemy = %self.id,
            behavior = %self.behavior,
            ?status,
            "enemy ticked"
        );
        status
    }
}
