//! Hero decision core.
//!
//! A fixed selector over four prioritized sequences, evaluated once per turn:
//!
//! 1. critical health: drink a potion
//! 2. combat: trade blows with the sticky target
//! 3. looting: take (or cautiously refuse) the first item
//! 4. exploration: move on, preferring unvisited rooms
//!
//! Anomalies noticed during a tick are folded into the hero's suspicion when
//! the tick ends.

mod context;
pub mod nodes;

pub use context::HeroContext;

use behavior_tree::builder::{node, selector, sequence};
use behavior_tree::{BehaviorTree, Status};
use game_core::{Dungeon, EnemyId, GameConfig, Hero};
use tracing::{debug, trace};

use crate::events::{Event, EventBus, EventKind};
use crate::world::Shared;
use nodes::{
    CanExplore, DrinkPotion, EnemiesPresent, Explore, Fight, IsHealthCritical, ItemsPresent, Loot,
};

/// Builds the hero's tree.
pub fn hero_tree() -> BehaviorTree<HeroContext> {
    BehaviorTree::new(selector(
        "hero",
        vec![
            sequence("critical_health", vec![node(IsHealthCritical), node(DrinkPotion)]),
            sequence("combat", vec![node(EnemiesPresent), node(Fight)]),
            sequence("loot", vec![node(ItemsPresent), node(Loot)]),
            sequence("explore", vec![node(CanExplore), node(Explore)]),
        ],
    ))
}

/// One hero's tree plus its persistent blackboard.
pub struct HeroCore {
    tree: BehaviorTree<HeroContext>,
    ctx: HeroContext,
}

impl HeroCore {
    pub fn new(
        hero: Shared<Hero>,
        dungeon: Shared<Dungeon>,
        bus: EventBus,
        config: &GameConfig,
        seed: u64,
    ) -> Self {
        Self {
            tree: hero_tree(),
            ctx: HeroContext::new(hero, dungeon, bus, config, seed),
        }
    }

    /// Runs one turn. `Failure` without evaluating the tree if the hero is
    /// already dead.
    pub fn tick(&mut self) -> Status {
        if !self.ctx.hero.borrow().is_alive() {
            trace!(target: "runtime::ai::hero", "hero is dead, skipping tick");
            return Status::Failure;
        }

        let status = self.tree.tick(&mut self.ctx);
        self.fold_suspicion();
        debug!(target: "runtime::ai::hero", ?status, "hero ticked");
        status
    }

    pub fn target(&self) -> Option<EnemyId> {
        self.ctx.target
    }

    pub fn context(&self) -> &HeroContext {
        &self.ctx
    }

    fn fold_suspicion(&mut self) {
        let anomalies = self.ctx.take_anomalies();
        if anomalies == 0 {
            return;
        }
        let (name, before, after) = {
            let mut hero = self.ctx.hero.borrow_mut();
            let before = hero.suspicion;
            let after = hero.increase_suspicion(anomalies * GameConfig::SUSPICION_PER_ANOMALY);
            (hero.name.clone(), before, after)
        };
        if after == before {
            return;
        }
        debug!(
            target: "runtime::ai::hero",
            hero = %name,
            anomalies,
            suspicion = after,
            "suspicion rose"
        );
        self.ctx.publish(
            Event::new(EventKind::SuspicionIncreased)
                .with("hero", name)
                .with("anomalies", anomalies)
                .with("level", after)
                .with("suspicious", after > GameConfig::SUSPICIOUS_THRESHOLD),
        );
    }
}
