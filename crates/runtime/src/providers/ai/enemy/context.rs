//! Per-tick enemy blackboard.

use game_core::{Dungeon, Enemy, EnemyId, Hero, RoomId};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::events::{Event, EventBus};
use crate::world::{Shared, World};

/// Everything one enemy's tree sees during a single tick.
///
/// Built fresh by the turn driver before each enemy tick. `allies` lists the
/// other living enemies in the room at that moment; summoned minions are
/// appended to it during the tick.
pub struct EnemyContext {
    pub enemy: EnemyId,
    pub room: RoomId,
    pub hero: Shared<Hero>,
    pub dungeon: Shared<Dungeon>,
    pub bus: EventBus,
    pub allies: Vec<EnemyId>,
    rng: StdRng,
}

impl EnemyContext {
    /// Context for `enemy`, with allies taken from the other living enemies
    /// in its room.
    pub fn new(enemy: EnemyId, world: &World, bus: EventBus, seed: u64) -> Self {
        let allies = world
            .dungeon
            .borrow()
            .room(enemy.room)
            .map(|room| {
                room.living_enemies()
                    .map(|(id, _)| id)
                    .filter(|id| *id != enemy)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            enemy,
            room: enemy.room,
            hero: world.hero.clone(),
            dungeon: world.dungeon.clone(),
            bus,
            allies,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_allies(mut self, allies: Vec<EnemyId>) -> Self {
        self.allies = allies;
        self
    }

    /// Reads the acting enemy. `None` if the id no longer resolves.
    pub fn with_enemy<T>(&self, f: impl FnOnce(&Enemy) -> T) -> Option<T> {
        self.dungeon.borrow().enemy(self.enemy).map(f)
    }

    pub fn with_enemy_mut<T>(&self, f: impl FnOnce(&mut Enemy) -> T) -> Option<T> {
        self.dungeon.borrow_mut().enemy_mut(self.enemy).map(f)
    }

    pub fn enemy_name(&self) -> String {
        self.with_enemy(|enemy| enemy.name.clone())
            .unwrap_or_default()
    }

    pub fn hero_in_room(&self) -> bool {
        self.hero.borrow().current_room == Some(self.room)
    }

    /// Enemy alive, hero alive, both in the same room.
    pub fn can_attack(&self) -> bool {
        let enemy_alive = self.with_enemy(Enemy::is_alive).unwrap_or(false);
        enemy_alive && self.hero.borrow().is_alive() && self.hero_in_room()
    }

    /// Allies from the list that are still alive.
    pub fn living_allies(&self) -> Vec<EnemyId> {
        let dungeon = self.dungeon.borrow();
        self.allies
            .iter()
            .copied()
            .filter(|id| *id != self.enemy && dungeon.enemy(*id).is_some_and(Enemy::is_alive))
            .collect()
    }

    pub fn publish(&self, event: Event) {
        self.bus.publish(event);
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}
