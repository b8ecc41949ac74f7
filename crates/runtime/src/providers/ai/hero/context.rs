//! Hero blackboard.

use game_core::{Dungeon, EnemyId, GameConfig, Hero, Room, RoomId, clamp_chance};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::events::{Event, EventBus};
use crate::world::Shared;

/// State the hero's tree reads and mutates.
///
/// Holds handles to the hero and dungeon (it never owns them) plus the hero's
/// scratch state: the sticky combat target and the anomalies noticed during
/// the current tick.
pub struct HeroContext {
    pub hero: Shared<Hero>,
    pub dungeon: Shared<Dungeon>,
    pub bus: EventBus,
    /// Sticky combat target, kept while it is alive.
    pub target: Option<EnemyId>,
    anomalies: u32,
    loot_caution: f64,
    rng: StdRng,
}

impl HeroContext {
    pub fn new(
        hero: Shared<Hero>,
        dungeon: Shared<Dungeon>,
        bus: EventBus,
        config: &GameConfig,
        seed: u64,
    ) -> Self {
        Self {
            hero,
            dungeon,
            bus,
            target: None,
            anomalies: 0,
            loot_caution: clamp_chance(
                config.cautious_loot_chance,
                GameConfig::DEFAULT_CAUTIOUS_LOOT_CHANCE,
            ),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn hero_name(&self) -> String {
        self.hero.borrow().name.clone()
    }

    pub fn current_room(&self) -> Option<RoomId> {
        self.hero.borrow().current_room
    }

    /// Runs `f` against the hero's current room, if any.
    pub fn with_room<T>(&self, f: impl FnOnce(&Room) -> T) -> Option<T> {
        let id = self.current_room()?;
        let dungeon = self.dungeon.borrow();
        dungeon.room(id).map(f)
    }

    pub fn publish(&self, event: Event) {
        self.bus.publish(event);
    }

    pub fn note_anomaly(&mut self) {
        self.anomalies += 1;
    }

    pub fn anomalies(&self) -> u32 {
        self.anomalies
    }

    pub(crate) fn take_anomalies(&mut self) -> u32 {
        std::mem::take(&mut self.anomalies)
    }

    /// Rolls whether a suspicious hero leaves a dubious item behind.
    pub fn roll_caution(&mut self) -> bool {
        self.rng.gen_bool(self.loot_caution)
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Keeps the current target if it is still alive in the hero's room,
    /// otherwise picks the living enemy with the highest attack (first wins
    /// ties) and remembers it.
    pub fn select_target(&mut self) -> Option<EnemyId> {
        let room_id = self.current_room()?;
        let dungeon = self.dungeon.borrow();

        if let Some(target) = self.target
            && target.room == room_id
            && dungeon.enemy(target).is_some_and(|enemy| enemy.is_alive())
        {
            return Some(target);
        }

        let mut best: Option<(EnemyId, u32)> = None;
        for (id, enemy) in dungeon.room(room_id)?.living_enemies() {
            if best.is_none_or(|(_, attack)| enemy.attack > attack) {
                best = Some((id, enemy.attack));
            }
        }
        self.target = best.map(|(id, _)| id);
        self.target
    }
}
