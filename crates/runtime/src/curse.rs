//! Automated curse: the adversary that perturbs the dungeon between turns.

use game_content::ContentTables;
use game_core::{RoomId, Trap, TrapKind, clamp_chance};
use rand::rngs::StdRng;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RuntimeConfig;
use crate::events::{Event, EventBus, EventKind};
use crate::world::World;

const TARGET: &str = "runtime::curse";

/// Payload value marking `PlayerAction` events that came from the curse.
pub const CURSE_SOURCE: &str = "curse";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(strum::Display, strum::EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CurseAction {
    MutateEnemy,
    CorruptItem,
    AlterRoom,
    PlaceTrap,
}

impl CurseAction {
    pub const ALL: [Self; 4] = [
        Self::MutateEnemy,
        Self::CorruptItem,
        Self::AlterRoom,
        Self::PlaceTrap,
    ];
}

/// Picks a random room and a random perturbation with a fixed chance per turn.
pub struct AutoCurse {
    rng: StdRng,
    chance: f64,
    tables: ContentTables,
    performed: u32,
}

impl AutoCurse {
    pub fn new(seed: u64, chance: f64, tables: ContentTables) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            chance: clamp_chance(chance, RuntimeConfig::DEFAULT_CURSE_CHANCE),
            tables,
            performed: 0,
        }
    }

    /// Number of perturbations that took effect so far.
    pub fn performed(&self) -> u32 {
        self.performed
    }

    /// Rolls for this turn. Returns the perturbation applied, if any.
    pub fn act(&mut self, world: &World, bus: &EventBus) -> Option<CurseAction> {
        if !self.rng.gen_bool(self.chance) {
            return None;
        }
        let room = world.dungeon.borrow().room_ids().choose(&mut self.rng)?;
        let action = *CurseAction::ALL.choose(&mut self.rng)?;
        self.perform(action, room, world, bus).then_some(action)
    }

    /// Applies `action` to `room`. Returns `false` when nothing in the room
    /// could be affected.
    pub fn perform(
        &mut self,
        action: CurseAction,
        room: RoomId,
        world: &World,
        bus: &EventBus,
    ) -> bool {
        let event = match action {
            CurseAction::MutateEnemy => self.mutate_enemy(room, world),
            CurseAction::CorruptItem => self.corrupt_item(room, world),
            CurseAction::AlterRoom => self.alter_room(room, world),
            CurseAction::PlaceTrap => self.place_trap(room, world),
        };
        let Some(event) = event else {
            debug!(target: TARGET, %action, room = %room, "nothing to curse");
            return false;
        };

        self.performed += 1;
        debug!(target: TARGET, %action, room = %room, "curse struck");
        bus.publish(event);
        bus.publish(
            Event::new(EventKind::PlayerAction)
                .with("action", action.to_string())
                .with("source", CURSE_SOURCE)
                .with("room", room),
        );
        true
    }

    fn mutate_enemy(&mut self, room: RoomId, world: &World) -> Option<Event> {
        let mut dungeon = world.dungeon.borrow_mut();
        let enemy = dungeon
            .room_mut(room)?
            .enemies
            .iter_mut()
            .find(|enemy| enemy.is_alive() && !enemy.mutated)?;
        enemy.mutate();
        Some(
            Event::new(EventKind::EnemyMutated)
                .with("enemy", enemy.name.as_str())
                .with("mutation", "cursed")
                .with("attack", enemy.attack)
                .with("room", room),
        )
    }

    fn corrupt_item(&mut self, room: RoomId, world: &World) -> Option<Event> {
        let mut dungeon = world.dungeon.borrow_mut();
        let item = dungeon
            .room_mut(room)?
            .items
            .iter_mut()
            .find_map(|item| item.corrupt().then_some(item))?;
        Some(
            Event::new(EventKind::ItemCorrupted)
                .with("item", item.name.as_str())
                .with("quality", item.quality.to_string())
                .with("value", item.value)
                .with("room", room),
        )
    }

    fn alter_room(&mut self, room: RoomId, world: &World) -> Option<Event> {
        let kind = self.trap_kind();
        let damage = self.tables.altered_trap_damage.roll(&mut self.rng).max(0) as u32;
        let mut dungeon = world.dungeon.borrow_mut();
        let target = dungeon.room_mut(room)?;
        if !target.alter(Trap::new(kind, damage)) {
            return None;
        }
        Some(
            Event::new(EventKind::RoomAltered)
                .with("room", room)
                .with("trap", kind.to_string())
                .with("damage", damage),
        )
    }

    fn place_trap(&mut self, room: RoomId, world: &World) -> Option<Event> {
        let kind = self.trap_kind();
        let damage = self.tables.placed_trap_damage;
        world
            .dungeon
            .borrow_mut()
            .room_mut(room)?
            .add_trap(Trap::new(kind, damage));
        Some(
            Event::new(EventKind::TrapPlaced)
                .with("room", room)
                .with("trap", kind.to_string())
                .with("damage", damage),
        )
    }

    fn trap_kind(&mut self) -> TrapKind {
        [TrapKind::Spike, TrapKind::Poison, TrapKind::Arrow, TrapKind::Fire]
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(TrapKind::Spike)
    }
}
