//! Turn driver.
//!
//! One turn runs, in order: the hero's tree, the tree of every living enemy
//! in the hero's room (room order), the curse, suspicion decay and the
//! end-of-game checks.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use game_content::{ContentTables, DungeonGenerator};
use game_core::{Dungeon, EnemyId, Hero, RoomId, RoomKind};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::{Result, RuntimeError};
use crate::config::RuntimeConfig;
use crate::curse::AutoCurse;
use crate::events::{Event, EventBus, EventKind};
use crate::providers::ai::{EnemyBehavior, EnemyCore, HeroCore};
use crate::stats::{SessionStats, StatsTracker};
use crate::world::World;

const TARGET: &str = "runtime::simulation";

// Independent streams derived from the root seed.
const HERO_STREAM: u64 = 0x4845_524f;
const CURSE_STREAM: u64 = 0x4355_5253;
const DRIVER_STREAM: u64 = 0x5455_524e;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    /// Every boss room was visited and holds no living enemy.
    Victory,
    HeroDied,
    TurnLimit,
    /// The hero is alive but has nothing left to do.
    Stranded,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSummary {
    pub name: String,
    pub alive: bool,
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub gold: u32,
    pub suspicion: u32,
    pub inventory: usize,
}

impl From<&Hero> for HeroSummary {
    fn from(hero: &Hero) -> Self {
        Self {
            name: hero.name.clone(),
            alive: hero.is_alive(),
            health: hero.health,
            max_health: hero.max_health,
            attack: hero.attack,
            defense: hero.defense,
            gold: hero.gold,
            suspicion: hero.suspicion,
            inventory: hero.inventory.len(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub seed: u64,
    pub turns: u32,
    pub outcome: Option<Outcome>,
    pub victory: bool,
    pub hero: HeroSummary,
    pub rooms_visited: usize,
    pub rooms_total: usize,
    pub curse_actions: u32,
    pub events: usize,
    pub stats: SessionStats,
}

pub struct Simulation {
    config: RuntimeConfig,
    world: World,
    bus: EventBus,
    hero_core: HeroCore,
    enemy_cores: BTreeMap<EnemyId, EnemyCore>,
    curse: Option<AutoCurse>,
    stats: StatsTracker,
    rng: StdRng,
    turn: u32,
    outcome: Option<Outcome>,
    hero_death_seen: Rc<Cell<bool>>,
}

impl Simulation {
    /// Generates a dungeon from the built-in tables and prepares a session.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        Self::with_tables(config, ContentTables::default())
    }

    pub fn with_tables(config: RuntimeConfig, tables: ContentTables) -> Result<Self> {
        let dungeon =
            DungeonGenerator::with_tables(config.seed, tables.clone()).generate(config.num_rooms)?;
        let hero = Hero::new(config.hero_name.clone());
        Self::assemble(config, dungeon, hero, tables)
    }

    /// Prepares a session over a hand-built dungeon.
    pub fn with_world(config: RuntimeConfig, dungeon: Dungeon, hero: Hero) -> Result<Self> {
        Self::assemble(config, dungeon, hero, ContentTables::default())
    }

    fn assemble(
        config: RuntimeConfig,
        dungeon: Dungeon,
        hero: Hero,
        tables: ContentTables,
    ) -> Result<Self> {
        config.validate()?;
        if dungeon.entrance().is_none() {
            return Err(RuntimeError::MissingEntrance);
        }

        let world = World::new(dungeon, hero);
        let bus = EventBus::new();
        let stats = StatsTracker::attach(&bus);

        let hero_death_seen = Rc::new(Cell::new(false));
        let seen = Rc::clone(&hero_death_seen);
        bus.subscribe(EventKind::HeroDied, move |_, _| seen.set(true));

        let hero_core = HeroCore::new(
            world.hero.clone(),
            world.dungeon.clone(),
            bus.clone(),
            &config.game,
            config.seed ^ HERO_STREAM,
        );
        let curse = config
            .enable_curse
            .then(|| AutoCurse::new(config.seed ^ CURSE_STREAM, config.curse_chance, tables));

        Ok(Self {
            rng: StdRng::seed_from_u64(config.seed ^ DRIVER_STREAM),
            config,
            world,
            bus,
            hero_core,
            enemy_cores: BTreeMap::new(),
            curse,
            stats,
            turn: 0,
            outcome: None,
            hero_death_seen,
        })
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Behavior assigned to an enemy, once it has acted at least once.
    pub fn enemy_behavior(&self, id: EnemyId) -> Option<EnemyBehavior> {
        self.enemy_cores.get(&id).map(EnemyCore::behavior)
    }

    /// Plays one turn. Returns the outcome once the session has ended.
    pub fn run_turn(&mut self) -> Option<Outcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }
        if self.turn >= self.config.game.max_turns {
            return self.finish(Outcome::TurnLimit);
        }
        self.turn += 1;
        debug!(target: TARGET, turn = self.turn, "turn started");

        let engaged = self
            .world
            .hero
            .borrow()
            .current_room
            .filter(|&room| self.living_enemies(room) > 0);

        let status = self.hero_core.tick();
        if self.hero_dead() {
            return self.finish(Outcome::HeroDied);
        }

        self.tick_enemies();
        if self.hero_dead() {
            return self.finish(Outcome::HeroDied);
        }

        if let Some(room) = engaged
            && self.living_enemies(room) == 0
        {
            info!(target: TARGET, %room, "room cleared");
            self.bus
                .publish(Event::new(EventKind::RoomCleared).with("room", room));
        }

        if let Some(curse) = self.curse.as_mut() {
            curse.act(&self.world, &self.bus);
        }

        let decay = self.config.game.suspicion_decay;
        if decay > 0 {
            self.world.hero.borrow_mut().decrease_suspicion(decay);
        }

        if self.boss_defeated() {
            return self.finish(Outcome::Victory);
        }
        if status.is_failure() {
            return self.finish(Outcome::Stranded);
        }
        None
    }

    /// Plays until the session ends and reports on it.
    pub fn run(&mut self) -> SimulationReport {
        let (name, rooms) = {
            let hero = self.world.hero.borrow();
            (hero.name.clone(), self.world.dungeon.borrow().len())
        };
        info!(target: TARGET, hero = %name, rooms, seed = self.config.seed, "game started");
        self.bus.publish(
            Event::new(EventKind::GameStarted)
                .with("hero", name)
                .with("rooms", rooms)
                .with("seed", self.config.seed.to_string())
                .with("curse", self.curse.is_some()),
        );

        let outcome = loop {
            if let Some(outcome) = self.run_turn() {
                break outcome;
            }
        };

        info!(target: TARGET, %outcome, turns = self.turn, "game ended");
        self.bus.publish(
            Event::new(EventKind::GameEnded)
                .with("outcome", outcome.to_string())
                .with("turns", self.turn)
                .with("victory", outcome == Outcome::Victory),
        );
        self.report()
    }

    pub fn report(&self) -> SimulationReport {
        let hero = self.world.hero.borrow();
        SimulationReport {
            seed: self.config.seed,
            turns: self.turn,
            outcome: self.outcome,
            victory: self.outcome == Some(Outcome::Victory),
            hero: HeroSummary::from(&*hero),
            rooms_visited: hero.visited_rooms.len(),
            rooms_total: self.world.dungeon.borrow().len(),
            curse_actions: self.curse.as_ref().map_or(0, AutoCurse::performed),
            events: self.bus.history_len(),
            stats: self.stats.snapshot(),
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Option<Outcome> {
        debug!(target: TARGET, %outcome, turn = self.turn, "session over");
        self.outcome = Some(outcome);
        self.outcome
    }

    /// Announces a death no core reported. Returns whether the hero is dead.
    fn hero_dead(&self) -> bool {
        let (alive, name) = {
            let hero = self.world.hero.borrow();
            (hero.is_alive(), hero.name.clone())
        };
        if alive {
            return false;
        }
        if !self.hero_death_seen.get() {
            self.bus
                .publish(Event::new(EventKind::HeroDied).with("hero", name));
        }
        true
    }

    fn tick_enemies(&mut self) {
        let Some(room_id) = self.world.hero.borrow().current_room else {
            return;
        };
        let (room_kind, roster) = {
            let dungeon = self.world.dungeon.borrow();
            let Some(room) = dungeon.room(room_id) else {
                return;
            };
            (room.kind, room.enemy_ids().collect::<Vec<_>>())
        };

        for id in roster {
            let alive = self
                .world
                .dungeon
                .borrow()
                .enemy(id)
                .is_some_and(|enemy| enemy.is_alive());
            if !alive {
                continue;
            }
            let seed = self.rng.next_u64();
            if !self.enemy_cores.contains_key(&id) {
                let behavior = {
                    let dungeon = self.world.dungeon.borrow();
                    let Some(enemy) = dungeon.enemy(id) else {
                        continue;
                    };
                    EnemyBehavior::for_enemy(enemy, room_kind, &mut self.rng)
                };
                debug!(target: TARGET, enemy = %id, %behavior, "enemy core created");
                self.enemy_cores
                    .insert(id, EnemyCore::new(id, behavior, self.bus.clone()));
            }
            let Some(core) = self.enemy_cores.get(&id) else {
                continue;
            };
            let mut ctx = core.context(&self.world, seed);
            core.tick(&mut ctx);

            if !self.world.hero.borrow().is_alive() {
                break;
            }
        }
    }

    fn living_enemies(&self, room: RoomId) -> usize {
        self.world
            .dungeon
            .borrow()
            .room(room)
            .map_or(0, |room| room.living_enemies().count())
    }

    fn boss_defeated(&self) -> bool {
        let dungeon = self.world.dungeon.borrow();
        let hero = self.world.hero.borrow();
        let mut bosses = dungeon.rooms().filter(|room| room.kind == RoomKind::Boss).peekable();
        bosses.peek().is_some()
            && bosses.all(|room| hero.has_visited(room.id) && !room.has_living_enemies())
    }
}
