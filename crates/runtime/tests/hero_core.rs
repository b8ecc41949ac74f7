use std::collections::BTreeSet;

use behavior_tree::Status;
use game_core::{
    Dungeon, Enemy, EnemyId, EnemyKind, GameConfig, Hero, Item, ItemKind, ItemQuality, Room,
    RoomId, RoomKind, Trap, TrapKind,
};
use runtime::{EventBus, EventKind, HeroCore, World};

const ENTRANCE: RoomId = RoomId(0);
const NEXT: RoomId = RoomId(1);

fn two_rooms(entrance: Room) -> Dungeon {
    let mut dungeon = Dungeon::new();
    dungeon.add_room(entrance).unwrap();
    dungeon.add_room(Room::new(NEXT, RoomKind::Normal)).unwrap();
    dungeon.connect(ENTRANCE, NEXT).unwrap();
    dungeon
}

fn standing_in_entrance(hero: Hero) -> Hero {
    let mut hero = hero;
    hero.enter_room(ENTRANCE);
    hero
}

fn core(world: &World, bus: &EventBus, config: &GameConfig) -> HeroCore {
    seeded_core(world, bus, config, 7)
}

fn seeded_core(world: &World, bus: &EventBus, config: &GameConfig, seed: u64) -> HeroCore {
    HeroCore::new(
        world.hero.clone(),
        world.dungeon.clone(),
        bus.clone(),
        config,
        seed,
    )
}

/// Hub room 0 connected to every room in `neighbours`; the hero stands in
/// the hub and has already seen `visited`.
fn hub(neighbours: &[u32], visited: &[u32]) -> World {
    let mut dungeon = Dungeon::new();
    dungeon.add_room(Room::new(ENTRANCE, RoomKind::Entrance)).unwrap();
    for &id in neighbours {
        dungeon.add_room(Room::new(RoomId(id), RoomKind::Normal)).unwrap();
        dungeon.connect(ENTRANCE, RoomId(id)).unwrap();
    }
    let mut hero = standing_in_entrance(Hero::new("Hero"));
    for &id in visited {
        hero.enter_room(RoomId(id));
    }
    hero.current_room = Some(ENTRANCE);
    World::new(dungeon, hero)
}

/// Where the hero goes from the hub, for each seed.
fn destinations(neighbours: &[u32], visited: &[u32]) -> BTreeSet<u32> {
    (0..32)
        .map(|seed| {
            let world = hub(neighbours, visited);
            let bus = EventBus::new();
            let mut core = seeded_core(&world, &bus, &GameConfig::default(), seed);
            assert_eq!(core.tick(), Status::Success);
            let room = world.hero.borrow().current_room.unwrap();
            room.0
        })
        .collect()
}

#[test]
fn hero_and_enemy_trade_blows() {
    let mut room = Room::new(ENTRANCE, RoomKind::Entrance);
    let enemy = room.add_enemy(Enemy::new(EnemyKind::Goblin, "Goblin", 10, 3, 0));
    let world = World::new(
        two_rooms(room),
        standing_in_entrance(Hero::new("Hero").with_stats(10, 5, 0)),
    );
    let bus = EventBus::new();
    let mut hero = core(&world, &bus, &GameConfig::default());

    assert_eq!(hero.tick(), Status::Success);

    assert_eq!(world.dungeon.borrow().enemy(enemy).unwrap().health, 5);
    assert_eq!(world.hero.borrow().health, 7);
    assert_eq!(bus.count(EventKind::HeroAttacked), 1);
    assert_eq!(bus.count(EventKind::HeroDamaged), 1);
    assert_eq!(hero.target(), Some(enemy));
}

#[test]
fn slain_enemy_does_not_strike_back() {
    let mut room = Room::new(ENTRANCE, RoomKind::Entrance);
    room.add_enemy(Enemy::new(EnemyKind::Goblin, "Goblin", 5, 50, 0));
    let world = World::new(two_rooms(room), standing_in_entrance(Hero::new("Hero")));
    let bus = EventBus::new();
    let mut hero = core(&world, &bus, &GameConfig::default());

    assert_eq!(hero.tick(), Status::Success);

    assert_eq!(world.hero.borrow().health, Hero::DEFAULT_HEALTH);
    assert_eq!(bus.count(EventKind::EnemyDied), 1);
    assert_eq!(bus.count(EventKind::HeroDamaged), 0);
    assert_eq!(hero.target(), None);
}

#[test]
fn target_sticks_until_it_dies() {
    let mut room = Room::new(ENTRANCE, RoomKind::Entrance);
    let weak = room.add_enemy(Enemy::new(EnemyKind::Goblin, "Goblin", 100, 5, 0));
    let strong = room.add_enemy(Enemy::new(EnemyKind::Orc, "Orc", 100, 8, 0));
    let world = World::new(
        two_rooms(room),
        standing_in_entrance(Hero::new("Hero").with_stats(1000, 10, 0)),
    );
    let bus = EventBus::new();
    let mut hero = core(&world, &bus, &GameConfig::default());

    hero.tick();
    assert_eq!(hero.target(), Some(strong));

    world.dungeon.borrow_mut().enemy_mut(weak).unwrap().attack = 40;
    hero.tick();
    assert_eq!(hero.target(), Some(strong));
    assert_eq!(world.dungeon.borrow().enemy(strong).unwrap().health, 80);
    assert_eq!(world.dungeon.borrow().enemy(weak).unwrap().health, 100);
}

#[test]
fn ties_go_to_the_first_enemy() {
    let mut room = Room::new(ENTRANCE, RoomKind::Entrance);
    let first = room.add_enemy(Enemy::new(EnemyKind::Skeleton, "Skeleton", 50, 9, 0));
    room.add_enemy(Enemy::new(EnemyKind::Skeleton, "Skeleton", 50, 9, 0));
    let world = World::new(two_rooms(room), standing_in_entrance(Hero::new("Hero")));
    let bus = EventBus::new();
    let mut hero = core(&world, &bus, &GameConfig::default());

    hero.tick();
    assert_eq!(hero.target(), Some(first));
}

#[test]
fn mutated_survivor_raises_suspicion() {
    let mut room = Room::new(ENTRANCE, RoomKind::Entrance);
    let id = room.add_enemy(Enemy::new(EnemyKind::Orc, "Orc", 200, 5, 0));
    room.enemy_mut(id).unwrap().mutate();
    let world = World::new(two_rooms(room), standing_in_entrance(Hero::new("Hero")));
    let bus = EventBus::new();
    let mut hero = core(&world, &bus, &GameConfig::default());

    hero.tick();

    assert_eq!(world.hero.borrow().suspicion, GameConfig::SUSPICION_PER_ANOMALY);
    let raised = bus.history(Some(EventKind::SuspicionIncreased));
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].int("level"), Some(5));
}

#[test]
fn critical_hero_drinks_a_potion() {
    let mut hero = standing_in_entrance(Hero::new("Hero").with_health(20));
    hero.inventory
        .push(Item::new(ItemKind::HealthPotion, "Health Potion", 30));
    let world = World::new(two_rooms(Room::new(ENTRANCE, RoomKind::Entrance)), hero);
    let bus = EventBus::new();
    let mut core = core(&world, &bus, &GameConfig::default());

    assert_eq!(core.tick(), Status::Success);

    let hero = world.hero.borrow();
    assert_eq!(hero.health, 50);
    assert!(hero.inventory.is_empty());
    assert_eq!(bus.count(EventKind::HeroUsedItem), 1);
}

#[test]
fn critical_hero_without_potion_falls_through_to_exploring() {
    let world = World::new(
        two_rooms(Room::new(ENTRANCE, RoomKind::Entrance)),
        standing_in_entrance(Hero::new("Hero").with_health(10)),
    );
    let bus = EventBus::new();
    let mut core = core(&world, &bus, &GameConfig::default());

    assert_eq!(core.tick(), Status::Success);
    assert_eq!(world.hero.borrow().current_room, Some(NEXT));
    assert_eq!(bus.count(EventKind::HeroUsedItem), 0);
}

fn cursed_loot_world() -> World {
    let mut room = Room::new(ENTRANCE, RoomKind::Entrance);
    room.add_item(Item::new(ItemKind::Weapon, "Sword", 6).with_quality(ItemQuality::Cursed));
    let mut hero = standing_in_entrance(Hero::new("Hero"));
    hero.increase_suspicion(60);
    World::new(two_rooms(room), hero)
}

#[test]
fn suspicious_hero_refuses_dubious_loot() {
    let world = cursed_loot_world();
    let bus = EventBus::new();
    let config = GameConfig::default().with_cautious_loot_chance(1.0);
    let mut core = core(&world, &bus, &config);

    assert_eq!(core.tick(), Status::Success);

    assert!(world.hero.borrow().inventory.is_empty());
    assert!(world.dungeon.borrow().room(ENTRANCE).unwrap().items.is_empty());
    let looted = bus.history(Some(EventKind::HeroLooted));
    assert_eq!(looted[0].text("item"), Some("none"));
    assert_eq!(looted[0].text("reason"), Some("suspicious"));
    assert_eq!(world.hero.borrow().suspicion, 60);
}

#[test]
fn careless_hero_takes_dubious_loot() {
    let world = cursed_loot_world();
    let bus = EventBus::new();
    let config = GameConfig::default().with_cautious_loot_chance(0.0);
    let mut core = core(&world, &bus, &config);

    assert_eq!(core.tick(), Status::Success);

    let hero = world.hero.borrow();
    assert_eq!(hero.inventory.len(), 1);
    assert_eq!(hero.suspicion, 65);
    assert_eq!(bus.history(Some(EventKind::HeroLooted))[0].text("item"), Some("Sword"));
}

#[test]
fn first_tick_enters_the_dungeon() {
    let world = World::new(
        two_rooms(Room::new(ENTRANCE, RoomKind::Entrance)),
        Hero::new("Hero"),
    );
    let bus = EventBus::new();
    let mut core = core(&world, &bus, &GameConfig::default());

    assert_eq!(core.tick(), Status::Success);

    assert_eq!(world.hero.borrow().current_room, Some(ENTRANCE));
    assert!(world.dungeon.borrow().room(ENTRANCE).unwrap().visited);
    let entered = bus.history(Some(EventKind::RoomEntered));
    assert_eq!(entered.len(), 1);
    assert_eq!(entered[0].int("room"), Some(0));
    assert_eq!(bus.count(EventKind::HeroMoved), 0);
}

#[test]
fn crowded_trap_room_hurts_and_alarms() {
    let mut dungeon = two_rooms(Room::new(ENTRANCE, RoomKind::Entrance));
    {
        let next = dungeon.room_mut(NEXT).unwrap();
        for kind in [TrapKind::Spike, TrapKind::Arrow, TrapKind::Fire] {
            next.add_trap(Trap::new(kind, 10));
        }
    }
    let world = World::new(dungeon, standing_in_entrance(Hero::new("Hero")));
    let bus = EventBus::new();
    let mut core = core(&world, &bus, &GameConfig::default());

    assert_eq!(core.tick(), Status::Success);

    let hero = world.hero.borrow();
    assert_eq!(hero.current_room, Some(NEXT));
    assert_eq!(hero.health, 85);
    assert_eq!(hero.suspicion, 15);
    assert_eq!(bus.count(EventKind::TrapTriggered), 3);
    assert_eq!(bus.count(EventKind::HeroMoved), 1);
    assert_eq!(world.dungeon.borrow().room(NEXT).unwrap().armed_trap_count(), 0);
}

#[test]
fn lone_trap_goes_unnoticed() {
    let mut dungeon = two_rooms(Room::new(ENTRANCE, RoomKind::Entrance));
    dungeon
        .room_mut(NEXT)
        .unwrap()
        .add_trap(Trap::new(TrapKind::Poison, 3));
    let world = World::new(dungeon, standing_in_entrance(Hero::new("Hero")));
    let bus = EventBus::new();
    let mut core = core(&world, &bus, &GameConfig::default());

    core.tick();

    let hero = world.hero.borrow();
    assert_eq!(hero.health, 99);
    assert_eq!(hero.suspicion, 0);
    assert_eq!(bus.count(EventKind::SuspicionIncreased), 0);
}

#[test]
fn dead_end_fails() {
    let mut dungeon = Dungeon::new();
    dungeon.add_room(Room::new(ENTRANCE, RoomKind::Entrance)).unwrap();
    let world = World::new(dungeon, standing_in_entrance(Hero::new("Hero")));
    let bus = EventBus::new();
    let mut core = core(&world, &bus, &GameConfig::default());

    assert_eq!(core.tick(), Status::Failure);
}

#[test]
fn dead_hero_does_nothing() {
    let mut room = Room::new(ENTRANCE, RoomKind::Entrance);
    let enemy: EnemyId = room.add_enemy(Enemy::new(EnemyKind::Goblin, "Goblin", 10, 3, 0));
    let world = World::new(
        two_rooms(room),
        standing_in_entrance(Hero::new("Hero").with_health(0)),
    );
    let bus = EventBus::new();
    let mut core = core(&world, &bus, &GameConfig::default());

    assert_eq!(core.tick(), Status::Failure);
    assert_eq!(world.dungeon.borrow().enemy(enemy).unwrap().health, 10);
    assert_eq!(bus.history_len(), 0);
}

#[test]
fn exploration_prefers_unvisited_rooms() {
    let reached = destinations(&[1, 2, 3], &[1]);
    assert_eq!(reached, BTreeSet::from([2, 3]));
}

#[test]
fn fully_explored_hub_is_revisited_at_random() {
    let reached = destinations(&[1, 2], &[1, 2]);
    assert_eq!(reached, BTreeSet::from([1, 2]));
}

#[test]
fn nan_loot_caution_does_not_panic() {
    let world = cursed_loot_world();
    let bus = EventBus::new();
    let mut config = GameConfig::default();
    config.cautious_loot_chance = f64::NAN;
    let mut core = core(&world, &bus, &config);

    assert_eq!(core.tick(), Status::Success);
    assert!(world.dungeon.borrow().room(ENTRANCE).unwrap().items.is_empty());
}
