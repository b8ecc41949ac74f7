use behavior_tree::Status;
use game_core::{Dungeon, Enemy, EnemyId, EnemyKind, Hero, Room, RoomId, RoomKind};
use runtime::providers::ai::enemy::nodes::{BOSS_PATTERN, SummonMinions};
use runtime::{EnemyBehavior, EnemyCore, EventBus, EventKind, World};

const LAIR: RoomId = RoomId(0);
const ELSEWHERE: RoomId = RoomId(1);

/// One room holding `enemies`, a second empty room, and a sturdy hero.
fn lair(enemies: Vec<Enemy>, hero_inside: bool) -> (World, Vec<EnemyId>) {
    let mut room = Room::new(LAIR, RoomKind::Normal);
    let ids = enemies.into_iter().map(|enemy| room.add_enemy(enemy)).collect();
    let mut dungeon = Dungeon::new();
    dungeon.add_room(room).unwrap();
    dungeon
        .add_room(Room::new(ELSEWHERE, RoomKind::Entrance))
        .unwrap();
    dungeon.connect(LAIR, ELSEWHERE).unwrap();

    let mut hero = Hero::new("Hero").with_stats(1000, 15, 0);
    hero.enter_room(if hero_inside { LAIR } else { ELSEWHERE });
    (World::new(dungeon, hero), ids)
}

fn tick(world: &World, bus: &EventBus, id: EnemyId, behavior: EnemyBehavior) -> Status {
    let core = EnemyCore::new(id, behavior, bus.clone());
    let mut ctx = core.context(world, 3);
    core.tick(&mut ctx)
}

fn actions(bus: &EventBus) -> Vec<String> {
    bus.history(Some(EventKind::PlayerAction))
        .iter()
        .filter_map(|event| event.text("action").map(str::to_owned))
        .collect()
}

#[test]
fn aggressive_enemy_idles_without_hero() {
    let (world, ids) = lair(vec![Enemy::new(EnemyKind::Orc, "Orc", 50, 12, 5)], false);
    let bus = EventBus::new();

    assert_eq!(tick(&world, &bus, ids[0], EnemyBehavior::Aggressive), Status::Success);
    assert_eq!(bus.history_len(), 0);
    assert_eq!(world.hero.borrow().health, 1000);
}

#[test]
fn aggressive_enemy_attacks_present_hero() {
    let (world, ids) = lair(vec![Enemy::new(EnemyKind::Orc, "Orc", 50, 12, 5)], true);
    let bus = EventBus::new();

    assert_eq!(tick(&world, &bus, ids[0], EnemyBehavior::Aggressive), Status::Success);
    assert_eq!(world.hero.borrow().health, 988);
    let attacks = bus.history(Some(EventKind::EnemyAttacked));
    assert_eq!(attacks.len(), 1);
    assert_eq!(attacks[0].int("damage"), Some(12));
}

#[test]
fn wounded_defender_retreats() {
    let (world, ids) = lair(
        vec![Enemy::new(EnemyKind::Skeleton, "Skeleton", 100, 10, 3).with_health(20)],
        true,
    );
    let bus = EventBus::new();

    assert_eq!(tick(&world, &bus, ids[0], EnemyBehavior::Defensive), Status::Success);
    assert_eq!(actions(&bus), ["enemy_flee"]);
    assert_eq!(bus.count(EventKind::EnemyAttacked), 0);
}

#[test]
fn healthy_defender_attacks_present_hero() {
    let (world, ids) = lair(vec![Enemy::new(EnemyKind::Skeleton, "Skeleton", 40, 10, 3)], true);
    let bus = EventBus::new();

    assert_eq!(tick(&world, &bus, ids[0], EnemyBehavior::Defensive), Status::Success);
    assert_eq!(world.hero.borrow().health, 990);
    assert_eq!(bus.count(EventKind::EnemyAttacked), 1);
    assert!(actions(&bus).is_empty());
}

#[test]
fn defender_holds_ground_without_hero() {
    let (world, ids) = lair(vec![Enemy::new(EnemyKind::Skeleton, "Skeleton", 40, 10, 3)], false);
    let bus = EventBus::new();

    assert_eq!(tick(&world, &bus, ids[0], EnemyBehavior::Defensive), Status::Success);
    assert_eq!(bus.history_len(), 0);
}

#[test]
fn coward_calls_for_help_then_flees() {
    let (world, ids) = lair(
        vec![
            Enemy::new(EnemyKind::Goblin, "Goblin", 100, 8, 2).with_health(40),
            Enemy::new(EnemyKind::Orc, "Orc", 50, 10, 5),
        ],
        true,
    );
    let bus = EventBus::new();

    assert_eq!(tick(&world, &bus, ids[0], EnemyBehavior::Cowardly), Status::Success);

    assert_eq!(actions(&bus), ["call_for_help", "enemy_flee"]);
    assert_eq!(world.dungeon.borrow().enemy(ids[1]).unwrap().attack, 11);
    assert_eq!(world.hero.borrow().health, 1000);
}

#[test]
fn healthy_coward_hides_when_it_cannot_reach_the_hero() {
    let (world, ids) = lair(vec![Enemy::new(EnemyKind::Goblin, "Goblin", 30, 8, 2)], false);
    let bus = EventBus::new();

    assert_eq!(tick(&world, &bus, ids[0], EnemyBehavior::Cowardly), Status::Success);
    assert_eq!(bus.history_len(), 0);
}

#[test]
fn tactician_coordinates_with_allies() {
    let (world, ids) = lair(
        vec![
            Enemy::new(EnemyKind::Skeleton, "Skeleton", 40, 10, 3),
            Enemy::new(EnemyKind::Goblin, "Goblin", 30, 8, 2),
            Enemy::new(EnemyKind::Goblin, "Goblin", 30, 8, 2),
        ],
        true,
    );
    let bus = EventBus::new();

    assert_eq!(tick(&world, &bus, ids[0], EnemyBehavior::Tactical), Status::Success);

    let attack = &bus.history(Some(EventKind::EnemyAttacked))[0];
    assert_eq!(attack.int("damage"), Some(14));
    assert_eq!(attack.int("allies_count"), Some(2));
    assert_eq!(world.hero.borrow().health, 986);
}

#[test]
fn dead_allies_do_not_coordinate() {
    let (world, ids) = lair(
        vec![
            Enemy::new(EnemyKind::Skeleton, "Skeleton", 40, 10, 3),
            Enemy::new(EnemyKind::Goblin, "Goblin", 30, 8, 2).with_health(0),
        ],
        true,
    );
    let bus = EventBus::new();

    tick(&world, &bus, ids[0], EnemyBehavior::Tactical);

    let attack = &bus.history(Some(EventKind::EnemyAttacked))[0];
    assert_eq!(attack.int("damage"), Some(10));
    assert_eq!(attack.get("coordinated"), None);
}

#[test]
fn idle_tactician_fortifies_and_stacks() {
    let (world, ids) = lair(vec![Enemy::new(EnemyKind::Skeleton, "Skeleton", 40, 10, 3)], false);
    let bus = EventBus::new();

    tick(&world, &bus, ids[0], EnemyBehavior::Tactical);
    tick(&world, &bus, ids[0], EnemyBehavior::Tactical);

    assert_eq!(world.dungeon.borrow().enemy(ids[0]).unwrap().defense, 7);
    assert_eq!(actions(&bus), ["use_terrain", "use_terrain"]);
}

#[test]
fn boss_cycles_through_its_pattern() {
    let (world, ids) = lair(vec![Enemy::new(EnemyKind::Dragon, "Dragon", 150, 20, 10)], true);
    let bus = EventBus::new();
    let core = EnemyCore::new(ids[0], EnemyBehavior::Boss, bus.clone());

    for seed in 0..5 {
        let mut ctx = core.context(&world, seed);
        assert_eq!(core.tick(&mut ctx), Status::Success);
    }

    let damage: Vec<i64> = bus
        .history(Some(EventKind::EnemyAttacked))
        .iter()
        .filter_map(|event| event.int("damage"))
        .collect();
    assert_eq!(damage, [20, 30, 16, 40, 20]);
    let patterns: Vec<String> = bus
        .history(Some(EventKind::EnemyAttacked))
        .iter()
        .filter_map(|event| event.text("pattern").map(str::to_owned))
        .collect();
    assert_eq!(patterns[..4], BOSS_PATTERN.map(|(name, _)| name.to_owned()));
}

#[test]
fn wounded_boss_enrages_once_and_summons() {
    let (world, ids) = lair(
        vec![Enemy::new(EnemyKind::Dragon, "Dragon", 100, 25, 10).with_health(25)],
        true,
    );
    let bus = EventBus::new();
    let core = EnemyCore::new(ids[0], EnemyBehavior::Boss, bus.clone());

    let mut ctx = core.context(&world, 11);
    assert_eq!(core.tick(&mut ctx), Status::Success);

    let boss = world.dungeon.borrow().enemy(ids[0]).unwrap().clone();
    assert!(boss.enraged);
    assert_eq!(boss.attack, 37);
    let summoned = bus.count(EventKind::EnemySpawned);
    assert!((1..=2).contains(&summoned));
    assert_eq!(ctx.allies.len(), summoned);
    let room = world.dungeon.borrow().room(LAIR).unwrap().clone();
    assert_eq!(room.enemies.len(), 1 + summoned);
    let minion = &room.enemies[1];
    assert_eq!(minion.name, "Summoned Minion 1");
    assert_eq!(minion.health, SummonMinions::HEALTH);
    assert_eq!(bus.count(EventKind::EnemyMutated), 1);
    assert_eq!(bus.count(EventKind::EnemyAttacked), 0);

    let mut ctx = core.context(&world, 12);
    core.tick(&mut ctx);

    assert_eq!(world.dungeon.borrow().enemy(ids[0]).unwrap().attack, 37);
    assert_eq!(bus.count(EventKind::EnemyMutated), 1);
    assert!(bus.count(EventKind::EnemySpawned) > summoned);
}

#[test]
fn dead_enemy_skips_its_tick() {
    let (world, ids) = lair(
        vec![Enemy::new(EnemyKind::Orc, "Orc", 50, 12, 5).with_health(0)],
        true,
    );
    let bus = EventBus::new();

    assert_eq!(tick(&world, &bus, ids[0], EnemyBehavior::Aggressive), Status::Failure);
    assert_eq!(bus.history_len(), 0);
}

#[test]
fn killing_blow_announces_hero_death() {
    let (world, ids) = lair(vec![Enemy::new(EnemyKind::Orc, "Orc", 50, 12, 5)], true);
    world.hero.borrow_mut().health = 5;
    let bus = EventBus::new();

    tick(&world, &bus, ids[0], EnemyBehavior::Aggressive);

    assert!(!world.hero.borrow().is_alive());
    let died = bus.history(Some(EventKind::HeroDied));
    assert_eq!(died.len(), 1);
    assert_eq!(died[0].text("killed_by"), Some("Orc"));
}
