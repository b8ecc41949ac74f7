//! Condition and action nodes of the hero's tree.
//!
//! Every action releases its borrows of the hero and the dungeon before it
//! publishes, so subscribers always see a consistent world.

use behavior_tree::{Behavior, Status};
use game_core::{GameConfig, RoomId, strike_damage};
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use super::HeroContext;
use crate::events::{Event, EventKind};

const TARGET: &str = "runtime::ai::hero";

/// Health strictly below the critical share of max health.
pub struct IsHealthCritical;

impl Behavior<HeroContext> for IsHealthCritical {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        ctx.hero.borrow().is_critical().into()
    }

    fn name(&self) -> &str {
        "is_health_critical"
    }
}

/// Drinks the first potion that is not cursed.
pub struct DrinkPotion;

impl Behavior<HeroContext> for DrinkPotion {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        let (name, potion, health) = {
            let mut hero = ctx.hero.borrow_mut();
            let potion = hero.use_health_potion();
            (hero.name.clone(), potion, hero.health)
        };
        let Some(potion) = potion else {
            return Status::Failure;
        };

        debug!(target: TARGET, hero = %name, health, "drank potion");
        ctx.publish(
            Event::new(EventKind::HeroUsedItem)
                .with("hero", name)
                .with("item", potion.kind.to_string())
                .with("quality", potion.quality.to_string())
                .with("health", health),
        );
        Status::Success
    }

    fn name(&self) -> &str {
        "drink_potion"
    }
}

pub struct EnemiesPresent;

impl Behavior<HeroContext> for EnemiesPresent {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        ctx.with_room(|room| room.has_living_enemies())
            .unwrap_or(false)
            .into()
    }

    fn name(&self) -> &str {
        "enemies_present"
    }
}

/// One exchange of blows with the selected target.
///
/// The hero strikes first. A target that dies does not strike back.
/// The result is `Success` even when the counter-strike kills the hero.
pub struct Fight;

struct Exchange {
    enemy: String,
    dealt: u32,
    killed: bool,
    counter_attack: u32,
    mutated: bool,
}

impl Behavior<HeroContext> for Fight {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        let Some(target) = ctx.select_target() else {
            return Status::Failure;
        };
        let (hero_name, attack, defense, suspicious) = {
            let hero = ctx.hero.borrow();
            (hero.name.clone(), hero.attack, hero.defense, hero.is_suspicious())
        };

        let exchange = {
            let mut dungeon = ctx.dungeon.borrow_mut();
            let Some(enemy) = dungeon.enemy_mut(target) else {
                ctx.target = None;
                return Status::Failure;
            };
            let damage = strike_damage(attack, enemy.defense);
            let dealt = enemy.apply_damage(damage);
            Exchange {
                enemy: enemy.name.clone(),
                dealt,
                killed: !enemy.is_alive(),
                counter_attack: enemy.attack,
                mutated: enemy.mutated,
            }
        };

        debug!(
            target: TARGET,
            hero = %hero_name,
            enemy = %exchange.enemy,
            damage = exchange.dealt,
            "hero strikes"
        );
        ctx.publish(
            Event::new(EventKind::HeroAttacked)
                .with("hero", hero_name.as_str())
                .with("enemy", exchange.enemy.as_str())
                .with("enemy_id", target)
                .with("damage", exchange.dealt),
        );

        if exchange.killed {
            ctx.target = None;
            debug!(target: TARGET, enemy = %exchange.enemy, "enemy slain");
            ctx.publish(
                Event::new(EventKind::EnemyDied)
                    .with("enemy", exchange.enemy)
                    .with("enemy_id", target)
                    .with("room", target.room),
            );
            return Status::Success;
        }

        if exchange.mutated && !suspicious {
            ctx.note_anomaly();
        }

        let (taken, health, alive) = {
            let mut hero = ctx.hero.borrow_mut();
            let taken = hero.apply_damage(strike_damage(exchange.counter_attack, defense));
            (taken, hero.health, hero.is_alive())
        };
        ctx.publish(
            Event::new(EventKind::HeroDamaged)
                .with("hero", hero_name.as_str())
                .with("enemy", exchange.enemy.as_str())
                .with("damage", taken)
                .with("health", health),
        );
        if !alive {
            info!(target: TARGET, hero = %hero_name, killed_by = %exchange.enemy, "hero died");
            ctx.publish(
                Event::new(EventKind::HeroDied)
                    .with("hero", hero_name)
                    .with("killed_by", exchange.enemy),
            );
        }
        Status::Success
    }

    fn name(&self) -> &str {
        "fight"
    }
}

pub struct ItemsPresent;

impl Behavior<HeroContext> for ItemsPresent {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        ctx.with_room(|room| !room.items.is_empty())
            .unwrap_or(false)
            .into()
    }

    fn name(&self) -> &str {
        "items_present"
    }
}

/// Takes the first item in the room.
///
/// A suspicious hero may instead leave a dubious item behind; it is removed
/// from the room either way.
pub struct Loot;

impl Behavior<HeroContext> for Loot {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        let Some(room_id) = ctx.current_room() else {
            return Status::Failure;
        };
        let item = {
            let mut dungeon = ctx.dungeon.borrow_mut();
            match dungeon.room_mut(room_id) {
                Some(room) if !room.items.is_empty() => room.items.remove(0),
                _ => return Status::Failure,
            }
        };
        let (hero_name, suspicious) = {
            let hero = ctx.hero.borrow();
            (hero.name.clone(), hero.is_suspicious())
        };

        if suspicious && !item.is_normal() && ctx.roll_caution() {
            debug!(target: TARGET, item = %item.name, quality = %item.quality, "left item behind");
            ctx.publish(
                Event::new(EventKind::HeroLooted)
                    .with("hero", hero_name)
                    .with("item", "none")
                    .with("refused", item.name)
                    .with("reason", "suspicious"),
            );
            return Status::Success;
        }

        if !item.is_normal() {
            ctx.note_anomaly();
        }
        let event = Event::new(EventKind::HeroLooted)
            .with("hero", hero_name)
            .with("item", item.name.as_str())
            .with("kind", item.kind.to_string())
            .with("value", item.value)
            .with("quality", item.quality.to_string());
        ctx.hero.borrow_mut().add_item(item);
        ctx.publish(event);
        Status::Success
    }

    fn name(&self) -> &str {
        "loot"
    }
}

/// True before the hero has entered the dungeon, or when the current room
/// has any exit.
pub struct CanExplore;

impl Behavior<HeroContext> for CanExplore {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        if ctx.current_room().is_none() {
            return Status::Success;
        }
        ctx.with_room(|room| !room.connections.is_empty())
            .unwrap_or(false)
            .into()
    }

    fn name(&self) -> &str {
        "can_explore"
    }
}

/// Moves to a neighbouring room, preferring unvisited ones, and springs
/// every armed trap in the destination.
pub struct Explore;

impl Explore {
    fn pick_destination(ctx: &mut HeroContext) -> Option<RoomId> {
        let connections = ctx.with_room(|room| room.connections.clone())?;
        let unvisited: Vec<RoomId> = {
            let hero = ctx.hero.borrow();
            connections
                .iter()
                .copied()
                .filter(|id| !hero.has_visited(*id))
                .collect()
        };
        let pool = if unvisited.is_empty() {
            &connections
        } else {
            &unvisited
        };
        pool.choose(ctx.rng()).copied()
    }

    /// Enters `destination`: marks it visited and fires its armed traps.
    fn arrive(ctx: &mut HeroContext, destination: RoomId) -> Status {
        let hero_name = ctx.hero_name();
        let defense = ctx.hero.borrow().defense;

        let (kind, fired, suspicious_room) = {
            let mut dungeon = ctx.dungeon.borrow_mut();
            let Some(room) = dungeon.room_mut(destination) else {
                warn!(target: TARGET, room = %destination, "destination does not exist");
                return Status::Failure;
            };
            room.visited = true;
            let suspicious_room = room.traps.len() > GameConfig::CROWDED_TRAP_COUNT || room.altered;
            let fired: Vec<_> = room
                .traps
                .iter_mut()
                .filter(|trap| trap.is_armed())
                .map(|trap| (trap.kind, trap.trigger()))
                .collect();
            (room.kind, fired, suspicious_room)
        };
        ctx.hero.borrow_mut().enter_room(destination);

        for (trap, raw) in fired {
            let (damage, health, alive) = {
                let mut hero = ctx.hero.borrow_mut();
                let damage = hero.apply_damage(strike_damage(raw, defense));
                (damage, hero.health, hero.is_alive())
            };
            debug!(target: TARGET, room = %destination, %trap, damage, "trap fired");
            if suspicious_room {
                ctx.note_anomaly();
            }
            ctx.publish(
                Event::new(EventKind::TrapTriggered)
                    .with("trap", trap.to_string())
                    .with("damage", damage)
                    .with("health", health)
                    .with("room", destination),
            );
            if !alive {
                info!(target: TARGET, hero = %hero_name, %trap, "hero died");
                ctx.publish(
                    Event::new(EventKind::HeroDied)
                        .with("hero", hero_name.as_str())
                        .with("killed_by", trap.to_string()),
                );
                break;
            }
        }

        ctx.publish(
            Event::new(EventKind::RoomEntered)
                .with("hero", hero_name)
                .with("room", destination)
                .with("type", kind.to_string()),
        );
        Status::Success
    }
}

impl Behavior<HeroContext> for Explore {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        let Some(from) = ctx.current_room() else {
            let Some(entrance) = ctx.dungeon.borrow().entrance() else {
                return Status::Failure;
            };
            debug!(target: TARGET, room = %entrance, "entering dungeon");
            return Self::arrive(ctx, entrance);
        };

        let Some(destination) = Self::pick_destination(ctx) else {
            return Status::Failure;
        };
        debug!(target: TARGET, from = %from, to = %destination, "moving");
        let status = Self::arrive(ctx, destination);
        if status.is_success() {
            ctx.publish(
                Event::new(EventKind::HeroMoved)
                    .with("hero", ctx.hero_name())
                    .with("from", from)
                    .with("to", destination),
            );
        }
        status
    }

    fn name(&self) -> &str {
        "explore"
    }
}
