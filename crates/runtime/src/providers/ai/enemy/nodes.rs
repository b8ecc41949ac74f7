//! Condition and action nodes of the enemy trees.

use behavior_tree::{Behavior, Status};
use game_core::{Enemy, EnemyKind, strike_damage};
use rand::Rng;
use tracing::{debug, info};

use super::EnemyContext;
use crate::events::{Event, EventKind};

const TARGET: &str = "runtime::ai::enemy";

/// Boss attack cycle: name and attack multiplier, advanced one step per use.
pub const BOSS_PATTERN: [(&str, f64); 4] = [
    ("Normal Attack", 1.0),
    ("Heavy Strike", 1.5),
    ("Sweeping Attack", 0.8),
    ("Devastating Blow", 2.0),
];
pub const ENRAGED_MULTIPLIER: f64 = 1.3;
pub const COORDINATION_BONUS: u32 = 2;
pub const HELP_BOOST_PERCENT: u32 = 10;
pub const TERRAIN_DEFENSE: u32 = 2;

// ============================================================================
// Conditions
// ============================================================================

pub struct CanAttack;

impl Behavior<EnemyContext> for CanAttack {
    fn tick(&self, ctx: &mut EnemyContext) -> Status {
        ctx.can_attack().into()
    }

    fn name(&self) -> &str {
        "can_attack"
    }
}

pub struct HeroPresent;

impl Behavior<EnemyContext> for HeroPresent {
    fn tick(&self, ctx: &mut EnemyContext) -> Status {
        ctx.hero_in_room().into()
    }

    fn name(&self) -> &str {
        "hero_present"
    }
}

/// Health strictly below the given percentage of max health.
pub struct HealthBelow(pub u32);

impl Behavior<EnemyContext> for HealthBelow {
    fn tick(&self, ctx: &mut EnemyContext) -> Status {
        ctx.with_enemy(|enemy| enemy.health_below_percent(self.0))
            .unwrap_or(false)
            .into()
    }

    fn name(&self) -> &str {
        "health_below"
    }
}

/// Health strictly above the given percentage of max health.
pub struct HealthAbove(pub u32);

impl Behavior<EnemyContext> for HealthAbove {
    fn tick(&self, ctx: &mut EnemyContext) -> Status {
        ctx.with_enemy(|enemy| enemy.health_above_percent(self.0))
            .unwrap_or(false)
            .into()
    }

    fn name(&self) -> &str {
        "health_above"
    }
}

pub struct HasAllies;

impl Behavior<EnemyContext> for HasAllies {
    fn tick(&self, ctx: &mut EnemyContext) -> Status {
        (!ctx.living_allies().is_empty()).into()
    }

    fn name(&self) -> &str {
        "has_allies"
    }
}

// ============================================================================
// Actions
// ============================================================================

struct Hit {
    enemy: String,
    kind: EnemyKind,
    hero: String,
    damage: u32,
    health: u32,
    killed: bool,
}

/// Strikes the hero with `attack`, mitigated by the hero's defense.
fn hit_hero(ctx: &EnemyContext, attack: u32) -> Option<Hit> {
    let (enemy, kind) = ctx.with_enemy(|enemy| (enemy.name.clone(), enemy.kind))?;
    let mut hero = ctx.hero.borrow_mut();
    let defense = hero.defense;
    let damage = hero.apply_damage(strike_damage(attack, defense));
    Some(Hit {
        enemy,
        kind,
        hero: hero.name.clone(),
        damage,
        health: hero.health,
        killed: !hero.is_alive(),
    })
}

fn announce_hit(ctx: &EnemyContext, hit: Hit, extra: impl FnOnce(Event) -> Event) {
    debug!(
        target: TARGET,
        enemy = %hit.enemy,
        damage = hit.damage,
        hero_health = hit.health,
        "enemy strikes"
    );
    ctx.publish(extra(
        Event::new(EventKind::EnemyAttacked)
            .with("enemy", hit.enemy.as_str())
            .with("enemy_id", ctx.enemy)
            .with("enemy_type", hit.kind.to_string())
            .with("target", hit.hero.as_str())
            .with("damage", hit.damage)
            .with("health", hit.health),
    ));
    if hit.killed {
        info!(target: TARGET, hero = %hit.hero, killed_by = %hit.enemy, "hero died");
        ctx.publish(
            Event::new(EventKind::HeroDied)
                .with("hero", hit.hero)
                .with("killed_by", hit.enemy),
        );
    }
}

/// Plain attack with the enemy's current attack.
pub struct Attack;

impl Behavior<EnemyContext> for Attack {
    fn tick(&self, ctx: &mut EnemyContext) -> Status {
        if !ctx.can_attack() {
            return Status::Failure;
        }
        let Some(attack) = ctx.with_enemy(|enemy| enemy.attack) else {
            return Status::Failure;
        };
        let Some(hit) = hit_hero(ctx, attack) else {
            return Status::Failure;
        };
        announce_hit(ctx, hit, |event| event);
        Status::Success
    }

    fn name(&self) -> &str {
        "attack"
    }
}

/// Attack boosted by every living ally in the room.
pub struct CoordinatedAttack;

impl Behavior<EnemyContext> for CoordinatedAttack {
    fn tick(&self, ctx: &mut EnemyContext) -> Status {
        if !ctx.can_attack() {
            return Status::Failure;
        }
        let allies = ctx.living_allies().len() as u32;
        let Some(attack) = ctx.with_enemy(|enemy| enemy.attack) else {
            return Status::Failure;
        };
        let Some(hit) = hit_hero(ctx, attack + COORDINATION_BONUS * allies) else {
            return Status::Failure;
        };
        announce_hit(ctx, hit, |event| {
            event.with("coordinated", true).with("allies_count", allies)
        });
        Status::Success
    }

    fn name(&self) -> &str {
        "coordinated_attack"
    }
}

/// Next step of the boss attack cycle.
pub struct SpecialAttack;

impl Behavior<EnemyContext> for SpecialAttack {
    fn tick(&self, ctx: &mut EnemyContext) -> Status {
        if !ctx.can_attack() {
            return Status::Failure;
        }
        let step = ctx.with_enemy_mut(|enemy| {
            let step = enemy.special_attack_step as usize % BOSS_PATTERN.len();
            enemy.special_attack_step = ((step + 1) % BOSS_PATTERN.len()) as u32;
            let (pattern, base) = BOSS_PATTERN[step];
            let multiplier = if enemy.enraged {
                base * ENRAGED_MULTIPLIER
            } else {
                base
            };
            (pattern, multiplier, enemy.scaled_attack(multiplier))
        });
        let Some((pattern, multiplier, attack)) = step else {
            return Status::Failure;
        };
        let Some(hit) = hit_hero(ctx, attack) else {
            return Status::Failure;
        };
        announce_hit(ctx, hit, |event| {
            event.with("pattern", pattern).with("multiplier", multiplier)
        });
        Status::Success
    }

    fn name(&self) -> &str {
        "special_attack"
    }
}

/// Announces a retreat. The enemy stays in its room.
pub struct Flee;

impl Behavior<EnemyContext> for Flee {
    fn tick(&self, ctx: &mut EnemyContext) -> Status {
        let enemy = ctx.enemy_name();
        debug!(target: TARGET, %enemy, "fleeing");
        ctx.publish(
            Event::new(EventKind::PlayerAction)
                .with("action", "enemy_flee")
                .with("enemy", enemy)
                .with("room", ctx.room),
        );
        Status::Success
    }

    fn name(&self) -> &str {
        "flee"
    }
}

/// Every other living ally gains a permanent attack boost. Boosts stack.
pub struct CallForHelp;

impl Behavior<EnemyContext> for CallForHelp {
    fn tick(&self, ctx: &mut EnemyContext) -> Status {
        let allies = ctx.living_allies();
        let enemy = ctx.enemy_name();
        debug!(target: TARGET, %enemy, allies = allies.len(), "calling for help");
        ctx.publish(
            Event::new(EventKind::PlayerAction)
                .with("action", "call_for_help")
                .with("enemy", enemy)
                .with("room", ctx.room)
                .with("allies_nearby", allies.len()),
        );

        let mut dungeon = ctx.dungeon.borrow_mut();
        for ally in allies {
            if let Some(ally) = dungeon.enemy_mut(ally) {
                ally.boost_attack(HELP_BOOST_PERCENT);
            }
        }
        Status::Success
    }

    fn name(&self) -> &str {
        "call_for_help"
    }
}

/// Permanent defense gain. Gains stack without bound.
pub struct UseTerrain;

impl Behavior<EnemyContext> for UseTerrain {
    fn tick(&self, ctx: &mut EnemyContext) -> Status {
        let Some((enemy, defense)) = ctx.with_enemy_mut(|enemy| {
            enemy.fortify(TERRAIN_DEFENSE);
            (enemy.name.clone(), enemy.defense)
        }) else {
            return Status::Failure;
        };
        ctx.publish(
            Event::new(EventKind::PlayerAction)
                .with("action", "use_terrain")
                .with("enemy", enemy)
                .with("defense_bonus", TERRAIN_DEFENSE)
                .with("defense", defense),
        );
        Status::Success
    }

    fn name(&self) -> &str {
        "use_terrain"
    }
}

/// Multiplies attack once and sets the enraged flag. Later ticks are no-ops
/// that still succeed.
pub struct Enrage;

impl Behavior<EnemyContext> for Enrage {
    fn tick(&self, ctx: &mut EnemyContext) -> Status {
        let Some((enraged, enemy, attack)) =
            ctx.with_enemy_mut(|enemy| (enemy.enrage(), enemy.name.clone(), enemy.attack))
        else {
            return Status::Failure;
        };
        if enraged {
            info!(target: TARGET, %enemy, attack, "boss enraged");
            ctx.publish(
                Event::new(EventKind::EnemyMutated)
                    .with("enemy", enemy)
                    .with("mutation", "enraged")
                    .with("attack_boost", 1.5)
                    .with("attack", attack),
            );
        }
        Status::Success
    }

    fn name(&self) -> &str {
        "enrage"
    }
}

/// Adds one or two minions to the room and to this tick's ally list.
pub struct SummonMinions;

impl SummonMinions {
    pub const HEALTH: u32 = 20;
    pub const ATTACK: u32 = 5;
    pub const DEFENSE: u32 = 1;

    pub fn minion(index: u32) -> Enemy {
        Enemy::new(
            EnemyKind::Skeleton,
            format!("Summoned Minion {index}"),
            Self::HEALTH,
            Self::ATTACK,
            Self::DEFENSE,
        )
        .as_summoned()
    }
}

impl Behavior<EnemyContext> for SummonMinions {
    fn tick(&self, ctx: &mut EnemyContext) -> Status {
        let summoner = ctx.enemy_name();
        let count: u32 = ctx.rng().gen_range(1..=2);
        for index in 1..=count {
            let minion = Self::minion(index);
            let name = minion.name.clone();
            let id = {
                let mut dungeon = ctx.dungeon.borrow_mut();
                let Some(room) = dungeon.room_mut(ctx.room) else {
                    return Status::Failure;
                };
                room.add_enemy(minion)
            };
            ctx.allies.push(id);
            debug!(target: TARGET, summoner = %summoner, minion = %name, "minion summoned");
            ctx.publish(
                Event::new(EventKind::EnemySpawned)
                    .with("enemy", name)
                    .with("enemy_id", id)
                    .with("summoned_by", summoner.as_str())
                    .with("room", ctx.room),
            );
        }
        Status::Success
    }

    fn name(&self) -> &str {
        "summon_minions"
    }
}
