//! Ready-made trees for the five enemy behaviors.
//!
//! ```text
//! aggressive: Selector[Sequence[can_attack, attack], idle]
//! defensive:  Selector[Sequence[health < 30%, flee],
//!                      Sequence[hero_present, can_attack, attack], defend]
//! cowardly:   Selector[Sequence[health < 50%, call_for_help, flee],
//!                      Sequence[can_attack, health > 50%, attack], hide]
//! tactical:   Selector[Sequence[has_allies, can_attack, coordinated_attack],
//!                      Sequence[can_attack, attack],
//!                      Sequence[health < 50%, flee], use_terrain]
//! boss:       Selector[Sequence[health < 30%, enrage, summon_minions],
//!                      Sequence[can_attack, special_attack], intimidate]
//! ```

use behavior_tree::builder::{node, selector, sequence, succeed};
use behavior_tree::{Behavior, BehaviorTree};

use super::nodes::{
    Attack, CallForHelp, CanAttack, CoordinatedAttack, Enrage, Flee, HasAllies, HealthAbove,
    HealthBelow, HeroPresent, SpecialAttack, SummonMinions, UseTerrain,
};
use super::{EnemyBehavior, EnemyContext};

type Node = Box<dyn Behavior<EnemyContext>>;

pub const BOSS_ENRAGE_PERCENT: u32 = 30;
pub const COWARD_HEALTHY_PERCENT: u32 = 50;

pub fn tree_for(behavior: EnemyBehavior) -> BehaviorTree<EnemyContext> {
    BehaviorTree::new(match behavior {
        EnemyBehavior::Aggressive => aggressive(),
        EnemyBehavior::Defensive => defensive(),
        EnemyBehavior::Cowardly => cowardly(),
        EnemyBehavior::Tactical => tactical(),
        EnemyBehavior::Boss => boss(),
    })
}

pub fn aggressive() -> Node {
    selector(
        "aggressive",
        vec![
            sequence("attack", vec![node(CanAttack), node(Attack)]),
            succeed("idle"),
        ],
    )
}

pub fn defensive() -> Node {
    let flee_below = EnemyBehavior::Defensive.flee_threshold();
    selector(
        "defensive",
        vec![
            sequence("retreat", vec![node(HealthBelow(flee_below)), node(Flee)]),
            sequence(
                "defend",
                vec![node(HeroPresent), node(CanAttack), node(Attack)],
            ),
            succeed("hold_ground"),
        ],
    )
}

pub fn cowardly() -> Node {
    let flee_below = EnemyBehavior::Cowardly.flee_threshold();
    selector(
        "cowardly",
        vec![
            sequence(
                "flee",
                vec![node(HealthBelow(flee_below)), node(CallForHelp), node(Flee)],
            ),
            sequence(
                "cautious_attack",
                vec![
                    node(CanAttack),
                    node(HealthAbove(COWARD_HEALTHY_PERCENT)),
                    node(Attack),
                ],
            ),
            succeed("hide"),
        ],
    )
}

pub fn tactical() -> Node {
    let flee_below = EnemyBehavior::Tactical.flee_threshold();
    selector(
        "tactical",
        vec![
            sequence(
                "coordinated_attack",
                vec![node(HasAllies), node(CanAttack), node(CoordinatedAttack)],
            ),
            sequence("focused_attack", vec![node(CanAttack), node(Attack)]),
            sequence("retreat", vec![node(HealthBelow(flee_below)), node(Flee)]),
            node(UseTerrain),
        ],
    )
}

pub fn boss() -> Node {
    selector(
        "boss",
        vec![
            sequence(
                "enrage",
                vec![
                    node(HealthBelow(BOSS_ENRAGE_PERCENT)),
                    node(Enrage),
                    node(SummonMinions),
                ],
            ),
            sequence("special_attack", vec![node(CanAttack), node(SpecialAttack)]),
            succeed("intimidate"),
        ],
    )
}
