//! Session statistics collected from the event bus.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::curse::CURSE_SOURCE;
use crate::events::{Event, EventBus, EventKind, SubscriptionId};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub enemies_killed: u32,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub items_looted: u32,
    pub items_refused: u32,
    pub potions_used: u32,
    pub traps_triggered: u32,
    pub rooms_entered: u32,
    pub minions_summoned: u32,
    pub curse_actions: u32,
    pub peak_suspicion: u32,
}

impl SessionStats {
    /// Folds one event into the counters.
    pub fn record(&mut self, event: &Event) {
        let amount = |key: &str| event.int(key).and_then(|v| u64::try_from(v).ok()).unwrap_or(0);
        match event.kind() {
            EventKind::HeroAttacked => self.damage_dealt += amount("damage"),
            EventKind::EnemyDied => self.enemies_killed += 1,
            EventKind::HeroDamaged | EventKind::EnemyAttacked => {
                self.damage_taken += amount("damage")
            }
            EventKind::TrapTriggered => {
                self.traps_triggered += 1;
                self.damage_taken += amount("damage");
            }
            EventKind::HeroLooted => match event.text("item") {
                Some("none") => self.items_refused += 1,
                _ => self.items_looted += 1,
            },
            EventKind::HeroUsedItem => self.potions_used += 1,
            EventKind::RoomEntered => self.rooms_entered += 1,
            EventKind::EnemySpawned => self.minions_summoned += 1,
            EventKind::PlayerAction => {
                if event.text("source") == Some(CURSE_SOURCE) {
                    self.curse_actions += 1;
                }
            }
            EventKind::SuspicionIncreased => {
                let level = amount("level") as u32;
                self.peak_suspicion = self.peak_suspicion.max(level);
            }
            _ => {}
        }
    }
}

/// Keeps [`SessionStats`] up to date by subscribing to the bus.
pub struct StatsTracker {
    bus: EventBus,
    stats: Rc<RefCell<SessionStats>>,
    subscriptions: Vec<(EventKind, SubscriptionId)>,
}

impl StatsTracker {
    pub const TRACKED: [EventKind; 11] = [
        EventKind::HeroAttacked,
        EventKind::EnemyDied,
        EventKind::HeroDamaged,
        EventKind::EnemyAttacked,
        EventKind::TrapTriggered,
        EventKind::HeroLooted,
        EventKind::HeroUsedItem,
        EventKind::RoomEntered,
        EventKind::EnemySpawned,
        EventKind::PlayerAction,
        EventKind::SuspicionIncreased,
    ];

    pub fn attach(bus: &EventBus) -> Self {
        let stats = Rc::new(RefCell::new(SessionStats::default()));
        let subscriptions = Self::TRACKED
            .iter()
            .map(|&kind| {
                let stats = Rc::clone(&stats);
                let id = bus.subscribe(kind, move |_, event| stats.borrow_mut().record(event));
                (kind, id)
            })
            .collect();

        Self {
            bus: bus.clone(),
            stats,
            subscriptions,
        }
    }

    pub fn snapshot(&self) -> SessionStats {
        self.stats.borrow().clone()
    }

    /// Stops tracking and returns the final counters.
    pub fn detach(self) -> SessionStats {
        for (kind, id) in &self.subscriptions {
            self.bus.unsubscribe(*kind, *id);
        }
        self.snapshot()
    }
}
