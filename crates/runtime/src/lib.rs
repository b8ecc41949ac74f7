//! Runtime orchestration for the dungeon simulation.
//!
//! This crate wires the behavior-tree decision cores to a shared world and an
//! in-process event bus. Consumers embed [`Simulation`] to play turns, observe
//! events and read the final [`SimulationReport`].
//!
//! Modules are organized by responsibility:
//! - [`simulation`] hosts the turn driver
//! - [`providers`] holds the hero and enemy decision cores
//! - [`events`] provides the kind-keyed event bus
//! - [`curse`] perturbs the dungeon between turns
//! - [`stats`] aggregates session statistics from events
//! - [`api`] and [`config`] expose errors and runtime settings
pub mod api;
pub mod config;
pub mod curse;
pub mod events;
pub mod providers;
pub mod simulation;
pub mod stats;
pub mod world;

pub use api::{Result, RuntimeError};
pub use config::RuntimeConfig;
pub use curse::{AutoCurse, CURSE_SOURCE, CurseAction};
pub use events::{Event, EventBus, EventCategory, EventKind, EventValue, SubscriptionId};
pub use providers::ai::{EnemyBehavior, EnemyContext, EnemyCore, HeroContext, HeroCore};
pub use simulation::{HeroSummary, Outcome, Simulation, SimulationReport};
pub use stats::{SessionStats, StatsTracker};
pub use world::{Shared, World, shared};
