//! Decision cores for the entities that act each turn.

pub mod ai;
