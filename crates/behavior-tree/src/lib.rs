//! Lightweight behavior tree library optimized for turn-based games.
//!
//! This library provides a minimal, deterministic behavior tree implementation
//! for agents that decide once per discrete turn.
//!
//! - **No delta time**: Every tick completes immediately (turn-based semantics)
//! - **Tri-state status**: `Running` is part of the type for custom nodes, but
//!   every built-in node resolves within the tick
//! - **No cached state**: A tick depends only on the tree shape and the context
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure or Running
//! - Leaf nodes: [`Action`], [`Condition`]
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Inverter`], [`Repeater`]
//! - [`BehaviorTree`]: Root holder that starts evaluation

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod leaf;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use decorator::{Inverter, Repeater};
pub use leaf::{Action, Condition};
pub use status::Status;
pub use tree::BehaviorTree;
