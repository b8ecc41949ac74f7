//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Child order is fixed at construction and encodes priority.

use crate::{Behavior, Status};

/// Executes child behaviors in order until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns anything but `Success`, the sequence **stops
///   immediately** and returns that status
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// An empty sequence succeeds (there is nothing blocking it).
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    name: String,
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the sequence has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            match child.tick(ctx) {
                Status::Success => continue,
                other => return other, // Short-circuit
            }
        }
        Status::Success
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Executes child behaviors in order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns anything but `Failure`, the selector **stops
///   immediately** and returns that status
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// An empty selector fails (there is no option to take).
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<C> {
    name: String,
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the selector has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            match child.tick(ctx) {
                Status::Failure => continue,
                other => return other, // Short-circuit
            }
        }
        Status::Failure
    }

    fn name(&self) -> &str {
        &self.name
    }
}
