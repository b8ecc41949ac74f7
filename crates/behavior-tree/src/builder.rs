//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose
//! `Box::new(Sequence::new("name", vec![...]))`, you can use shorter
//! functions like `sequence("name", vec![...])`.

use crate::{Action, Behavior, Condition, Inverter, Repeater, Selector, Sequence, Status};

/// Creates a sequence node.
#[inline]
pub fn sequence<C: 'static>(
    name: impl Into<String>,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(name, children))
}

/// Creates a selector node.
#[inline]
pub fn selector<C: 'static>(
    name: impl Into<String>,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(name, children))
}

/// Creates an inverter node.
#[inline]
pub fn inverter<C: 'static>(
    name: impl Into<String>,
    child: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(name, child))
}

/// Creates a repeater node.
#[inline]
pub fn repeater<C: 'static>(
    name: impl Into<String>,
    child: Box<dyn Behavior<C>>,
    times: u32,
) -> Box<dyn Behavior<C>> {
    Box::new(Repeater::new(name, child, times))
}

/// Creates an action leaf.
#[inline]
pub fn action<C: 'static, F>(name: impl Into<String>, f: F) -> Box<dyn Behavior<C>>
where
    F: Fn(&mut C) -> Status + Send + Sync + 'static,
{
    Box::new(Action::new(name, f))
}

/// Creates a condition leaf.
#[inline]
pub fn condition<C: 'static, F>(name: impl Into<String>, f: F) -> Box<dyn Behavior<C>>
where
    F: Fn(&C) -> bool + Send + Sync + 'static,
{
    Box::new(Condition::new(name, f))
}

/// Boxes a concrete node so it can sit among heterogeneous children.
#[inline]
pub fn node<C: 'static, B>(behavior: B) -> Box<dyn Behavior<C>>
where
    B: Behavior<C> + 'static,
{
    Box::new(behavior)
}

/// Creates an action leaf that always succeeds without touching the context.
///
/// Used for idle fallbacks at the end of a selector.
#[inline]
pub fn succeed<C: 'static>(name: impl Into<String>) -> Box<dyn Behavior<C>> {
    Box::new(Action::new(name, |_: &mut C| Status::Success))
}
