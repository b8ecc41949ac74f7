//! Leaf behavior nodes.
//!
//! Leaves hold the agent-specific logic: an [`Action`] runs a unit of
//! behavior and reports its own status, a [`Condition`] evaluates a
//! predicate without side effects.

use crate::{Behavior, Status};

type ActionFn<C> = Box<dyn Fn(&mut C) -> Status + Send + Sync>;
type PredicateFn<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;

/// Runs a function of the context and returns whatever it reports.
///
/// Actions must detect impossible preconditions themselves (e.g., attacking
/// with no living target) and return `Failure` instead of panicking.
pub struct Action<C> {
    name: String,
    action: ActionFn<C>,
}

impl<C> Action<C> {
    /// Creates a named action node.
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: Fn(&mut C) -> Status + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            action: Box::new(action),
        }
    }
}

impl<C> Behavior<C> for Action<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (self.action)(ctx)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Evaluates a predicate: `true` maps to `Success`, `false` to `Failure`.
pub struct Condition<C> {
    name: String,
    predicate: PredicateFn<C>,
}

impl<C> Condition<C> {
    /// Creates a named condition node.
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl<C> Behavior<C> for Condition<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from((self.predicate)(ctx))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
