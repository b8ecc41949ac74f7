//! Decorator behavior nodes.
//!
//! Decorators wrap exactly one child behavior and transform its result or
//! execution. This module provides [`Inverter`] (NOT logic) and [`Repeater`]
//! (bounded repetition). The child is owned by type, so a decorator without
//! a child cannot be constructed.

use crate::{Behavior, Status};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` passes through unchanged
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<C> {
    name: String,
    child: Box<dyn Behavior<C>>,
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(name: impl Into<String>, child: Box<dyn Behavior<C>>) -> Self {
        Self {
            name: name.into(),
            child,
        }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Ticks its child up to `times` times within a single evaluation.
///
/// # Semantics
///
/// - Stops at the first `Failure` and returns `Failure`
/// - Returns `Success` only if every iteration succeeded
/// - `times == 0` succeeds without ticking the child
///
/// A `Running` child is treated like a success for the purpose of counting;
/// the repeater resolves eagerly and never parks state between ticks.
pub struct Repeater<C> {
    name: String,
    child: Box<dyn Behavior<C>>,
    times: u32,
}

impl<C> Repeater<C> {
    /// Creates a repeater that ticks `child` at most `times` times.
    pub fn new(name: impl Into<String>, child: Box<dyn Behavior<C>>, times: u32) -> Self {
        Self {
            name: name.into(),
            child,
            times,
        }
    }

    /// Configured repetition count.
    pub fn times(&self) -> u32 {
        self.times
    }
}

impl<C> Behavior<C> for Repeater<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for _ in 0..self.times {
            if self.child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        value: i32,
        ticks: u32,
        fail_on: Option<u32>,
    }

    impl TestContext {
        fn new(value: i32) -> Self {
            Self {
                value,
                ticks: 0,
                fail_on: None,
            }
        }
    }

    struct IsPositive;
    impl Behavior<TestContext> for IsPositive {
        fn tick(&self, ctx: &mut TestContext) -> Status {
            Status::from(ctx.value > 0)
        }
    }

    struct Pending;
    impl Behavior<TestContext> for Pending {
        fn tick(&self, _ctx: &mut TestContext) -> Status {
            Status::Running
        }
    }

    /// Counts ticks and fails on the configured iteration (1-based).
    struct Counter;
    impl Behavior<TestContext> for Counter {
        fn tick(&self, ctx: &mut TestContext) -> Status {
            ctx.ticks += 1;
            match ctx.fail_on {
                Some(n) if n == ctx.ticks => Status::Failure,
                _ => Status::Success,
            }
        }
    }

    #[test]
    fn inverter_inverts_success() {
        let inverter = Inverter::new("not", Box::new(IsPositive));
        assert_eq!(inverter.tick(&mut TestContext::new(10)), Status::Failure);
    }

    #[test]
    fn inverter_inverts_failure() {
        let inverter = Inverter::new("not", Box::new(IsPositive));
        assert_eq!(inverter.tick(&mut TestContext::new(-10)), Status::Success);
    }

    #[test]
    fn inverter_passes_running_through() {
        let inverter = Inverter::new("not", Box::new(Pending));
        assert_eq!(inverter.tick(&mut TestContext::new(0)), Status::Running);
    }

    #[test]
    fn repeater_ticks_exactly_n_times_on_success() {
        let repeater = Repeater::new("thrice", Box::new(Counter), 3);

        let mut ctx = TestContext::new(0);
        assert_eq!(repeater.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.ticks, 3);
    }

    #[test]
    fn repeater_stops_at_first_failure() {
        let repeater = Repeater::new("five", Box::new(Counter), 5);

        let mut ctx = TestContext::new(0);
        ctx.fail_on = Some(2);
        assert_eq!(repeater.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.ticks, 2);
    }

    #[test]
    fn repeater_zero_times_never_ticks_child() {
        let repeater = Repeater::new("never", Box::new(Counter), 0);

        let mut ctx = TestContext::new(0);
        ctx.fail_on = Some(1);
        assert_eq!(repeater.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.ticks, 0);
        assert_eq!(repeater.times(), 0);
    }
}
