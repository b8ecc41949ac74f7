//! Root holder for a complete behavior tree.

use crate::{Behavior, Status};

/// A fully built tree: one root node evaluated once per tick.
///
/// Trees are assembled once when an agent is constructed and never change
/// shape afterwards; only the context passed to [`BehaviorTree::tick`]
/// changes between evaluations.
pub struct BehaviorTree<C> {
    root: Box<dyn Behavior<C>>,
}

impl<C> BehaviorTree<C> {
    /// Wraps `root` as the entry point of the tree.
    pub fn new(root: Box<dyn Behavior<C>>) -> Self {
        Self { root }
    }

    /// Evaluates the whole tree against `ctx`.
    #[inline]
    pub fn tick(&self, ctx: &mut C) -> Status {
        self.root.tick(ctx)
    }

    /// Name of the root node.
    pub fn name(&self) -> &str {
        self.root.name()
    }
}

impl<C> From<Box<dyn Behavior<C>>> for BehaviorTree<C> {
    fn from(root: Box<dyn Behavior<C>>) -> Self {
        Self::new(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{action, condition, selector, sequence};

    #[derive(Default)]
    struct Guard {
        armed: bool,
        fired: u32,
    }

    #[test]
    fn tree_ticks_root_against_context() {
        let tree = BehaviorTree::new(selector(
            "Root",
            vec![
                sequence(
                    "Fire",
                    vec![
                        condition("Armed", |ctx: &Guard| ctx.armed),
                        action("Shoot", |ctx: &mut Guard| {
                            ctx.fired += 1;
                            Status::Success
                        }),
                    ],
                ),
                action("Idle", |_ctx: &mut Guard| Status::Success),
            ],
        ));

        let mut ctx = Guard::default();
        assert_eq!(tree.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.fired, 0);

        ctx.armed = true;
        assert_eq!(tree.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.fired, 1);
        assert_eq!(tree.name(), "Root");
    }
}
