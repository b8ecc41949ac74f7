//! Shared handles to the mutable world.
//!
//! The hero core, every enemy core and the turn driver mutate the same
//! dungeon and hero across successive, non-overlapping ticks. Execution is
//! single-threaded, so plain `Rc<RefCell<_>>` handles are enough. Borrows are
//! never held across a `publish` so that subscribers can inspect the world.

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Dungeon, Hero};

pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// The dungeon and the hero exploring it.
#[derive(Clone, Debug)]
pub struct World {
    pub dungeon: Shared<Dungeon>,
    pub hero: Shared<Hero>,
}

impl World {
    pub fn new(dungeon: Dungeon, hero: Hero) -> Self {
        Self {
            dungeon: shared(dungeon),
            hero: shared(hero),
        }
    }
}
