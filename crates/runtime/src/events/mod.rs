//! Session event bus.
//!
//! Decision cores announce every state change here; observers such as
//! statistics, the curse and the CLI react without being wired into the
//! decision logic.

mod bus;
mod event;
mod kind;

pub use bus::{Callback, EventBus, SubscriptionId};
pub use event::{Event, EventValue};
pub use kind::{EventCategory, EventKind};
