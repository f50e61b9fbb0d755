//! Event hooks for presentation and audio layers.
//!
//! ## Key Components
//!
//! - [`GameEvent`]: What changed (drawn, rotated, placed, player added)
//! - [`GameObserver`]: Subscriber trait with per-event hooks
//! - [`EventLog`]: Observer that records events, handy in tests

mod event;
mod observer;

pub use event::GameEvent;
pub use observer::{EventLog, GameObserver};
