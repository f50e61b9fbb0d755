//! Game rules.
//!
//! - `placement`: Validates and commits hand-to-grid moves
//! - `engine`: `TileEngine`, maps presentation input to actions and
//!   notifies observers

pub mod engine;
pub mod placement;

pub use engine::TileEngine;
pub use placement::{place, validate, Placement};
