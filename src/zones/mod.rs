//! Where tiles live during a game.
//!
//! A tile id moves one way only: deck, then hand, then grid. It is never
//! in two of these at once and never goes back.
//!
//! ## Key Types
//!
//! - `Deck`: Undrawn ids, uniform random draw
//! - `Hand` / `HandEntry`: Bounded held tiles with orientation
//! - `Grid` / `GridCell`: The board, write-once cells

pub mod deck;
pub mod grid;
pub mod hand;

pub use deck::Deck;
pub use grid::{Grid, GridCell};
pub use hand::{Hand, HandEntry};
