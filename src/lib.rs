//! # rust-pathtiles
//!
//! Game-state engine for a path-building tile game: players draw square
//! path tiles from a shared deck, hold a few in hand, turn them, and lay
//! them on a fixed board.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: Deck, hand, board and players live in one
//!    `GameState` value. No ambient globals.
//!
//! 2. **Injectable Randomness**: Draws ask a `RandomSource`, so games are
//!    reproducible from a seed and tests can script exact draws.
//!
//! 3. **All-or-Nothing Operations**: An operation that fails leaves the
//!    state exactly as it found it.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, players, actions, state, RNG
//! - `tiles`: Tile catalogue, edge connectivity, rotation
//! - `zones`: Deck, hand, grid
//! - `rules`: Placement validation and the input-facing `TileEngine`
//! - `events`: Events and observer hooks for presentation/audio layers

pub mod core;
pub mod events;
pub mod rules;
pub mod tiles;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameConfig, GameError, GameRng, GameRngState, GameSnapshot, GameState,
    IndexTarget, Player, PlayerId, PlayerRoster, RandomSource, Result, ScriptedSource,
    SnapshotError,
};

pub use crate::tiles::{Edges, Orientation, Side, TileCatalogue, TileId, TILE_COUNT};

pub use crate::zones::{Deck, Grid, GridCell, Hand, HandEntry};

pub use crate::rules::{Placement, TileEngine};

pub use crate::events::{EventLog, GameEvent, GameObserver};
