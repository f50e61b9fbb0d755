//! Error taxonomy for rejected game actions.
//!
//! Every variant is a recoverable, anticipated condition: a player clicked
//! an empty deck, dropped onto an occupied cell, and so on. None of them is
//! fatal, and an operation that returns an error has left the state untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which indexed collection an out-of-range index was aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexTarget {
    /// A position in the active hand.
    Hand,
    /// A cell on the board.
    Grid,
    /// A slot in the player roster.
    Player,
}

impl std::fmt::Display for IndexTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexTarget::Hand => write!(f, "hand"),
            IndexTarget::Grid => write!(f, "grid"),
            IndexTarget::Player => write!(f, "player"),
        }
    }
}

/// A rejected game action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Tile id outside the catalogue (valid ids are 1..=35).
    #[error("tile id {0} is not in the catalogue")]
    InvalidTileId(u32),

    /// Every tile has already been drawn.
    #[error("the deck is empty")]
    DeckEmpty,

    /// The hand already holds `capacity` tiles.
    #[error("hand is full ({capacity} tiles)")]
    HandFull { capacity: usize },

    /// Index does not address an element of `target`.
    #[error("{target} index {index} out of range (len {len})")]
    IndexOutOfRange {
        target: IndexTarget,
        index: usize,
        len: usize,
    },

    /// Orientation outside 0..=3 quarter turns.
    #[error("orientation {0} is not a quarter turn (0..=3)")]
    InvalidOrientation(u8),

    /// The grid cell already holds a tile.
    #[error("grid cell {0} is already occupied")]
    CellOccupied(usize),

    /// The roster already holds `capacity` players.
    #[error("player roster is full ({capacity} players)")]
    RosterFull { capacity: usize },
}

impl GameError {
    pub(crate) fn out_of_range(target: IndexTarget, index: usize, len: usize) -> Self {
        GameError::IndexOutOfRange { target, index, len }
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, GameError>;

/// Failure to encode or restore a saved game.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Codec(#[from] bincode::Error),

    /// Decoded fine but breaks a game invariant (duplicate tile, overfull hand, ...).
    #[error("snapshot is inconsistent: {0}")]
    Inconsistent(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(GameError::DeckEmpty.to_string(), "the deck is empty");
        assert_eq!(
            GameError::HandFull { capacity: 3 }.to_string(),
            "hand is full (3 tiles)"
        );
        assert_eq!(
            GameError::out_of_range(IndexTarget::Grid, 999, 36).to_string(),
            "grid index 999 out of range (len 36)"
        );
        assert_eq!(
            GameError::CellOccupied(14).to_string(),
            "grid cell 14 is already occupied"
        );
    }

    #[test]
    fn test_snapshot_error_message() {
        let err = SnapshotError::Inconsistent("tile3 appears twice".into());
        assert_eq!(err.to_string(), "snapshot is inconsistent: tile3 appears twice");
    }

    #[test]
    fn test_index_target_serde() {
        let json = serde_json::to_string(&IndexTarget::Hand).unwrap();
        let back: IndexTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, IndexTarget::Hand);
    }
}
