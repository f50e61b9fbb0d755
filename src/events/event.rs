//! Observable effects of applied actions.
//!
//! The engine emits one event per successful state change. Presentation and
//! audio layers use them as cue and animation triggers; the engine never
//! depends on anyone consuming them.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::tiles::{Orientation, TileId};

/// Something that happened to the game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tile moved from the deck into the hand.
    TileDrawn { tile: TileId },
    /// A hand tile turned; `orientation` is the new value.
    TileRotated {
        hand_index: usize,
        orientation: Orientation,
    },
    /// A hand tile was committed to the board.
    TilePlaced {
        cell_index: usize,
        tile: TileId,
        orientation: Orientation,
    },
    /// A player joined the roster.
    PlayerAdded { player: PlayerId },
}

impl GameEvent {
    /// Tile involved in the event, if any.
    #[must_use]
    pub fn tile(&self) -> Option<TileId> {
        match self {
            GameEvent::TileDrawn { tile } | GameEvent::TilePlaced { tile, .. } => Some(*tile),
            GameEvent::TileRotated { .. } | GameEvent::PlayerAdded { .. } => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::TileDrawn { tile } => write!(f, "drew {}", tile),
            GameEvent::TileRotated {
                hand_index,
                orientation,
            } => write!(f, "hand[{}] now at {}", hand_index, orientation),
            GameEvent::TilePlaced {
                cell_index,
                tile,
                orientation,
            } => write!(f, "placed {} at cell {} ({})", tile, cell_index, orientation),
            GameEvent::PlayerAdded { player } => write!(f, "{} joined", player),
        }
    }
}
