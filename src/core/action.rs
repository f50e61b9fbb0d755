//! Player actions and the action log.
//!
//! Each discrete user input becomes one `Action`. Successful actions are
//! appended to the state's history as `ActionRecord`s.

use serde::{Deserialize, Serialize};

/// A single player action.
///
/// ```
/// use rust_pathtiles::core::Action;
///
/// let place = Action::Place { hand_index: 0, cell_index: 14 };
/// assert_eq!(place.to_string(), "place hand[0] -> cell 14");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw from the deck into the hand. Ignored when not actionable.
    Draw,
    /// Turn a hand tile a quarter turn clockwise.
    Rotate { hand_index: usize },
    /// Move a hand tile onto an empty grid cell.
    Place { hand_index: usize, cell_index: usize },
    /// Add an off-board player to the roster.
    AddPlayer,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Draw => write!(f, "draw"),
            Action::Rotate { hand_index } => write!(f, "rotate hand[{}]", hand_index),
            Action::Place {
                hand_index,
                cell_index,
            } => write!(f, "place hand[{}] -> cell {}", hand_index, cell_index),
            Action::AddPlayer => write!(f, "add player"),
        }
    }
}

/// An applied action with its position in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// 0-based order of application.
    pub sequence: u32,
    pub action: Action,
    /// Caller-supplied timestamp (ms) of the input.
    pub at_ms: u64,
}

impl ActionRecord {
    #[must_use]
    pub fn new(sequence: u32, action: Action, at_ms: u64) -> Self {
        Self {
            sequence,
            action,
            at_ms,
        }
    }
}
