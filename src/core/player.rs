//! Players and the roster.
//!
//! ## PlayerId
//!
//! 0-based slot in the roster.
//!
//! ## PlayerRoster
//!
//! Append-only list of player tokens, capped by `GameConfig::max_players`.
//! Positions are carried for path-walking rules that this engine does not
//! implement; nothing here moves a player.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{GameError, IndexTarget, Result};

/// Player identifier, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Colour or label used by the presentation layer.
    pub label: String,
    /// Grid cell the token stands on, or `None` when off the board.
    pub position: Option<usize>,
}

impl Player {
    #[must_use]
    pub fn new(label: impl Into<String>, position: Option<usize>) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}

/// The players in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRoster {
    players: Vec<Player>,
    capacity: usize,
}

impl PlayerRoster {
    /// Create an empty roster.
    ///
    /// Panics if `capacity` is zero or above 255.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Must allow at least 1 player");
        assert!(capacity <= 255, "At most 255 players supported");
        Self {
            players: Vec::new(),
            capacity,
        }
    }

    /// Roster seeded with the opening token: "red" standing on cell 0.
    #[must_use]
    pub fn with_starting_player(capacity: usize) -> Self {
        let mut roster = Self::new(capacity);
        roster.players.push(Player::new("red", Some(0)));
        roster
    }

    /// Append `player`.
    pub fn push(&mut self, player: Player) -> Result<PlayerId> {
        if self.is_full() {
            return Err(GameError::RosterFull {
                capacity: self.capacity,
            });
        }
        let id = PlayerId(self.players.len() as u8);
        debug!(%id, label = %player.label, "player joined");
        self.players.push(player);
        Ok(id)
    }

    /// Append an off-board player labelled `player{n}`, n being the new roster size.
    pub fn add(&mut self) -> Result<PlayerId> {
        let label = format!("player{}", self.players.len() + 1);
        self.push(Player::new(label, None))
    }

    pub fn get(&self, id: PlayerId) -> Result<&Player> {
        self.players
            .get(id.index())
            .ok_or_else(|| GameError::out_of_range(IndexTarget::Player, id.index(), self.players.len()))
    }

    /// Iterate over `(PlayerId, &Player)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }

    /// Players whose token stands on `cell`.
    pub fn at_cell(&self, cell: usize) -> impl Iterator<Item = PlayerId> + '_ {
        self.iter()
            .filter(move |(_, p)| p.position == Some(cell))
            .map(|(id, _)| id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.players.len() >= self.capacity
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
