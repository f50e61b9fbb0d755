//! Subscriber hooks for game events.

use crate::core::PlayerId;
use crate::tiles::{Orientation, TileId};

use super::event::GameEvent;

/// Receives game events as they are emitted.
///
/// Every hook defaults to a no-op; implement only the ones you need.
///
/// ```
/// use rust_pathtiles::events::{GameEvent, GameObserver};
/// use rust_pathtiles::tiles::TileId;
///
/// #[derive(Default)]
/// struct DrawCounter(u32);
///
/// impl GameObserver for DrawCounter {
///     fn on_tile_drawn(&mut self, _tile: TileId) {
///         self.0 += 1;
///     }
/// }
///
/// let mut counter = DrawCounter::default();
/// counter.notify(&GameEvent::TileDrawn { tile: TileId::new(4) });
/// assert_eq!(counter.0, 1);
/// ```
pub trait GameObserver {
    fn on_tile_drawn(&mut self, _tile: TileId) {}

    fn on_tile_rotated(&mut self, _hand_index: usize, _orientation: Orientation) {}

    fn on_tile_placed(&mut self, _cell_index: usize, _tile: TileId, _orientation: Orientation) {}

    fn on_player_added(&mut self, _player: PlayerId) {}

    /// Route an event to its hook.
    fn notify(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::TileDrawn { tile } => self.on_tile_drawn(tile),
            GameEvent::TileRotated {
                hand_index,
                orientation,
            } => self.on_tile_rotated(hand_index, orientation),
            GameEvent::TilePlaced {
                cell_index,
                tile,
                orientation,
            } => self.on_tile_placed(cell_index, tile, orientation),
            GameEvent::PlayerAdded { player } => self.on_player_added(player),
        }
    }
}

/// Observer that keeps every event it sees.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl GameObserver for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
