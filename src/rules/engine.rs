//! Input-facing front for a game.
//!
//! `TileEngine` owns a `GameState` and turns presentation events (deck
//! click, hand tile click, drag, drop) into actions. Each input runs to
//! completion before the next is taken, and every resulting event is handed
//! to the observer for sound and animation cues. Rejected inputs come back
//! as `Err` and change nothing.

use tracing::{debug, warn};

use crate::core::action::Action;
use crate::core::error::Result;
use crate::core::state::GameState;
use crate::events::{EventLog, GameEvent, GameObserver};
use crate::tiles::{Orientation, TileId};

/// A game plus the observer that hears about it.
///
/// ```
/// use rust_pathtiles::core::GameState;
/// use rust_pathtiles::rules::TileEngine;
///
/// let mut engine = TileEngine::new(GameState::standard(42));
/// let tile = engine.on_deck_clicked(0).unwrap();
/// engine.on_drag_start(0).unwrap();
/// engine.on_drop(14, 10).unwrap();
///
/// assert_eq!(engine.state().grid().cell_at(14).unwrap().tile(), Some(tile));
/// assert_eq!(engine.observer().len(), 2);
/// ```
#[derive(Debug)]
pub struct TileEngine<O: GameObserver = EventLog> {
    state: GameState,
    observer: O,
    /// Hand index picked up by the last drag start.
    dragging: Option<usize>,
}

impl TileEngine<EventLog> {
    /// Engine that records events in an [`EventLog`].
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self::with_observer(state, EventLog::new())
    }
}

impl<O: GameObserver> TileEngine<O> {
    #[must_use]
    pub fn with_observer(state: GameState, observer: O) -> Self {
        Self {
            state,
            observer,
            dragging: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Hand index currently being dragged.
    #[must_use]
    pub fn dragging(&self) -> Option<usize> {
        self.dragging
    }

    #[must_use]
    pub fn into_parts(self) -> (GameState, O) {
        (self.state, self.observer)
    }

    /// Apply `action` and notify the observer of its event.
    pub fn handle(&mut self, action: &Action, now_ms: u64) -> Result<Option<GameEvent>> {
        match self.state.apply(action, now_ms) {
            Ok(Some(event)) => {
                debug!(%action, %event, "action applied");
                self.observer.notify(&event);
                Ok(Some(event))
            }
            Ok(None) => {
                debug!(%action, "action ignored");
                Ok(None)
            }
            Err(err) => {
                warn!(%action, error = %err, "action rejected");
                Err(err)
            }
        }
    }

    /// Deck clicked: draw if possible, otherwise ignore.
    pub fn on_deck_clicked(&mut self, now_ms: u64) -> Option<TileId> {
        match self.handle(&Action::Draw, now_ms) {
            Ok(Some(GameEvent::TileDrawn { tile })) => Some(tile),
            _ => None,
        }
    }

    /// Hand tile clicked: rotate it.
    pub fn on_hand_tile_clicked(&mut self, hand_index: usize, now_ms: u64) -> Result<Orientation> {
        let orientation = self.state.hand().get(hand_index)?.orientation.rotated_cw();
        self.handle(&Action::Rotate { hand_index }, now_ms)?;
        Ok(orientation)
    }

    /// Drag started on a hand tile.
    pub fn on_drag_start(&mut self, hand_index: usize) -> Result<()> {
        self.state.hand().check_index(hand_index)?;
        self.dragging = Some(hand_index);
        Ok(())
    }

    /// Drag abandoned without a drop.
    pub fn on_drag_cancel(&mut self) {
        self.dragging = None;
    }

    /// Dropped on a grid cell: place the dragged tile there.
    ///
    /// A drop with no drag in progress is ignored. The drag ends either way.
    pub fn on_drop(&mut self, cell_index: usize, now_ms: u64) -> Result<Option<GameEvent>> {
        let Some(hand_index) = self.dragging.take() else {
            debug!(cell_index, "drop without drag ignored");
            return Ok(None);
        };
        self.handle(
            &Action::Place {
                hand_index,
                cell_index,
            },
            now_ms,
        )
    }

    /// Add an off-board player.
    pub fn on_add_player(&mut self, now_ms: u64) -> Result<()> {
        self.handle(&Action::AddPlayer, now_ms).map(|_| ())
    }
}
