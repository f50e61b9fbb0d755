//! Game state: one explicit value holding everything that changes.
//!
//! ## GameState
//!
//! - Configuration
//! - Deck, hand, grid (the path of every tile id)
//! - Player roster
//! - RNG
//! - History of actions applied through [`GameState::apply`]
//!
//! Every operation either succeeds completely or returns an error with the
//! state untouched.
//!
//! ## GameSnapshot
//!
//! Plain serde value of a `GameState`, with the RNG captured as its
//! checkpoint. Encoded with bincode for save/restore.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::action::{Action, ActionRecord};
use super::config::GameConfig;
use super::error::{Result, SnapshotError};
use super::player::{PlayerId, PlayerRoster};
use super::rng::{GameRng, GameRngState};
use crate::events::GameEvent;
use crate::rules::placement::{self, Placement};
use crate::tiles::{Orientation, TileCatalogue, TileId};
use crate::zones::{Deck, Grid, Hand};

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    deck: Deck,
    hand: Hand,
    grid: Grid,
    players: PlayerRoster,

    /// Deterministic RNG for deck draws.
    rng: GameRng,

    /// Applied actions, oldest first.
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Opening position: full deck, empty hand and board, one player.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            deck: Deck::full(),
            hand: Hand::new(config.hand_capacity),
            grid: Grid::new(config.grid_rows, config.grid_cols),
            players: PlayerRoster::with_starting_player(config.max_players),
            rng: GameRng::new(seed),
            history: Vector::new(),
            config,
        }
    }

    /// Standard 6x6 game.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        Self::new(GameConfig::default(), seed)
    }

    /// Replace the deck, e.g. to play with a subset of the catalogue.
    #[must_use]
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    // === Observers ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn players(&self) -> &PlayerRoster {
        &self.players
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Operations ===

    /// Draw a tile into the hand.
    ///
    /// Drawing is discretionary: with an empty deck or a full hand this is a
    /// silent no-op returning `None`.
    pub fn draw_into_hand(&mut self) -> Option<TileId> {
        if self.deck.is_empty() || self.hand.is_full() {
            trace!(
                deck = self.deck.remaining(),
                hand = self.hand.len(),
                "draw ignored"
            );
            return None;
        }
        let tile = self.deck.draw(&mut self.rng).ok()?;
        // Capacity was checked above.
        self.hand.add(tile).ok()?;
        debug!(%tile, deck = self.deck.remaining(), "tile drawn into hand");
        Some(tile)
    }

    /// Turn hand tile `hand_index` a quarter turn clockwise.
    pub fn rotate(&mut self, hand_index: usize, now_ms: u64) -> Result<Orientation> {
        self.hand.rotate(hand_index, now_ms, self.config.settle_delay_ms)
    }

    /// Commit hand tile `hand_index` to grid cell `cell_index`.
    pub fn place(&mut self, hand_index: usize, cell_index: usize) -> Result<Placement> {
        placement::place(&mut self.hand, hand_index, &mut self.grid, cell_index)
    }

    /// Add an off-board player.
    pub fn add_player(&mut self) -> Result<PlayerId> {
        self.players.add()
    }

    /// Apply one action, record it, and return the event it produced.
    ///
    /// A draw that is not actionable returns `Ok(None)` and is not recorded.
    pub fn apply(&mut self, action: &Action, now_ms: u64) -> Result<Option<GameEvent>> {
        let event = match *action {
            Action::Draw => self
                .draw_into_hand()
                .map(|tile| GameEvent::TileDrawn { tile }),
            Action::Rotate { hand_index } => {
                let orientation = self.rotate(hand_index, now_ms)?;
                Some(GameEvent::TileRotated {
                    hand_index,
                    orientation,
                })
            }
            Action::Place {
                hand_index,
                cell_index,
            } => {
                let placed = self.place(hand_index, cell_index)?;
                Some(GameEvent::TilePlaced {
                    cell_index: placed.cell_index,
                    tile: placed.tile,
                    orientation: placed.orientation,
                })
            }
            Action::AddPlayer => {
                let player = self.add_player()?;
                Some(GameEvent::PlayerAdded { player })
            }
        };

        if event.is_some() {
            let sequence = self.history.len() as u32;
            self.history
                .push_back(ActionRecord::new(sequence, action.clone(), now_ms));
        }
        Ok(event)
    }

    /// Every action that would currently change the state.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();

        if !self.deck.is_empty() && !self.hand.is_full() {
            actions.push(Action::Draw);
        }
        for hand_index in 0..self.hand.len() {
            actions.push(Action::Rotate { hand_index });
        }
        for hand_index in 0..self.hand.len() {
            actions.extend(self.grid.empty_cells().map(|cell_index| Action::Place {
                hand_index,
                cell_index,
            }));
        }
        if !self.players.is_full() {
            actions.push(Action::AddPlayer);
        }

        actions
    }

    // === Invariants ===

    /// Describe the first broken invariant, if any.
    ///
    /// Checked: the hand, roster and board match the configuration and are
    /// within capacity; every id is a catalogue tile and sits in exactly one
    /// of deck, hand or grid.
    #[must_use]
    pub fn invariant_violation(&self) -> Option<String> {
        let config = &self.config;
        if self.hand.capacity() != config.hand_capacity {
            return Some(format!(
                "hand capacity {} differs from configured {}",
                self.hand.capacity(),
                config.hand_capacity
            ));
        }
        if self.hand.len() > self.hand.capacity() {
            return Some(format!("hand holds {} tiles", self.hand.len()));
        }
        if self.players.capacity() != config.max_players {
            return Some(format!(
                "roster capacity {} differs from configured {}",
                self.players.capacity(),
                config.max_players
            ));
        }
        if self.players.len() > self.players.capacity() {
            return Some(format!("roster holds {} players", self.players.len()));
        }
        if self.grid.rows() != config.grid_rows || self.grid.cols() != config.grid_cols {
            return Some(format!("grid is {}x{}", self.grid.rows(), self.grid.cols()));
        }
        if self.grid.len() != config.cell_count() {
            return Some(format!(
                "grid has {} cells, expected {}",
                self.grid.len(),
                config.cell_count()
            ));
        }

        let mut seen = FxHashSet::default();
        let all = self
            .deck
            .ids()
            .iter()
            .copied()
            .chain(self.hand.tiles())
            .chain(self.grid.placed_tiles());
        for tile in all {
            if !TileCatalogue::contains(tile) {
                return Some(format!("{} is not a catalogue tile", tile));
            }
            if !seen.insert(tile) {
                return Some(format!("{} appears more than once", tile));
            }
        }
        None
    }

    #[must_use]
    pub fn check_invariants(&self) -> bool {
        self.invariant_violation().is_none()
    }

    // === Snapshots ===

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config.clone(),
            deck: self.deck.clone(),
            hand: self.hand.clone(),
            grid: self.grid.clone(),
            players: self.players.clone(),
            rng: self.rng.state(),
            history: self.history.clone(),
        }
    }

    /// Rebuild a state from a snapshot, rejecting inconsistent ones.
    pub fn restore(snapshot: GameSnapshot) -> std::result::Result<Self, SnapshotError> {
        let state = Self {
            rng: GameRng::from_state(&snapshot.rng),
            config: snapshot.config,
            deck: snapshot.deck,
            hand: snapshot.hand,
            grid: snapshot.grid,
            players: snapshot.players,
            history: snapshot.history,
        };
        match state.invariant_violation() {
            Some(problem) => Err(SnapshotError::Inconsistent(problem)),
            None => Ok(state),
        }
    }

    pub fn to_bytes(&self) -> std::result::Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(&self.snapshot())?)
    }

    pub fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, SnapshotError> {
        let snapshot: GameSnapshot = bincode::deserialize(bytes)?;
        Self::restore(snapshot)
    }

    /// Clone for an exploratory branch.
    ///
    /// The branch gets a forked RNG, so its draws differ from this state's.
    /// Takes `&mut self` because forking advances the fork counter.
    #[must_use]
    pub fn clone_state(&mut self) -> Self {
        Self {
            config: self.config.clone(),
            deck: self.deck.clone(),
            hand: self.hand.clone(),
            grid: self.grid.clone(),
            players: self.players.clone(),
            rng: self.rng.fork(),
            history: self.history.clone(),
        }
    }
}

/// Serializable form of a [`GameState`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub deck: Deck,
    pub hand: Hand,
    pub grid: Grid,
    pub players: PlayerRoster,
    pub rng: GameRngState,
    pub history: Vector<ActionRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GameError;
    use crate::core::rng::ScriptedSource;
    use crate::zones::GridCell;

    #[test]
    fn test_new_state() {
        let state = GameState::standard(42);

        assert_eq!(state.deck().remaining(), 35);
        assert!(state.hand().is_empty());
        assert_eq!(state.grid().len(), 36);
        assert!(state.grid().is_empty());
        assert_eq!(state.players().len(), 1);
        assert!(state.history().is_empty());
        assert!(state.check_invariants());
    }

    #[test]
    fn test_draw_into_hand_stops_at_capacity() {
        let mut state = GameState::standard(42);

        for _ in 0..3 {
            assert!(state.draw_into_hand().is_some());
        }
        assert_eq!(state.draw_into_hand(), None);
        assert_eq!(state.hand().len(), 3);
        assert_eq!(state.deck().remaining(), 32);
    }

    #[test]
    fn test_draw_into_hand_empty_deck() {
        let mut state = GameState::standard(42).with_deck(Deck::from_ids([TileId::new(8)]).unwrap());

        assert_eq!(state.draw_into_hand(), Some(TileId::new(8)));
        assert_eq!(state.draw_into_hand(), None);
        assert_eq!(state.hand().len(), 1);
    }

    #[test]
    fn test_apply_records_history() {
        let mut state = GameState::standard(42);

        let drawn = state.apply(&Action::Draw, 0).unwrap();
        assert!(matches!(drawn, Some(GameEvent::TileDrawn { .. })));

        let rotated = state.apply(&Action::Rotate { hand_index: 0 }, 100).unwrap();
        assert_eq!(
            rotated,
            Some(GameEvent::TileRotated {
                hand_index: 0,
                orientation: Orientation::EAST
            })
        );

        assert_eq!(state.history().len(), 2);
        assert_eq!(state.history()[1].sequence, 1);
        assert_eq!(state.history()[1].at_ms, 100);
    }

    #[test]
    fn test_rejected_action_not_recorded() {
        let mut state = GameState::standard(42);

        assert!(matches!(
            state.apply(&Action::Rotate { hand_index: 0 }, 0),
            Err(GameError::IndexOutOfRange { .. })
        ));
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_ignored_draw_not_recorded() {
        let mut state = GameState::standard(42).with_deck(Deck::from_ids(Vec::new()).unwrap());
        assert_eq!(state.apply(&Action::Draw, 0), Ok(None));
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_place_through_state() {
        let mut state = GameState::standard(42);
        let tile = state.draw_into_hand().unwrap();
        state.rotate(0, 0).unwrap();

        let placed = state.place(0, 14).unwrap();
        assert_eq!(placed.tile, tile);
        assert_eq!(
            state.grid().cell_at(14),
            Ok(GridCell::Occupied {
                tile,
                orientation: Orientation::EAST
            })
        );
        assert!(state.hand().is_empty());
        assert!(state.check_invariants());
    }

    #[test]
    fn test_legal_actions() {
        let mut state = GameState::new(GameConfig::new().with_grid(2, 2).with_max_players(1), 42);
        assert_eq!(state.legal_actions(), vec![Action::Draw]);

        state.draw_into_hand();
        let actions = state.legal_actions();
        assert!(actions.contains(&Action::Draw));
        assert!(actions.contains(&Action::Rotate { hand_index: 0 }));
        let placements = actions
            .iter()
            .filter(|a| matches!(a, Action::Place { .. }))
            .count();
        assert_eq!(placements, 4);
        assert!(!actions.contains(&Action::AddPlayer));
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let mut a = GameState::standard(9);
        let mut b = GameState::standard(9);
        for _ in 0..3 {
            assert_eq!(a.draw_into_hand(), b.draw_into_hand());
        }
    }

    #[test]
    fn test_clone_state_forks_rng() {
        let mut state = GameState::standard(42);
        state.draw_into_hand();

        let mut branch = state.clone_state();
        assert_eq!(branch.hand(), state.hand());
        assert_eq!(branch.deck(), state.deck());

        let ours: Vec<_> = (0..2).filter_map(|_| state.draw_into_hand()).collect();
        let theirs: Vec<_> = (0..2).filter_map(|_| branch.draw_into_hand()).collect();
        assert_eq!(ours.len(), 2);
        assert_eq!(theirs.len(), 2);
    }

    #[test]
    fn test_snapshot_round_trip_preserves_rng() {
        let mut state = GameState::standard(42);
        state.apply(&Action::Draw, 0).unwrap();
        state.apply(&Action::Place { hand_index: 0, cell_index: 3 }, 10).unwrap();

        let bytes = state.to_bytes().unwrap();
        let mut restored = GameState::from_bytes(&bytes).unwrap();

        assert_eq!(restored.snapshot(), state.snapshot());
        assert_eq!(restored.draw_into_hand(), state.draw_into_hand());
    }

    #[test]
    fn test_restore_rejects_duplicate_tile() {
        let mut state = GameState::standard(42);
        let tile = state.draw_into_hand().unwrap();

        let mut snapshot = state.snapshot();
        snapshot.deck = Deck::from_ids([tile]).unwrap();

        match GameState::restore(snapshot) {
            Err(SnapshotError::Inconsistent(msg)) => assert!(msg.contains("more than once")),
            other => panic!("expected inconsistent snapshot, got {:?}", other.map(|_| ())),
        }
    }

    fn assert_inconsistent(snapshot: GameSnapshot, expected: &str) {
        match GameState::restore(snapshot) {
            Err(SnapshotError::Inconsistent(msg)) => assert!(msg.contains(expected), "{}", msg),
            other => panic!("expected inconsistent snapshot, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_restore_rejects_hand_larger_than_configured() {
        let mut state = GameState::standard(42);
        let mut snapshot = state.snapshot();

        let mut hand = Hand::new(10);
        for _ in 0..5 {
            hand.add(state.deck.draw(&mut state.rng).unwrap()).unwrap();
        }
        snapshot.deck = state.deck.clone();
        snapshot.hand = hand;

        assert_inconsistent(snapshot, "hand capacity 10");
    }

    #[test]
    fn test_restore_rejects_roster_capacity_mismatch() {
        let mut snapshot = GameState::standard(42).snapshot();
        snapshot.players = PlayerRoster::with_starting_player(20);

        assert_inconsistent(snapshot, "roster capacity 20");
    }

    #[test]
    fn test_restore_rejects_truncated_grid() {
        let snapshot = GameState::standard(42).snapshot();
        let mut value = serde_json::to_value(&snapshot).unwrap();
        value["grid"]["cells"] = serde_json::json!([]);
        let snapshot: GameSnapshot = serde_json::from_value(value).unwrap();

        assert_inconsistent(snapshot, "grid has 0 cells, expected 36");
    }

    #[test]
    fn test_restore_rejects_out_of_range_orientation() {
        let mut state = GameState::standard(42);
        state.draw_into_hand().unwrap();
        let mut value = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(value["hand"]["entries"][0]["orientation"], 0);

        value["hand"]["entries"][0]["orientation"] = serde_json::json!(255);
        assert!(serde_json::from_value::<GameSnapshot>(value.clone()).is_err());

        value["hand"]["entries"][0]["orientation"] = serde_json::json!(3);
        let snapshot: GameSnapshot = serde_json::from_value(value).unwrap();
        let mut restored = GameState::restore(snapshot).unwrap();
        assert_eq!(restored.rotate(0, 0), Ok(Orientation::NORTH));
    }

    #[test]
    fn test_rng_accessor_tracks_draws() {
        let mut state = GameState::standard(42);
        let before = state.rng().state();
        state.draw_into_hand();
        assert_ne!(state.rng().state(), before);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(
            GameState::from_bytes(&[1, 2, 3]),
            Err(SnapshotError::Codec(_))
        ));
    }

    #[test]
    fn test_scripted_deck_draw() {
        let mut deck = Deck::full();
        let mut source = ScriptedSource::new(vec![13]);
        let tile = deck.draw(&mut source).unwrap();

        let state = GameState::standard(1).with_deck(deck);
        assert_eq!(tile, TileId::new(14));
        assert!(!state.deck().contains(tile));
    }
}
