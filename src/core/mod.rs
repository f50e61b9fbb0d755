//! Core engine types: configuration, errors, players, actions, state, RNG.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::GameConfig;
pub use error::{GameError, IndexTarget, Result, SnapshotError};
pub use player::{Player, PlayerId, PlayerRoster};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedSource};
pub use state::{GameSnapshot, GameState};
