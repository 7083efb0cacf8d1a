//! Core types: cards, actions, players, RNG, configuration, errors.
//!
//! These are the building blocks shared by the rules table, the engine and
//! the environment adapter.

pub mod action;
pub mod card;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{history_symbols, parse_history, Action};
pub use card::{Card, Deal};
pub use config::KuhnConfig;
pub use error::{ConfigError, KuhnError};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
