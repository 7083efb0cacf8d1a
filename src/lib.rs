//! # kuhn-poker
//!
//! A Kuhn Poker rules engine and environment for game-theory and RL research.
//!
//! ## Design Principles
//!
//! 1. **The table is the rules**: every legal step of a hand is one arm of
//!    `rules::transition`. The engine, the game tree and the payoff
//!    calculation all read from it.
//!
//! 2. **Owned randomness**: each engine owns a seeded ChaCha8 stream, so
//!    deals are reproducible and engines never share state.
//!
//! 3. **Errors are values**: rejected calls return `KuhnError` and leave the
//!    hand untouched.
//!
//! ## Modules
//!
//! - `core`: Cards, actions, players, RNG, configuration, errors
//! - `rules`: Transition table, payoffs, information sets, game tree
//! - `games`: The Kuhn Poker engine
//! - `env`: Reset/step environment adapter
//! - `nn`: Observation encoding for neural networks
//!
//! ## Example
//!
//! ```
//! use kuhn_poker::{Action, Card, Deal, KuhnPoker, PlayerId};
//!
//! let mut game = KuhnPoker::from_seed(42);
//! game.reset_with(Deal::new(Card::King, Card::Queen).unwrap());
//!
//! game.apply_action(Action::Pass).unwrap();
//! game.apply_action(Action::Bet).unwrap();
//! assert_eq!(game.info_set(PlayerId::P0), "K-pb");
//!
//! let outcome = game.apply_action(Action::Bet).unwrap();
//! assert!(outcome.terminal);
//! assert_eq!(outcome.payoff.unwrap().as_array(), [2, -2]);
//! ```

pub mod core;
pub mod env;
pub mod games;
pub mod nn;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, Card, ConfigError, Deal, GameRng, GameRngState, KuhnConfig, KuhnError, PlayerId,
    PlayerMap,
};

pub use crate::rules::{GameTree, InfoSetIndex, Outcome, Payoff, Transition};

pub use crate::games::kuhn::{ActionOutcome, HandState, KuhnPoker};

pub use crate::env::{KuhnPokerEnv, Observation, PlayerObservation, StepInfo, StepResult};

pub use crate::nn::{EncodedState, InfoSetEncoder, StateEncoder};
