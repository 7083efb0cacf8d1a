//! Kuhn Poker.
//!
//! Three cards (J < Q < K), two players, ante 1, one betting round:
//! - Player 0 passes or bets
//! - Facing a pass, player 1 passes (showdown) or bets
//! - Facing a bet, the player passes (folds) or bets (calls, showdown)
//!
//! The engine deals from its own seeded RNG and referees one hand at a time.

mod game;
mod state;

pub use game::KuhnPoker;
pub use state::{ActionOutcome, HandState};
