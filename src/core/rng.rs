//! Seeded deal stream.
//!
//! Every engine owns one [`GameRng`]. Dealing shuffles the three-card deck
//! and hands the top two cards to player 0 and player 1, so the same seed
//! always yields the same sequence of deals.
//!
//! ```
//! use kuhn_poker::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.deal(), b.deal());
//!
//! // A checkpoint resumes the stream where it left off.
//! let saved = a.state();
//! let next = a.deal();
//! assert_eq!(GameRng::from_state(&saved).deal(), next);
//! ```

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::card::{Card, Deal};

/// ChaCha8 stream that deals hands.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Shuffle the deck and deal the top two cards.
    pub fn deal(&mut self) -> Deal {
        let mut deck = Card::ALL;
        deck.shuffle(&mut self.inner);
        Deal::from_deck(&deck)
    }

    /// Split off a new stream seeded from this one.
    ///
    /// The child depends only on the parent's seed and position, and
    /// advances the parent past the word it consumed.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.inner.next_u64())
    }

    /// Pick one of `options` uniformly, or `None` if there are none.
    #[must_use]
    pub fn choose<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        options.choose(&mut self.inner)
    }

    /// Seed and stream position, for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Checkpoint of a [`GameRng`]. Restoring is O(1) however many hands were
/// dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha word position.
    pub word_pos: u128,
}
