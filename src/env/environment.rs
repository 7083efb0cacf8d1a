//! Agent-environment loop over the engine.

use tracing::debug;

use crate::core::{Action, Card, ConfigError, KuhnConfig, KuhnError, PlayerId};
use crate::games::kuhn::KuhnPoker;
use crate::nn::{EncodedState, InfoSetEncoder, StateEncoder};

use super::observation::{Observation, PlayerObservation, StepInfo, StepResult};

/// Reset/step wrapper around [`KuhnPoker`].
///
/// Actions are integer indices (0=PASS, 1=BET). Rewards are reported only on
/// the step that ends the hand.
#[derive(Clone, Debug)]
pub struct KuhnPokerEnv {
    game: KuhnPoker,
}

impl Default for KuhnPokerEnv {
    fn default() -> Self {
        Self {
            game: KuhnPoker::from_seed(KuhnConfig::default().seed),
        }
    }
}

impl KuhnPokerEnv {
    /// Size of the action space.
    pub const NUM_ACTIONS: usize = Action::COUNT;

    /// Size of the deck.
    pub const NUM_CARDS: usize = Card::ALL.len();

    /// Create an environment. A hand is dealt immediately, but agents should
    /// still call [`reset`](Self::reset) to receive the first observation.
    pub fn new(config: KuhnConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            game: KuhnPoker::new(config)?,
        })
    }

    /// Deal a new hand and return the opening observation.
    pub fn reset(&mut self) -> Observation {
        let deal = self.game.reset();
        debug!(%deal, "new hand");
        Observation::capture(&self.game)
    }

    /// Apply an action index for the player to act.
    pub fn step(&mut self, action: i64) -> Result<StepResult, KuhnError> {
        let outcome = self.game.apply_index(action)?;
        let info = StepInfo {
            terminal: outcome.terminal,
            history_str: self.game.history_string(),
        };
        if let Some(payoff) = outcome.payoff {
            debug!(history = %info.history_str, %payoff, "hand over");
        }

        Ok(StepResult {
            observation: Observation::capture(&self.game),
            rewards: outcome.payoff,
            done: outcome.terminal,
            info,
        })
    }

    /// Observation restricted to one player's knowledge.
    #[must_use]
    pub fn observation_for(&self, player: PlayerId) -> PlayerObservation {
        PlayerObservation::capture(&self.game, player)
    }

    /// Network input for one player.
    #[must_use]
    pub fn encode(&self, player: PlayerId) -> EncodedState {
        InfoSetEncoder.encode(self.game.state(), player)
    }

    /// Human-readable table state. Does not touch the hand.
    #[must_use]
    pub fn render(&self) -> String {
        self.game.state().to_string()
    }

    /// The underlying engine.
    #[must_use]
    pub fn game(&self) -> &KuhnPoker {
        &self.game
    }
}
