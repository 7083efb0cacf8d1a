//! Observation records handed to agents.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Card, Deal, PlayerId, PlayerMap};
use crate::games::kuhn::KuhnPoker;
use crate::rules::Payoff;

/// Full-table observation returned by `reset` and `step`.
///
/// Contains both cards; hand each agent its own
/// [`PlayerObservation`] instead when information hiding matters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub cards: Deal,
    /// `None` once the hand is over.
    pub current_player: Option<PlayerId>,
    pub history: Vec<Action>,
    pub info_sets: PlayerMap<String>,
    pub valid_actions: Vec<Action>,
}

impl Observation {
    pub(crate) fn capture(engine: &KuhnPoker) -> Self {
        Self {
            cards: engine.deal(),
            current_player: engine.current_player(),
            history: engine.history().to_vec(),
            info_sets: PlayerMap::new(|p| engine.info_set(p)),
            valid_actions: engine.valid_actions(),
        }
    }

    /// Information set of one player.
    #[must_use]
    pub fn info_set(&self, player: PlayerId) -> &str {
        &self.info_sets[player]
    }
}

/// What a single player is allowed to see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerObservation {
    pub card: Card,
    pub history: Vec<Action>,
    pub info_set: String,
    pub valid_actions: Vec<Action>,
    pub is_current_player: bool,
}

impl PlayerObservation {
    pub(crate) fn capture(engine: &KuhnPoker, player: PlayerId) -> Self {
        Self {
            card: engine.deal().card(player),
            history: engine.history().to_vec(),
            info_set: engine.info_set(player),
            valid_actions: engine.valid_actions(),
            is_current_player: engine.current_player() == Some(player),
        }
    }
}

/// Auxiliary data returned alongside each step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    pub terminal: bool,
    pub history_str: String,
}

/// Result of one environment step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    pub observation: Observation,
    /// Set only when the hand ended on this step.
    pub rewards: Option<Payoff>,
    pub done: bool,
    pub info: StepInfo,
}

impl StepResult {
    /// Split into the conventional `(observation, rewards, done, info)` tuple.
    pub fn into_tuple(self) -> (Observation, Option<Payoff>, bool, StepInfo) {
        (self.observation, self.rewards, self.done, self.info)
    }
}
