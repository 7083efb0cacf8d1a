//! State of one hand.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::core::config::check_stakes;
use crate::core::{history_symbols, Action, Deal, KuhnError, PlayerId, PlayerMap};
use crate::rules::{info_set_key, settle, transition, History, Payoff, Transition};

/// What `apply_action` reports back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// Whether the hand ended with this action.
    pub terminal: bool,
    /// Set exactly when `terminal` is.
    pub payoff: Option<Payoff>,
}

/// Deal, history, pot and result of the hand in progress.
///
/// Created fresh for every hand; only [`HandState::apply`] mutates it.
/// Serialized as deal, stakes and history. Deserializing replays the
/// history, so pot, turn and result always agree with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandState {
    deal: Deal,
    history: History,
    ante: i32,
    bet_size: i32,
    pot: PlayerMap<i32>,
    terminal: bool,
    payoff: Option<Payoff>,
    current_player: PlayerId,
}

impl HandState {
    /// Fresh hand: antes posted, player 0 to act. Stakes must already have
    /// passed [`check_stakes`].
    pub(crate) fn new(deal: Deal, ante: i32, bet_size: i32) -> Self {
        Self {
            deal,
            history: History::new(),
            ante,
            bet_size,
            pot: PlayerMap::with_value(ante),
            terminal: false,
            payoff: None,
            current_player: PlayerId::P0,
        }
    }

    /// Append an action and apply its row of the transition table.
    ///
    /// Rejects without mutating if the hand is already over.
    pub(crate) fn apply(&mut self, action: Action) -> Result<ActionOutcome, KuhnError> {
        if self.terminal {
            return Err(KuhnError::illegal_state(self.history_string()));
        }
        let step = transition(&self.history, action)
            .ok_or_else(|| KuhnError::illegal_state(self.history_string()))?;

        self.history.push(action);
        if let Some(bettor) = step.bettor() {
            self.pot[bettor] += self.bet_size;
        }
        match step {
            Transition::Continue { next, .. } => {
                self.current_player = next;
            }
            Transition::Terminal { outcome, .. } => {
                self.terminal = true;
                self.payoff = Some(settle(outcome, &self.deal, &self.pot));
            }
        }

        Ok(ActionOutcome {
            terminal: self.terminal,
            payoff: self.payoff,
        })
    }

    /// Legal actions: none once terminal, otherwise both.
    #[must_use]
    pub fn valid_actions(&self) -> Vec<Action> {
        if self.terminal {
            Vec::new()
        } else {
            Action::ALL.to_vec()
        }
    }

    /// `<own card>-<history>`, e.g. `K-pb`.
    #[must_use]
    pub fn info_set(&self, player: PlayerId) -> String {
        info_set_key(self.deal.card(player), &self.history)
    }

    /// History rendered as symbols, e.g. `pb`.
    #[must_use]
    pub fn history_string(&self) -> String {
        history_symbols(&self.history)
    }

    /// Player to act, or `None` once the hand is over.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        (!self.terminal).then_some(self.current_player)
    }

    #[must_use]
    pub fn deal(&self) -> Deal {
        self.deal
    }

    #[must_use]
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    #[must_use]
    pub fn pot(&self) -> &PlayerMap<i32> {
        &self.pot
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    #[must_use]
    pub fn payoff(&self) -> Option<Payoff> {
        self.payoff
    }
}

/// Wire form of a hand. Everything else is derived on replay.
#[derive(Serialize, Deserialize)]
struct HandRecord {
    deal: Deal,
    history: History,
    ante: i32,
    bet_size: i32,
}

impl Serialize for HandState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        HandRecord {
            deal: self.deal,
            history: self.history.clone(),
            ante: self.ante,
            bet_size: self.bet_size,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for HandState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = HandRecord::deserialize(deserializer)?;
        check_stakes(record.ante, record.bet_size).map_err(de::Error::custom)?;

        let mut hand = HandState::new(record.deal, record.ante, record.bet_size);
        for &action in &record.history {
            hand.apply(action).map_err(de::Error::custom)?;
        }
        Ok(hand)
    }
}

/// Human-readable summary: both cards, history, pot, and result or turn.
impl fmt::Display for HandState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cards: {}", self.deal)?;
        writeln!(f, "History: {}", self.history_string())?;
        writeln!(
            f,
            "Pot: P0={}, P1={}",
            self.pot[PlayerId::P0],
            self.pot[PlayerId::P1]
        )?;
        match self.payoff {
            Some(payoff) if self.terminal => write!(f, "Terminal. Payoffs: {payoff}"),
            _ => write!(f, "Current player: {}", self.current_player.index()),
        }
    }
}
