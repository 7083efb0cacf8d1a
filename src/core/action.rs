//! Betting actions.
//!
//! Kuhn Poker has two actions. PASS checks or folds depending on whether a
//! bet is outstanding; BET bets or calls. Raw inputs (integer indices from an
//! agent, symbols from a history string) are converted with `TryFrom` /
//! `FromStr`, which reject anything else as `InvalidAction`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::KuhnError;

/// A betting action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Check, or fold when facing a bet.
    Pass = 0,
    /// Bet, or call when facing a bet.
    Bet = 1,
}

impl Action {
    /// Both actions in index order.
    pub const ALL: [Action; 2] = [Action::Pass, Action::Bet];

    /// Number of distinct actions.
    pub const COUNT: usize = 2;

    /// Integer index used by agents (PASS=0, BET=1).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// History symbol (`p` or `b`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Action::Pass => 'p',
            Action::Bet => 'b',
        }
    }

    /// Parse a history symbol.
    pub fn from_symbol(symbol: char) -> Result<Self, KuhnError> {
        match symbol {
            'p' => Ok(Action::Pass),
            'b' => Ok(Action::Bet),
            other => Err(KuhnError::invalid_action(other)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Pass => write!(f, "PASS"),
            Action::Bet => write!(f, "BET"),
        }
    }
}

impl TryFrom<i64> for Action {
    type Error = KuhnError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Action::Pass),
            1 => Ok(Action::Bet),
            other => Err(KuhnError::invalid_action(other)),
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = KuhnError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Action::ALL
            .get(index)
            .copied()
            .ok_or_else(|| KuhnError::invalid_action(index))
    }
}

impl FromStr for Action {
    type Err = KuhnError;

    /// Accepts a history symbol (`p`, `b`) or a name (`pass`, `bet`, any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "p" | "pass" => Ok(Action::Pass),
            "b" | "bet" => Ok(Action::Bet),
            _ => Err(KuhnError::invalid_action(s)),
        }
    }
}

/// Render a sequence of actions as history symbols, e.g. `pb`.
pub fn history_symbols(history: &[Action]) -> String {
    history.iter().map(|a| a.symbol()).collect()
}

/// Parse a history string such as `pb` back into actions.
pub fn parse_history(symbols: &str) -> Result<Vec<Action>, KuhnError> {
    symbols.chars().map(Action::from_symbol).collect()
}
