//! Error types.
//!
//! The engine only ever rejects a call for one of two reasons: the hand is
//! already over, or the action is not one of the two legal symbols. Both are
//! caller contract violations and are returned, never retried or logged.
//!
//! Configuration loading has its own error type so that engine callers never
//! have to match on variants that cannot occur during play.

use thiserror::Error;

/// Engine rejection. A rejected call leaves the hand untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KuhnError {
    /// A mutating call was made after the hand reached a terminal state.
    #[error("hand is already terminal (history: {history:?}); reset before acting")]
    IllegalState {
        /// History of the finished hand, rendered as action symbols.
        history: String,
    },

    /// The action is not PASS or BET.
    #[error("invalid action: {input}")]
    InvalidAction {
        /// The rejected input as received.
        input: String,
    },
}

impl KuhnError {
    pub(crate) fn illegal_state(history: impl Into<String>) -> Self {
        Self::IllegalState {
            history: history.into(),
        }
    }

    pub(crate) fn invalid_action(input: impl ToString) -> Self {
        Self::InvalidAction {
            input: input.to_string(),
        }
    }

    /// Check if this is an `IllegalState` rejection.
    #[must_use]
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState { .. })
    }

    /// Check if this is an `InvalidAction` rejection.
    #[must_use]
    pub fn is_invalid_action(&self) -> bool {
        matches!(self, Self::InvalidAction { .. })
    }
}

/// Failure to load a [`KuhnConfig`](super::KuhnConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid value for `{field}`: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}
