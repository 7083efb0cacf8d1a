//! The transition table and payoff settlement.
//!
//! Every legal step of a hand is one arm of [`transition`]. The engine never
//! re-derives whose turn it is or whether the hand ended from anything else:
//! it asks the table and applies the answer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Action, Deal, PlayerId, PlayerMap};

/// How a finished hand is decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Cards are compared; the higher card wins.
    Showdown,
    /// One player passed while facing a bet.
    Fold {
        /// The player who did not fold.
        winner: PlayerId,
    },
}

impl Outcome {
    /// The winning player for a given deal.
    #[must_use]
    pub fn winner(&self, deal: &Deal) -> PlayerId {
        match self {
            Outcome::Showdown => deal.high_card_holder(),
            Outcome::Fold { winner } => *winner,
        }
    }
}

/// Result of appending one action to a history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The hand goes on.
    Continue {
        /// Player to act next.
        next: PlayerId,
        /// Player whose contribution grows by the bet size, if any.
        bettor: Option<PlayerId>,
    },
    /// The hand is over.
    Terminal {
        /// Player whose contribution grows by the bet size, if any.
        bettor: Option<PlayerId>,
        outcome: Outcome,
    },
}

impl Transition {
    /// Player whose contribution grows with this step.
    #[must_use]
    pub fn bettor(&self) -> Option<PlayerId> {
        match self {
            Transition::Continue { bettor, .. } | Transition::Terminal { bettor, .. } => *bettor,
        }
    }

    /// Check if this step ends the hand.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Transition::Terminal { .. })
    }
}

/// Look up the step taken by `action` after `prior`.
///
/// Returns `None` when `prior` is already a finished hand (or not a
/// reachable history at all).
#[must_use]
pub fn transition(prior: &[Action], action: Action) -> Option<Transition> {
    use Action::{Bet, Pass};
    use Transition::{Continue, Terminal};

    let step = match (prior, action) {
        ([], Pass) => Continue {
            next: PlayerId::P1,
            bettor: None,
        },
        ([], Bet) => Continue {
            next: PlayerId::P1,
            bettor: Some(PlayerId::P0),
        },
        ([Pass], Pass) => Terminal {
            bettor: None,
            outcome: Outcome::Showdown,
        },
        ([Pass], Bet) => Continue {
            next: PlayerId::P0,
            bettor: Some(PlayerId::P1),
        },
        ([Bet], Pass) => Terminal {
            bettor: None,
            outcome: Outcome::Fold {
                winner: PlayerId::P0,
            },
        },
        ([Bet], Bet) => Terminal {
            bettor: Some(PlayerId::P1),
            outcome: Outcome::Showdown,
        },
        ([Pass, Bet], Pass) => Terminal {
            bettor: None,
            outcome: Outcome::Fold {
                winner: PlayerId::P1,
            },
        },
        ([Pass, Bet], Bet) => Terminal {
            bettor: Some(PlayerId::P0),
            outcome: Outcome::Showdown,
        },
        _ => return None,
    };
    Some(step)
}

/// Chips won or lost by each player in a finished hand. Always sums to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payoff(PlayerMap<i32>);

impl Payoff {
    /// Payoff where `winner` takes the loser's whole contribution.
    #[must_use]
    pub fn award(winner: PlayerId, pot: &PlayerMap<i32>) -> Self {
        let amount = pot[winner.opponent()];
        let mut values = PlayerMap::with_value(-amount);
        values[winner] = amount;
        Self(values)
    }

    /// A player's chips won (positive) or lost (negative).
    #[must_use]
    pub fn get(&self, player: PlayerId) -> i32 {
        self.0[player]
    }

    /// Both values in seat order.
    #[must_use]
    pub fn as_array(&self) -> [i32; 2] {
        *self.0.as_array()
    }

    /// Sum over both players; zero for every payoff the engine produces.
    #[must_use]
    pub fn sum(&self) -> i32 {
        self.0.as_array().iter().sum()
    }
}

impl From<Payoff> for [i32; 2] {
    fn from(payoff: Payoff) -> Self {
        payoff.as_array()
    }
}

impl fmt::Display for Payoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.as_array();
        write!(f, "[{a}, {b}]")
    }
}

/// Settle a finished hand.
///
/// The winner gains what the loser put in and the loser loses it. Folds and
/// showdowns both reduce to this once the winner is known.
#[must_use]
pub fn settle(outcome: Outcome, deal: &Deal, pot: &PlayerMap<i32>) -> Payoff {
    Payoff::award(outcome.winner(deal), pot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Card;

    #[test]
    fn test_opening_actions_continue() {
        assert_eq!(
            transition(&[], Action::Pass),
            Some(Transition::Continue {
                next: PlayerId::P1,
                bettor: None
            })
        );
        assert_eq!(
            transition(&[], Action::Bet),
            Some(Transition::Continue {
                next: PlayerId::P1,
                bettor: Some(PlayerId::P0)
            })
        );
    }

    #[test]
    fn test_check_bet_returns_to_first_player() {
        let step = transition(&[Action::Pass], Action::Bet).unwrap();
        assert_eq!(
            step,
            Transition::Continue {
                next: PlayerId::P0,
                bettor: Some(PlayerId::P1)
            }
        );
    }

    #[test]
    fn test_folds() {
        let step = transition(&[Action::Bet], Action::Pass).unwrap();
        assert_eq!(step.bettor(), None);
        assert!(matches!(
            step,
            Transition::Terminal {
                outcome: Outcome::Fold { winner },
                ..
            } if winner == PlayerId::P0
        ));

        let step = transition(&[Action::Pass, Action::Bet], Action::Pass).unwrap();
        assert!(matches!(
            step,
            Transition::Terminal {
                outcome: Outcome::Fold { winner },
                ..
            } if winner == PlayerId::P1
        ));
    }

    #[test]
    fn test_showdowns() {
        let cases = [
            (vec![Action::Pass], Action::Pass, None),
            (vec![Action::Bet], Action::Bet, Some(PlayerId::P1)),
            (vec![Action::Pass, Action::Bet], Action::Bet, Some(PlayerId::P0)),
        ];
        for (prior, action, bettor) in cases {
            let step = transition(&prior, action).unwrap();
            assert_eq!(
                step,
                Transition::Terminal {
                    bettor,
                    outcome: Outcome::Showdown
                }
            );
        }
    }

    #[test]
    fn test_finished_histories_have_no_transition() {
        let finished: [&[Action]; 5] = [
            &[Action::Pass, Action::Pass],
            &[Action::Bet, Action::Pass],
            &[Action::Bet, Action::Bet],
            &[Action::Pass, Action::Bet, Action::Pass],
            &[Action::Pass, Action::Bet, Action::Bet],
        ];
        for prior in finished {
            for action in Action::ALL {
                assert_eq!(transition(prior, action), None);
            }
        }
    }

    #[test]
    fn test_award_uses_loser_contribution() {
        let pot = PlayerMap::from_array([1, 2]);

        let payoff = Payoff::award(PlayerId::P1, &pot);
        assert_eq!(payoff.as_array(), [-1, 1]);

        let payoff = Payoff::award(PlayerId::P0, &pot);
        assert_eq!(payoff.as_array(), [2, -2]);
        assert_eq!(payoff.sum(), 0);
    }

    #[test]
    fn test_settle_showdown() {
        let pot = PlayerMap::from_array([2, 2]);
        let deal = Deal::new(Card::Jack, Card::Queen).unwrap();

        let payoff = settle(Outcome::Showdown, &deal, &pot);
        assert_eq!(payoff.as_array(), [-2, 2]);
        assert_eq!(payoff.to_string(), "[-2, 2]");
    }

    #[test]
    fn test_payoff_serialization() {
        let payoff = Payoff::award(PlayerId::P0, &PlayerMap::with_value(1));
        let json = serde_json::to_string(&payoff).unwrap();
        assert_eq!(json, "[1,-1]");
    }
}
