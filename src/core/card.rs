//! Cards and deals.
//!
//! The deck has three ranks. Only relative order matters: the higher card
//! wins a showdown.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::player::PlayerId;

/// A card rank, ordered Jack < Queen < King.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    Jack = 0,
    Queen = 1,
    King = 2,
}

impl Card {
    /// The full deck, lowest rank first.
    pub const ALL: [Card; 3] = [Card::Jack, Card::Queen, Card::King];

    /// Ordinal rank (J=0, Q=1, K=2).
    #[must_use]
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// Single-character symbol used in information sets and renders.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Card::Jack => 'J',
            Card::Queen => 'Q',
            Card::King => 'K',
        }
    }

    /// Look up a card by ordinal rank.
    #[must_use]
    pub fn from_rank(rank: usize) -> Option<Card> {
        Card::ALL.get(rank).copied()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Cards dealt to player 0 and player 1. The two cards are always distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(Card, Card)", into = "(Card, Card)")]
pub struct Deal(Card, Card);

impl TryFrom<(Card, Card)> for Deal {
    type Error = &'static str;

    fn try_from((first, second): (Card, Card)) -> Result<Self, Self::Error> {
        Deal::new(first, second).ok_or("both players cannot hold the same card")
    }
}

impl From<Deal> for (Card, Card) {
    fn from(deal: Deal) -> Self {
        deal.as_pair()
    }
}

impl Deal {
    /// Create a deal, or `None` if both players would hold the same card.
    #[must_use]
    pub fn new(first: Card, second: Card) -> Option<Self> {
        (first != second).then_some(Self(first, second))
    }

    /// Take the first two cards of a shuffled deck.
    pub(crate) fn from_deck(deck: &[Card; 3]) -> Self {
        debug_assert_ne!(deck[0], deck[1]);
        Self(deck[0], deck[1])
    }

    /// All six ordered deals.
    pub fn all() -> impl Iterator<Item = Deal> {
        Card::ALL
            .into_iter()
            .flat_map(|a| Card::ALL.into_iter().filter_map(move |b| Deal::new(a, b)))
    }

    /// The card held by a player.
    #[must_use]
    pub fn card(&self, player: PlayerId) -> Card {
        if player == PlayerId::P0 {
            self.0
        } else {
            self.1
        }
    }

    /// The card left in the deck.
    #[must_use]
    pub fn undealt(&self) -> Card {
        Card::ALL
            .into_iter()
            .find(|c| *c != self.0 && *c != self.1)
            .unwrap_or(Card::Jack)
    }

    /// The player holding the higher card.
    #[must_use]
    pub fn high_card_holder(&self) -> PlayerId {
        if self.0 > self.1 {
            PlayerId::P0
        } else {
            PlayerId::P1
        }
    }

    /// As a `(card₀, card₁)` pair.
    #[must_use]
    pub fn as_pair(&self) -> (Card, Card) {
        (self.0, self.1)
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P0={}, P1={}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_order() {
        assert!(Card::Jack < Card::Queen);
        assert!(Card::Queen < Card::King);
        assert_eq!(Card::from_rank(2), Some(Card::King));
        assert_eq!(Card::from_rank(3), None);
    }

    #[test]
    fn test_card_symbols() {
        let symbols: String = Card::ALL.iter().map(|c| c.symbol()).collect();
        assert_eq!(symbols, "JQK");
        assert_eq!(Card::Queen.to_string(), "Q");
    }

    #[test]
    fn test_deal_rejects_pairs() {
        assert!(Deal::new(Card::King, Card::King).is_none());
        assert!(Deal::new(Card::King, Card::Jack).is_some());
    }

    #[test]
    fn test_all_deals() {
        let deals: Vec<_> = Deal::all().collect();
        assert_eq!(deals.len(), 6);
        for deal in &deals {
            let (a, b) = deal.as_pair();
            assert_ne!(a, b);
            assert_ne!(deal.undealt(), a);
            assert_ne!(deal.undealt(), b);
        }
    }

    #[test]
    fn test_deal_accessors() {
        let deal = Deal::new(Card::Queen, Card::King).unwrap();
        assert_eq!(deal.card(PlayerId::P0), Card::Queen);
        assert_eq!(deal.card(PlayerId::P1), Card::King);
        assert_eq!(deal.undealt(), Card::Jack);
        assert_eq!(deal.high_card_holder(), PlayerId::P1);
        assert_eq!(deal.to_string(), "P0=Q, P1=K");
    }

    #[test]
    fn test_deal_serialization() {
        let deal = Deal::new(Card::King, Card::Jack).unwrap();
        let json = serde_json::to_string(&deal).unwrap();
        let deserialized: Deal = serde_json::from_str(&json).unwrap();
        assert_eq!(deal, deserialized);

        let paired: Result<Deal, _> = serde_json::from_str("[\"King\",\"King\"]");
        assert!(paired.is_err());
    }
}
