//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Kuhn Poker always has exactly two seats, so
//! only `PlayerId::P0` and `PlayerId::P1` can be constructed.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by a fixed `[T; 2]` for O(1) access.
//! Used for pot contributions, payoffs and per-player info sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier: seat 0 (acts first) or seat 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player to act in every hand.
    pub const P0: PlayerId = PlayerId(0);
    /// The second player.
    pub const P1: PlayerId = PlayerId(1);

    /// Get a player from a 0-based seat index, or `None` if out of range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<PlayerId> {
        match index {
            0 => Some(Self::P0),
            1 => Some(Self::P1),
            _ => None,
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Iterate over both seats in order.
    ///
    /// ```
    /// use kuhn_poker::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::P0, PlayerId::P1]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::P0, Self::P1].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PlayerId::from_index(value as usize).ok_or("player index must be 0 or 1")
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use kuhn_poker::core::{PlayerId, PlayerMap};
///
/// let mut pot: PlayerMap<i32> = PlayerMap::with_value(1);
/// pot[PlayerId::P1] += 1;
///
/// assert_eq!(pot[PlayerId::P0], 1);
/// assert_eq!(pot[PlayerId::P1], 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::P0), factory(PlayerId::P1)],
        }
    }

    /// Create from explicit values for player 0 and player 1.
    pub const fn from_array(data: [T; PLAYER_COUNT]) -> Self {
        Self { data }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Borrow the values in seat order.
    #[must_use]
    pub fn as_array(&self) -> &[T; PLAYER_COUNT] {
        &self.data
    }

    /// Consume into the values in seat order.
    pub fn into_array(self) -> [T; PLAYER_COUNT] {
        self.data
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
