//! Information sets.
//!
//! An information set is what one player can see: their own card and the
//! public betting history, rendered as `<card>-<history>` (e.g. `K-pb`).
//! The opponent's card never appears.

use rustc_hash::FxHashMap;

use crate::core::{history_symbols, Action, Card, PlayerId};

/// Render the information set for a card and a public history.
#[must_use]
pub fn info_set_key(card: Card, history: &[Action]) -> String {
    format!("{}-{}", card.symbol(), history_symbols(history))
}

/// Stable dense index over decision information sets.
///
/// Tabular learners (regret tables, average strategies) key their storage by
/// the returned index rather than by string.
#[derive(Clone, Debug, Default)]
pub struct InfoSetIndex {
    keys: Vec<String>,
    owners: Vec<PlayerId>,
    lookup: FxHashMap<String, usize>,
}

impl InfoSetIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an information set owned by `player`, returning its index.
    /// Inserting an existing key returns the existing index.
    pub fn insert(&mut self, key: String, player: PlayerId) -> usize {
        if let Some(&index) = self.lookup.get(&key) {
            return index;
        }
        let index = self.keys.len();
        self.lookup.insert(key.clone(), index);
        self.keys.push(key);
        self.owners.push(player);
        index
    }

    /// Index of a key, if known.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<usize> {
        self.lookup.get(key).copied()
    }

    /// Key stored at an index.
    #[must_use]
    pub fn key(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    /// Player who acts at an index.
    #[must_use]
    pub fn owner(&self, index: usize) -> Option<PlayerId> {
        self.owners.get(index).copied()
    }

    /// Number of information sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over (index, key, owner) in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, PlayerId)> {
        self.keys
            .iter()
            .zip(self.owners.iter())
            .enumerate()
            .map(|(i, (k, p))| (i, k.as_str(), *p))
    }
}
