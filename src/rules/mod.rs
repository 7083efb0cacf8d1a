//! Rules of Kuhn Poker.
//!
//! - `table`: the authoritative transition table and payoff settlement
//! - `info`: information-set rendering and indexing
//! - `tree`: enumeration of every reachable history
//!
//! The engine calls into these but never re-implements them.

pub mod info;
pub mod table;
pub mod tree;

pub use info::{info_set_key, InfoSetIndex};
pub use table::{settle, transition, Outcome, Payoff, Transition};
pub use tree::{contributions, terminal_payoff, GameTree, History, NodeKind, TreeNode};
