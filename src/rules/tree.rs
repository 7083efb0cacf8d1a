//! Full enumeration of the betting tree.
//!
//! The tree is built by walking [`transition`] from the empty history, so it
//! always agrees with the engine. It has depth 3 and branching factor 2:
//! four decision nodes and five terminal leaves.

use smallvec::SmallVec;

use super::info::{info_set_key, InfoSetIndex};
use super::table::{settle, transition, Outcome, Payoff, Transition};
use crate::core::{history_symbols, Action, Card, Deal, KuhnConfig, PlayerId, PlayerMap};

/// A betting history. Never longer than three actions.
pub type History = SmallVec<[Action; 3]>;

/// What happens at a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// `player` must choose an action.
    Decision { player: PlayerId },
    /// The hand is over.
    Terminal { outcome: Outcome },
}

/// A reachable history together with its role in the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub history: History,
    pub kind: NodeKind,
}

impl TreeNode {
    /// Check if this node ends the hand.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Terminal { .. })
    }

    /// History rendered as symbols.
    #[must_use]
    pub fn history_string(&self) -> String {
        history_symbols(&self.history)
    }
}

/// Every reachable history, in pre-order (PASS branch first).
#[derive(Clone, Debug)]
pub struct GameTree {
    nodes: Vec<TreeNode>,
}

impl Default for GameTree {
    fn default() -> Self {
        Self::new()
    }
}

impl GameTree {
    /// Build the tree.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = Vec::new();
        Self::walk(&mut History::new(), PlayerId::P0, &mut nodes);
        Self { nodes }
    }

    fn walk(history: &mut History, player: PlayerId, nodes: &mut Vec<TreeNode>) {
        nodes.push(TreeNode {
            history: history.clone(),
            kind: NodeKind::Decision { player },
        });

        for action in Action::ALL {
            let Some(step) = transition(history.as_slice(), action) else {
                continue;
            };
            history.push(action);
            match step {
                Transition::Continue { next, .. } => Self::walk(history, next, nodes),
                Transition::Terminal { outcome, .. } => nodes.push(TreeNode {
                    history: history.clone(),
                    kind: NodeKind::Terminal { outcome },
                }),
            }
            history.pop();
        }
    }

    /// All nodes.
    #[must_use]
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Nodes where a player acts.
    pub fn decision_nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter().filter(|n| !n.is_terminal())
    }

    /// Leaves.
    pub fn terminal_nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter().filter(|n| n.is_terminal())
    }

    /// Find the node for a history.
    #[must_use]
    pub fn find(&self, history: &[Action]) -> Option<&TreeNode> {
        self.nodes.iter().find(|n| n.history.as_slice() == history)
    }

    /// Index every decision information set: each card at each decision node.
    #[must_use]
    pub fn info_sets(&self) -> InfoSetIndex {
        let mut index = InfoSetIndex::new();
        for node in self.decision_nodes() {
            if let NodeKind::Decision { player } = node.kind {
                for card in Card::ALL {
                    index.insert(info_set_key(card, &node.history), player);
                }
            }
        }
        index
    }
}

/// Pot contributions after replaying `history`, or `None` if the history is
/// not reachable.
#[must_use]
pub fn contributions(history: &[Action], config: &KuhnConfig) -> Option<PlayerMap<i32>> {
    let mut pot = PlayerMap::with_value(config.ante);
    for (i, &action) in history.iter().enumerate() {
        if let Some(bettor) = transition(&history[..i], action)?.bettor() {
            pot[bettor] += config.bet_size;
        }
    }
    Some(pot)
}

/// Payoff of a terminal history under a deal, or `None` if the history is
/// not a reachable leaf.
#[must_use]
pub fn terminal_payoff(history: &[Action], deal: &Deal, config: &KuhnConfig) -> Option<Payoff> {
    let (&last, prior) = history.split_last()?;
    let Transition::Terminal { outcome, .. } = transition(prior, last)? else {
        return None;
    };
    let pot = contributions(history, config)?;
    Some(settle(outcome, deal, &pot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_history;

    fn leaf_strings(tree: &GameTree) -> Vec<String> {
        tree.terminal_nodes().map(TreeNode::history_string).collect()
    }

    #[test]
    fn test_tree_shape() {
        let tree = GameTree::new();
        assert_eq!(tree.nodes().len(), 9);
        assert_eq!(tree.decision_nodes().count(), 4);
        assert_eq!(tree.terminal_nodes().count(), 5);
        assert_eq!(leaf_strings(&tree), vec!["pp", "pbp", "pbb", "bp", "bb"]);

        let node = tree.find(&[Action::Bet, Action::Pass]).unwrap();
        assert_eq!(
            node.kind,
            NodeKind::Terminal {
                outcome: Outcome::Fold { winner: PlayerId::P0 }
            }
        );
        assert!(tree.find(&[Action::Pass, Action::Pass, Action::Pass]).is_none());
    }

    #[test]
    fn test_acting_players() {
        let tree = GameTree::new();
        let actors: Vec<_> = tree
            .decision_nodes()
            .map(|n| match n.kind {
                NodeKind::Decision { player } => (n.history_string(), player),
                NodeKind::Terminal { .. } => unreachable!(),
            })
            .collect();
        assert_eq!(
            actors,
            vec![
                (String::new(), PlayerId::P0),
                ("p".to_string(), PlayerId::P1),
                ("pb".to_string(), PlayerId::P0),
                ("b".to_string(), PlayerId::P1),
            ]
        );
    }

    #[test]
    fn test_info_set_count() {
        let index = GameTree::new().info_sets();
        assert_eq!(index.len(), 12);
        let p0 = index.iter().filter(|(_, _, p)| *p == PlayerId::P0).count();
        assert_eq!(p0, 6);
        assert!(index.get("K-pb").is_some());
        assert!(index.get("K-pp").is_none());
    }

    #[test]
    fn test_contributions() {
        let config = KuhnConfig::default();
        let pot = contributions(&parse_history("pbb").unwrap(), &config).unwrap();
        assert_eq!(pot.into_array(), [2, 2]);

        let pot = contributions(&parse_history("pbp").unwrap(), &config).unwrap();
        assert_eq!(pot.into_array(), [1, 2]);

        assert!(contributions(&parse_history("ppp").unwrap(), &config).is_none());
    }

    #[test]
    fn test_terminal_payoffs_are_zero_sum() {
        let config = KuhnConfig::default().with_ante(2).with_bet_size(3);
        let tree = GameTree::new();
        for deal in Deal::all() {
            for leaf in tree.terminal_nodes() {
                let payoff = terminal_payoff(&leaf.history, &deal, &config).unwrap();
                assert_eq!(payoff.sum(), 0, "{} {}", deal, leaf.history_string());
            }
        }
    }

    #[test]
    fn test_terminal_payoff_rejects_decision_nodes() {
        let config = KuhnConfig::default();
        let deal = Deal::new(Card::King, Card::Jack).unwrap();
        assert!(terminal_payoff(&[], &deal, &config).is_none());
        assert!(terminal_payoff(&[Action::Pass, Action::Bet], &deal, &config).is_none());
    }
}
