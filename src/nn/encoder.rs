//! State encoding for neural network input.
//!
//! Transforms a hand into a tensor from one player's perspective. Encoders
//! only read what that player may observe.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Card, PlayerId};
use crate::games::kuhn::HandState;

/// Maximum number of actions in a hand.
const MAX_HISTORY: usize = 3;

/// Encoded state as a flat tensor for neural network input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Get element at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }
}

/// Encodes a hand into tensors for neural network input.
pub trait StateEncoder: Send + Sync {
    /// Encode the hand from a player's perspective.
    ///
    /// Must not depend on the opponent's card.
    fn encode(&self, state: &HandState, perspective: PlayerId) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Size of the policy output vector.
    fn action_space_size(&self) -> usize {
        Action::COUNT
    }
}

/// One-hot encoding of an information set.
///
/// Layout (9 features):
/// - `[0..3]`: own card (J, Q, K)
/// - `[3..9]`: three history slots, each one-hot over (PASS, BET);
///   slots not yet played stay zero
#[derive(Clone, Copy, Debug, Default)]
pub struct InfoSetEncoder;

impl InfoSetEncoder {
    pub const FEATURES: usize = Card::ALL.len() + MAX_HISTORY * Action::COUNT;

    pub fn new() -> Self {
        Self
    }
}

impl StateEncoder for InfoSetEncoder {
    fn encode(&self, state: &HandState, perspective: PlayerId) -> EncodedState {
        let mut tensor = vec![0.0f32; Self::FEATURES];

        tensor[state.deal().card(perspective).rank()] = 1.0;

        let base = Card::ALL.len();
        for (slot, action) in state.history().iter().enumerate() {
            tensor[base + slot * Action::COUNT + action.index()] = 1.0;
        }

        EncodedState::new(tensor, vec![Self::FEATURES])
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![Self::FEATURES]
    }
}
