//! Neural network input encoding.
//!
//! - `StateEncoder`: hand → tensor from one player's perspective
//! - `InfoSetEncoder`: 9-feature one-hot of card and history
//!
//! ## Usage
//!
//! ```
//! use kuhn_poker::core::PlayerId;
//! use kuhn_poker::games::kuhn::KuhnPoker;
//! use kuhn_poker::nn::{InfoSetEncoder, StateEncoder};
//!
//! let engine = KuhnPoker::from_seed(42);
//! let encoded = InfoSetEncoder.encode(engine.state(), PlayerId::P0);
//! assert_eq!(encoded.shape, vec![9]);
//! ```

pub mod encoder;

pub use encoder::{EncodedState, InfoSetEncoder, StateEncoder};
