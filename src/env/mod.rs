//! Environment adapter for agent loops.
//!
//! Wraps the engine in the usual `reset` / `step` / `render` interface and
//! repackages its answers into observation records.
//!
//! ```
//! use kuhn_poker::core::KuhnConfig;
//! use kuhn_poker::env::KuhnPokerEnv;
//!
//! let mut env = KuhnPokerEnv::new(KuhnConfig::default().with_seed(1)).unwrap();
//! let obs = env.reset();
//! assert_eq!(obs.valid_actions.len(), 2);
//!
//! let (_, rewards, done, info) = env.step(0).unwrap().into_tuple();
//! assert!(!done && rewards.is_none());
//! assert_eq!(info.history_str, "p");
//! ```

mod environment;
mod observation;

pub use environment::KuhnPokerEnv;
pub use observation::{Observation, PlayerObservation, StepInfo, StepResult};
