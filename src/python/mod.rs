//! Python bindings for the Kuhn Poker environment.
//!
//! # Quick Start
//!
//! ```python
//! import kuhn_poker
//!
//! env = kuhn_poker.KuhnPokerEnv(seed=42)
//! obs = env.reset()
//!
//! obs, rewards, done, info = env.step(1)  # BET
//! obs, rewards, done, info = env.step(0)  # PASS (fold)
//!
//! assert done and rewards.sum() == 0
//! env.render()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_env;

pub use py_env::*;

/// kuhn_poker: Kuhn Poker environment for RL research.
#[pymodule]
fn kuhn_poker(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyKuhnPokerEnv>()?;
    Ok(())
}
