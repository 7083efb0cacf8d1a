//! Environment bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{KuhnConfig, PlayerId};
use crate::env::{KuhnPokerEnv, Observation, PlayerObservation, StepInfo};

use super::py_core::{actions_to_indices, to_py_err};

fn player_arg(player: usize) -> PyResult<PlayerId> {
    PlayerId::from_index(player)
        .ok_or_else(|| PyValueError::new_err(format!("player must be 0 or 1, got {player}")))
}

fn observation_dict<'py>(py: Python<'py>, obs: &Observation) -> PyResult<Bound<'py, PyDict>> {
    let (c0, c1) = obs.cards.as_pair();
    let dict = PyDict::new_bound(py);
    dict.set_item("cards", (c0.rank(), c1.rank()))?;
    dict.set_item("current_player", obs.current_player.map(PlayerId::index))?;
    dict.set_item("history", actions_to_indices(&obs.history))?;
    dict.set_item("info_set_p0", obs.info_set(PlayerId::P0))?;
    dict.set_item("info_set_p1", obs.info_set(PlayerId::P1))?;
    dict.set_item("valid_actions", actions_to_indices(&obs.valid_actions))?;
    Ok(dict)
}

fn player_dict<'py>(py: Python<'py>, obs: &PlayerObservation) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("card", obs.card.rank())?;
    dict.set_item("history", actions_to_indices(&obs.history))?;
    dict.set_item("info_set", &obs.info_set)?;
    dict.set_item("valid_actions", actions_to_indices(&obs.valid_actions))?;
    dict.set_item("is_current_player", obs.is_current_player)?;
    Ok(dict)
}

fn info_dict<'py>(py: Python<'py>, info: &StepInfo) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("terminal", info.terminal)?;
    dict.set_item("history_str", &info.history_str)?;
    Ok(dict)
}

/// Gym-style Kuhn Poker environment.
///
/// Actions are 0 (PASS) and 1 (BET). Cards are 0 (J), 1 (Q), 2 (K).
#[pyclass(name = "KuhnPokerEnv")]
pub struct PyKuhnPokerEnv(KuhnPokerEnv);

#[pymethods]
impl PyKuhnPokerEnv {
    /// Create a new environment.
    ///
    /// # Arguments
    /// - seed: RNG seed for the deal stream
    /// - ante: Chips each player posts before the deal
    /// - bet_size: Chips added by a bet or call
    #[new]
    #[pyo3(signature = (seed = 42, ante = 1, bet_size = 1))]
    fn new(seed: u64, ante: i32, bet_size: i32) -> PyResult<Self> {
        let config = KuhnConfig::default()
            .with_seed(seed)
            .with_ante(ante)
            .with_bet_size(bet_size);
        KuhnPokerEnv::new(config)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn num_actions(&self) -> usize {
        KuhnPokerEnv::NUM_ACTIONS
    }

    #[getter]
    fn num_cards(&self) -> usize {
        KuhnPokerEnv::NUM_CARDS
    }

    /// Deal a new hand and return the initial observation dict.
    fn reset<'py>(&mut self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let obs = self.0.reset();
        observation_dict(py, &obs)
    }

    /// Take an action.
    ///
    /// Returns `(obs, rewards, done, info)`; `rewards` is a numpy array
    /// `[reward_p0, reward_p1]` when the hand ended, else None.
    #[allow(clippy::type_complexity)]
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: i64,
    ) -> PyResult<(
        Bound<'py, PyDict>,
        Option<Bound<'py, PyArray1<i32>>>,
        bool,
        Bound<'py, PyDict>,
    )> {
        let (obs, rewards, done, info) = self.0.step(action).map_err(to_py_err)?.into_tuple();
        let rewards = rewards.map(|r| PyArray1::from_slice_bound(py, &r.as_array()));
        Ok((observation_dict(py, &obs)?, rewards, done, info_dict(py, &info)?))
    }

    /// Observation from one player's perspective (own card only).
    fn get_observation<'py>(&self, py: Python<'py>, player: usize) -> PyResult<Bound<'py, PyDict>> {
        let obs = self.0.observation_for(player_arg(player)?);
        player_dict(py, &obs)
    }

    /// One-hot network input for a player.
    fn encode<'py>(&self, py: Python<'py>, player: usize) -> PyResult<Bound<'py, PyArray1<f32>>> {
        let encoded = self.0.encode(player_arg(player)?);
        Ok(PyArray1::from_slice_bound(py, &encoded.tensor))
    }

    /// Print the table state.
    fn render(&self) {
        println!("{}", self.0.render());
    }

    fn __repr__(&self) -> String {
        let game = self.0.game();
        let status = if game.is_terminal() { "terminal" } else { "ongoing" };
        format!(
            "KuhnPokerEnv(history='{}', status={})",
            game.history_string(),
            status
        )
    }
}
