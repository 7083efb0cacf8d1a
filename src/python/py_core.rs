//! Core conversions shared by the bindings.

use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

use crate::core::{Action, KuhnError};

/// Engine rejections surface as `ValueError`.
pub(crate) fn to_py_err(err: KuhnError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub(crate) fn actions_to_indices(actions: &[Action]) -> Vec<usize> {
    actions.iter().map(|a| a.index()).collect()
}
