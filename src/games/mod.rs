//! Game implementations.

pub mod kuhn;
