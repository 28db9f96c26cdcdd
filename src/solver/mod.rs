//! Automatic player
//!
//! Narrows a word list against a [`RoundState`](crate::core::RoundState) and
//! proposes the next action. Used by the `solve` and `benchmark` commands.

mod engine;
pub mod strategy;

pub use engine::{Solver, SolverAction};
pub use strategy::{FrequencyStrategy, RandomStrategy, Strategy, StrategyType};
