//! Core domain types for a word guessing round
//!
//! Everything in here is pure data: no I/O, no randomness. The engine module
//! drives these types through a round.

mod difficulty;
mod error;
mod round;
mod word;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use error::{RoundError, WordError};
pub use round::{Outcome, PLACEHOLDER, RoundState};
pub use word::{SecretWord, normalize_letter};
