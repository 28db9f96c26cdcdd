//! Word Guess
//!
//! A hangman-style word guessing game: a round engine, category word lists,
//! win-streak scoring, a letter-frequency solver and TUI/CLI front ends.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use word_guess::core::{Difficulty, SecretWord};
//! use word_guess::engine::{FirstHiddenPicker, PlayerAction, RoundEngine};
//!
//! let secret = SecretWord::new("banana").unwrap();
//! let mut round = RoundEngine::with_difficulty(secret, Difficulty::Medium);
//!
//! let event = round.submit_letter_guess("a").unwrap();
//! println!("{event}");
//! println!("{}", round.state().pattern()); // _a_a_a
//!
//! round.apply(&PlayerAction::Hint, &mut FirstHiddenPicker).unwrap();
//! ```

// Core domain types
pub mod core;

// Round rules and hint selection
pub mod engine;

// Word lists
pub mod wordlists;

// Win streaks and high scores
pub mod session;

// Automatic player
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
