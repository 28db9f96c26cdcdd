//! Main solver interface

use super::strategy::Strategy;
use crate::core::{RoundState, SecretWord};
use crate::engine::PlayerAction;
use rand::Rng;
use std::fmt;

/// Next move proposed by the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverAction {
    Letter(char),
    Word(String),
    Hint,
}

impl SolverAction {
    #[must_use]
    pub fn to_player_action(&self) -> PlayerAction {
        match self {
            Self::Letter(letter) => PlayerAction::Letter(letter.to_string()),
            Self::Word(word) => PlayerAction::Word(word.clone()),
            Self::Hint => PlayerAction::Hint,
        }
    }
}

impl fmt::Display for SolverAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(letter) => write!(f, "letter '{letter}'"),
            Self::Word(word) => write!(f, "word '{word}'"),
            Self::Hint => f.write_str("hint"),
        }
    }
}

/// Word guessing solver
///
/// Coordinates candidate filtering with a guess selection strategy.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    words: &'a [SecretWord],
    use_hint: bool,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver over the words the secret may be drawn from
    pub const fn new(strategy: S, words: &'a [SecretWord]) -> Self {
        Self {
            strategy,
            words,
            use_hint: true,
        }
    }

    /// Whether the solver spends its hint when down to the last attempt
    #[must_use]
    pub const fn with_hint(mut self, use_hint: bool) -> Self {
        self.use_hint = use_hint;
        self
    }

    /// Propose the next action, or `None` once the round is finished
    ///
    /// `refuted` lists whole-word guesses the round already rejected; those
    /// words are never proposed again.
    pub fn next_action<R: Rng + ?Sized>(
        &self,
        state: &RoundState,
        refuted: &[String],
        rng: &mut R,
    ) -> Option<SolverAction> {
        if state.is_finished() {
            return None;
        }

        let candidates = self.candidates(state, refuted);

        if self.use_hint
            && !state.hint_used()
            && state.attempts_remaining() == 1
            && candidates.len() != 1
        {
            return Some(SolverAction::Hint);
        }

        self.strategy.choose(state, &candidates, rng)
    }

    /// Words consistent with everything the state reveals
    ///
    /// A candidate matches every revealed position, and none of its hidden
    /// positions hold a guessed letter (a guessed letter is revealed at every
    /// position it occupies). Words in `refuted` are dropped.
    pub fn candidates(&self, state: &RoundState, refuted: &[String]) -> Vec<&'a SecretWord> {
        self.words
            .iter()
            .filter(|&word| is_candidate(word, state, refuted))
            .collect()
    }

    pub fn count_candidates(&self, state: &RoundState, refuted: &[String]) -> usize {
        self.words
            .iter()
            .filter(|&word| is_candidate(word, state, refuted))
            .count()
    }
}

fn is_candidate(word: &SecretWord, state: &RoundState, refuted: &[String]) -> bool {
    is_consistent(word, state) && !refuted.iter().any(|r| r == word.text())
}

fn is_consistent(word: &SecretWord, state: &RoundState) -> bool {
    word.len() == state.revealed().len()
        && word
            .chars()
            .zip(state.revealed())
            .all(|(letter, slot)| match slot {
                Some(shown) => letter == *shown,
                None => !state.used_letters().contains(&letter),
            })
}
