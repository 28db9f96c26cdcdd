//! State of a single round

use super::SecretWord;
use std::collections::BTreeSet;
use std::fmt;

/// Character shown for a letter that is still hidden
pub const PLACEHOLDER: char = '_';

/// Where a round stands
///
/// `Won` and `Lost` are terminal: no operation moves a round out of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Data for one in-progress or finished round
///
/// Fields are only mutated by [`RoundEngine`](crate::engine::RoundEngine), which
/// keeps `revealed[i]` either hidden or equal to the secret letter at `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub(crate) secret: SecretWord,
    pub(crate) revealed: Vec<Option<char>>,
    pub(crate) used_letters: BTreeSet<char>,
    pub(crate) attempts_budget: u32,
    pub(crate) attempts_remaining: u32,
    pub(crate) hint_used: bool,
    pub(crate) outcome: Outcome,
}

impl RoundState {
    /// Start a round with every letter hidden
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::{Outcome, RoundState, SecretWord};
    ///
    /// let state = RoundState::new(SecretWord::new("cat").unwrap(), 5);
    /// assert_eq!(state.pattern(), "___");
    /// assert_eq!(state.attempts_remaining(), 5);
    /// assert_eq!(state.outcome(), Outcome::InProgress);
    /// ```
    #[must_use]
    pub fn new(secret: SecretWord, attempts: u32) -> Self {
        let revealed = vec![None; secret.len()];
        // A zero budget can never be played, it is lost before the first guess
        let outcome = if attempts == 0 {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        Self {
            secret,
            revealed,
            used_letters: BTreeSet::new(),
            attempts_budget: attempts,
            attempts_remaining: attempts,
            hint_used: false,
            outcome,
        }
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Per-position view: `Some(letter)` once revealed, `None` while hidden
    #[inline]
    #[must_use]
    pub fn revealed(&self) -> &[Option<char>] {
        &self.revealed
    }

    /// Revealed word with [`PLACEHOLDER`] for hidden letters, e.g. `"_a_a_a"`
    #[must_use]
    pub fn pattern(&self) -> String {
        self.revealed
            .iter()
            .map(|slot| slot.unwrap_or(PLACEHOLDER))
            .collect()
    }

    /// Letters guessed so far, in alphabetical order
    #[inline]
    #[must_use]
    pub fn used_letters(&self) -> &BTreeSet<char> {
        &self.used_letters
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Budget the round started with
    #[inline]
    #[must_use]
    pub const fn attempts_budget(&self) -> u32 {
        self.attempts_budget
    }

    /// Wrong guesses made so far
    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> u32 {
        self.attempts_budget - self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn hint_used(&self) -> bool {
        self.hint_used
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    /// True iff no position is still hidden
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.revealed.iter().all(Option::is_some)
    }

    /// Indices still hidden, ascending
    #[must_use]
    pub fn hidden_positions(&self) -> Vec<usize> {
        self.revealed
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.is_none().then_some(i))
            .collect()
    }

    /// Letters guessed that are not in the word, alphabetical
    pub fn wrong_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.used_letters
            .iter()
            .copied()
            .filter(|&letter| !self.secret.has_letter(letter))
    }
}
