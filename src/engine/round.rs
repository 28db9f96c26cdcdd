use super::{HintPicker, PlayerAction, RejectReason, RoundEvent};
use crate::core::{Difficulty, Outcome, RoundError, RoundState, SecretWord, normalize_letter};

/// Drives one round from its first guess to `Won` or `Lost`
///
/// Gameplay events (including rejected or repeated input) come back as
/// `Ok(RoundEvent)`. Only contract violations, such as acting on a finished
/// round, are `Err(RoundError)`.
///
/// # Examples
/// ```
/// use word_guess::core::{Outcome, SecretWord};
/// use word_guess::engine::{RoundEngine, RoundEvent};
///
/// let mut round = RoundEngine::new(SecretWord::new("banana").unwrap(), 7);
/// let event = round.submit_letter_guess("a").unwrap();
///
/// assert_eq!(event, RoundEvent::CorrectLetter { letter: 'a', occurrences: 3 });
/// assert_eq!(round.state().pattern(), "_a_a_a");
/// assert_eq!(round.state().outcome(), Outcome::InProgress);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundEngine {
    state: RoundState,
}

impl RoundEngine {
    #[must_use]
    pub fn new(secret: SecretWord, attempts: u32) -> Self {
        Self::from_state(RoundState::new(secret, attempts))
    }

    #[must_use]
    pub fn with_difficulty(secret: SecretWord, difficulty: Difficulty) -> Self {
        Self::new(secret, difficulty.attempts())
    }

    /// Continue a round from an existing state
    #[must_use]
    pub const fn from_state(state: RoundState) -> Self {
        Self { state }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> RoundState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    /// Dispatch a classified player action to the matching operation
    ///
    /// # Errors
    /// Returns `RoundError` under the same conditions as the operation it
    /// dispatches to.
    pub fn apply(
        &mut self,
        action: &PlayerAction,
        picker: &mut impl HintPicker,
    ) -> Result<RoundEvent, RoundError> {
        match action {
            PlayerAction::Hint => self.use_hint(picker),
            PlayerAction::Letter(letter) => self.submit_letter_guess(letter),
            PlayerAction::Word(word) => self.submit_word_guess(word),
        }
    }

    /// Guess a single letter
    ///
    /// A correct letter reveals every occurrence. A wrong letter costs one
    /// attempt. Malformed or repeated letters change nothing.
    ///
    /// # Errors
    /// Returns `RoundError::RoundOver` if the round has already finished.
    pub fn submit_letter_guess(&mut self, letter: &str) -> Result<RoundEvent, RoundError> {
        self.check_in_progress()?;

        let Some(letter) = normalize_letter(letter) else {
            let reason = if letter.trim().is_empty() {
                RejectReason::Empty
            } else {
                RejectReason::NotALetter
            };
            return Ok(RoundEvent::RejectedInput(reason));
        };

        if !self.state.used_letters.insert(letter) {
            return Ok(RoundEvent::AlreadyGuessed(letter));
        }

        let positions = self.state.secret.positions_of(letter);
        let event = if positions.is_empty() {
            self.state.attempts_remaining = self.state.attempts_remaining.saturating_sub(1);
            RoundEvent::WrongLetter(letter)
        } else {
            for &i in positions {
                self.state.revealed[i] = Some(letter);
            }
            RoundEvent::CorrectLetter {
                letter,
                occurrences: positions.len(),
            }
        };

        log::debug!(
            "letter '{letter}': {event:?}, pattern {}, {} attempts left",
            self.state.pattern(),
            self.state.attempts_remaining
        );
        self.update_outcome();
        Ok(event)
    }

    /// Guess the whole word
    ///
    /// A match reveals everything and wins. A miss costs one attempt and leaves
    /// the revealed letters and used letters alone.
    ///
    /// # Errors
    /// Returns `RoundError::RoundOver` if the round has already finished.
    pub fn submit_word_guess(&mut self, candidate: &str) -> Result<RoundEvent, RoundError> {
        self.check_in_progress()?;

        match candidate.chars().count() {
            0 => return Ok(RoundEvent::RejectedInput(RejectReason::Empty)),
            1 => return Ok(RoundEvent::RejectedInput(RejectReason::WordTooShort)),
            _ => {}
        }

        let event = if candidate.to_ascii_lowercase() == self.state.secret.text() {
            let secret = &self.state.secret;
            for (slot, letter) in self.state.revealed.iter_mut().zip(secret.chars()) {
                *slot = Some(letter);
            }
            RoundEvent::CorrectWord
        } else {
            self.state.attempts_remaining = self.state.attempts_remaining.saturating_sub(1);
            RoundEvent::WrongWord
        };

        log::debug!(
            "word guess: {event:?}, {} attempts left",
            self.state.attempts_remaining
        );
        self.update_outcome();
        Ok(event)
    }

    /// Reveal one hidden letter, at most once per round
    ///
    /// `picker` chooses among the hidden positions.
    ///
    /// # Errors
    /// Returns `RoundError::RoundOver` if the round has already finished, and
    /// `RoundError::NoHiddenLetters` if an in-progress round somehow has
    /// nothing left to reveal.
    pub fn use_hint(&mut self, picker: &mut impl HintPicker) -> Result<RoundEvent, RoundError> {
        self.check_in_progress()?;

        if self.state.hint_used {
            return Ok(RoundEvent::HintAlreadyUsed);
        }

        let hidden = self.state.hidden_positions();
        let Some(&first_hidden) = hidden.first() else {
            log::warn!(
                "hint requested on '{}' with nothing hidden while in progress",
                self.state.pattern()
            );
            return Err(RoundError::NoHiddenLetters);
        };

        let index = match picker.pick(&hidden) {
            Some(index) if hidden.contains(&index) => index,
            other => {
                log::warn!("hint picker returned {other:?}, not a hidden position");
                first_hidden
            }
        };

        let letter = self.state.secret.char_at(index);
        self.state.revealed[index] = Some(letter);
        self.state.hint_used = true;

        log::debug!("hint revealed '{letter}' at {index}");
        self.update_outcome();
        Ok(RoundEvent::HintRevealed { index, letter })
    }

    fn check_in_progress(&self) -> Result<(), RoundError> {
        if self.state.outcome.is_finished() {
            log::warn!("operation on a finished round ({})", self.state.outcome);
            Err(RoundError::RoundOver(self.state.outcome))
        } else {
            Ok(())
        }
    }

    /// Win is checked before loss: only misses reduce attempts, so a reveal
    /// that completes the word always wins.
    fn update_outcome(&mut self) {
        let outcome = if self.state.is_fully_revealed() {
            Outcome::Won
        } else if self.state.attempts_remaining == 0 {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        if outcome.is_finished() {
            log::info!(
                "round {outcome}: '{}' with {} attempts left",
                self.state.secret,
                self.state.attempts_remaining
            );
        }
        self.state.outcome = outcome;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FirstHiddenPicker;

    fn round(word: &str, attempts: u32) -> RoundEngine {
        RoundEngine::new(SecretWord::new(word).unwrap(), attempts)
    }

    #[test]
    fn correct_letter_reveals_every_occurrence() {
        let mut engine = round("banana", 7);

        let event = engine.submit_letter_guess("a").unwrap();

        assert_eq!(
            event,
            RoundEvent::CorrectLetter {
                letter: 'a',
                occurrences: 3
            }
        );
        assert_eq!(engine.state().pattern(), "_a_a_a");
        assert_eq!(engine.state().attempts_remaining(), 7);
        assert!(engine.state().used_letters().contains(&'a'));
    }

    #[test]
    fn letter_guess_is_case_insensitive() {
        let mut engine = round("cat", 5);
        assert_eq!(
            engine.submit_letter_guess("C").unwrap(),
            RoundEvent::CorrectLetter {
                letter: 'c',
                occurrences: 1
            }
        );
        assert_eq!(
            engine.submit_letter_guess("c").unwrap(),
            RoundEvent::AlreadyGuessed('c')
        );
    }

    #[test]
    fn wrong_letter_costs_one_attempt() {
        let mut engine = round("cat", 5);

        assert_eq!(
            engine.submit_letter_guess("x").unwrap(),
            RoundEvent::WrongLetter('x')
        );
        assert_eq!(engine.state().attempts_remaining(), 4);
        assert_eq!(engine.state().pattern(), "___");
        assert_eq!(engine.outcome(), Outcome::InProgress);
    }

    #[test]
    fn malformed_letters_are_rejected_without_change() {
        let mut engine = round("cat", 5);
        let before = engine.state().clone();

        for input in ["", "1", "!", "é", "ab"] {
            let event = engine.submit_letter_guess(input).unwrap();
            assert!(matches!(event, RoundEvent::RejectedInput(_)), "{input:?}");
        }
        assert_eq!(
            engine.submit_letter_guess("").unwrap(),
            RoundEvent::RejectedInput(RejectReason::Empty)
        );
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn repeated_wrong_letter_is_not_charged_twice() {
        let mut engine = round("cat", 5);
        engine.submit_letter_guess("z").unwrap();
        let before = engine.state().clone();

        assert_eq!(
            engine.submit_letter_guess("z").unwrap(),
            RoundEvent::AlreadyGuessed('z')
        );
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn losing_on_last_attempt() {
        let mut engine = round("cat", 2);

        engine.submit_letter_guess("x").unwrap();
        assert_eq!(engine.outcome(), Outcome::InProgress);

        engine.submit_letter_guess("z").unwrap();
        assert_eq!(engine.state().attempts_remaining(), 0);
        assert_eq!(engine.outcome(), Outcome::Lost);

        assert_eq!(
            engine.submit_letter_guess("c"),
            Err(RoundError::RoundOver(Outcome::Lost))
        );
    }

    #[test]
    fn completing_the_word_on_one_attempt_left_wins() {
        let mut engine = round("ab", 1);
        engine.submit_letter_guess("a").unwrap();
        engine.submit_letter_guess("b").unwrap();

        assert_eq!(engine.outcome(), Outcome::Won);
        assert_eq!(engine.state().attempts_remaining(), 1);
    }

    #[test]
    fn correct_word_wins_immediately() {
        let mut engine = round("tiger", 5);
        engine.submit_letter_guess("t").unwrap();

        assert_eq!(
            engine.submit_word_guess("TIGER").unwrap(),
            RoundEvent::CorrectWord
        );
        assert_eq!(engine.state().pattern(), "tiger");
        assert_eq!(engine.outcome(), Outcome::Won);
        // Whole-word guesses never enter the used letter set
        assert_eq!(engine.state().used_letters().len(), 1);
    }

    #[test]
    fn wrong_word_costs_one_attempt_only() {
        let mut engine = round("tiger", 5);
        engine.submit_letter_guess("t").unwrap();
        let revealed = engine.state().pattern();
        let used = engine.state().used_letters().clone();

        assert_eq!(
            engine.submit_word_guess("tight").unwrap(),
            RoundEvent::WrongWord
        );
        assert_eq!(engine.state().attempts_remaining(), 4);
        assert_eq!(engine.state().pattern(), revealed);
        assert_eq!(engine.state().used_letters(), &used);
    }

    #[test]
    fn wrong_word_on_last_attempt_loses() {
        let mut engine = round("tiger", 1);
        engine.submit_word_guess("lion").unwrap();
        assert_eq!(engine.outcome(), Outcome::Lost);
        assert_eq!(
            engine.submit_word_guess("tiger"),
            Err(RoundError::RoundOver(Outcome::Lost))
        );
    }

    #[test]
    fn word_guess_folds_ascii_case_only() {
        let mut engine = round("kiwi", 5);

        // Kelvin sign lowercases to 'k' under Unicode rules
        assert_eq!(engine.submit_word_guess("\u{212A}iwi").unwrap(), RoundEvent::WrongWord);
        assert_eq!(engine.state().attempts_remaining(), 4);
        assert_eq!(engine.submit_word_guess("KIWI").unwrap(), RoundEvent::CorrectWord);
    }

    #[test]
    fn short_word_guesses_are_rejected() {
        let mut engine = round("tiger", 5);
        assert_eq!(
            engine.submit_word_guess("t").unwrap(),
            RoundEvent::RejectedInput(RejectReason::WordTooShort)
        );
        assert_eq!(
            engine.submit_word_guess("").unwrap(),
            RoundEvent::RejectedInput(RejectReason::Empty)
        );
        assert_eq!(engine.state().attempts_remaining(), 5);
    }

    #[test]
    fn hint_reveals_one_letter_once() {
        let mut engine = round("dog", 5);

        assert_eq!(
            engine.use_hint(&mut FirstHiddenPicker).unwrap(),
            RoundEvent::HintRevealed {
                index: 0,
                letter: 'd'
            }
        );
        assert!(engine.state().hint_used());
        assert_eq!(engine.state().pattern(), "d__");
        // Hints reveal a position, they do not mark the letter as guessed
        assert!(engine.state().used_letters().is_empty());

        let before = engine.state().clone();
        assert_eq!(
            engine.use_hint(&mut FirstHiddenPicker).unwrap(),
            RoundEvent::HintAlreadyUsed
        );
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn hint_reveals_only_the_chosen_position() {
        let mut engine = round("banana", 5);
        engine.submit_letter_guess("b").unwrap();

        let event = engine.use_hint(&mut FirstHiddenPicker).unwrap();

        assert_eq!(
            event,
            RoundEvent::HintRevealed {
                index: 1,
                letter: 'a'
            }
        );
        assert_eq!(engine.state().pattern(), "ba____");
    }

    #[test]
    fn hint_completing_the_word_wins() {
        let mut engine = round("ox", 5);
        engine.submit_letter_guess("o").unwrap();
        engine.use_hint(&mut FirstHiddenPicker).unwrap();

        assert_eq!(engine.state().pattern(), "ox");
        assert_eq!(engine.outcome(), Outcome::Won);
    }

    #[test]
    fn bad_picker_falls_back_to_a_hidden_position() {
        struct OutOfRange;
        impl HintPicker for OutOfRange {
            fn pick(&mut self, _hidden: &[usize]) -> Option<usize> {
                Some(99)
            }
        }

        let mut engine = round("cat", 5);
        engine.submit_letter_guess("c").unwrap();

        assert_eq!(
            engine.use_hint(&mut OutOfRange).unwrap(),
            RoundEvent::HintRevealed {
                index: 1,
                letter: 'a'
            }
        );
    }

    #[test]
    fn hint_with_nothing_hidden_is_a_contract_error() {
        let mut state = RoundState::new(SecretWord::new("cat").unwrap(), 5);
        state.revealed = vec![Some('c'), Some('a'), Some('t')];
        let mut engine = RoundEngine::from_state(state);

        assert_eq!(
            engine.use_hint(&mut FirstHiddenPicker),
            Err(RoundError::NoHiddenLetters)
        );
        assert!(!engine.state().hint_used());
    }

    #[test]
    fn every_operation_fails_after_a_win() {
        let mut engine = round("dog", 5);
        engine.submit_word_guess("dog").unwrap();

        let over = Err(RoundError::RoundOver(Outcome::Won));
        assert_eq!(engine.submit_letter_guess("d"), over);
        assert_eq!(engine.submit_word_guess("cat"), over);
        assert_eq!(engine.use_hint(&mut FirstHiddenPicker), over);
    }

    #[test]
    fn apply_dispatches_actions() {
        let mut engine = round("dog", 5);
        let mut picker = FirstHiddenPicker;

        assert_eq!(
            engine
                .apply(&PlayerAction::parse("hint"), &mut picker)
                .unwrap(),
            RoundEvent::HintRevealed {
                index: 0,
                letter: 'd'
            }
        );
        assert_eq!(
            engine.apply(&PlayerAction::parse("q"), &mut picker).unwrap(),
            RoundEvent::WrongLetter('q')
        );
        assert_eq!(
            engine
                .apply(&PlayerAction::parse("dog"), &mut picker)
                .unwrap(),
            RoundEvent::CorrectWord
        );
    }

    #[test]
    fn with_difficulty_uses_budget() {
        let engine = RoundEngine::with_difficulty(SecretWord::new("dog").unwrap(), Difficulty::Hard);
        assert_eq!(engine.state().attempts_remaining(), 5);
    }
}
