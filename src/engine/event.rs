use std::fmt;

/// Why a guess was refused without touching the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Nothing was entered
    Empty,
    /// A single-letter guess that is not an ASCII letter
    NotALetter,
    /// A whole-word guess shorter than two characters
    WordTooShort,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "enter a letter, a word or 'hint'",
            Self::NotALetter => "please enter a valid letter or word",
            Self::WordTooShort => "a word guess needs at least two letters",
        })
    }
}

/// What a single action did to the round
///
/// `RejectedInput`, `AlreadyGuessed` and `HintAlreadyUsed` leave the state
/// untouched; the caller should simply prompt again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    RejectedInput(RejectReason),
    AlreadyGuessed(char),
    CorrectLetter { letter: char, occurrences: usize },
    WrongLetter(char),
    CorrectWord,
    WrongWord,
    HintAlreadyUsed,
    HintRevealed { index: usize, letter: char },
}

impl RoundEvent {
    /// True when the event left the state exactly as it was
    #[must_use]
    pub const fn is_no_op(self) -> bool {
        matches!(
            self,
            Self::RejectedInput(_) | Self::AlreadyGuessed(_) | Self::HintAlreadyUsed
        )
    }

    /// True when the event cost an attempt
    #[must_use]
    pub const fn is_miss(self) -> bool {
        matches!(self, Self::WrongLetter(_) | Self::WrongWord)
    }
}

impl fmt::Display for RoundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RejectedInput(reason) => write!(f, "Invalid input: {reason}"),
            Self::AlreadyGuessed(letter) => write!(f, "You already guessed '{letter}'"),
            Self::CorrectLetter { letter, occurrences } => {
                write!(f, "Correct guess! '{letter}' appears {occurrences}x")
            }
            Self::WrongLetter(letter) => write!(f, "Wrong guess, no '{letter}'"),
            Self::CorrectWord => write!(f, "You guessed the whole word correctly!"),
            Self::WrongWord => write!(f, "Wrong word guess"),
            Self::HintAlreadyUsed => write!(f, "You already used your hint"),
            Self::HintRevealed { index, letter } => {
                write!(f, "Hint used: position {} is '{letter}'", index + 1)
            }
        }
    }
}
