//! Difficulty tiers and their attempt budgets

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named tier mapping to an attempt budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown difficulty {0:?}, expected easy, medium or hard")]
pub struct ParseDifficultyError(String);

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Number of wrong guesses allowed before the round is lost
    #[inline]
    #[must_use]
    pub const fn attempts(self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Medium => 7,
            Self::Hard => 5,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_budgets() {
        assert_eq!(Difficulty::Easy.attempts(), 10);
        assert_eq!(Difficulty::Medium.attempts(), 7);
        assert_eq!(Difficulty::Hard.attempts(), 5);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("EASY".parse(), Ok(Difficulty::Easy));
        assert_eq!(" Medium ".parse(), Ok(Difficulty::Medium));
        assert_eq!("hard".parse(), Ok(Difficulty::Hard));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert!("extreme".parse::<Difficulty>().is_err());
        assert!("".parse::<Difficulty>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse(), Ok(difficulty));
        }
    }
}
