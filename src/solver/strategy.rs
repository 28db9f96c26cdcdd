//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::SolverAction;
use crate::core::{RoundState, SecretWord};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// Letters in rough order of English frequency, used when no candidate is left
const FALLBACK_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// A strategy for picking the next guess from the remaining candidates
pub trait Strategy {
    /// Select the next action given the round so far
    ///
    /// Returns `None` only when every letter has already been guessed.
    /// Any randomness is drawn from `rng`.
    fn choose<R: Rng + ?Sized>(
        &self,
        state: &RoundState,
        candidates: &[&SecretWord],
        rng: &mut R,
    ) -> Option<SolverAction>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most frequent unguessed letter among candidates (default)
    Frequency(FrequencyStrategy),
    /// Uniformly random unguessed letter
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn choose<R: Rng + ?Sized>(
        &self,
        state: &RoundState,
        candidates: &[&SecretWord],
        rng: &mut R,
    ) -> Option<SolverAction> {
        match self {
            Self::Frequency(s) => s.choose(state, candidates, rng),
            Self::Random(s) => s.choose(state, candidates, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }
}

/// Letter frequency strategy
///
/// Guesses the whole word once a single candidate remains, otherwise the
/// unguessed letter that appears in the most candidates.
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn choose<R: Rng + ?Sized>(
        &self,
        state: &RoundState,
        candidates: &[&SecretWord],
        _rng: &mut R,
    ) -> Option<SolverAction> {
        if let [only] = candidates {
            return Some(if only.len() > 1 {
                SolverAction::Word(only.text().to_string())
            } else {
                SolverAction::Letter(only.char_at(0))
            });
        }

        // Count each letter once per candidate
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for word in candidates {
            let mut seen = [false; 26];
            for letter in word.chars() {
                let slot = usize::from(letter as u8 - b'a');
                if !seen[slot] && !state.used_letters().contains(&letter) {
                    seen[slot] = true;
                    *counts.entry(letter).or_insert(0) += 1;
                }
            }
        }

        counts
            .into_iter()
            .max_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then(b.cmp(a)))
            .map(|(letter, _)| SolverAction::Letter(letter))
            .or_else(|| fallback_letter(state))
    }
}

/// Random strategy
///
/// Picks any letter not yet guessed. Serves as a baseline for benchmarks.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose<R: Rng + ?Sized>(
        &self,
        state: &RoundState,
        _candidates: &[&SecretWord],
        rng: &mut R,
    ) -> Option<SolverAction> {
        let unguessed: Vec<char> = ('a'..='z')
            .filter(|letter| !state.used_letters().contains(letter))
            .collect();

        unguessed
            .choose(rng)
            .map(|&letter| SolverAction::Letter(letter))
    }
}

fn fallback_letter(state: &RoundState) -> Option<SolverAction> {
    FALLBACK_ORDER
        .chars()
        .find(|letter| !state.used_letters().contains(letter))
        .map(SolverAction::Letter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RoundEngine;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(3)
    }

    fn setup_round(word: &str) -> RoundEngine {
        RoundEngine::new(SecretWord::new(word).unwrap(), 10)
    }

    #[test]
    fn frequency_picks_most_shared_letter() {
        let words = words_from_slice(&["cat", "cot", "cut"]);
        let candidates: Vec<&SecretWord> = words.iter().collect();
        let round = setup_round("cat");

        // 'c' and 't' appear in all three, 'c' wins the alphabetical tie
        assert_eq!(
            FrequencyStrategy.choose(round.state(), &candidates, &mut rng()),
            Some(SolverAction::Letter('c'))
        );
    }

    #[test]
    fn frequency_skips_used_letters() {
        let words = words_from_slice(&["cat", "cot", "cut"]);
        let candidates: Vec<&SecretWord> = words.iter().collect();
        let mut round = setup_round("cat");
        round.submit_letter_guess("c").unwrap();

        assert_eq!(
            FrequencyStrategy.choose(round.state(), &candidates, &mut rng()),
            Some(SolverAction::Letter('t'))
        );
    }

    #[test]
    fn frequency_counts_repeated_letters_once() {
        // 'a' appears three times in one word, 'o' once in each of two words
        let words = words_from_slice(&["aaab", "cob", "dob"]);
        let candidates: Vec<&SecretWord> = words.iter().collect();
        let mut round = setup_round("dob");
        round.submit_letter_guess("b").unwrap();

        assert_eq!(
            FrequencyStrategy.choose(round.state(), &candidates, &mut rng()),
            Some(SolverAction::Letter('o'))
        );
    }

    #[test]
    fn frequency_guesses_single_candidate_whole() {
        let words = words_from_slice(&["tiger"]);
        let candidates: Vec<&SecretWord> = words.iter().collect();
        let round = setup_round("tiger");

        assert_eq!(
            FrequencyStrategy.choose(round.state(), &candidates, &mut rng()),
            Some(SolverAction::Word("tiger".to_string()))
        );
    }

    #[test]
    fn frequency_falls_back_without_candidates() {
        let mut round = setup_round("tiger");
        round.submit_letter_guess("e").unwrap();

        assert_eq!(
            FrequencyStrategy.choose(round.state(), &[], &mut rng()),
            Some(SolverAction::Letter('t'))
        );
    }

    #[test]
    fn random_strategy_picks_unguessed_letter() {
        let mut round = setup_round("tiger");
        for letter in ["a", "b", "c"] {
            round.submit_letter_guess(letter).unwrap();
        }

        let mut rng = rng();
        for _ in 0..50 {
            match RandomStrategy.choose(round.state(), &[], &mut rng) {
                Some(SolverAction::Letter(letter)) => {
                    assert!(letter.is_ascii_lowercase());
                    assert!(!round.state().used_letters().contains(&letter));
                }
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn random_strategy_follows_seed() {
        let round = setup_round("tiger");
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|_| RandomStrategy.choose(round.state(), &[], &mut rng))
                .collect::<Vec<_>>()
        };

        assert_eq!(draw(42), draw(42));
    }

    #[test]
    fn strategy_from_name() {
        assert!(matches!(
            StrategyType::from_name("random"),
            StrategyType::Random(_)
        ));
        assert!(matches!(
            StrategyType::from_name("frequency"),
            StrategyType::Frequency(_)
        ));
        assert!(matches!(
            StrategyType::from_name("unknown"),
            StrategyType::Frequency(_)
        ));
    }
}
