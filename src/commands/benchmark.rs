//! Benchmark command
//!
//! Plays the solver against every word at a given difficulty, in parallel.

use super::solve::solve_word;
use crate::core::{Difficulty, SecretWord};
use crate::engine::RandomPicker;
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run at one difficulty
pub struct BenchmarkResult {
    pub difficulty: Difficulty,
    pub total_words: usize,
    pub wins: usize,
    pub total_wrong_guesses: u32,
    pub average_wrong_guesses: f64,
    pub hints_used: usize,
    /// Wrong guesses per round → number of rounds
    pub distribution: BTreeMap<u32, usize>,
    pub lost_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn losses(&self) -> usize {
        self.total_words - self.wins
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_words as f64
        }
    }
}

/// Run the solver on every target word
///
/// Each word gets its own `StdRng` seeded with `seed` plus the word's index.
/// Hint positions and random guesses both draw from it, so a run is
/// reproducible regardless of thread scheduling.
///
/// # Errors
///
/// Returns the first error raised while solving a word.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    target_words: &[SecretWord],
    difficulty: Difficulty,
    seed: u64,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(target_words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message(difficulty.to_string());

    let results = target_words
        .par_iter()
        .enumerate()
        .map(|(i, target)| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let mut picker = RandomPicker::new(StdRng::from_rng(&mut rng));
            let result = solve_word(target, difficulty, solver, &mut picker, &mut rng);
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_and_clear();

    let mut distribution: BTreeMap<u32, usize> = BTreeMap::new();
    let mut lost_words = Vec::new();
    let mut wins = 0;
    let mut hints_used = 0;
    let mut total_wrong_guesses = 0;

    for result in &results {
        if result.success() {
            wins += 1;
        } else {
            lost_words.push(result.target.clone());
        }
        if result.hint_used {
            hints_used += 1;
        }
        total_wrong_guesses += result.wrong_guesses;
        *distribution.entry(result.wrong_guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_words = results.len();

    Ok(BenchmarkResult {
        difficulty,
        total_words,
        wins,
        total_wrong_guesses,
        average_wrong_guesses: if total_words == 0 {
            0.0
        } else {
            f64::from(total_wrong_guesses) / total_words as f64
        },
        hints_used,
        distribution,
        lost_words,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FrequencyStrategy, StrategyType};
    use crate::wordlists::{CategorySource, EmbeddedCategories};

    fn embedded_words() -> Vec<SecretWord> {
        EmbeddedCategories
            .categories()
            .iter()
            .map(|(_, word)| word.clone())
            .collect()
    }

    #[test]
    fn benchmark_runs() {
        let words = embedded_words();
        let solver = Solver::new(FrequencyStrategy, &words);
        let result = run_benchmark(&solver, &words[..10], Difficulty::Easy, 1, false).unwrap();

        assert_eq!(result.total_words, 10);
        assert_eq!(result.wins + result.losses(), 10);
        assert!(result.win_rate() <= 1.0);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let words = embedded_words();
        let solver = Solver::new(FrequencyStrategy, &words);
        let result = run_benchmark(&solver, &words, Difficulty::Hard, 7, false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words);
        assert_eq!(result.lost_words.len(), result.losses());

        assert!(
            result
                .distribution
                .keys()
                .all(|&wrong| wrong <= Difficulty::Hard.attempts())
        );
    }

    #[test]
    fn benchmark_is_reproducible() {
        let words = embedded_words();
        let solver = Solver::new(FrequencyStrategy, &words);
        let a = run_benchmark(&solver, &words, Difficulty::Medium, 99, false).unwrap();
        let b = run_benchmark(&solver, &words, Difficulty::Medium, 99, false).unwrap();

        assert_eq!(a.wins, b.wins);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn random_strategy_benchmark_is_reproducible() {
        let words = embedded_words();
        let solver = Solver::new(StrategyType::from_name("random"), &words);

        let a = run_benchmark(&solver, &words, Difficulty::Hard, 99, false).unwrap();
        for _ in 0..4 {
            let b = run_benchmark(&solver, &words, Difficulty::Hard, 99, false).unwrap();
            assert_eq!(a.distribution, b.distribution);
            assert_eq!(a.lost_words, b.lost_words);
        }
    }

    #[test]
    fn benchmark_empty_word_list() {
        let words = embedded_words();
        let solver = Solver::new(FrequencyStrategy, &words);
        let result = run_benchmark(&solver, &[], Difficulty::Easy, 0, false).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_wrong_guesses, 0);
        assert!(result.average_wrong_guesses.abs() < f64::EPSILON);
    }
}
