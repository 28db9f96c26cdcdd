//! Formatting utilities for terminal output

use crate::core::RoundState;

/// Revealed word with letters separated by spaces, e.g. `"_ a _ a _ a"`
#[must_use]
pub fn spaced_pattern(state: &RoundState) -> String {
    let pattern = state.pattern();
    let mut result = String::with_capacity(pattern.len() * 2);
    for (i, ch) in pattern.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// Used letters as `"a, e, t"`, or `"None"` before the first guess
#[must_use]
pub fn used_letters_line(state: &RoundState) -> String {
    if state.used_letters().is_empty() {
        return "None".to_string();
    }
    state
        .used_letters()
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining attempts as a bar
#[must_use]
pub fn attempts_bar(state: &RoundState, width: usize) -> String {
    create_progress_bar(
        f64::from(state.attempts_remaining()),
        f64::from(state.attempts_budget()),
        width,
    )
}

/// Frame `lines` in a box of `*`, each line centered
///
/// ```text
/// ***************
/// *   Line one  *
/// ***************
/// ```
#[must_use]
pub fn star_box(lines: &[String]) -> String {
    let max_length = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let inner = max_length + 2;
    let border = "*".repeat(inner + 4);

    let mut result = String::new();
    result.push_str(&border);
    result.push('\n');
    for line in lines {
        result.push_str(&format!("* {line:^inner$} *\n"));
    }
    result.push_str(&border);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;
    use crate::engine::RoundEngine;

    fn engine(word: &str) -> RoundEngine {
        RoundEngine::new(SecretWord::new(word).unwrap(), 4)
    }

    #[test]
    fn spaced_pattern_separates_letters() {
        let mut round = engine("banana");
        assert_eq!(spaced_pattern(round.state()), "_ _ _ _ _ _");

        round.submit_letter_guess("a").unwrap();
        assert_eq!(spaced_pattern(round.state()), "_ a _ a _ a");
    }

    #[test]
    fn used_letters_line_sorted() {
        let mut round = engine("banana");
        assert_eq!(used_letters_line(round.state()), "None");

        round.submit_letter_guess("n").unwrap();
        round.submit_letter_guess("e").unwrap();
        round.submit_letter_guess("a").unwrap();
        assert_eq!(used_letters_line(round.state()), "a, e, n");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(3.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }

    #[test]
    fn attempts_bar_tracks_misses() {
        let mut round = engine("cat");
        round.submit_letter_guess("x").unwrap();
        assert_eq!(attempts_bar(round.state(), 4), "███░");
    }

    #[test]
    fn star_box_centers_lines() {
        let boxed = star_box(&["Hi".to_string(), "Four".to_string()]);
        let expected = "**********\n*   Hi   *\n*  Four  *\n**********";
        assert_eq!(boxed, expected);
    }
}
