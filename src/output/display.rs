//! Display functions for rounds and command results

use super::formatters::{attempts_bar, spaced_pattern, star_box, used_letters_line};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{Outcome, RoundState};
use crate::engine::RoundEvent;
use crate::session::ScoreUpdate;
use colored::Colorize;
use std::io::{self, Write};

/// Print the board for the round in progress
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_round_status(out: &mut impl Write, category: &str, state: &RoundState) -> io::Result<()> {
    writeln!(out, "Category: {}", category.bright_cyan().bold())?;
    writeln!(
        out,
        "Attempts left: {} [{}]",
        state.attempts_remaining().to_string().bright_yellow().bold(),
        attempts_bar(state, state.attempts_budget() as usize)
    )?;
    writeln!(out, "Word: {}", spaced_pattern(state).bright_white().bold())?;
    writeln!(out, "Used letters: {}", used_letters_line(state))?;
    if !state.hint_used() {
        writeln!(out, "{}", "Hint available: type 'hint'".bright_black())?;
    }
    Ok(())
}

/// Print the feedback for one event
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_event(out: &mut impl Write, event: RoundEvent, state: &RoundState) -> io::Result<()> {
    let message = event.to_string();
    match event {
        RoundEvent::CorrectLetter { .. } | RoundEvent::CorrectWord => {
            writeln!(out, "✅ {}", message.green())
        }
        RoundEvent::HintRevealed { .. } => writeln!(out, "🔎 {}", message.cyan()),
        RoundEvent::WrongLetter(_) | RoundEvent::WrongWord => writeln!(
            out,
            "❌ {} Attempts left: {}",
            message.red(),
            state.attempts_remaining()
        ),
        RoundEvent::AlreadyGuessed(_) | RoundEvent::HintAlreadyUsed => {
            writeln!(out, "⚠️  {}", message.yellow())
        }
        RoundEvent::RejectedInput(_) => writeln!(out, "{}", message.yellow()),
    }
}

/// Print the boxed end-of-round summary
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_score_box(out: &mut impl Write, word: &str, update: &ScoreUpdate) -> io::Result<()> {
    let title = match update.outcome {
        Outcome::Won => "🎉 You guessed it!",
        _ => "😢 Out of attempts!",
    };
    let mut lines = vec![
        title.to_string(),
        format!("The word was: {word}"),
        format!("Current Score: {:03}", update.score),
        format!("High Score: {:03}", update.high_score),
    ];
    if update.new_high_score {
        lines.push("New high score!".to_string());
    }

    let boxed = star_box(&lines);
    let colored_box = if update.outcome == Outcome::Won {
        boxed.green()
    } else {
        boxed.red()
    };
    writeln!(out, "{colored_box}")
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({}, {} attempts)",
        result.target.to_uppercase().bright_yellow().bold(),
        result.difficulty,
        result.difficulty.attempts()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        let marker = if step.event.is_miss() {
            "✗".red()
        } else {
            "✓".green()
        };
        println!(
            "\nTurn {turn}: {marker} {:<14} {}",
            step.action.to_string(),
            step.pattern
                .chars()
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Attempts:   {} left", step.attempts_remaining);
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!(
                "✅ Solved with {} wrong {}{}",
                result.wrong_guesses,
                if result.wrong_guesses == 1 { "guess" } else { "guesses" },
                if result.hint_used { " and a hint" } else { "" }
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} steps", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BENCHMARK RESULTS:".bright_cyan().bold(),
        result.difficulty.to_string().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Avg wrong:        {:.2} of {}",
        result.average_wrong_guesses,
        result.difficulty.attempts()
    );
    println!("   Hints used:       {}", result.hints_used);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Wrong guesses per round:".bright_cyan().bold());
    for (&wrong, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {wrong:2}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.lost_words.is_empty() {
        println!("\n💀 {}", "Lost words:".red().bold());
        for word in result.lost_words.iter().take(10) {
            println!("   • {}", word.to_uppercase());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;
    use crate::engine::RoundEngine;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn round_status_shows_board() {
        let mut round = RoundEngine::new(SecretWord::new("banana").unwrap(), 7);
        round.submit_letter_guess("a").unwrap();

        let text = render(|out| print_round_status(out, "fruits", round.state()));

        assert!(text.contains("fruits"));
        assert!(text.contains("_ a _ a _ a"));
        assert!(text.contains("Used letters: a"));
        assert!(text.contains("type 'hint'"));
    }

    #[test]
    fn score_box_mentions_word_and_scores() {
        let update = ScoreUpdate {
            outcome: Outcome::Won,
            score: 3,
            high_score: 3,
            new_high_score: true,
        };

        let text = render(|out| print_score_box(out, "banana", &update));

        assert!(text.contains("The word was: banana"));
        assert!(text.contains("Current Score: 003"));
        assert!(text.contains("New high score!"));
    }

    #[test]
    fn wrong_event_reports_attempts() {
        let mut round = RoundEngine::new(SecretWord::new("cat").unwrap(), 3);
        let event = round.submit_letter_guess("z").unwrap();

        let text = render(|out| print_event(out, event, round.state()));

        assert!(text.contains("Attempts left: 2"));
    }
}
