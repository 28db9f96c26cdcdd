//! Simple interactive CLI mode
//!
//! Line-based game without the full-screen interface.

use crate::core::{Difficulty, Outcome};
use crate::engine::{HintPicker, PlayerAction, RandomPicker, RoundEngine};
use crate::output::display::{print_event, print_round_status, print_score_box};
use crate::session::{ScoreStore, Session};
use crate::wordlists::Categories;
use anyhow::{Result, bail};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Options for the line-based game
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleConfig {
    /// Fixed difficulty, or ask before every round
    pub difficulty: Option<Difficulty>,
    /// Clear the terminal before redrawing the board
    pub clear_screen: bool,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error on an I/O failure, when no category is available, or when
/// the high score cannot be saved.
pub fn run_simple<S: ScoreStore, R: Rng>(
    session: &mut Session<S>,
    categories: &Categories,
    config: SimpleConfig,
    rng: &mut R,
) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    run_session(&mut input, &mut out, session, categories, config, rng)
}

/// Play rounds until the player declines another or input ends
///
/// # Errors
///
/// Same conditions as [`run_simple`].
pub fn run_session<I, O, S, R>(
    input: &mut I,
    out: &mut O,
    session: &mut Session<S>,
    categories: &Categories,
    config: SimpleConfig,
    rng: &mut R,
) -> Result<()>
where
    I: BufRead,
    O: Write,
    S: ScoreStore,
    R: Rng,
{
    writeln!(out, "Hello {},", session.player().bright_cyan().bold())?;
    writeln!(out, "Welcome to the WORD GUESSING GAME 🎮")?;
    writeln!(out, "Your high score: {:03}\n", session.high_score())?;

    loop {
        let Some((category, word)) = categories.choose(rng) else {
            bail!("No categories available to pick a word from");
        };

        let difficulty = match config.difficulty {
            Some(difficulty) => difficulty,
            None => match prompt_difficulty(input, out)? {
                Some(difficulty) => difficulty,
                None => break,
            },
        };

        log::debug!("new round: {category}, {difficulty}");
        let mut round = RoundEngine::with_difficulty(word.clone(), difficulty);
        let mut picker = RandomPicker::new(&mut *rng);

        let Some(outcome) = play_round(input, out, &mut round, category, &mut picker, config)?
        else {
            break;
        };

        let update = session.record(outcome)?;
        if config.clear_screen {
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        print_score_box(out, word.text(), &update)?;

        if !prompt_play_again(input, out)? {
            break;
        }
    }

    writeln!(out, "\nThank you for playing {}!", session.player())?;
    Ok(())
}

/// Drive one round from the prompt until it ends
///
/// Returns `None` if input ends before the round does.
///
/// # Errors
///
/// Returns an error on an I/O failure.
pub fn play_round<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    round: &mut RoundEngine,
    category: &str,
    picker: &mut impl HintPicker,
    config: SimpleConfig,
) -> Result<Option<Outcome>> {
    let mut feedback: Option<String> = None;

    while !round.outcome().is_finished() {
        if config.clear_screen {
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        } else {
            writeln!(out)?;
        }
        print_round_status(out, category, round.state())?;
        if let Some(message) = feedback.take() {
            write!(out, "{message}")?;
        }

        let Some(line) = read_input(
            input,
            out,
            "\nGuess a letter, the whole word, or type 'hint'",
        )?
        else {
            return Ok(None);
        };

        let event = round.apply(&PlayerAction::parse(&line), picker)?;

        let mut buf = Vec::new();
        print_event(&mut buf, event, round.state())?;
        feedback = Some(String::from_utf8_lossy(&buf).into_owned());
    }

    if let Some(message) = feedback {
        write!(out, "{message}")?;
    }
    Ok(Some(round.outcome()))
}

/// Ask for a difficulty until a valid one is entered
///
/// Returns `None` if input ends.
fn prompt_difficulty<I: BufRead, O: Write>(input: &mut I, out: &mut O) -> Result<Option<Difficulty>> {
    loop {
        let Some(choice) = read_input(input, out, "Choose difficulty (easy/medium/hard)")? else {
            return Ok(None);
        };
        match choice.parse() {
            Ok(difficulty) => return Ok(Some(difficulty)),
            Err(_) => writeln!(out, "{}", "Invalid choice. Try again.".yellow())?,
        }
    }
}

/// Ask whether to play again, `false` if input ends
fn prompt_play_again<I: BufRead, O: Write>(input: &mut I, out: &mut O) -> Result<bool> {
    loop {
        let Some(choice) = read_input(input, out, "\nDo you want to play again? (y/n)")? else {
            return Ok(false);
        };
        match choice.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(
                out,
                "{}",
                "Invalid input. Choose 'y' for Yes or 'n' for No.".yellow()
            )?,
        }
    }
}

/// Get user input with a prompt, `None` at end of input
fn read_input<I: BufRead, O: Write>(input: &mut I, out: &mut O, prompt: &str) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
