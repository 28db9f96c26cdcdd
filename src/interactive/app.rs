//! TUI application state and logic

use crate::core::{Difficulty, Outcome, RoundState};
use crate::engine::{PlayerAction, RandomPicker, RoundEngine, RoundEvent};
use crate::session::{ScoreStore, ScoreUpdate, Session};
use crate::wordlists::Categories;
use anyhow::{Result, bail};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, S, R> {
    pub categories: &'a Categories,
    pub session: Session<S>,
    pub picker: RandomPicker<R>,
    pub difficulty: Difficulty,
    pub category: String,
    /// `None` until the first difficulty is chosen
    pub round: Option<RoundEngine>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub last_update: Option<ScoreUpdate>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    ChooseDifficulty,
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: ScoreStore, R: Rng> App<'a, S, R> {
    /// Create the app
    ///
    /// With a fixed `difficulty` the first round is drawn straight away,
    /// otherwise the player is asked for one and no word is drawn until then.
    ///
    /// # Errors
    ///
    /// Returns an error if `categories` is empty.
    pub fn new(
        categories: &'a Categories,
        session: Session<S>,
        rng: R,
        difficulty: Option<Difficulty>,
    ) -> Result<Self> {
        if categories.is_empty() {
            bail!("No categories available to pick a word from");
        }

        let mut app = Self {
            categories,
            session,
            picker: RandomPicker::new(rng),
            difficulty: difficulty.unwrap_or_default(),
            category: String::new(),
            round: None,
            input_mode: InputMode::ChooseDifficulty,
            input_buffer: String::new(),
            messages: Vec::new(),
            last_update: None,
            should_quit: false,
        };

        app.add_message(
            &format!(
                "Welcome {}! High score: {:03}",
                app.session.player(),
                app.session.high_score()
            ),
            MessageStyle::Info,
        );
        if let Some(difficulty) = difficulty {
            app.choose_difficulty(difficulty);
            app.add_message(
                "Type a letter or the whole word, Enter to submit, TAB for a hint",
                MessageStyle::Info,
            );
        } else {
            app.add_message("Choose difficulty: e/m/h", MessageStyle::Info);
        }
        Ok(app)
    }

    /// State of the current round, if one has been drawn
    #[must_use]
    pub fn state(&self) -> Option<&RoundState> {
        self.round.as_ref().map(RoundEngine::state)
    }

    /// Draw a new word and restart at the current difficulty
    pub fn new_round(&mut self) {
        let categories = self.categories;
        if let Some((category, word)) = categories.choose(self.picker.rng_mut()) {
            self.category = category.to_string();
            self.round = Some(RoundEngine::with_difficulty(word.clone(), self.difficulty));
            self.input_buffer.clear();
            self.last_update = None;
            self.input_mode = InputMode::Guessing;
            self.add_message(
                &format!("New round: {} ({})", self.category, self.difficulty),
                MessageStyle::Info,
            );
        } else {
            self.add_message("No words left to play!", MessageStyle::Error);
        }
    }

    /// Set the difficulty and start a fresh round with it
    pub fn choose_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.new_round();
    }

    /// Submit whatever is in the input buffer
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        self.apply(&PlayerAction::parse(&input));
    }

    pub fn request_hint(&mut self) {
        self.apply(&PlayerAction::Hint);
    }

    fn apply(&mut self, action: &PlayerAction) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        let result = round.apply(action, &mut self.picker);
        let finished = round.outcome().is_finished();

        match result {
            Ok(event) => {
                let style = match event {
                    RoundEvent::CorrectLetter { .. }
                    | RoundEvent::CorrectWord
                    | RoundEvent::HintRevealed { .. } => MessageStyle::Success,
                    RoundEvent::WrongLetter(_) | RoundEvent::WrongWord => MessageStyle::Error,
                    _ => MessageStyle::Info,
                };
                self.add_message(&event.to_string(), style);
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }

        if finished {
            self.finish_round();
        }
    }

    fn finish_round(&mut self) {
        let Some(round) = self.round.as_ref() else {
            return;
        };
        let outcome = round.outcome();
        let word = round.state().secret().text().to_uppercase();
        self.input_mode = InputMode::RoundOver;

        match outcome {
            Outcome::Won => self.add_message(
                &format!("🎉 You guessed it! The word was {word}"),
                MessageStyle::Success,
            ),
            _ => self.add_message(
                &format!("😢 Out of attempts! The word was {word}"),
                MessageStyle::Error,
            ),
        }

        match self.session.record(outcome) {
            Ok(update) => {
                if update.new_high_score {
                    self.add_message(
                        &format!("New high score: {:03}", update.high_score),
                        MessageStyle::Success,
                    );
                }
                self.last_update = Some(update);
            }
            Err(err) => {
                log::error!("could not record round: {err}");
                self.add_message(&format!("Score not saved: {err}"), MessageStyle::Error);
            }
        }
        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::ChooseDifficulty => match code {
                KeyCode::Char('e') => self.choose_difficulty(Difficulty::Easy),
                KeyCode::Char('m') => self.choose_difficulty(Difficulty::Medium),
                KeyCode::Char('h') => self.choose_difficulty(Difficulty::Hard),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            InputMode::RoundOver => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_round(),
                KeyCode::Char('d') => {
                    self.input_mode = InputMode::ChooseDifficulty;
                    self.add_message("Choose difficulty: e/m/h", MessageStyle::Info);
                }
                _ => {}
            },
            InputMode::Guessing => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.request_hint(),
                KeyCode::Enter => self.submit_input(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) if c.is_alphabetic() => {
                    if self.input_buffer.chars().count() < 32 {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: ScoreStore, R: Rng>(app: App<S, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, S, R>(terminal: &mut Terminal<B>, mut app: App<S, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: ScoreStore,
    R: Rng,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
