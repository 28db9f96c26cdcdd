//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::Outcome;
use crate::output::formatters::{spaced_pattern, used_letters_line};
use crate::session::ScoreStore;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: ScoreStore, R: Rng>(f: &mut Frame, app: &App<S, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Session + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎮 WORD GUESSING GAME")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<S: ScoreStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Word
            Constraint::Length(3), // Attempts gauge
        ])
        .split(area);

    let Some(state) = app.state() else {
        let waiting = Paragraph::new("Pick a difficulty to draw a word")
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(" Word ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(waiting, area);
        return;
    };
    let word_color = match state.outcome() {
        Outcome::InProgress => Color::Yellow,
        Outcome::Won => Color::Green,
        Outcome::Lost => Color::Red,
    };
    // Show the answer once the round is lost
    let word_text = if state.outcome() == Outcome::Lost {
        state
            .secret()
            .chars()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        spaced_pattern(state).to_uppercase()
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Category: "),
            Span::styled(
                app.category.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("   Difficulty: {}", app.difficulty)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            word_text,
            Style::default().fg(word_color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(format!("Used letters: {}", used_letters_line(state))),
        Line::from(if state.hint_used() {
            Span::styled("Hint used", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled("Hint available (TAB)", Style::default().fg(Color::Green))
        }),
    ];

    let board = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(board, chunks[0]);

    let budget = state.attempts_budget().max(1);
    let percent = (state.attempts_remaining() * 100 / budget) as u16;
    let gauge_color = if percent > 50 {
        Color::Green
    } else if percent > 20 {
        Color::Yellow
    } else {
        Color::Red
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(gauge_color))
        .percent(percent)
        .label(format!(
            "{}/{} left",
            state.attempts_remaining(),
            state.attempts_budget()
        ));
    f.render_widget(gauge, chunks[1]);
}

fn render_info_panel<S: ScoreStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Session
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    let session = Paragraph::new(vec![
        Line::from(format!("Player:     {}", app.session.player())),
        Line::from(format!("Score:      {:03}", app.session.score())),
        Line::from(format!("High score: {:03}", app.session.high_score())),
    ])
    .block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(session, chunks[0]);

    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, chunks[1]);
}

fn render_input<S: ScoreStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::ChooseDifficulty => (
            " Choose difficulty: e = easy (10)  m = medium (7)  h = hard (5) ",
            "",
            Color::Cyan,
        ),
        InputMode::Guessing => (
            " Guess a letter or the whole word | Enter to submit | TAB for hint ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::RoundOver => (
            " Round over | n: new round  d: difficulty  q: quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: ScoreStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Guessing => "Esc: Quit | Enter: Submit | TAB: Hint",
        InputMode::ChooseDifficulty | InputMode::RoundOver => "q: Quit | Ctrl-C: Quit",
    };
    let status = Paragraph::new(format!(
        "Rounds: {} | {help_text}",
        app.session.rounds_played()
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
