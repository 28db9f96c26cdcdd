//! Word solving command
//!
//! Plays one round with the solver and returns every step it took.

use crate::core::{Difficulty, Outcome, SecretWord};
use crate::engine::{HintPicker, RoundEngine, RoundEvent};
use crate::solver::{Solver, SolverAction, Strategy};
use anyhow::{Result, bail};
use rand::Rng;

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub difficulty: Difficulty,
    pub outcome: Outcome,
    pub steps: Vec<SolveStep>,
    pub wrong_guesses: u32,
    pub hint_used: bool,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome == Outcome::Won
    }
}

/// A single action taken by the solver
pub struct SolveStep {
    pub action: SolverAction,
    pub event: RoundEvent,
    pub pattern: String,
    pub attempts_remaining: u32,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Let the solver play `target` at `difficulty` until the round ends
///
/// Hint positions come from `picker`, any random guesses from `rng`. Wrong
/// whole-word guesses are remembered so the solver moves on from them.
///
/// # Errors
///
/// Returns an error if the solver has no action for a round still in progress
/// or repeats an action that changes nothing, which would loop forever.
pub fn solve_word<S: Strategy, R: Rng + ?Sized>(
    target: &SecretWord,
    difficulty: Difficulty,
    solver: &Solver<S>,
    picker: &mut impl HintPicker,
    rng: &mut R,
) -> Result<SolveResult> {
    let mut round = RoundEngine::with_difficulty(target.clone(), difficulty);
    let mut steps = Vec::new();
    let mut refuted: Vec<String> = Vec::new();

    while !round.outcome().is_finished() {
        let candidates_before = solver.count_candidates(round.state(), &refuted);

        let Some(action) = solver.next_action(round.state(), &refuted, &mut *rng) else {
            bail!("Solver has no move left for {}", round.state().pattern());
        };

        let event = round.apply(&action.to_player_action(), picker)?;
        if event.is_no_op() {
            bail!("Solver repeated a move with no effect: {action} ({event:?})");
        }
        if let (RoundEvent::WrongWord, SolverAction::Word(word)) = (event, &action) {
            refuted.push(word.clone());
        }

        steps.push(SolveStep {
            action,
            event,
            pattern: round.state().pattern(),
            attempts_remaining: round.state().attempts_remaining(),
            candidates_before,
            candidates_after: solver.count_candidates(round.state(), &refuted),
        });
    }

    let state = round.into_state();
    Ok(SolveResult {
        target: target.text().to_string(),
        difficulty,
        outcome: state.outcome(),
        steps,
        wrong_guesses: state.wrong_guesses(),
        hint_used: state.hint_used(),
    })
}
