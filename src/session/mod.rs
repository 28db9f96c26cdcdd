//! Scoring across rounds
//!
//! The engine knows nothing about players or scores. A [`Session`] records
//! each finished round's outcome as a win streak and persists the player's
//! best streak through a [`ScoreStore`].

mod store;

pub use store::{FileScoreStore, MemoryScoreStore, ScoreStore, StoreError};

use crate::core::Outcome;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Cannot score a round that is still in progress")]
    RoundNotFinished,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Score change produced by one finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub outcome: Outcome,
    pub score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
}

/// One player's run of consecutive rounds
#[derive(Debug)]
pub struct Session<S> {
    player: String,
    store: S,
    score: u32,
    high_score: u32,
    rounds_played: u32,
}

impl<S: ScoreStore> Session<S> {
    /// Start a session, loading the player's stored high score
    ///
    /// # Errors
    /// Returns `SessionError::Store` if the stored score cannot be read.
    pub fn new(player: impl Into<String>, store: S) -> Result<Self, SessionError> {
        let player = player.into();
        let high_score = store.read(&player)?;
        log::info!("session for {player:?}, high score {high_score}");

        Ok(Self {
            player,
            store,
            score: 0,
            high_score,
            rounds_played: 0,
        })
    }

    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Current win streak
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Score a finished round
    ///
    /// A win extends the streak, a loss resets it. A streak that beats the
    /// high score is written to the store straight away.
    ///
    /// # Errors
    /// Returns `SessionError::RoundNotFinished` for `Outcome::InProgress` and
    /// `SessionError::Store` if the new high score cannot be saved. In the
    /// latter case the in-memory high score is still raised.
    pub fn record(&mut self, outcome: Outcome) -> Result<ScoreUpdate, SessionError> {
        self.score = match outcome {
            Outcome::InProgress => return Err(SessionError::RoundNotFinished),
            Outcome::Won => self.score + 1,
            Outcome::Lost => 0,
        };
        self.rounds_played += 1;

        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
            self.store.write(&self.player, self.high_score)?;
            log::info!("new high score {} for {:?}", self.high_score, self.player);
        }

        Ok(ScoreUpdate {
            outcome,
            score: self.score,
            high_score: self.high_score,
            new_high_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_stored_high_score() {
        let mut store = MemoryScoreStore::default();
        store.write("Ada", 4).unwrap();

        let session = Session::new("ada", store).unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.high_score(), 4);
    }

    #[test]
    fn wins_extend_streak_and_losses_reset_it() {
        let mut session = Session::new("ada", MemoryScoreStore::default()).unwrap();

        assert_eq!(session.record(Outcome::Won).unwrap().score, 1);
        assert_eq!(session.record(Outcome::Won).unwrap().score, 2);
        let update = session.record(Outcome::Lost).unwrap();

        assert_eq!(update.score, 0);
        assert_eq!(update.high_score, 2);
        assert!(!update.new_high_score);
        assert_eq!(session.rounds_played(), 3);
    }

    #[test]
    fn high_score_is_persisted_only_when_beaten() {
        let mut store = MemoryScoreStore::default();
        store.write("ada", 1).unwrap();
        let mut session = Session::new("ada", store).unwrap();

        let first = session.record(Outcome::Won).unwrap();
        assert!(!first.new_high_score);
        assert_eq!(session.store().read("ada").unwrap(), 1);

        let second = session.record(Outcome::Won).unwrap();
        assert!(second.new_high_score);
        assert_eq!(second.high_score, 2);
        assert_eq!(session.store().read("ada").unwrap(), 2);
    }

    #[test]
    fn in_progress_outcome_is_refused() {
        let mut session = Session::new("ada", MemoryScoreStore::default()).unwrap();
        assert!(matches!(
            session.record(Outcome::InProgress),
            Err(SessionError::RoundNotFinished)
        ));
        assert_eq!(session.rounds_played(), 0);
    }
}
