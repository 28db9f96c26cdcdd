//! High score persistence

use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid player name {0:?}, use letters, digits, spaces, '-' or '_'")]
    InvalidPlayer(String),
    #[error("Could not access score file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Score file {} does not hold a number: {content:?}", path.display())]
    Parse { path: PathBuf, content: String },
}

/// Reads and writes a player's high score
///
/// Player ids are case-insensitive. Unknown players read as 0.
pub trait ScoreStore {
    /// # Errors
    /// Returns `StoreError` if the stored value cannot be read.
    fn read(&self, player: &str) -> Result<u32, StoreError>;

    /// # Errors
    /// Returns `StoreError` if the value cannot be written.
    fn write(&mut self, player: &str, score: u32) -> Result<(), StoreError>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn read(&self, player: &str) -> Result<u32, StoreError> {
        (**self).read(player)
    }

    fn write(&mut self, player: &str, score: u32) -> Result<(), StoreError> {
        (**self).write(player, score)
    }
}

/// In-memory store, nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    scores: FxHashMap<String, u32>,
}

impl ScoreStore for MemoryScoreStore {
    fn read(&self, player: &str) -> Result<u32, StoreError> {
        Ok(self
            .scores
            .get(&player.to_lowercase())
            .copied()
            .unwrap_or(0))
    }

    fn write(&mut self, player: &str, score: u32) -> Result<(), StoreError> {
        self.scores.insert(player.to_lowercase(), score);
        Ok(())
    }
}

/// One `<player>_word_score.txt` file per player, holding a decimal number
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    dir: PathBuf,
}

impl FileScoreStore {
    /// Default directory, relative to the working directory
    pub const DEFAULT_DIR: &'static str = "user_data";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the score file for `player`
    ///
    /// # Errors
    /// Returns `StoreError::InvalidPlayer` for names that are empty or contain
    /// characters unsafe in a file name.
    pub fn path_for(&self, player: &str) -> Result<PathBuf, StoreError> {
        let player = player.trim();
        let valid = !player.is_empty()
            && player
                .chars()
                .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'));
        if !valid {
            return Err(StoreError::InvalidPlayer(player.to_string()));
        }

        Ok(self
            .dir
            .join(format!("{}_word_score.txt", player.to_lowercase())))
    }
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIR)
    }
}

impl ScoreStore for FileScoreStore {
    fn read(&self, player: &str) -> Result<u32, StoreError> {
        let path = self.path_for(player)?;

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        trimmed.parse().map_err(|_| StoreError::Parse {
            path,
            content: trimmed.to_string(),
        })
    }

    fn write(&mut self, player: &str, score: u32) -> Result<(), StoreError> {
        let path = self.path_for(player)?;

        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        fs::write(&path, score.to_string()).map_err(|source| StoreError::Io { path, source })?;

        log::debug!("saved score {score} for {player:?}");
        Ok(())
    }
}
