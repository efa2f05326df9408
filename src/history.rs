//! File-backed persistence for round and game history.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::HistoryError;
use crate::round::RoundRecord;
use crate::stats::SessionSummary;

/// Locations of the two history stores.
///
/// Both are flat JSON arrays overwritten wholesale on every save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Path of the round history store (the current session's rounds).
    pub round_history: PathBuf,
    /// Path of the game history store (archived session summaries).
    pub game_history: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self::in_dir("usr")
    }
}

impl HistoryConfig {
    /// Places both store files in the given directory, under their
    /// conventional names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            round_history: dir.join("round_history.json"),
            game_history: dir.join("game_history.json"),
        }
    }
}

/// The persistence collaborator for both history stores.
///
/// A missing or empty file is a normal state (no prior games); callers
/// branch on the explicit existence checks instead of triggering read
/// failures. Saves are atomic: the full contents are written to a sibling
/// temp file which then replaces the store, so an interrupted save never
/// leaves a truncated file behind.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    config: HistoryConfig,
}

impl HistoryStore {
    /// Creates a store over the given file locations.
    #[must_use]
    pub const fn new(config: HistoryConfig) -> Self {
        Self { config }
    }

    /// Returns the configured file locations.
    #[must_use]
    pub const fn config(&self) -> &HistoryConfig {
        &self.config
    }

    fn exists_non_empty(path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|meta| meta.len() > 0)
    }

    fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, path)
    }

    /// Returns whether a non-empty round history store exists.
    #[must_use]
    pub fn has_round_history(&self) -> bool {
        Self::exists_non_empty(&self.config.round_history)
    }

    /// Reads all round records.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. Use
    /// [`Self::has_round_history`] to avoid reading a store that was never
    /// written.
    pub fn load_round_history(&self) -> Result<Vec<RoundRecord>, HistoryError> {
        let contents = fs::read_to_string(&self.config.round_history)?;
        let records: Vec<RoundRecord> = serde_json::from_str(&contents)?;
        debug!(rounds = records.len(), "loaded round history");
        Ok(records)
    }

    /// Overwrites the round history store with the given records.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_round_history(&self, records: &[RoundRecord]) -> Result<(), HistoryError> {
        let contents = serde_json::to_string(records)?;
        Self::write_atomic(&self.config.round_history, &contents)?;
        debug!(rounds = records.len(), "saved round history");
        Ok(())
    }

    /// Truncates the round history store to empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn clear_round_history(&self) -> Result<(), HistoryError> {
        Self::write_atomic(&self.config.round_history, "")?;
        Ok(())
    }

    /// Returns whether a non-empty game history store exists.
    #[must_use]
    pub fn has_game_history(&self) -> bool {
        Self::exists_non_empty(&self.config.game_history)
    }

    /// Reads all archived session summaries.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. Use
    /// [`Self::has_game_history`] to avoid reading a store that was never
    /// written.
    pub fn load_game_history(&self) -> Result<Vec<SessionSummary>, HistoryError> {
        let contents = fs::read_to_string(&self.config.game_history)?;
        let summaries: Vec<SessionSummary> = serde_json::from_str(&contents)?;
        debug!(games = summaries.len(), "loaded game history");
        Ok(summaries)
    }

    /// Overwrites the game history store with the given summaries.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_game_history(&self, summaries: &[SessionSummary]) -> Result<(), HistoryError> {
        let contents = serde_json::to_string(summaries)?;
        Self::write_atomic(&self.config.game_history, &contents)?;
        debug!(games = summaries.len(), "saved game history");
        Ok(())
    }

    /// Truncates the game history store to empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn clear_game_history(&self) -> Result<(), HistoryError> {
        Self::write_atomic(&self.config.game_history, "")?;
        Ok(())
    }
}
