use tracing::info;

use crate::error::{HistoryError, StatsError};
use crate::stats::{RoundStats, SessionSummary};

use super::Game;

impl Game {
    /// Returns whether a saved session exists to resume.
    #[must_use]
    pub fn has_saved_session(&self) -> bool {
        self.store.has_round_history()
    }

    /// Resumes the saved session: loads the round store and replays the
    /// balance as the initial balance plus the sum of recorded profits.
    ///
    /// # Errors
    ///
    /// Returns an error if the round store cannot be read or parsed.
    pub fn resume(&mut self) -> Result<(), HistoryError> {
        let records = self.store.load_round_history()?;
        let total_profit: f64 = records.iter().map(|r| r.profit).sum();

        self.wallet.restore(total_profit);
        self.history = records;

        info!(
            rounds = self.history.len(),
            balance = self.wallet.balance(),
            "session resumed"
        );

        Ok(())
    }

    /// Statistics over the current session's rounds.
    ///
    /// # Errors
    ///
    /// Returns an error if no rounds have been played yet.
    pub fn round_stats(&self) -> Result<RoundStats, StatsError> {
        RoundStats::from_records(&self.history)
    }

    /// Returns whether archived sessions exist.
    #[must_use]
    pub fn has_game_history(&self) -> bool {
        self.store.has_game_history()
    }

    /// Loads the archived session summaries.
    ///
    /// # Errors
    ///
    /// Returns an error if the game store cannot be read or parsed. Use
    /// [`Self::has_game_history`] to branch on the no-prior-games state.
    pub fn game_history(&self) -> Result<Vec<SessionSummary>, HistoryError> {
        self.store.load_game_history()
    }

    /// Finalizes the session: summarizes its rounds, appends the summary
    /// to the game history store, resets the wallet to defaults, and
    /// clears the round history. A session with no rounds is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if either store cannot be read or written.
    pub fn finish_session(&mut self) -> Result<Option<SessionSummary>, HistoryError> {
        let Ok(summary) = SessionSummary::from_records(&self.history) else {
            return Ok(None);
        };

        let mut summaries = if self.store.has_game_history() {
            self.store.load_game_history()?
        } else {
            Vec::new()
        };
        summaries.push(summary);
        self.store.save_game_history(&summaries)?;

        self.wallet.close();
        self.store.clear_round_history()?;
        self.history.clear();

        info!(
            rounds = summary.rounds(),
            total_profit = summary.total_profit,
            "session archived"
        );

        Ok(Some(summary))
    }

    /// Clears the archived game history.
    ///
    /// # Errors
    ///
    /// Returns an error if the game store cannot be written.
    pub fn clear_game_history(&self) -> Result<(), HistoryError> {
        self.store.clear_game_history()
    }
}
