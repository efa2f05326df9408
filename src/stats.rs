//! Aggregation of round outcomes into statistics and session summaries.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::round::{RoundRecord, RoundStatus, timestamp};

/// Number of distinct round statuses; sizes the per-status count arrays.
const STATUS_COUNT: usize = RoundStatus::ALL.len();

/// Statistics folded from a sequence of round records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundStats {
    /// Number of rounds aggregated (always at least one).
    pub rounds: usize,
    /// Per-status counts, indexed by [`RoundStatus`] code.
    pub counts: [u32; STATUS_COUNT],
    /// Sum of all round profits.
    pub total_profit: f64,
    /// Average profit per round.
    pub average_profit: f64,
    /// Fraction of rounds won.
    pub win_rate: f64,
    /// Completion time of the most recent round.
    pub last_played: NaiveDateTime,
}

impl RoundStats {
    /// Folds round records into statistics.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::NoRounds`] for an empty record list; averages
    /// and rates are undefined without rounds and are never computed as
    /// silent NaNs.
    pub fn from_records(records: &[RoundRecord]) -> Result<Self, StatsError> {
        let last = records.last().ok_or(StatsError::NoRounds)?;

        let mut counts = [0u32; STATUS_COUNT];
        let mut total_profit = 0.0;

        for record in records {
            counts[record.status.code() as usize] += 1;
            total_profit += record.profit;
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for round counts"
        )]
        let rounds_f = records.len() as f64;

        Ok(Self {
            rounds: records.len(),
            counts,
            total_profit,
            average_profit: total_profit / rounds_f,
            win_rate: f64::from(counts[RoundStatus::Win.code() as usize]) / rounds_f,
            last_played: last.time,
        })
    }

    /// Returns the count of rounds with the given status.
    #[must_use]
    pub const fn count(&self, status: RoundStatus) -> u32 {
        self.counts[status.code() as usize]
    }
}

/// A finalized session, as archived in the game history store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Rounds lost.
    #[serde(rename = "LOSSES")]
    pub losses: u32,
    /// Rounds pushed.
    #[serde(rename = "PUSHES")]
    pub pushes: u32,
    /// Rounds won.
    #[serde(rename = "WINS")]
    pub wins: u32,
    /// Rounds surrendered.
    #[serde(rename = "SURRENDERS")]
    pub surrenders: u32,
    /// Completion time of the session's final round.
    #[serde(rename = "LAST PLAYED TIME", with = "timestamp")]
    pub last_played: NaiveDateTime,
    /// Total profit over the session.
    #[serde(rename = "TOTAL PROFIT")]
    pub total_profit: f64,
}

impl SessionSummary {
    /// Summarizes a session's round records.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::NoRounds`] for an empty record list.
    pub fn from_records(records: &[RoundRecord]) -> Result<Self, StatsError> {
        let stats = RoundStats::from_records(records)?;
        Ok(Self {
            losses: stats.count(RoundStatus::Loss),
            pushes: stats.count(RoundStatus::Push),
            wins: stats.count(RoundStatus::Win),
            surrenders: stats.count(RoundStatus::Surrender),
            last_played: stats.last_played,
            total_profit: stats.total_profit,
        })
    }

    /// Number of rounds covered by this summary.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.losses + self.pushes + self.wins + self.surrenders
    }
}

/// Statistics folded across all archived sessions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameStats {
    /// Number of archived sessions.
    pub games: usize,
    /// Per-status counts across all sessions, indexed by status code.
    pub counts: [u32; STATUS_COUNT],
    /// Total profit across all sessions.
    pub total_profit: f64,
    /// Average profit per round across all sessions.
    pub average_profit: f64,
    /// Fraction of all rounds won.
    pub win_rate: f64,
}

impl GameStats {
    /// Folds archived session summaries into overall statistics.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::NoRounds`] if there are no summaries or the
    /// summaries cover no rounds.
    pub fn aggregate(summaries: &[SessionSummary]) -> Result<Self, StatsError> {
        if summaries.is_empty() {
            return Err(StatsError::NoRounds);
        }

        let mut counts = [0u32; STATUS_COUNT];
        let mut total_profit = 0.0;

        for summary in summaries {
            counts[RoundStatus::Loss.code() as usize] += summary.losses;
            counts[RoundStatus::Push.code() as usize] += summary.pushes;
            counts[RoundStatus::Win.code() as usize] += summary.wins;
            counts[RoundStatus::Surrender.code() as usize] += summary.surrenders;
            total_profit += summary.total_profit;
        }

        let rounds: u32 = counts.iter().sum();
        if rounds == 0 {
            return Err(StatsError::NoRounds);
        }

        Ok(Self {
            games: summaries.len(),
            counts,
            total_profit,
            average_profit: total_profit / f64::from(rounds),
            win_rate: f64::from(counts[RoundStatus::Win.code() as usize]) / f64::from(rounds),
        })
    }

    /// Returns the count of rounds with the given status.
    #[must_use]
    pub const fn count(&self, status: RoundStatus) -> u32 {
        self.counts[status.code() as usize]
    }
}
