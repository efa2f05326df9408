//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards left.
    ///
    /// A round never comes close to exhausting a fresh 52-card deck, so
    /// this always signals a logic defect in the caller.
    #[error("the deck is empty")]
    Empty,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// The amount is not one of the configured chip denominations.
    #[error("bet is not a valid chip denomination")]
    InvalidChip,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The deck ran out of cards.
    #[error("the deck is empty")]
    EmptyDeck,
}

/// Errors that can occur during the insurance decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Insurance is not currently offered.
    #[error("insurance is not currently offered")]
    InvalidState,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Double down is only legal as the very first decision.
    #[error("cannot double down after the first decision")]
    CannotDouble,
    /// Surrender is only legal as the very first decision.
    #[error("cannot surrender after the first decision")]
    CannotSurrender,
    /// The deck ran out of cards.
    #[error("the deck is empty")]
    EmptyDeck,
}

/// Errors that can occur while the dealer plays out their hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for the dealer turn.
    #[error("invalid game state for the dealer turn")]
    InvalidState,
    /// The deck ran out of cards.
    #[error("the deck is empty")]
    EmptyDeck,
}

/// Errors that can occur while settling and recording a round.
#[derive(Debug, Error)]
pub enum RoundError {
    /// Invalid game state for settlement (including settling twice).
    #[error("invalid game state for settlement")]
    InvalidState,
    /// Persisting the round history failed.
    #[error(transparent)]
    History(#[from] HistoryError),
}

/// Errors that can occur reading or writing the history stores.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// An I/O failure on a history file.
    #[error("history file error: {0}")]
    Io(#[from] std::io::Error),
    /// A history file holds malformed records.
    #[error("history parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur computing statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    /// There are no rounds to aggregate; averages and rates are undefined.
    #[error("no rounds recorded")]
    NoRounds,
}
