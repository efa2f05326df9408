//! A text-menu blackjack game engine with JSON-backed history.
//!
//! The crate provides a [`Game`] type that manages the full round flow
//! from betting through settlement, plus a [`HistoryStore`] that persists
//! round outcomes and archived session summaries as flat JSON files, and
//! statistics aggregation over both.
//!
//! The engine never reads input or formats text; a presentation layer
//! (see `demos/cli_blackjack.rs`) queries it for display and feeds it
//! validated player decisions.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Game, GameOptions, HistoryConfig, HistoryStore};
//!
//! let store = HistoryStore::new(HistoryConfig::default());
//! let game = Game::new(GameOptions::default(), store, 42);
//! let _ = game;
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod history;
pub mod options;
pub mod round;
pub mod stats;
pub mod wallet;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, DealError, DeckError, HistoryError, InsuranceError, RoundError,
    ShowdownError, StatsError,
};
pub use game::{Game, GameState, PlayerAction};
pub use hand::{Dealer, Hand};
pub use history::{HistoryConfig, HistoryStore};
pub use options::GameOptions;
pub use round::{RoundRecord, RoundStatus};
pub use stats::{GameStats, RoundStats, SessionSummary};
pub use wallet::Wallet;
