//! The round engine: state machine, queries, and round flow.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{Dealer, Hand};
use crate::history::HistoryStore;
use crate::options::GameOptions;
use crate::round::{RoundRecord, RoundStatus};
use crate::wallet::Wallet;

mod actions;
mod bet;
mod dealer;
mod insurance;
mod session;
pub mod state;

pub use actions::PlayerAction;
pub use state::GameState;

/// A single-player blackjack game: deck, hands, wallet, round history, and
/// the state machine that sequences one round end to end.
///
/// The engine never reads input or formats text; a presentation layer
/// queries it for display and feeds it validated player decisions.
pub struct Game {
    /// The current round's deck (rebuilt when a bet is placed).
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand and policy state.
    dealer: Dealer,
    /// The betting wallet.
    wallet: Wallet,
    /// Game options.
    options: GameOptions,
    /// Persistence collaborator for both history stores.
    store: HistoryStore,
    /// The current session's finished rounds.
    history: Vec<RoundRecord>,
    /// Current state of the round state machine.
    state: GameState,
    /// Status pre-set by an early exit (surrender) before settlement.
    pending_status: Option<RoundStatus>,
    /// Whether the player has yet to make their first decision this round.
    first_decision: bool,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use twentyone::{Game, GameOptions, HistoryConfig, HistoryStore};
    ///
    /// let store = HistoryStore::new(HistoryConfig::default());
    /// let game = Game::new(GameOptions::default(), store, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, store: HistoryStore, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::standard(&mut rng);
        let wallet = Wallet::new(&options);

        Self {
            deck,
            player: Hand::new(),
            dealer: Dealer::new(),
            wallet,
            options,
            store,
            history: Vec::new(),
            state: GameState::Betting,
            pending_status: None,
            first_decision: true,
            rng,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the wallet.
    #[must_use]
    pub const fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> f64 {
        self.wallet.balance()
    }

    /// Returns the current session's finished rounds, oldest first.
    #[must_use]
    pub fn round_history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Replaces the remaining deck order for deterministic setups; the
    /// last card is dealt first. Legal between placing a bet and dealing.
    pub fn load_deck(&mut self, cards: Vec<Card>) {
        self.deck = Deck::from(cards);
    }

    /// After the initial deal (and any insurance decision), a natural
    /// player blackjack skips the player turn entirely.
    pub(super) fn post_deal_state(&self) -> GameState {
        if self.player.is_blackjack() {
            GameState::DealerTurn
        } else {
            GameState::PlayerTurn
        }
    }

    pub(super) const fn set_state(&mut self, state: GameState) {
        self.state = state;
    }
}
