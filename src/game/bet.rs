use crate::deck::Deck;
use crate::error::{BetError, DealError};

use super::{Game, GameState};

impl Game {
    /// Places the round's bet and builds a fresh shuffled deck.
    ///
    /// The amount must be one of the configured chip denominations. Not
    /// betting at all aborts the round before any cards are dealt; once a
    /// bet is placed the round proceeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not accepting bets or the amount is
    /// not a configured chip.
    pub fn bet(&mut self, amount: u32) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        if !self.options.chips.contains(&amount) {
            return Err(BetError::InvalidChip);
        }

        self.wallet.set_initial_bet(f64::from(amount));
        self.deck = Deck::standard(&mut self.rng);
        self.state = GameState::Dealing;

        Ok(())
    }

    /// Deals the initial cards: player, dealer face-up, player, dealer
    /// hole. If the dealer's face-up card is an ace the insurance decision
    /// is offered next; otherwise play continues directly (skipping the
    /// player turn on a natural blackjack).
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed or the deck runs out.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        self.player.clear();
        self.dealer.clear();
        self.pending_status = None;
        self.first_decision = true;

        self.deck
            .deal(&mut self.player)
            .map_err(|_| DealError::EmptyDeck)?;
        self.deck
            .deal(self.dealer.hand_mut())
            .map_err(|_| DealError::EmptyDeck)?;
        self.deck
            .deal(&mut self.player)
            .map_err(|_| DealError::EmptyDeck)?;
        self.deck
            .deal(self.dealer.hand_mut())
            .map_err(|_| DealError::EmptyDeck)?;

        let up_card_is_ace = self
            .dealer
            .face_up()
            .is_some_and(|c| c.rank == crate::card::Rank::Ace);

        self.state = if up_card_is_ace {
            GameState::Insurance
        } else {
            self.post_deal_state()
        };

        Ok(())
    }
}
