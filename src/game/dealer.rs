use chrono::{Local, Timelike};
use tracing::info;

use crate::card::Card;
use crate::error::{RoundError, ShowdownError};
use crate::round::{RoundRecord, RoundStatus};

use super::{Game, GameState};

impl Game {
    /// Plays out the dealer's hand.
    ///
    /// Reveals the hole card, settles the insurance side bet if one was
    /// taken (won if the dealer holds blackjack, lost otherwise), then
    /// draws until the total reaches 17 and is not a soft 17, or the
    /// dealer busts. When the player holds a natural blackjack the dealer
    /// reveals but draws nothing and the hands go straight to comparison.
    ///
    /// Returns the cards the dealer drew.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealer turn or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer.reveal_hole();

        if self.wallet.insurance_taken() {
            self.wallet.settle_insurance(self.dealer.is_blackjack());
        }

        let mut drawn = Vec::new();

        if !self.player.is_blackjack() {
            while self.dealer.needs_card() || self.dealer.is_soft_17() {
                let card = self
                    .deck
                    .deal(self.dealer.hand_mut())
                    .map_err(|_| ShowdownError::EmptyDeck)?;
                drawn.push(card);
            }
        }

        self.state = GameState::Settlement;

        Ok(drawn)
    }

    /// Compares the hands under the settlement rules, first match wins:
    /// player bust loses; dealer bust wins; the higher total wins
    /// outright; on equal totals a blackjack beats a non-blackjack;
    /// otherwise the round is a push.
    #[must_use]
    pub fn round_outcome(&self) -> RoundStatus {
        let player = &self.player;
        let dealer = self.dealer.hand();

        if player.is_bust() {
            RoundStatus::Loss
        } else if dealer.is_bust() {
            RoundStatus::Win
        } else if player.total() > dealer.total() {
            RoundStatus::Win
        } else if player.total() < dealer.total() {
            RoundStatus::Loss
        } else if player.is_blackjack() && !dealer.is_blackjack() {
            RoundStatus::Win
        } else if !player.is_blackjack() && dealer.is_blackjack() {
            RoundStatus::Loss
        } else {
            RoundStatus::Push
        }
    }

    /// Settles and records the round.
    ///
    /// Applies the wallet settlement for the outcome (a pre-set surrender
    /// or the hand comparison), stamps the record with the current local
    /// time, appends it to the session history, persists the round store,
    /// and clears both hands. Runs exactly once per round; the state
    /// machine rejects a second call.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not awaiting settlement or the
    /// round store cannot be written.
    pub fn finish_round(&mut self) -> Result<RoundRecord, RoundError> {
        if self.state != GameState::Settlement {
            return Err(RoundError::InvalidState);
        }

        let status = self
            .pending_status
            .take()
            .unwrap_or_else(|| self.round_outcome());

        let delta = self.wallet.settlement_delta(status);
        let profit = self.wallet.finish_bet(delta);

        // The store keeps seconds precision; truncate so the in-memory
        // record equals what reads back from disk.
        let now = Local::now().naive_local();
        let record = RoundRecord {
            status,
            time: now.with_nanosecond(0).unwrap_or(now),
            profit,
        };

        self.history.push(record);
        self.store.save_round_history(&self.history)?;

        self.player.clear();
        self.dealer.clear();
        self.state = GameState::Betting;

        info!(status = %status, profit, balance = self.wallet.balance(), "round finished");

        Ok(record)
    }
}
