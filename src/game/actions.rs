use crate::card::Card;
use crate::error::ActionError;
use crate::round::RoundStatus;

use super::{Game, GameState};

/// A player decision during the player turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Draw one card.
    Hit,
    /// End the turn with the current hand.
    Stand,
    /// Double the bet, draw exactly one card, then end the turn.
    DoubleDown,
    /// Forfeit half the bet and end the round immediately.
    Surrender,
}

const FIRST_ACTIONS: [PlayerAction; 4] = [
    PlayerAction::Hit,
    PlayerAction::Stand,
    PlayerAction::DoubleDown,
    PlayerAction::Surrender,
];

const LATER_ACTIONS: [PlayerAction; 2] = [PlayerAction::Hit, PlayerAction::Stand];

impl Game {
    /// The set of actions the player may legally take right now.
    ///
    /// Double down and surrender are offered only on the very first
    /// decision of a round; afterwards the choice set shrinks to hit and
    /// stand, so a presentation layer driven by this query can never offer
    /// an illegal action. Empty outside the player turn.
    #[must_use]
    pub fn available_actions(&self) -> &'static [PlayerAction] {
        if self.state != GameState::PlayerTurn {
            &[]
        } else if self.first_decision {
            &FIRST_ACTIONS
        } else {
            &LATER_ACTIONS
        }
    }

    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state == GameState::PlayerTurn {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: hit (draw one card).
    ///
    /// On bust the round moves directly to settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self
            .deck
            .deal(&mut self.player)
            .map_err(|_| ActionError::EmptyDeck)?;
        self.first_decision = false;

        if self.player.is_bust() {
            self.state = GameState::Settlement;
        }

        Ok(card)
    }

    /// Player action: stand (keep the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.first_decision = false;
        self.state = GameState::DealerTurn;

        Ok(())
    }

    /// Player action: double down (double the bet, draw exactly one card,
    /// then end the turn).
    ///
    /// Only legal as the very first decision of a round.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, a decision was
    /// already made this round, or the deck is empty.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        if !self.first_decision {
            return Err(ActionError::CannotDouble);
        }

        self.wallet.double();
        let card = self
            .deck
            .deal(&mut self.player)
            .map_err(|_| ActionError::EmptyDeck)?;
        self.first_decision = false;

        self.state = if self.player.is_bust() {
            GameState::Settlement
        } else {
            GameState::DealerTurn
        };

        Ok(card)
    }

    /// Player action: surrender (forfeit half the bet, end the round).
    ///
    /// Only legal as the very first decision of a round. The round moves
    /// directly to settlement with the surrender status pre-set; the
    /// dealer's hole card is never revealed.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or a decision was
    /// already made this round.
    pub fn surrender(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        if !self.first_decision {
            return Err(ActionError::CannotSurrender);
        }

        self.pending_status = Some(RoundStatus::Surrender);
        self.first_decision = false;
        self.state = GameState::Settlement;

        Ok(())
    }
}
