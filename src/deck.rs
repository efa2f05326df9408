//! Deck construction and dealing.

use rand_chacha::ChaCha8Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;
use crate::hand::Hand;

/// A shuffled 52-card deck.
///
/// Cards are removed from the end as they are dealt. A fresh deck is built
/// for every round, so running out of cards mid-round signals a logic
/// defect rather than normal play.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck, uniformly shuffled with the given generator.
    #[must_use]
    pub fn standard(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Deals the top card into the given hand and returns a copy of it.
    ///
    /// An ace is resolved here: it counts 11 if the hand's running total is
    /// still below 11, otherwise 1. The hand then re-applies its ace
    /// demotion invariant.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn deal(&mut self, hand: &mut Hand) -> Result<Card, DeckError> {
        let mut card = self.cards.pop().ok_or(DeckError::Empty)?;

        if card.rank == Rank::Ace {
            card.value = if hand.total() < 11 { 11 } else { 1 };
        }

        hand.add_card(card);
        Ok(card)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the remaining cards, bottom first (the last card is dealt next).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for Deck {
    /// Builds a deck from an explicit card order, for deterministic setups.
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
