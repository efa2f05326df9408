//! Player and dealer hand representations.

use crate::card::{Card, Rank};

/// A hand of dealt cards with a cached running total.
///
/// The total always equals the sum of the current card values. Whenever a
/// card pushes the total past 21 while an ace is still counted as 11, one
/// such ace is demoted to 1 (total reduced by 10). At most one demotion is
/// needed per added card, but the rule is idempotent.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
    total: u32,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
        }
    }

    /// Appends a card and updates the running total, demoting an ace if the
    /// hand would otherwise bust.
    pub fn add_card(&mut self, card: Card) {
        self.total += u32::from(card.value);
        self.cards.push(card);
        self.demote_aces();
    }

    /// Re-applies the ace demotion invariant.
    fn demote_aces(&mut self) {
        while self.total > 21 {
            let Some(ace) = self
                .cards
                .iter_mut()
                .find(|c| c.rank == Rank::Ace && c.value == 11)
            else {
                break;
            };
            ace.value = 1;
            self.total -= 10;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the running total.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Returns whether the hand is a natural blackjack (two cards, 21).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total == 21
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > 21
    }

    /// Returns whether the hand contains an ace currently counted as 11.
    #[must_use]
    pub fn has_high_ace(&self) -> bool {
        self.cards
            .iter()
            .any(|c| c.rank == Rank::Ace && c.value == 11)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the hand and resets the total (invoked at round end).
    pub fn clear(&mut self) {
        self.cards.clear();
        self.total = 0;
    }
}

/// The dealer: a hand plus face-up/hole bookkeeping and the draw policy.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Hand,
    hole_revealed: bool,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Mutable access to the hand, for dealing.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the face-up card (the first card dealt to the dealer).
    #[must_use]
    pub fn face_up(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns whether the hole card has been revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// The value visible to the player: only the face-up card until the
    /// hole card is revealed, the full total afterwards.
    #[must_use]
    pub fn visible_total(&self) -> u32 {
        if self.hole_revealed {
            self.hand.total()
        } else {
            self.face_up().map_or(0, |c| u32::from(c.value))
        }
    }

    /// Returns whether the dealer must draw (total below 17).
    #[must_use]
    pub const fn needs_card(&self) -> bool {
        self.hand.total() < 17
    }

    /// Returns whether the hand is a soft 17: exactly 17, relying on an
    /// ace counted as 11. A soft 17 forces an extra hit even though the
    /// total has reached the stand threshold.
    #[must_use]
    pub fn is_soft_17(&self) -> bool {
        self.hand.total() == 17 && self.hand.has_high_ace()
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.hole_revealed = false;
    }
}
