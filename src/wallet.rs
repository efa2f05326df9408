//! The betting wallet and settlement arithmetic.

use crate::options::GameOptions;
use crate::round::RoundStatus;

/// The player's wallet: balance plus the current round's bet lifecycle.
///
/// A round's profit accumulates any insurance delta plus exactly one
/// settlement delta; the balance is updated once, when the bet finishes.
#[derive(Debug, Clone)]
pub struct Wallet {
    initial_balance: f64,
    insurance_stake: f64,
    balance: f64,
    initial_bet: f64,
    profit: f64,
    insurance_taken: bool,
}

impl Wallet {
    /// Creates a wallet at the configured initial balance.
    #[must_use]
    pub fn new(options: &GameOptions) -> Self {
        Self {
            initial_balance: options.initial_balance,
            insurance_stake: f64::from(options.insurance_bet),
            balance: options.initial_balance,
            initial_bet: 0.0,
            profit: 0.0,
            insurance_taken: false,
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> f64 {
        self.balance
    }

    /// Returns the current round's bet amount.
    #[must_use]
    pub const fn initial_bet(&self) -> f64 {
        self.initial_bet
    }

    /// Returns the current round's accumulated profit.
    #[must_use]
    pub const fn profit(&self) -> f64 {
        self.profit
    }

    /// Returns whether the insurance side bet was taken this round.
    #[must_use]
    pub const fn insurance_taken(&self) -> bool {
        self.insurance_taken
    }

    /// Starts a new bet: clears per-round profit and the insurance flag
    /// and sets the bet amount. Chip validation is the engine's job.
    pub const fn set_initial_bet(&mut self, amount: f64) {
        self.profit = 0.0;
        self.insurance_taken = false;
        self.initial_bet = amount;
    }

    /// Doubles the current bet (double down).
    pub const fn double(&mut self) {
        self.initial_bet *= 2.0;
    }

    /// Records the insurance decision.
    pub const fn take_insurance(&mut self, taken: bool) {
        self.insurance_taken = taken;
    }

    /// Settles the insurance side bet into the round profit: the fixed
    /// stake is won if the dealer turned out to hold blackjack, lost
    /// otherwise. The balance is untouched until the bet finishes.
    pub const fn settle_insurance(&mut self, won: bool) {
        if won {
            self.profit += self.insurance_stake;
        } else {
            self.profit -= self.insurance_stake;
        }
    }

    /// The settlement delta for a terminal status, relative to the bet.
    #[must_use]
    pub const fn settlement_delta(&self, status: RoundStatus) -> f64 {
        match status {
            RoundStatus::Win => self.initial_bet,
            RoundStatus::Loss => -self.initial_bet,
            RoundStatus::Push => 0.0,
            RoundStatus::Surrender => -0.5 * self.initial_bet,
        }
    }

    /// Finishes the bet: folds the settlement delta into the round profit,
    /// applies the profit to the balance, and returns the round profit.
    ///
    /// Must be called exactly once per round; the engine enforces this
    /// through its state machine.
    pub const fn finish_bet(&mut self, delta: f64) -> f64 {
        self.profit += delta;
        self.balance += self.profit;
        self.profit
    }

    /// Rebuilds the balance from a replayed total profit
    /// (initial balance plus the sum of recorded round profits).
    pub const fn restore(&mut self, total_profit: f64) {
        self.balance = self.initial_balance + total_profit;
    }

    /// Resets balance and bet to defaults (session teardown).
    pub const fn close(&mut self) {
        self.balance = self.initial_balance;
        self.initial_bet = 0.0;
    }
}
