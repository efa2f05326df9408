//! Game configuration options.

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_initial_balance(500.0)
///     .with_insurance_bet(50);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Starting (and session-reset) wallet balance.
    pub initial_balance: f64,
    /// The chip denominations a bet may be placed with.
    pub chips: Vec<u32>,
    /// The fixed stake of the insurance side bet.
    pub insurance_bet: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            initial_balance: 1000.0,
            chips: vec![10, 25, 50, 100, 250, 500, 1000, 2500],
            insurance_bet: 100,
        }
    }
}

impl GameOptions {
    /// Sets the initial balance.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_balance(2000.0);
    /// assert_eq!(options.initial_balance, 2000.0);
    /// ```
    #[must_use]
    pub const fn with_initial_balance(mut self, balance: f64) -> Self {
        self.initial_balance = balance;
        self
    }

    /// Sets the chip denominations.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_chips(vec![5, 10, 20]);
    /// assert_eq!(options.chips, vec![5, 10, 20]);
    /// ```
    #[must_use]
    pub fn with_chips(mut self, chips: Vec<u32>) -> Self {
        self.chips = chips;
        self
    }

    /// Sets the insurance side-bet stake.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_insurance_bet(50);
    /// assert_eq!(options.insurance_bet, 50);
    /// ```
    #[must_use]
    pub const fn with_insurance_bet(mut self, stake: u32) -> Self {
        self.insurance_bet = stake;
        self
    }
}
