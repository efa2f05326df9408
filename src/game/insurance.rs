use crate::error::InsuranceError;

use super::{Game, GameState};

impl Game {
    /// Returns whether the insurance decision is currently being offered.
    #[must_use]
    pub fn is_insurance_offered(&self) -> bool {
        self.state == GameState::Insurance
    }

    /// Opts into the insurance side bet.
    ///
    /// The fixed stake is resolved against the dealer's hand when the hole
    /// card is revealed. Play then continues as if the deal had finished
    /// without an ace showing.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not currently offered.
    pub fn take_insurance(&mut self) -> Result<(), InsuranceError> {
        self.decide_insurance(true)
    }

    /// Declines the insurance side bet.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not currently offered.
    pub fn decline_insurance(&mut self) -> Result<(), InsuranceError> {
        self.decide_insurance(false)
    }

    fn decide_insurance(&mut self, taken: bool) -> Result<(), InsuranceError> {
        if self.state != GameState::Insurance {
            return Err(InsuranceError::InvalidState);
        }

        self.wallet.take_insurance(taken);
        self.state = self.post_deal_state();

        Ok(())
    }
}
