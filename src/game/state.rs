//! Game state types.

/// State of the round state machine.
///
/// Bust and surrender exit the player turn directly to settlement; a
/// natural player blackjack skips the player turn entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Accepting a bet for the next round.
    Betting,
    /// A bet is placed; initial cards have not been dealt yet.
    Dealing,
    /// The dealer shows an ace; awaiting the insurance decision.
    Insurance,
    /// Waiting for player actions.
    PlayerTurn,
    /// The dealer reveals and plays out their hand.
    DealerTurn,
    /// The round is decided and awaits settlement and recording.
    Settlement,
}
