//! Round state machine types.

/// Phase of the current round.
///
/// Phases advance strictly forward: `Betting` → `PlayerTurn` →
/// `DealerTurn` → `RoundOver`, and back to `Betting` through
/// [`crate::Table::clear_round`]. A dealer natural found at the deal jumps
/// straight to `RoundOver`; a deal where every player holds a natural jumps
/// to `DealerTurn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Accepting seat changes and bets for the next round.
    Betting,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and live bets can be settled.
    RoundOver,
}
