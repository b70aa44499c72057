//! Round state types.

/// A move chosen by the player.
///
/// The input boundary validates tokens and rejects `Split` against a
/// non-splittable hand before the engine sees the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Draw one card to the active hand.
    Hit,
    /// Split the active hand into two.
    Split,
    /// Keep the active hand as it is.
    Hold,
    /// Give up the round immediately.
    Fold,
}

/// How a finished round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player won (dealer busted or the player reached 21).
    Win,
    /// The player lost (bust, fold, or dealer 21).
    Lose,
    /// Neither side won.
    Push,
}

/// Where the round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// The round continues; the player must choose a move.
    AwaitingMove,
    /// The round is over.
    Over(Outcome),
}

impl RoundState {
    /// Returns the outcome if the round is over.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::AwaitingMove => None,
            Self::Over(outcome) => Some(outcome),
        }
    }
}
