//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when mutating a player's hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The active hand is not two cards of the same rank.
    #[error("cannot split this hand")]
    CannotSplit,
    /// The player's only hand cannot be removed.
    #[error("cannot remove the sole hand")]
    SoleHand,
}

/// Errors that can occur while a round is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A card was needed but the deck is empty.
    ///
    /// With a fresh 52-card deck per round this indicates a logic defect;
    /// the round must be abandoned rather than played on.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// A split move reached the engine for a non-splittable hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// A move was applied after the round reached an outcome.
    #[error("the round is already over")]
    RoundOver,
}
