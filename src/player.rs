//! Player state: an ordered sequence of hands.

use crate::card::Card;
use crate::error::PlayerError;
use crate::hand::Hand;

/// A participant in the round, owning one or more hands.
///
/// The root hand always exists; extra hands appear only through splits.
/// The *active* hand, the one currently being played, is always the last
/// hand in the sequence.
#[derive(Debug, Clone)]
pub struct Player {
    hands: Vec<Hand>,
}

impl Player {
    /// Creates a player with a single empty root hand.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hands: vec![Hand::new()],
        }
    }

    /// Returns the active hand (the last in the sequence).
    #[expect(
        clippy::missing_panics_doc,
        reason = "the root hand always exists and is never removed"
    )]
    #[must_use]
    pub fn active_hand(&self) -> &Hand {
        self.hands.last().expect("a player always has a root hand")
    }

    /// Returns the active hand mutably.
    #[expect(
        clippy::missing_panics_doc,
        reason = "the root hand always exists and is never removed"
    )]
    pub fn active_hand_mut(&mut self) -> &mut Hand {
        self.hands
            .last_mut()
            .expect("a player always has a root hand")
    }

    /// Returns all hands, oldest first.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the number of hands.
    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    /// Appends a card to the active hand.
    pub fn add_card(&mut self, card: Card) {
        self.active_hand_mut().add_card(card);
    }

    /// Splits the active hand.
    ///
    /// The second of its two matching cards moves into a fresh hand appended
    /// to the sequence, which becomes the new active hand; the original hand
    /// keeps one card.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::CannotSplit`] if the active hand does not hold
    /// exactly two cards of the same rank. The hand is left untouched.
    pub fn split(&mut self) -> Result<(), PlayerError> {
        if !self.active_hand().is_splittable() {
            return Err(PlayerError::CannotSplit);
        }

        let card = self
            .active_hand_mut()
            .take_split_card()
            .ok_or(PlayerError::CannotSplit)?;
        self.hands.push(Hand::from_split(card));

        Ok(())
    }

    /// Removes the active hand, making the previous hand active.
    ///
    /// Used when a split hand busts; its cards are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::SoleHand`] if only the root hand remains. The
    /// root hand is never removed.
    pub fn remove_active_hand(&mut self) -> Result<(), PlayerError> {
        if self.hands.len() < 2 {
            return Err(PlayerError::SoleHand);
        }

        self.hands.pop();
        Ok(())
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
