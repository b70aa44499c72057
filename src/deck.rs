//! The deck of undealt cards.

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// The cards not yet dealt this round.
///
/// A deck starts with all 52 unique (suit, rank) combinations and only ever
/// shrinks; dealt cards never return. Dealing picks uniformly among whatever
/// cards remain, so no shuffle step is needed.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck, one card per (suit, rank) combination.
    ///
    /// # Example
    ///
    /// ```
    /// use ascii_blackjack::{Deck, DECK_SIZE};
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Removes and returns a uniformly random card from the remaining cards.
    ///
    /// Returns `None` if the deck is empty. Selection is unbiased over the
    /// current remaining count, not the original 52.
    pub fn deal<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }

        let index = rng.random_range(0..self.cards.len());
        Some(self.cards.swap_remove(index))
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, in no meaningful order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for Deck {
    /// Builds a deck from an explicit card list. Useful for rigging draws in
    /// tests; `standard` is the normal entry point.
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
