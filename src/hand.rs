//! Hand representation and scoring.

use crate::card::Card;

/// One hand of cards, in deal order.
///
/// A hand is only empty transiently, between creation and the first deal.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a new hand holding the single card taken from a split.
    #[must_use]
    pub fn from_split(card: Card) -> Self {
        Self { cards: vec![card] }
    }

    /// Appends a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces start at 11; while the total exceeds 21, aces are converted to 1
    /// one at a time until the total fits or no soft aces remain.
    ///
    /// # Example
    ///
    /// ```
    /// use ascii_blackjack::{Card, Hand, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Spades, 1));
    /// hand.add_card(Card::new(Suit::Hearts, 13));
    /// assert_eq!(hand.sum(), 21);
    /// ```
    #[must_use]
    pub fn sum(&self) -> u8 {
        let mut value: u8 = 0;
        let mut aces: u8 = 0;

        for card in &self.cards {
            if card.is_ace() {
                aces += 1;
            }
            value = value.saturating_add(card.value());
        }

        while value > 21 && aces > 0 {
            value -= 10;
            aces -= 1;
        }

        value
    }

    /// Returns whether the hand is bust (sum over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.sum() > 21
    }

    /// Returns whether the hand can be split: exactly two cards of the same
    /// rank.
    #[must_use]
    pub fn is_splittable(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Removes and returns the second card of a splittable hand.
    ///
    /// Returns `None` unless the hand holds exactly two cards.
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
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
}
