//! Card types.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits, in a fixed order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];
}

/// A playing card.
///
/// Cards are plain values; once dealt they never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but score zero when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// The score value of the card: 11 for an ace, 10 for face cards,
    /// otherwise the numeric face value.
    ///
    /// Aces always score 11 here; [`Hand::sum`](crate::Hand::sum) converts
    /// them to 1 as needed.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self.rank {
            1 => 11,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
