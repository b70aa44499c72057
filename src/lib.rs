//! A terminal blackjack round engine.
//!
//! The crate models one round of blackjack against a dealer: a fresh 52-card
//! [`Deck`] dealt without replacement, ace-aware hand scoring, hand splitting,
//! and the win/lose/push decision loop, driven tick by tick through
//! [`Round::evaluate`] and [`Round::apply`].
//!
//! Terminal concerns (card rendering, input prompts, the replay loop) live in
//! the `cli_blackjack` example, not in the library.
//!
//! # Example
//!
//! ```no_run
//! use ascii_blackjack::Round;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let round = Round::new(&mut rng);
//! let _ = round;
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod player;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{PlayerError, RoundError};
pub use hand::Hand;
pub use player::Player;
pub use round::{Move, Outcome, Round, RoundState};
