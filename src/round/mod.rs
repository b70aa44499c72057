//! One round of blackjack against the dealer.

use rand::Rng;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::player::Player;

mod rules;
pub mod state;

pub use state::{Move, Outcome, RoundState};

/// A single round: one deck, the player, and the dealer.
///
/// The round is a small state machine. [`evaluate`](Self::evaluate) applies
/// the bust/21 rules and reports whether the round is over or a move is
/// needed; [`apply`](Self::apply) plays a move and the dealer's response.
/// Callers alternate the two until the round is over:
///
/// ```
/// use ascii_blackjack::{Move, Round, RoundState};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let mut round = Round::new(&mut rng)?;
///
/// let outcome = loop {
///     match round.evaluate() {
///         RoundState::Over(outcome) => break outcome,
///         RoundState::AwaitingMove => {
///             round.apply(Move::Hit, &mut rng)?;
///         }
///     }
/// };
/// # let _ = outcome;
/// # Ok::<(), ascii_blackjack::RoundError>(())
/// ```
///
/// Deck and participants are fresh per round and dropped with it; nothing
/// carries over to the next round except the caller's rng.
#[derive(Debug, Clone)]
pub struct Round {
    /// The cards not yet dealt.
    pub deck: Deck,
    /// The human player.
    pub player: Player,
    /// The dealer. Never splits and never folds; it only receives cards
    /// under the draw rule in [`apply`](Self::apply).
    pub dealer: Player,
    state: RoundState,
}

impl Round {
    /// Starts a round: builds a full deck and deals two cards each to the
    /// player and the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyDeck`] if the deck runs out during the
    /// initial deal, which cannot happen with a standard deck.
    pub fn new<R: Rng>(rng: &mut R) -> Result<Self, RoundError> {
        let mut deck = Deck::standard();
        let mut player = Player::new();
        let mut dealer = Player::new();

        for _ in 0..2 {
            player.add_card(deck.deal(rng).ok_or(RoundError::EmptyDeck)?);
            dealer.add_card(deck.deal(rng).ok_or(RoundError::EmptyDeck)?);
        }

        Ok(Self {
            deck,
            player,
            dealer,
            state: RoundState::AwaitingMove,
        })
    }

    /// Assembles a round from explicit parts, without dealing.
    ///
    /// This is the seam for scripted setups: tests and tools can hand in
    /// pre-built hands and a rigged deck.
    #[must_use]
    pub const fn from_parts(deck: Deck, player: Player, dealer: Player) -> Self {
        Self {
            deck,
            player,
            dealer,
            state: RoundState::AwaitingMove,
        }
    }

    /// Returns where the round currently stands.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    pub(crate) const fn set_state(&mut self, state: RoundState) {
        self.state = state;
    }
}
