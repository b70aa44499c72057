use rand::Rng;

use crate::error::{PlayerError, RoundError};
use crate::round::{Move, Outcome, Round, RoundState};

impl Round {
    /// Applies the start-of-tick rules and reports where the round stands.
    ///
    /// Exactly one rule fires per call, in this precedence order:
    ///
    /// 1. The active hand is bust: the sole hand ends the round in
    ///    [`Outcome::Lose`]; a split hand is removed and play falls through
    ///    to the move prompt on the previous hand, with no further checks
    ///    this tick.
    /// 2. The dealer holds 21: [`Outcome::Lose`]. This fires even when the
    ///    player also holds 21; the dealer's 21 beats everything.
    /// 3. The dealer is bust, or the active hand holds 21:
    ///    [`Outcome::Win`].
    /// 4. Otherwise the round continues with [`RoundState::AwaitingMove`].
    ///
    /// Calling this on a finished round is harmless and returns the same
    /// outcome again.
    pub fn evaluate(&mut self) -> RoundState {
        if let RoundState::Over(_) = self.state {
            return self.state;
        }

        let player_sum = self.player.active_hand().sum();
        let dealer_sum = self.dealer.active_hand().sum();

        if player_sum > 21 {
            if self.player.remove_active_hand() == Err(PlayerError::SoleHand) {
                self.set_state(RoundState::Over(Outcome::Lose));
            }
            // A removed split hand keeps the round going on the previous
            // hand; the dealer rules wait until the next tick.
        } else if dealer_sum == 21 {
            self.set_state(RoundState::Over(Outcome::Lose));
        } else if dealer_sum > 21 || player_sum == 21 {
            self.set_state(RoundState::Over(Outcome::Win));
        }

        self.state
    }

    /// Plays one move for the player, then the dealer's response.
    ///
    /// [`Move::Fold`] ends the round in [`Outcome::Lose`] at once. For the
    /// other moves, the active hand is updated and then the dealer acts on
    /// the fresh sums:
    ///
    /// - the dealer draws one card when the player leads without holding 21,
    ///   or whenever the dealer is below 17;
    /// - otherwise, holding on a tie at 17 or more ends the round in
    ///   [`Outcome::Push`];
    /// - otherwise nothing happens and the next [`evaluate`](Self::evaluate)
    ///   picks the round back up.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::RoundOver`] if the round already has an
    /// outcome, [`RoundError::CannotSplit`] for a split of a non-splittable
    /// hand, and [`RoundError::EmptyDeck`] if a required card cannot be
    /// dealt; the latter means the round must be abandoned.
    pub fn apply<R: Rng>(&mut self, mv: Move, rng: &mut R) -> Result<RoundState, RoundError> {
        if let RoundState::Over(_) = self.state {
            return Err(RoundError::RoundOver);
        }

        match mv {
            Move::Hit => {
                let card = self.deck.deal(rng).ok_or(RoundError::EmptyDeck)?;
                self.player.add_card(card);
            }
            Move::Split => {
                self.player.split().map_err(|_| RoundError::CannotSplit)?;
            }
            Move::Fold => {
                self.set_state(RoundState::Over(Outcome::Lose));
                return Ok(self.state);
            }
            Move::Hold => {}
        }

        let player_sum = self.player.active_hand().sum();
        let dealer_sum = self.dealer.active_hand().sum();

        if (player_sum > dealer_sum && player_sum < 21) || dealer_sum < 17 {
            let card = self.deck.deal(rng).ok_or(RoundError::EmptyDeck)?;
            self.dealer.add_card(card);
        } else if player_sum >= 17 && player_sum == dealer_sum && mv == Move::Hold {
            self.set_state(RoundState::Over(Outcome::Push));
        }

        Ok(self.state)
    }
}
