//! Round engine integration tests.

use std::collections::HashSet;

use ascii_blackjack::{
    Card, DECK_SIZE, Deck, Hand, Move, Outcome, Player, PlayerError, Round, RoundError,
    RoundState, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &card in cards {
        hand.add_card(card);
    }
    hand
}

fn player_with(cards: &[Card]) -> Player {
    let mut player = Player::new();
    for &card in cards {
        player.add_card(card);
    }
    player
}

fn rigged_round(deck: Vec<Card>, player: &[Card], dealer: &[Card]) -> Round {
    Round::from_parts(Deck::from(deck), player_with(player), player_with(dealer))
}

#[test]
fn standard_deck_has_52_unique_cards() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn dealing_until_empty_yields_every_card_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck = Deck::standard();
    let mut seen = HashSet::new();

    while let Some(card) = deck.deal(&mut rng) {
        assert!(seen.insert(card), "card {card:?} dealt twice");
    }

    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.is_empty());
    assert_eq!(deck.deal(&mut rng), None);
}

#[test]
fn sum_converts_aces_one_at_a_time() {
    let blackjack = hand_of(&[card(Suit::Spades, 1), card(Suit::Hearts, 13)]);
    assert_eq!(blackjack.sum(), 21);

    let two_aces = hand_of(&[card(Suit::Spades, 1), card(Suit::Hearts, 1)]);
    assert_eq!(two_aces.sum(), 12);

    // 11 * 4 + 10 = 54; four conversions bring it down to 14.
    let four_aces = hand_of(&[
        card(Suit::Spades, 1),
        card(Suit::Hearts, 1),
        card(Suit::Diamonds, 1),
        card(Suit::Clubs, 1),
        card(Suit::Spades, 13),
    ]);
    assert_eq!(four_aces.sum(), 14);
}

#[test]
fn splittable_requires_exactly_two_matching_ranks() {
    let pair = hand_of(&[card(Suit::Spades, 7), card(Suit::Hearts, 7)]);
    assert!(pair.is_splittable());

    let triple = hand_of(&[
        card(Suit::Spades, 7),
        card(Suit::Hearts, 7),
        card(Suit::Diamonds, 7),
    ]);
    assert!(!triple.is_splittable());

    let mismatch = hand_of(&[card(Suit::Spades, 7), card(Suit::Hearts, 8)]);
    assert!(!mismatch.is_splittable());
}

#[test]
fn split_leaves_one_card_in_each_hand() {
    let mut player = player_with(&[card(Suit::Spades, 7), card(Suit::Hearts, 7)]);
    player.split().unwrap();

    assert_eq!(player.hand_count(), 2);
    assert_eq!(player.hands()[0].cards(), &[card(Suit::Spades, 7)]);
    assert_eq!(player.active_hand().cards(), &[card(Suit::Hearts, 7)]);

    // The new active hand takes hits...
    player.add_card(card(Suit::Clubs, 5));
    assert_eq!(player.active_hand().len(), 2);

    // ...and once it is gone, the original hand takes hits of its own.
    player.remove_active_hand().unwrap();
    player.add_card(card(Suit::Diamonds, 9));
    assert_eq!(player.active_hand().sum(), 16);
}

#[test]
fn split_rejected_unless_two_matching_cards() {
    let mut player = player_with(&[card(Suit::Spades, 7), card(Suit::Hearts, 8)]);
    assert_eq!(player.split().unwrap_err(), PlayerError::CannotSplit);
    assert_eq!(player.hand_count(), 1);
    assert_eq!(player.active_hand().len(), 2);
}

#[test]
fn root_hand_cannot_be_removed() {
    let mut player = player_with(&[card(Suit::Spades, 7), card(Suit::Hearts, 8)]);
    assert_eq!(player.remove_active_hand().unwrap_err(), PlayerError::SoleHand);
}

#[test]
fn new_round_deals_two_cards_each() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let round = Round::new(&mut rng).unwrap();

    assert_eq!(round.player.active_hand().len(), 2);
    assert_eq!(round.dealer.active_hand().len(), 2);
    assert_eq!(round.deck.len(), DECK_SIZE - 4);
    assert_eq!(round.state(), RoundState::AwaitingMove);
}

#[test]
fn busting_the_sole_hand_loses() {
    let mut round = rigged_round(
        vec![],
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 5),
        ],
        &[card(Suit::Clubs, 10), card(Suit::Spades, 8)],
    );

    assert_eq!(round.evaluate(), RoundState::Over(Outcome::Lose));
    assert_eq!(round.state().outcome(), Some(Outcome::Lose));
}

#[test]
fn busting_a_split_hand_only_removes_that_hand() {
    let mut player = player_with(&[card(Suit::Spades, 8), card(Suit::Hearts, 8)]);
    player.split().unwrap();
    player.add_card(card(Suit::Clubs, 10));
    player.add_card(card(Suit::Diamonds, 10));
    assert!(player.active_hand().is_bust());

    let mut round = Round::from_parts(
        Deck::from(vec![]),
        player,
        player_with(&[card(Suit::Clubs, 9), card(Suit::Spades, 9)]),
    );

    // The busted hand goes away and play continues on the first split hand.
    assert_eq!(round.evaluate(), RoundState::AwaitingMove);
    assert_eq!(round.player.hand_count(), 1);
    assert_eq!(round.player.active_hand().cards(), &[card(Suit::Spades, 8)]);
}

#[test]
fn dealer_21_beats_everything() {
    let mut round = rigged_round(
        vec![],
        &[card(Suit::Spades, 10), card(Suit::Hearts, 9)],
        &[card(Suit::Clubs, 1), card(Suit::Spades, 13)],
    );
    assert_eq!(round.evaluate(), RoundState::Over(Outcome::Lose));

    // Even a simultaneous player 21 loses; the dealer rule fires first.
    let mut both_21 = rigged_round(
        vec![],
        &[card(Suit::Spades, 1), card(Suit::Hearts, 13)],
        &[card(Suit::Clubs, 1), card(Suit::Diamonds, 13)],
    );
    assert_eq!(both_21.evaluate(), RoundState::Over(Outcome::Lose));
}

#[test]
fn dealer_bust_or_player_21_wins() {
    let mut dealer_bust = rigged_round(
        vec![],
        &[card(Suit::Spades, 10), card(Suit::Hearts, 9)],
        &[
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 10),
            card(Suit::Spades, 2),
        ],
    );
    assert_eq!(dealer_bust.evaluate(), RoundState::Over(Outcome::Win));

    let mut player_21 = rigged_round(
        vec![],
        &[card(Suit::Spades, 1), card(Suit::Hearts, 13)],
        &[card(Suit::Clubs, 10), card(Suit::Diamonds, 9)],
    );
    assert_eq!(player_21.evaluate(), RoundState::Over(Outcome::Win));
}

#[test]
fn holding_a_17_plus_tie_pushes() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut round = rigged_round(
        vec![],
        &[card(Suit::Spades, 10), card(Suit::Hearts, 8)],
        &[card(Suit::Clubs, 10), card(Suit::Diamonds, 8)],
    );

    assert_eq!(round.evaluate(), RoundState::AwaitingMove);
    assert_eq!(
        round.apply(Move::Hold, &mut rng).unwrap(),
        RoundState::Over(Outcome::Push)
    );
}

#[test]
fn hitting_into_a_bust_ends_the_round() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut round = rigged_round(
        vec![card(Suit::Clubs, 10)],
        &[card(Suit::Spades, 10), card(Suit::Hearts, 10)],
        &[card(Suit::Diamonds, 10), card(Suit::Spades, 8)],
    );

    // The hit busts the hand; the dealer at 18 draws nothing.
    assert_eq!(round.apply(Move::Hit, &mut rng).unwrap(), RoundState::AwaitingMove);
    assert_eq!(round.dealer.active_hand().len(), 2);
    assert!(round.player.active_hand().is_bust());

    assert_eq!(round.evaluate(), RoundState::Over(Outcome::Lose));
    assert_eq!(
        round.apply(Move::Hold, &mut rng).unwrap_err(),
        RoundError::RoundOver
    );
}

#[test]
fn dealer_draws_below_17() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut round = rigged_round(
        vec![card(Suit::Clubs, 2)],
        &[card(Suit::Spades, 5), card(Suit::Hearts, 7)],
        &[card(Suit::Diamonds, 6), card(Suit::Spades, 4)],
    );

    round.apply(Move::Hold, &mut rng).unwrap();
    assert_eq!(round.dealer.active_hand().len(), 3);
    assert_eq!(round.dealer.active_hand().sum(), 12);
}

#[test]
fn dealer_draws_when_trailing_the_player() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut round = rigged_round(
        vec![card(Suit::Clubs, 2)],
        &[card(Suit::Spades, 10), card(Suit::Hearts, 10)],
        &[card(Suit::Diamonds, 10), card(Suit::Spades, 8)],
    );

    // Player 20 leads dealer 18 below 21, so the dealer takes a card.
    round.apply(Move::Hold, &mut rng).unwrap();
    assert_eq!(round.dealer.active_hand().sum(), 20);
}

#[test]
fn fold_loses_immediately() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut round = rigged_round(
        vec![card(Suit::Clubs, 2)],
        &[card(Suit::Spades, 5), card(Suit::Hearts, 7)],
        &[card(Suit::Diamonds, 6), card(Suit::Spades, 4)],
    );

    assert_eq!(
        round.apply(Move::Fold, &mut rng).unwrap(),
        RoundState::Over(Outcome::Lose)
    );
    // Folding skips the dealer's response entirely.
    assert_eq!(round.dealer.active_hand().len(), 2);
    assert_eq!(round.deck.len(), 1);
}

#[test]
fn split_move_builds_a_second_hand() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut round = rigged_round(
        vec![card(Suit::Clubs, 2)],
        &[card(Suit::Spades, 9), card(Suit::Hearts, 9)],
        &[card(Suit::Diamonds, 10), card(Suit::Spades, 8)],
    );

    round.apply(Move::Split, &mut rng).unwrap();
    assert_eq!(round.player.hand_count(), 2);
    assert_eq!(round.player.active_hand().cards(), &[card(Suit::Hearts, 9)]);
}

#[test]
fn illegal_split_move_is_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut round = rigged_round(
        vec![card(Suit::Clubs, 2)],
        &[card(Suit::Spades, 9), card(Suit::Hearts, 8)],
        &[card(Suit::Diamonds, 10), card(Suit::Spades, 8)],
    );

    assert_eq!(
        round.apply(Move::Split, &mut rng).unwrap_err(),
        RoundError::CannotSplit
    );
    assert_eq!(round.player.hand_count(), 1);
    assert_eq!(round.state(), RoundState::AwaitingMove);
}

#[test]
fn hitting_an_empty_deck_is_fatal() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut round = rigged_round(
        vec![],
        &[card(Suit::Spades, 5), card(Suit::Hearts, 7)],
        &[card(Suit::Diamonds, 10), card(Suit::Spades, 8)],
    );

    assert_eq!(
        round.apply(Move::Hit, &mut rng).unwrap_err(),
        RoundError::EmptyDeck
    );
}
