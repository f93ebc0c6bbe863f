// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand evaluation.
//!
//! The evaluator checks each hand rank from the strongest to the weakest and
//! returns the first match, each check works on its own scratch buffers built
//! from the cards sorted by value.
use log::trace;

use super::strength::{HandRank, HandStrength};
use kicker_cards::{Card, Hand, Suit};

const HAND_SIZE: usize = HandStrength::HAND_SIZE;

/// Value of the Ace card.
const ACE: u8 = 13;

/// Value of the Ten card, the lowest card of a royal flush.
const TEN: u8 = 9;

/// Evaluates a two cards hand with a board of up to five cards.
///
/// ```
/// # use kicker_eval::{Hand, HandRank, calculate_hand_strength, parse_cards};
/// let hand = Hand::new("TH".parse().unwrap(), "JH".parse().unwrap()).unwrap();
/// let board = parse_cards("QH KH AH").unwrap();
///
/// let strength = calculate_hand_strength(&hand, &board);
/// assert_eq!(strength.rank(), HandRank::RoyalFlush);
/// assert_eq!(strength.cards(), parse_cards("TH JH QH KH AH").unwrap());
/// ```
pub fn calculate_hand_strength(hand: &Hand, board: &[Card]) -> HandStrength {
    let mut pool = Vec::with_capacity(2 + board.len());
    pool.extend_from_slice(hand.cards());
    pool.extend_from_slice(board);
    evaluate(&pool)
}

/// Evaluates the best hand out of a pool of cards.
///
/// The pool is expected to have from 2 to 7 unique cards, smaller pools
/// can only make the ranks that fit in them and larger pools are evaluated on
/// a best effort basis.
pub fn evaluate(cards: &[Card]) -> HandStrength {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|c| (c.value(), c.order()));

    let strength = straight_flush(&sorted)
        .or_else(|| four_of_a_kind(&sorted))
        .or_else(|| full_house(&sorted))
        .or_else(|| flush(&sorted))
        .or_else(|| straight(&sorted))
        .or_else(|| three_of_a_kind(&sorted))
        .or_else(|| pairs(&sorted))
        .unwrap_or_else(|| high_card(&sorted));

    trace!("Evaluated {} cards as {strength}", cards.len());
    strength
}

fn straight_flush(sorted: &[Card]) -> Option<HandStrength> {
    let suited = flush_cards(sorted)?;
    let run = find_straight(&suited)?;
    let rank = if run[0].value() == TEN {
        HandRank::RoyalFlush
    } else {
        HandRank::StraightFlush
    };

    Some(HandStrength::new(rank, run))
}

fn four_of_a_kind(sorted: &[Card]) -> Option<HandStrength> {
    let quads = groups(sorted).into_iter().rev().find(|g| g.len() >= 4)?;
    let mut cards = quads[..4].to_vec();
    cards.extend(kickers(&without(sorted, &cards), 1));
    Some(HandStrength::new(HandRank::FourOfAKind, cards))
}

fn full_house(sorted: &[Card]) -> Option<HandStrength> {
    let groups = groups(sorted);
    let trips = groups
        .iter()
        .rev()
        .copied()
        .filter(|g| g.len() >= 3)
        .collect::<Vec<_>>();

    // Three trips would need nine cards.
    debug_assert!(trips.len() <= 2 || sorted.len() > 7);

    let top = trips.first()?;
    let pair = match trips.get(1) {
        Some(second) => &second[..2],
        None => groups
            .iter()
            .rev()
            .find(|g| g.len() >= 2 && g[0].value() != top[0].value())
            .map(|g| &g[..2])?,
    };

    let mut cards = top[..3].to_vec();
    cards.extend_from_slice(pair);
    Some(HandStrength::new(HandRank::FullHouse, cards))
}

fn flush(sorted: &[Card]) -> Option<HandStrength> {
    let suited = flush_cards(sorted)?;
    Some(HandStrength::new(HandRank::Flush, kickers(&suited, HAND_SIZE)))
}

fn straight(sorted: &[Card]) -> Option<HandStrength> {
    let run = find_straight(sorted)?;
    Some(HandStrength::new(HandRank::Straight, run))
}

fn three_of_a_kind(sorted: &[Card]) -> Option<HandStrength> {
    let trips = groups(sorted).into_iter().rev().find(|g| g.len() >= 3)?;
    let mut cards = trips[..3].to_vec();
    cards.extend(kickers(&without(sorted, &cards), 2));
    Some(HandStrength::new(HandRank::ThreeOfAKind, cards))
}

fn pairs(sorted: &[Card]) -> Option<HandStrength> {
    let pairs = groups(sorted)
        .into_iter()
        .rev()
        .filter(|g| g.len() >= 2)
        .map(|g| [g[0], g[1]])
        .collect::<Vec<_>>();

    let (rank, mut cards, num_kickers) = match pairs.as_slice() {
        [] => return None,
        [pair] => (HandRank::OnePair, pair.to_vec(), 3),
        [high, low, ..] => (HandRank::TwoPair, [*high, *low].concat(), 1),
    };

    cards.extend(kickers(&without(sorted, &cards), num_kickers));
    Some(HandStrength::new(rank, cards))
}

fn high_card(sorted: &[Card]) -> HandStrength {
    HandStrength::new(HandRank::HighCard, kickers(sorted, HAND_SIZE))
}

/// Returns the cards of the suit with at least five cards sorted by value.
fn flush_cards(sorted: &[Card]) -> Option<Vec<Card>> {
    if sorted.len() < HAND_SIZE {
        return None;
    }

    Suit::suits()
        .map(|suit| {
            sorted
                .iter()
                .copied()
                .filter(|c| c.suit() == suit)
                .collect::<Vec<_>>()
        })
        .find(|suited| suited.len() >= HAND_SIZE)
}

/// Finds the highest five cards run in cards sorted by value.
///
/// Cards with the same value are collapsed into one before scanning, the run
/// is returned from the lowest to the highest card with the Ace first for
/// the A-2-3-4-5 straight.
fn find_straight(sorted: &[Card]) -> Option<Vec<Card>> {
    let mut unique = sorted.to_vec();
    unique.dedup_by_key(|c| c.value());

    if unique.len() < HAND_SIZE {
        return None;
    }

    let is_run = |w: &[Card]| w.windows(2).all(|p| p[0].value() + 1 == p[1].value());
    if let Some(run) = unique.windows(HAND_SIZE).rev().find(|w| is_run(*w)) {
        return Some(run.to_vec());
    }

    // The Ace plays low before the 2, 3, 4, 5.
    let ace = unique.last().filter(|c| c.value() == ACE)?;
    let low = &unique[..HAND_SIZE - 1];
    if low[0].value() == 1 && is_run(low) {
        let mut run = vec![*ace];
        run.extend_from_slice(low);
        return Some(run);
    }

    None
}

/// Groups cards sorted by value into runs of cards with the same value.
fn groups(sorted: &[Card]) -> Vec<&[Card]> {
    sorted.chunk_by(|a, b| a.value() == b.value()).collect()
}

/// Returns the `n` highest cards from the highest to the lowest.
fn kickers(cards: &[Card], n: usize) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort_by_key(|c| (c.value(), c.order()));
    cards.into_iter().rev().take(n).collect()
}

/// Returns the cards that are not in `used`.
fn without(cards: &[Card], used: &[Card]) -> Vec<Card> {
    cards
        .iter()
        .copied()
        .filter(|c| !used.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strongest_hands;
    use kicker_cards::{Deck, parse_cards};

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn hand(s: &str) -> Hand {
        let c = cards(s);
        Hand::new(c[0], c[1]).unwrap()
    }

    fn eval(h: &str, board: &str) -> HandStrength {
        calculate_hand_strength(&hand(h), &cards(board))
    }

    fn values(s: &HandStrength) -> Vec<u8> {
        s.cards().iter().map(|c| c.value()).collect()
    }

    #[test]
    fn royal_flush() {
        let s = eval("TH JH", "QH KH AH");
        assert_eq!(s.rank(), HandRank::RoyalFlush);
        assert_eq!(s.strength(), 1);
        assert_eq!(s.cards(), cards("TH JH QH KH AH"));

        let s = eval("TS JS", "QS KS AS 9S 2D");
        assert_eq!(s.rank(), HandRank::RoyalFlush);
    }

    #[test]
    fn straight_flush() {
        let s = eval("5C 6C", "7C 8C 9C");
        assert_eq!(s.rank(), HandRank::StraightFlush);
        assert_eq!(s.cards()[0], "5C".parse::<Card>().unwrap());
        assert_eq!(s.cards()[0].value(), 4);

        // Highest run out of six suited cards in a row.
        let s = eval("5C 6C", "7C 8C 9C TC 2H");
        assert_eq!(s.rank(), HandRank::StraightFlush);
        assert_eq!(s.cards(), cards("6C 7C 8C 9C TC"));

        // A straight and a flush that are not a straight flush.
        let s = eval("5C 6C", "7C 8D 9C KC");
        assert_eq!(s.rank(), HandRank::Flush);
    }

    #[test]
    fn wheel_straight_flush() {
        let s = eval("AH 5H", "2H 3H 4H");
        assert_eq!(s.rank(), HandRank::StraightFlush);
        assert_eq!(s.cards(), cards("AH 2H 3H 4H 5H"));

        // A six high straight flush beats the wheel.
        let s = eval("AH 5H", "2H 3H 4H 6H");
        assert_eq!(s.cards(), cards("2H 3H 4H 5H 6H"));
    }

    #[test]
    fn four_of_a_kind() {
        let s = eval("2H 2C", "2D 2S 9H");
        assert_eq!(s.rank(), HandRank::FourOfAKind);
        assert_eq!(s.cards()[4], "9H".parse::<Card>().unwrap());

        let s = eval("2H 2C", "2D 2S 9H KD 3S");
        assert_eq!(values(&s), vec![1, 1, 1, 1, 12]);

        // Four cards only.
        let s = evaluate(&cards("7H 7C 7D 7S"));
        assert_eq!(s.rank(), HandRank::FourOfAKind);
        assert_eq!(s.cards().len(), 4);
    }

    #[test]
    fn full_house() {
        let s = eval("3H 3C", "3D 9S 9H");
        assert_eq!(s.rank(), HandRank::FullHouse);
        assert_eq!(values(&s), vec![2, 2, 2, 8, 8]);

        // Two trips use the highest for the three cards.
        let s = eval("3H 3C", "3D 9S 9H 9D KS");
        assert_eq!(s.rank(), HandRank::FullHouse);
        assert_eq!(values(&s), vec![8, 8, 8, 2, 2]);

        // Best pair out of two.
        let s = eval("3H 3C", "3D 9S 9H KD KS");
        assert_eq!(values(&s), vec![2, 2, 2, 12, 12]);
    }

    #[test]
    fn flush() {
        let s = eval("2D 9D", "4D JD KD AD 3C");
        assert_eq!(s.rank(), HandRank::Flush);
        assert_eq!(s.cards(), cards("AD KD JD 9D 4D"));
    }

    #[test]
    fn straight() {
        let s = eval("5C 6D", "7H 8S 9C");
        assert_eq!(s.rank(), HandRank::Straight);
        assert_eq!(s.cards(), cards("5C 6D 7H 8S 9C"));

        // Pairs do not break a run.
        let s = eval("5C 6D", "6H 7H 8S 8C 9C");
        assert_eq!(s.rank(), HandRank::Straight);
        assert_eq!(values(&s), vec![4, 5, 6, 7, 8]);

        // Highest run out of seven cards.
        let s = eval("5C 6D", "7H 8S 9C TD JD");
        assert_eq!(values(&s), vec![6, 7, 8, 9, 10]);

        let s = eval("AC 2D", "3H 4S 5C KD KS");
        assert_eq!(s.rank(), HandRank::Straight);
        assert_eq!(s.cards(), cards("AC 2D 3H 4S 5C"));

        // No wrap around.
        let s = eval("QC KD", "AH 2S 3C");
        assert_eq!(s.rank(), HandRank::HighCard);
    }

    #[test]
    fn three_of_a_kind() {
        let s = eval("8H 8C", "8D 2S 5H JD KC");
        assert_eq!(s.rank(), HandRank::ThreeOfAKind);
        assert_eq!(values(&s), vec![7, 7, 7, 12, 10]);

        let s = evaluate(&cards("8H 8C 8D"));
        assert_eq!(s.rank(), HandRank::ThreeOfAKind);
        assert_eq!(s.cards().len(), 3);
    }

    #[test]
    fn two_pair() {
        let s = eval("8H 8C", "2D 2S 5H JD KC");
        assert_eq!(s.rank(), HandRank::TwoPair);
        assert_eq!(values(&s), vec![7, 7, 1, 1, 12]);

        // Three pairs, the kicker may come from the lowest pair.
        let s = eval("8H 8C", "2D 2S 5H 5D 3C");
        assert_eq!(s.rank(), HandRank::TwoPair);
        assert_eq!(values(&s), vec![7, 7, 4, 4, 2]);
    }

    #[test]
    fn one_pair() {
        let s = eval("AH AC", "2D 7S 5H JD KC");
        assert_eq!(s.rank(), HandRank::OnePair);
        assert_eq!(values(&s), vec![13, 13, 12, 10, 6]);

        // Pre-flop pocket pair.
        let s = eval("AH AC", "");
        assert_eq!(s.rank(), HandRank::OnePair);
        assert_eq!(s.cards().len(), 2);
    }

    #[test]
    fn high_card() {
        let s = eval("AH 3C", "2D 7S 9H JD KC");
        assert_eq!(s.rank(), HandRank::HighCard);
        assert_eq!(s.strength(), 10);
        assert_eq!(s.cards(), cards("AH KC JD 9H 7S"));

        // Small pools degrade to fewer cards.
        let s = eval("AH 3C", "");
        assert_eq!(s.cards(), cards("AH 3C"));

        let s = eval("AH 3C", "9D");
        assert_eq!(s.cards(), cards("AH 9D 3C"));
    }

    #[test]
    fn kicker_breaks_tie() {
        let board = "KH KD 9S 9C 2H";
        let s1 = eval("7S 3D", board);
        let s2 = eval("6S 3C", board);
        let s3 = eval("7C 4D", board);
        assert_eq!(s1.rank(), HandRank::TwoPair);
        assert_eq!(s2.rank(), HandRank::TwoPair);
        assert!(s1 > s2);
        assert_eq!(s1, s3);

        let strengths = [s1, s2, s3];
        assert_eq!(strongest_hands(&strengths), vec![0, 2]);
    }

    #[test]
    fn board_plays() {
        // Both hands play the board straight.
        let board = "5C 6D 7H 8S 9C";
        let s1 = eval("2S 3S", board);
        let s2 = eval("2H 3H", board);
        assert_eq!(s1, s2);

        // Higher straight wins.
        let s3 = eval("TH 2D", board);
        assert!(s3 > s1);
        assert_eq!(strongest_hands(&[s1, s2, s3]), vec![2]);
    }

    #[test]
    fn all_boards_sizes() {
        let mut rng = rand::rng();
        for board_len in [0, 1, 2, 3, 4, 5] {
            for _ in 0..200 {
                let mut deck = Deck::new_and_shuffled(&mut rng);
                let hand = deck.create_hand(&mut rng).unwrap();
                let board = (0..board_len)
                    .map(|_| deck.pick_card(&mut rng).unwrap())
                    .collect::<Vec<_>>();

                let s = calculate_hand_strength(&hand, &board);
                let pool_len = 2 + board_len;
                assert_eq!(s.cards().len(), pool_len.min(HAND_SIZE));

                // All cards come from the pool with no repeats.
                for (idx, c) in s.cards().iter().enumerate() {
                    assert!(hand.contains(*c) || board.contains(c));
                    assert!(!s.cards()[idx + 1..].contains(c));
                }
            }
        }
    }

    #[test]
    fn best_of_all_subsets() {
        // The best hand out of 7 cards must match the best 5 cards subset.
        let mut rng = rand::rng();
        for _ in 0..500 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let pool = (0..7)
                .map(|_| deck.pick_card(&mut rng).unwrap())
                .collect::<Vec<_>>();

            let best = evaluate(&pool);
            let mut best_subset = None;
            for skip1 in 0..7 {
                for skip2 in (skip1 + 1)..7 {
                    let subset = pool
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| *i != skip1 && *i != skip2)
                        .map(|(_, c)| *c)
                        .collect::<Vec<_>>();
                    let s = evaluate(&subset);
                    best_subset = Some(match best_subset {
                        Some(b) if b >= s => b,
                        _ => s,
                    });
                }
            }

            assert_eq!(Some(best), best_subset, "pool {pool:?}");
        }
    }
}
