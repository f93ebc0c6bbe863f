// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand strength and ordering.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use kicker_cards::Card;

/// The hand rank category, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal flush.
    RoyalFlush,
}

impl HandRank {
    /// The number of hand ranks.
    pub const COUNT: usize = 10;

    /// The rank tier, 1 for a royal flush down to 10 for a high card.
    pub fn tier(&self) -> u8 {
        Self::COUNT as u8 - *self as u8
    }

    /// Returns all ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    fn is_straight(&self) -> bool {
        matches!(
            self,
            HandRank::Straight | HandRank::StraightFlush | HandRank::RoyalFlush
        )
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{s}")
    }
}

/// The evaluation of a hand, its rank and the best five cards.
///
/// The cards are ordered with the cards that define the rank first followed
/// by the kickers from the highest to the lowest, straights are ordered from
/// the lowest card (the Ace for an A-2-3-4-5 straight) to the highest.
///
/// Two strengths compare by rank first and then by card values, so that two
/// strengths are equal when the hands tie even if the cards suits differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandStrength {
    strength: u8,
    rank: HandRank,
    cards: Vec<Card>,
}

impl HandStrength {
    /// The maximum number of cards in a hand.
    pub const HAND_SIZE: usize = 5;

    pub(crate) fn new(rank: HandRank, cards: Vec<Card>) -> Self {
        debug_assert!(cards.len() <= Self::HAND_SIZE);
        Self {
            strength: rank.tier(),
            rank,
            cards,
        }
    }

    /// The rank tier, lower is stronger (see [HandRank::tier]).
    pub fn strength(&self) -> u8 {
        self.strength
    }

    /// The hand rank.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The best cards for this hand.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Values used to break ties between two hands with the same rank.
    pub fn tie_breaker(&self) -> [u8; Self::HAND_SIZE] {
        let mut values = [0u8; Self::HAND_SIZE];

        if self.rank.is_straight() {
            values[0] = straight_high_value(&self.cards);
        } else {
            for (v, c) in values.iter_mut().zip(&self.cards) {
                *v = c.value();
            }
        }

        values
    }
}

/// The value of the highest card in a straight, the Five for a wheel.
fn straight_high_value(cards: &[Card]) -> u8 {
    const ACE: u8 = 13;
    const FIVE: u8 = 4;

    match cards {
        [first, second, ..] if first.value() == ACE && second.value() != ACE => FIVE,
        _ => cards.last().map(Card::value).unwrap_or_default(),
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.tie_breaker().cmp(&other.tie_breaker()))
    }
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandStrength {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandStrength {}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)?;
        for c in &self.cards {
            write!(f, " {c}")?;
        }

        Ok(())
    }
}

/// Returns the indices of the strongest hands, more than one index if the
/// strongest hands tie.
pub fn strongest_hands(strengths: &[HandStrength]) -> Vec<usize> {
    let Some(best) = strengths.iter().max() else {
        return Vec::new();
    };

    strengths
        .iter()
        .enumerate()
        .filter(|(_, s)| *s == best)
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kicker_cards::parse_cards;

    fn strength(rank: HandRank, cards: &str) -> HandStrength {
        HandStrength::new(rank, parse_cards(cards).unwrap())
    }

    #[test]
    fn rank_tiers() {
        assert_eq!(HandRank::RoyalFlush.tier(), 1);
        assert_eq!(HandRank::StraightFlush.tier(), 2);
        assert_eq!(HandRank::HighCard.tier(), 10);
        assert_eq!(HandRank::ranks().count(), HandRank::COUNT);
        assert!(HandRank::ranks().collect::<Vec<_>>().is_sorted());
        assert_eq!(HandRank::ThreeOfAKind.to_string(), "Three of a Kind");
    }

    #[test]
    fn compare_ranks_first() {
        let pair = strength(HandRank::OnePair, "AH AD KS QS JS");
        let two_pair = strength(HandRank::TwoPair, "3H 3D 2S 2C 4S");
        assert!(two_pair > pair);
        assert!(pair.strength() > two_pair.strength());
    }

    #[test]
    fn compare_kickers() {
        let h1 = strength(HandRank::TwoPair, "KH KD 9S 9C 7S");
        let h2 = strength(HandRank::TwoPair, "KS KC 9H 9D 6S");
        let h3 = strength(HandRank::TwoPair, "KS KC 9H 9D 7C");
        assert!(h1 > h2);
        assert_eq!(h1, h3);
        assert_eq!(h1.cmp(&h3), Ordering::Equal);
    }

    #[test]
    fn compare_straights() {
        let wheel = strength(HandRank::Straight, "AH 2D 3S 4C 5S");
        let six_high = strength(HandRank::Straight, "2H 3D 4S 5C 6S");
        let broadway = strength(HandRank::Straight, "TH JD QS KC AS");
        assert!(six_high > wheel);
        assert!(broadway > six_high);
        assert_eq!(wheel.tie_breaker(), [4, 0, 0, 0, 0]);
        assert_eq!(broadway.tie_breaker(), [13, 0, 0, 0, 0]);
    }

    #[test]
    fn strongest_hands_ties() {
        assert!(strongest_hands(&[]).is_empty());

        let hands = [
            strength(HandRank::TwoPair, "KH KD 9S 9C 7S"),
            strength(HandRank::TwoPair, "KS KC 9H 9D 6S"),
            strength(HandRank::OnePair, "AS AC KH QD JD"),
        ];
        assert_eq!(strongest_hands(&hands), vec![0]);

        let hands = [
            strength(HandRank::TwoPair, "KH KD 9S 9C 7S"),
            strength(HandRank::OnePair, "AS AC KH QD JD"),
            strength(HandRank::TwoPair, "KS KC 9H 9D 7C"),
        ];
        assert_eq!(strongest_hands(&hands), vec![0, 2]);
    }

    #[test]
    fn display_strength() {
        let s = strength(HandRank::FullHouse, "3H 3C 3D 9S 9H");
        assert_eq!(s.to_string(), "Full House 3H 3C 3D 9S 9H");
    }
}
