// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A card identity, the card position in the canonical 52 cards order.
///
/// The canonical order goes through the suits Hearts, Clubs, Diamonds, Spades
/// and for each suit through the ranks A, 2, 3, ..., K, so that the Ace of
/// hearts has id 1 and the King of spades has id 52. Two cards are the same
/// card if and only if they have the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CardId(u8);

impl CardId {
    /// The smallest id.
    pub const MIN: u8 = 1;

    /// The largest id.
    pub const MAX: u8 = 52;

    /// Creates an id, returns `None` if `order` is not in 1..=52.
    pub fn new(order: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&order).then_some(Self(order))
    }

    /// The id numeric value.
    pub fn get(&self) -> u8 {
        self.0
    }
}

/// Error returned when a card id is not in 1..=52.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid card id {0}, must be 1..=52")]
pub struct CardIdError(pub u8);

impl TryFrom<u8> for CardId {
    type Error = CardIdError;

    fn try_from(order: u8) -> Result<Self, Self::Error> {
        CardId::new(order).ok_or(CardIdError(order))
    }
}

impl From<CardId> for u8 {
    fn from(id: CardId) -> u8 {
        id.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Poker card.
///
/// A card is stored as its [CardId], rank, suit, and value are derived from
/// the id position in the canonical order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
}

impl Card {
    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        // Ace is the first card of each suit in the canonical order.
        let pos = (rank as u8 + 1) % Rank::COUNT;
        Card {
            id: CardId(suit as u8 * Rank::COUNT + pos + 1),
        }
    }

    /// Creates a card from its id.
    pub fn from_id(id: CardId) -> Card {
        Card { id }
    }

    /// This card unique id.
    pub fn id(&self) -> CardId {
        self.id
    }

    /// The card position in the canonical order (1..=52).
    pub fn order(&self) -> u8 {
        self.id.0
    }

    /// The card value used for comparisons, 2 has value 1 and Ace value 13.
    pub fn value(&self) -> u8 {
        self.rank().value()
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match (self.id.0 - 1) / Rank::COUNT {
            0 => Suit::Hearts,
            1 => Suit::Clubs,
            2 => Suit::Diamonds,
            _ => Suit::Spades,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        CANONICAL_RANKS[usize::from((self.id.0 - 1) % Rank::COUNT)]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Error returned when parsing a card from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The string has no valid rank.
    #[error("invalid card rank in {0:?}")]
    Rank(String),
    /// The string has no valid suit.
    #[error("invalid card suit in {0:?}")]
    Suit(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses cards like `AH`, `td`, or `10S`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_char = chars.next_back().ok_or_else(|| ParseCardError::Rank(s.into()))?;
        let rank = match chars.as_str().to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::Rank(s.into())),
        };

        let suit = match suit_char.to_ascii_uppercase() {
            'H' | '♥' => Suit::Hearts,
            'C' | '♣' => Suit::Clubs,
            'D' | '♦' => Suit::Diamonds,
            'S' | '♠' => Suit::Spades,
            _ => return Err(ParseCardError::Suit(s.into())),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards separated by spaces or commas.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// The ranks of a suit in canonical order.
const CANONICAL_RANKS: [Rank; Rank::COUNT as usize] = [
    Rank::Ace,
    Rank::Deuce,
    Rank::Trey,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: u8 = 13;

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, Deuce is 1 and Ace is 13.
    pub fn value(&self) -> u8 {
        *self as u8 + 1
    }

    /// Returns the rank for a value in 1..=13.
    pub fn from_value(value: u8) -> Option<Rank> {
        value
            .checked_sub(1)
            .and_then(|idx| Rank::ranks().nth(idx as usize))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts = 0,
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits in canonical order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades].into_iter()
    }
}

/// The two hole cards of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Card; 2]", into = "[Card; 2]")]
pub struct Hand {
    cards: [Card; 2],
}

impl Hand {
    /// Creates a hand, returns `None` if the two cards are the same card.
    pub fn new(c1: Card, c2: Card) -> Option<Hand> {
        (c1.id() != c2.id()).then_some(Hand { cards: [c1, c2] })
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card; 2] {
        &self.cards
    }

    /// Replaces the card at `slot` (0 or 1) returning the old card.
    ///
    /// Returns `None` and leaves the hand unchanged if the slot is invalid or
    /// the new card is the other hole card.
    pub fn replace(&mut self, slot: usize, card: Card) -> Option<Card> {
        let other = self.cards.get(1usize.checked_sub(slot)?)?;
        if other.id() == card.id() {
            return None;
        }

        Some(std::mem::replace(&mut self.cards[slot], card))
    }

    /// Checks if this hand holds the given card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

/// Error returned when a hand has the same card twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("hand has card {0} twice")]
pub struct HandError(pub Card);

impl TryFrom<[Card; 2]> for Hand {
    type Error = HandError;

    fn try_from([c1, c2]: [Card; 2]) -> Result<Self, Self::Error> {
        Hand::new(c1, c2).ok_or(HandError(c1))
    }
}

impl From<Hand> for [Card; 2] {
    fn from(hand: Hand) -> [Card; 2] {
        hand.cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.cards[0], self.cards[1])
    }
}
