// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deck management.
//!
//! A [Deck] is an ordered sequence of cards that is mutated in place by
//! shuffling, drawing, and inserting cards. Cards checked out of a deck
//! (hands and board) must be inserted back before the deck can hand them out
//! again, inserting a card that is already in the deck is a no-op.
use ahash::AHashSet;
use log::debug;
use thiserror::Error;

use crate::{Card, CardId, Hand, RandomSource, Rank, Suit};

/// Deck errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Tried to draw a card from an empty deck.
    #[error("empty deck")]
    Empty,
}

/// Where to insert cards in a deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsertPosition {
    /// Insert at the top of the deck.
    Front,
    /// Insert at the bottom of the deck.
    #[default]
    Back,
    /// Insert at a random position, chosen independently for each card.
    Random,
}

/// A cards Deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a deck with all 52 cards in canonical order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a deck with the given cards, a card given more than once is
    /// kept at its first position.
    pub fn from_cards(mut cards: Vec<Card>) -> Self {
        let mut seen = AHashSet::with_capacity(cards.len());
        cards.retain(|c| seen.insert(c.id()));
        Self { cards }
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the deck in place using a Fisher-Yates shuffle.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        for i in (1..self.cards.len()).rev() {
            let j = rng.index(i + 1);
            self.cards.swap(i, j);
        }

        debug!("Shuffled deck with {} cards", self.cards.len());
        self
    }

    /// Sorts the deck by the cards canonical order.
    pub fn sort(&mut self) -> &mut Self {
        self.cards.sort_by_key(|c| c.order());
        self
    }

    /// Removes and returns a random card from the deck.
    pub fn pick_card<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }

        let idx = rng.index(self.cards.len());
        Ok(self.cards.remove(idx))
    }

    /// Draws a two cards hand, returns `None` if the deck has less than two
    /// cards, in which case the deck is left unchanged.
    pub fn create_hand<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Hand> {
        if self.cards.len() < 2 {
            debug!("Cannot create hand from {} cards", self.cards.len());
            return None;
        }

        let c1 = self.pick_card(rng).ok()?;
        let c2 = self.pick_card(rng).ok()?;
        Hand::new(c1, c2)
    }

    /// Returns the cards that are not in this deck in canonical order.
    pub fn insertable(&self) -> Vec<Card> {
        let present = self.ids();
        Deck::default()
            .cards
            .into_iter()
            .filter(|c| !present.contains(&c.id()))
            .collect()
    }

    /// Inserts cards in the deck at the given position.
    ///
    /// Cards that are already in the deck are skipped.
    pub fn insert_cards<R: RandomSource + ?Sized>(
        &mut self,
        cards: &[Card],
        position: InsertPosition,
        rng: &mut R,
    ) -> &mut Self {
        let mut present = self.ids();
        for &card in cards {
            if !present.insert(card.id()) {
                debug!("Skipping insert of {card}, already in the deck");
                continue;
            }

            self.insert_at(card, position, rng);
        }

        self
    }

    /// Inserts `quantity` random cards, not already in the deck, at the given
    /// position.
    ///
    /// If `quantity` is larger than the number of cards missing from the deck
    /// only the missing cards are inserted.
    pub fn insert_random_cards<R: RandomSource + ?Sized>(
        &mut self,
        quantity: usize,
        position: InsertPosition,
        rng: &mut R,
    ) -> &mut Self {
        let mut candidates = self.insertable();
        let quantity = quantity.min(candidates.len());

        for _ in 0..quantity {
            let idx = rng.index(candidates.len());
            let card = candidates.remove(idx);
            self.insert_at(card, position, rng);
        }

        debug!("Inserted {quantity} random cards, deck has {} cards", self.cards.len());
        self
    }

    /// Inserts a card at the bottom of the deck, returns false and leaves the
    /// deck unchanged if the card is already in the deck.
    pub fn insert_card(&mut self, card: Card) -> bool {
        if self.contains(card) {
            debug!("Skipping insert of {card}, already in the deck");
            return false;
        }

        self.cards.push(card);
        true
    }

    /// Removes a card from the deck, returns true if the card was in the deck.
    pub fn remove(&mut self, card: Card) -> bool {
        let len = self.cards.len();
        self.cards.retain(|c| c != &card);
        len != self.cards.len()
    }

    /// Checks if the deck contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// The deck cards, the first card is the top of the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates the deck cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    fn ids(&self) -> AHashSet<CardId> {
        self.cards.iter().map(Card::id).collect()
    }

    fn insert_at<R: RandomSource + ?Sized>(&mut self, card: Card, position: InsertPosition, rng: &mut R) {
        match position {
            InsertPosition::Front => self.cards.insert(0, card),
            InsertPosition::Back => self.cards.push(card),
            InsertPosition::Random => {
                let idx = rng.index(self.cards.len() + 1);
                self.cards.insert(idx, card);
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| {
                // Canonical order has the Ace first.
                let ranks = std::iter::once(Rank::Ace).chain(Rank::ranks().take(12));
                ranks.map(move |r| Card::new(r, s))
            })
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
