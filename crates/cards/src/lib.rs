// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kicker Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use kicker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.order(), 1);
//! assert_eq!(ah.value(), 13);
//!
//! let td = "TD".parse::<Card>().unwrap();
//! assert_eq!(td.rank(), Rank::Ten);
//! ```
//!
//! and a [Deck] type for shuffling, drawing, and inserting cards back, any
//! [rand] generator can be used as a [RandomSource]:
//!
//! ```
//! # use kicker_cards::{Deck, InsertPosition};
//! let mut rng = rand::rng();
//! let mut deck = Deck::new_and_shuffled(&mut rng);
//!
//! let hand = deck.create_hand(&mut rng).unwrap();
//! assert_eq!(deck.len(), 50);
//!
//! // Return the hand cards, cards already in the deck are skipped.
//! deck.insert_cards(hand.cards(), InsertPosition::Back, &mut rng);
//! deck.insert_cards(hand.cards(), InsertPosition::Back, &mut rng);
//! assert_eq!(deck.len(), Deck::SIZE);
//! ```
//!
//! Use a [Sequence] to get reproducible shuffles:
//!
//! ```
//! # use kicker_cards::{Deck, Sequence, parse_cards};
//! let mut deck = Deck::from_cards(parse_cards("AD 2D 3D 4D").unwrap());
//! deck.shuffle(&mut Sequence::new([0.4, 0.3, 0.2, 0.1]));
//! assert_eq!(deck.cards(), parse_cards("4D 3D AD 2D").unwrap());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, CardId, CardIdError, Hand, HandError, ParseCardError, Rank, Suit, parse_cards};

mod deck;
pub use deck::{Deck, DeckError, InsertPosition};

mod random;
pub use random::{RandomSource, Sequence};
