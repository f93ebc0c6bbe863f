// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kicker Poker hand evaluator.
//!
//! Texas hold'em hand evaluator for a two cards hand with a board of 0, 3, 4
//! or 5 cards. The evaluator finds the best five cards out of the hand and
//! board cards, classifies them in one of the ten hand ranks, and orders them
//! so that hands can be compared at a showdown:
//!
//! ```
//! # use kicker_eval::*;
//! let board = parse_cards("KH KD 9S 9C 2H").unwrap();
//! let hands = [
//!     Hand::new("7S".parse().unwrap(), "3D".parse().unwrap()).unwrap(),
//!     Hand::new("6S".parse().unwrap(), "3C".parse().unwrap()).unwrap(),
//!     Hand::new("7C".parse().unwrap(), "4D".parse().unwrap()).unwrap(),
//! ];
//!
//! let strengths = hands
//!     .iter()
//!     .map(|h| calculate_hand_strength(h, &board))
//!     .collect::<Vec<_>>();
//! assert!(strengths.iter().all(|s| s.rank() == HandRank::TwoPair));
//!
//! // The seven kicker hands split the pot.
//! assert_eq!(strongest_hands(&strengths), vec![0, 2]);
//! ```
//!
//! A [Table] deals hands and board cards from a deck keeping every card
//! unique:
//!
//! ```
//! # use kicker_eval::*;
//! let mut rng = rand::rng();
//! let mut table = Table::new(6, &mut rng).unwrap();
//! table.set_stage(BoardStage::River, &mut rng).unwrap();
//! assert_eq!(table.deck().len(), Deck::SIZE - 12 - 5);
//!
//! let winners = table.winners();
//! assert!(!winners.is_empty());
//! ```
//!
//! The **`parallel`** feature enables [par_evaluate] to evaluate many hands
//! with a given number of threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandStrength, calculate_hand_strength, evaluate, strongest_hands};

pub mod table;
pub use table::{BoardStage, ParseStageError, Table, TableError};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_evaluate;

// Reexport cards types.
pub use kicker_cards::{
    Card, CardId, CardIdError, Deck, DeckError, Hand, HandError, InsertPosition, ParseCardError,
    RandomSource, Rank, Sequence, Suit, parse_cards,
};
