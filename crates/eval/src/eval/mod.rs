// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! It provides a [calculate_hand_strength] function that given a two cards
//! hand and a board of up to five cards finds the best five cards hand and
//! its [HandRank], and a [HandStrength] type that orders evaluated hands by
//! rank and kickers so that [strongest_hands] can find the winners at a
//! showdown.
//!
//! The evaluator is a pure function of its inputs so independent hands can be
//! evaluated concurrently.

#[allow(clippy::module_inception)]
mod eval;
pub use eval::{calculate_hand_strength, evaluate};

mod strength;
pub use strength::{HandRank, HandStrength, strongest_hands};
