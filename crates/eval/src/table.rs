// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A table with players hands, a board, and the deck they are dealt from.
//!
//! Every card is either in the deck, in a hand, or on the board, the table
//! operations return replaced cards to the deck before taking new ones out.
use ahash::AHashSet;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::{
    Card, Deck, DeckError, Hand, HandStrength, InsertPosition, RandomSource,
    calculate_hand_strength, strongest_hands,
};

/// Table errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The number of players is not valid.
    #[error("invalid number of players {0}, must be 1..=9")]
    Players(usize),
    /// No player at the given index.
    #[error("no player at index {0}")]
    Player(usize),
    /// The hand card slot is not 0 or 1.
    #[error("invalid hand card slot {0}")]
    Slot(usize),
    /// No board card at the given index.
    #[error("no board card at index {0}")]
    BoardIndex(usize),
    /// The board has a size that does not match a stage.
    #[error("invalid board size {0}, must be 0, 3, 4, or 5")]
    BoardSize(usize),
    /// The card is dealt to a hand or to the board.
    #[error("card {0} is already in play")]
    CardInPlay(Card),
    /// Not enough cards in the deck.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// The board stage, sets the number of cards on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BoardStage {
    /// No board cards.
    #[default]
    PreFlop,
    /// Three board cards.
    Flop,
    /// Four board cards.
    Turn,
    /// Five board cards.
    River,
}

impl BoardStage {
    /// The number of board cards at this stage.
    pub fn board_len(&self) -> usize {
        match self {
            BoardStage::PreFlop => 0,
            BoardStage::Flop => 3,
            BoardStage::Turn => 4,
            BoardStage::River => 5,
        }
    }

    /// Returns the stage for a board with `len` cards.
    pub fn from_board_len(len: usize) -> Option<BoardStage> {
        match len {
            0 => Some(BoardStage::PreFlop),
            3 => Some(BoardStage::Flop),
            4 => Some(BoardStage::Turn),
            5 => Some(BoardStage::River),
            _ => None,
        }
    }
}

impl fmt::Display for BoardStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BoardStage::PreFlop => "preflop",
            BoardStage::Flop => "flop",
            BoardStage::Turn => "turn",
            BoardStage::River => "river",
        };

        write!(f, "{s}")
    }
}

/// Error returned when parsing a board stage fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid board stage {0:?}, expected preflop, flop, turn, or river")]
pub struct ParseStageError(String);

impl FromStr for BoardStage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "preflop" | "pre-flop" => Ok(BoardStage::PreFlop),
            "flop" => Ok(BoardStage::Flop),
            "turn" => Ok(BoardStage::Turn),
            "river" => Ok(BoardStage::River),
            _ => Err(ParseStageError(s.to_string())),
        }
    }
}

/// A Poker table.
#[derive(Debug, Clone)]
pub struct Table {
    deck: Deck,
    hands: Vec<Hand>,
    board: Vec<Card>,
    stage: BoardStage,
}

impl Table {
    /// The maximum number of players.
    pub const MAX_PLAYERS: usize = 9;

    /// Creates a table with a shuffled deck and deals a hand to each player.
    pub fn new<R: RandomSource + ?Sized>(players: usize, rng: &mut R) -> Result<Self, TableError> {
        if !(1..=Self::MAX_PLAYERS).contains(&players) {
            return Err(TableError::Players(players));
        }

        let mut deck = Deck::new_and_shuffled(rng);
        let hands = (0..players)
            .map(|_| deck.create_hand(rng).ok_or(DeckError::Empty))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("New table with {players} players");
        Ok(Self {
            deck,
            hands,
            board: Vec::new(),
            stage: BoardStage::PreFlop,
        })
    }

    /// Creates a table with the given hands and board, the deck has all the
    /// remaining cards in canonical order.
    pub fn with_cards(hands: Vec<Hand>, board: Vec<Card>) -> Result<Self, TableError> {
        if !(1..=Self::MAX_PLAYERS).contains(&hands.len()) {
            return Err(TableError::Players(hands.len()));
        }

        let stage =
            BoardStage::from_board_len(board.len()).ok_or(TableError::BoardSize(board.len()))?;

        let mut deck = Deck::new();
        let in_play = hands.iter().flat_map(|h| h.cards()).chain(&board);
        for &card in in_play {
            if !deck.remove(card) {
                return Err(TableError::CardInPlay(card));
            }
        }

        Ok(Self {
            deck,
            hands,
            board,
            stage,
        })
    }

    /// The table deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The players hands.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// The board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The board stage.
    pub fn stage(&self) -> BoardStage {
        self.stage
    }

    /// Moves the board to the given stage.
    ///
    /// Moving forward deals random cards from the deck, moving backward
    /// returns the last board cards to the deck.
    pub fn set_stage<R: RandomSource + ?Sized>(
        &mut self,
        stage: BoardStage,
        rng: &mut R,
    ) -> Result<(), TableError> {
        let len = stage.board_len();

        while self.board.len() > len {
            if let Some(card) = self.board.pop() {
                self.deck.insert_card(card);
            }
        }

        while self.board.len() < len {
            let card = self.deck.pick_card(rng)?;
            self.board.push(card);
        }

        debug!("Board stage {} -> {stage}", self.stage);
        self.stage = stage;
        Ok(())
    }

    /// Replaces a hand card with a card from the deck, the replaced card is
    /// returned to the deck.
    pub fn replace_hand_card(
        &mut self,
        player: usize,
        slot: usize,
        card: Card,
    ) -> Result<Card, TableError> {
        let hand = self
            .hands
            .get_mut(player)
            .ok_or(TableError::Player(player))?;

        if slot > 1 {
            return Err(TableError::Slot(slot));
        }

        if !self.deck.contains(card) {
            return Err(TableError::CardInPlay(card));
        }

        let old = hand.replace(slot, card).ok_or(TableError::CardInPlay(card))?;
        self.deck.insert_card(old);
        self.deck.remove(card);

        debug!("Player {player} card {old} replaced with {card}");
        Ok(old)
    }

    /// Replaces a board card with a card from the deck, the replaced card is
    /// returned to the deck.
    pub fn replace_board_card(&mut self, index: usize, card: Card) -> Result<Card, TableError> {
        if index >= self.board.len() {
            return Err(TableError::BoardIndex(index));
        }

        if !self.deck.contains(card) {
            return Err(TableError::CardInPlay(card));
        }

        let old = std::mem::replace(&mut self.board[index], card);
        self.deck.insert_card(old);
        self.deck.remove(card);

        debug!("Board card {old} replaced with {card}");
        Ok(old)
    }

    /// Returns a player cards to the deck and deals a new hand.
    pub fn redeal_hand<R: RandomSource + ?Sized>(
        &mut self,
        player: usize,
        rng: &mut R,
    ) -> Result<(), TableError> {
        let hand = self
            .hands
            .get_mut(player)
            .ok_or(TableError::Player(player))?;

        self.deck
            .insert_cards(hand.cards(), InsertPosition::Random, rng);
        *hand = self.deck.create_hand(rng).ok_or(DeckError::Empty)?;
        Ok(())
    }

    /// Returns all cards to the deck, shuffles it, and deals new hands with
    /// an empty board.
    pub fn reset<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<(), TableError> {
        let in_play = self.cards_in_play();
        self.deck
            .insert_cards(&in_play, InsertPosition::Back, rng)
            .sort()
            .shuffle(rng);

        self.board.clear();
        self.stage = BoardStage::PreFlop;

        for hand in self.hands.iter_mut() {
            *hand = self.deck.create_hand(rng).ok_or(DeckError::Empty)?;
        }

        debug!("Table reset with {} players", self.hands.len());
        Ok(())
    }

    /// All the cards in the players hands and on the board.
    pub fn cards_in_play(&self) -> Vec<Card> {
        self.hands
            .iter()
            .flat_map(|h| h.cards())
            .chain(&self.board)
            .copied()
            .collect()
    }

    /// Checks that every card is either in the deck or in play exactly once.
    pub fn is_consistent(&self) -> bool {
        let mut ids = AHashSet::with_capacity(Deck::SIZE);
        let all = self.deck.iter().copied().chain(self.cards_in_play());

        let mut count = 0;
        for card in all {
            count += 1;
            if !ids.insert(card.id()) {
                return false;
            }
        }

        count == Deck::SIZE
    }

    /// Evaluates all hands against the board.
    pub fn strengths(&self) -> Vec<HandStrength> {
        self.hands
            .iter()
            .map(|h| calculate_hand_strength(h, &self.board))
            .collect()
    }

    /// The indices of the strongest hands.
    pub fn winners(&self) -> Vec<usize> {
        strongest_hands(&self.strengths())
    }
}
