//! Board State Machine
//!
//! Cards move `FaceDown -> FaceUp -> Matched`, or back to `FaceDown` once a
//! mismatch is resolved. At most two cards are face up and unmatched at any
//! time; the board ignores flips from the second flip until the pair is
//! settled.

use cards::Card;
use std::collections::HashMap;

use crate::error::{BoardError, BoardResult};

/// Visible state of one card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    FaceDown,
    FaceUp,
    Matched,
}

/// A card placed on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCard {
    /// Unique on this board
    pub board_id: String,
    /// Shared by both cards of a pair
    pub pair_id: String,
    pub picture: String,
    pub face: CardFace,
}

/// Result of a flip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Board locked, or the card is not face down
    Ignored,
    /// First card of a pair turned up
    Revealed,
    /// Second card matched the first
    Matched { complete: bool },
    /// Second card did not match; locked until [`GameBoard::resolve_mismatch`]
    Mismatched,
}

#[derive(Debug, Clone)]
pub struct GameBoard {
    cards: Vec<BoardCard>,
    active: Vec<usize>,
    locked: bool,
    score: i64,
}

impl GameBoard {
    /// Lay out `cards` in the order given, all face down
    ///
    /// The n-th repeat of an id is placed as `<id>_<n>`, so the second card
    /// of a pair is `<id>_1`.
    pub fn new(cards: Vec<Card>) -> Self {
        let mut seen: HashMap<String, usize> = HashMap::with_capacity(cards.len());
        let cards: Vec<BoardCard> = cards
            .into_iter()
            .map(|card| {
                let repeats = seen.entry(card.id.clone()).or_insert(0);
                let board_id = match *repeats {
                    0 => card.id.clone(),
                    n => format!("{}_{n}", card.id),
                };
                *repeats += 1;
                BoardCard {
                    board_id,
                    pair_id: card.id,
                    picture: card.picture,
                    face: CardFace::FaceDown,
                }
            })
            .collect();

        let score = -(cards.len() as i64);
        Self {
            cards,
            active: Vec::with_capacity(2),
            locked: false,
            score,
        }
    }

    pub fn flip(&mut self, board_id: &str) -> BoardResult<FlipOutcome> {
        let index = self
            .cards
            .iter()
            .position(|card| card.board_id == board_id)
            .ok_or_else(|| BoardError::UnknownCard(board_id.to_string()))?;

        if self.locked || self.cards[index].face != CardFace::FaceDown {
            return Ok(FlipOutcome::Ignored);
        }

        self.cards[index].face = CardFace::FaceUp;
        self.score += 1;
        self.active.push(index);

        let &[first, second] = self.active.as_slice() else {
            return Ok(FlipOutcome::Revealed);
        };

        self.locked = true;
        if self.cards[first].pair_id != self.cards[second].pair_id {
            return Ok(FlipOutcome::Mismatched);
        }

        self.cards[first].face = CardFace::Matched;
        self.cards[second].face = CardFace::Matched;
        self.active.clear();

        let complete = self.is_complete();
        if !complete {
            self.locked = false;
        }
        Ok(FlipOutcome::Matched { complete })
    }

    /// Turn a mismatched pair back face down and unlock.
    ///
    /// Returns `false` when there is no pending mismatch.
    pub fn resolve_mismatch(&mut self) -> bool {
        if self.active.len() != 2 {
            return false;
        }
        for index in self.active.drain(..) {
            self.cards[index].face = CardFace::FaceDown;
        }
        self.locked = false;
        true
    }

    /// No card left face down
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|card| card.face != CardFace::FaceDown)
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Starts at minus the card count; one point per flip
    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn cards(&self) -> &[BoardCard] {
        &self.cards
    }

    /// Board ids of the face-up, unmatched cards
    pub fn active(&self) -> Vec<&str> {
        self.active
            .iter()
            .map(|&index| self.cards[index].board_id.as_str())
            .collect()
    }

    pub fn face(&self, board_id: &str) -> Option<CardFace> {
        self.cards
            .iter()
            .find(|card| card.board_id == board_id)
            .map(|card| card.face)
    }
}
