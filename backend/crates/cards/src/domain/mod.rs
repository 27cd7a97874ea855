//! Domain Layer
//!
//! - Card entity
//! - Deck names, paired decks and the deck table

pub mod card;
pub mod deck;
