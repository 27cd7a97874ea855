//! Cards (Deck Store) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Card entity, deck names, the immutable deck table
//! - `application/` - Deal use case
//! - `infra/` - JSON deck source
//! - `presentation/` - HTTP handlers and router
//!
//! Decks are loaded once at startup and never mutated. Every request gets
//! its own shuffled copy.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::deal_deck::DealDeckUseCase;
pub use domain::card::Card;
pub use domain::deck::{Deck, DeckName, DeckTable};
pub use error::{CardsError, CardsResult};
pub use infra::json_source::load_deck_table;
pub use presentation::router::cards_router;
