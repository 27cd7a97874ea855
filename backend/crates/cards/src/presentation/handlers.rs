//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

use crate::application::deal_deck::DealDeckUseCase;
use crate::domain::card::Card;
use crate::domain::deck::DeckTable;
use crate::error::CardsResult;

/// Shared state for card handlers
#[derive(Clone)]
pub struct CardsAppState {
    pub decks: Arc<DeckTable>,
}

/// GET /cards
pub async fn default_deck(State(state): State<CardsAppState>) -> CardsResult<Json<Vec<Card>>> {
    let use_case = DealDeckUseCase::new(state.decks.clone());
    Ok(Json(use_case.execute(None)?))
}

/// GET /cards/{id}
pub async fn named_deck(
    State(state): State<CardsAppState>,
    Path(id): Path<String>,
) -> CardsResult<Json<Vec<Card>>> {
    let use_case = DealDeckUseCase::new(state.decks.clone());
    Ok(Json(use_case.execute(Some(&id))?))
}
