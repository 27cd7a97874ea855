//! Cards Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::deck::DeckTable;
use crate::presentation::handlers::{self, CardsAppState};

/// Create the Cards router, mounted at `/cards`
pub fn cards_router(decks: Arc<DeckTable>) -> Router {
    let state = CardsAppState { decks };

    Router::new()
        .route("/", get(handlers::default_deck))
        .route("/{id}", get(handlers::named_deck))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Card;
    use crate::domain::deck::DeckName;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use tower::ServiceExt;

    fn app() -> Router {
        let table = DeckTable::new(DeckName::ALL.map(|name| {
            let cards = (1..=8)
                .map(|n| Card::new(format!("{name}{n}"), format!("/img/{name}/{n}.jpg")))
                .collect();
            (name, cards)
        }))
        .unwrap();
        Router::new().nest("/cards", cards_router(Arc::new(table)))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_default_deck_is_dogs() {
        let response = get(app(), "/cards").await;
        assert_eq!(response.status(), StatusCode::OK);

        let cards: Vec<Card> = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(cards.len(), 16);
        assert!(cards.iter().all(|card| card.id.starts_with("dogs")));
    }

    #[tokio::test]
    async fn test_named_deck() {
        let response = get(app(), "/cards/HIPSTER").await;
        assert_eq!(response.status(), StatusCode::OK);

        let cards: Vec<Card> = serde_json::from_value(body_json(response).await).unwrap();
        assert!(cards.iter().all(|card| card.id.starts_with("hipster")));
    }

    #[tokio::test]
    async fn test_unknown_deck() {
        let response = get(app(), "/cards/unknown").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Deck not found" })
        );
    }
}
