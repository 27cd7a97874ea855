//! JSON Deck Source
//!
//! The source is a single object keyed by deck name, each value an array of
//! cards listed once per pair:
//!
//! ```json
//! { "hipster": [...], "dogs": [...], "vacation": [...], "gcp": [...] }
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::domain::card::Card;
use crate::domain::deck::{DeckName, DeckTable};
use crate::error::CardsResult;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DeckSource {
    hipster: Vec<Card>,
    dogs: Vec<Card>,
    vacation: Vec<Card>,
    gcp: Vec<Card>,
}

impl DeckTable {
    /// Parse and validate a deck source document
    pub fn from_json(source: &str) -> CardsResult<Self> {
        let source: DeckSource = serde_json::from_str(source)?;
        DeckTable::new([
            (DeckName::Hipster, source.hipster),
            (DeckName::Dogs, source.dogs),
            (DeckName::Vacation, source.vacation),
            (DeckName::Gcp, source.gcp),
        ])
    }
}

/// Read the deck source at `path` and build the deck table
pub async fn load_deck_table(path: impl AsRef<Path>) -> CardsResult<DeckTable> {
    let path = path.as_ref();
    let source = tokio::fs::read_to_string(path).await?;
    let table = DeckTable::from_json(&source)?;

    tracing::info!(
        path = %path.display(),
        decks = DeckName::ALL.len(),
        "Deck table loaded"
    );

    Ok(table)
}
