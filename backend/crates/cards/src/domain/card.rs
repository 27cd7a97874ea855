//! Card Entity

use serde::{Deserialize, Serialize};

/// A single card face
///
/// Two cards with the same `id` form a matching pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    /// URL of the card image
    pub picture: String,
}

impl Card {
    pub fn new(id: impl Into<String>, picture: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            picture: picture.into(),
        }
    }
}
