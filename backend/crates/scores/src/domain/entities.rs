//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::ScoreEntryId;

/// One recorded game result
///
/// Created once on a successful submission and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub id: ScoreEntryId,
    /// First word of the submitter's display name
    pub name: String,
    pub email: Option<String>,
    /// Identity provider subject id
    pub user_id: String,
    /// Lower is better
    pub score: i64,
    /// Breaks ties between equal scores
    pub created_at: DateTime<Utc>,
}

impl ScoreEntry {
    /// Create a new entry with a fresh id, stamped now
    pub fn new(
        name: impl Into<String>,
        email: Option<String>,
        user_id: impl Into<String>,
        score: i64,
    ) -> Self {
        Self {
            id: ScoreEntryId::new(),
            name: name.into(),
            email,
            user_id: user_id.into(),
            score,
            created_at: Utc::now(),
        }
    }
}
