//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::entities::ScoreEntry;

/// POST /scores body
///
/// Anything that does not yield an integer `score` counts as no score.
#[derive(Debug, Deserialize)]
pub struct RecordScoreRequest {
    #[serde(default)]
    pub score: Option<i64>,
}

impl RecordScoreRequest {
    pub fn score_from_body(body: &[u8]) -> Option<i64> {
        serde_json::from_slice::<Self>(body)
            .ok()
            .and_then(|req| req.score)
    }
}

/// POST /scores response; `rank` is omitted when it could not be computed
#[derive(Debug, Serialize)]
pub struct RecordScoreResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u64>,
}

/// GET /scores/{score} response
#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub rank: u64,
}

/// Leaderboard entry
#[derive(Debug, Serialize)]
pub struct ScoreEntryResponse {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub user_id: String,
    pub score: i64,
}

impl From<ScoreEntry> for ScoreEntryResponse {
    fn from(entry: ScoreEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name,
            email: entry.email,
            user_id: entry.user_id,
            score: entry.score,
        }
    }
}

/// GET /scores response
#[derive(Debug, Serialize)]
pub struct TopScoresResponse {
    pub scores: Vec<ScoreEntryResponse>,
}
