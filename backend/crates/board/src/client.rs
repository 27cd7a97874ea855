//! Backend API Client
//!
//! Sends the ID token in the `Authorization` header as-is, the way the
//! browser client does.

use cards::Card;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::time::Duration;

use crate::error::{BoardError, BoardResult};

/// One leaderboard row as returned by `GET /scores`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub score: i64,
}

#[derive(Deserialize)]
struct TopScoresBody {
    scores: Vec<LeaderboardEntry>,
}

#[derive(Deserialize)]
struct RankBody {
    rank: Option<u64>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct SubmitBody {
    score: i64,
}

/// Typed client for the game backend
#[derive(Clone)]
pub struct GameApiClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GameApiClient {
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> BoardResult<Self> {
        let base_url: String = base_url.into();
        Ok(Self {
            http: platform::http_client::build_http_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET /cards or GET /cards/{deck}
    pub async fn fetch_deck(&self, deck: Option<&str>) -> BoardResult<Vec<Card>> {
        let path = match deck {
            Some(deck) => format!("/cards/{deck}"),
            None => "/cards".to_string(),
        };
        let response = self.get(&path).await?;
        Ok(response.json().await?)
    }

    /// GET /scores
    pub async fn fetch_top_scores(&self) -> BoardResult<Vec<LeaderboardEntry>> {
        let response = self.get("/scores").await?;
        let body: TopScoresBody = response.json().await?;
        Ok(body.scores)
    }

    /// POST /scores; `None` when the backend stored the score but sent no rank
    pub async fn submit_score(&self, score: i64) -> BoardResult<Option<u64>> {
        let response = self
            .http
            .post(self.url("/scores"))
            .header(AUTHORIZATION, &self.token)
            .json(&SubmitBody { score })
            .send()
            .await?;
        let body: RankBody = check(response).await?.json().await?;
        Ok(body.rank)
    }

    /// GET /scores/{score}
    pub async fn fetch_rank(&self, score: i64) -> BoardResult<u64> {
        let response = self.get(&format!("/scores/{score}")).await?;
        let body: RankBody = response.json().await?;
        body.rank.ok_or_else(|| BoardError::Api {
            status: 200,
            message: "rank missing from reply".to_string(),
        })
    }

    async fn get(&self, path: &str) -> BoardResult<reqwest::Response> {
        let response = self
            .http
            .get(self.url(path))
            .header(AUTHORIZATION, &self.token)
            .send()
            .await?;
        check(response).await
    }
}

async fn check(response: reqwest::Response) -> BoardResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| status.to_string());

    Err(BoardError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Leaderboard as shown in the high-score dialog, one `"1. Ada: 3"` line
/// per entry
pub fn format_leaderboard(entries: &[LeaderboardEntry]) -> String {
    let mut out = String::new();
    for (position, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "{}. {}: {}", position + 1, entry.name, entry.score);
    }
    out
}
