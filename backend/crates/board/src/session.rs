//! Game Session
//!
//! One game from deal to leaderboard: fetches a deck, applies flips, pauses
//! on a mismatch with the board locked, then submits the final score and
//! asks for its rank.

use std::time::Duration;

use crate::client::GameApiClient;
use crate::error::BoardResult;
use crate::game::{FlipOutcome, GameBoard};

/// How long a mismatched pair stays face up
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(1500);

/// Final result shown when a game ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionSummary {
    pub final_score: i64,
    /// `None` when the backend could not rank the score
    pub rank: Option<u64>,
}

/// Result of one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    Continue(FlipOutcome),
    Completed(CompletionSummary),
}

pub struct GameSession {
    client: GameApiClient,
    board: GameBoard,
    mismatch_delay: Duration,
}

impl GameSession {
    /// Fetch a deck (the default one for `None`) and lay out the board
    pub async fn start(client: GameApiClient, deck: Option<&str>) -> BoardResult<Self> {
        let cards = client.fetch_deck(deck).await?;
        tracing::info!(deck = deck.unwrap_or("default"), cards = cards.len(), "Game started");

        Ok(Self {
            client,
            board: GameBoard::new(cards),
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
        })
    }

    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    /// Flip one card.
    ///
    /// A mismatch returns only after the delay, with both cards face down
    /// again. The flip that completes the board also records the score.
    pub async fn flip(&mut self, board_id: &str) -> BoardResult<TurnResult> {
        let outcome = self.board.flip(board_id)?;

        match outcome {
            FlipOutcome::Mismatched => {
                tokio::time::sleep(self.mismatch_delay).await;
                self.board.resolve_mismatch();
            }
            FlipOutcome::Matched { complete: true } => {
                return Ok(TurnResult::Completed(self.finish().await?));
            }
            FlipOutcome::Ignored | FlipOutcome::Revealed | FlipOutcome::Matched { .. } => {}
        }

        Ok(TurnResult::Continue(outcome))
    }

    async fn finish(&self) -> BoardResult<CompletionSummary> {
        let final_score = self.board.score();
        let submitted_rank = self.client.submit_score(final_score).await?;

        let rank = match self.client.fetch_rank(final_score).await {
            Ok(rank) => Some(rank),
            Err(e) => {
                tracing::warn!(score = final_score, error = %e, "Rank lookup failed");
                submitted_rank
            }
        };

        tracing::info!(score = final_score, rank = ?rank, "Game complete");

        Ok(CompletionSummary { final_score, rank })
    }
}
