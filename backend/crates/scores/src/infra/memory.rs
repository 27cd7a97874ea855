//! In-Memory Repository Implementation
//!
//! Used when no database is configured, and by tests.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::ScoreEntry;
use crate::domain::repository::ScoreRepository;
use crate::error::ScoresResult;

/// Process-local score repository; contents are lost on restart
#[derive(Clone, Default)]
pub struct InMemoryScoreRepository {
    // Kept in insertion order.
    entries: Arc<RwLock<Vec<ScoreEntry>>>,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn sorted(&self) -> Vec<ScoreEntry> {
        let mut entries = self.entries.read().await.clone();
        // Stable sort keeps insertion order among equal scores.
        entries.sort_by_key(|entry| entry.score);
        entries
    }
}

impl ScoreRepository for InMemoryScoreRepository {
    async fn create(&self, entry: &ScoreEntry) -> ScoresResult<()> {
        self.entries.write().await.push(entry.clone());
        Ok(())
    }

    async fn top(&self, limit: u32) -> ScoresResult<Vec<ScoreEntry>> {
        let mut entries = self.sorted().await;
        entries.truncate(limit as usize);
        Ok(entries)
    }

    async fn scores_ascending(&self) -> ScoresResult<Vec<i64>> {
        Ok(self.sorted().await.into_iter().map(|entry| entry.score).collect())
    }
}
