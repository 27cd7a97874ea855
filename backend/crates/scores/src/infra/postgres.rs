//! PostgreSQL Repository Implementation
//!
//! The table name is configuration, so statements are built once per
//! repository with the quoted identifier and values are always bound.

use chrono::{DateTime, Utc};
use kernel::id::ScoreEntryId;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::ScoreEntry;
use crate::domain::repository::ScoreRepository;
use crate::domain::value_objects::CollectionName;
use crate::error::ScoresResult;

/// PostgreSQL-backed score repository
#[derive(Clone)]
pub struct PgScoreRepository {
    pool: PgPool,
    queries: Arc<ScoreQueries>,
}

struct ScoreQueries {
    create_table: String,
    create_index: String,
    insert: String,
    top: String,
    scores_ascending: String,
}

impl ScoreQueries {
    fn new(collection: &CollectionName) -> Self {
        let table = collection.quoted("");
        let index = collection.quoted("_score_idx");

        Self {
            create_table: format!(
                r#"
                CREATE TABLE IF NOT EXISTS {table} (
                    id UUID PRIMARY KEY,
                    name TEXT NOT NULL,
                    email TEXT,
                    user_id TEXT NOT NULL,
                    score BIGINT NOT NULL,
                    created_at TIMESTAMPTZ NOT NULL
                )
                "#
            ),
            create_index: format!(
                "CREATE INDEX IF NOT EXISTS {index} ON {table} (score ASC, created_at ASC)"
            ),
            insert: format!(
                r#"
                INSERT INTO {table} (
                    id,
                    name,
                    email,
                    user_id,
                    score,
                    created_at
                ) VALUES ($1, $2, $3, $4, $5, $6)
                "#
            ),
            top: format!(
                r#"
                SELECT
                    id,
                    name,
                    email,
                    user_id,
                    score,
                    created_at
                FROM {table}
                ORDER BY score ASC, created_at ASC
                LIMIT $1
                "#
            ),
            scores_ascending: format!(
                "SELECT score FROM {table} ORDER BY score ASC, created_at ASC"
            ),
        }
    }
}

impl PgScoreRepository {
    pub fn new(pool: PgPool, collection: &CollectionName) -> Self {
        Self {
            pool,
            queries: Arc::new(ScoreQueries::new(collection)),
        }
    }

    /// Create the score table and its ordering index if absent
    pub async fn ensure_collection(&self) -> ScoresResult<()> {
        sqlx::query(&self.queries.create_table)
            .execute(&self.pool)
            .await?;
        sqlx::query(&self.queries.create_index)
            .execute(&self.pool)
            .await?;

        tracing::info!("Score collection ready");

        Ok(())
    }
}

impl ScoreRepository for PgScoreRepository {
    async fn create(&self, entry: &ScoreEntry) -> ScoresResult<()> {
        sqlx::query(&self.queries.insert)
            .bind(entry.id.as_uuid())
            .bind(&entry.name)
            .bind(entry.email.as_deref())
            .bind(&entry.user_id)
            .bind(entry.score)
            .bind(entry.created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn top(&self, limit: u32) -> ScoresResult<Vec<ScoreEntry>> {
        let rows = sqlx::query_as::<_, ScoreEntryRow>(&self.queries.top)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ScoreEntryRow::into_entry).collect())
    }

    async fn scores_ascending(&self) -> ScoresResult<Vec<i64>> {
        let scores = sqlx::query_scalar::<_, i64>(&self.queries.scores_ascending)
            .fetch_all(&self.pool)
            .await?;

        Ok(scores)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ScoreEntryRow {
    id: Uuid,
    name: String,
    email: Option<String>,
    user_id: String,
    score: i64,
    created_at: DateTime<Utc>,
}

impl ScoreEntryRow {
    fn into_entry(self) -> ScoreEntry {
        ScoreEntry {
            id: ScoreEntryId::from_uuid(self.id),
            name: self.name,
            email: self.email,
            user_id: self.user_id,
            score: self.score,
            created_at: self.created_at,
        }
    }
}
