//! Application Configuration

use crate::domain::value_objects::CollectionName;
use crate::error::ScoresResult;

/// Default score table name
pub const DEFAULT_COLLECTION_NAME: &str = "match-high-scores";

/// Scores application configuration
#[derive(Debug, Clone)]
pub struct ScoresConfig {
    /// Score table name, validated by [`ScoresConfig::collection`]
    pub collection_name: String,
    /// Number of entries on the leaderboard
    pub leaderboard_size: u32,
}

impl Default for ScoresConfig {
    fn default() -> Self {
        Self {
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            leaderboard_size: 10,
        }
    }
}

impl ScoresConfig {
    pub fn collection(&self) -> ScoresResult<CollectionName> {
        CollectionName::parse(&self.collection_name)
    }
}
