//! Domain Services
//!
//! Pure leaderboard logic.

use crate::domain::value_objects::{Rank, RankLookup};

/// Rank of `candidate` among `ascending` scores
///
/// The rank is one plus the index of the first equal score, so tied
/// entries share the best position. O(n).
pub fn rank_of(ascending: &[i64], candidate: i64) -> RankLookup {
    ascending
        .iter()
        .position(|&score| score == candidate)
        .and_then(|index| Rank::new(index as u64 + 1))
        .map_or(RankLookup::Unranked, RankLookup::Ranked)
}
