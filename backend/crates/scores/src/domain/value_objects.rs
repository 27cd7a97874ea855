//! Value Objects

use std::fmt;

use crate::error::{ScoresError, ScoresResult};

/// 1-based leaderboard position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank(u64);

impl Rank {
    /// `None` for zero
    pub fn new(position: u64) -> Option<Self> {
        (position > 0).then_some(Self(position))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Outcome of a rank computation that reached the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankLookup {
    Ranked(Rank),
    /// The store is empty or holds no entry with this score
    Unranked,
}

/// PostgreSQL's identifier length limit
const MAX_COLLECTION_NAME_LEN: usize = 63;

/// Name of the table scores are stored in
///
/// ASCII alphanumerics, `_` and `-` only, at most 63 bytes. Always used
/// quoted, so hyphens and mixed case are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionName(String);

impl CollectionName {
    pub fn parse(raw: &str) -> ScoresResult<Self> {
        let valid = !raw.is_empty()
            && raw.len() <= MAX_COLLECTION_NAME_LEN
            && raw
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');

        if !valid {
            return Err(ScoresError::InvalidCollection(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Quoted SQL identifier, optionally suffixed
    pub fn quoted(&self, suffix: &str) -> String {
        format!("\"{}{}\"", self.0, suffix)
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
