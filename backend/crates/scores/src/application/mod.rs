//! Application Layer - Use Cases

pub mod config;
pub mod list_top_scores;
pub mod rank_score;
pub mod record_score;

pub use list_top_scores::ListTopScoresUseCase;
pub use rank_score::RankScoreUseCase;
pub use record_score::{RecordScoreInput, RecordScoreOutput, RecordScoreUseCase};
