//! Infrastructure Layer - Deck sources

pub mod json_source;
