//! Application Layer - Use Cases

pub mod deal_deck;
