//! Infrastructure Layer - Score stores

pub mod memory;
pub mod postgres;
