//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Uniform in-place shuffling
//! - Authorization header and client address extraction
//! - Outbound HTTP client construction

pub mod client;
pub mod http_client;
pub mod shuffle;
