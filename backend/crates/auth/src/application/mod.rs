//! Application Layer - Use Cases

pub mod authenticate;
pub mod config;
