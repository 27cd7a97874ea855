//! Domain Layer
//!
//! This layer contains:
//! - Bearer token and verified identity value objects
//! - The identity provider trait (interface)

pub mod identity;
pub mod provider;
