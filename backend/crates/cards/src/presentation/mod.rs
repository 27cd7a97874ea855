//! Presentation Layer - HTTP handlers and router

pub mod handlers;
pub mod router;
