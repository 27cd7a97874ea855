//! Presentation Layer
//!
//! HTTP middleware guarding protected routes.

pub mod middleware;
