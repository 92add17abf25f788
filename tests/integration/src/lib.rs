//! Integration test utilities for the audit trail API
//!
//! Spawns the real Axum app on an ephemeral port against the database named
//! by `DATABASE_URL`.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
