//! # audit-core
//!
//! Domain layer for the audit trail: the audit entry and the user it points at,
//! time-ordered identifiers, domain errors, and the repository traits the
//! infrastructure layer implements. No database or web framework types appear here.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{AuditLog, NewAuditLog, User};
pub use error::DomainError;
pub use traits::{AuditLogQuery, AuditLogRepository, RepoResult, UserRepository};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
