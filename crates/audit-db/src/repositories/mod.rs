//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in audit-core.

mod audit_log;
mod error;
mod user;

pub use audit_log::PgAuditLogRepository;
pub use user::PgUserRepository;
