//! Database models - SQLx-compatible structs for PostgreSQL tables

mod audit_log;
mod user;

pub use audit_log::AuditLogModel;
pub use user::UserModel;
