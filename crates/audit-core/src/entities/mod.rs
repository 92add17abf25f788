//! Domain entities

mod audit_log;
mod user;

pub use audit_log::{AuditLog, NewAuditLog};
pub use user::User;
