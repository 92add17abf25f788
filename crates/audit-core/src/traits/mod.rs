//! Repository traits (ports)

mod repositories;

pub use repositories::{AuditLogQuery, AuditLogRepository, RepoResult, UserRepository};
