//! Business logic services

pub mod audit_log;
pub mod context;
pub mod error;

pub use audit_log::{AuditLogPage, AuditLogService};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
