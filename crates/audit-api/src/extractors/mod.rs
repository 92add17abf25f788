//! Axum extractors for request handling
//!
//! Custom extractors for validation, pagination and path ids.

mod pagination;
mod path;
mod validated;

pub use pagination::{Pagination, PaginationParams};
pub use path::{AuditLogIdPath, UserIdPath};
pub use validated::ValidatedJson;
