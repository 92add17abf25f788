//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer states what it needs; `audit-db` provides the
//! PostgreSQL implementation.

use async_trait::async_trait;

use crate::entities::{AuditLog, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Audit Log Repository
// ============================================================================

/// Cursor pagination over audit log ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditLogQuery {
    pub before: Option<Snowflake>,
    pub after: Option<Snowflake>,
    pub limit: i64,
}

impl AuditLogQuery {
    pub const DEFAULT_LIMIT: i64 = 50;
    pub const MAX_LIMIT: i64 = 100;

    /// Limit clamped to 1..=MAX_LIMIT
    pub fn effective_limit(&self) -> i64 {
        self.limit.clamp(1, Self::MAX_LIMIT)
    }
}

impl Default for AuditLogQuery {
    fn default() -> Self {
        Self {
            before: None,
            after: None,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Append-only store of audit entries
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Find an entry by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<AuditLog>>;

    /// List a user's entries, newest first unless paging forward with `after`
    async fn find_by_user(&self, user_id: Snowflake, query: AuditLogQuery)
        -> RepoResult<Vec<AuditLog>>;

    /// Count all entries referencing a user
    async fn count_by_user(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Persist a new entry
    async fn create(&self, log: &AuditLog) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a live (not deleted) user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Check whether a live user exists
    async fn exists(&self, id: Snowflake) -> RepoResult<bool>;
}
