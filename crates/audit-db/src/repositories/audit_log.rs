//! PostgreSQL implementation of AuditLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use audit_core::entities::AuditLog;
use audit_core::error::DomainError;
use audit_core::traits::{AuditLogQuery, AuditLogRepository, RepoResult};
use audit_core::value_objects::Snowflake;

use crate::mappers::AuditLogInsert;
use crate::models::AuditLogModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of AuditLogRepository
#[derive(Clone)]
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    /// Create a new PgAuditLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<AuditLog>> {
        let result = sqlx::query_as::<_, AuditLogModel>(
            r"
            SELECT id, user_id, action, details, created_at, updated_at
            FROM audit_logs
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(AuditLog::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(
        &self,
        user_id: Snowflake,
        query: AuditLogQuery,
    ) -> RepoResult<Vec<AuditLog>> {
        let limit = query.effective_limit();

        let results = match (query.before, query.after) {
            (_, Some(after)) => {
                // Paging forward: oldest first from the cursor
                sqlx::query_as::<_, AuditLogModel>(
                    r"
                    SELECT id, user_id, action, details, created_at, updated_at
                    FROM audit_logs
                    WHERE user_id = $1 AND id > $2 AND ($3::BIGINT IS NULL OR id < $3)
                    ORDER BY id ASC
                    LIMIT $4
                    ",
                )
                .bind(user_id.into_inner())
                .bind(after.into_inner())
                .bind(query.before.map(Snowflake::into_inner))
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            (Some(before), None) => {
                sqlx::query_as::<_, AuditLogModel>(
                    r"
                    SELECT id, user_id, action, details, created_at, updated_at
                    FROM audit_logs
                    WHERE user_id = $1 AND id < $2
                    ORDER BY id DESC
                    LIMIT $3
                    ",
                )
                .bind(user_id.into_inner())
                .bind(before.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            (None, None) => {
                sqlx::query_as::<_, AuditLogModel>(
                    r"
                    SELECT id, user_id, action, details, created_at, updated_at
                    FROM audit_logs
                    WHERE user_id = $1
                    ORDER BY id DESC
                    LIMIT $2
                    ",
                )
                .bind(user_id.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(AuditLog::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_user(&self, user_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM audit_logs WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, log), fields(id = %log.id, user_id = %log.user_id))]
    async fn create(&self, log: &AuditLog) -> RepoResult<()> {
        let insert = AuditLogInsert::new(log);

        sqlx::query(
            r"
            INSERT INTO audit_logs (id, user_id, action, details, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(insert.id)
        .bind(insert.user_id)
        .bind(insert.action)
        .bind(insert.details)
        .bind(log.created_at)
        .bind(log.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AuditLogExists(log.id)))?;

        Ok(())
    }
}
