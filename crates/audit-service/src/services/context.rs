//! Service context - dependency container for services

use std::sync::Arc;

use audit_core::traits::{AuditLogRepository, UserRepository};
use audit_core::{Snowflake, SnowflakeGenerator};
use audit_db::{PgAuditLogRepository, PgPool, PgUserRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every field is reference counted.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    audit_log_repo: Arc<dyn AuditLogRepository>,
    user_repo: Arc<dyn UserRepository>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    pub fn new(
        pool: PgPool,
        audit_log_repo: Arc<dyn AuditLogRepository>,
        user_repo: Arc<dyn UserRepository>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            pool,
            audit_log_repo,
            user_repo,
            snowflake_generator,
        }
    }

    /// Wire the PostgreSQL repositories over a single pool
    pub fn with_postgres(pool: PgPool, worker_id: u16) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(PgAuditLogRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool)),
            Arc::new(SnowflakeGenerator::new(worker_id)),
        )
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn audit_log_repo(&self) -> &dyn AuditLogRepository {
        self.audit_log_repo.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("snowflake_generator", &self.snowflake_generator)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    audit_log_repo: Option<Arc<dyn AuditLogRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn audit_log_repo(mut self, repo: Arc<dyn AuditLogRepository>) -> Self {
        self.audit_log_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// A missing generator defaults to worker 0.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the pool or a repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.audit_log_repo
                .ok_or_else(|| ServiceError::validation("audit_log_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.snowflake_generator
                .unwrap_or_else(|| Arc::new(SnowflakeGenerator::new(0))),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_pool() {
        let err = ServiceContextBuilder::new().build().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: pool is required");
    }

    #[tokio::test]
    async fn test_with_postgres_wires_generator() {
        let pool = PgPool::connect_lazy("postgres://localhost/unused").unwrap();
        let ctx = ServiceContext::with_postgres(pool, 12);
        assert_eq!(ctx.generate_id().worker_id(), 12);
    }
}
