//! Audit log service
//!
//! Records entries on behalf of live users and reads them back, optionally
//! with the referenced user resolved.

use audit_core::entities::{AuditLog, NewAuditLog, User};
use audit_core::traits::AuditLogQuery;
use audit_core::{DomainError, Snowflake};
use tracing::{debug, info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// One page of a user's trail
#[derive(Debug, Clone)]
pub struct AuditLogPage {
    pub entries: Vec<AuditLog>,
    /// More entries exist past the last one in the direction of travel
    pub has_more: bool,
    pub limit: i64,
    /// All entries for the user, ignoring cursors
    pub total: i64,
}

/// Audit log service
pub struct AuditLogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditLogService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate and persist a new entry
    ///
    /// The referenced user must be live at write time; nothing ties the
    /// entry to the user afterwards.
    #[instrument(skip(self, new), fields(user_id = ?new.user_id, action = ?new.action))]
    pub async fn record(&self, new: NewAuditLog) -> ServiceResult<AuditLog> {
        new.validate()?;
        let user_id = new
            .user_id
            .ok_or(DomainError::MissingField("user_id"))?;

        if !self.ctx.user_repo().exists(user_id).await? {
            return Err(DomainError::UserNotFound(user_id).into());
        }

        let log = AuditLog::create(self.ctx.generate_id(), new)?;
        self.ctx.audit_log_repo().create(&log).await?;

        info!(
            audit_log_id = %log.id,
            user_id = %log.user_id,
            action = %log.action,
            "Audit entry recorded"
        );

        Ok(log)
    }

    /// Fetch an entry by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: Snowflake) -> ServiceResult<AuditLog> {
        self.ctx
            .audit_log_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::AuditLogNotFound(id).into())
    }

    /// Fetch an entry with its user resolved
    ///
    /// The user is `None` when the account no longer exists.
    #[instrument(skip(self))]
    pub async fn get_with_user(&self, id: Snowflake) -> ServiceResult<(AuditLog, Option<User>)> {
        let log = self.get(id).await?;
        let user = self.ctx.user_repo().find_by_id(log.user_id).await?;

        if user.is_none() {
            debug!(audit_log_id = %id, user_id = %log.user_id, "Referenced user is gone");
        }

        Ok((log, user))
    }

    /// List a user's entries with cursor pagination
    ///
    /// Works for deleted users too, since their entries outlive them.
    #[instrument(skip(self))]
    pub async fn list_for_user(
        &self,
        user_id: Snowflake,
        query: AuditLogQuery,
    ) -> ServiceResult<AuditLogPage> {
        if let (Some(before), Some(after)) = (query.before, query.after) {
            if after >= before {
                return Err(ServiceError::validation("after must be lower than before"));
            }
        }

        let limit = query.effective_limit();
        let repo = self.ctx.audit_log_repo();
        let entries = repo.find_by_user(user_id, query).await?;

        let has_more = match entries.last() {
            Some(last) if entries.len() as i64 == limit => {
                let lookahead = if query.after.is_some() {
                    AuditLogQuery {
                        before: query.before,
                        after: Some(last.id),
                        limit: 1,
                    }
                } else {
                    AuditLogQuery {
                        before: Some(last.id),
                        after: None,
                        limit: 1,
                    }
                };
                !repo.find_by_user(user_id, lookahead).await?.is_empty()
            }
            _ => false,
        };

        let total = repo.count_by_user(user_id).await?;

        Ok(AuditLogPage {
            entries,
            has_more,
            limit,
            total,
        })
    }
}
