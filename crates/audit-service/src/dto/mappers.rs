//! Entity to DTO mappers

use audit_core::entities::{AuditLog, User};

use super::responses::{
    AuditLogResponse, AuditLogWithUserResponse, PaginatedResponse, PaginationMeta,
    UserSummaryResponse,
};
use crate::services::AuditLogPage;

impl From<&AuditLog> for AuditLogResponse {
    fn from(log: &AuditLog) -> Self {
        Self {
            id: log.id.to_string(),
            user_id: log.user_id.to_string(),
            action: log.action.clone(),
            details: log.details.clone(),
            created_at: log.created_at,
            updated_at: log.updated_at,
        }
    }
}

impl From<AuditLog> for AuditLogResponse {
    fn from(log: AuditLog) -> Self {
        Self {
            id: log.id.to_string(),
            user_id: log.user_id.to_string(),
            action: log.action,
            details: log.details,
            created_at: log.created_at,
            updated_at: log.updated_at,
        }
    }
}

impl From<&User> for UserSummaryResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<(AuditLog, Option<User>)> for AuditLogWithUserResponse {
    fn from((log, user): (AuditLog, Option<User>)) -> Self {
        Self {
            log: log.into(),
            user: user.as_ref().map(UserSummaryResponse::from),
        }
    }
}

impl From<AuditLogPage> for PaginatedResponse<AuditLogResponse> {
    fn from(page: AuditLogPage) -> Self {
        // Cursors point past both ends of the page regardless of its order
        let before = page.entries.iter().map(|l| l.id).min().map(|id| id.to_string());
        let after = page.entries.iter().map(|l| l.id).max().map(|id| id.to_string());

        Self {
            data: page.entries.into_iter().map(AuditLogResponse::from).collect(),
            pagination: PaginationMeta {
                before,
                after,
                has_more: page.has_more,
                limit: page.limit,
                total: page.total,
            },
        }
    }
}
