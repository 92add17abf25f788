//! Audit log handlers
//!
//! Entries are append-only: there are no update or delete endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use audit_service::{
    AuditLogResponse, AuditLogService, AuditLogWithUserResponse, CreateAuditLogRequest,
    PaginatedResponse,
};

use crate::extractors::{AuditLogIdPath, Pagination, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Record an audit entry
///
/// POST /audit-logs
pub async fn create_audit_log(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateAuditLogRequest>,
) -> ApiResult<Created<Json<AuditLogResponse>>> {
    let service = AuditLogService::new(state.service_context());
    let log = service.record(request.into()).await?;
    Ok(Created(Json(log.into())))
}

/// Get an audit entry with its user populated
///
/// GET /audit-logs/{audit_log_id}
pub async fn get_audit_log(
    State(state): State<AppState>,
    Path(path): Path<AuditLogIdPath>,
) -> ApiResult<Json<AuditLogWithUserResponse>> {
    let id = path.audit_log_id()?;

    let service = AuditLogService::new(state.service_context());
    let entry = service.get_with_user(id).await?;
    Ok(Json(entry.into()))
}

/// List a user's audit entries
///
/// GET /users/{user_id}/audit-logs
pub async fn get_user_audit_logs(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<AuditLogResponse>>> {
    let user_id = path.user_id()?;

    let service = AuditLogService::new(state.service_context());
    let page = service.list_for_user(user_id, pagination.into()).await?;
    Ok(Json(page.into()))
}
