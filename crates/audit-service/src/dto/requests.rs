//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use audit_core::{NewAuditLog, Snowflake};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use validator::Validate;

/// Record an audit entry
///
/// Required fields are `Option`s so that a missing field surfaces as a
/// validation error with details rather than a JSON syntax rejection.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateAuditLogRequest {
    #[validate(required(message = "user_id is required"))]
    pub user_id: Option<Snowflake>,

    #[validate(
        required(message = "action is required"),
        length(min = 1, message = "action must not be empty")
    )]
    pub action: Option<String>,

    /// Any JSON value; `null` is treated as absent
    #[serde(default)]
    pub details: Option<JsonValue>,
}

impl From<CreateAuditLogRequest> for NewAuditLog {
    fn from(request: CreateAuditLogRequest) -> Self {
        NewAuditLog {
            user_id: request.user_id,
            action: request.action,
            details: request.details,
        }
    }
}
