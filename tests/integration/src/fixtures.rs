//! Request and response shapes used by the API tests

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Record request
#[derive(Debug, Serialize)]
pub struct CreateAuditLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
}

impl CreateAuditLog {
    pub fn new(user_id: impl ToString, action: &str) -> Self {
        Self {
            user_id: Some(user_id.to_string()),
            action: Some(action.to_string()),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: JsonValue) -> Self {
        self.details = Some(details);
        self
    }
}

/// Entry as returned by the API
#[derive(Debug, Deserialize)]
pub struct AuditLogBody {
    pub id: String,
    pub user_id: String,
    pub action: String,
    pub details: Option<JsonValue>,
    pub created_at: String,
    pub updated_at: String,
}

/// Entry with its user resolved
#[derive(Debug, Deserialize)]
pub struct AuditLogWithUserBody {
    #[serde(flatten)]
    pub log: AuditLogBody,
    pub user: Option<UserBody>,
}

#[derive(Debug, Deserialize)]
pub struct UserBody {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct PageBody {
    pub data: Vec<AuditLogBody>,
    pub pagination: PaginationBody,
}

#[derive(Debug, Deserialize)]
pub struct PaginationBody {
    pub before: Option<String>,
    pub after: Option<String>,
    pub has_more: bool,
    pub limit: i64,
    pub total: i64,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: Option<JsonValue>,
}
