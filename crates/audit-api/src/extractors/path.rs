//! Path parameter extractors

use audit_core::Snowflake;
use serde::Deserialize;

use crate::response::ApiError;

/// Path parameters with audit_log_id
#[derive(Debug, Deserialize)]
pub struct AuditLogIdPath {
    pub audit_log_id: String,
}

impl AuditLogIdPath {
    pub fn audit_log_id(&self) -> Result<Snowflake, ApiError> {
        self.audit_log_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid audit_log_id format"))
    }
}

/// Path parameters with user_id
#[derive(Debug, Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}
