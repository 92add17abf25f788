//! Audit log entity - records that a user performed an action

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Unvalidated insert shape for an audit entry
///
/// Every field may be absent, mirroring a document handed to the persistence
/// layer before validation. [`AuditLog::create`] turns it into a record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAuditLog {
    pub user_id: Option<Snowflake>,
    pub action: Option<String>,
    pub details: Option<JsonValue>,
}

impl NewAuditLog {
    /// Shorthand for the common case where both required fields are known
    pub fn new(user_id: Snowflake, action: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            action: Some(action.into()),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: JsonValue) -> Self {
        self.details = Some(details);
        self
    }

    /// Check the required fields. `details` is never inspected.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self.user_id {
            Some(id) if !id.is_zero() => {}
            _ => return Err(DomainError::MissingField("user_id")),
        }

        match self.action.as_deref() {
            None => Err(DomainError::MissingField("action")),
            Some("") => Err(DomainError::EmptyAction),
            Some(_) => Ok(()),
        }
    }
}

/// Audit log entry
///
/// Immutable once created: the trail exposes no update or delete, so
/// `updated_at` equals `created_at` for every stored record.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditLog {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub action: String,
    pub details: Option<JsonValue>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AuditLog {
    /// Validate `new` and build the record with both timestamps set to now
    pub fn create(id: Snowflake, new: NewAuditLog) -> Result<Self, DomainError> {
        new.validate()?;

        let NewAuditLog {
            user_id,
            action,
            details,
        } = new;
        let (Some(user_id), Some(action)) = (user_id, action) else {
            return Err(DomainError::InternalError(
                "validated audit log lost a required field".to_string(),
            ));
        };

        let now = Utc::now();
        Ok(Self {
            id,
            user_id,
            action,
            details: details.filter(|v| !v.is_null()),
            created_at: now,
            updated_at: now,
        })
    }
}
