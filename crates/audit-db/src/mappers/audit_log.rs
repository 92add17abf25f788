//! Audit log entity <-> model mapper

use audit_core::entities::AuditLog;
use audit_core::value_objects::Snowflake;
use serde_json::Value as JsonValue;

use crate::models::AuditLogModel;

/// Convert AuditLogModel to AuditLog entity
impl From<AuditLogModel> for AuditLog {
    fn from(model: AuditLogModel) -> Self {
        AuditLog {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            action: model.action,
            // A JSON null stored by another writer reads back as absent
            details: model.details.filter(|v| !v.is_null()),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Borrowed column values for inserting an audit log
pub struct AuditLogInsert<'a> {
    pub id: i64,
    pub user_id: i64,
    pub action: &'a str,
    pub details: Option<&'a JsonValue>,
}

impl<'a> AuditLogInsert<'a> {
    pub fn new(log: &'a AuditLog) -> Self {
        Self {
            id: log.id.into_inner(),
            user_id: log.user_id.into_inner(),
            action: &log.action,
            details: log.details.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn model(details: Option<JsonValue>) -> AuditLogModel {
        let now = Utc::now();
        AuditLogModel {
            id: 11,
            user_id: 22,
            action: "login".to_string(),
            details,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_model_to_entity() {
        let log = AuditLog::from(model(Some(json!({"ip": "127.0.0.1"}))));
        assert_eq!(log.id, Snowflake::new(11));
        assert_eq!(log.user_id, Snowflake::new(22));
        assert_eq!(log.action, "login");
        assert_eq!(log.details, Some(json!({"ip": "127.0.0.1"})));
    }

    #[test]
    fn test_json_null_reads_as_absent() {
        let log = AuditLog::from(model(Some(JsonValue::Null)));
        assert!(log.details.is_none());
    }

    #[test]
    fn test_insert_borrows_entity() {
        let log = AuditLog::from(model(Some(json!([1, 2, 3]))));
        let insert = AuditLogInsert::new(&log);
        assert_eq!(insert.id, 11);
        assert_eq!(insert.user_id, 22);
        assert_eq!(insert.action, "login");
        assert_eq!(insert.details, Some(&json!([1, 2, 3])));
    }
}
