//! User entity - the identity an audit entry points at

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User as seen by the audit trail
///
/// Accounts are managed elsewhere; the trail only reads them to check a
/// reference at write time and to resolve it at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            created_at: now,
            updated_at: now,
        }
    }
}
