//! Pagination extractor
//!
//! Extracts cursor-based pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use audit_core::{AuditLogQuery, Snowflake};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    /// Entries older than this ID
    #[serde(default)]
    pub before: Option<String>,
    /// Entries newer than this ID
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Validated pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub before: Option<Snowflake>,
    pub after: Option<Snowflake>,
    /// Clamped to 1..=100
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            before: None,
            after: None,
            limit: AuditLogQuery::DEFAULT_LIMIT,
        }
    }
}

fn parse_cursor(raw: Option<String>, name: &str) -> Result<Option<Snowflake>, ApiError> {
    raw.map(|s| {
        Snowflake::parse(&s).map_err(|_| ApiError::invalid_query(format!("Invalid '{name}' cursor format")))
    })
    .transpose()
}

impl TryFrom<PaginationParams> for Pagination {
    type Error = ApiError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        let before = parse_cursor(params.before, "before")?;
        let after = parse_cursor(params.after, "after")?;
        let limit = params
            .limit
            .unwrap_or(AuditLogQuery::DEFAULT_LIMIT)
            .clamp(1, AuditLogQuery::MAX_LIMIT);

        Ok(Pagination {
            before,
            after,
            limit,
        })
    }
}

impl From<Pagination> for AuditLogQuery {
    fn from(p: Pagination) -> Self {
        AuditLogQuery {
            before: p.before,
            after: p.after,
            limit: p.limit,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Pagination::try_from(params)
    }
}
