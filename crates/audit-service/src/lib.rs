//! # audit-service
//!
//! Application layer: recording and reading audit entries, plus the DTOs the
//! HTTP layer serializes.

pub mod dto;
pub mod services;

pub use dto::{
    AuditLogResponse, AuditLogWithUserResponse, CreateAuditLogRequest, HealthChecks,
    HealthResponse, PaginatedResponse, PaginationMeta, ReadinessResponse, UserSummaryResponse,
};
pub use services::{
    AuditLogPage, AuditLogService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
