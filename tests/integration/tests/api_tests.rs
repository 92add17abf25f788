//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance reachable through
//! `DATABASE_URL`; migrations are applied on server start.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, test_snowflake, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Recording
// ============================================================================

#[tokio::test]
async fn test_record_without_details() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.create_user().await.unwrap();

    let response = server
        .post("/api/v1/audit-logs", &CreateAuditLog::new(user_id, "login"))
        .await
        .unwrap();
    let log: AuditLogBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(log.user_id, user_id.to_string());
    assert_eq!(log.action, "login");
    assert!(log.details.is_none());
    assert_eq!(log.created_at, log.updated_at);
}

#[tokio::test]
async fn test_record_with_nested_details() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.create_user().await.unwrap();
    let details = json!({
        "class": {"id": 12, "name": "Algebra"},
        "marked": [{"student": 1, "present": true}, {"student": 2, "present": false}]
    });

    let request = CreateAuditLog::new(user_id, "mark_attendance").with_details(details.clone());
    let response = server.post("/api/v1/audit-logs", &request).await.unwrap();
    let created: AuditLogBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/v1/audit-logs/{}", created.id))
        .await
        .unwrap();
    let fetched: AuditLogWithUserBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.log.details, Some(details));
}

#[tokio::test]
async fn test_record_missing_fields_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.create_user().await.unwrap();

    let no_user = CreateAuditLog {
        user_id: None,
        action: Some("login".to_string()),
        details: None,
    };
    let response = server.post("/api/v1/audit-logs", &no_user).await.unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "VALIDATION_ERROR");
    assert!(err.error.details.unwrap()["user_id"].is_array());

    let no_action = CreateAuditLog {
        user_id: Some(user_id.to_string()),
        action: None,
        details: Some(json!({"ip": "10.0.0.1"})),
    };
    let response = server.post("/api/v1/audit-logs", &no_action).await.unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(err.error.details.unwrap()["action"].is_array());

    let response = server
        .post("/api/v1/audit-logs", &CreateAuditLog::new(user_id, ""))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_record_unknown_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/audit-logs", &CreateAuditLog::new(test_snowflake(), "login"))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_USER");
}

#[tokio::test]
async fn test_malformed_body() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/audit-logs", &json!({"user_id": "abc", "action": "login"}))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "INVALID_BODY");
}

// ============================================================================
// Reading
// ============================================================================

#[tokio::test]
async fn test_get_populates_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.create_user().await.unwrap();

    let response = server
        .post("/api/v1/audit-logs", &CreateAuditLog::new(user_id, "login"))
        .await
        .unwrap();
    let created: AuditLogBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/v1/audit-logs/{}", created.id))
        .await
        .unwrap();
    let fetched: AuditLogWithUserBody = assert_json(response, StatusCode::OK).await.unwrap();

    let user = fetched.user.expect("user should be populated");
    assert_eq!(user.id, user_id.to_string());
    assert_eq!(user.username, format!("itest_{user_id}"));
    assert!(user.email.ends_with("@example.com"));
}

#[tokio::test]
async fn test_get_after_user_deleted() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.create_user().await.unwrap();

    let response = server
        .post("/api/v1/audit-logs", &CreateAuditLog::new(user_id, "login"))
        .await
        .unwrap();
    let created: AuditLogBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    server.delete_user(user_id).await.unwrap();

    let response = server
        .get(&format!("/api/v1/audit-logs/{}", created.id))
        .await
        .unwrap();
    let fetched: AuditLogWithUserBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.log.user_id, user_id.to_string());
    assert!(fetched.user.is_none());
}

#[tokio::test]
async fn test_get_unknown_and_invalid_ids() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get(&format!("/api/v1/audit-logs/{}", test_snowflake()))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_AUDIT_LOG");

    let response = server.get("/api/v1/audit-logs/not-a-number").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_two_entries_for_same_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.create_user().await.unwrap();

    let mut ids = Vec::new();
    for action in ["login", "logout"] {
        let response = server
            .post("/api/v1/audit-logs", &CreateAuditLog::new(user_id, action))
            .await
            .unwrap();
        let log: AuditLogBody = assert_json(response, StatusCode::CREATED).await.unwrap();
        ids.push(log.id);
    }
    assert_ne!(ids[0], ids[1]);

    for (id, action) in ids.iter().zip(["login", "logout"]) {
        let response = server.get(&format!("/api/v1/audit-logs/{id}")).await.unwrap();
        let fetched: AuditLogWithUserBody = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(fetched.log.action, action);
    }
}

#[tokio::test]
async fn test_list_user_entries() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.create_user().await.unwrap();

    for i in 0..3 {
        let response = server
            .post(
                "/api/v1/audit-logs",
                &CreateAuditLog::new(user_id, &format!("action_{i}")),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get(&format!("/api/v1/users/{user_id}/audit-logs?limit=2"))
        .await
        .unwrap();
    let page: PageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].action, "action_2");
    assert_eq!(page.data[1].action, "action_1");
    assert!(page.pagination.has_more);
    assert_eq!(page.pagination.limit, 2);
    assert_eq!(page.pagination.total, 3);

    let before = page.pagination.before.expect("cursor");
    let response = server
        .get(&format!("/api/v1/users/{user_id}/audit-logs?before={before}&limit=2"))
        .await
        .unwrap();
    let rest: PageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rest.data.len(), 1);
    assert_eq!(rest.data[0].action, "action_0");
    assert!(!rest.pagination.has_more);
    assert!(rest.pagination.after.is_some());
}
