//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, comment_payload, created_id, feedback_payload,
    reaction_payload, reaction_payload_str, TestServer,
};
use reqwest::StatusCode;
use serde_json::Value;

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
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Feedback Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_feedback() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/feedback", &feedback_payload(5)).await.unwrap();
    let id = created_id(response).await.unwrap();

    let response = server.get(&format!("/feedback/{id}")).await.unwrap();
    let feedback: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(feedback["id"], id);
    assert_eq!(feedback["grade"], 5);
    assert_eq!(feedback["score"], 1);
}

#[tokio::test]
async fn test_list_feedbacks_contains_created() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/feedback", &feedback_payload(3)).await.unwrap();
    let id = created_id(response).await.unwrap();

    let response = server.get("/feedback").await.unwrap();
    let feedbacks: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(feedbacks.iter().any(|f| f["id"] == id));
}

#[tokio::test]
async fn test_get_missing_feedback() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/feedback/999999999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_feedback_rejects_long_source() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let mut payload = feedback_payload(5);
    payload["source"] = "a-way-too-long-source-address".into();
    let response = server.post("/feedback", &payload).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_create_feedback_rejects_grade_beyond_column_width() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // 2^32 + 5 must be rejected, not stored as 5
    let mut payload = feedback_payload(5);
    payload["grade"] = 4_294_967_301_i64.into();
    let response = server.post("/feedback", &payload).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_comment() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/feedback", &feedback_payload(4)).await.unwrap();
    let feedback_id = created_id(response).await.unwrap();

    let response = server
        .post("/comment", &comment_payload(feedback_id))
        .await
        .unwrap();
    let comment_id = created_id(response).await.unwrap();

    let response = server.get(&format!("/comment/{comment_id}")).await.unwrap();
    let comment: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(comment["target"], feedback_id);
    assert_eq!(comment["score"], 1);
}

#[tokio::test]
async fn test_create_comment_against_missing_feedback() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/comment", &comment_payload(999_999_999))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_feedback_comments_listing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/feedback", &feedback_payload(4)).await.unwrap();
    let feedback_id = created_id(response).await.unwrap();

    // No comments yet: the listing reports not-found
    let response = server
        .get(&format!("/feedback/{feedback_id}/comments"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Attach two comments
    for _ in 0..2 {
        let response = server
            .post("/comment", &comment_payload(feedback_id))
            .await
            .unwrap();
        created_id(response).await.unwrap();
    }

    let response = server
        .get(&format!("/feedback/{feedback_id}/comments"))
        .await
        .unwrap();
    let comments: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 2);
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_react_to_feedback() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/feedback", &feedback_payload(5)).await.unwrap();
    let feedback_id = created_id(response).await.unwrap();

    let response = server
        .put(&format!("/feedback/{feedback_id}"), &reaction_payload(1))
        .await
        .unwrap();
    created_id(response).await.unwrap();

    let response = server.get("/reaction").await.unwrap();
    let reactions: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(reactions
        .iter()
        .any(|r| r["fb_id"] == feedback_id && r["cmt_id"].is_null()));
}

#[tokio::test]
async fn test_react_with_string_value() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/feedback", &feedback_payload(5)).await.unwrap();
    let feedback_id = created_id(response).await.unwrap();

    let response = server
        .put(
            &format!("/feedback/{feedback_id}"),
            &reaction_payload_str("-1"),
        )
        .await
        .unwrap();
    created_id(response).await.unwrap();
}

#[tokio::test]
async fn test_react_invalid_value() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/feedback", &feedback_payload(5)).await.unwrap();
    let feedback_id = created_id(response).await.unwrap();

    let response = server
        .put(&format!("/feedback/{feedback_id}"), &reaction_payload(0))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_react_to_missing_target() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .put("/feedback/999999999", &reaction_payload(1))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Reconciliation Tests
// ============================================================================

#[tokio::test]
async fn test_feedback_score_reconciliation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/feedback", &feedback_payload(5)).await.unwrap();
    let feedback_id = created_id(response).await.unwrap();

    // Two upvotes and one downvote
    for value in [1, 1, -1] {
        let response = server
            .put(&format!("/feedback/{feedback_id}"), &reaction_payload(value))
            .await
            .unwrap();
        created_id(response).await.unwrap();
    }

    let response = server.get("/test").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/feedback/{feedback_id}")).await.unwrap();
    let feedback: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feedback["score"], 2);
}

#[tokio::test]
async fn test_comment_score_reconciliation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/feedback", &feedback_payload(5)).await.unwrap();
    let feedback_id = created_id(response).await.unwrap();

    let response = server
        .post("/comment", &comment_payload(feedback_id))
        .await
        .unwrap();
    let comment_id = created_id(response).await.unwrap();

    let response = server
        .put(&format!("/comment/{comment_id}"), &reaction_payload(-1))
        .await
        .unwrap();
    created_id(response).await.unwrap();

    let response = server.get("/test").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Comment scores have no base offset
    let response = server.get(&format!("/comment/{comment_id}")).await.unwrap();
    let comment: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comment["score"], -1);

    // The feedback's own score is untouched by its comment's reaction
    let response = server.get(&format!("/feedback/{feedback_id}")).await.unwrap();
    let feedback: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feedback["score"], 1);
}

#[tokio::test]
async fn test_reconciliation_is_idempotent() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/feedback", &feedback_payload(5)).await.unwrap();
    let feedback_id = created_id(response).await.unwrap();

    let response = server
        .put(&format!("/feedback/{feedback_id}"), &reaction_payload(1))
        .await
        .unwrap();
    created_id(response).await.unwrap();

    for _ in 0..2 {
        let response = server.get("/test").await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get(&format!("/feedback/{feedback_id}")).await.unwrap();
    let feedback: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feedback["score"], 2);
}
