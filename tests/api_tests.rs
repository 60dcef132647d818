use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use suggestorx_api::api::{create_router, AppState};
use suggestorx_api::config::Config;

const SESSION: HeaderName = HeaderName::from_static("x-session-id");

fn create_test_server() -> TestServer {
    let state = AppState::new();
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

async fn sign_in(server: &TestServer, email: &str) -> HeaderValue {
    let response = server
        .post("/api/v1/sessions")
        .json(&json!({
            "email": email,
            "password": "whatever"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    HeaderValue::from_str(body["sessionId"].as_str().unwrap()).unwrap()
}

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["activeSessions"], 0);

    sign_in(&server, "isha@example.com").await;
    let body: Value = server.get("/health").await.json();
    assert_eq!(body["activeSessions"], 1);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let request_id = "6f1c1a36-7b53-4c1f-9a60-4a4c8d2f1e11";

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static(request_id),
        )
        .await;
    assert_eq!(response.header("x-request-id"), request_id);

    let response = server.get("/health").await;
    assert!(!response.header("x-request-id").is_empty());
}

#[tokio::test]
async fn test_login_returns_session_and_profile() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/sessions")
        .json(&json!({
            "email": "ISHA@example.com",
            "password": "x"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert!(body["sessionId"].is_string());
    assert_eq!(body["profile"]["firstName"], "Isha");
    assert_eq!(body["profile"]["purchaseHistory"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_login_unknown_user() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/sessions")
        .json(&json!({
            "email": "nobody@example.com",
            "password": "x"
        }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_login_requires_password() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/sessions")
        .json(&json!({
            "email": "isha@example.com",
            "password": ""
        }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["fields"]["password"][0], "Please enter your password.");
}

#[tokio::test]
async fn test_session_routes_require_session() {
    let server = create_test_server();

    server
        .get("/api/v1/profile")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .get("/api/v1/dashboard")
        .add_header(SESSION, HeaderValue::from_static("not-a-session"))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .get("/api/v1/recommendations")
        .add_header(
            SESSION,
            HeaderValue::from_static("0b6f1f0e-4c4e-4a8e-9d43-1f2a3b4c5d6e"),
        )
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_recommendations_default_and_custom_limit() {
    let server = create_test_server();
    let session = sign_in(&server, "isha@example.com").await;

    let response = server
        .get("/api/v1/recommendations")
        .add_header(SESSION, session.clone())
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        ids(&body),
        vec!["rec1", "rec2", "rec3", "rec4", "rec5", "rec6"]
    );
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["relevanceScore"] == 100));

    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("limit", 2)
        .add_header(SESSION, session.clone())
        .await;
    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 2);

    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("limit", 0)
        .add_header(SESSION, session)
        .await;
    let body: Value = response.json();
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_score_breakdown() {
    let server = create_test_server();
    let session = sign_in(&server, "isha@example.com").await;

    let response = server
        .get("/api/v1/recommendations/rec6/breakdown")
        .add_header(SESSION, session.clone())
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["candidateId"], "rec6");
    assert_eq!(body["age"], 10.0);
    assert_eq!(body["occupation"], 8.0);
    assert_eq!(body["relevanceScore"], 100);

    server
        .get("/api/v1/recommendations/rec99/breakdown")
        .add_header(SESSION, session)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stateless_scoring() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/recommendations/score")
        .json(&json!({ "limit": 4 }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body.as_array().unwrap().is_empty());

    let response = server
        .post("/api/v1/recommendations/score")
        .json(&json!({
            "limit": 3,
            "profile": {
                "id": "guest",
                "firstName": "Guest",
                "lastName": "User",
                "email": "guest@example.com",
                "age": 27,
                "occupation": "Teacher",
                "location": "Boston",
                "engagementScore": 0,
                "sentimentScore": 0
            }
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    // No bonuses apply, so base relevance decides
    assert_eq!(ids(&body), vec!["rec10", "rec1", "rec8"]);
    assert_eq!(body[0]["relevanceScore"], 96);
    assert_eq!(body[0]["baseRelevance"], 96);
}

#[tokio::test]
async fn test_profile_update_flow() {
    let server = create_test_server();
    let session = sign_in(&server, "nikitha@example.com").await;

    let response = server
        .patch("/api/v1/profile")
        .add_header(SESSION, session.clone())
        .json(&json!({
            "bio": "Reader and traveller.",
            "interests": ["travel", "yoga", "unknown"],
            "socialMediaActivity": "high"
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["bio"], "Reader and traveller.");
    assert_eq!(body["interests"].as_array().unwrap().len(), 2);
    assert_eq!(body["socialMediaActivity"], "high");

    let response = server
        .get("/api/v1/profile")
        .add_header(SESSION, session.clone())
        .await;
    let body: Value = response.json();
    assert_eq!(body["interests"][0]["id"], "travel");

    let response = server
        .patch("/api/v1/profile")
        .add_header(SESSION, session)
        .json(&json!({ "age": 150, "firstName": "N" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert!(body["fields"]["age"].is_array());
    assert!(body["fields"]["first_name"].is_array());
}

#[tokio::test]
async fn test_interest_catalog() {
    let server = create_test_server();
    let response = server.get("/api/v1/interests").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["financial"].as_array().unwrap().len(), 5);
    assert!(body["entertainment"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_dashboard() {
    let server = create_test_server();
    let session = sign_in(&server, "isha@example.com").await;

    let response = server
        .get("/api/v1/dashboard")
        .add_header(SESSION, session)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["greeting"].as_str().unwrap().ends_with(", Isha!"));
    assert_eq!(body["top"].as_array().unwrap().len(), 9);
    assert_eq!(ids(&body["financial"]), vec!["rec1", "rec2", "rec3"]);
    assert_eq!(ids(&body["products"]), vec!["rec6"]);
    assert_eq!(ids(&body["lifestyle"]), vec!["rec5", "rec7"]);
    assert_eq!(body["transactions"][0]["id"], "p3");
    assert_eq!(body["insights"]["financialPatterns"]["available"], true);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let server = create_test_server();
    let session = sign_in(&server, "isha@example.com").await;

    server
        .delete("/api/v1/sessions/current")
        .add_header(SESSION, session.clone())
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get("/api/v1/profile")
        .add_header(SESSION, session)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sessions_survive_restart_with_file_slot() {
    let path = std::env::temp_dir()
        .join(format!("suggestorx-api-test-{}", uuid::Uuid::new_v4()))
        .join("session.json");
    let config = Config {
        session_file: Some(path.clone()),
        ..Config::default()
    };

    let server = TestServer::new(create_router(AppState::from_config(config.clone()))).unwrap();
    let session = sign_in(&server, "isha@example.com").await;
    assert!(path.exists());

    let restarted = AppState::from_config(config);
    assert_eq!(restarted.restore_sessions().await.unwrap(), 1);
    let server = TestServer::new(create_router(restarted)).unwrap();

    let response = server
        .get("/api/v1/profile")
        .add_header(SESSION, session)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["firstName"], "Isha");

    if let Some(parent) = path.parent() {
        let _ = std::fs::remove_dir_all(parent);
    }
}
