use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
};
use chrono::Utc;
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use tower::ServiceExt;
use trailmatch_entities::{profile, user_swipe};
use trailmatch_server::{api, utils::AppState};
use uuid::Uuid;

fn test_app(db: DatabaseConnection) -> Router {
  Router::new().merge(api::app()).with_state(AppState::new(db))
}

fn profile_row(id: Uuid) -> profile::Model {
  profile::Model {
    id,
    display_name: "hiker".to_owned(),
    bio: None,
    created_at: Utc::now().into(),
  }
}

#[tokio::test]
async fn recommendations_with_empty_pool_returns_empty_list() {
  let db = MockDatabase::new(DatabaseBackend::Postgres)
    .append_query_results([Vec::<profile::Model>::new()])
    .append_query_results([Vec::<user_swipe::Model>::new()])
    .into_connection();
  let app = test_app(db);

  let user_id = Uuid::new_v4();
  let response = app
    .oneshot(
      Request::builder()
        .uri(format!("/api/v0/recommendations/{user_id}"))
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::OK);

  let body = response.into_body().collect().await.unwrap().to_bytes();
  let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
  assert_eq!(json["recommended_user_ids"], serde_json::json!([]));
}

#[tokio::test]
async fn recommendations_degrade_when_signal_tables_fail() {
  // Pool queries succeed, every signal fetch fails: the endpoint must
  // still answer 200 with the pool in neutral order.
  let candidate = Uuid::new_v4();
  let db = MockDatabase::new(DatabaseBackend::Postgres)
    .append_query_results([vec![profile_row(candidate)]])
    .append_query_results([Vec::<user_swipe::Model>::new()])
    .into_connection();
  let app = test_app(db);

  let response = app
    .oneshot(
      Request::builder()
        .uri(format!("/api/v0/recommendations/{}", Uuid::new_v4()))
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::OK);

  let body = response.into_body().collect().await.unwrap().to_bytes();
  let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
  assert_eq!(
    json["recommended_user_ids"],
    serde_json::json!([candidate])
  );
}

#[tokio::test]
async fn recommendations_report_500_when_the_pool_query_fails() {
  // No mocked results at all: listing the candidate pool itself fails.
  let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
  let app = test_app(db);

  let response = app
    .oneshot(
      Request::builder()
        .uri(format!("/api/v0/recommendations/{}", Uuid::new_v4()))
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn malformed_user_ids_are_rejected_with_client_errors() {
  let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
  let app = test_app(db);

  let response = app
    .oneshot(
      Request::builder()
        .uri("/api/v0/recommendations/not-a-uuid")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn openapi_document_is_served() {
  let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
  let app = test_app(db);

  let response = app
    .oneshot(
      Request::builder()
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::OK);

  let body = response.into_body().collect().await.unwrap().to_bytes();
  let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
  assert!(
    json["paths"]
      .as_object()
      .is_some_and(|p| p.contains_key("/api/v0/recommendations/{user_id}"))
  );
}
