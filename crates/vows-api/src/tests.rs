//! Router-level tests driven through `tower::ServiceExt::oneshot` against an
//! in-memory store.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
};
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use tower::ServiceExt;
use vows_store_sqlite::SqliteStore;

use crate::{ApiState, api_router};

async fn make_state() -> ApiState<SqliteStore> {
  let store = SqliteStore::open_in_memory().await.expect("in-memory store");
  ApiState {
    store:      Arc::new(store),
    event_date: Utc.with_ymd_and_hms(2030, 6, 6, 10, 0, 0).unwrap(),
  }
}

async fn get(state: ApiState<SqliteStore>, uri: &str) -> axum::response::Response {
  let req = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .unwrap();
  api_router(state).oneshot(req).await.unwrap()
}

async fn post_json(
  state: ApiState<SqliteStore>,
  uri: &str,
  body: Value,
) -> axum::response::Response {
  let req = Request::builder()
    .method("POST")
    .uri(uri)
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_string()))
    .unwrap();
  api_router(state).oneshot(req).await.unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

fn form(name: &str, attendance: &str, guests: i64) -> Value {
  json!({ "name": name, "attendance": attendance, "guests": guests })
}

// ── POST /rsvps ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn post_valid_rsvp_returns_201_with_record() {
  let state = make_state().await;
  let resp = post_json(state, "/rsvps", form("Alia", "yes", 2)).await;

  assert_eq!(resp.status(), StatusCode::CREATED);
  let body = body_json(resp).await;
  assert_eq!(body["name"], "Alia");
  assert_eq!(body["attendance"], "yes");
  assert_eq!(body["guests"], 2);
  assert!(body["id"].as_str().is_some(), "id missing: {body}");
  assert!(body["submitted_at"].as_str().is_some(), "timestamp: {body}");
}

#[tokio::test]
async fn post_trims_name_and_message() {
  let state = make_state().await;
  let mut payload = form("  Bakri  ", "no", 1);
  payload["message"] = json!("  see you next time  ");
  let resp = post_json(state, "/rsvps", payload).await;

  assert_eq!(resp.status(), StatusCode::CREATED);
  let body = body_json(resp).await;
  assert_eq!(body["name"], "Bakri");
  assert_eq!(body["message"], "see you next time");
}

#[tokio::test]
async fn post_invalid_rsvp_returns_422_with_field_errors() {
  let state = make_state().await;
  let resp = post_json(state, "/rsvps", form("A", "maybe", 0)).await;

  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  let body = body_json(resp).await;
  let errors = body["errors"].as_object().unwrap();
  assert!(errors.contains_key("name"), "errors: {body}");
  assert!(errors.contains_key("attendance"), "errors: {body}");
  assert!(errors.contains_key("guests"), "errors: {body}");
}

#[tokio::test]
async fn rejected_submission_is_not_stored() {
  let state = make_state().await;
  let resp = post_json(state.clone(), "/rsvps", form("A", "yes", 2)).await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

  let resp = get(state, "/rsvps").await;
  let body = body_json(resp).await;
  assert_eq!(body.as_array().unwrap().len(), 0);
}

// ── GET /rsvps ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_returns_submissions_newest_first() {
  let state = make_state().await;
  post_json(state.clone(), "/rsvps", form("First", "yes", 1)).await;
  post_json(state.clone(), "/rsvps", form("Second", "no", 1)).await;

  let body = body_json(get(state, "/rsvps").await).await;
  let list = body.as_array().unwrap();
  assert_eq!(list.len(), 2);
  assert_eq!(list[0]["name"], "Second");
  assert_eq!(list[1]["name"], "First");
}

// ── GET /rsvps/stats ─────────────────────────────────────────────────────────

#[tokio::test]
async fn stats_on_empty_store_are_all_zero() {
  let state = make_state().await;
  let body = body_json(get(state, "/rsvps/stats").await).await;

  assert_eq!(body["total_responses"], 0);
  assert_eq!(body["attending"], 0);
  assert_eq!(body["not_attending"], 0);
  assert_eq!(body["total_guests"], 0);
  assert_eq!(body["attending_percentage"], 0);
}

#[tokio::test]
async fn stats_count_only_attending_guests() {
  let state = make_state().await;
  post_json(state.clone(), "/rsvps", form("Alia", "yes", 2)).await;
  post_json(state.clone(), "/rsvps", form("Bakri", "yes", 3)).await;
  post_json(state.clone(), "/rsvps", form("Citra", "no", 1)).await;

  let body = body_json(get(state, "/rsvps/stats").await).await;
  assert_eq!(body["total_responses"], 3);
  assert_eq!(body["attending"], 2);
  assert_eq!(body["not_attending"], 1);
  assert_eq!(body["total_guests"], 5);
  assert_eq!(body["attending_percentage"], 67);
}

// ── GET /messages ────────────────────────────────────────────────────────────

#[tokio::test]
async fn messages_skip_submissions_without_one() {
  let state = make_state().await;
  let mut with_msg = form("Dahlia", "yes", 1);
  with_msg["message"] = json!("Tahniah!");
  post_json(state.clone(), "/rsvps", with_msg).await;
  post_json(state.clone(), "/rsvps", form("Ehsan", "yes", 1)).await;

  let body = body_json(get(state, "/messages").await).await;
  let cards = body.as_array().unwrap();
  assert_eq!(cards.len(), 1);
  assert_eq!(cards[0]["name"], "Dahlia");
  assert_eq!(cards[0]["message"], "Tahniah!");
  assert_eq!(cards[0]["avatar_initial"], "D");
  assert!(cards[0]["relative_time"].as_str().unwrap().ends_with("ago"));
}

// ── GET /countdown ───────────────────────────────────────────────────────────

#[tokio::test]
async fn countdown_reports_time_remaining() {
  let state = make_state().await;
  let body = body_json(get(state, "/countdown").await).await;

  // The handler evaluates against the wall clock, so only the shape and
  // the clamped-to-zero lower bound can be asserted here; the unit math is
  // covered by the countdown tests in the core crate.
  assert_eq!(body.as_object().unwrap().len(), 4, "fields: {body}");
  for field in ["days", "hours", "minutes", "seconds"] {
    assert!(body[field].as_i64().unwrap() >= 0, "{field}: {body}");
  }
}

// ── GET /i18n/{locale} ───────────────────────────────────────────────────────

#[tokio::test]
async fn i18n_returns_bundle_for_known_locale() {
  let state = make_state().await;
  let body = body_json(get(state, "/i18n/en").await).await;
  assert_eq!(body["nav.rsvp"], "RSVP");

  let state = make_state().await;
  let body = body_json(get(state, "/i18n/ms").await).await;
  assert_eq!(body["nav.rsvp"], "RSVP");
}

#[tokio::test]
async fn i18n_rejects_unknown_locale() {
  let state = make_state().await;
  let resp = get(state, "/i18n/fr").await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
