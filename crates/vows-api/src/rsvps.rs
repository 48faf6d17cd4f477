//! Handlers for RSVP submission, listing, statistics, and guest messages.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use vows_core::{
  display::{self, MessageCard},
  rsvp::Rsvp,
  stats::{self, RsvpStats},
  store::RsvpStore,
  validate::{self, RsvpForm},
};

use crate::{ApiState, error::ApiError};

fn store_err<E>(e: E) -> ApiError
where
  E: std::error::Error + Send + Sync + 'static,
{
  ApiError::Store(Box::new(e))
}

/// `POST /rsvps` — validate a submission and append it to the store.
///
/// Invalid input returns 422 with a per-field error map and never touches
/// the store.
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  Json(form): Json<RsvpForm>,
) -> Result<(StatusCode, Json<Rsvp>), ApiError>
where
  S: RsvpStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = validate::validate(&form).map_err(ApiError::Validation)?;
  let rsvp = state.store.submit(input).await.map_err(store_err)?;
  Ok((StatusCode::CREATED, Json(rsvp)))
}

/// `GET /rsvps` — every submission, newest first.
pub async fn list<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<Rsvp>>, ApiError>
where
  S: RsvpStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let rsvps = state.store.list_all().await.map_err(store_err)?;
  Ok(Json(rsvps))
}

/// `GET /rsvps/stats` — aggregate counts over all submissions.
pub async fn stats<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<RsvpStats>, ApiError>
where
  S: RsvpStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let rsvps = state.store.list_all().await.map_err(store_err)?;
  Ok(Json(stats::aggregate(&rsvps)))
}

/// `GET /messages` — well-wish cards for submissions that carry a message,
/// newest first.
pub async fn messages<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<MessageCard>>, ApiError>
where
  S: RsvpStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let rsvps = state.store.list_all().await.map_err(store_err)?;
  Ok(Json(display::message_cards(&rsvps, Utc::now())))
}
