//! Handlers for presentational data: the event countdown and UI strings.

use std::collections::BTreeMap;

use axum::{
  Json,
  extract::{Path, State},
};
use chrono::Utc;
use vows_core::{
  countdown::{self, Countdown},
  i18n::{self, Locale},
  store::RsvpStore,
};

use crate::{ApiState, error::ApiError};

/// `GET /countdown` — time remaining until the event, clamped to zero once
/// it has passed.
pub async fn countdown<S>(
  State(state): State<ApiState<S>>,
) -> Json<Countdown>
where
  S: RsvpStore,
{
  Json(countdown::time_until(state.event_date, Utc::now()))
}

/// `GET /i18n/{locale}` — the full UI string bundle for a locale.
pub async fn strings<S>(
  State(_state): State<ApiState<S>>,
  Path(locale): Path<String>,
) -> Result<Json<BTreeMap<&'static str, &'static str>>, ApiError>
where
  S: RsvpStore,
{
  let locale: Locale = locale
    .parse()
    .map_err(|e: vows_core::Error| ApiError::BadRequest(e.to_string()))?;
  Ok(Json(i18n::strings(locale).iter().copied().collect()))
}
