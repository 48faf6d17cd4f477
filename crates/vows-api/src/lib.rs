//! JSON REST API for Vows.
//!
//! Exposes an axum [`Router`] backed by any [`vows_core::store::RsvpStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", vows_api::api_router(state))
//! ```

pub mod error;
pub mod rsvps;
pub mod site;

use std::sync::Arc;

use axum::{Router, routing::get};
use chrono::{DateTime, Utc};
use vows_core::store::RsvpStore;

pub use error::ApiError;

/// Shared state threaded through all handlers.
pub struct ApiState<S> {
  pub store:      Arc<S>,
  /// The moment the wedding starts; drives `GET /countdown`.
  pub event_date: DateTime<Utc>,
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self {
      store:      Arc::clone(&self.store),
      event_date: self.event_date,
    }
  }
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: ApiState<S>) -> Router<()>
where
  S: RsvpStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // RSVPs
    .route("/rsvps", get(rsvps::list::<S>).post(rsvps::create::<S>))
    .route("/rsvps/stats", get(rsvps::stats::<S>))
    // Guest messages
    .route("/messages", get(rsvps::messages::<S>))
    // Presentational data
    .route("/countdown", get(site::countdown::<S>))
    .route("/i18n/{locale}", get(site::strings::<S>))
    .with_state(state)
}

#[cfg(test)]
mod tests;
