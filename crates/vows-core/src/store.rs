//! The `RsvpStore` trait — the persistence boundary for responses.
//!
//! The trait is implemented by storage backends (e.g. `vows-store-sqlite`).
//! Higher layers (`vows-api`) depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::rsvp::{NewRsvp, Rsvp};

/// Abstraction over an RSVP store backend.
///
/// Writes are append-only: a response is created exactly once and never
/// updated or deleted. Concurrent submissions are independent writes with
/// no ordering guarantee beyond the store's own write ordering.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RsvpStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Append one response and return the persisted [`Rsvp`].
  /// The `id` and `submitted_at` fields are set by the store.
  ///
  /// There is no idempotency key: a retried submit after a transient
  /// failure may create a duplicate record. Accepted limitation.
  fn submit(
    &self,
    input: NewRsvp,
  ) -> impl Future<Output = Result<Rsvp, Self::Error>> + Send + '_;

  /// Return every response, ordered by `submitted_at` descending
  /// (newest first).
  ///
  /// No pagination: the full set is always returned, which is fine at
  /// wedding-guest scale and does not scale beyond it.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Rsvp>, Self::Error>> + Send + '_;
}
