//! Derived statistics over the full response list.
//!
//! Stats are ephemeral: recomputed from the record list on each request,
//! never cached or persisted.

use serde::{Deserialize, Serialize};

use crate::rsvp::Rsvp;

/// Aggregate counts over all responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpStats {
  pub total_responses:      u64,
  pub attending:            u64,
  pub not_attending:        u64,
  /// Sum of `guests` over attending responses only.
  pub total_guests:         u64,
  /// `round(attending / total_responses * 100)`; `0` for an empty list.
  pub attending_percentage: u8,
}

/// Single pass over `records`; deterministic and order-independent.
pub fn aggregate(records: &[Rsvp]) -> RsvpStats {
  let mut attending = 0u64;
  let mut not_attending = 0u64;
  let mut total_guests = 0u64;

  for record in records {
    if record.attendance.is_attending() {
      attending += 1;
      total_guests += u64::from(record.guests);
    } else {
      not_attending += 1;
    }
  }

  let total_responses = attending + not_attending;
  let attending_percentage = if total_responses == 0 {
    0
  } else {
    (attending as f64 / total_responses as f64 * 100.0).round() as u8
  };

  RsvpStats {
    total_responses,
    attending,
    not_attending,
    total_guests,
    attending_percentage,
  }
}
