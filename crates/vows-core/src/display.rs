//! Display adapters — read-model transformations of stored records.
//!
//! Two views are derived from the same list: message cards for the
//! guest-message wall, and dashboard rows for the admin response table.
//! Both are computed fresh on each read; nothing here is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rsvp::Rsvp;

/// Shown when a record was persisted with an empty name (bypassing
/// validation); deriving an initial must not panic.
const AVATAR_PLACEHOLDER: char = '?';

// ─── Message cards ───────────────────────────────────────────────────────────

/// A guest message ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCard {
  pub id:             Uuid,
  pub name:           String,
  pub message:        String,
  /// Coarse humanized age, e.g. `"2 days ago"`.
  pub relative_time:  String,
  pub avatar_initial: char,
}

/// Build message cards from `records`, evaluated at `now`.
///
/// Records with an absent or trim-empty `message` are skipped, regardless
/// of attendance. Output is ordered by `submitted_at` descending.
pub fn message_cards(records: &[Rsvp], now: DateTime<Utc>) -> Vec<MessageCard> {
  let mut with_ts: Vec<(DateTime<Utc>, MessageCard)> = records
    .iter()
    .filter_map(|record| {
      let message = record.message.as_deref().map(str::trim)?;
      if message.is_empty() {
        return None;
      }
      Some((record.submitted_at, MessageCard {
        id:             record.id,
        name:           record.name.clone(),
        message:        message.to_string(),
        relative_time:  relative_time(record.submitted_at, now),
        avatar_initial: avatar_initial(&record.name),
      }))
    })
    .collect();

  // Newest first, by the raw timestamp. Sorting by the formatted string
  // does not yield chronological order.
  with_ts.sort_by(|a, b| b.0.cmp(&a.0));
  with_ts.into_iter().map(|(_, card)| card).collect()
}

/// First character of the trimmed name, upper-cased.
pub fn avatar_initial(name: &str) -> char {
  match name.trim().chars().next() {
    Some(c) => c.to_uppercase().next().unwrap_or(c),
    None => AVATAR_PLACEHOLDER,
  }
}

/// Humanize the elapsed time since `from` into a coarse bucket.
///
/// Elapsed whole days are computed with ceiling semantics, then bucketed:
/// exactly 1 → `1 day ago`; under 7 → `N days ago`; under 14 → `1 week
/// ago`; under 30 → `N weeks ago` (N = days/7); otherwise `N months ago`
/// (N = days/30, no calendar arithmetic).
pub fn relative_time(from: DateTime<Utc>, now: DateTime<Utc>) -> String {
  let elapsed_secs = (now - from).num_seconds().abs();
  let days = (elapsed_secs as u64).div_ceil(86_400);

  if days == 1 {
    "1 day ago".to_string()
  } else if days < 7 {
    format!("{days} days ago")
  } else if days < 14 {
    "1 week ago".to_string()
  } else if days < 30 {
    format!("{} weeks ago", days / 7)
  } else {
    format!("{} months ago", days / 30)
  }
}

// ─── Dashboard rows ──────────────────────────────────────────────────────────

/// One row of the admin response table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRow {
  pub name:         String,
  pub attendance:   crate::rsvp::Attendance,
  /// `None` when not attending — the stored count is display-suppressed.
  pub guests:       Option<u8>,
  /// Submission date, `YYYY-MM-DD`.
  pub submitted_on: String,
  pub message:      Option<String>,
}

/// Map records to dashboard rows, preserving the input order.
pub fn response_rows(records: &[Rsvp]) -> Vec<ResponseRow> {
  records
    .iter()
    .map(|record| ResponseRow {
      name:         record.name.clone(),
      attendance:   record.attendance,
      guests:       record.attendance.is_attending().then_some(record.guests),
      submitted_on: record.submitted_at.format("%Y-%m-%d").to_string(),
      message:      record.message.clone(),
    })
    .collect()
}
