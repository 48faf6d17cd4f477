//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, UUIDs as hyphenated
//! lowercase strings, attendance as the lowercase word.

use chrono::{DateTime, Utc};
use uuid::Uuid;
use vows_core::rsvp::{Attendance, GUESTS_MAX, GUESTS_MIN, Rsvp};

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Attendance ──────────────────────────────────────────────────────────────

pub fn encode_attendance(a: Attendance) -> &'static str { a.as_str() }

pub fn decode_attendance(s: &str) -> Result<Attendance> {
  s.parse::<Attendance>().map_err(Error::Core)
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from an `rsvps` row.
pub struct RawRsvp {
  pub rsvp_id:      String,
  pub name:         String,
  pub attendance:   String,
  pub guests:       i64,
  pub message:      Option<String>,
  pub submitted_at: String,
}

impl RawRsvp {
  pub fn into_rsvp(self) -> Result<Rsvp> {
    let guests = u8::try_from(self.guests)
      .ok()
      .filter(|g| (GUESTS_MIN..=GUESTS_MAX).contains(g))
      .ok_or(Error::GuestsOutOfRange(self.guests))?;

    Ok(Rsvp {
      id:           decode_uuid(&self.rsvp_id)?,
      name:         self.name,
      attendance:   decode_attendance(&self.attendance)?,
      guests,
      message:      self.message,
      submitted_at: decode_dt(&self.submitted_at)?,
    })
  }
}
