//! The RSVP record — the fundamental unit of the Vows store.
//!
//! A record is one guest's response, immutable once created. Records are
//! never updated or deleted; the store is an append-only log of responses.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// Guest counts are bounded inclusive; the form offers 1 through 5.
pub const GUESTS_MIN: u8 = 1;
pub const GUESTS_MAX: u8 = 5;

// ─── Attendance ──────────────────────────────────────────────────────────────

/// Whether the respondent will attend. Exactly two values; the wire and
/// database representation is the lowercase word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
  Yes,
  No,
}

impl Attendance {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Yes => "yes",
      Self::No => "no",
    }
  }

  pub fn is_attending(self) -> bool { matches!(self, Self::Yes) }
}

impl FromStr for Attendance {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "yes" => Ok(Self::Yes),
      "no" => Ok(Self::No),
      other => Err(Error::UnknownAttendance(other.to_string())),
    }
  }
}

impl fmt::Display for Attendance {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Rsvp ────────────────────────────────────────────────────────────────────

/// One persisted RSVP response. Once written, no field is ever updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rsvp {
  pub id:           Uuid,
  pub name:         String,
  pub attendance:   Attendance,
  /// Headcount including the respondent; always in `[GUESTS_MIN, GUESTS_MAX]`.
  /// Only meaningful when attending, but stored as submitted either way.
  pub guests:       u8,
  /// `None` means the guest left no message.
  pub message:      Option<String>,
  /// Server-assigned timestamp; never changes after creation.
  pub submitted_at: DateTime<Utc>,
}

// ─── NewRsvp ─────────────────────────────────────────────────────────────────

/// A validated submission — the input to [`crate::store::RsvpStore::submit`].
/// `id` and `submitted_at` are always set by the store; they are not accepted
/// from callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRsvp {
  pub name:       String,
  pub attendance: Attendance,
  pub guests:     u8,
  pub message:    Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn attendance_parses_exact_words_only() {
    assert_eq!("yes".parse::<Attendance>().unwrap(), Attendance::Yes);
    assert_eq!("no".parse::<Attendance>().unwrap(), Attendance::No);
    assert!("Yes".parse::<Attendance>().is_err());
    assert!("maybe".parse::<Attendance>().is_err());
    assert!("".parse::<Attendance>().is_err());
  }

  #[test]
  fn attendance_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Attendance::Yes).unwrap(), "\"yes\"");
    assert_eq!(serde_json::to_string(&Attendance::No).unwrap(), "\"no\"");
  }

  #[test]
  fn rsvp_json_round_trip() {
    let rsvp = Rsvp {
      id:           Uuid::new_v4(),
      name:         "Aisyah".to_string(),
      attendance:   Attendance::Yes,
      guests:       3,
      message:      Some("Tahniah!".to_string()),
      submitted_at: Utc::now(),
    };
    let json = serde_json::to_string(&rsvp).unwrap();
    let back: Rsvp = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, rsvp.id);
    assert_eq!(back.guests, 3);
    assert_eq!(back.message.as_deref(), Some("Tahniah!"));
  }
}
