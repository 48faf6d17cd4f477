//! Form validation — pure, synchronous, side-effect-free.
//!
//! Validation happens before the store is ever touched. The outcome is
//! either a normalised [`NewRsvp`] or a map of field name to violation
//! message that the caller renders inline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::rsvp::{Attendance, GUESTS_MAX, GUESTS_MIN, NewRsvp};

// ─── Candidate ───────────────────────────────────────────────────────────────

/// A raw, untrusted form submission as it arrives from a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsvpForm {
  pub name:       String,
  /// Must be exactly `"yes"` or `"no"`.
  pub attendance: String,
  pub guests:     i64,
  pub message:    Option<String>,
}

// ─── Violations ──────────────────────────────────────────────────────────────

/// Per-field violation messages, keyed by field name.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Violations(BTreeMap<&'static str, String>);

impl Violations {
  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn get(&self, field: &str) -> Option<&str> {
    self.0.get(field).map(String::as_str)
  }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
    self.0.iter().map(|(field, message)| (*field, message.as_str()))
  }

  fn insert(&mut self, field: &'static str, message: impl Into<String>) {
    self.0.insert(field, message.into());
  }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Check `form` against the field constraints and normalise it.
///
/// Rules:
/// - `name`: at least 2 characters after trimming.
/// - `attendance`: exactly `yes` or `no`.
/// - `guests`: integer in `[1, 5]`, regardless of attendance.
/// - `message`: always valid; trim-empty collapses to `None`.
pub fn validate(form: &RsvpForm) -> Result<NewRsvp, Violations> {
  let mut violations = Violations::default();

  let name = form.name.trim();
  if name.chars().count() < 2 {
    violations.insert("name", "name must be at least 2 characters");
  }

  let attendance = form.attendance.parse::<Attendance>().ok();
  if attendance.is_none() {
    violations.insert("attendance", "attendance must be \"yes\" or \"no\"");
  }

  if form.guests < i64::from(GUESTS_MIN) || form.guests > i64::from(GUESTS_MAX) {
    violations.insert(
      "guests",
      format!("guests must be between {GUESTS_MIN} and {GUESTS_MAX}"),
    );
  }

  match attendance {
    Some(attendance) if violations.is_empty() => Ok(NewRsvp {
      name: name.to_string(),
      attendance,
      guests: form.guests as u8,
      message: form
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string),
    }),
    _ => Err(violations),
  }
}
