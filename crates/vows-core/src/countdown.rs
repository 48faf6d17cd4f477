//! Countdown to the event — the hero banner's time-remaining display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whole units remaining until the event, clamped to zero once it has
/// passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
  pub days:    i64,
  pub hours:   i64,
  pub minutes: i64,
  pub seconds: i64,
}

impl Countdown {
  pub const ZERO: Self = Self { days: 0, hours: 0, minutes: 0, seconds: 0 };

  pub fn is_over(&self) -> bool { *self == Self::ZERO }
}

/// Time remaining from `now` until `event`.
pub fn time_until(event: DateTime<Utc>, now: DateTime<Utc>) -> Countdown {
  let remaining = (event - now).num_seconds();
  if remaining <= 0 {
    return Countdown::ZERO;
  }

  Countdown {
    days:    remaining / 86_400,
    hours:   remaining % 86_400 / 3_600,
    minutes: remaining % 3_600 / 60,
    seconds: remaining % 60,
  }
}

#[cfg(test)]
mod tests {
  use chrono::{Duration, TimeZone};

  use super::*;

  fn event() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 9, 11, 0, 0).unwrap()
  }

  #[test]
  fn splits_remaining_time_into_units() {
    let now = event() - Duration::days(3) - Duration::hours(4) - Duration::minutes(5) - Duration::seconds(6);
    let c = time_until(event(), now);
    assert_eq!(c, Countdown { days: 3, hours: 4, minutes: 5, seconds: 6 });
  }

  #[test]
  fn clamps_to_zero_after_the_event() {
    let c = time_until(event(), event() + Duration::hours(1));
    assert_eq!(c, Countdown::ZERO);
    assert!(c.is_over());
  }

  #[test]
  fn exactly_at_the_event_is_zero() {
    assert_eq!(time_until(event(), event()), Countdown::ZERO);
  }

  #[test]
  fn under_a_minute() {
    let c = time_until(event(), event() - Duration::seconds(42));
    assert_eq!(c, Countdown { days: 0, hours: 0, minutes: 0, seconds: 42 });
    assert!(!c.is_over());
  }
}
