//! [`SqliteStore`] — the SQLite implementation of [`RsvpStore`].

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;
use vows_core::{
  rsvp::{NewRsvp, Rsvp},
  store::RsvpStore,
};

use crate::{
  Error, Result,
  encode::{RawRsvp, encode_attendance, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An RSVP store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── RsvpStore impl ──────────────────────────────────────────────────────────

impl RsvpStore for SqliteStore {
  type Error = Error;

  async fn submit(&self, input: NewRsvp) -> Result<Rsvp> {
    let rsvp = Rsvp {
      id:           Uuid::new_v4(),
      name:         input.name,
      attendance:   input.attendance,
      guests:       input.guests,
      message:      input.message,
      submitted_at: Utc::now(),
    };

    let id_str      = encode_uuid(rsvp.id);
    let name        = rsvp.name.clone();
    let attendance  = encode_attendance(rsvp.attendance).to_owned();
    let guests      = i64::from(rsvp.guests);
    let message     = rsvp.message.clone();
    let at_str      = encode_dt(rsvp.submitted_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO rsvps (rsvp_id, name, attendance, guests, message, submitted_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![id_str, name, attendance, guests, message, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(rsvp)
  }

  async fn list_all(&self) -> Result<Vec<Rsvp>> {
    let raws: Vec<RawRsvp> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT rsvp_id, name, attendance, guests, message, submitted_at
           FROM rsvps
           ORDER BY submitted_at DESC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawRsvp {
              rsvp_id:      row.get(0)?,
              name:         row.get(1)?,
              attendance:   row.get(2)?,
              guests:       row.get(3)?,
              message:      row.get(4)?,
              submitted_at: row.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRsvp::into_rsvp).collect()
  }
}
