//! Error type for `vows-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] vows_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A persisted `guests` value outside `[1, 5]`; the schema CHECK should
  /// make this unreachable.
  #[error("guests value out of range: {0}")]
  GuestsOutOfRange(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
