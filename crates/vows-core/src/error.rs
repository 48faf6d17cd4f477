//! Error types for `vows-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown attendance value: {0:?}")]
  UnknownAttendance(String),

  #[error("unknown locale: {0:?}")]
  UnknownLocale(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
