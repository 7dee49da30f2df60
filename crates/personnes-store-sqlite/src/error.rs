//! Error type for `personnes-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A stored `date_naissance` column is not a canonical date.
  #[error("date column: {0}")]
  Date(#[from] personnes_core::date::DateError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
