//! Error types for `folio-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A stored document does not match its schema.
  #[error("stored document {key:?} is corrupt: {source}")]
  CorruptState {
    key:    &'static str,
    #[source]
    source: serde_json::Error,
  },

  /// The persistence medium refused a read or a write.
  #[error("persistence medium unavailable: {0}")]
  PersistenceUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// Another writer changed the document between our read and our write.
  #[error("document {key:?} was modified concurrently")]
  Conflict { key: &'static str },

  #[error("unknown category: {0:?}")]
  UnknownCategory(String),

  #[error("unknown content type: {0:?}")]
  UnknownContentType(String),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

impl Error {
  pub(crate) fn medium<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::PersistenceUnavailable(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
