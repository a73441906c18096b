//! The [`KeyValueMedium`] trait and an in-memory implementation.
//!
//! A medium is a client-local string-to-string store that survives across
//! sessions. The stores in [`crate::store`] depend on this abstraction, not on
//! any concrete backend (see `folio-store-sqlite` for a durable one).

use std::{
  collections::HashMap,
  sync::{Arc, Mutex},
};

use thiserror::Error;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the persistence medium backing both stores.
///
/// Only [`get`](Self::get) and [`set`](Self::set) are required. Backends that
/// can compare-and-swap atomically should override
/// [`set_if_unchanged`](Self::set_if_unchanged).
pub trait KeyValueMedium: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the value stored under `key`, or `None` if the key is absent.
  fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

  /// Overwrite the value stored under `key`.
  fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

  /// Write `value` only if the current value equals `expected` (`None` meaning
  /// absent). Returns `false`, without writing, when it does not.
  ///
  /// The default is a plain read followed by a write and is therefore not
  /// atomic against other processes sharing the medium.
  fn set_if_unchanged(
    &self,
    key: &str,
    expected: Option<&str>,
    value: &str,
  ) -> Result<bool, Self::Error> {
    if self.get(key)?.as_deref() != expected {
      return Ok(false);
    }
    self.set(key, value)?;
    Ok(true)
  }
}

impl<M: KeyValueMedium + ?Sized> KeyValueMedium for &M {
  type Error = M::Error;

  fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
    (**self).get(key)
  }

  fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
    (**self).set(key, value)
  }

  fn set_if_unchanged(
    &self,
    key: &str,
    expected: Option<&str>,
    value: &str,
  ) -> Result<bool, Self::Error> {
    (**self).set_if_unchanged(key, expected, value)
  }
}

impl<M: KeyValueMedium + ?Sized> KeyValueMedium for Arc<M> {
  type Error = M::Error;

  fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
    (**self).get(key)
  }

  fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
    (**self).set(key, value)
  }

  fn set_if_unchanged(
    &self,
    key: &str,
    expected: Option<&str>,
    value: &str,
  ) -> Result<bool, Self::Error> {
    (**self).set_if_unchanged(key, expected, value)
  }
}

// ─── In-memory medium ────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum MemoryError {
  #[error("medium is read-only")]
  WritesDisabled,

  #[error("medium lock poisoned")]
  Poisoned,
}

/// A [`KeyValueMedium`] held entirely in memory, for tests.
///
/// Cloning is cheap; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryMedium {
  inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
  values:      HashMap<String, String>,
  fail_writes: bool,
}

impl MemoryMedium {
  pub fn new() -> Self { Self::default() }

  /// Make every subsequent write fail, as a full or disabled medium would.
  pub fn fail_writes(&self, fail: bool) {
    if let Ok(mut inner) = self.inner.lock() {
      inner.fail_writes = fail;
    }
  }

  /// Number of keys currently stored.
  pub fn len(&self) -> usize {
    self.inner.lock().map(|i| i.values.len()).unwrap_or(0)
  }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl KeyValueMedium for MemoryMedium {
  type Error = MemoryError;

  fn get(&self, key: &str) -> Result<Option<String>, MemoryError> {
    let inner = self.inner.lock().map_err(|_| MemoryError::Poisoned)?;
    Ok(inner.values.get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> Result<(), MemoryError> {
    let mut inner = self.inner.lock().map_err(|_| MemoryError::Poisoned)?;
    if inner.fail_writes {
      return Err(MemoryError::WritesDisabled);
    }
    inner.values.insert(key.to_owned(), value.to_owned());
    Ok(())
  }

  fn set_if_unchanged(
    &self,
    key: &str,
    expected: Option<&str>,
    value: &str,
  ) -> Result<bool, MemoryError> {
    let mut inner = self.inner.lock().map_err(|_| MemoryError::Poisoned)?;
    if inner.fail_writes {
      return Err(MemoryError::WritesDisabled);
    }
    if inner.values.get(key).map(String::as_str) != expected {
      return Ok(false);
    }
    inner.values.insert(key.to_owned(), value.to_owned());
    Ok(true)
  }
}
