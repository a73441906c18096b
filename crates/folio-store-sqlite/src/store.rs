//! [`SqliteMedium`]: the SQLite implementation of [`KeyValueMedium`].

use std::{
  path::Path,
  sync::{Mutex, MutexGuard},
};

use folio_core::medium::KeyValueMedium;
use rusqlite::{Connection, OptionalExtension as _, TransactionBehavior};
use tracing::debug;

use crate::{Error, Result, schema::SCHEMA};

const UPSERT_SQL: &str = "INSERT INTO kv (key, value, updated_at)
   VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
   ON CONFLICT(key) DO UPDATE
     SET value = excluded.value, updated_at = excluded.updated_at";

// ─── Medium ──────────────────────────────────────────────────────────────────

/// A folio persistence medium backed by a single SQLite file.
pub struct SqliteMedium {
  conn: Mutex<Connection>,
}

impl SqliteMedium {
  /// Open (or create) a medium at `path` and run schema initialisation.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = Connection::open(path)?;
    debug!(path = %path.display(), "opened sqlite medium");
    Self::init(conn)
  }

  /// Open an in-memory medium for tests.
  pub fn open_in_memory() -> Result<Self> {
    Self::init(Connection::open_in_memory()?)
  }

  fn init(conn: Connection) -> Result<Self> {
    conn.execute_batch(SCHEMA)?;
    Ok(Self { conn: Mutex::new(conn) })
  }

  fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
    self.conn.lock().map_err(|_| Error::Poisoned)
  }
}

fn read(conn: &Connection, key: &str) -> Result<Option<String>> {
  Ok(
    conn
      .query_row(
        "SELECT value FROM kv WHERE key = ?1",
        rusqlite::params![key],
        |row| row.get(0),
      )
      .optional()?,
  )
}

// ─── KeyValueMedium impl ─────────────────────────────────────────────────────

impl KeyValueMedium for SqliteMedium {
  type Error = Error;

  fn get(&self, key: &str) -> Result<Option<String>> {
    let conn = self.lock()?;
    read(&conn, key)
  }

  fn set(&self, key: &str, value: &str) -> Result<()> {
    let conn = self.lock()?;
    conn.execute(UPSERT_SQL, rusqlite::params![key, value])?;
    Ok(())
  }

  /// Compare-and-set inside an IMMEDIATE transaction, so other connections to
  /// the same file cannot write between the comparison and the update.
  fn set_if_unchanged(
    &self,
    key: &str,
    expected: Option<&str>,
    value: &str,
  ) -> Result<bool> {
    let mut conn = self.lock()?;
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    if read(&tx, key)?.as_deref() != expected {
      // Dropping the transaction rolls it back.
      return Ok(false);
    }

    tx.execute(UPSERT_SQL, rusqlite::params![key, value])?;
    tx.commit()?;
    Ok(true)
  }
}
