//! [`ProfileStore`] and [`ItemStore`]: the two documents kept in a
//! [`KeyValueMedium`].
//!
//! Each store owns one fixed key. Reads seed the bootstrap document when the
//! key is absent or holds an empty string; writes rewrite the whole document.
//! Read-modify-write paths (`add_item`, `delete_item`) compare-and-set against
//! the text they read, so a concurrent writer produces [`Error::Conflict`]
//! instead of a lost update.

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
  Error, Result,
  item::{Item, NewItem},
  medium::KeyValueMedium,
  profile::Profile,
  seed,
};

/// Medium key holding the serialized [`Profile`].
pub const PROFILE_KEY: &str = "hriday_portfolio_profile";

/// Medium key holding the serialized item collection.
pub const ITEMS_KEY: &str = "hriday_portfolio_items";

// ─── Profile store ───────────────────────────────────────────────────────────

pub struct ProfileStore<M> {
  medium: M,
}

impl<M: KeyValueMedium> ProfileStore<M> {
  pub fn new(medium: M) -> Self { Self { medium } }

  /// Return the stored profile, writing the bootstrap profile first if none
  /// exists.
  pub fn get_profile(&self) -> Result<Profile> {
    let (_, profile) = read_or_seed(&self.medium, PROFILE_KEY, seed::initial_profile)?;
    Ok(profile)
  }

  /// Replace the stored profile wholesale. Last writer wins.
  pub fn update_profile(&self, profile: &Profile) -> Result<()> {
    let raw = serde_json::to_string(profile)?;
    self.medium.set(PROFILE_KEY, &raw).map_err(Error::medium)?;
    debug!(key = PROFILE_KEY, "profile updated");
    Ok(())
  }
}

// ─── Item store ──────────────────────────────────────────────────────────────

pub struct ItemStore<M> {
  medium: M,
}

impl<M: KeyValueMedium> ItemStore<M> {
  pub fn new(medium: M) -> Self { Self { medium } }

  /// Return the full collection in stored order (newest insertion first),
  /// seeding the bootstrap set if the collection does not exist yet.
  pub fn get_items(&self) -> Result<Vec<Item>> {
    let (_, items) = read_or_seed(&self.medium, ITEMS_KEY, seed::initial_items)?;
    Ok(items)
  }

  /// Assign an identifier to `draft`, prepend it, and persist the collection.
  pub fn add_item(&self, draft: NewItem) -> Result<Item> {
    let (current, mut items) =
      read_or_seed(&self.medium, ITEMS_KEY, seed::initial_items)?;

    let mut id = new_item_id();
    while items.iter().any(|i| i.id == id) {
      id = new_item_id();
    }

    let item = Item::from_draft(id, draft);
    items.insert(0, item.clone());
    self.write_over(&current, &items)?;

    debug!(id = %item.id, count = items.len(), "item added");
    Ok(item)
  }

  /// Remove every item whose identifier equals `id`. An unknown `id` leaves
  /// the collection unchanged and is not an error.
  pub fn delete_item(&self, id: &str) -> Result<()> {
    let (current, mut items) =
      read_or_seed(&self.medium, ITEMS_KEY, seed::initial_items)?;

    let before = items.len();
    items.retain(|i| i.id != id);
    self.write_over(&current, &items)?;

    debug!(id, removed = before - items.len(), "item delete");
    Ok(())
  }

  /// Overwrite the whole collection, e.g. from an exported document.
  pub fn replace_items(&self, items: &[Item]) -> Result<()> {
    let raw = serde_json::to_string(items)?;
    self.medium.set(ITEMS_KEY, &raw).map_err(Error::medium)?;
    debug!(count = items.len(), "item collection replaced");
    Ok(())
  }

  /// Write the bootstrap set back, discarding whatever is stored. This is the
  /// recovery path for a collection that fails to parse.
  pub fn restore_defaults(&self) -> Result<Vec<Item>> {
    let items = seed::initial_items();
    self.replace_items(&items)?;
    Ok(items)
  }

  fn write_over(&self, current: &str, items: &[Item]) -> Result<()> {
    let raw = serde_json::to_string(items)?;
    let written = self
      .medium
      .set_if_unchanged(ITEMS_KEY, Some(current), &raw)
      .map_err(Error::medium)?;
    if !written {
      warn!(key = ITEMS_KEY, "collection changed underneath a write");
      return Err(Error::Conflict { key: ITEMS_KEY });
    }
    Ok(())
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Generate an item identifier: wall-clock milliseconds plus a random suffix.
pub fn new_item_id() -> String {
  let nonce = Uuid::new_v4().simple().to_string();
  format!("{}-{}", Utc::now().timestamp_millis(), &nonce[..8])
}

/// Read and decode `key`, or write `seed()` if it is absent or empty.
///
/// Returns the raw stored text alongside the value so callers can
/// compare-and-set against it.
fn read_or_seed<M, T>(
  medium: &M,
  key: &'static str,
  seed: impl FnOnce() -> T,
) -> Result<(String, T)>
where
  M: KeyValueMedium,
  T: Serialize + DeserializeOwned,
{
  let stored = medium.get(key).map_err(Error::medium)?;
  if let Some(raw) = stored.as_deref().filter(|raw| !raw.is_empty()) {
    let value = decode(key, raw)?;
    return Ok((raw.to_owned(), value));
  }

  let value = seed();
  let raw = serde_json::to_string(&value)?;
  if medium
    .set_if_unchanged(key, stored.as_deref(), &raw)
    .map_err(Error::medium)?
  {
    debug!(key, "seeded bootstrap document");
    return Ok((raw, value));
  }

  // Another writer seeded first; use what it stored.
  match medium.get(key).map_err(Error::medium)? {
    Some(raw) if !raw.is_empty() => {
      let value = decode(key, &raw)?;
      Ok((raw, value))
    }
    _ => Err(Error::Conflict { key }),
  }
}

fn decode<T: DeserializeOwned>(key: &'static str, raw: &str) -> Result<T> {
  serde_json::from_str(raw).map_err(|source| Error::CorruptState { key, source })
}
