//! Store behaviour against the in-memory medium.

use std::convert::Infallible;

use crate::{
  Error,
  filter::{ItemFilter, filter_items, tab_counts},
  item::{Category, ContentType, Item, NewItem},
  medium::{KeyValueMedium, MemoryMedium},
  seed,
  store::{ITEMS_KEY, ItemStore, PROFILE_KEY, ProfileStore},
};

fn items() -> (MemoryMedium, ItemStore<MemoryMedium>) {
  let medium = MemoryMedium::new();
  (medium.clone(), ItemStore::new(medium))
}

fn draft(title: &str) -> NewItem {
  NewItem::new(title, "d", Category::Academic, ContentType::Project)
}

fn ids(items: &[Item]) -> Vec<&str> { items.iter().map(|i| i.id.as_str()).collect() }

// ─── Profile ─────────────────────────────────────────────────────────────────

#[test]
fn profile_bootstraps_on_first_read() {
  let medium = MemoryMedium::new();
  let store = ProfileStore::new(&medium);

  assert!(medium.get(PROFILE_KEY).unwrap().is_none());
  let profile = store.get_profile().unwrap();
  assert_eq!(profile, seed::initial_profile());
  assert!(medium.get(PROFILE_KEY).unwrap().is_some());
}

#[test]
fn profile_bootstrap_is_idempotent() {
  let medium = MemoryMedium::new();
  let store = ProfileStore::new(&medium);

  let first = store.get_profile().unwrap();
  let raw_first = medium.get(PROFILE_KEY).unwrap();
  let second = store.get_profile().unwrap();
  let raw_second = medium.get(PROFILE_KEY).unwrap();

  assert_eq!(first, second);
  assert_eq!(raw_first, raw_second);
}

#[test]
fn profile_update_replaces_wholesale() {
  let store = ProfileStore::new(MemoryMedium::new());

  let mut profile = store.get_profile().unwrap();
  profile.name = "Someone Else".into();
  profile.skills = vec!["Rust".into()];
  store.update_profile(&profile).unwrap();

  let fetched = store.get_profile().unwrap();
  assert_eq!(fetched.name, "Someone Else");
  assert_eq!(fetched.skills, vec!["Rust".to_owned()]);
  assert_eq!(fetched.university, "Sharda University");
}

#[test]
fn profile_wire_shape_uses_camel_case() {
  let medium = MemoryMedium::new();
  ProfileStore::new(&medium).get_profile().unwrap();

  let raw = medium.get(PROFILE_KEY).unwrap().unwrap();
  let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
  assert_eq!(value["avatarUrl"], "/hriday.jpg");
  assert!(value.get("avatar_url").is_none());
  assert_eq!(value["skills"][0], "Python");
}

#[test]
fn corrupt_profile_is_surfaced() {
  let medium = MemoryMedium::new();
  medium.set(PROFILE_KEY, "{\"name\": 42").unwrap();

  let err = ProfileStore::new(&medium).get_profile().unwrap_err();
  assert!(matches!(err, Error::CorruptState { key: PROFILE_KEY, .. }));
  // Nothing was reseeded behind the caller's back.
  assert_eq!(medium.get(PROFILE_KEY).unwrap().unwrap(), "{\"name\": 42");
}

#[test]
fn empty_profile_document_is_reseeded() {
  let medium = MemoryMedium::new();
  medium.set(PROFILE_KEY, "").unwrap();

  let profile = ProfileStore::new(&medium).get_profile().unwrap();
  assert_eq!(profile, seed::initial_profile());
  assert!(!medium.get(PROFILE_KEY).unwrap().unwrap().is_empty());
}

// ─── Item bootstrap ──────────────────────────────────────────────────────────

#[test]
fn items_bootstrap_with_nine_seeded_entries() {
  let (_, store) = items();
  let all = store.get_items().unwrap();

  assert_eq!(all.len(), 9);
  assert_eq!(ids(&all), ["1", "2", "a1", "a2", "a3", "3", "4", "c1", "c2"]);
  assert_eq!(all[0].title, "AI-Powered Traffic Analysis");
}

#[test]
fn items_bootstrap_is_idempotent() {
  let (medium, store) = items();

  let first = store.get_items().unwrap();
  let raw_first = medium.get(ITEMS_KEY).unwrap();
  let second = store.get_items().unwrap();
  let raw_second = medium.get(ITEMS_KEY).unwrap();

  assert_eq!(first, second);
  assert_eq!(raw_first, raw_second);
}

#[test]
fn absent_optional_fields_are_omitted_from_the_document() {
  let (medium, store) = items();
  store.get_items().unwrap();

  let raw = medium.get(ITEMS_KEY).unwrap().unwrap();
  let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
  let first = &value[0];
  assert_eq!(first["type"], "PROJECT");
  assert_eq!(first["category"], "ACADEMIC");
  assert_eq!(first["linkUrl"], "https://github.com");
  assert!(first.get("date").is_none());
  assert!(first.get("author").is_none());

  // The seeded review keeps its empty media string.
  let review = &value[4];
  assert_eq!(review["mediaUrl"], "");
  assert_eq!(review["author"], "Jane Doe, Team Lead");
}

#[test]
fn hand_written_document_is_read_as_stored() {
  let (medium, store) = items();
  medium
    .set(
      ITEMS_KEY,
      r#"[{"id":"x","title":"T","description":"D","category":"CREATIVE","type":"VIDEO_EDIT"}]"#,
    )
    .unwrap();

  let all = store.get_items().unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].content_type, ContentType::VideoEdit);
  assert_eq!(all[0].tags, None);
}

#[test]
fn unknown_fields_survive_a_rewrite() {
  let (medium, store) = items();
  medium
    .set(
      ITEMS_KEY,
      r#"[{"id":"x","title":"T","description":"D","category":"CREATIVE","type":"TRIP","featured":true,"views":12},
          {"id":"y","title":"U","description":"E","category":"ACADEMIC","type":"SKILL"}]"#,
    )
    .unwrap();

  store.add_item(draft("New")).unwrap();
  store.delete_item("y").unwrap();

  let raw = medium.get(ITEMS_KEY).unwrap().unwrap();
  let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
  let kept = &value[1];
  assert_eq!(kept["id"], "x");
  assert_eq!(kept["featured"], true);
  assert_eq!(kept["views"], 12);
  assert!(value[0].get("featured").is_none());
}

#[test]
fn corrupt_collection_is_surfaced_then_recoverable() {
  let (medium, store) = items();
  medium.set(ITEMS_KEY, r#"[{"id":"x","category":"SPORTS"}]"#).unwrap();

  let err = store.get_items().unwrap_err();
  assert!(matches!(err, Error::CorruptState { key: ITEMS_KEY, .. }));
  assert!(matches!(
    store.add_item(draft("X")).unwrap_err(),
    Error::CorruptState { .. }
  ));

  let restored = store.restore_defaults().unwrap();
  assert_eq!(restored.len(), 9);
  assert_eq!(store.get_items().unwrap(), restored);
}

#[test]
fn empty_collection_document_is_reseeded() {
  let (medium, store) = items();
  medium.set(ITEMS_KEY, "").unwrap();

  assert_eq!(store.get_items().unwrap(), seed::initial_items());
  assert!(!medium.get(ITEMS_KEY).unwrap().unwrap().is_empty());

  medium.set(ITEMS_KEY, "").unwrap();
  let added = store.add_item(draft("After wipe")).unwrap();
  assert_eq!(store.get_items().unwrap().len(), 10);
  assert_eq!(store.get_items().unwrap()[0], added);
}

// ─── Add / delete ────────────────────────────────────────────────────────────

#[test]
fn add_prepends_and_assigns_an_id() {
  let (_, store) = items();
  let before = store.get_items().unwrap();

  let mut new = draft("X");
  new.tags = Some(vec!["a".into()]);
  let created = store.add_item(new.clone()).unwrap();
  assert!(!created.id.is_empty());

  let after = store.get_items().unwrap();
  assert_eq!(after.len(), before.len() + 1);
  assert_eq!(after[0], created);
  assert_eq!(after[0].title, new.title);
  assert_eq!(after[0].tags, new.tags);
  assert_eq!(&after[1..], &before[..]);
}

#[test]
fn add_on_empty_medium_seeds_first() {
  let (_, store) = items();
  store.add_item(draft("X")).unwrap();
  assert_eq!(store.get_items().unwrap().len(), 10);
}

#[test]
fn rapid_adds_get_distinct_ids() {
  let (_, store) = items();
  let mut seen = std::collections::HashSet::new();
  for n in 0..50 {
    let item = store.add_item(draft(&format!("item {n}"))).unwrap();
    assert!(seen.insert(item.id));
  }
  let all = store.get_items().unwrap();
  assert_eq!(all.len(), 59);
  assert_eq!(all[0].title, "item 49");
}

#[test]
fn delete_removes_only_the_match() {
  let (_, store) = items();
  let before = store.get_items().unwrap();

  store.delete_item("a2").unwrap();

  let after = store.get_items().unwrap();
  assert_eq!(after.len(), before.len() - 1);
  assert!(after.iter().all(|i| i.id != "a2"));
  let expected: Vec<_> = before.into_iter().filter(|i| i.id != "a2").collect();
  assert_eq!(after, expected);
}

#[test]
fn delete_unknown_id_is_a_no_op() {
  let (_, store) = items();
  let before = store.get_items().unwrap();

  store.delete_item("nonexistent").unwrap();

  assert_eq!(store.get_items().unwrap(), before);
}

#[test]
fn mismatched_category_and_type_is_accepted() {
  let (_, store) = items();
  let odd = NewItem::new("Odd", "d", Category::Creative, ContentType::Mentor);

  let created = store.add_item(odd).unwrap();
  assert!(!created.is_conventional());
  assert_eq!(store.get_items().unwrap()[0].content_type, ContentType::Mentor);
}

#[test]
fn add_then_delete_scenario() {
  let (_, store) = items();

  let all = store.get_items().unwrap();
  assert_eq!(all.len(), 9);
  assert_eq!(all[0].id, "1");

  store.add_item(draft("X")).unwrap();
  let all = store.get_items().unwrap();
  assert_eq!(all[0].title, "X");
  assert_eq!(all.len(), 10);

  store.delete_item(&all[0].id).unwrap();
  let all = store.get_items().unwrap();
  assert_eq!(all.len(), 9);
  assert_eq!(all[0].id, "1");
}

#[test]
fn replace_items_overwrites_collection() {
  let (_, store) = items();
  let mut subset = seed::initial_items();
  subset.truncate(2);

  store.replace_items(&subset).unwrap();
  assert_eq!(store.get_items().unwrap(), subset);

  store.replace_items(&[]).unwrap();
  assert!(store.get_items().unwrap().is_empty());
}

// ─── Failure modes ───────────────────────────────────────────────────────────

#[test]
fn failing_writes_surface_as_persistence_unavailable() {
  let (medium, store) = items();
  store.get_items().unwrap();
  medium.fail_writes(true);

  let err = store.add_item(draft("X")).unwrap_err();
  assert!(matches!(err, Error::PersistenceUnavailable(_)));

  let err = ProfileStore::new(&medium)
    .update_profile(&seed::initial_profile())
    .unwrap_err();
  assert!(matches!(err, Error::PersistenceUnavailable(_)));

  medium.fail_writes(false);
  assert_eq!(store.get_items().unwrap().len(), 9);
}

#[test]
fn bootstrap_on_disabled_medium_fails() {
  let (medium, store) = items();
  medium.fail_writes(true);
  assert!(matches!(
    store.get_items().unwrap_err(),
    Error::PersistenceUnavailable(_)
  ));
  assert!(medium.is_empty());
}

/// A medium that lets another writer sneak in just before each
/// compare-and-set on the item collection.
struct Interloper {
  inner: MemoryMedium,
}

impl KeyValueMedium for Interloper {
  type Error = <MemoryMedium as KeyValueMedium>::Error;

  fn get(&self, key: &str) -> Result<Option<String>, Self::Error> { self.inner.get(key) }

  fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
    self.inner.set(key, value)
  }

  fn set_if_unchanged(
    &self,
    key: &str,
    expected: Option<&str>,
    value: &str,
  ) -> Result<bool, Self::Error> {
    if key == ITEMS_KEY
      && let Some(current) = expected
    {
      self.inner.set(key, &format!("{current} "))?;
    }
    self.inner.set_if_unchanged(key, expected, value)
  }
}

#[test]
fn concurrent_modification_is_a_conflict() {
  let inner = MemoryMedium::new();
  let store = ItemStore::new(Interloper { inner: inner.clone() });
  store.get_items().unwrap();

  let err = store.add_item(draft("X")).unwrap_err();
  assert!(matches!(err, Error::Conflict { key: ITEMS_KEY }));
  // The interloper's write survives; ours was not applied.
  let raw = inner.get(ITEMS_KEY).unwrap().unwrap();
  assert!(raw.ends_with(' '));
  assert_eq!(store.get_items().unwrap().len(), 9);

  let err = store.delete_item("1").unwrap_err();
  assert!(matches!(err, Error::Conflict { .. }));
}

/// Bare medium relying on the trait's default compare-and-set.
#[derive(Default)]
struct Plain(std::sync::Mutex<std::collections::HashMap<String, String>>);

impl KeyValueMedium for Plain {
  type Error = Infallible;

  fn get(&self, key: &str) -> Result<Option<String>, Infallible> {
    Ok(self.0.lock().unwrap().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> Result<(), Infallible> {
    self.0.lock().unwrap().insert(key.into(), value.into());
    Ok(())
  }
}

#[test]
fn default_compare_and_set_is_enough_for_the_stores() {
  let store = ItemStore::new(Plain::default());
  store.get_items().unwrap();
  let created = store.add_item(draft("X")).unwrap();
  store.delete_item(&created.id).unwrap();
  assert_eq!(store.get_items().unwrap().len(), 9);
}

// ─── Filtering ───────────────────────────────────────────────────────────────

#[test]
fn filter_by_tab_keeps_stored_order() {
  let all = seed::initial_items();

  let projects = filter_items(&all, Category::Academic, ContentType::Project);
  assert_eq!(projects.len(), 1);
  assert_eq!(projects[0].id, "1");

  let none = filter_items(&all, Category::Academic, ContentType::Proficiency);
  assert!(none.is_empty());

  let academic = ItemFilter { category: Some(Category::Academic), content_type: None };
  let academic: Vec<_> = academic.apply(&all).into_iter().map(|i| i.id.as_str()).collect();
  assert_eq!(academic, ["1", "2", "a1", "a2", "a3"]);

  assert_eq!(ItemFilter::default().apply(&all).len(), 9);
}

#[test]
fn filter_requires_both_fields() {
  let mut all = seed::initial_items();
  let odd = Item {
    id: "odd".into(),
    category: Category::Creative,
    ..all[0].clone()
  };
  all.push(odd);

  let projects = filter_items(&all, Category::Academic, ContentType::Project);
  assert_eq!(projects.len(), 1);
  let creative_projects = filter_items(&all, Category::Creative, ContentType::Project);
  assert_eq!(creative_projects.len(), 1);
  assert_eq!(creative_projects[0].id, "odd");
}

#[test]
fn tab_counts_follow_display_order() {
  let all = seed::initial_items();
  let counts = tab_counts(&all, Category::Creative);
  assert_eq!(
    counts,
    vec![
      (ContentType::Cinematography, 1),
      (ContentType::VideoEdit, 1),
      (ContentType::Photography, 1),
      (ContentType::Trip, 1),
    ]
  );
  let academic = tab_counts(&all, Category::Academic);
  assert_eq!(academic[3], (ContentType::Proficiency, 0));
}
