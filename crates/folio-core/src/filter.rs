//! Caller-side views over a fetched item collection.
//!
//! The stores never filter; presentation code fetches the full sequence and
//! derives tab contents from it with these helpers.

use crate::item::{Category, ContentType, Item};

/// Equality filter over the two classification fields. `None` matches any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemFilter {
  pub category:     Option<Category>,
  pub content_type: Option<ContentType>,
}

impl ItemFilter {
  pub fn tab(category: Category, content_type: ContentType) -> Self {
    Self { category: Some(category), content_type: Some(content_type) }
  }

  pub fn matches(&self, item: &Item) -> bool {
    self.category.is_none_or(|c| c == item.category)
      && self.content_type.is_none_or(|t| t == item.content_type)
  }

  /// Matching items, in stored order.
  pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
    items.iter().filter(|i| self.matches(i)).collect()
  }
}

/// Items shown under one tab: both fields must match.
pub fn filter_items(
  items: &[Item],
  category: Category,
  content_type: ContentType,
) -> Vec<&Item> {
  ItemFilter::tab(category, content_type).apply(items)
}

/// `(tab, count)` for every tab of `category`, in display order.
pub fn tab_counts(items: &[Item], category: Category) -> Vec<(ContentType, usize)> {
  category
    .content_types()
    .iter()
    .map(|&t| (t, filter_items(items, category, t).len()))
    .collect()
}
