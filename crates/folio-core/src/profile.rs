//! The portfolio owner's profile, a singleton document with no identity.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
  pub name:       String,
  pub title:      String,
  pub about:      String,
  pub university: String,
  pub degree:     String,
  pub skills:     Vec<String>,
  /// URI or site-relative path of the avatar image.
  pub avatar_url: String,
}
