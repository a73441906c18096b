//! Portfolio items and their two-level classification.
//!
//! Every item carries a [`Category`] and a [`ContentType`]. Each content type
//! conventionally belongs to one category (it is shown under that category's
//! tab strip), but the pairing is not enforced: a mismatched item is stored
//! and returned like any other.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Error;

/// Image shown for an item whose `mediaUrl` is missing or empty.
pub const PLACEHOLDER_MEDIA_URL: &str =
  "https://images.unsplash.com/photo-1531297461136-82lw8e1c4358";

// ─── Category ────────────────────────────────────────────────────────────────

/// Top-level grouping of portfolio items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
  Academic,
  Creative,
}

impl Category {
  pub const ALL: [Category; 2] = [Category::Academic, Category::Creative];

  /// The tab strip for this category, in display order.
  pub fn content_types(self) -> &'static [ContentType] {
    use ContentType::*;
    match self {
      Category::Academic => {
        &[Project, Certification, Skill, Proficiency, Mentor, Review]
      }
      Category::Creative => &[Cinematography, VideoEdit, Photography, Trip],
    }
  }

  /// The tab selected when the category is first shown.
  pub fn default_tab(self) -> ContentType { self.content_types()[0] }

  pub fn as_str(self) -> &'static str {
    match self {
      Category::Academic => "ACADEMIC",
      Category::Creative => "CREATIVE",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Category {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match normalize(s).as_str() {
      "ACADEMIC" => Ok(Category::Academic),
      "CREATIVE" => Ok(Category::Creative),
      _ => Err(Error::UnknownCategory(s.to_owned())),
    }
  }
}

// ─── ContentType ─────────────────────────────────────────────────────────────

/// Sub-classification of an item; the `type` field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
  // Academic tabs
  Project,
  Certification,
  Skill,
  Proficiency,
  Mentor,
  Review,

  // Creative tabs
  Cinematography,
  VideoEdit,
  Photography,
  Trip,
}

impl ContentType {
  pub const ALL: [ContentType; 10] = [
    ContentType::Project,
    ContentType::Certification,
    ContentType::Skill,
    ContentType::Proficiency,
    ContentType::Mentor,
    ContentType::Review,
    ContentType::Cinematography,
    ContentType::VideoEdit,
    ContentType::Photography,
    ContentType::Trip,
  ];

  /// The category whose tab strip lists this type.
  pub fn category(self) -> Category {
    match self {
      ContentType::Project
      | ContentType::Certification
      | ContentType::Skill
      | ContentType::Proficiency
      | ContentType::Mentor
      | ContentType::Review => Category::Academic,
      ContentType::Cinematography
      | ContentType::VideoEdit
      | ContentType::Photography
      | ContentType::Trip => Category::Creative,
    }
  }

  /// Tab label.
  pub fn label(self) -> &'static str {
    match self {
      ContentType::Project => "PROJECTS",
      ContentType::Certification => "CERTIFICATIONS",
      ContentType::Skill => "SKILLS",
      ContentType::Proficiency => "PROFICIENCY",
      ContentType::Mentor => "MENTORS",
      ContentType::Review => "REVIEWS",
      ContentType::Cinematography => "CINEMATOGRAPHY",
      ContentType::VideoEdit => "VIDEO EDITS",
      ContentType::Photography => "PHOTOGRAPHY",
      ContentType::Trip => "TRIPS",
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      ContentType::Project => "PROJECT",
      ContentType::Certification => "CERTIFICATION",
      ContentType::Skill => "SKILL",
      ContentType::Proficiency => "PROFICIENCY",
      ContentType::Mentor => "MENTOR",
      ContentType::Review => "REVIEW",
      ContentType::Cinematography => "CINEMATOGRAPHY",
      ContentType::VideoEdit => "VIDEO_EDIT",
      ContentType::Photography => "PHOTOGRAPHY",
      ContentType::Trip => "TRIP",
    }
  }
}

impl fmt::Display for ContentType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ContentType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = normalize(s);
    ContentType::ALL
      .into_iter()
      .find(|t| t.as_str() == wanted)
      .ok_or_else(|| Error::UnknownContentType(s.to_owned()))
  }
}

/// Upper-case and accept `-` for `_`, so `video-edit` parses as `VIDEO_EDIT`.
fn normalize(s: &str) -> String {
  s.trim().to_ascii_uppercase().replace('-', "_")
}

// ─── Item ────────────────────────────────────────────────────────────────────

/// A single portfolio entry as persisted in the item collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
  pub id:           String,
  pub title:        String,
  pub description:  String,
  pub category:     Category,
  #[serde(rename = "type")]
  pub content_type: ContentType,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub media_url:    Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub link_url:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tags:         Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date:         Option<String>,
  /// Attribution line; only meaningful for [`ContentType::Review`].
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author:       Option<String>,
  /// Fields this schema does not know about, carried through rewrites.
  #[serde(flatten)]
  pub extra:        Map<String, Value>,
}

impl Item {
  /// Whether `content_type` is listed under `category`'s tab strip.
  pub fn is_conventional(&self) -> bool {
    self.content_type.category() == self.category
  }

  /// The media to display, falling back to the placeholder image.
  pub fn display_media(&self) -> &str {
    match self.media_url.as_deref() {
      Some(url) if !url.is_empty() => url,
      _ => PLACEHOLDER_MEDIA_URL,
    }
  }

  pub(crate) fn from_draft(id: String, draft: NewItem) -> Self {
    Self {
      id,
      title: draft.title,
      description: draft.description,
      category: draft.category,
      content_type: draft.content_type,
      media_url: draft.media_url,
      link_url: draft.link_url,
      tags: draft.tags,
      date: draft.date,
      author: draft.author,
      extra: Map::new(),
    }
  }
}

/// An [`Item`] before the store has assigned it an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
  pub title:        String,
  pub description:  String,
  pub category:     Category,
  #[serde(rename = "type")]
  pub content_type: ContentType,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub media_url:    Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub link_url:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tags:         Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date:         Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author:       Option<String>,
}

impl NewItem {
  /// A draft with only the required fields set.
  pub fn new(
    title: impl Into<String>,
    description: impl Into<String>,
    category: Category,
    content_type: ContentType,
  ) -> Self {
    Self {
      title: title.into(),
      description: description.into(),
      category,
      content_type,
      media_url: None,
      link_url: None,
      tags: None,
      date: None,
      author: None,
    }
  }

  pub fn is_conventional(&self) -> bool {
    self.content_type.category() == self.category
  }
}

/// Split a comma-separated tag string, trimming entries and dropping blanks.
///
/// A string with no tags yields an empty list, which is stored as `[]`.
pub fn parse_tags(raw: &str) -> Vec<String> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .map(str::to_owned)
    .collect()
}
