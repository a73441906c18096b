//! Subcommands and their execution against any [`KeyValueMedium`].

use std::{io::Write, path::PathBuf};

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use folio_core::{
  filter::{ItemFilter, tab_counts},
  item::{Category, ContentType, Item, NewItem, parse_tags},
  medium::KeyValueMedium,
  profile::Profile,
  store::{ITEMS_KEY, ItemStore, ProfileStore},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::settings::OutputFormat;

// ─── Command tree ─────────────────────────────────────────────────────────────

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Show or edit the portfolio owner's profile.
  #[command(subcommand)]
  Profile(ProfileCommand),

  /// List, add and delete portfolio items.
  #[command(subcommand)]
  Items(ItemsCommand),

  /// Print the profile and every item as one JSON document.
  Export,

  /// Replace the profile and the item collection from an exported document.
  Import {
    /// Path to a JSON file produced by `folio export`.
    file: PathBuf,
  },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
  Show,
  /// Overwrite the given fields; the rest keep their stored values.
  Set(ProfileEdit),
}

#[derive(Args, Debug, Default)]
pub struct ProfileEdit {
  #[arg(long)]
  pub name:       Option<String>,
  #[arg(long)]
  pub title:      Option<String>,
  #[arg(long)]
  pub about:      Option<String>,
  #[arg(long)]
  pub university: Option<String>,
  #[arg(long)]
  pub degree:     Option<String>,
  /// Comma-separated, replaces the whole list.
  #[arg(long)]
  pub skills:     Option<String>,
  #[arg(long)]
  pub avatar_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ItemsCommand {
  /// List items in stored order, optionally narrowed to one category or tab.
  List {
    #[arg(long)]
    category:     Option<Category>,
    #[arg(long = "type")]
    content_type: Option<ContentType>,
  },

  /// Show each tab of a category with the number of items under it.
  Tabs { category: Category },

  Add(ItemDraft),

  /// Delete every item with this id. Unknown ids are ignored.
  Delete { id: String },

  /// Replace the collection with the bootstrap items.
  Reset,
}

#[derive(Args, Debug)]
pub struct ItemDraft {
  #[arg(long)]
  pub title:        String,
  #[arg(long)]
  pub description:  String,
  #[arg(long)]
  pub category:     Category,
  #[arg(long = "type")]
  pub content_type: ContentType,
  #[arg(long)]
  pub media_url:    Option<String>,
  #[arg(long)]
  pub link_url:     Option<String>,
  /// Comma-separated; blank entries are dropped. Omitted means no tags.
  #[arg(long)]
  pub tags:         Option<String>,
  #[arg(long)]
  pub date:         Option<String>,
  /// Attribution for reviews.
  #[arg(long)]
  pub author:       Option<String>,
}

impl From<ItemDraft> for NewItem {
  fn from(d: ItemDraft) -> Self {
    NewItem {
      title:        d.title,
      description:  d.description,
      category:     d.category,
      content_type: d.content_type,
      media_url:    d.media_url,
      link_url:     d.link_url,
      tags:         Some(parse_tags(d.tags.as_deref().unwrap_or_default())),
      date:         d.date,
      author:       d.author,
    }
  }
}

/// The document written by `export` and read by `import`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
  pub profile: Profile,
  pub items:   Vec<Item>,
}

// ─── Execution ────────────────────────────────────────────────────────────────

/// Run `command` against `medium`, printing results to `out`.
pub fn run<M, W>(medium: M, command: Command, format: OutputFormat, out: &mut W) -> Result<()>
where
  M: KeyValueMedium + Clone,
  W: Write,
{
  let profiles = ProfileStore::new(medium.clone());
  let items = ItemStore::new(medium.clone());

  match command {
    Command::Profile(ProfileCommand::Show) => {
      let profile = profiles.get_profile().context("reading profile")?;
      print_profile(out, format, &profile)
    }
    Command::Profile(ProfileCommand::Set(edit)) => {
      let mut profile = profiles.get_profile().context("reading profile")?;
      apply_edit(&mut profile, edit);
      profiles.update_profile(&profile).context("writing profile")?;
      print_profile(out, format, &profile)
    }

    Command::Items(ItemsCommand::List { category, content_type }) => {
      let all = items.get_items().context("reading items")?;
      let filter = ItemFilter { category, content_type };
      print_items(out, format, &filter.apply(&all))
    }
    Command::Items(ItemsCommand::Tabs { category }) => {
      let all = items.get_items().context("reading items")?;
      let counts = tab_counts(&all, category);
      match format {
        OutputFormat::Json => {
          let rows: Vec<_> = counts
            .iter()
            .map(|(t, n)| serde_json::json!({ "type": t, "label": t.label(), "count": n }))
            .collect();
          writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        }
        OutputFormat::Text => {
          for (t, n) in counts {
            writeln!(out, "{:<16} {n}", t.label())?;
          }
        }
      }
      Ok(())
    }
    Command::Items(ItemsCommand::Add(draft)) => {
      let draft = NewItem::from(draft);
      if !draft.is_conventional() {
        warn!(
          category = %draft.category,
          content_type = %draft.content_type,
          "content type is not listed under this category; it will not appear in any tab"
        );
      }
      let item = items.add_item(draft).context("adding item")?;
      print_items(out, format, &[&item])
    }
    Command::Items(ItemsCommand::Delete { id }) => {
      let existed = items
        .get_items()
        .context("reading items")?
        .iter()
        .any(|i| i.id == id);
      items.delete_item(&id).context("deleting item")?;
      if format == OutputFormat::Text {
        if existed {
          writeln!(out, "deleted {id}")?;
        } else {
          writeln!(out, "no item with id {id}")?;
        }
      }
      Ok(())
    }
    Command::Items(ItemsCommand::Reset) => {
      let restored = items.restore_defaults().context("restoring bootstrap items")?;
      let refs: Vec<&Item> = restored.iter().collect();
      print_items(out, format, &refs)
    }

    Command::Export => {
      let snapshot = Snapshot {
        profile: profiles.get_profile().context("reading profile")?,
        items:   items.get_items().context("reading items")?,
      };
      writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
      Ok(())
    }
    Command::Import { file } => {
      let raw = std::fs::read_to_string(&file)
        .with_context(|| format!("reading {}", file.display()))?;
      let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", file.display()))?;

      let mut seen = std::collections::HashSet::new();
      for item in &snapshot.items {
        if !seen.insert(item.id.as_str()) {
          warn!(id = %item.id, "duplicate item id in import");
        }
      }

      // Items first: if they fail nothing has changed. If the profile then
      // fails, the previous collection is put back.
      let previous = medium.get(ITEMS_KEY).context("reading items")?;
      items.replace_items(&snapshot.items).context("writing items")?;
      if let Err(err) = profiles.update_profile(&snapshot.profile) {
        // An empty document reads as absent and reseeds.
        let restore = previous.as_deref().unwrap_or_default();
        if let Err(restore_err) = medium.set(ITEMS_KEY, restore) {
          error!(error = %restore_err, "could not restore items after failed import");
        }
        return Err(err).context("writing profile");
      }
      if format == OutputFormat::Text {
        writeln!(out, "imported profile and {} items", snapshot.items.len())?;
      }
      Ok(())
    }
  }
}

fn apply_edit(profile: &mut Profile, edit: ProfileEdit) {
  if let Some(v) = edit.name {
    profile.name = v;
  }
  if let Some(v) = edit.title {
    profile.title = v;
  }
  if let Some(v) = edit.about {
    profile.about = v;
  }
  if let Some(v) = edit.university {
    profile.university = v;
  }
  if let Some(v) = edit.degree {
    profile.degree = v;
  }
  if let Some(v) = edit.skills {
    profile.skills = parse_tags(&v);
  }
  if let Some(v) = edit.avatar_url {
    profile.avatar_url = v;
  }
}

// ─── Output ───────────────────────────────────────────────────────────────────

fn print_profile(out: &mut impl Write, format: OutputFormat, p: &Profile) -> Result<()> {
  match format {
    OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(p)?)?,
    OutputFormat::Text => {
      writeln!(out, "{}", p.name)?;
      writeln!(out, "{}", p.title)?;
      writeln!(out, "{}, {}", p.degree, p.university)?;
      writeln!(out, "skills: {}", p.skills.join(", "))?;
      writeln!(out, "avatar: {}", p.avatar_url)?;
      writeln!(out)?;
      writeln!(out, "{}", p.about)?;
    }
  }
  Ok(())
}

fn print_items(out: &mut impl Write, format: OutputFormat, items: &[&Item]) -> Result<()> {
  match format {
    OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(items)?)?,
    OutputFormat::Text => {
      for item in items {
        writeln!(
          out,
          "{:<22} {:<9} {:<15} {}",
          item.id, item.category, item.content_type, item.title
        )?;
      }
    }
  }
  Ok(())
}
