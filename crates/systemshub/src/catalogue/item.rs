//! Catalogue item records.
//!
//! An [`Item`] describes one downloadable system: display text, tags, the
//! external links shown on its detail view, and how long a visitor waits
//! before the repository link unlocks.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Pattern every item key must match. Keys appear verbatim in URLs.
pub const KEY_PATTERN: &str = r"^[A-Za-z0-9_-]+$";

fn key_regex() -> &'static Regex {
    static KEY_RE: OnceLock<Regex> = OnceLock::new();
    KEY_RE.get_or_init(|| Regex::new(KEY_PATTERN).expect("KEY_PATTERN is a valid regex"))
}

/// Check whether `key` is URL-safe.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    key_regex().is_match(key)
}

/// A single catalogue entry.
///
/// Serialized camelCase; optional fields are omitted from JSON when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique, URL-safe identity.
    pub key: String,

    /// Full title shown on the detail view.
    pub title: String,

    /// Short name used on cards and countdown text.
    pub display_name: String,

    /// One-paragraph description.
    pub description: String,

    /// Emoji or short glyph used when no thumbnail is configured.
    #[serde(default)]
    pub icon: String,

    /// Thumbnail image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// Free-form tags. Defaults to empty; duplicates are dropped on load.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Link to the developer notes. Never gated.
    pub dev_notes_url: String,

    /// Link to the repository. Gated behind the unlock countdown.
    pub repo_url: String,

    /// Link to the tutorial video. Never gated.
    pub video_url: String,

    /// Seconds a visitor waits before the repository link unlocks.
    #[serde(default)]
    pub wait_seconds: u32,

    /// Whether this item is the featured one on the list view.
    #[serde(default)]
    pub featured: bool,

    /// Short developer notes shown next to the dev-notes link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Accent gradient start colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_from: Option<String>,

    /// Accent gradient end colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_to: Option<String>,
}

impl Item {
    /// Check whether this item carries `tag` (exact match).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Drop repeated tags, keeping the first occurrence of each.
    pub(crate) fn dedup_tags(&mut self) {
        let mut seen = HashSet::new();
        self.tags.retain(|tag| seen.insert(tag.clone()));
    }
}

#[cfg(test)]
pub(crate) fn fixture(key: &str, featured: bool) -> Item {
    Item {
        key: key.to_string(),
        title: format!("{key} title"),
        display_name: format!("{key} name"),
        description: format!("{key} description"),
        icon: "*".to_string(),
        thumbnail_url: None,
        tags: Vec::new(),
        dev_notes_url: format!("https://notes.example/{key}"),
        repo_url: format!("https://repo.example/{key}"),
        video_url: format!("https://video.example/{key}"),
        wait_seconds: 3,
        featured,
        notes: None,
        gradient_from: None,
        gradient_to: None,
    }
}
