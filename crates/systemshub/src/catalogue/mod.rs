//! The catalogue store.
//!
//! A [`Catalogue`] is built once from configuration, validated, and then
//! shared read-only (behind an `Arc`) by the HTTP API and the view models.
//! Lookups never fail: absence is reported as `None`.

pub mod defaults;
mod item;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

pub use item::{is_valid_key, Item, KEY_PATTERN};

#[cfg(test)]
pub(crate) use item::fixture;

/// Site-level settings echoed by the API and views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name. The health endpoint reports `"<name> API"`.
    pub name: String,
    /// One-line site description.
    pub description: String,
    /// Domain passed to the analytics script.
    pub analytics_domain: String,
    /// External "view all" catalogue link. Gated on detail views.
    pub all_items_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Roblox Systems Hub".to_string(),
            description:
                "Professional Roblox development systems — Movement, NPC AI, Combat, and more."
                    .to_string(),
            analytics_domain: "yourdomain.io".to_string(),
            all_items_url: "https://ouo.io/MrWrM2".to_string(),
        }
    }
}

/// Immutable, validated catalogue of items.
#[derive(Debug, Clone)]
pub struct Catalogue {
    site: SiteConfig,
    items: Vec<Item>,
}

impl Catalogue {
    /// Build a catalogue, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCatalogue`] if `items` is empty,
    /// [`Error::InvalidKey`] if a key is not URL-safe, and
    /// [`Error::DuplicateKey`] if two items share a key.
    pub fn new(site: SiteConfig, mut items: Vec<Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyCatalogue);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &mut items {
            if !is_valid_key(&item.key) {
                return Err(Error::InvalidKey {
                    key: item.key.clone(),
                });
            }
            if !seen.insert(item.key.clone()) {
                return Err(Error::DuplicateKey {
                    key: item.key.clone(),
                });
            }
            item.dedup_tags();
        }

        debug!("Catalogue built with {} items", items.len());
        Ok(Self { site, items })
    }

    /// Build the built-in catalogue.
    ///
    /// # Errors
    ///
    /// Only fails if the built-in data violates the catalogue invariants.
    pub fn builtin() -> Result<Self> {
        Self::new(SiteConfig::default(), defaults::builtin_items())
    }

    /// Site-level settings.
    #[must_use]
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Every item, in configured order.
    #[must_use]
    pub fn list_all(&self) -> &[Item] {
        &self.items
    }

    /// Exact, case-sensitive lookup.
    #[must_use]
    pub fn get_by_key(&self, key: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.key == key)
    }

    /// The featured item, or the first item when none is featured.
    ///
    /// When several items are featured the first of them wins.
    #[must_use]
    pub fn get_default(&self) -> &Item {
        // Construction guarantees at least one item.
        self.items
            .iter()
            .find(|item| item.featured)
            .unwrap_or(&self.items[0])
    }

    /// Items carrying `tag`, in configured order.
    #[must_use]
    pub fn with_tag(&self, tag: &str) -> Vec<&Item> {
        self.items.iter().filter(|item| item.has_tag(tag)).collect()
    }

    /// Every item except the one with `key`.
    #[must_use]
    pub fn others(&self, key: &str) -> Vec<&Item> {
        self.items.iter().filter(|item| item.key != key).collect()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; an empty catalogue cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalogue(items: Vec<Item>) -> Catalogue {
        Catalogue::new(SiteConfig::default(), items).unwrap()
    }

    #[test]
    fn test_builtin_catalogue_is_valid() {
        let cat = Catalogue::builtin().unwrap();
        assert_eq!(cat.len(), 4);
        assert!(!cat.is_empty());
    }

    #[test]
    fn test_empty_catalogue_rejected() {
        let err = Catalogue::new(SiteConfig::default(), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyCatalogue));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = Catalogue::new(
            SiteConfig::default(),
            vec![fixture("a", false), fixture("b", false), fixture("a", true)],
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateKey { key } if key == "a"));
    }

    #[test]
    fn test_invalid_key_rejected() {
        let err = Catalogue::new(SiteConfig::default(), vec![fixture("not ok", false)])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidKey { .. }));
    }

    #[test]
    fn test_every_key_resolves_to_its_item() {
        let cat = Catalogue::builtin().unwrap();
        for item in cat.list_all() {
            let found = cat.get_by_key(&item.key).unwrap();
            assert_eq!(found.key, item.key);
            let count = cat
                .list_all()
                .iter()
                .filter(|other| other.key == item.key)
                .count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn test_unknown_key_is_none() {
        let cat = Catalogue::builtin().unwrap();
        assert!(cat.get_by_key("does-not-exist").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let cat = Catalogue::builtin().unwrap();
        assert!(cat.get_by_key("combat-system").is_some());
        assert!(cat.get_by_key("Combat-System").is_none());
    }

    #[test]
    fn test_default_is_featured_item() {
        let cat = catalogue(vec![
            fixture("a", false),
            fixture("b", true),
            fixture("c", false),
        ]);
        assert_eq!(cat.get_default().key, "b");
    }

    #[test]
    fn test_default_falls_back_to_first() {
        let cat = catalogue(vec![fixture("a", false), fixture("b", false)]);
        assert_eq!(cat.get_default().key, "a");
    }

    #[test]
    fn test_default_first_featured_wins() {
        let cat = catalogue(vec![
            fixture("a", false),
            fixture("b", true),
            fixture("c", true),
        ]);
        assert_eq!(cat.get_default().key, "b");
    }

    #[test]
    fn test_builtin_default_is_combat_system() {
        let cat = Catalogue::builtin().unwrap();
        assert_eq!(cat.get_default().key, "combat-system");
    }

    #[test]
    fn test_list_all_preserves_order() {
        let cat = catalogue(vec![fixture("z", false), fixture("a", false)]);
        let keys: Vec<_> = cat.list_all().iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_reads_are_repeatable() {
        let cat = Catalogue::builtin().unwrap();
        let first = serde_json::to_string(cat.list_all()).unwrap();
        let second = serde_json::to_string(cat.list_all()).unwrap();
        assert_eq!(first, second);

        let a = serde_json::to_string(cat.get_by_key("npc-factory").unwrap()).unwrap();
        let b = serde_json::to_string(cat.get_by_key("npc-factory").unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_with_tag() {
        let cat = Catalogue::builtin().unwrap();
        let keys: Vec<_> = cat.with_tag("npc").iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["movement-system", "npc-factory"]);
        assert!(cat.with_tag("nope").is_empty());
    }

    #[test]
    fn test_others_excludes_key() {
        let cat = Catalogue::builtin().unwrap();
        let others = cat.others("combat-system");
        assert_eq!(others.len(), 3);
        assert!(others.iter().all(|i| i.key != "combat-system"));
    }

    #[test]
    fn test_tags_deduplicated_on_build() {
        let mut item = fixture("a", false);
        item.tags = vec!["x".into(), "x".into()];
        let cat = catalogue(vec![item]);
        assert_eq!(cat.list_all()[0].tags, vec!["x".to_string()]);
    }
}
