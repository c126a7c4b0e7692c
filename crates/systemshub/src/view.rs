//! Render-free view models for the list, detail and not-found pages.
//!
//! These carry everything a template needs and nothing about markup. The
//! detail view owns the gated links whose state follows an unlock countdown.

use serde::Serialize;

use crate::catalogue::{Catalogue, Item};
use crate::unlock::{progress_percent, UnlockState, UnlockTimer};

/// Path of an item's detail page.
#[must_use]
pub fn detail_path(key: &str) -> String {
    format!("/systems/{key}")
}

/// Card artwork: a thumbnail when configured, otherwise icon on a gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Artwork {
    /// Remote thumbnail image.
    Thumbnail {
        /// Image URL.
        url: String,
    },
    /// Icon drawn over an accent gradient.
    Icon {
        /// Emoji or glyph.
        icon: String,
        /// Gradient start colour, if configured.
        from: Option<String>,
        /// Gradient end colour, if configured.
        to: Option<String>,
    },
}

impl Artwork {
    fn for_item(item: &Item) -> Self {
        match &item.thumbnail_url {
            Some(url) => Self::Thumbnail { url: url.clone() },
            None => Self::Icon {
                icon: item.icon.clone(),
                from: item.gradient_from.clone(),
                to: item.gradient_to.clone(),
            },
        }
    }
}

/// Summary card linking to a detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCard {
    /// Item key.
    pub key: String,
    /// Short display name.
    pub display_name: String,
    /// Item description.
    pub description: String,
    /// Tag badges.
    pub tags: Vec<String>,
    /// Unlock wait shown as "Ns unlock".
    pub wait_seconds: u32,
    /// Detail page path.
    pub href: String,
    /// Card artwork.
    pub artwork: Artwork,
}

impl From<&Item> for ItemCard {
    fn from(item: &Item) -> Self {
        Self {
            key: item.key.clone(),
            display_name: item.display_name.clone(),
            description: item.description.clone(),
            tags: item.tags.clone(),
            wait_seconds: item.wait_seconds,
            href: detail_path(&item.key),
            artwork: Artwork::for_item(item),
        }
    }
}

/// The catalogue landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    /// Site name for the hero heading.
    pub site_name: String,
    /// Site tagline.
    pub site_description: String,
    /// Hero card.
    pub featured: ItemCard,
    /// Grid cards, in catalogue order.
    pub items: Vec<ItemCard>,
}

impl ListView {
    /// Build the landing page, optionally restricted to items with `tag`.
    ///
    /// The featured card is always the catalogue default, even when a tag
    /// filter excludes it from the list.
    #[must_use]
    pub fn new(catalogue: &Catalogue, tag: Option<&str>) -> Self {
        let items = match tag {
            Some(tag) => catalogue.with_tag(tag).into_iter().map(ItemCard::from).collect(),
            None => catalogue.list_all().iter().map(ItemCard::from).collect(),
        };
        Self {
            site_name: catalogue.site().name.clone(),
            site_description: catalogue.site().description.clone(),
            featured: ItemCard::from(catalogue.get_default()),
            items,
        }
    }
}

/// A link that stays inert until its countdown completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatedLink {
    url: String,
    unlocked: bool,
}

impl GatedLink {
    fn locked(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            unlocked: false,
        }
    }

    /// Navigation target, or `None` while locked.
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        self.unlocked.then_some(self.url.as_str())
    }

    /// Whether the link is navigable.
    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Follow the countdown. Once unlocked a link never locks again.
    fn apply(&mut self, state: UnlockState) {
        if state.is_complete() {
            self.unlocked = true;
        }
    }
}

/// Countdown panel text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountdownPanel {
    /// State the panel was built from.
    pub state: UnlockState,
    /// Progress bar fill.
    pub progress_percent: u8,
    /// Large heading.
    pub headline: String,
    /// Small text under the progress bar.
    pub caption: String,
}

impl CountdownPanel {
    fn new(display_name: &str, wait_seconds: u32, state: UnlockState) -> Self {
        match state {
            UnlockState::Counting { remaining } => Self {
                state,
                progress_percent: progress_percent(wait_seconds, state),
                headline: format!("Preparing {display_name}..."),
                caption: format!(
                    "Link will be available in {remaining} second{}",
                    if remaining == 1 { "" } else { "s" }
                ),
            },
            UnlockState::Complete => Self {
                state,
                progress_percent: 100,
                headline: format!("{display_name} Ready"),
                caption: "Verified by creator".to_string(),
            },
        }
    }
}

/// An item's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    /// The item being viewed.
    pub item: Item,
    /// Hero artwork.
    pub artwork: Artwork,
    /// Countdown panel.
    pub countdown: CountdownPanel,
    /// Repository download link. Gated.
    pub repo: GatedLink,
    /// External "view all" catalogue link. Gated.
    pub all_items: GatedLink,
    /// Tutorial video link. Never gated.
    pub video_url: String,
    /// Developer notes link. Never gated.
    pub dev_notes_url: String,
    /// Catalogue size, for the "view all N+" label.
    pub total_items: usize,
    /// The whole catalogue, current item included, for the expandable
    /// "all systems" panel.
    pub systems: Vec<ItemCard>,
}

impl DetailView {
    fn new(catalogue: &Catalogue, item: &Item) -> Self {
        let state = UnlockTimer::new(item.wait_seconds).state();
        let mut view = Self {
            item: item.clone(),
            artwork: Artwork::for_item(item),
            countdown: CountdownPanel::new(&item.display_name, item.wait_seconds, state),
            repo: GatedLink::locked(&item.repo_url),
            all_items: GatedLink::locked(&catalogue.site().all_items_url),
            video_url: item.video_url.clone(),
            dev_notes_url: item.dev_notes_url.clone(),
            total_items: catalogue.len(),
            systems: catalogue.list_all().iter().map(ItemCard::from).collect(),
        };
        view.repo.apply(state);
        view.all_items.apply(state);
        view
    }

    /// Update the page from the countdown state.
    pub fn apply(&mut self, state: UnlockState) {
        // Complete is terminal; ignore stale Counting updates after it.
        if self.countdown.state.is_complete() {
            return;
        }
        self.countdown = CountdownPanel::new(&self.item.display_name, self.item.wait_seconds, state);
        self.repo.apply(state);
        self.all_items.apply(state);
    }
}

/// Page shown for an unknown key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundView {
    /// The key that didn't match.
    pub key: String,
    /// Page heading.
    pub title: String,
    /// Explanation naming the key.
    pub message: String,
    /// Link back to the catalogue.
    pub back_href: String,
    /// Label for the back link.
    pub back_label: String,
}

impl NotFoundView {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            title: "System Not Found".to_string(),
            message: format!("The system \"{key}\" doesn't exist yet."),
            back_href: "/".to_string(),
            back_label: "Back to All Systems".to_string(),
        }
    }
}

/// Result of opening a detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum DetailPage {
    /// The item exists.
    Found(Box<DetailView>),
    /// No item has that key.
    NotFound(NotFoundView),
}

impl DetailPage {
    /// Open the detail page for `key`, falling back to the not-found page.
    #[must_use]
    pub fn open(catalogue: &Catalogue, key: &str) -> Self {
        match catalogue.get_by_key(key) {
            Some(item) => Self::Found(Box::new(DetailView::new(catalogue, item))),
            None => Self::NotFound(NotFoundView::new(key)),
        }
    }
}
