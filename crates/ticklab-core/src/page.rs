//! The playground page: banner color, visibility toggle, dynamic list.
//!
//! One explicit struct instead of module-level display references; every
//! mutation returns the [`Event`] it produced. Randomness comes from a
//! seedable PCG so runs can be made deterministic.

use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use serde::{Deserialize, Serialize};

use crate::config::PageConfig;
use crate::events::Event;

/// Banner color palette.
pub const TEXT_COLORS: [&str; 8] = [
    "#e53e3e", "#dd6b20", "#d69e2e", "#38a169", "#319795", "#3182ce", "#5a67d8", "#805ad5",
];

/// Labels new list items are drawn from.
pub const ITEM_LABELS: [&str; 6] = [
    "New Task",
    "Important Note",
    "Reminder",
    "Shopping Item",
    "Meeting",
    "Project Update",
];

/// The two items the list starts with; `reset_all` keeps them.
pub const SEED_ITEMS: [&str; 2] = ["Learn the basics", "Practice every day"];

/// Serializable snapshot of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub banner_color: Option<String>,
    pub hidden: bool,
    pub items: Vec<String>,
}

/// Mutable page state.
pub struct PageState {
    palette: Vec<String>,
    item_labels: Vec<String>,
    banner_color: Option<String>,
    hidden: bool,
    items: Vec<String>,
    rng: Pcg64Mcg,
}

impl PageState {
    pub fn new(config: &PageConfig) -> Self {
        Self::with_seed(config, rand::thread_rng().gen())
    }

    /// Deterministic construction for tests and scripted demos.
    pub fn with_seed(config: &PageConfig, seed: u64) -> Self {
        Self {
            palette: config.palette.clone(),
            item_labels: config.item_labels.clone(),
            banner_color: None,
            hidden: false,
            items: SEED_ITEMS.iter().map(|s| s.to_string()).collect(),
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn banner_color(&self) -> Option<&str> {
        self.banner_color.as_deref()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            banner_color: self.banner_color.clone(),
            hidden: self.hidden,
            items: self.items.clone(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Give the banner a random palette color.
    pub fn change_text(&mut self) -> Event {
        let index = self.rng.gen_range(0..self.palette.len());
        let color = self.palette[index].clone();
        self.banner_color = Some(color.clone());
        Event::BannerRecolored {
            color,
            at: Utc::now(),
        }
    }

    /// Toggle the hidden class on the content block.
    pub fn toggle_visibility(&mut self) -> Event {
        self.hidden = !self.hidden;
        Event::VisibilityToggled {
            hidden: self.hidden,
            at: Utc::now(),
        }
    }

    /// Append a numbered random item, e.g. `Reminder 3`.
    pub fn add_item(&mut self) -> Event {
        let index = self.rng.gen_range(0..self.item_labels.len());
        let label = format!("{} {}", self.item_labels[index], self.items.len() + 1);
        self.items.push(label.clone());
        Event::ItemAdded {
            label,
            position: self.items.len(),
            at: Utc::now(),
        }
    }

    /// Restore the initial state: default banner, visible content, seed
    /// items only.
    pub fn reset_all(&mut self) -> Event {
        self.banner_color = None;
        self.hidden = false;
        self.items.truncate(SEED_ITEMS.len());
        Event::PageReset { at: Utc::now() }
    }
}
