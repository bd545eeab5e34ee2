//! Catalog entry model shared by the store seam, the selector, and the
//! panel renderer.

use serde::{Deserialize, Serialize};

/// Lifecycle statuses an item can be in.
///
/// The four named variants are the common statuses every host platform has;
/// `Other` covers host-specific custom statuses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ItemStatus {
    Published,
    Draft,
    Pending,
    Private,
    Other(String),
}

impl ItemStatus {
    /// Host-conventional status slug.
    pub fn as_str(&self) -> &str {
        match self {
            ItemStatus::Published => "publish",
            ItemStatus::Draft => "draft",
            ItemStatus::Pending => "pending",
            ItemStatus::Private => "private",
            ItemStatus::Other(s) => s,
        }
    }

    /// The statuses included by default when fetching the item list.
    pub fn common() -> Vec<ItemStatus> {
        vec![
            ItemStatus::Published,
            ItemStatus::Draft,
            ItemStatus::Pending,
            ItemStatus::Private,
        ]
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort direction for the item-list fetch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Filter and ordering handed to the item store.
///
/// The default matches what the panel wants: every common lifecycle status,
/// title ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Statuses to include in the fetch.
    pub statuses: Vec<ItemStatus>,
    /// Title sort direction.
    pub order: SortOrder,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        CatalogQuery {
            statuses: ItemStatus::common(),
            order: SortOrder::Ascending,
        }
    }
}

/// One selectable item in the dropdown: a display label plus the edit-view
/// URL a selection navigates to. Immutable once rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub label: String,
    pub target_url: String,
}

impl CatalogEntry {
    pub fn new(label: impl Into<String>, target_url: impl Into<String>) -> Self {
        CatalogEntry {
            label: label.into(),
            target_url: target_url.into(),
        }
    }
}
