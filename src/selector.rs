//! In-memory model of the rendered choice list.
//!
//! This mirrors the inline panel script exactly, so the filter semantics can
//! be exercised without a browser: the option list is built once from the
//! fetched entries (placeholder first), and every query change recomputes
//! per-option visibility in place. Hidden options are never removed, and
//! the order never changes.

use crate::model::CatalogEntry;

/// Default label of the inert "nothing selected" first option.
pub const PLACEHOLDER_LABEL: &str = "Select a product...";

/// One option in the choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Display label; also the text the filter matches against.
    pub label: String,
    /// Navigation target. `None` marks the placeholder.
    pub target_url: Option<String>,
    /// Whether the option participates in visual layout.
    pub visible: bool,
}

impl SelectOption {
    pub fn is_placeholder(&self) -> bool {
        self.target_url.is_none()
    }
}

/// The choice list plus the current search text.
///
/// Constructed once per page render; the query is the only mutable state
/// and is discarded on navigation.
#[derive(Debug, Clone)]
pub struct Selector {
    options: Vec<SelectOption>,
    query: String,
}

impl Selector {
    /// Build the option list: the placeholder first, then one option per
    /// entry in the order given. Everything starts visible.
    pub fn new(entries: &[CatalogEntry]) -> Self {
        Self::with_placeholder(entries, PLACEHOLDER_LABEL)
    }

    /// Same as [`Selector::new`] with a custom placeholder label.
    pub fn with_placeholder(entries: &[CatalogEntry], placeholder: &str) -> Self {
        let mut options = Vec::with_capacity(entries.len() + 1);
        options.push(SelectOption {
            label: placeholder.to_string(),
            target_url: None,
            visible: true,
        });
        for entry in entries {
            options.push(SelectOption {
                label: entry.label.clone(),
                target_url: Some(entry.target_url.clone()),
                visible: true,
            });
        }

        Selector {
            options,
            query: String::new(),
        }
    }

    /// Current search text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Every option, hidden ones included, in render order.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Options currently visible, in render order.
    pub fn visible(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter().filter(|option| option.visible)
    }

    /// Replace the search text and recompute option visibility.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    /// Resolve a selection (index into the full option list) to a
    /// navigation target. The placeholder and out-of-range indexes
    /// resolve to no navigation.
    pub fn select(&self, index: usize) -> Option<&str> {
        self.options
            .get(index)
            .and_then(|option| option.target_url.as_deref())
    }

    /// Recompute visibility using case-insensitive substring matching.
    /// The placeholder is never evaluated and stays visible.
    fn refilter(&mut self) {
        let q = self.query.to_lowercase();
        for option in &mut self.options {
            if option.is_placeholder() {
                continue;
            }
            option.visible = q.is_empty() || option.label.to_lowercase().contains(&q);
        }
    }
}
