//! Seam between the panel and the host platform's item store.
//!
//! The host owns the data layer; this crate only asks it one question:
//! "give me the items matching this status set, sorted by title." The
//! store is responsible for both the filter and the sort. Items whose
//! edit location cannot be resolved are dropped here, before rendering.

use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{CatalogEntry, CatalogQuery, ItemStatus, SortOrder};

/// Errors surfaced by the item store seam.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("item store query failed: {0}")]
    Query(String),
}

/// One item as reported by the host store, before resolution failures
/// are filtered out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreItem {
    /// Host-side identifier of the item.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Lifecycle status.
    pub status: ItemStatus,
    /// Edit-view URL, or `None` when the host cannot resolve one
    /// (deleted or inaccessible record).
    pub edit_url: Option<String>,
}

/// Ordered list-fetch capability provided by the host platform.
///
/// Implementations must apply the query's status filter and title sort;
/// callers rely on the returned order.
pub trait ItemStore {
    fn items(&self, query: &CatalogQuery) -> Result<Vec<StoreItem>, StoreError>;
}

/// Fetch the entries the panel will render.
///
/// Items without a resolvable edit URL are omitted entirely rather than
/// rendered with a broken destination; each omission is logged.
pub fn fetch_entries<S: ItemStore + ?Sized>(
    store: &S,
    query: &CatalogQuery,
) -> Result<Vec<CatalogEntry>, StoreError> {
    let items = store.items(query)?;
    let total = items.len();

    let mut entries = Vec::with_capacity(total);
    for item in items {
        match item.edit_url {
            Some(url) => entries.push(CatalogEntry::new(item.title, url)),
            None => {
                warn!(
                    item_id = item.id,
                    title = %item.title,
                    "skipping item without a resolvable edit URL"
                );
            }
        }
    }

    debug!(total, rendered = entries.len(), "fetched catalog entries");
    Ok(entries)
}

/// Vec-backed [`ItemStore`] for hosts that hold the item list in memory,
/// and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Vec<StoreItem>,
}

impl MemoryStore {
    pub fn new(items: Vec<StoreItem>) -> Self {
        MemoryStore { items }
    }
}

impl ItemStore for MemoryStore {
    fn items(&self, query: &CatalogQuery) -> Result<Vec<StoreItem>, StoreError> {
        let mut out: Vec<StoreItem> = self
            .items
            .iter()
            .filter(|item| query.statuses.contains(&item.status))
            .cloned()
            .collect();

        out.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        if query.order == SortOrder::Descending {
            out.reverse();
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    fn item(id: u64, title: &str, status: ItemStatus, edit_url: Option<&str>) -> StoreItem {
        StoreItem {
            id,
            title: title.to_string(),
            status,
            edit_url: edit_url.map(str::to_string),
        }
    }

    #[derive(Clone)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let mut inner = self.0.lock().expect("log buffer lock");
            inner.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs<F: FnOnce()>(f: F) -> String {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let writer = LogBuffer(buf.clone());
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_target(false)
            .with_max_level(Level::DEBUG)
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = buf.lock().expect("log buffer lock").clone();
        String::from_utf8_lossy(&bytes).to_string()
    }

    #[test]
    fn memory_store_filters_by_status_and_sorts_by_title() {
        let store = MemoryStore::new(vec![
            item(1, "red hat", ItemStatus::Published, Some("/edit/1")),
            item(2, "Blue Shirt", ItemStatus::Draft, Some("/edit/2")),
            item(3, "Old Mug", ItemStatus::Other("trash".to_string()), Some("/edit/3")),
            item(4, "Green Scarf", ItemStatus::Private, Some("/edit/4")),
        ]);

        let items = store.items(&CatalogQuery::default()).unwrap();
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Blue Shirt", "Green Scarf", "red hat"]);
    }

    #[test]
    fn memory_store_descending_reverses_order() {
        let store = MemoryStore::new(vec![
            item(1, "Apple", ItemStatus::Published, Some("/edit/1")),
            item(2, "Banana", ItemStatus::Published, Some("/edit/2")),
        ]);

        let query = CatalogQuery {
            order: SortOrder::Descending,
            ..CatalogQuery::default()
        };
        let items = store.items(&query).unwrap();
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Banana", "Apple"]);
    }

    #[test]
    fn fetch_entries_omits_items_without_edit_url() {
        let store = MemoryStore::new(vec![
            item(1, "Blue Shirt", ItemStatus::Published, Some("/edit/1")),
            item(2, "Ghost Item", ItemStatus::Published, None),
            item(3, "Red Hat", ItemStatus::Published, Some("/edit/3")),
        ]);

        let entries = fetch_entries(&store, &CatalogQuery::default()).unwrap();
        assert_eq!(
            entries,
            vec![
                CatalogEntry::new("Blue Shirt", "/edit/1"),
                CatalogEntry::new("Red Hat", "/edit/3"),
            ]
        );
    }

    #[test]
    fn fetch_entries_logs_skipped_items() {
        let store = MemoryStore::new(vec![item(7, "Ghost Item", ItemStatus::Draft, None)]);

        let logs = capture_logs(|| {
            let entries = fetch_entries(&store, &CatalogQuery::default()).unwrap();
            assert!(entries.is_empty());
        });

        assert!(logs.contains("skipping item without a resolvable edit URL"));
        assert!(logs.contains("Ghost Item"));
    }

    #[test]
    fn fetch_entries_empty_store_is_not_an_error() {
        let store = MemoryStore::default();
        let entries = fetch_entries(&store, &CatalogQuery::default()).unwrap();
        assert!(entries.is_empty());
    }
}
