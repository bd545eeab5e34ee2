//! Searchable quick-switch panel for catalog item edit screens.
//!
//! Given the host platform's item store, this crate renders a side panel
//! with a search box and a dropdown listing every catalog item. Typing in
//! the box filters the dropdown by case-insensitive substring match;
//! picking an entry navigates to that item's edit screen. There is no
//! server round-trip after the initial render: the whole list is fetched
//! once per page view and filtered client-side.
//!
//! The host platform stays behind two seams:
//!
//! - [`ItemStore`] — the ordered list-fetch capability (status filter +
//!   title sort belong to the host's data layer).
//! - [`PanelHost`] — panel registration and placement on the edit screen.
//!
//! Typical wiring:
//!
//! ```
//! use std::sync::Arc;
//! use product_quick_switch::{
//!     ItemStatus, MemoryStore, PanelOptions, StoreItem, register_quick_switch,
//! };
//! # use product_quick_switch::{PanelHost, PanelSpec};
//! # #[derive(Default)]
//! # struct Host(Vec<PanelSpec>);
//! # impl PanelHost for Host {
//! #     fn add_panel(&mut self, spec: PanelSpec) { self.0.push(spec); }
//! #     fn remove_panel(&mut self, id: &str) -> Option<PanelSpec> {
//! #         let idx = self.0.iter().position(|p| p.id == id)?;
//! #         Some(self.0.remove(idx))
//! #     }
//! # }
//! # let mut host = Host::default();
//!
//! let store = Arc::new(MemoryStore::new(vec![StoreItem {
//!     id: 1,
//!     title: "Blue Shirt".to_string(),
//!     status: ItemStatus::Published,
//!     edit_url: Some("/edit/1".to_string()),
//! }]));
//!
//! register_quick_switch(&mut host, store, PanelOptions::default());
//! ```
//!
//! The filter semantics are implemented twice on purpose: once as the
//! inline script shipped with the markup (what the browser runs) and once
//! as the native [`Selector`] model, so the contract is testable without a
//! browser.

pub mod model;
pub mod panel;
pub mod registry;
pub mod selector;
pub mod store;

pub use model::{CatalogEntry, CatalogQuery, ItemStatus, SortOrder};
pub use panel::{PanelOptions, render_panel};
pub use registry::{
    EditScreen, PanelContext, PanelHost, PanelPriority, PanelSpec, register_quick_switch,
};
pub use selector::{PLACEHOLDER_LABEL, SelectOption, Selector};
pub use store::{ItemStore, MemoryStore, StoreError, StoreItem, fetch_entries};
