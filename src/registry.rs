//! Panel registration against the host platform.
//!
//! The host owns the edit screen and its panel slots; this crate hands it
//! one panel spec with a render callback and asks for a specific position:
//! the side column, directly above the host's submit panel.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::model::CatalogQuery;
use crate::panel::{PanelOptions, render_panel};
use crate::store::{ItemStore, fetch_entries};

/// Panel id of the quick switch panel.
pub const PANEL_ID: &str = "quick-switch-box";
/// Panel title shown by the host.
pub const PANEL_TITLE: &str = "Quick Product Switch";
/// Id of the host's publish/save panel the quick switch is pinned above.
pub const SUBMIT_PANEL_ID: &str = "submitdiv";

/// Screen column a panel is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelContext {
    Side,
    Normal,
}

/// Placement priority within a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPriority {
    High,
    Core,
    Default,
    Low,
}

/// Screen-scoped context handed to a panel's render callback.
#[derive(Debug, Clone, Default)]
pub struct EditScreen {
    /// Identifier of the item currently being edited, when the host
    /// knows it.
    pub item_id: Option<u64>,
}

/// Render callback invoked once per page view of the editing screen.
pub type RenderFn = Box<dyn Fn(&EditScreen) -> String + Send + Sync>;

/// One panel registration.
pub struct PanelSpec {
    pub id: String,
    pub title: String,
    pub context: PanelContext,
    pub priority: PanelPriority,
    pub render: RenderFn,
}

impl fmt::Debug for PanelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelSpec")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("context", &self.context)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Panel machinery provided by the host platform.
pub trait PanelHost {
    /// Add a panel to the edit screen. Panels added later in the same
    /// context render lower on the screen.
    fn add_panel(&mut self, spec: PanelSpec);

    /// Remove a panel by id, returning it so it can be re-added in a
    /// different position.
    fn remove_panel(&mut self, id: &str) -> Option<PanelSpec>;

    /// Declare compatibility with an optional host storage feature.
    /// Hosts that do not track feature compatibility can ignore this.
    fn declare_feature_compatibility(&mut self, _feature: &str) {}
}

/// Register the quick switch panel on the item edit screen.
///
/// The host's submit panel is removed and re-added after ours so the quick
/// switch appears directly above it in the side column. The render
/// callback fetches the entry list fresh on every page view; a store
/// failure degrades to the empty panel rather than surfacing an error to
/// the operator.
pub fn register_quick_switch<H, S>(host: &mut H, store: Arc<S>, options: PanelOptions)
where
    H: PanelHost + ?Sized,
    S: ItemStore + Send + Sync + 'static,
{
    host.declare_feature_compatibility("custom-item-storage");

    let submit = host.remove_panel(SUBMIT_PANEL_ID);

    host.add_panel(PanelSpec {
        id: PANEL_ID.to_string(),
        title: PANEL_TITLE.to_string(),
        context: PanelContext::Side,
        priority: PanelPriority::High,
        render: Box::new(move |_screen: &EditScreen| {
            let query = CatalogQuery::default();
            let entries = match fetch_entries(store.as_ref(), &query) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(error = %err, "item store query failed; rendering empty panel");
                    Vec::new()
                }
            };
            render_panel(&entries, &options)
        }),
    });

    if let Some(submit) = submit {
        host.add_panel(submit);
    }

    info!(panel = PANEL_ID, "quick switch panel registered");
}
