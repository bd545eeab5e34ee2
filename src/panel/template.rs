//! Panel markup assembly.
//!
//! No template engine: the fragment is small and built with `format!`.
//! Structure matches what the inline script expects: a `<style>` block,
//! the search `<input>`, the `<select>` with the placeholder first, and
//! the `<script>` last.

use tracing::{debug, warn};

use super::escape::{escape_attr, escape_text, escape_url};
use super::{scripts, styles};
use crate::model::CatalogEntry;
use crate::selector::PLACEHOLDER_LABEL;

/// Element id of the search box.
pub const SEARCH_BOX_ID: &str = "qs-search-box";
/// Element id of the dropdown.
pub const SELECT_ID: &str = "qs-quick-switch";

const SEARCH_PLACEHOLDER: &str = "Search products...";

/// Host-tunable strings for the rendered panel.
#[derive(Debug, Clone)]
pub struct PanelOptions {
    /// Label of the inert first option.
    pub placeholder_label: String,
    /// Placeholder text shown in the empty search box.
    pub search_placeholder: String,
}

impl Default for PanelOptions {
    fn default() -> Self {
        PanelOptions {
            placeholder_label: PLACEHOLDER_LABEL.to_string(),
            search_placeholder: SEARCH_PLACEHOLDER.to_string(),
        }
    }
}

/// Render the complete panel fragment for the given entries.
///
/// Entries whose target URL fails sanitization are omitted; an empty entry
/// list renders a panel with just the placeholder option.
pub fn render_panel(entries: &[CatalogEntry], options: &PanelOptions) -> String {
    let option_list = render_options(entries, &options.placeholder_label);

    debug!(
        entries = entries.len(),
        bytes = option_list.len(),
        "rendering quick switch panel"
    );

    format!(
        r#"<style>
{css}
</style>
<input type="text" id="{search_box_id}" placeholder="{search_placeholder}" />
<select id="{select_id}">
{option_list}</select>
<script>
{js}
</script>"#,
        css = styles::generate_styles(SEARCH_BOX_ID, SELECT_ID),
        search_box_id = SEARCH_BOX_ID,
        search_placeholder = escape_attr(&options.search_placeholder),
        select_id = SELECT_ID,
        option_list = option_list,
        js = scripts::generate_filter_js(SEARCH_BOX_ID, SELECT_ID),
    )
}

/// Render the option list: placeholder first, then one option per entry.
///
/// Each entry's label lands in two contexts with two encoders (visible
/// text and the searchable `data-label` attribute), and its target in a
/// third (the URL-sanitized `value`).
fn render_options(entries: &[CatalogEntry], placeholder_label: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "    <option value=\"\">{}</option>\n",
        escape_text(placeholder_label)
    ));

    for entry in entries {
        let Some(url) = escape_url(&entry.target_url) else {
            warn!(
                label = %entry.label,
                target = %entry.target_url,
                "dropping entry with an unrenderable target URL"
            );
            continue;
        };
        out.push_str(&format!(
            "    <option value=\"{url}\" data-label=\"{attr}\">{text}</option>\n",
            url = url,
            attr = escape_attr(&entry.label),
            text = escape_text(&entry.label),
        ));
    }

    out
}
