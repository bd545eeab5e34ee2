//! Inline CSS for the quick switch panel.

/// Generate the panel styles, scoped to the given element ids.
///
/// The search box and dropdown stretch to the panel's full width; options
/// hidden by the filter are removed from layout, not dimmed.
pub fn generate_styles(search_box_id: &str, select_id: &str) -> String {
    format!(
        r#"#{search_box_id} {{
    width: 100%;
    margin-bottom: 5px;
}}
#{select_id} {{
    width: 100%;
}}
#{select_id} option[style*="display: none"] {{
    display: none;
}}"#
    )
}
