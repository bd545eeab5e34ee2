//! Inline JavaScript for the quick switch panel.
//!
//! The generated script is the browser-side twin of [`crate::selector`]:
//! both implement the same visibility recomputation, and the tests for the
//! filter contract run against the native model.

/// Generate the filter-and-navigate script, wired to the given element ids.
///
/// The script is an IIFE so nothing leaks into the host page's global
/// scope. Filtering runs synchronously on every `input` event; options with
/// an empty `value` (the placeholder) are skipped by both the filter and
/// the navigation handler.
pub fn generate_filter_js(search_box_id: &str, select_id: &str) -> String {
    format!(
        r#"(function() {{
    const searchBox = document.getElementById('{search_box_id}');
    const dropdown = document.getElementById('{select_id}');
    if (!searchBox || !dropdown) return;

    function filterOptions() {{
        const query = searchBox.value.toLowerCase();
        for (let option of dropdown.options) {{
            if (!option.value) continue;
            const label = option.getAttribute('data-label').toLowerCase();
            const match = (query === '' || label.includes(query));
            option.style.display = match ? '' : 'none';
        }}
    }}

    searchBox.addEventListener('input', filterOptions);

    dropdown.addEventListener('change', () => {{
        if (dropdown.value) {{
            window.location.href = dropdown.value;
        }}
    }});
}})();"#
    )
}
