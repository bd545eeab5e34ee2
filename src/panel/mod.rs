//! Rendering of the quick switch panel.
//!
//! The panel is a self-contained markup fragment: inline styles, a search
//! box, the dropdown, and the inline filter script. Rendering is a pure
//! function of the entry list; the only side effects are tracing logs.

pub mod escape;
pub mod scripts;
pub mod styles;
pub mod template;

pub use template::{PanelOptions, SEARCH_BOX_ID, SELECT_ID, render_panel};
