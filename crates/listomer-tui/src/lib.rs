//! listomer-tui: terminal-style view-model surface for the record-list
//! editor. Panels, input translation, and the app shell stay pure state
//! machines over a cell-grid frame; no terminal backend is attached.

pub mod app;
pub mod curve_map;
pub mod input;
pub mod panel;
pub mod render;
pub mod scroll;

/// Stable crate label used for bootstrap smoke tests.
pub fn crate_label() -> &'static str {
    "listomer-tui"
}
