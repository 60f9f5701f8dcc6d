//! Record list panel view-model.
//!
//! Clicking a row moves the highlight and glides the viewport to the row,
//! reloads re-select the stored index, and the panel collapses while its
//! list is empty.

use crate::input::{translate_input, InputEvent, UiAction};
use crate::render::{FrameSize, RenderFrame, TextRole};
use crate::scroll::{ScrollPlan, DEFAULT_DURATION_MS};

/// Rows kept visible above the selected row after a scroll-to.
const SCROLL_MARGIN_ROWS: usize = 1;

/// Panel input result: signals the app layer what changed.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    /// No app-level action needed.
    None,
    /// The highlight moved; the app should update the stored index.
    Selected { index: usize, plan: ScrollPlan },
    /// Enter on a row: the app decides what confirming means.
    Confirm { index: usize },
    /// Escape: the app owns navigation.
    Back,
}

/// View-model for one selectable record list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPanelModel {
    title: String,
    rows: Vec<String>,
    selected: usize,
    scroll_top: usize,
    viewport_rows: usize,
    collapsed: bool,
}

impl ListPanelModel {
    #[must_use]
    pub fn new(title: &str, viewport_rows: usize) -> Self {
        Self {
            title: title.to_owned(),
            rows: Vec::new(),
            selected: 0,
            scroll_top: 0,
            viewport_rows: viewport_rows.max(1),
            collapsed: true,
        }
    }

    // -- accessors -----------------------------------------------------------

    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    /// The panel slides away while its list is empty.
    #[must_use]
    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    // -- data population -----------------------------------------------------

    /// Replace all rows after an external reload and re-select the stored
    /// index, clamped to the new length. The viewport jumps (no glide) the
    /// way the host re-selects on load. Returns the index actually selected.
    pub fn reload(&mut self, rows: Vec<String>, stored_index: usize) -> usize {
        self.rows = rows;
        self.collapsed = self.rows.is_empty();
        self.selected = stored_index.min(self.rows.len().saturating_sub(1));
        self.scroll_top = self.target_offset(self.selected);
        self.selected
    }

    // -- selection -----------------------------------------------------------

    /// Select a row as a list click would: move the highlight and produce
    /// the eased glide that brings the row into view. Out-of-range clicks
    /// are ignored.
    pub fn click(&mut self, row: usize) -> Option<ScrollPlan> {
        if row >= self.rows.len() {
            return None;
        }
        self.selected = row;
        let target = self.target_offset(row);
        let plan = ScrollPlan::vertical(
            self.scroll_top as f64,
            target as f64,
            DEFAULT_DURATION_MS,
        );
        self.scroll_top = target;
        Some(plan)
    }

    /// Route a key event. Movement keys shift the highlight one row and
    /// keep it inside the viewport.
    pub fn update(&mut self, event: InputEvent) -> PanelAction {
        match translate_input(&event) {
            UiAction::MoveUp => self.move_selection(-1),
            UiAction::MoveDown => self.move_selection(1),
            UiAction::Confirm => {
                if self.rows.is_empty() {
                    PanelAction::None
                } else {
                    PanelAction::Confirm {
                        index: self.selected,
                    }
                }
            }
            UiAction::Cancel => PanelAction::Back,
            UiAction::Noop | UiAction::Refresh => PanelAction::None,
        }
    }

    fn move_selection(&mut self, delta: isize) -> PanelAction {
        if self.rows.is_empty() {
            return PanelAction::None;
        }
        let max_idx = self.rows.len() - 1;
        let next = if delta < 0 {
            self.selected.saturating_sub(1)
        } else {
            (self.selected + 1).min(max_idx)
        };
        if next == self.selected {
            return PanelAction::None;
        }
        match self.click(next) {
            Some(plan) => PanelAction::Selected { index: next, plan },
            None => PanelAction::None,
        }
    }

    fn target_offset(&self, row: usize) -> usize {
        let max_scroll = self.rows.len().saturating_sub(self.viewport_rows);
        row.saturating_sub(SCROLL_MARGIN_ROWS).min(max_scroll)
    }

    // -- rendering -----------------------------------------------------------

    /// Render the title row plus the scroll-clipped viewport; the selected
    /// row carries the highlight.
    #[must_use]
    pub fn render(&self, size: FrameSize) -> RenderFrame {
        let mut frame = RenderFrame::new(size);
        frame.draw_text(0, 0, &self.title, TextRole::Muted);

        if self.collapsed {
            frame.draw_text(1, 1, "(empty)", TextRole::Muted);
            return frame;
        }

        let visible_rows = size.height.saturating_sub(1).min(self.viewport_rows);
        for line in 0..visible_rows {
            let row = self.scroll_top + line;
            let Some(label) = self.rows.get(row) else {
                break;
            };
            if row == self.selected {
                frame.draw_text(0, line + 1, &format!("> {label}"), TextRole::Accent);
            } else {
                frame.draw_text(2, line + 1, label, TextRole::Primary);
            }
        }
        frame
    }
}
