//! Editor app shell.
//!
//! Wires toolbar triggers through the operation selector and keeps the
//! document cache, selection indices, and list panels in sync. Refused
//! operations surface as a blocking notice line that swallows input until
//! acknowledged, matching the front end's blocking alert.

use chrono::{DateTime, Utc};
use serde_json::Value;

use listomer_core::document::Document;
use listomer_core::error::CoreError;
use listomer_core::record::{Isotopomer, ListRecord, Method};
use listomer_core::selection::SelectionState;
use listomer_core::selector::{select_operation, SelectorOutcome, SelectorState};
use listomer_core::session::{SessionSnapshot, SessionStore};
use listomer_core::trigger::{OperationKind, TriggerSet};

use crate::curve_map::resolve_curve_click;
use crate::input::InputEvent;
use crate::panel::{ListPanelModel, PanelAction};
use crate::render::{FrameSize, RenderFrame, TextRole};
use crate::scroll::ScrollPlan;

/// Which managed list an event addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Isotopomers,
    Methods,
}

/// The record-list editor: document cache, selection, selector history,
/// and one panel per managed list.
#[derive(Debug, Clone)]
pub struct EditorApp {
    document: Document,
    selection: SelectionState,

    isotopomer_selector: SelectorState,
    method_selector: SelectorState,
    isotopomer_triggers: TriggerSet,
    method_triggers: TriggerSet,

    isotopomer_panel: ListPanelModel,
    method_panel: ListPanelModel,

    edited_isotopomer: Option<Isotopomer>,
    edited_method: Option<Method>,

    curve_map: Vec<Vec<usize>>,
    decompose: bool,

    status_line: String,
    notice: Option<String>,
}

impl EditorApp {
    #[must_use]
    pub fn new(viewport_rows: usize) -> Self {
        Self {
            document: Document::default(),
            selection: SelectionState::default(),
            isotopomer_selector: SelectorState::new(),
            method_selector: SelectorState::new(),
            isotopomer_triggers: TriggerSet::default(),
            method_triggers: TriggerSet::default(),
            isotopomer_panel: ListPanelModel::new("isotopomers", viewport_rows),
            method_panel: ListPanelModel::new("methods", viewport_rows),
            edited_isotopomer: None,
            edited_method: None,
            curve_map: Vec::new(),
            decompose: false,
            status_line: String::new(),
            notice: None,
        }
    }

    /// Rebuild the editor from a persisted session snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: SessionSnapshot, viewport_rows: usize) -> Self {
        let mut app = Self::new(viewport_rows);
        app.document = snapshot.document;
        app.selection = snapshot.selection;
        app.selection
            .clamp(app.document.isotopomers.len(), app.document.methods.len());
        app.reload_panels();
        app
    }

    /// Restore from the session store; recovery warnings pass through for
    /// the caller to surface.
    #[must_use]
    pub fn restore(store: &SessionStore, viewport_rows: usize) -> (Self, Vec<String>) {
        let recovery = store.load();
        let app = match recovery.snapshot {
            Some(snapshot) => Self::from_snapshot(snapshot, viewport_rows),
            None => Self::new(viewport_rows),
        };
        (app, recovery.warnings)
    }

    /// Persist the current selection and document cache.
    pub fn save_session(&self, store: &SessionStore, at: DateTime<Utc>) -> Result<(), CoreError> {
        store.save(&SessionSnapshot::new(
            self.selection,
            self.document.clone(),
            at,
        ))
    }

    // -- accessors -----------------------------------------------------------

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    #[must_use]
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// The active blocking notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn acknowledge_notice(&mut self) {
        self.notice = None;
    }

    #[must_use]
    pub fn panel(&self, list: ListKind) -> &ListPanelModel {
        match list {
            ListKind::Isotopomers => &self.isotopomer_panel,
            ListKind::Methods => &self.method_panel,
        }
    }

    // -- form buffers --------------------------------------------------------

    /// Stage form contents for the next modify on the isotopomer list.
    pub fn set_edited_isotopomer(&mut self, record: Isotopomer) {
        self.edited_isotopomer = Some(record);
    }

    /// Stage form contents for the next modify on the method list.
    pub fn set_edited_method(&mut self, record: Method) {
        self.edited_method = Some(record);
    }

    // -- toolbar -------------------------------------------------------------

    /// Handle a toolbar press for one list: stamp the trigger, run the
    /// selector, and sync the cache and panels with the outcome. Ignored
    /// while a blocking notice is up.
    pub fn press(&mut self, list: ListKind, kind: OperationKind, at: DateTime<Utc>) {
        if self.notice.is_some() {
            return;
        }
        match list {
            ListKind::Isotopomers => self.press_isotopomer(kind, at),
            ListKind::Methods => self.press_method(kind, at),
        }
    }

    fn press_isotopomer(&mut self, kind: OperationKind, at: DateTime<Utc>) {
        self.isotopomer_triggers.stamp(kind, at);
        let edited = self
            .edited_isotopomer
            .clone()
            .or_else(|| {
                self.document
                    .isotopomers
                    .get(self.selection.isotopomer_index)
                    .cloned()
            })
            .unwrap_or_else(|| Isotopomer::default_new(0));

        match select_operation(
            &mut self.isotopomer_selector,
            self.isotopomer_triggers,
            &self.document.isotopomers,
            self.selection.isotopomer_index,
            edited,
        ) {
            Ok(SelectorOutcome::Apply { result, selected }) => {
                let applied = result.kind();
                let index = result.index();
                if let Err(err) = self.document.apply_isotopomer(&result) {
                    self.notice = Some(err.to_string());
                    return;
                }
                self.selection.select_isotopomer(selected);
                self.edited_isotopomer = None;
                self.reload_panels();
                self.status_line = format!("{} isotopomer at index {index}", applied.as_str());
            }
            Ok(SelectorOutcome::NoUpdate) => {}
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    fn press_method(&mut self, kind: OperationKind, at: DateTime<Utc>) {
        self.method_triggers.stamp(kind, at);
        let edited = self
            .edited_method
            .clone()
            .or_else(|| {
                self.document
                    .methods
                    .get(self.selection.method_index)
                    .cloned()
            })
            .unwrap_or_else(|| Method::default_new(0));

        match select_operation(
            &mut self.method_selector,
            self.method_triggers,
            &self.document.methods,
            self.selection.method_index,
            edited,
        ) {
            Ok(SelectorOutcome::Apply { result, selected }) => {
                let applied = result.kind();
                let index = result.index();
                if let Err(err) = self.document.apply_method(&result) {
                    self.notice = Some(err.to_string());
                    return;
                }
                self.selection.select_method(selected);
                self.edited_method = None;
                self.reload_panels();
                self.status_line = format!("{} method at index {index}", applied.as_str());
            }
            Ok(SelectorOutcome::NoUpdate) => {}
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    // -- selection -----------------------------------------------------------

    /// A list click: move the highlight and the stored index, returning the
    /// scroll glide. Ignored while a blocking notice is up.
    pub fn click(&mut self, list: ListKind, row: usize) -> Option<ScrollPlan> {
        if self.notice.is_some() {
            return None;
        }
        let plan = match list {
            ListKind::Isotopomers => self.isotopomer_panel.click(row),
            ListKind::Methods => self.method_panel.click(row),
        }?;
        match list {
            ListKind::Isotopomers => self.selection.select_isotopomer(row),
            ListKind::Methods => self.selection.select_method(row),
        }
        Some(plan)
    }

    /// A click on a decomposed spectrum curve selects the record the curve
    /// belongs to.
    pub fn curve_click(&mut self, curve: usize) -> Option<ScrollPlan> {
        let mapped = resolve_curve_click(
            curve,
            self.decompose,
            &self.curve_map,
            self.selection.method_index,
            self.document.isotopomers.len(),
        )?;
        self.click(ListKind::Isotopomers, mapped)
    }

    /// Replace the curve mapping delivered with a new simulation.
    pub fn set_decomposition(&mut self, decompose: bool, map: Vec<Vec<usize>>) {
        self.decompose = decompose;
        self.curve_map = map;
    }

    /// Route a key event to one panel. A blocking notice swallows the event
    /// to dismiss itself first.
    pub fn handle_input(&mut self, list: ListKind, event: InputEvent) -> PanelAction {
        if self.notice.take().is_some() {
            return PanelAction::None;
        }
        let action = match list {
            ListKind::Isotopomers => self.isotopomer_panel.update(event),
            ListKind::Methods => self.method_panel.update(event),
        };
        if let PanelAction::Selected { index, .. } = &action {
            match list {
                ListKind::Isotopomers => self.selection.select_isotopomer(*index),
                ListKind::Methods => self.selection.select_method(*index),
            }
        }
        action
    }

    // -- output --------------------------------------------------------------

    /// Serialize the document for the external sync layer.
    pub fn submit(&self) -> Result<Value, CoreError> {
        self.document.submit()
    }

    /// Render both panels side by side with the status/notice footer.
    #[must_use]
    pub fn render(&self, size: FrameSize) -> RenderFrame {
        let mut frame = RenderFrame::new(size);
        let content_height = size.height.saturating_sub(1);
        let half = size.width / 2;

        let left = self.isotopomer_panel.render(FrameSize {
            width: half,
            height: content_height,
        });
        let right = self.method_panel.render(FrameSize {
            width: size.width.saturating_sub(half),
            height: content_height,
        });
        frame.blit(&left, 0, 0);
        frame.blit(&right, half, 0);

        let footer_y = size.height.saturating_sub(1);
        if let Some(notice) = &self.notice {
            frame.draw_text(0, footer_y, &format!("! {notice}"), TextRole::Danger);
        } else {
            frame.draw_text(0, footer_y, &self.status_line, TextRole::Muted);
        }
        frame
    }

    // -- internal ------------------------------------------------------------

    fn reload_panels(&mut self) {
        let isotopomer_rows: Vec<String> = self
            .document
            .isotopomers
            .iter()
            .map(ListRecord::summary)
            .collect();
        self.selection.isotopomer_index = self
            .isotopomer_panel
            .reload(isotopomer_rows, self.selection.isotopomer_index);

        let method_rows: Vec<String> = self
            .document
            .methods
            .iter()
            .map(ListRecord::summary)
            .collect();
        self.selection.method_index = self
            .method_panel
            .reload(method_rows, self.selection.method_index);
    }
}
