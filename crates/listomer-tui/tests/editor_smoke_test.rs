#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Drives the editor shell through a realistic session: build up both lists,
//! navigate, hit the empty-list guard, and check the rendered output.

use chrono::{DateTime, TimeZone, Utc};
use listomer_core::session::SessionStore;
use listomer_core::trigger::OperationKind;
use listomer_tui::app::{EditorApp, ListKind};
use listomer_tui::input::{InputEvent, Key, KeyEvent};
use listomer_tui::render::FrameSize;

fn at(second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 4, 11, 0, second).unwrap()
}

#[test]
fn full_editing_session_stays_consistent() {
    let mut app = EditorApp::new(4);

    // Build three isotopomers and one method.
    app.press(ListKind::Isotopomers, OperationKind::Add, at(0));
    app.press(ListKind::Isotopomers, OperationKind::Add, at(1));
    app.press(ListKind::Isotopomers, OperationKind::Add, at(2));
    app.press(ListKind::Methods, OperationKind::Add, at(3));

    assert_eq!(app.document().isotopomers.len(), 3);
    assert_eq!(app.document().methods.len(), 1);
    assert_eq!(app.selection().isotopomer_index, 2);
    assert_eq!(app.selection().method_index, 0);

    // Duplicate the first isotopomer via click + toolbar.
    app.click(ListKind::Isotopomers, 0).expect("click");
    app.press(ListKind::Isotopomers, OperationKind::Duplicate, at(4));
    assert_eq!(app.document().isotopomers.len(), 4);
    assert_eq!(app.selection().isotopomer_index, 3);

    // Delete it again; the selection clamps to the previous record.
    app.press(ListKind::Isotopomers, OperationKind::Delete, at(5));
    assert_eq!(app.document().isotopomers.len(), 3);
    assert_eq!(app.selection().isotopomer_index, 2);

    // Keyboard navigation keeps the stored index in sync with the panel.
    app.handle_input(
        ListKind::Isotopomers,
        InputEvent::Key(KeyEvent::plain(Key::Up)),
    );
    assert_eq!(app.selection().isotopomer_index, 1);
    assert_eq!(app.panel(ListKind::Isotopomers).selected(), 1);

    // The submitted document reflects every mutation so far.
    let submitted = app.submit().expect("submit");
    assert_eq!(
        submitted["isotopomers"]
            .as_array()
            .map(std::vec::Vec::len),
        Some(3)
    );
    assert_eq!(submitted["methods"][0]["name"], "Method-0");
}

#[test]
fn empty_list_guard_blocks_until_acknowledged() {
    let mut app = EditorApp::new(4);

    app.press(ListKind::Methods, OperationKind::Duplicate, at(0));
    let notice = app.notice().expect("notice").to_owned();
    assert_eq!(
        notice,
        "cannot copy method from an empty list; add a method first"
    );

    // Everything is blocked while the notice is up.
    app.press(ListKind::Methods, OperationKind::Add, at(1));
    assert!(app.document().methods.is_empty());
    assert!(app.click(ListKind::Methods, 0).is_none());

    // The rendered footer carries the notice.
    let frame = app.render(FrameSize {
        width: 60,
        height: 5,
    });
    assert!(frame.row_text(4).contains("cannot copy method"));

    // One key dismisses it; the next press goes through.
    app.handle_input(
        ListKind::Methods,
        InputEvent::Key(KeyEvent::plain(Key::Enter)),
    );
    app.press(ListKind::Methods, OperationKind::Add, at(2));
    assert_eq!(app.document().methods.len(), 1);
}

#[test]
fn session_survives_a_save_and_restore() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = SessionStore::new(dir.path()).expect("store");

    let mut app = EditorApp::new(4);
    app.press(ListKind::Isotopomers, OperationKind::Add, at(0));
    app.press(ListKind::Isotopomers, OperationKind::Add, at(1));
    app.press(ListKind::Methods, OperationKind::Add, at(2));
    app.click(ListKind::Isotopomers, 0).expect("click");
    app.save_session(&store, at(3)).expect("save");

    let (restored, warnings) = EditorApp::restore(&store, 4);
    assert!(warnings.is_empty());
    assert_eq!(restored.document(), app.document());
    assert_eq!(restored.selection().isotopomer_index, 0);
    assert_eq!(restored.panel(ListKind::Isotopomers).selected(), 0);
    assert!(!restored.panel(ListKind::Methods).collapsed());
}

#[test]
fn decomposed_curve_clicks_drive_the_isotopomer_panel() {
    let mut app = EditorApp::new(4);
    for second in 0..3 {
        app.press(ListKind::Isotopomers, OperationKind::Add, at(second));
    }
    app.set_decomposition(true, vec![vec![2, 0, 1]]);

    app.curve_click(1).expect("curve click");
    assert_eq!(app.selection().isotopomer_index, 0);
    assert_eq!(app.panel(ListKind::Isotopomers).selected(), 0);

    // A curve past the list is ignored.
    assert!(app.curve_click(9).is_none());
}
