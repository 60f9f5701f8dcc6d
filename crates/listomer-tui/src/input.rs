//! Canonical input events consumed by the panel view-models.

/// Canonical key set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Up,
    Down,
}

/// Canonical keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            shift: false,
            ctrl: false,
            alt: false,
        }
    }
}

/// Canonical key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::none(),
        }
    }
}

/// Canonical frame resize event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeEvent {
    pub width: usize,
    pub height: usize,
}

/// Stable input stream event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(ResizeEvent),
    Tick,
}

/// High-level actions produced by input translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Noop,
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
    Refresh,
}

/// Default keymap shared by the panel view-models.
#[must_use]
pub fn translate_input(event: &InputEvent) -> UiAction {
    match event {
        InputEvent::Key(KeyEvent { key: Key::Up, .. })
        | InputEvent::Key(KeyEvent {
            key: Key::Char('k'),
            ..
        }) => UiAction::MoveUp,
        InputEvent::Key(KeyEvent { key: Key::Down, .. })
        | InputEvent::Key(KeyEvent {
            key: Key::Char('j'),
            ..
        }) => UiAction::MoveDown,
        InputEvent::Key(KeyEvent {
            key: Key::Enter, ..
        }) => UiAction::Confirm,
        InputEvent::Key(KeyEvent {
            key: Key::Escape, ..
        }) => UiAction::Cancel,
        InputEvent::Resize(_) | InputEvent::Tick => UiAction::Refresh,
        InputEvent::Key(_) => UiAction::Noop,
    }
}
