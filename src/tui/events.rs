use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from terminal events
///
/// Actions are mode-agnostic: the selection state decides what a key means while the
/// preview is open (for example `UpdateSearch('j')` scrolls instead of typing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// `esc`: clear the filter, close the preview, or quit
    ClearSearch,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Home,
    End,
    Select,
    TogglePreview,
    UpdateSearch(char),
    DeleteChar,
    DeleteWord,
    ClearLine,
    Resize(u16, u16),
    None,
}

/// Poll for terminal events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if !event::poll(timeout)? {
        return Ok(Action::None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(key_to_action(key)),
        Event::Resize(width, height) => Ok(Action::Resize(width, height)),
        _ => Ok(Action::None),
    }
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::ClearSearch,

        // Navigation
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,
        (KeyCode::Home, _) => Action::Home,
        (KeyCode::End, _) => Action::End,

        // Actions
        (KeyCode::Enter, _) => Action::Select,
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::TogglePreview,

        // Filter editing
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => Action::DeleteWord,
        (KeyCode::Backspace, KeyModifiers::ALT) => Action::DeleteWord,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearLine,
        (KeyCode::Backspace, _) => Action::DeleteChar,
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::UpdateSearch(c)
        }

        _ => Action::None,
    }
}
