mod draft;
mod input_bar;
mod list;
mod modal;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};
use crate::ops::Command;

// Submodules reach shared helpers through `use super::*;`
#[allow(unused_imports)]
use draft::*;
use input_bar::*;
use list::*;
use modal::*;

/// Handle a key event for whichever widget has focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // The edit dialog captures all input while open
    if app.tasks.is_modal_open() {
        handle_modal(app, key);
        return;
    }

    match app.focus {
        Focus::Input => handle_input_bar(app, key),
        Focus::List => handle_list(app, key),
    }
}

/// Handle a bracketed paste. Text lands in the draft at the cursor with
/// newlines flattened to spaces; ignored while the list has focus.
pub fn handle_paste(app: &mut App, text: &str) {
    if !app.tasks.is_modal_open() && app.focus != Focus::Input {
        return;
    }
    let clean = text.replace('\r', "").replace('\n', " ");
    if clean.is_empty() {
        return;
    }
    let mut draft = app.tasks.draft().to_string();
    let at = app.draft_cursor.min(draft.len());
    draft.insert_str(at, &clean);
    app.dispatch(Command::SetDraft(draft));
    app.draft_cursor = at + clean.len();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppConfig;
    use crossterm::event::{KeyEventKind, KeyEventState};

    pub(super) fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    pub(super) fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    pub(super) fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    pub(super) fn new_app() -> App {
        App::new(&AppConfig::default())
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = new_app();
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn paste_inserts_at_cursor_and_flattens_newlines() {
        let mut app = new_app();
        type_str(&mut app, "Buy ");
        handle_paste(&mut app, "oat\r\nmilk");
        assert_eq!(app.tasks.draft(), "Buy oat milk");
        assert_eq!(app.draft_cursor, "Buy oat milk".len());
    }

    #[test]
    fn paste_ignored_on_list() {
        let mut app = new_app();
        app.focus = Focus::List;
        handle_paste(&mut app, "text");
        assert_eq!(app.tasks.draft(), "");
    }
}
