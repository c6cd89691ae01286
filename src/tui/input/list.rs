use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::Command;
use crate::tui::app::{App, Focus};

pub(super) fn handle_list(app: &mut App, key: KeyEvent) {
    let len = app.tasks.tasks().len();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Tab => app.focus = Focus::Input,
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.cursor == 0 {
                app.focus = Focus::Input;
            } else {
                app.cursor -= 1;
            }
        }
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.cursor = len.saturating_sub(1),
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.cursor_task_id() {
                app.dispatch(Command::ToggleSelection(id));
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.cursor_task_id() {
                app.dispatch(Command::BeginEdit(id));
            }
        }
        KeyCode::Char('D') | KeyCode::Delete => {
            // Only reachable while the delete button is shown
            if app.tasks.can_delete() {
                app.dispatch(Command::DeleteSelected);
            }
        }
        _ => {}
    }
}
