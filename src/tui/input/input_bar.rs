use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::Command;
use crate::tui::app::{App, Focus};

use super::*;

pub(super) fn handle_input_bar(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let draft = app.tasks.draft().to_string();
            app.dispatch(Command::AddTask(draft));
        }
        KeyCode::Tab | KeyCode::Down | KeyCode::Esc => {
            if !app.tasks.is_empty() {
                app.focus = Focus::List;
            } else if key.code == KeyCode::Esc {
                app.should_quit = true;
            }
        }
        _ => {
            edit_draft(app, key);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tui::app::Focus;
    use crate::tui::input::handle_key;
    use crate::tui::input::tests::{key, new_app, type_str};
    use crossterm::event::KeyCode;

    #[test]
    fn enter_adds_draft() {
        let mut app = new_app();
        type_str(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.tasks.tasks().len(), 1);
        assert_eq!(app.tasks.tasks()[0].text, "Buy milk");
        assert_eq!(app.tasks.draft(), "");
        assert_eq!(app.draft_cursor, 0);
    }

    #[test]
    fn enter_on_blank_draft_keeps_it() {
        let mut app = new_app();
        type_str(&mut app, "   ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.tasks.is_empty());
        assert_eq!(app.tasks.draft(), "   ");
    }

    #[test]
    fn tab_moves_to_list_only_when_nonempty() {
        let mut app = new_app();
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Input);

        type_str(&mut app, "a");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn esc_on_empty_app_quits() {
        let mut app = new_app();
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
