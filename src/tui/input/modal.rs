use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::Command;
use crate::tui::app::App;

use super::*;

pub(super) fn handle_modal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let draft = app.tasks.draft().to_string();
            app.dispatch(Command::SaveEdit(draft));
        }
        KeyCode::Esc => {
            app.dispatch(Command::CloseModal);
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
    use crate::tui::input::tests::{ctrl, key, new_app, type_str};
    use crossterm::event::KeyCode;

    #[test]
    fn edit_and_save() {
        let mut app = new_app();
        type_str(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Enter));
        app.focus = Focus::List;
        handle_key(&mut app, key(KeyCode::Char('e')));

        handle_key(&mut app, ctrl('u'));
        type_str(&mut app, "Buy bread");
        handle_key(&mut app, key(KeyCode::Enter));

        assert!(!app.tasks.is_modal_open());
        assert_eq!(app.tasks.tasks()[0].text, "Buy bread");
        assert_eq!(app.tasks.draft(), "");
    }

    #[test]
    fn typing_q_in_dialog_does_not_quit() {
        let mut app = new_app();
        type_str(&mut app, "a");
        handle_key(&mut app, key(KeyCode::Enter));
        app.focus = Focus::List;
        handle_key(&mut app, key(KeyCode::Enter));
        type_str(&mut app, "q");
        assert!(!app.should_quit);
        assert_eq!(app.tasks.draft(), "aq");
    }

    #[test]
    fn esc_discards_and_clears_draft() {
        let mut app = new_app();
        type_str(&mut app, "a");
        handle_key(&mut app, key(KeyCode::Enter));
        app.focus = Focus::List;
        handle_key(&mut app, key(KeyCode::Char('e')));
        type_str(&mut app, "bc");
        handle_key(&mut app, key(KeyCode::Esc));

        assert!(!app.tasks.is_modal_open());
        assert_eq!(app.tasks.tasks()[0].text, "a");
        assert_eq!(app.tasks.draft(), "");
    }
}
