use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::Command;
use crate::tui::app::App;
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Apply a single-line editing key to `text` with the cursor at byte
/// `cursor`. Returns the new text and cursor, or None if `key` is not an
/// editing key.
pub(super) fn edit_text(text: &str, cursor: usize, key: KeyEvent) -> Option<(String, usize)> {
    let cursor = cursor.min(text.len());
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('u') if ctrl => Some((String::new(), 0)),
        KeyCode::Char('a') if ctrl => Some((text.to_string(), 0)),
        KeyCode::Char('e') if ctrl => Some((text.to_string(), text.len())),
        KeyCode::Char(c) if !ctrl && !alt => {
            let mut out = text.to_string();
            out.insert(cursor, c);
            Some((out, cursor + c.len_utf8()))
        }
        KeyCode::Backspace => {
            let Some(start) = prev_grapheme_boundary(text, cursor) else {
                return Some((text.to_string(), cursor));
            };
            let mut out = text.to_string();
            out.replace_range(start..cursor, "");
            Some((out, start))
        }
        KeyCode::Delete => {
            let Some(end) = next_grapheme_boundary(text, cursor) else {
                return Some((text.to_string(), cursor));
            };
            let mut out = text.to_string();
            out.replace_range(cursor..end, "");
            Some((out, cursor))
        }
        KeyCode::Left => {
            let pos = prev_grapheme_boundary(text, cursor).unwrap_or(0);
            Some((text.to_string(), pos))
        }
        KeyCode::Right => {
            let pos = next_grapheme_boundary(text, cursor).unwrap_or(text.len());
            Some((text.to_string(), pos))
        }
        KeyCode::Home => Some((text.to_string(), 0)),
        KeyCode::End => Some((text.to_string(), text.len())),
        _ => None,
    }
}

/// Route an editing key into the draft. Returns false if the key was not
/// an editing key.
pub(super) fn edit_draft(app: &mut App, key: KeyEvent) -> bool {
    let Some((text, cursor)) = edit_text(app.tasks.draft(), app.draft_cursor, key) else {
        return false;
    };
    if text != app.tasks.draft() {
        app.dispatch(Command::SetDraft(text));
    }
    app.draft_cursor = cursor;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::tests::{ctrl, key};

    #[test]
    fn insert_in_middle() {
        let (text, cursor) = edit_text("Buy mlk", 5, key(KeyCode::Char('i'))).unwrap();
        assert_eq!(text, "Buy milk");
        assert_eq!(cursor, 6);
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let s = "cafe\u{0301}";
        let (text, cursor) = edit_text(s, s.len(), key(KeyCode::Backspace)).unwrap();
        assert_eq!(text, "caf");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn backspace_and_delete_at_edges_are_noops() {
        assert_eq!(
            edit_text("ab", 0, key(KeyCode::Backspace)),
            Some(("ab".to_string(), 0))
        );
        assert_eq!(
            edit_text("ab", 2, key(KeyCode::Delete)),
            Some(("ab".to_string(), 2))
        );
    }

    #[test]
    fn delete_forward() {
        let (text, cursor) = edit_text("你好", 0, key(KeyCode::Delete)).unwrap();
        assert_eq!(text, "好");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn cursor_movement() {
        assert_eq!(edit_text("你好", 6, key(KeyCode::Left)).unwrap().1, 3);
        assert_eq!(edit_text("你好", 3, key(KeyCode::Right)).unwrap().1, 6);
        assert_eq!(edit_text("abc", 2, key(KeyCode::Home)).unwrap().1, 0);
        assert_eq!(edit_text("abc", 0, key(KeyCode::End)).unwrap().1, 3);
        assert_eq!(edit_text("abc", 3, ctrl('a')).unwrap().1, 0);
    }

    #[test]
    fn ctrl_u_clears() {
        assert_eq!(edit_text("abc", 2, ctrl('u')), Some((String::new(), 0)));
    }

    #[test]
    fn non_editing_keys_pass_through() {
        assert_eq!(edit_text("abc", 0, key(KeyCode::Enter)), None);
        assert_eq!(edit_text("abc", 0, key(KeyCode::Esc)), None);
        assert_eq!(edit_text("abc", 0, ctrl('x')), None);
    }
}
