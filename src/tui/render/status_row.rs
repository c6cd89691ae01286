use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};

/// Key hints for the widget that has focus
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.tasks.is_modal_open() {
        return vec![("Enter", "save"), ("Esc", "cancel")];
    }
    match app.focus {
        Focus::Input => {
            let mut hints = vec![("Enter", "add")];
            if !app.tasks.is_empty() {
                hints.push(("Tab", "list"));
            }
            hints.push(("^C", "quit"));
            hints
        }
        Focus::List => {
            let mut hints = vec![("Space", "select"), ("e", "edit")];
            if app.tasks.can_delete() {
                hints.push(("D", "delete"));
            }
            hints.push(("i", "new"));
            hints.push(("q", "quit"));
            hints
        }
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default().fg(app.theme.accent).bg(bg);
    let desc_style = Style::default().fg(app.theme.placeholder).bg(bg);

    let mut spans = vec![Span::styled(" ", desc_style)];
    for (i, (key, desc)) in hints(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", desc_style));
        }
        spans.push(Span::styled(key, key_style));
        spans.push(Span::styled(format!(" {}", desc), desc_style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
