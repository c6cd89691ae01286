use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Focus};

use super::helpers::field_window;

/// Render the new-task field and its add button
pub fn render_input_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(3), Constraint::Length(6)])
        .split(area);

    let bg = app.theme.background;
    let focused = app.focus == Focus::Input && !app.tasks.is_modal_open();
    let border_color = if focused {
        app.theme.accent
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(chunks[0]);

    // While the edit dialog is open the draft belongs to it
    let draft = if app.tasks.is_modal_open() {
        ""
    } else {
        app.tasks.draft()
    };

    let (line, cursor_col) = if draft.is_empty() {
        let placeholder = Span::styled(
            app.labels.placeholder.clone(),
            Style::default().fg(app.theme.placeholder).bg(bg),
        );
        (Line::from(placeholder), 0)
    } else {
        let (visible, col) = field_window(draft, app.draft_cursor, inner.width as usize);
        let text = Span::styled(visible, Style::default().fg(app.theme.text).bg(bg));
        (Line::from(text), col)
    };
    frame.render_widget(Paragraph::new(line).block(block), chunks[0]);

    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((inner.x + cursor_col as u16, inner.y));
    }

    // Add button, vertically centered beside the field
    let button_area = Rect::new(
        chunks[1].x + 1,
        chunks[1].y + chunks[1].height / 2,
        chunks[1].width.saturating_sub(1),
        chunks[1].height.min(1),
    );
    let button = Paragraph::new(" [+] ").style(Style::default().fg(Color::White).bg(app.theme.accent));
    frame.render_widget(button, button_area);
}
