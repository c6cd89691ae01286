use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::{centered_rect_fixed, field_window};

/// Render the edit dialog over everything else
pub fn render_edit_modal(frame: &mut Frame, app: &App, area: Rect) {
    let popup_w: u16 = 50.min(area.width.saturating_sub(4));
    // border, field, underline, blank, button, border
    let popup_h: u16 = 6;
    let popup = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent).bg(bg))
        .title(Span::styled(
            format!(" {} ", app.labels.edit_title),
            Style::default()
                .fg(app.theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    if inner.width < 3 || inner.height == 0 {
        return;
    }

    // Field row is padded by one cell on each side
    let field_w = inner.width.saturating_sub(2);
    let (visible, cursor_col) =
        field_window(app.tasks.draft(), app.draft_cursor, field_w as usize);

    let underline = "\u{2500}".repeat(field_w as usize);
    let save_style = Style::default()
        .fg(Color::White)
        .bg(app.theme.save)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled(" ", Style::default().bg(bg)),
            Span::styled(visible, Style::default().fg(app.theme.text).bg(bg)),
        ]),
        Line::from(vec![
            Span::styled(" ", Style::default().bg(bg)),
            Span::styled(underline, Style::default().fg(app.theme.dim).bg(bg)),
        ]),
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", app.labels.save), save_style))
            .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);

    frame.set_cursor_position((inner.x + 1 + cursor_col as u16, inner.y));
}
