use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::TaskListView;
use crate::tui::app::{App, Focus};
use crate::util::unicode::{display_width, truncate_to_width};

/// Checkbox for a row's deletion mark
fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Render the task rows, or the empty placeholder. Adjusts the scroll
/// offset so the cursor row stays visible.
pub fn render_task_list(frame: &mut Frame, app: &mut App, view: &TaskListView, area: Rect) {
    let bg = app.theme.background;

    if view.is_empty {
        let empty = Paragraph::new(app.labels.empty.clone())
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.placeholder).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    if visible_height == 0 {
        return;
    }
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }
    app.scroll_offset = app
        .scroll_offset
        .min(view.rows.len().saturating_sub(visible_height));

    let width = area.width as usize;
    let list_focused = app.focus == Focus::List && !view.modal_open;

    let lines: Vec<Line> = view
        .rows
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
        .map(|(i, row)| {
            let row_bg = if list_focused && i == app.cursor {
                app.theme.selection_bg
            } else {
                bg
            };
            let box_color = if row.checked {
                app.theme.danger
            } else {
                app.theme.accent
            };
            let mut text_style = Style::default().fg(app.theme.text).bg(row_bg);
            if row.checked {
                text_style = text_style.add_modifier(Modifier::CROSSED_OUT);
            }

            let mut spans = vec![
                Span::styled(
                    checkbox(row.checked),
                    Style::default().fg(box_color).bg(row_bg),
                ),
                Span::styled(" ", Style::default().bg(row_bg)),
                Span::styled(truncate_to_width(&row.text, width.saturating_sub(4)), text_style),
            ];

            if row_bg != bg {
                let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
                if used < width {
                    spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(row_bg)));
                }
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

/// Render the batch delete button
pub fn render_delete_button(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default()
        .fg(Color::White)
        .bg(app.theme.danger)
        .add_modifier(Modifier::BOLD);
    let label = format!(" \u{2715} {} [D] ", app.labels.delete);
    let line = Line::from(Span::styled(label, style));
    let button = Paragraph::new(line)
        .alignment(Alignment::Center)
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(button, area);
}
