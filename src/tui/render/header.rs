use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the title bar
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default()
        .fg(Color::White)
        .bg(app.theme.header)
        .add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled(" \u{25A4} ", style),
        Span::styled(app.labels.title.clone(), style),
    ]);
    frame.render_widget(Paragraph::new(line).style(style), area);
}
