pub mod edit_modal;
pub mod header;
mod helpers;
pub mod input_bar;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function: lays out the regions and dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let view = app.tasks.view();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | input bar | task list | delete button | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(if view.can_delete { 1 } else { 0 }),
            Constraint::Length(if app.show_key_hints { 1 } else { 0 }),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    input_bar::render_input_bar(frame, app, chunks[1]);
    task_list::render_task_list(frame, app, &view, chunks[2]);

    if view.can_delete {
        task_list::render_delete_button(frame, app, chunks[3]);
    }
    if app.show_key_hints {
        status_row::render_status_row(frame, app, chunks[4]);
    }

    // Edit dialog (rendered on top of everything)
    if view.modal_open {
        edit_modal::render_edit_modal(frame, app, area);
    }
}
