use crate::model::TaskId;

use super::task_list::TaskList;

/// One renderable task row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    /// Marked for deletion
    pub checked: bool,
}

/// Everything the renderer needs, projected from controller state.
/// Building it has no side effects, so it may be rebuilt on every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    pub rows: Vec<TaskRow>,
    pub draft: String,
    pub modal_open: bool,
    pub can_delete: bool,
    pub is_empty: bool,
}

impl TaskList {
    pub fn view(&self) -> TaskListView {
        let rows = self
            .tasks()
            .iter()
            .map(|t| TaskRow {
                id: t.id.clone(),
                text: t.text.clone(),
                checked: self.selection().is_selected(&t.id),
            })
            .collect();
        TaskListView {
            rows,
            draft: self.draft().to_string(),
            modal_open: self.is_modal_open(),
            can_delete: self.can_delete(),
            is_empty: self.is_empty(),
        }
    }
}
