use crate::model::{EditTarget, EditTargeting, Modal, SelectionSet, Task, TaskId};

use super::command::Outcome;
use super::ids::IdGenerator;

/// The task list controller: sole owner of the tasks, the selection set,
/// the draft text and the edit dialog.
///
/// Every operation is total. Invalid or unmatched input is reported as an
/// `Outcome` and leaves the state unchanged, never as an error.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    selection: SelectionSet,
    draft: String,
    modal: Modal,
    ids: IdGenerator,
    targeting: EditTargeting,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_targeting(targeting: EditTargeting) -> Self {
        TaskList {
            targeting,
            ..Self::default()
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn targeting(&self) -> EditTargeting {
        self.targeting
    }

    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    /// Whether the delete button should be shown
    pub fn can_delete(&self) -> bool {
        self.selection.any_selected()
    }

    /// Whether the "no tasks" placeholder should be shown
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Replace the draft text (text-change gesture)
    pub fn set_draft(&mut self, text: impl Into<String>) -> Outcome {
        self.draft = text.into();
        Outcome::DraftChanged
    }

    /// Append a task. Whitespace-only text is ignored; otherwise the text
    /// is stored as given (not trimmed) and the draft is cleared.
    pub fn add_task(&mut self, text: impl Into<String>) -> Outcome {
        let text = text.into();
        if text.trim().is_empty() {
            return Outcome::Ignored;
        }
        let id = self.ids.next_id();
        self.tasks.push(Task::new(id.clone(), text));
        self.draft.clear();
        Outcome::Added(id)
    }

    /// Open the edit dialog for `id`, loading its text into the draft
    pub fn begin_edit(&mut self, id: &TaskId) -> Outcome {
        let Some(task) = self.find(id) else {
            return Outcome::Ignored;
        };
        let target = EditTarget {
            id: task.id.clone(),
            original_text: task.text.clone(),
        };
        self.draft = target.original_text.clone();
        self.modal = Modal::Open(target);
        Outcome::EditStarted(id.clone())
    }

    /// Apply `text` to the task being edited, then clear the draft and
    /// close the dialog whether or not a task was updated.
    pub fn save_edit(&mut self, text: impl Into<String>) -> Outcome {
        let text = text.into();
        let target = std::mem::take(&mut self.modal);
        self.draft.clear();

        let Modal::Open(target) = target else {
            return Outcome::EditDiscarded;
        };
        let index = match self.targeting {
            EditTargeting::ById => self.tasks.iter().position(|t| t.id == target.id),
            EditTargeting::FirstTextMatch => self
                .tasks
                .iter()
                .position(|t| t.text == target.original_text),
        };
        match index {
            Some(i) => {
                self.tasks[i].text = text;
                Outcome::Edited(self.tasks[i].id.clone())
            }
            None => Outcome::EditDiscarded,
        }
    }

    /// Dismiss the edit dialog without saving. Clears the draft so the
    /// edited text does not leak into the next add.
    pub fn close_modal(&mut self) -> Outcome {
        self.modal = Modal::Closed;
        self.draft.clear();
        Outcome::ModalClosed
    }

    pub fn toggle_selection(&mut self, id: &TaskId) -> Outcome {
        let selected = self.selection.toggle(id);
        Outcome::Toggled {
            id: id.clone(),
            selected,
        }
    }

    /// Remove every selected task and reset the selection set
    pub fn delete_selected(&mut self) -> Outcome {
        let before = self.tasks.len();
        let selection = &self.selection;
        self.tasks.retain(|t| !selection.is_selected(&t.id));
        self.selection.clear();
        Outcome::Deleted(before - self.tasks.len())
    }
}
