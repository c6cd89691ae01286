use tracing::debug;

use crate::model::TaskId;

use super::task_list::TaskList;

/// A user gesture, as delivered by the rendering layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Input text changed
    SetDraft(String),
    /// Add button pressed with the given draft
    AddTask(String),
    /// Edit icon pressed on a task
    BeginEdit(TaskId),
    /// Save pressed in the edit dialog with the given text
    SaveEdit(String),
    /// Checkbox pressed on a task
    ToggleSelection(TaskId),
    /// Delete button pressed
    DeleteSelected,
    /// Edit dialog dismissed
    CloseModal,
}

impl Command {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetDraft(_) => "set_draft",
            Command::AddTask(_) => "add_task",
            Command::BeginEdit(_) => "begin_edit",
            Command::SaveEdit(_) => "save_edit",
            Command::ToggleSelection(_) => "toggle_selection",
            Command::DeleteSelected => "delete_selected",
            Command::CloseModal => "close_modal",
        }
    }
}

/// What a command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    DraftChanged,
    /// Input was empty or named an unknown task; nothing changed
    Ignored,
    Added(TaskId),
    EditStarted(TaskId),
    Edited(TaskId),
    /// Dialog closed on save but no task matched
    EditDiscarded,
    ModalClosed,
    Toggled { id: TaskId, selected: bool },
    /// Number of tasks removed
    Deleted(usize),
}

impl TaskList {
    /// Apply one command. This is the only entry point the UI uses.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let name = command.name();
        let outcome = match command {
            Command::SetDraft(text) => self.set_draft(text),
            Command::AddTask(text) => self.add_task(text),
            Command::BeginEdit(id) => self.begin_edit(&id),
            Command::SaveEdit(text) => self.save_edit(text),
            Command::ToggleSelection(id) => self.toggle_selection(&id),
            Command::DeleteSelected => self.delete_selected(),
            Command::CloseModal => self.close_modal(),
        };
        if outcome != Outcome::DraftChanged {
            debug!(command = name, ?outcome, tasks = self.tasks().len(), "dispatched");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_routes_each_command() {
        let mut list = TaskList::new();
        assert_eq!(
            list.dispatch(Command::SetDraft("Buy milk".into())),
            Outcome::DraftChanged
        );
        let Outcome::Added(id) = list.dispatch(Command::AddTask("Buy milk".into())) else {
            panic!("expected Added");
        };
        assert_eq!(
            list.dispatch(Command::BeginEdit(id.clone())),
            Outcome::EditStarted(id.clone())
        );
        assert_eq!(list.dispatch(Command::CloseModal), Outcome::ModalClosed);
        assert_eq!(
            list.dispatch(Command::ToggleSelection(id.clone())),
            Outcome::Toggled {
                id: id.clone(),
                selected: true
            }
        );
        assert_eq!(list.dispatch(Command::DeleteSelected), Outcome::Deleted(1));
        assert!(list.is_empty());
    }

    #[test]
    fn save_edit_command_carries_text() {
        let mut list = TaskList::new();
        list.dispatch(Command::AddTask("Buy milk".into()));
        let id = list.tasks()[0].id.clone();
        list.dispatch(Command::BeginEdit(id.clone()));
        assert_eq!(
            list.dispatch(Command::SaveEdit("Buy bread".into())),
            Outcome::Edited(id)
        );
        assert_eq!(list.tasks()[0].text, "Buy bread");
    }

    #[test]
    fn command_names() {
        assert_eq!(Command::DeleteSelected.name(), "delete_selected");
        assert_eq!(Command::SaveEdit(String::new()).name(), "save_edit");
    }
}
