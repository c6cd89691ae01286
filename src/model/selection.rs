use std::collections::HashMap;

use super::task::TaskId;

/// Task ids marked for batch deletion.
///
/// Entries are independent of the task list: an entry may name a task that
/// no longer exists. Such stale entries are ignored by readers and only go
/// away when the whole set is cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    marks: HashMap<TaskId, bool>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is marked. Absent entries read as false.
    pub fn is_selected(&self, id: &TaskId) -> bool {
        self.marks.get(id).copied().unwrap_or(false)
    }

    /// Flip the mark for `id` and return the new value
    pub fn toggle(&mut self, id: &TaskId) -> bool {
        let next = !self.is_selected(id);
        self.marks.insert(id.clone(), next);
        next
    }

    /// True iff at least one entry is marked
    pub fn any_selected(&self) -> bool {
        self.marks.values().any(|&marked| marked)
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Number of entries, including unmarked and stale ones
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
