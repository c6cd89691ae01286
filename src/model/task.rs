use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque unique task identifier (decimal epoch milliseconds at creation)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        TaskId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId(s.to_string())
    }
}

/// A single user-created to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Text exactly as entered (never trimmed)
    pub text: String,
    /// Set to false at creation and never changed. Selection for deletion
    /// lives in `SelectionSet`.
    pub is_checked: bool,
}

impl Task {
    pub fn new(id: TaskId, text: String) -> Self {
        Task {
            id,
            text,
            is_checked: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_unchecked() {
        let task = Task::new(TaskId::new("1700000000000"), "Buy milk".into());
        assert!(!task.is_checked);
        assert_eq!(task.id.as_str(), "1700000000000");
        assert_eq!(task.id.to_string(), "1700000000000");
    }
}
