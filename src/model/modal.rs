use super::task::TaskId;

/// What the edit dialog is editing, recorded when it opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    pub id: TaskId,
    /// The task's text at the moment editing began
    pub original_text: String,
}

/// Edit dialog state: `Closed -> Open` on begin-edit, back on save or close
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Open(EditTarget),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open(_))
    }

    pub fn target(&self) -> Option<&EditTarget> {
        match self {
            Modal::Open(target) => Some(target),
            Modal::Closed => None,
        }
    }
}
