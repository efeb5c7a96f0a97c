//! Domain-level command types.
//!
//! Every user action maps to one command, independent of the UI that
//! produced it. The controller applies them to the saved record and the
//! derived view.

/// Input for setting the due date from the due-date form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitDueDateCommand {
    pub value: String,
}

/// Input for saving the edited note of one table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditNoteCommand {
    /// Row being edited; rows without a gestational day are ignored
    pub day_gest: Option<u32>,
    pub text: String,
}

/// A user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerCommand {
    SubmitDueDate(SubmitDueDateCommand),
    EditNote(EditNoteCommand),
    Reset,
}

impl TrackerCommand {
    pub fn submit_due_date(value: impl Into<String>) -> Self {
        Self::SubmitDueDate(SubmitDueDateCommand { value: value.into() })
    }

    pub fn edit_note(day_gest: Option<u32>, text: impl Into<String>) -> Self {
        Self::EditNote(EditNoteCommand {
            day_gest,
            text: text.into(),
        })
    }
}
