use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ContactIntent {
    Open,
    Close,
    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
    /// Validate and, if the draft passes, move to Sending.
    Submit,
    /// The worker reported success; the form resets and closes.
    Sent,
    /// The worker reported failure; the draft comes back for another try.
    Failed { message: String },
}

impl Intent for ContactIntent {}
