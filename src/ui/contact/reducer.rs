use crate::mailer::is_valid_email;
use crate::ui::contact::intent::ContactIntent;
use crate::ui::contact::state::{ContactField, ContactFormState};
use crate::ui::mvi::Reducer;

pub struct ContactReducer;

impl Reducer for ContactReducer {
    type State = ContactFormState;
    type Intent = ContactIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ContactIntent::Open => match state {
                // Re-opening while a send is in flight keeps the Sending
                // state; the outcome event will resolve it.
                ContactFormState::Sending { draft } => ContactFormState::Sending { draft },
                ContactFormState::Editing {
                    draft,
                    focused,
                    error,
                } => ContactFormState::Editing {
                    draft,
                    focused,
                    error,
                },
                ContactFormState::Hidden => ContactFormState::Editing {
                    draft: Default::default(),
                    focused: ContactField::Name,
                    error: None,
                },
            },
            ContactIntent::Close => match state {
                // Closing does not cancel an in-flight send; no cancellation
                // exists anywhere in the page.
                ContactFormState::Sending { draft } => ContactFormState::Sending { draft },
                _ => ContactFormState::Hidden,
            },
            ContactIntent::FocusNext => match state {
                ContactFormState::Editing { draft, focused, .. } => ContactFormState::Editing {
                    draft,
                    focused: focused.next(),
                    error: None,
                },
                other => other,
            },
            ContactIntent::FocusPrev => match state {
                ContactFormState::Editing { draft, focused, .. } => ContactFormState::Editing {
                    draft,
                    focused: focused.prev(),
                    error: None,
                },
                other => other,
            },
            ContactIntent::Input(ch) => match state {
                ContactFormState::Editing {
                    mut draft, focused, ..
                } => {
                    draft.field_mut(focused).push(ch);
                    ContactFormState::Editing {
                        draft,
                        focused,
                        error: None,
                    }
                }
                other => other,
            },
            ContactIntent::Backspace => match state {
                ContactFormState::Editing {
                    mut draft, focused, ..
                } => {
                    draft.field_mut(focused).pop();
                    ContactFormState::Editing {
                        draft,
                        focused,
                        error: None,
                    }
                }
                other => other,
            },
            ContactIntent::Submit => match state {
                ContactFormState::Editing { draft, focused, .. } => {
                    if !is_valid_email(&draft.email) {
                        return ContactFormState::Editing {
                            draft,
                            focused,
                            error: Some("Please enter a valid email address.".to_string()),
                        };
                    }
                    if draft.message.trim().is_empty() {
                        return ContactFormState::Editing {
                            draft,
                            focused,
                            error: Some("The message is empty.".to_string()),
                        };
                    }
                    ContactFormState::Sending { draft }
                }
                other => other,
            },
            ContactIntent::Sent => ContactFormState::Hidden,
            ContactIntent::Failed { message } => match state {
                ContactFormState::Sending { draft } => ContactFormState::Editing {
                    draft,
                    focused: ContactField::Message,
                    error: Some(message),
                },
                other => other,
            },
        }
    }
}
