mod common;

use folio::ui::contact::{ContactField, ContactFormState, ContactIntent, ContactReducer};
use folio::ui::mvi::Reducer;

fn open() -> ContactFormState {
    ContactReducer::reduce(ContactFormState::Hidden, ContactIntent::Open)
}

fn type_text(mut state: ContactFormState, text: &str) -> ContactFormState {
    for ch in text.chars() {
        state = ContactReducer::reduce(state, ContactIntent::Input(ch));
    }
    state
}

fn filled_draft() -> ContactFormState {
    let mut state = open();
    state = type_text(state, "Ada");
    state = ContactReducer::reduce(state, ContactIntent::FocusNext);
    state = type_text(state, "ada@example.com");
    state = ContactReducer::reduce(state, ContactIntent::FocusNext);
    state = type_text(state, "Hello");
    state = ContactReducer::reduce(state, ContactIntent::FocusNext);
    state = type_text(state, "Nice page!");
    state
}

#[test]
fn open_starts_with_empty_draft_focused_on_name() {
    let state = open();
    if let ContactFormState::Editing {
        draft,
        focused,
        error,
    } = state
    {
        assert_eq!(draft.name, "");
        assert_eq!(focused, ContactField::Name);
        assert!(error.is_none());
    } else {
        panic!("expected Editing");
    }
}

#[test]
fn focus_wraps_in_both_directions() {
    let mut state = open();
    for _ in 0..4 {
        state = ContactReducer::reduce(state, ContactIntent::FocusNext);
    }
    if let ContactFormState::Editing { focused, .. } = &state {
        assert_eq!(*focused, ContactField::Name);
    } else {
        panic!("expected Editing");
    }

    state = ContactReducer::reduce(state, ContactIntent::FocusPrev);
    if let ContactFormState::Editing { focused, .. } = state {
        assert_eq!(focused, ContactField::Message);
    } else {
        panic!("expected Editing");
    }
}

#[test]
fn input_goes_to_the_focused_field() {
    let state = type_text(open(), "Ada");
    let state = ContactReducer::reduce(state, ContactIntent::FocusNext);
    let state = type_text(state, "a@b.co");
    if let ContactFormState::Editing { draft, .. } = state {
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.email, "a@b.co");
    } else {
        panic!("expected Editing");
    }
}

#[test]
fn backspace_removes_from_the_focused_field() {
    let state = type_text(open(), "Adaa");
    let state = ContactReducer::reduce(state, ContactIntent::Backspace);
    if let ContactFormState::Editing { draft, .. } = state {
        assert_eq!(draft.name, "Ada");
    } else {
        panic!("expected Editing");
    }
}

#[test]
fn submit_with_invalid_email_blocks_with_an_error() {
    let mut state = open();
    state = ContactReducer::reduce(state, ContactIntent::FocusNext);
    state = type_text(state, "not-an-email");
    state = ContactReducer::reduce(state, ContactIntent::Submit);
    if let ContactFormState::Editing { error, .. } = state {
        assert_eq!(
            error.as_deref(),
            Some("Please enter a valid email address.")
        );
    } else {
        panic!("invalid email must not reach Sending");
    }
}

#[test]
fn submit_with_empty_message_blocks_with_an_error() {
    let mut state = open();
    state = ContactReducer::reduce(state, ContactIntent::FocusNext);
    state = type_text(state, "ada@example.com");
    state = ContactReducer::reduce(state, ContactIntent::Submit);
    if let ContactFormState::Editing { error, .. } = state {
        assert_eq!(error.as_deref(), Some("The message is empty."));
    } else {
        panic!("empty message must not reach Sending");
    }
}

#[test]
fn valid_submit_moves_to_sending() {
    let state = ContactReducer::reduce(filled_draft(), ContactIntent::Submit);
    assert!(state.is_sending());
}

#[test]
fn editing_clears_a_stale_error() {
    let mut state = open();
    state = ContactReducer::reduce(state, ContactIntent::Submit);
    if let ContactFormState::Editing { error, .. } = &state {
        assert!(error.is_some());
    }
    state = ContactReducer::reduce(state, ContactIntent::Input('x'));
    if let ContactFormState::Editing { error, .. } = state {
        assert!(error.is_none());
    } else {
        panic!("expected Editing");
    }
}

#[test]
fn sent_resets_and_closes_the_form() {
    let state = ContactReducer::reduce(filled_draft(), ContactIntent::Submit);
    let state = ContactReducer::reduce(state, ContactIntent::Sent);
    assert!(!state.is_visible());
    // Re-opening starts fresh.
    let state = ContactReducer::reduce(state, ContactIntent::Open);
    if let ContactFormState::Editing { draft, .. } = state {
        assert_eq!(draft.name, "");
    } else {
        panic!("expected Editing");
    }
}

#[test]
fn failure_returns_the_draft_for_another_try() {
    let state = ContactReducer::reduce(filled_draft(), ContactIntent::Submit);
    let state = ContactReducer::reduce(
        state,
        ContactIntent::Failed {
            message: "delivery failed".to_string(),
        },
    );
    if let ContactFormState::Editing { draft, error, .. } = state {
        assert_eq!(draft.name, "Ada");
        assert_eq!(error.as_deref(), Some("delivery failed"));
    } else {
        panic!("expected Editing with preserved draft");
    }
}

#[test]
fn close_does_not_cancel_an_inflight_send() {
    let state = ContactReducer::reduce(filled_draft(), ContactIntent::Submit);
    let state = ContactReducer::reduce(state, ContactIntent::Close);
    assert!(state.is_sending());
}
