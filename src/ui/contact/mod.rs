//! The contact form dialog (MVI pattern).

mod intent;
mod reducer;
mod state;

pub use intent::ContactIntent;
pub use reducer::ContactReducer;
pub use state::{ContactDraft, ContactField, ContactFormState};
