//! folio, a personal portfolio page for the terminal.
//!
//! The page is a vertically scrollable document: a hero section with a
//! typewriter-animated tagline, content sections that reveal themselves as
//! they scroll into view, skill bars that fill once substantially visible,
//! and a contact dialog that forwards messages to an email-delivery API.
//!
//! Page content lives in a TOML config file; the binary in `main.rs` wires
//! the pieces together and hands control to [`ui::runtime::run`].

pub mod config;
pub mod engine;
pub mod mailer;
pub mod page;
pub mod ui;
