//! The two state-bearing cores of the page.
//!
//! [`typewriter`] cycles the hero tagline through its phrases; [`reveal`]
//! fires one-shot visual transitions the first time a card scrolls into
//! view, with [`viewport`] supplying the row-intersection math. Everything
//! here is pure state plus timing: no terminal types, no I/O, driven
//! entirely by the event loop in `ui::runtime`.

pub mod reveal;
pub mod typewriter;
pub mod viewport;
