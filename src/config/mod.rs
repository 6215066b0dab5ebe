//! Page content and application configuration.
//!
//! Everything the page displays (name, tagline phrases, sections, skills,
//! projects, contact endpoint) is configuration, loaded once at startup.
//! The single persisted user preference (the theme) lives in its own small
//! prefs file, see [`prefs`].

mod loader;
pub mod prefs;
mod types;

pub use loader::ConfigError;
pub use prefs::{Prefs, PrefsError, ThemeKind};
pub use types::{
    AboutConfig, CadenceConfig, Config, ContactConfig, Experience, Highlight, Profile, Project,
    RevealConfig, Skill, Stat,
};
