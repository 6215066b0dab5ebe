//! Shared test fixtures.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

use tempfile::TempDir;

use folio::config::{Config, Skill};
use folio::ui::app::App;
use folio::ui::events::AppEvent;

/// Config with a known shape: two tagline phrases, two skill categories,
/// enough cards to scroll past one screen.
pub fn sample_config() -> Config {
    let mut config = Config::default();
    config.profile.phrases = vec!["Go".to_string(), "Rust".to_string()];
    config.skills = vec![
        Skill {
            name: "Rust".to_string(),
            category: "backend".to_string(),
            level: Some(90),
        },
        Skill {
            name: "PostgreSQL".to_string(),
            category: "backend".to_string(),
            level: Some(75),
        },
        Skill {
            name: "Terminal UIs".to_string(),
            category: "tooling".to_string(),
            level: None,
        },
    ];
    config
}

/// App wired to a throwaway prefs file and a capturable event channel.
pub fn sample_app() -> (App, Receiver<AppEvent>, TempDir) {
    let temp = TempDir::new().expect("temp dir");
    let prefs_path: PathBuf = temp.path().join("prefs.toml");
    let (tx, rx) = channel();
    let app = App::new(
        sample_config(),
        folio::config::ThemeKind::Light,
        prefs_path,
        tx,
    );
    (app, rx, temp)
}
