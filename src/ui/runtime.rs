use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tracing::debug;

use crate::config::{Config, Prefs};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(
    config: Config,
    prefs: Prefs,
    prefs_path: PathBuf,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let started = Instant::now();
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(config, prefs.theme, prefs_path, events.sender());

    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let body = body_rect(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    });
    app.on_resize(body.width.max(1), body.height.max(1));
    debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "page ready"
    );

    loop {
        app.advance(Instant::now());
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        // Sleep only until the next timed deadline (typewriter step,
        // staggered reveal, message expiry), capped at the tick rate.
        let timeout = app
            .next_deadline()
            .saturating_duration_since(Instant::now())
            .min(tick_rate);

        match events.next(timeout) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => {
                let body = body_rect(Rect {
                    x: 0,
                    y: 0,
                    width: cols,
                    height: rows,
                });
                app.on_resize(body.width.max(1), body.height.max(1));
            }
            Ok(AppEvent::FocusGained) => app.on_focus_change(true),
            Ok(AppEvent::FocusLost) => app.on_focus_change(false),
            Ok(AppEvent::Mail(outcome)) => app.on_mail(outcome),
            Ok(AppEvent::Shutdown) => break,
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
