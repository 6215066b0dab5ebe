use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use crate::page::SectionId;
use crate::ui::app::App;
use crate::ui::contact::ContactIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.contact().is_visible() {
        handle_form_key(app, key);
        return;
    }

    // Arrow keys both scroll and feed the easter-egg tracker, like the
    // original page where scrolling and the konami listener coexist.
    app.track_konami(key.code);

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::PageUp => app.scroll_page(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_page(1),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('f') => app.cycle_filter(),
        KeyCode::Char('y') => app.copy_email(),
        KeyCode::Char('c') => app.dispatch_contact(ContactIntent::Open),
        KeyCode::Char(digit @ '1'..='6') => {
            let index = digit as usize - '1' as usize;
            app.scroll_to_section(SectionId::ALL[index]);
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if app.contact().is_sending() {
        // No cancellation; the form resolves when the worker reports back.
        return;
    }

    match key.code {
        KeyCode::Esc => app.dispatch_contact(ContactIntent::Close),
        KeyCode::Tab | KeyCode::Down => app.dispatch_contact(ContactIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_contact(ContactIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_contact(ContactIntent::Backspace),
        KeyCode::Enter => app.submit_contact(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_contact(ContactIntent::Input(ch));
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_by(-3),
        MouseEventKind::ScrollDown => app.scroll_by(3),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
