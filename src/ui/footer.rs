use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::{App, FlashTone};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints on the left, version on the right; a transient flash
    /// message takes over the hint area while present.
    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let theme = app.theme();
        let dim = Style::default().fg(theme.dim).add_modifier(Modifier::DIM);

        let (left, left_style) = match app.flash() {
            Some(flash) => {
                let color = match flash.tone {
                    FlashTone::Info => theme.accent,
                    FlashTone::Success => theme.ok,
                    FlashTone::Error => theme.err,
                };
                (format!(" {}", flash.text), Style::default().fg(color))
            }
            None => {
                let mut hints =
                    " j/k: Scroll │ 1-6: Jump │ t: Theme │ f: Filter │ c: Contact │ q: Quit"
                        .to_string();
                if app.show_back_to_top() {
                    hints.push_str(" │ g: Top ↑");
                }
                (hints, dim)
            }
        };

        let version = format!("v{} ", VERSION);
        let left_width = left.chars().count();
        let version_width = version.chars().count();
        let padding = (area.width as usize)
            .saturating_sub(left_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(version, dim),
        ]);

        Paragraph::new(line)
            .style(Style::default().bg(theme.bg))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(theme.border)),
            )
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}
