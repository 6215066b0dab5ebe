use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::page::SectionId;
use crate::ui::app::App;
use crate::ui::theme::rainbow_color;

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Nav bar: the profile name plus one entry per section, with the
    /// section currently under the viewport highlighted.
    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let theme = app.theme();
        let active = app.active_section();
        let mut spans: Vec<Span<'static>> = Vec::new();

        let name = format!(" {} ", app.config().profile.name);
        if app.rainbow_active() {
            let step = app.rainbow_step();
            for (i, ch) in name.chars().enumerate() {
                spans.push(Span::styled(
                    ch.to_string(),
                    Style::default()
                        .fg(rainbow_color(step + i as u64))
                        .add_modifier(Modifier::BOLD),
                ));
            }
        } else {
            spans.push(Span::styled(
                name,
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ));
        }
        spans.push(Span::styled("│ ", Style::default().fg(theme.border)));

        for section in SectionId::ALL {
            let style = if section == active {
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.dim)
            };
            spans.push(Span::styled(format!(" {} ", section.label()), style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(theme.bg))
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(theme.border)),
            )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
