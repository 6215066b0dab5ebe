use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::page::RowKind;
use crate::ui::app::App;
use crate::ui::contact::{ContactField, ContactFormState};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::rainbow_color;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let theme = *app.theme();
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);

    let (header, body, footer) = layout_regions(area);
    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(page_body(app, body), body);
    frame.render_widget(Footer::new().widget(app, footer), footer);

    if app.contact().is_visible() {
        draw_contact_dialog(frame, app, body);
    }
}

/// The visible slice of the page document, one `Line` per row.
fn page_body(app: &App, body: Rect) -> Paragraph<'static> {
    let theme = *app.theme();
    let page = app.page();
    let scroll = app.scroll() as usize;
    let rainbow = app.rainbow_active();

    let mut lines: Vec<Line<'static>> = Vec::with_capacity(body.height as usize);
    for offset in 0..body.height as usize {
        let Some(row) = page.rows.get(scroll + offset) else {
            lines.push(Line::default());
            continue;
        };

        let line = match &row.kind {
            RowKind::Blank => Line::default(),
            RowKind::HeroName => {
                if rainbow {
                    let step = app.rainbow_step();
                    let spans: Vec<Span<'static>> = row
                        .text
                        .chars()
                        .enumerate()
                        .map(|(i, ch)| {
                            Span::styled(
                                ch.to_string(),
                                Style::default()
                                    .fg(rainbow_color(step + i as u64))
                                    .add_modifier(Modifier::BOLD),
                            )
                        })
                        .collect();
                    Line::from(spans)
                } else {
                    Line::from(Span::styled(
                        row.text.clone(),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    ))
                }
            }
            RowKind::HeroTitle => Line::from(Span::styled(
                row.text.clone(),
                Style::default().fg(theme.dim),
            )),
            RowKind::Typewriter => Line::from(vec![
                Span::styled("❯ ", Style::default().fg(theme.accent)),
                Span::styled(
                    app.typed_text().to_string(),
                    Style::default().fg(theme.text),
                ),
                Span::styled("▌", Style::default().fg(theme.accent)),
            ]),
            RowKind::Heading => Line::from(Span::styled(
                format!("▍ {}", row.text),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            RowKind::Text => Line::from(Span::styled(
                row.text.clone(),
                Style::default().fg(theme.text),
            )),
            RowKind::Card { target } => {
                if app.is_revealed(*target) {
                    Line::from(Span::styled(
                        row.text.clone(),
                        Style::default().fg(theme.text),
                    ))
                } else {
                    Line::default()
                }
            }
            RowKind::Bar { fade, progress } => {
                if app.is_revealed(*fade) {
                    skill_bar(app.fill(*progress), body.width, &theme)
                } else {
                    Line::default()
                }
            }
            RowKind::Filter => Line::from(vec![
                Span::styled("Filter: ", Style::default().fg(theme.dim)),
                Span::styled(
                    format!("⟨{}⟩", row.text),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
            ]),
            RowKind::Hint => Line::from(Span::styled(
                row.text.clone(),
                Style::default().fg(theme.dim).add_modifier(Modifier::DIM),
            )),
        };
        lines.push(line);
    }

    Paragraph::new(lines).style(Style::default().bg(theme.bg))
}

fn skill_bar(fill: u8, width: u16, theme: &crate::ui::theme::Theme) -> Line<'static> {
    let bar_width = usize::from(width.saturating_sub(10).max(4));
    let filled = bar_width * usize::from(fill.min(100)) / 100;
    Line::from(vec![
        Span::raw("  "),
        Span::styled("█".repeat(filled), Style::default().fg(theme.accent)),
        Span::styled(
            "░".repeat(bar_width - filled),
            Style::default().fg(theme.border),
        ),
        Span::styled(format!(" {:>3}%", fill), Style::default().fg(theme.dim)),
    ])
}

fn draw_contact_dialog(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let theme = *app.theme();
    let mut lines: Vec<Line<'static>> = Vec::new();

    match app.contact() {
        ContactFormState::Editing {
            draft,
            focused,
            error,
        } => {
            for field in ContactField::ALL {
                let is_focused = field == *focused;
                let marker = if is_focused { "▸ " } else { "  " };
                let label_style = if is_focused {
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.dim)
                };
                let mut spans = vec![
                    Span::styled(marker.to_string(), label_style),
                    Span::styled(format!("{:<8}", field.label()), label_style),
                    Span::styled(
                        draft.field(field).to_string(),
                        Style::default().fg(theme.text),
                    ),
                ];
                if is_focused {
                    spans.push(Span::styled("▌", Style::default().fg(theme.accent)));
                }
                lines.push(Line::from(spans));
            }
            lines.push(Line::default());
            if let Some(error) = error {
                lines.push(Line::from(Span::styled(
                    error.clone(),
                    Style::default().fg(theme.err),
                )));
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                "Tab: Next field  Enter: Send  Esc: Close",
                Style::default().fg(theme.dim).add_modifier(Modifier::DIM),
            )));
        }
        ContactFormState::Sending { .. } => {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "  Sending...",
                Style::default().fg(theme.accent),
            )));
            lines.push(Line::default());
        }
        ContactFormState::Hidden => return,
    }

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(4).max(46);
    let height = lines.len() as u16 + 2;
    let area = centered_rect_by_size(body, width, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            " Say hello ",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
