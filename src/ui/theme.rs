use ratatui::style::Color;

use crate::config::ThemeKind;

/// Resolved color palette for the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub kind: ThemeKind,
    pub bg: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub ok: Color,
    pub err: Color,
    pub highlight: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            bg: Color::Rgb(0xf8, 0xf9, 0xfa),
            text: Color::Rgb(0x21, 0x25, 0x29),
            dim: Color::Rgb(0x6c, 0x75, 0x7d),
            accent: Color::Rgb(0x25, 0x63, 0xeb),
            border: Color::Rgb(0xce, 0xd4, 0xda),
            ok: Color::Rgb(0x19, 0x87, 0x54),
            err: Color::Rgb(0xdc, 0x35, 0x45),
            highlight: Color::Rgb(0xe7, 0xf1, 0xff),
        }
    }

    pub fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            bg: Color::Rgb(0x12, 0x12, 0x12),
            text: Color::Rgb(0xe5, 0xe5, 0xe5),
            dim: Color::Rgb(0x6b, 0x72, 0x80),
            accent: Color::Rgb(0x60, 0xa5, 0xfa),
            border: Color::Rgb(0x40, 0x40, 0x40),
            ok: Color::Rgb(0x22, 0xc5, 0x5e),
            err: Color::Rgb(0xef, 0x44, 0x44),
            highlight: Color::Rgb(0x26, 0x26, 0x26),
        }
    }

    pub fn from_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self::light(),
            ThemeKind::Dark => Self::dark(),
        }
    }

    pub fn toggled(&self) -> Self {
        Self::from_kind(self.kind.flipped())
    }
}

/// Cycling hue for the konami rainbow effect, stepped by elapsed time.
pub fn rainbow_color(step: u64) -> Color {
    const WHEEL: [Color; 6] = [
        Color::Rgb(0xef, 0x44, 0x44),
        Color::Rgb(0xf5, 0x9e, 0x0b),
        Color::Rgb(0xea, 0xb3, 0x08),
        Color::Rgb(0x22, 0xc5, 0x5e),
        Color::Rgb(0x3b, 0x82, 0xf6),
        Color::Rgb(0xa8, 0x55, 0xf7),
    ];
    WHEEL[(step % WHEEL.len() as u64) as usize]
}
