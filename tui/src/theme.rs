//! Color theme and glyphs for Periodle TUI.
//!
//! A dark neon palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::border;
use ratatui::widgets::{Block, BorderType, Borders};

use periodle_engine::{Tone, UiOptions};

mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(18, 18, 18); // #121212
    pub const BG_CARD: Color = Color::Rgb(30, 30, 36); // #1e1e24
    pub const BG_BORDER: Color = Color::Rgb(68, 68, 80);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(224, 224, 224);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 160, 160); // #a0a0a0
    pub const TEXT_MUTED: Color = Color::Rgb(110, 110, 118);

    // === Accents ===
    pub const CYAN: Color = Color::Rgb(0, 243, 255); // #00f3ff
    pub const GREEN: Color = Color::Rgb(0, 255, 65); // #00ff41
    pub const PINK: Color = Color::Rgb(255, 0, 85); // #ff0055
    pub const GOLD: Color = Color::Rgb(255, 215, 0); // #ffd700
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_card: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_card: colors::BG_CARD,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            accent: colors::CYAN,
            success: colors::GREEN,
            warning: colors::GOLD,
            error: colors::PINK,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_card: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    /// Foreground for a semantic tone.
    #[must_use]
    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Muted => self.text_secondary,
            Tone::Accent => self.accent,
            Tone::Success => self.success,
            Tone::Error => self.error,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for markers and the attempt gauge.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub prompt: &'static str,
    pub hit: &'static str,
    pub miss: &'static str,
    pub note: &'static str,
    pub attempt_used: &'static str,
    pub attempt_left: &'static str,
    pub separator: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            prompt: ">",
            hit: "+",
            miss: "x",
            note: "*",
            attempt_used: "#",
            attempt_left: ".",
            separator: "|",
        }
    } else {
        Glyphs {
            prompt: "❯",
            hit: "✓",
            miss: "✗",
            note: "•",
            attempt_used: "●",
            attempt_left: "○",
            separator: "│",
        }
    }
}

/// Box corners and edges drawn with plain ASCII.
pub const ASCII_BORDER: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// A fully bordered block in `border_type`, or in ASCII when asked for.
#[must_use]
pub fn framed(options: UiOptions, border_type: BorderType) -> Block<'static> {
    let block = Block::default().borders(Borders::ALL);
    if options.ascii_only {
        block.border_set(ASCII_BORDER)
    } else {
        block.border_type(border_type)
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.warning)
            .add_modifier(Modifier::BOLD)
    }
}
