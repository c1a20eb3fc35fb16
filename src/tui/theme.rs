// src/tui/theme.rs — Color scheme and style definitions for the chat view.

use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // ── Brand colors ─────────────────────────────────────────────
    pub const PURPLE: Color = Color::Rgb(147, 51, 234);
    pub const PINK: Color = Color::Rgb(236, 72, 153);
    pub const PINK_SOFT: Color = Color::Rgb(249, 168, 212);
    pub const WHITE: Color = Color::Rgb(240, 240, 240);
    pub const GRAY: Color = Color::Rgb(140, 140, 155);
    pub const DIM: Color = Color::Rgb(85, 85, 100);
    pub const GREEN: Color = Color::Rgb(74, 222, 128);
    pub const AMBER: Color = Color::Rgb(245, 190, 60);
    pub const TEAL: Color = Color::Rgb(45, 212, 191);

    // ── Semantic styles ──────────────────────────────────────────

    /// Title bar.
    pub fn header() -> Style {
        Style::default().fg(Theme::PURPLE).add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Theme::DIM)
    }

    /// Border of the input box while it accepts text.
    pub fn border_focus() -> Style {
        Style::default().fg(Theme::PURPLE)
    }

    pub fn text() -> Style {
        Style::default().fg(Theme::WHITE)
    }

    pub fn text_dim() -> Style {
        Style::default().fg(Theme::GRAY)
    }

    /// Author line of a user bubble.
    pub fn user_label() -> Style {
        Style::default().fg(Theme::PINK).add_modifier(Modifier::BOLD)
    }

    /// Author line of an assistant bubble.
    pub fn assistant_label() -> Style {
        Style::default().fg(Theme::TEAL).add_modifier(Modifier::BOLD)
    }

    /// Citation chip for a generic source.
    pub fn chip() -> Style {
        Style::default().fg(Theme::GRAY)
    }

    /// Citation chip for a women's-rights source.
    pub fn chip_highlight() -> Style {
        Style::default()
            .fg(Theme::PINK_SOFT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn online() -> Style {
        Style::default().fg(Theme::GREEN)
    }

    pub fn thinking() -> Style {
        Style::default()
            .fg(Theme::AMBER)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn banner() -> Style {
        Style::default().fg(Theme::AMBER)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Theme::PURPLE)
    }

    pub fn key_desc() -> Style {
        Style::default().fg(Theme::GRAY)
    }
}
