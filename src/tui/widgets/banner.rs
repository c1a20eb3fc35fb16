// src/tui/widgets/banner.rs — Dismissible disclaimer.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::landing;
use crate::tui::theme::Theme;

/// Rows the banner occupies, borders included.
pub const HEIGHT: u16 = 5;

pub fn render(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Disclaimer ", Theme::banner()))
        .title_bottom(Line::from(vec![
            Span::styled(" Esc", Theme::key_hint()),
            Span::styled(" dismiss ", Theme::key_desc()),
        ]))
        .borders(Borders::ALL)
        .border_style(Theme::banner());

    let paragraph = Paragraph::new(Span::styled(landing::DISCLAIMER, Theme::text()))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
