// src/tui/widgets/welcome.rs — Empty-transcript panel with example questions.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::landing;
use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, examples: &[String]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Welcome to {}", landing::PRODUCT_NAME),
            Theme::header(),
        )),
        Line::from(""),
        Line::from(Span::styled(landing::WELCOME_BLURB, Theme::text())),
        Line::from(""),
    ];

    let mut topics = Vec::new();
    for (i, topic) in landing::TOPICS.iter().enumerate() {
        if i > 0 {
            topics.push(Span::styled("  \u{00b7}  ", Theme::text_dim()));
        }
        topics.push(Span::styled(*topic, Theme::chip_highlight()));
    }
    lines.push(Line::from(topics));
    lines.push(Line::from(""));

    if !examples.is_empty() {
        lines.push(Line::from(Span::styled(
            "Try asking one of these (press the number to use it):",
            Theme::text_dim(),
        )));
        for (i, q) in examples.iter().take(9).enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", i + 1), Theme::key_hint()),
                Span::styled(q.clone(), Theme::text()),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
