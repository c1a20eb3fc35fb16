// src/tui/widgets/transcript.rs — Turn bubbles, citation chips and the thinking placeholder.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::session::render::{self, CitationChip};
use crate::session::{Role, Session, Turn};
use crate::tui::theme::Theme;
use crate::util::{display_width, wrap_words};

const INDENT: &str = "  ";

/// Chip marker drawn before the source name.
const CHIP_MARK: &str = "\u{258c} ";

/// Render the transcript pinned to the bottom, `scroll_back` lines up from it.
/// Returns the largest `scroll_back` that still moves the view.
pub fn render(
    f: &mut Frame,
    area: Rect,
    session: &Session,
    show_timestamps: bool,
    tick: usize,
    scroll_back: u16,
) -> u16 {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);

    let lines = build_lines(session, inner.width as usize, show_timestamps, tick);
    let max_back = max_scroll_back(lines.len(), inner.height as usize);
    let offset = scroll_offset(lines.len(), inner.height as usize, scroll_back as usize);

    let paragraph = Paragraph::new(lines).block(block).scroll((offset, 0));
    f.render_widget(paragraph, area);
    max_back
}

/// Lines hidden above the viewport when pinned to the bottom.
pub fn max_scroll_back(total: usize, height: usize) -> u16 {
    total.saturating_sub(height).min(u16::MAX as usize) as u16
}

/// First visible line so that the last line sits at the bottom edge, moved
/// up by `scroll_back` but never past the top.
pub fn scroll_offset(total: usize, height: usize, scroll_back: usize) -> u16 {
    let max = total.saturating_sub(height);
    max.saturating_sub(scroll_back).min(u16::MAX as usize) as u16
}

/// Pre-wrapped lines for every turn, plus the placeholder while awaiting.
pub fn build_lines(
    session: &Session,
    width: usize,
    show_timestamps: bool,
    tick: usize,
) -> Vec<Line<'static>> {
    let body_width = width.saturating_sub(INDENT.len()).max(1);
    let mut lines = Vec::new();

    for turn in session.turns() {
        push_turn(&mut lines, turn, body_width, show_timestamps);
        lines.push(Line::from(""));
    }

    if session.is_pending() {
        lines.push(Line::from(Span::styled("Assistant", Theme::assistant_label())));
        let dots = ".".repeat(tick % 3 + 1);
        lines.push(Line::from(Span::styled(
            format!("{INDENT}Thinking{dots}"),
            Theme::thinking(),
        )));
    }

    lines
}

fn push_turn(lines: &mut Vec<Line<'static>>, turn: &Turn, body_width: usize, show_timestamps: bool) {
    let (label, label_style) = match turn.role {
        Role::User => ("You", Theme::user_label()),
        Role::Assistant => ("Assistant", Theme::assistant_label()),
    };
    let mut header = vec![Span::styled(label, label_style)];
    if show_timestamps {
        header.push(Span::styled(
            format!("  {}", render::format_time(&turn.timestamp)),
            Theme::text_dim(),
        ));
    }
    lines.push(Line::from(header));

    for row in wrap_words(&turn.content, body_width) {
        lines.push(Line::from(Span::styled(
            format!("{INDENT}{row}"),
            Theme::text(),
        )));
    }

    if turn.has_sources() {
        lines.push(Line::from(Span::styled(
            format!("{INDENT}Sources"),
            Theme::text_dim(),
        )));
        for chip in render::chips(&turn.sources) {
            push_chip(lines, &chip, body_width);
        }
    }
}

/// One chip: the marked source name, then page and relevance on the same
/// row when they fit, otherwise on a row of their own.
fn push_chip(lines: &mut Vec<Line<'static>>, chip: &CitationChip, body_width: usize) {
    let style = if chip.highlighted {
        Theme::chip_highlight()
    } else {
        Theme::chip()
    };
    let meta = format!("{}  {}", chip.page, chip.relevance);
    let mark_width = display_width(CHIP_MARK);
    let name_rows = wrap_words(&chip.name, body_width.saturating_sub(mark_width).max(1));

    let last = name_rows.len().saturating_sub(1);
    let mut meta_inline = false;
    for (i, row) in name_rows.into_iter().enumerate() {
        let fits = mark_width + display_width(&row) + 2 + display_width(&meta) <= body_width;
        let mut spans = vec![Span::styled(format!("{INDENT}{CHIP_MARK}{row}"), style)];
        if i == last && fits {
            spans.push(Span::styled(format!("  {meta}"), Theme::text_dim()));
            meta_inline = true;
        }
        lines.push(Line::from(spans));
    }

    if !meta_inline {
        let rows = if mark_width + display_width(&meta) <= body_width {
            vec![meta]
        } else {
            vec![chip.page.clone(), chip.relevance.clone()]
        };
        for row in rows {
            lines.push(Line::from(Span::styled(
                format!("{INDENT}  {row}"),
                Theme::text_dim(),
            )));
        }
    }
}
