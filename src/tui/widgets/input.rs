// src/tui/widgets/input.rs — Multi-line draft box.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme::Theme;
use crate::util::{display_width, wrap_chars};

/// Rows the input box occupies, borders included.
pub const HEIGHT: u16 = 5;

const HINT: &str = " Enter to send \u{b7} Shift+Enter for newline \u{b7} Ctrl-C to quit ";

const PLACEHOLDER: &str =
    "Ask about women's rights, property laws, marriage laws, or any legal question...";

pub fn render(f: &mut Frame, area: Rect, draft: &str, pending: bool) {
    let (title, border) = if pending {
        (Span::styled(" Sending... ", Theme::thinking()), Theme::border())
    } else {
        (Span::styled(" Message ", Theme::header()), Theme::border_focus())
    };
    let block = Block::default()
        .title(title)
        .title_bottom(Line::from(Span::styled(HINT, Theme::text_dim())))
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);

    if draft.is_empty() {
        let placeholder = Paragraph::new(Span::styled(PLACEHOLDER, Theme::text_dim()))
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(placeholder, area);
        if !pending && inner.width > 0 && inner.height > 0 {
            f.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    let width = inner.width.max(1) as usize;
    let rows = draft_rows(draft, width);
    let visible = inner.height.max(1) as usize;
    let first = rows.len().saturating_sub(visible);

    let lines: Vec<Line> = rows[first..]
        .iter()
        .map(|r| Line::from(Span::styled(r.clone(), Theme::text())))
        .collect();
    f.render_widget(Paragraph::new(lines).block(block), area);

    if !pending && inner.width > 0 && inner.height > 0 {
        let last = rows.last().map(|r| display_width(r)).unwrap_or(0);
        let x = inner.x + last.min(width - 1) as u16;
        let y = inner.y + (rows.len() - first - 1) as u16;
        f.set_cursor_position((x, y));
    }
}

/// The draft hard-wrapped to `width` columns. When the last row is full an
/// empty row follows, so the cursor has a cell to sit in.
pub fn draft_rows(draft: &str, width: usize) -> Vec<String> {
    let mut rows = wrap_chars(draft, width);
    if rows.last().is_some_and(|r| display_width(r) >= width) {
        rows.push(String::new());
    }
    rows
}
