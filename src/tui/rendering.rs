use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::layout::{
    FILTER_PREFIX_WIDTH, ITEM_PADDING, ListLayout, PreviewLayout, preview_block, preview_paragraph,
};
use super::selection::{ListRow, Mode, Selection};
use super::width::tail_to_width;

const ACCENT: Color = Color::Rgb(175, 135, 255);
const MUTED: Color = Color::Rgb(108, 108, 108);
const LIGHT_MUTED: Color = Color::Rgb(124, 124, 124);
const SEPARATOR: Color = Color::Rgb(68, 68, 68);
const BORDER: Color = Color::Rgb(95, 175, 255);

const FILTER_PLACEHOLDER: &str = "Type to filter (use '%p project' to filter by project)...";
const PREVIEW_TITLE: &str = "Preview - Press 'esc' to exit";
const HELP_ENTRIES: [(&str, &str); 4] =
    [("↑/↓", "navigate"), ("ctrl+p", "preview"), ("enter", "select"), ("esc", "quit")];

/// Render the entire UI for the current mode
pub fn render_ui(frame: &mut Frame, selection: &Selection) {
    match selection.mode() {
        Mode::Listing => render_listing(frame, selection),
        Mode::Previewing => render_preview(frame, selection),
        Mode::Quitting => {}
    }
}

fn render_listing(frame: &mut Frame, selection: &Selection) {
    let layout = ListLayout::new(frame.area());

    render_rows(frame, layout.list_area, &selection.rows(), selection.total());
    render_filter_input(frame, layout.filter_area, selection.filter_text());
    if !selection.visible().is_empty() {
        render_pagination(frame, layout.pagination_area, selection);
    }
    render_help(frame, layout.help_area);
}

fn indent(width: u16) -> String {
    " ".repeat(usize::from(width))
}

fn render_rows(frame: &mut Frame, area: Rect, rows: &[ListRow], total: usize) {
    let muted = Style::default().fg(MUTED);

    if rows.is_empty() {
        let message = if total == 0 { "No prompts" } else { "No matching prompts" };
        let line = Line::from(Span::styled(format!("{}{}", indent(ITEM_PADDING), message), muted));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let mut lines = Vec::with_capacity(rows.len() * 2);
    for row in rows {
        let title = if row.selected {
            Line::from(Span::styled(
                format!("{}> {}", indent(ITEM_PADDING - 2), row.title),
                Style::default().fg(ACCENT),
            ))
        } else {
            Line::from(format!("{}{}", indent(ITEM_PADDING), row.title))
        };
        lines.push(title);
        lines.push(Line::from(Span::styled(
            format!("{}{}", indent(ITEM_PADDING), row.description),
            muted,
        )));
    }

    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

fn render_filter_input(frame: &mut Frame, area: Rect, filter_text: &str) {
    let prefix = format!("{}> ", indent(FILTER_PREFIX_WIDTH - 2));
    let available = usize::from(area.width.saturating_sub(FILTER_PREFIX_WIDTH + 1));

    let (body, body_width) = if filter_text.is_empty() {
        (Span::styled(FILTER_PLACEHOLDER, Style::default().fg(MUTED)), 0)
    } else {
        // Long input scrolls so the end stays visible
        let visible = tail_to_width(filter_text, available);
        (Span::raw(visible), visible.width())
    };

    frame.render_widget(Paragraph::new(Line::from(vec![Span::raw(prefix), body])), area);

    let cursor_x = area.x + FILTER_PREFIX_WIDTH + body_width as u16;
    frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
}

fn render_pagination(frame: &mut Frame, area: Rect, selection: &Selection) {
    let (page, pages) = selection.page();
    let text = format!(
        "{}{}/{} pages • {} of {} prompts",
        indent(ITEM_PADDING),
        page,
        pages,
        selection.visible().len(),
        selection.total()
    );
    frame.render_widget(Paragraph::new(Span::styled(text, Style::default().fg(MUTED))), area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(indent(ITEM_PADDING))];
    for (idx, (key, desc)) in HELP_ENTRIES.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
            spans.push(Span::styled("•", Style::default().fg(SEPARATOR)));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(*key, Style::default().fg(MUTED)));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Style::default().fg(LIGHT_MUTED)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_preview(frame: &mut Frame, selection: &Selection) {
    let layout = PreviewLayout::new(frame.area());

    let block = preview_block().border_style(Style::default().fg(BORDER));
    frame.render_widget(block, layout.frame_area);

    let title = Span::styled(PREVIEW_TITLE, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    frame.render_widget(Paragraph::new(title), layout.title_area);

    if let (Some(text), Some((scroll, _))) = (selection.preview_text(), selection.preview_position()) {
        let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
        frame.render_widget(preview_paragraph(text).scroll((scroll, 0)), layout.content_area);
    }
}
