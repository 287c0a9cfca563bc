use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

/// Terminal size assumed until the first resize arrives
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 20;

/// Rows per list entry: title plus description
pub const ITEM_HEIGHT: u16 = 2;
/// Left padding of unselected titles and descriptions
pub const ITEM_PADDING: u16 = 4;
/// Filter input indent plus the `> ` prompt
pub const FILTER_PREFIX_WIDTH: u16 = 4;

const MIN_LIST_HEIGHT: u16 = 4;
const PREVIEW_MARGIN_X: u16 = 2;
const PREVIEW_HEADER_HEIGHT: u16 = 2;

/// Listing screen:
/// - Blank top row
/// - Prompt list (two rows per entry)
/// - Filter input
/// - Pagination
/// - Help line
pub struct ListLayout {
    pub list_area: Rect,
    pub filter_area: Rect,
    pub pagination_area: Rect,
    pub help_area: Rect,
}

impl ListLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Top margin
            Constraint::Min(0),    // List
            Constraint::Length(1), // Gap
            Constraint::Length(1), // Filter input
            Constraint::Length(1), // Gap
            Constraint::Length(1), // Pagination
            Constraint::Length(1), // Gap
            Constraint::Length(1), // Help
        ])
        .split(area);

        Self {
            list_area: chunks[1],
            filter_area: chunks[3],
            pagination_area: chunks[5],
            help_area: chunks[7],
        }
    }
}

/// Preview screen: a rounded box with a fixed title above the scrolling content
pub struct PreviewLayout {
    pub frame_area: Rect,
    pub title_area: Rect,
    pub content_area: Rect,
}

impl PreviewLayout {
    pub fn new(area: Rect) -> Self {
        let [_, body] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        let frame_area = body.inner(Margin::new(PREVIEW_MARGIN_X, 0));
        let inner = preview_block().inner(frame_area);
        let [title_area, content_area] =
            Layout::vertical([Constraint::Length(PREVIEW_HEADER_HEIGHT), Constraint::Min(0)])
                .areas(inner);

        Self { frame_area, title_area, content_area }
    }
}

/// Border and padding of the preview box
pub fn preview_block<'a>() -> Block<'a> {
    Block::bordered().border_type(BorderType::Rounded).padding(Padding::new(2, 2, 1, 1))
}

/// Preview body wrapped at the content width, shared by drawing and scroll clamping
pub fn preview_paragraph(text: &str) -> Paragraph<'_> {
    Paragraph::new(text).wrap(Wrap { trim: false })
}

/// Number of rows `text` occupies in the preview when wrapped at `width` columns
pub fn preview_line_count(text: &str, width: usize) -> usize {
    let width = u16::try_from(width).unwrap_or(u16::MAX).max(1);
    preview_paragraph(text).line_count(width)
}

/// Size-derived values the selection state needs for paging and wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub page_size: usize,
    pub wrap_width: usize,
    pub preview_height: usize,
}

impl Viewport {
    pub fn for_size(width: u16, height: u16) -> Self {
        let area = Rect::new(0, 0, width, height);

        let list_height = ListLayout::new(area).list_area.height;
        let list_height = (list_height - list_height % ITEM_HEIGHT).max(MIN_LIST_HEIGHT);

        let preview = PreviewLayout::new(area);

        Self {
            width: usize::from(width),
            page_size: usize::from(list_height / ITEM_HEIGHT),
            wrap_width: usize::from(preview.content_area.width.max(1)),
            preview_height: usize::from(preview.content_area.height.max(1)),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::for_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
