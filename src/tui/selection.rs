//! Selection state for the interactive picker.
//!
//! [`Selection`] is a plain reducer: the event loop feeds it [`Action`]s and reads back a
//! render model. It performs no I/O, which keeps every transition unit-testable.
//!
//! # Modes
//!
//! - `Listing`: typing edits the filter, arrows move the cursor, `enter` picks (or quits
//!   when nothing matches), `ctrl+p` opens the preview, `esc` clears the filter or quits
//!   when it is already empty
//! - `Previewing`: the selected prompt is shown word-wrapped; scroll keys move through it
//!   and only `esc` returns to the list
//! - `Quitting`: terminal; [`Selection::choice`] holds the picked text, if any

use super::events::Action;
use super::layout::{ITEM_PADDING, Viewport, preview_line_count};
use super::width::truncate_to_width;
use crate::filters::match_prompts;
use crate::models::Prompt;
use crate::utils::sanitize_for_terminal;

/// Filter input is capped at this many characters; further input is ignored
pub const MAX_FILTER_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Listing,
    Previewing,
    Quitting,
}

/// One list entry as drawn: a title row and a description row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub title: String,
    pub description: String,
    pub selected: bool,
}

/// Sanitized snapshot of the prompt being previewed
///
/// `line_count` is the wrapped height at the current `wrap_width`.
#[derive(Debug, Clone)]
struct Preview {
    text: String,
    line_count: usize,
    scroll: usize,
}

pub struct Selection<'a> {
    prompts: &'a [Prompt],
    filter_text: String,
    visible: Vec<usize>,
    cursor: usize,
    mode: Mode,
    choice: Option<String>,
    viewport: Viewport,
    preview: Option<Preview>,
}

impl<'a> Selection<'a> {
    pub fn new(prompts: &'a [Prompt]) -> Self {
        Self {
            prompts,
            filter_text: String::new(),
            visible: (0..prompts.len()).collect(),
            cursor: 0,
            mode: Mode::Listing,
            choice: None,
            viewport: Viewport::default(),
            preview: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Indices into the prompt set, in display order
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.prompts.len()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The prompt under the cursor, if any are visible
    pub fn selected(&self) -> Option<&'a Prompt> {
        let prompts = self.prompts;
        self.visible.get(self.cursor).map(|&idx| &prompts[idx])
    }

    /// Text of the confirmed prompt; only ever set on the way to `Quitting`
    pub fn choice(&self) -> Option<&str> {
        self.choice.as_deref()
    }

    pub fn into_choice(self) -> Option<String> {
        self.choice
    }

    /// Apply one input action
    pub fn handle(&mut self, action: Action) {
        if let Action::Resize(width, height) = action {
            self.resize(width, height);
            return;
        }

        match self.mode {
            Mode::Listing => self.handle_listing(action),
            Mode::Previewing => self.handle_preview(action),
            Mode::Quitting => {}
        }
    }

    /// Recompute size-derived layout; the list, cursor and mode are left alone
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::for_size(width, height);

        let wrap_width = self.viewport.wrap_width;
        if let Some(preview) = self.preview.as_mut() {
            preview.line_count = preview_line_count(&preview.text, wrap_width);
        }
        self.clamp_preview_scroll();
    }

    fn handle_listing(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(None),
            Action::ClearSearch => {
                if self.filter_text.is_empty() {
                    self.quit(None);
                } else {
                    self.filter_text.clear();
                    self.refilter();
                }
            }
            Action::MoveUp => self.move_cursor(-1),
            Action::MoveDown => self.move_cursor(1),
            Action::PageUp => self.move_cursor(-(self.viewport.page_size as isize)),
            Action::PageDown => self.move_cursor(self.viewport.page_size as isize),
            Action::Home => self.cursor = 0,
            Action::End => self.cursor = self.visible.len().saturating_sub(1),
            Action::Select => {
                let choice = self.selected().map(|prompt| prompt.display.clone());
                self.quit(choice);
            }
            Action::TogglePreview => self.open_preview(),
            Action::UpdateSearch(c) => {
                if self.filter_text.chars().count() < MAX_FILTER_CHARS {
                    self.filter_text.push(c);
                    self.refilter();
                }
            }
            Action::DeleteChar => {
                if self.filter_text.pop().is_some() {
                    self.refilter();
                }
            }
            Action::DeleteWord => {
                let kept = self
                    .filter_text
                    .trim_end_matches(char::is_whitespace)
                    .trim_end_matches(|c: char| !c.is_whitespace())
                    .len();
                if kept < self.filter_text.len() {
                    self.filter_text.truncate(kept);
                    self.refilter();
                }
            }
            Action::ClearLine => {
                if !self.filter_text.is_empty() {
                    self.filter_text.clear();
                    self.refilter();
                }
            }
            Action::Resize(..) | Action::None => {}
        }
    }

    fn handle_preview(&mut self, action: Action) {
        let page = self.viewport.preview_height as isize;
        match action {
            Action::Quit => self.quit(None),
            Action::ClearSearch => self.close_preview(),
            Action::MoveUp | Action::UpdateSearch('k') => self.scroll_preview(-1),
            Action::MoveDown | Action::UpdateSearch('j') => self.scroll_preview(1),
            Action::PageUp | Action::UpdateSearch('b') => self.scroll_preview(-page),
            Action::PageDown | Action::UpdateSearch(' ' | 'f') => self.scroll_preview(page),
            Action::Home | Action::UpdateSearch('g') => self.scroll_preview(isize::MIN),
            Action::End | Action::UpdateSearch('G') => self.scroll_preview(isize::MAX),
            _ => {}
        }
    }

    fn quit(&mut self, choice: Option<String>) {
        self.choice = choice;
        self.preview = None;
        self.mode = Mode::Quitting;
    }

    fn refilter(&mut self) {
        self.visible = match_prompts(self.prompts, &self.filter_text);
        self.cursor = 0;
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.visible.is_empty() {
            self.cursor = 0;
            return;
        }
        let last = self.visible.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    fn open_preview(&mut self) {
        let Some(prompt) = self.selected() else {
            return;
        };

        let text = sanitize_for_terminal(&prompt.display);
        let line_count = preview_line_count(&text, self.viewport.wrap_width);
        self.preview = Some(Preview { text, line_count, scroll: 0 });
        self.mode = Mode::Previewing;
    }

    fn close_preview(&mut self) {
        self.preview = None;
        self.mode = Mode::Listing;
    }

    fn max_preview_scroll(&self) -> usize {
        self.preview
            .as_ref()
            .map(|preview| preview.line_count.saturating_sub(self.viewport.preview_height))
            .unwrap_or(0)
            .min(usize::from(u16::MAX))
    }

    fn scroll_preview(&mut self, delta: isize) {
        let max = self.max_preview_scroll();
        if let Some(preview) = self.preview.as_mut() {
            preview.scroll = preview.scroll.saturating_add_signed(delta).min(max);
        }
    }

    fn clamp_preview_scroll(&mut self) {
        self.scroll_preview(0);
    }

    /// Rows for the page containing the cursor
    pub fn rows(&self) -> Vec<ListRow> {
        let page_size = self.viewport.page_size.max(1);
        let start = (self.cursor / page_size) * page_size;
        let title_width = self.viewport.width.saturating_sub(usize::from(ITEM_PADDING));

        self.visible
            .iter()
            .enumerate()
            .skip(start)
            .take(page_size)
            .map(|(pos, &idx)| {
                let prompt = &self.prompts[idx];
                ListRow {
                    title: truncate_to_width(&sanitize_for_terminal(&prompt.title()), title_width),
                    description: sanitize_for_terminal(&prompt.description()),
                    selected: pos == self.cursor,
                }
            })
            .collect()
    }

    /// Current page and page count, both 1-based; `(1, 1)` for an empty list
    pub fn page(&self) -> (usize, usize) {
        let page_size = self.viewport.page_size.max(1);
        let pages = self.visible.len().div_ceil(page_size).max(1);
        (self.cursor / page_size + 1, pages)
    }

    /// Sanitized text of the open preview
    pub fn preview_text(&self) -> Option<&str> {
        self.preview.as_ref().map(|preview| preview.text.as_str())
    }

    /// Scroll offset and wrapped line count of the open preview
    pub fn preview_position(&self) -> Option<(usize, usize)> {
        self.preview.as_ref().map(|preview| (preview.scroll, preview.line_count))
    }
}
