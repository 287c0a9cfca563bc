use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut text to at most `max_width` columns, marking the cut with `…`
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let target = max_width.saturating_sub(char_width(ELLIPSIS));
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let cw = char_width(c);
        if used + cw > target {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push(ELLIPSIS);
    out
}

/// The longest suffix of `text` that fits in `max_width` columns
pub fn tail_to_width(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();

    for (idx, c) in text.char_indices().rev() {
        let cw = char_width(c);
        if used + cw > max_width {
            break;
        }
        used += cw;
        start = idx;
    }

    &text[start..]
}
