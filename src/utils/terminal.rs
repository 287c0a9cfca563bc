//! Terminal output sanitization
//!
//! Prompt text comes straight from log files and may contain escape sequences (pasted
//! shell output is common). Anything drawn to the terminal or echoed after a copy goes
//! through [`sanitize_for_terminal`] first so it cannot move the cursor, recolor the
//! screen or set the window title.

const TAB_WIDTH: usize = 4;

/// Strips escape sequences and control characters from text meant for display
///
/// - CSI sequences (`ESC [ ... final`) are removed
/// - OSC sequences (`ESC ] ... BEL` or `ESC ] ... ESC \`) are removed
/// - Tabs are expanded to spaces, newlines are kept
/// - Every other control character is dropped
///
/// # Examples
///
/// ```
/// use prompt_finder::utils::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mred\x1b[0m"), "red");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\x1b' => match chars.peek() {
                Some('[') => {
                    chars.next();
                    // Parameter and intermediate bytes run until a final byte in @..~
                    for next in chars.by_ref() {
                        if ('@'..='~').contains(&next) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if next == '\x07' {
                            break;
                        }
                        if next == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                // Two-byte escapes such as ESC 7 / ESC 8
                Some(_) => {
                    chars.next();
                }
                None => {}
            },
            '\t' => result.extend(std::iter::repeat_n(' ', TAB_WIDTH)),
            '\n' => result.push('\n'),
            c if c.is_control() => {}
            c => result.push(c),
        }
    }

    result
}
