//! Clipboard handoff for the chosen prompt.

use anyhow::{Context, Result, bail};
use arboard::Clipboard;
use tracing::debug;

/// Largest prompt accepted for copying (10MB)
const MAX_CLIPBOARD_SIZE: usize = 10 * 1024 * 1024;

/// Seam between validation and the platform clipboard
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")
    }
}

/// Check a prompt is copyable without touching the system clipboard
fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        bail!("Cannot copy empty text to clipboard");
    }

    if text.len() > MAX_CLIPBOARD_SIZE {
        bail!("Text too large for clipboard ({} bytes, max {})", text.len(), MAX_CLIPBOARD_SIZE);
    }

    Ok(())
}

fn copy_with_provider(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_clipboard_text(text)?;
    provider.set_text(text)?;
    debug!(bytes = text.len(), "Copied prompt to clipboard");
    Ok(())
}

/// Copy a prompt to the system clipboard
///
/// # Errors
///
/// Returns an error if:
/// - Text is empty or larger than 10MB
/// - The system clipboard is unavailable (headless session, no display server)
/// - The clipboard rejects the write
///
/// Validation runs first, so invalid input fails the same way with or without a
/// clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    validate_clipboard_text(text)?;

    let mut clipboard = SystemClipboard::new()?;
    copy_with_provider(text, &mut clipboard)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: usize = 1024 * 1024;

    /// In-memory clipboard; `broken` makes every write fail
    #[derive(Default)]
    struct MockClipboard {
        contents: Option<String>,
        broken: bool,
    }

    impl ClipboardProvider for MockClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.broken {
                bail!("clipboard owner went away");
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    fn copy_to_mock(text: &str) -> (Result<()>, MockClipboard) {
        let mut mock = MockClipboard::default();
        let result = copy_with_provider(text, &mut mock);
        (result, mock)
    }

    #[test]
    fn test_prompt_copied_verbatim() {
        for text in [
            "refactor the session loader",
            "Fix this:\n\n```rust\nfn main() {}\n```\n",
            "traduis ce texte en 日本語 🚀",
            "   \n\t  ",
        ] {
            let (result, mock) = copy_to_mock(text);
            assert!(result.is_ok(), "failed to copy {:?}", text);
            assert_eq!(mock.contents.as_deref(), Some(text));
        }
    }

    #[test]
    fn test_empty_prompt_rejected() {
        let (result, mock) = copy_to_mock("");
        assert!(result.unwrap_err().to_string().contains("empty"));
        assert!(mock.contents.is_none());
    }

    #[test]
    fn test_size_limit_boundary() {
        let (result, mock) = copy_to_mock(&"a".repeat(10 * MB));
        assert!(result.is_ok());
        assert_eq!(mock.contents.map(|c| c.len()), Some(10 * MB));

        let (result, mock) = copy_to_mock(&"a".repeat(10 * MB + 1));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("too large"));
        assert!(message.contains(&format!("{} bytes", 10 * MB + 1)));
        assert!(mock.contents.is_none());
    }

    #[test]
    fn test_size_limit_counts_bytes() {
        // 3M four-byte characters: 12MB
        let (result, _) = copy_to_mock(&"🚀".repeat(3 * MB));
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_provider_failure_propagates() {
        let mut mock = MockClipboard { broken: true, ..Default::default() };
        let result = copy_with_provider("hello", &mut mock);
        assert!(result.unwrap_err().to_string().contains("clipboard owner went away"));
    }

    #[test]
    fn test_validation_runs_before_clipboard_access() {
        // These fail identically on machines without a clipboard
        assert!(copy_to_clipboard("").unwrap_err().to_string().contains("empty"));
        let large = "a".repeat(11 * MB);
        assert!(copy_to_clipboard(&large).unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_system_clipboard() {
        if std::env::var("ENABLE_CLIPBOARD_TESTS").is_err() {
            return;
        }

        if let Err(e) = copy_to_clipboard("prompt-finder clipboard test") {
            eprintln!("System clipboard unavailable: {:#}", e);
        }
    }
}
