//! Clipboard handoff for composed prompts
//!
//! The composed prompt is the only thing this crate ever writes outside the terminal.
//! [`copy_prompt`] validates it first and only then opens the system clipboard, so
//! headless runs still get a precise error for bad input.

use anyhow::{Context, Result, bail};
use arboard::Clipboard;
use tracing::{debug, warn};

/// Largest prompt accepted for the clipboard (10MB)
const MAX_PROMPT_BYTES: usize = 10 * 1024 * 1024;

/// Clipboard sink; the system implementation is swapped for a mock in tests
pub(crate) trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn open() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")
    }
}

fn validate_prompt(prompt: &str) -> Result<()> {
    if prompt.is_empty() {
        bail!("Cannot copy an empty prompt to the clipboard");
    }

    if prompt.len() > MAX_PROMPT_BYTES {
        bail!("Prompt too large for clipboard ({} bytes, max {})", prompt.len(), MAX_PROMPT_BYTES);
    }

    Ok(())
}

pub(crate) fn copy_with_provider(prompt: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_prompt(prompt)?;
    provider.set_text(prompt)?;
    debug!(bytes = prompt.len(), "prompt copied to clipboard");
    Ok(())
}

/// Copy a composed prompt to the system clipboard.
///
/// # Errors
/// Returns error if:
/// - The prompt is empty
/// - The prompt is larger than 10MB
/// - The system clipboard is unavailable (headless session, no display server)
/// - The clipboard rejects the write
pub fn copy_prompt(prompt: &str) -> Result<()> {
    validate_prompt(prompt)?;

    let mut clipboard = SystemClipboard::open().inspect_err(|e| {
        warn!(error = %e, "system clipboard unavailable");
    })?;
    copy_with_provider(prompt, &mut clipboard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockClipboard {
        text: Option<String>,
        fail: bool,
    }

    impl ClipboardProvider for MockClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                bail!("Mock clipboard error");
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_prompt_with_mock() {
        let mut mock = MockClipboard::default();
        let prompt = "[배경 정보]\n- 1/5: alpha\n\n[요청]\n위 내용을 바탕으로 도와주세요.";

        copy_with_provider(prompt, &mut mock).unwrap();
        assert_eq!(mock.text.as_deref(), Some(prompt));
    }

    #[test]
    fn test_provider_failure_propagates() {
        let mut mock = MockClipboard { fail: true, ..Default::default() };
        let err = copy_with_provider("prompt", &mut mock).unwrap_err();
        assert!(err.to_string().contains("Mock clipboard error"));
    }

    #[test]
    fn test_empty_prompt_rejected_before_provider() {
        let mut mock = MockClipboard::default();
        let err = copy_with_provider("", &mut mock).unwrap_err();
        assert!(err.to_string().contains("empty"));
        assert!(mock.text.is_none());
    }

    #[test]
    fn test_size_limit_boundary() {
        let mut mock = MockClipboard::default();
        let at_limit = "a".repeat(MAX_PROMPT_BYTES);
        assert!(copy_with_provider(&at_limit, &mut mock).is_ok());

        let over = "a".repeat(MAX_PROMPT_BYTES + 1);
        let err = copy_with_provider(&over, &mut mock).unwrap_err();
        assert!(err.to_string().contains("too large"));
        assert!(err.to_string().contains("bytes"));
    }

    #[test]
    fn test_size_counted_in_bytes() {
        // Each Hangul syllable is 3 bytes in UTF-8
        let mut mock = MockClipboard::default();
        let prompt = "가".repeat(MAX_PROMPT_BYTES / 3 + 1);
        assert!(copy_with_provider(&prompt, &mut mock).is_err());
    }

    #[test]
    fn test_copy_prompt_validates_before_clipboard_access() {
        let err = copy_prompt("").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
