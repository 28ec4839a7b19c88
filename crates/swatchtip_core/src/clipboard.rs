//! Clipboard writes with a legacy fallback.
//!
//! The primary path is the platform's asynchronous clipboard API. If it is
//! missing or rejects the write, the text goes into a temporary off-screen
//! element which is selected and copied with the legacy copy command. The
//! temporary element is removed on every exit path.

use std::future::Future;

use crate::error::{ClipboardError, Result};

/// Platform clipboard access.
pub trait ClipboardBackend {
    /// Temporary element holding the text for the legacy copy.
    type Scratch;

    /// Write through the asynchronous clipboard API.
    fn write_async(&self, text: &str) -> impl Future<Output = Result<()>>;

    /// Create the off-screen scratch element containing `text` and attach it.
    fn attach_scratch(&self, text: &str) -> Result<Self::Scratch>;

    /// Focus and select the scratch content, then run the copy command.
    fn copy_selection(&self, scratch: &Self::Scratch) -> Result<()>;

    /// Remove the scratch element again.
    fn detach_scratch(&self, scratch: Self::Scratch);
}

/// Detaches the scratch element when dropped.
struct ScratchGuard<'a, B: ClipboardBackend> {
    backend: &'a B,
    scratch: Option<B::Scratch>,
}

impl<B: ClipboardBackend> ScratchGuard<'_, B> {
    fn scratch(&self) -> Result<&B::Scratch> {
        self.scratch
            .as_ref()
            .ok_or_else(|| ClipboardError::Scratch("scratch element already detached".into()))
    }
}

impl<B: ClipboardBackend> Drop for ScratchGuard<'_, B> {
    fn drop(&mut self) {
        if let Some(scratch) = self.scratch.take() {
            self.backend.detach_scratch(scratch);
        }
    }
}

/// Copy `text` through the legacy path only.
pub fn copy_with_fallback<B: ClipboardBackend>(backend: &B, text: &str) -> Result<()> {
    let guard = ScratchGuard {
        backend,
        scratch: Some(backend.attach_scratch(text)?),
    };
    backend.copy_selection(guard.scratch()?)
}

/// Copy `text` to the clipboard.
///
/// Tries the asynchronous API first and falls back to the legacy copy.
/// Returns `false` only when both fail; errors are logged, not returned.
pub async fn write_text<B: ClipboardBackend>(backend: &B, text: &str) -> bool {
    match backend.write_async(text).await {
        Ok(()) => {
            log::debug!("copied {:?} to clipboard", text);
            return true;
        }
        Err(e) => log::warn!("clipboard write failed ({}), trying legacy copy", e),
    }

    match copy_with_fallback(backend, text) {
        Ok(()) => {
            log::debug!("copied {:?} with legacy copy", text);
            true
        }
        Err(e) => {
            log::warn!("legacy copy failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockClipboard;

    #[test]
    fn test_primary_path_skips_fallback() {
        let clipboard = MockClipboard::new(true, true);

        assert!(pollster::block_on(write_text(&clipboard, "1A2B3C")));

        assert_eq!(clipboard.written(), vec!["1A2B3C".to_string()]);
        assert_eq!(clipboard.attached(), 0);
    }

    #[test]
    fn test_fallback_after_primary_failure() {
        let clipboard = MockClipboard::new(false, true);

        assert!(pollster::block_on(write_text(&clipboard, "FF0000")));

        assert_eq!(clipboard.copied(), vec!["FF0000".to_string()]);
        assert_eq!(clipboard.attached(), 1);
        assert_eq!(clipboard.detached(), 1);
    }

    #[test]
    fn test_both_paths_fail() {
        let clipboard = MockClipboard::new(false, false);

        assert!(!pollster::block_on(write_text(&clipboard, "FF0000")));

        assert!(clipboard.copied().is_empty());
        // Scratch element is removed even though the copy failed
        assert_eq!(clipboard.attached(), 1);
        assert_eq!(clipboard.detached(), 1);
    }

    #[test]
    fn test_attach_failure_leaves_nothing_to_detach() {
        let clipboard = MockClipboard::new(false, true).failing_attach();

        assert_eq!(
            copy_with_fallback(&clipboard, "00FF00"),
            Err(ClipboardError::Scratch("attach refused".into()))
        );
        assert_eq!(clipboard.detached(), 0);
    }
}
