//! System clipboard access via `arboard`.
//!
//! Clipboard reads are best-effort. The clipboard is a shared resource
//! that other processes can lock or clear at any moment, so every
//! failure here collapses to "no text available" and the injection is
//! skipped instead of erroring out.

pub mod mock;

use tracing::debug;

use crate::application::ClipboardSource;

/// Reads the real system clipboard.
///
/// An `arboard::Clipboard` handle is opened per call rather than held
/// for the lifetime of the agent. Holding the handle would keep the
/// clipboard connection open between hotkey presses for no benefit, and
/// on some platforms it pins clipboard ownership.
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSource for SystemClipboard {
    fn has_text(&self) -> bool {
        self.read_text().is_some()
    }

    fn read_text(&self) -> Option<String> {
        let mut clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => clipboard,
            Err(err) => {
                debug!(error = %err, "clipboard unavailable");
                return None;
            }
        };
        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(err) => {
                debug!(error = %err, "clipboard holds no text");
                None
            }
        }
    }
}
