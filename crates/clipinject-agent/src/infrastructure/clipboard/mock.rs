//! Mock clipboard for unit and integration tests.
//!
//! The real clipboard is a machine-global resource, so tests that read
//! it are racy and would clobber whatever the developer has copied.
//! `MockClipboard` holds its text in memory instead and lets tests set
//! or clear it between runs.

use std::sync::Mutex;

use crate::application::ClipboardSource;

/// An in-memory clipboard that never touches the OS.
#[derive(Default)]
pub struct MockClipboard {
    text: Mutex<Option<String>>,
}

impl MockClipboard {
    /// Creates an empty mock clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock clipboard already holding `text`.
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Mutex::new(Some(text.to_string())),
        }
    }

    /// Replaces the clipboard content.
    pub fn set_text(&self, text: &str) {
        *self.text.lock().unwrap() = Some(text.to_string());
    }

    /// Clears the clipboard.
    pub fn clear(&self) {
        *self.text.lock().unwrap() = None;
    }
}

impl ClipboardSource for MockClipboard {
    fn has_text(&self) -> bool {
        self.text.lock().unwrap().is_some()
    }

    fn read_text(&self) -> Option<String> {
        self.text.lock().unwrap().clone()
    }
}
